//! Kotlinit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Kotlinit
//! project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          kotlinit-cli (CLI)             │
//! │   (prompts, validation, reporting)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          GeneratorService               │
//! │    (plan → render → write → chmod)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//! ┌─────────────────────────────────────────┐
//! │     Application Ports (Traits)          │
//! │    (Filesystem, TemplateRenderer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//! ┌─────────────────────────────────────────┐
//! │    kotlinit-adapters (Infrastructure)   │
//! │ (LocalFilesystem, GradleKotlinTemplates)│
//! └─────────────────────────────────────────┘
//!                    │
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectSpec, ProjectPaths, Layout)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kotlinit_core::{
//!     application::GeneratorService,
//!     domain::ProjectSpec,
//! };
//!
//! # fn demo(renderer: Box<dyn kotlinit_core::application::ports::TemplateRenderer>,
//! #         filesystem: Box<dyn kotlinit_core::application::ports::Filesystem>)
//! #         -> kotlinit_core::error::KotlinitResult<()> {
//! // 1. Build a validated spec from externally-collected input
//! let spec = ProjectSpec::new(
//!     "/tmp/ws",
//!     "demo-app".parse()?,
//!     "com.example".parse()?,
//! )?;
//!
//! // 2. Generate with injected adapters
//! let service = GeneratorService::new(renderer, filesystem);
//! service.generate(&spec)?;
//! # Ok(())
//! # }
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratorService,
        ports::{Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        FileArtifact, PackageName, ProjectLayout, ProjectName, ProjectPaths, ProjectSpec,
        RelativePath,
    };
    pub use crate::error::{KotlinitError, KotlinitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
