//! Core domain layer for Kotlinit.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O is handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable values**: All domain objects are Clone + PartialEq

pub mod artifact;
pub mod error;
pub mod paths;
pub mod spec;

// Re-exports for convenience
pub use artifact::{FileArtifact, ProjectLayout, RelativePath};
pub use error::{DomainError, ErrorCategory};
pub use paths::{ProjectPaths, SOURCE_LANGUAGE_DIR};
pub use spec::{PackageName, ProjectName, ProjectSpec};
