//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kotlinit-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ProjectLayout, ProjectPaths, ProjectSpec};
use crate::error::KotlinitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kotlinit_adapters::filesystem::LocalFilesystem` (production)
/// - `kotlinit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Directory creation is create-if-absent and recursive; a pre-existing
///   directory is not an error.
/// - File writes overwrite unconditionally (last-write-wins).
/// - `set_executable` is a no-op on platforms without a POSIX permission
///   model.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KotlinitResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> KotlinitResult<()>;

    /// Set the POSIX execute bits (owner/group/other) on a file.
    fn set_executable(&self, path: &Path) -> KotlinitResult<()>;
}

/// Port for template rendering.
///
/// Implemented by `kotlinit_adapters::templates::GradleKotlinTemplates`,
/// which holds the fixed set of Gradle/Kotlin file templates. Rendering is a
/// pure function of the spec and derived paths: identical inputs must produce
/// byte-identical layouts.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render every file artifact of the project into a layout.
    fn render(&self, spec: &ProjectSpec, paths: &ProjectPaths) -> KotlinitResult<ProjectLayout>;
}
