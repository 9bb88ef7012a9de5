use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic in callers)
/// - Categorizable (for CLI display)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("target directory must be absolute: {path}")]
    RelativeTargetDir { path: String },

    // ========================================================================
    // Layout Constraint Violations
    // ========================================================================
    #[error("absolute paths not allowed in a project layout: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("parent-directory components not allowed in a project layout: {path}")]
    ParentDirNotAllowed { path: String },

    #[error("duplicate path in project layout: {path}")]
    DuplicatePath { path: String },

    #[error("project layout is empty")]
    EmptyLayout,
}

impl DomainError {
    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::InvalidPackageName { .. }
            | Self::RelativeTargetDir { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. }
            | Self::ParentDirNotAllowed { .. }
            | Self::DuplicatePath { .. }
            | Self::EmptyLayout => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
