//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed. Carries the path and the operation that
    /// failed so callers can build a user-facing report.
    #[error("failed to {operation} at {path}: {reason}")]
    Filesystem {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// Template rendering failed.
    #[error("template rendering failed: {reason}")]
    Rendering { reason: String },
}

impl ApplicationError {
    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } | Self::Rendering { .. } => ErrorCategory::Internal,
        }
    }
}
