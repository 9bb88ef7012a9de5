//! Unified error handling for Kotlinit Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Kotlinit Core operations.
#[derive(Debug, Error, Clone)]
pub enum KotlinitError {
    /// Errors from the domain layer (input shape violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl KotlinitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(DomainError::InvalidProjectName { .. }) => vec![
                "Use letters, numbers, hyphens, and underscores".into(),
                "Examples: demo-app, my_service, Project123".into(),
            ],
            Self::Domain(DomainError::InvalidPackageName { .. }) => vec![
                "Use dot-separated identifiers, each starting with a letter".into(),
                "Examples: com.example, org.demo.app".into(),
            ],
            Self::Domain(_) => vec!["Check your project configuration".into()],
            Self::Application(ApplicationError::Filesystem { path, .. }) => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::Application(ApplicationError::Rendering { .. }) => {
                vec!["This is likely a bug in the built-in templates".into()]
            }
            Self::Internal { .. } => vec![
                "This appears to be a bug in Kotlinit".into(),
                "Please report this issue at: https://github.com/kotlinit/kotlinit/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(_) | Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type KotlinitResult<T> = Result<T, KotlinitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn validation_errors_categorize_as_validation() {
        let err: KotlinitError = DomainError::InvalidProjectName {
            name: ".x".into(),
            reason: "bad".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn filesystem_errors_categorize_as_internal() {
        let err: KotlinitError = ApplicationError::Filesystem {
            path: PathBuf::from("/tmp/x"),
            operation: "write file",
            reason: "denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn filesystem_suggestions_name_the_path() {
        let err: KotlinitError = ApplicationError::Filesystem {
            path: PathBuf::from("/tmp/x"),
            operation: "create directory",
            reason: "denied".into(),
        }
        .into();
        assert!(err.suggestions().iter().any(|s| s.contains("/tmp/x")));
    }
}
