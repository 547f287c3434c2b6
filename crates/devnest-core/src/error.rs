//! Unified error handling for devnest core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for devnest core operations.
#[derive(Debug, Error, Clone)]
pub enum DevnestError {
    /// Errors from the domain layer (policy violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl DevnestError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
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
pub type DevnestResult<T> = Result<T, DevnestError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn project_exists_is_validation_and_names_flag() {
        let err: DevnestError = ApplicationError::ProjectExists {
            path: PathBuf::from("../demo-app"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("--overwrite-existing-project"))
        );
    }

    #[test]
    fn domain_message_is_transparent() {
        let err: DevnestError = DomainError::InvalidProjectName {
            name: "ABC".into(),
            reason: "name must be lowercase".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid project name 'ABC': name must be lowercase"
        );
    }

    #[test]
    fn filesystem_error_is_internal() {
        let err: DevnestError = ApplicationError::FilesystemError {
            path: PathBuf::from("/x"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
