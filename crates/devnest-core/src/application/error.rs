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
    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory adapter state could not be locked.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,

    /// Project directory already exists and overwrite was not requested.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Target path exists but is not a directory.
    #[error("Path exists and is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// An external command could not be started.
    #[error("Failed to run '{command}': {reason}")]
    CommandFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --overwrite-existing-project to overwrite it (destructive)".into(),
                "Choose a different project name".into(),
            ],
            Self::NotADirectory { path } => vec![
                format!("'{}' is a file, not a directory", path.display()),
                "Move or rename the file, or choose a different project name".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Ensure '{}' is installed and in your PATH", command),
                "Administrative commands usually need root privileges".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } | Self::NotADirectory { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::LockPoisoned
            | Self::RenderingFailed { .. }
            | Self::CommandFailed { .. } => ErrorCategory::Internal,
        }
    }
}
