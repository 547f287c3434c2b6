// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid author {field} '{value}': {reason}")]
    InvalidAuthor {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template '{template}' has no files")]
    EmptyTemplate { template: String },

    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Use only lowercase letters a-z, digits 0-9 and dashes (-)".into(),
                "Start with a letter and end with a letter or digit".into(),
                "Examples: my-project, demo-app, service2".into(),
            ],
            Self::InvalidAuthor { field, .. } => vec![
                format!("Set author.{field} to a single line of plain text"),
                format!("Check DEVNEST_AUTHOR__{} and your config file", field.to_uppercase()),
            ],
            Self::EmptyTemplate { template } => vec![
                format!("Template '{}' is corrupted", template),
                "Please report this issue".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::InvalidAuthor { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidTemplate(_)
            | Self::EmptyTemplate { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
