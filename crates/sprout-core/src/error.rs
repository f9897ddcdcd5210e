//! Unified error handling for Sprout Core.
//!
//! Wraps domain and application errors behind one type with user-actionable
//! suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Sprout Core operations.
#[derive(Debug, Error, Clone)]
pub enum SproutError {
    /// Errors from the domain layer (invalid or inconsistent options).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (materialization, commands).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SproutError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Sprout".into(),
                "Re-run with -vv and include the output when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Environment => ErrorCategory::Environment,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Environment,
    /// Filesystem or external command failures.
    External,
    Internal,
}

/// Convenient result type alias.
pub type SproutResult<T> = Result<T, SproutError>;
