// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (options and trees are values, so are their failures)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("'{name}' is not a valid identifier: {reason}")]
    InvalidIdentifier { name: String, reason: String },

    #[error("inconsistent options: {reason}")]
    InconsistentOptions { reason: String },

    #[error("Required option missing after defaults: {field}")]
    MissingOption { field: &'static str },

    // ========================================================================
    // Environment Errors
    // ========================================================================
    #[error("setuptools {found} is too old, at least {required} is required")]
    OldSetuptools { found: String, required: String },

    // ========================================================================
    // Pipeline Errors
    // ========================================================================
    #[error("no action named '{name}' in the pipeline")]
    UnknownAction { name: String },
}

impl DomainError {
    pub(crate) fn invalid_identifier(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        Self::InconsistentOptions {
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { name, .. } => vec![
                format!("'{}' cannot be used as a Python package name", name),
                "Use letters, digits and underscores, starting with a letter".into(),
                "Python keywords such as 'def' or 'class' are not allowed".into(),
                "Pass an explicit name with --package".into(),
            ],
            Self::InconsistentOptions { reason } => vec![
                format!("Details: {}", reason),
                "Drop --update to create a fresh project".into(),
            ],
            Self::OldSetuptools { required, .. } => vec![
                format!("Upgrade setuptools to {} or newer:", required),
                "  pip install -U setuptools".into(),
            ],
            Self::UnknownAction { name } => vec![
                format!("Extension refers to a missing action: {}", name),
                "This is likely a bug in an extension".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. }
            | Self::InconsistentOptions { .. }
            | Self::MissingOption { .. } => ErrorCategory::Validation,
            Self::OldSetuptools { .. } => ErrorCategory::Environment,
            Self::UnknownAction { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Environment,
    Internal,
}

/// Convenient result alias for pure domain code.
pub type DomainResult<T> = Result<T, DomainError>;
