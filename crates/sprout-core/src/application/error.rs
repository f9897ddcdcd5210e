//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing a project or running commands.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Target directory exists and neither update nor force was requested.
    #[error("Directory {path} already exists")]
    DirectoryExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// External command could not run or exited non-zero.
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --update to merge new files into the existing project".into(),
                "Use --force to overwrite existing files (destructive)".into(),
                "Or choose a different project name".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Make sure `{}` works in this directory", command),
                "Use --no-git to skip repository initialization".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::CommandFailed { .. } => ErrorCategory::External,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
