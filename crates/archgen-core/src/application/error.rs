//! Application layer errors.
//!
//! These errors represent failures in orchestration and at the ports, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::ToolAction;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The external build tool reported failure (non-zero exit status or a
    /// spawn failure). Whether this aborts the run depends on the action:
    /// reference attachment is best-effort, everything else is fatal.
    #[error("build tool failed: {action} for '{subject}': {reason}")]
    ToolFailure {
        action: ToolAction,
        subject: String,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The namespace root could not be derived from a project folder name
    /// (no `.` in the name). Treated as a configuration error: the run
    /// aborts immediately.
    #[error("cannot derive namespace root from '{path}': {reason}")]
    NamespaceDerivation { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ToolFailure { action, subject, .. } => vec![
                format!("The dotnet CLI failed while running {action} for '{subject}'"),
                "Check that the .NET SDK is installed and `dotnet` is on your PATH".into(),
                "Re-run with -v to see the exact command".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::NamespaceDerivation { path, .. } => vec![
                format!("Project folder '{}' has no '.' in its name", path.display()),
                "Project folders are named {solution}.{layer}; use a plain solution name".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ToolFailure { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::NamespaceDerivation { .. } => ErrorCategory::Configuration,
        }
    }
}
