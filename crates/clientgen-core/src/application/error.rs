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
    /// No stub template exists for the requested kind, neither in the custom
    /// stub directory nor among the bundled defaults.
    #[error("stub not found: {stub}")]
    StubNotFound { stub: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Test generation was asked for a class whose source file is missing.
    #[error("source class {fqdn} does not exist (expected at {path})")]
    SourceClassMissing { fqdn: String, path: PathBuf },

    /// The FQDN parsed to a different kind than the command targets.
    #[error("{fqdn} is not a {expected} class")]
    KindMismatch { fqdn: String, expected: String },

    /// Macro cache access failed (corrupt file, unwritable cache dir, ...).
    #[error("macro cache error: {reason}")]
    Cache { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StubNotFound { stub } => vec![
                format!("No template found for: {stub}"),
                "Check stubs.custom_path in your configuration".into(),
                "Remove the custom path to fall back to the bundled stubs".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::SourceClassMissing { fqdn, .. } => vec![
                format!("The class {fqdn} has not been generated yet"),
                "Create the class first with the matching generator command".into(),
                "Example: clientgen attribute <client> <name>".into(),
            ],
            Self::KindMismatch { expected, .. } => vec![
                format!("This command generates tests for {expected} classes only"),
                "Use the test subcommand matching the class suffix".into(),
            ],
            Self::Cache { .. } => vec![
                "Try: clientgen macros clear-cache".into(),
                "Check that the cache directory is writable".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StubNotFound { .. } | Self::SourceClassMissing { .. } => ErrorCategory::NotFound,
            Self::KindMismatch { .. } => ErrorCategory::Validation,
            Self::Filesystem { .. } | Self::Cache { .. } => ErrorCategory::Internal,
        }
    }
}
