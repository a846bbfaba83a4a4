use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may record them in reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid {what} '{value}': {reason}")]
    InvalidIdentifier {
        what: &'static str,
        value: String,
        reason: String,
    },

    #[error("malformed class FQDN '{fqdn}': {reason}")]
    MalformedFqdn { fqdn: String, reason: String },

    /// The class name does not end with a recognised generated-class suffix.
    ///
    /// Callers must treat this as "cannot determine type" and fail the
    /// operation with a user-facing message, never a crash.
    #[error(
        "class '{class_name}' does not match a known suffix (Attribute, Request, Response, Factory)"
    )]
    UnknownClassSuffix { class_name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { what, value, .. } => vec![
                format!("'{value}' is not a valid {what}"),
                "Use a PHP class-name style identifier: letters, digits and underscores, \
                 not starting with a digit"
                    .into(),
                "Examples: Twitter, PayPal, FetchTweets, CreateCharge".into(),
            ],
            Self::MalformedFqdn { fqdn, .. } => vec![
                format!("Could not parse '{fqdn}' as a fully-qualified class name"),
                r"Expected something like: App\Http\Clients\GitHub\Attributes\GetUserAttribute"
                    .into(),
            ],
            Self::UnknownClassSuffix { class_name } => vec![
                format!("'{class_name}' does not look like a generated class"),
                "Generated classes end with Attribute, Request, Response or Factory".into(),
                "BadResponse is matched exactly".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. }
            | Self::MalformedFqdn { .. }
            | Self::UnknownClassSuffix { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
