//! The four generated-artifact kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Kind of class a generator invocation produces.
///
/// Each kind has its own stub, namespace segment and path convention.
/// `BadResponse` is not a kind of its own: it is a `Response` with the fixed
/// name `Bad` and a dedicated stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Attribute,
    Request,
    Response,
    Factory,
}

impl ClassKind {
    /// All kinds, in the order the `all` command generates them.
    pub const ALL: [ClassKind; 4] = [
        ClassKind::Attribute,
        ClassKind::Request,
        ClassKind::Response,
        ClassKind::Factory,
    ];

    /// Class-name suffix, e.g. `FetchTweets` + `Attribute`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "Attribute",
            Self::Request => "Request",
            Self::Response => "Response",
            Self::Factory => "Factory",
        }
    }

    /// Default namespace/path segment when the config carries no override.
    pub fn default_segment(self) -> &'static str {
        match self {
            Self::Attribute => "Attributes",
            Self::Request => "Requests",
            Self::Response => "Responses",
            Self::Factory => "Factories",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute => write!(f, "attribute"),
            Self::Request => write!(f, "request"),
            Self::Response => write!(f, "response"),
            Self::Factory => write!(f, "factory"),
        }
    }
}

impl FromStr for ClassKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "attribute" => Ok(Self::Attribute),
            "request" => Ok(Self::Request),
            "response" => Ok(Self::Response),
            "factory" => Ok(Self::Factory),
            other => Err(DomainError::InvalidIdentifier {
                what: "class kind",
                value: other.to_string(),
                reason: "expected attribute, request, response or factory".into(),
            }),
        }
    }
}
