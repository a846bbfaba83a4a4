//! Reverse derivation of (client, kind, name) from a fully-qualified class
//! name. Used by the `test:*` commands, which operate on classes the
//! generators produced earlier.

use super::error::DomainError;
use super::kind::ClassKind;
use super::resolve::NAMESPACE_SEPARATOR;

/// The namespace segment that, by convention, precedes the client name.
const CLIENTS_SEGMENT: &str = "Clients";

/// Components recovered from a fully-qualified class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFqdn {
    /// Namespace prefix, without the class name.
    pub namespace: String,
    /// The bare class name, e.g. `GetUserAttribute`.
    pub class_name: String,
    pub kind: ClassKind,
    /// Semantic name with the kind suffix stripped, e.g. `GetUser`.
    pub name: String,
    pub client: String,
}

impl ParsedFqdn {
    /// `true` when this is the special `BadResponse` class (kind Response,
    /// name `Bad`, matched exactly before the generic `Response` suffix).
    pub fn is_bad_response(&self) -> bool {
        self.class_name == "BadResponse"
    }
}

/// Parse a fully-qualified class name.
///
/// Suffix priority: exact `BadResponse` first, then `Attribute`, `Request`,
/// `Response`, `Factory`. The client is the segment following a `Clients`
/// namespace segment; if none exists, the second-to-last namespace segment
/// (the parent of the kind segment) is used.
pub fn parse(fqdn: &str) -> Result<ParsedFqdn, DomainError> {
    let trimmed = fqdn.trim().trim_start_matches(NAMESPACE_SEPARATOR);
    if trimmed.is_empty() {
        return Err(DomainError::MalformedFqdn {
            fqdn: fqdn.into(),
            reason: "empty".into(),
        });
    }

    let segments: Vec<&str> = trimmed.split(NAMESPACE_SEPARATOR).collect();
    if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
        return Err(DomainError::MalformedFqdn {
            fqdn: fqdn.into(),
            reason: "expected at least a namespace and a class name".into(),
        });
    }

    let class_name = segments[segments.len() - 1].to_string();
    let namespace_segments = &segments[..segments.len() - 1];
    let namespace = namespace_segments.join(&NAMESPACE_SEPARATOR.to_string());

    let (kind, name) = match_suffix(&class_name).ok_or(DomainError::UnknownClassSuffix {
        class_name: class_name.clone(),
    })?;

    let client = extract_client(namespace_segments).ok_or(DomainError::MalformedFqdn {
        fqdn: fqdn.into(),
        reason: "could not determine the client segment".into(),
    })?;

    Ok(ParsedFqdn {
        namespace,
        class_name,
        kind,
        name,
        client,
    })
}

/// Match the class-name suffix against the fixed priority list.
fn match_suffix(class_name: &str) -> Option<(ClassKind, String)> {
    // Exact match takes precedence over the generic Response suffix.
    if class_name == "BadResponse" {
        return Some((ClassKind::Response, "Bad".into()));
    }
    for kind in ClassKind::ALL {
        if let Some(name) = class_name.strip_suffix(kind.suffix()) {
            if name.is_empty() {
                return None;
            }
            return Some((kind, name.to_string()));
        }
    }
    None
}

fn extract_client(namespace_segments: &[&str]) -> Option<String> {
    if let Some(pos) = namespace_segments.iter().position(|s| *s == CLIENTS_SEGMENT) {
        if let Some(client) = namespace_segments.get(pos + 1) {
            return Some((*client).to_string());
        }
    }
    // No Clients marker: fall back to the parent of the kind segment.
    if namespace_segments.len() >= 2 {
        return Some(namespace_segments[namespace_segments.len() - 2].to_string());
    }
    None
}
