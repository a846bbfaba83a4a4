//! Namespace and path resolution.
//!
//! Pure computation over configuration and arguments: given (client, name,
//! kind) plus optional overrides, derive the target namespace, class file
//! path, test namespace and test file path. Nothing here touches the
//! filesystem and nothing is cached — resolution is recomputed per request.

use std::path::{Path, PathBuf};

use super::error::DomainError;
use super::kind::ClassKind;

pub const NAMESPACE_SEPARATOR: char = '\\';

/// Per-kind namespace/path segment names, config-overridable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    pub attributes: String,
    pub requests: String,
    pub responses: String,
    pub factories: String,
}

impl Default for Segments {
    fn default() -> Self {
        Self {
            attributes: ClassKind::Attribute.default_segment().into(),
            requests: ClassKind::Request.default_segment().into(),
            responses: ClassKind::Response.default_segment().into(),
            factories: ClassKind::Factory.default_segment().into(),
        }
    }
}

impl Segments {
    pub fn for_kind(&self, kind: ClassKind) -> &str {
        match kind {
            ClassKind::Attribute => &self.attributes,
            ClassKind::Request => &self.requests,
            ClassKind::Response => &self.responses,
            ClassKind::Factory => &self.factories,
        }
    }
}

/// Resolution settings, owned by the caller (the CLI maps its config file
/// into this; core never reads configuration itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Base namespace for generated classes, e.g. `App\Http\Clients`.
    pub base_namespace: String,
    /// Base path for generated classes, relative to the project root.
    pub base_path: PathBuf,
    /// Base path for generated tests.
    pub tests_path: PathBuf,
    /// Explicit tests namespace. When `None` it is derived from `tests_path`.
    pub tests_namespace: Option<String>,
    pub segments: Segments,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_namespace: r"App\Http\Clients".into(),
            base_path: PathBuf::from("app/Http/Clients"),
            tests_path: PathBuf::from("tests/Unit/Http/Clients"),
            tests_namespace: None,
            segments: Segments::default(),
        }
    }
}

impl GeneratorConfig {
    /// Map a namespace back onto a class directory, when the namespace lives
    /// under `base_namespace`. Used by test generation to locate the source
    /// class file for an FQDN.
    pub fn path_for_namespace(&self, namespace: &str) -> Option<PathBuf> {
        let rest = namespace.strip_prefix(&self.base_namespace)?;
        // The prefix must end on a segment boundary: `App\Http\ClientsExtra`
        // does not live under `App\Http\Clients`.
        if !rest.is_empty() && !rest.starts_with(NAMESPACE_SEPARATOR) {
            return None;
        }
        let rest = rest.strip_prefix(NAMESPACE_SEPARATOR).unwrap_or(rest);
        let mut path = self.base_path.clone();
        for segment in rest.split(NAMESPACE_SEPARATOR).filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        Some(path)
    }
}

/// Per-invocation overrides collected from CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub namespace: Option<String>,
    pub path: Option<PathBuf>,
    pub tests_path: Option<PathBuf>,
    pub test_namespace: Option<String>,
}

/// Everything one generator invocation needs. Immutable; discarded after the
/// command completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub client: String,
    pub name: String,
    pub kind: ClassKind,
    pub overrides: Overrides,
    pub generate_tests: bool,
}

impl GenerationRequest {
    pub fn new(client: impl Into<String>, name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            client: client.into(),
            name: name.into(),
            kind,
            overrides: Overrides::default(),
            generate_tests: true,
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_tests(mut self, generate_tests: bool) -> Self {
        self.generate_tests = generate_tests;
        self
    }

    /// Full class name, e.g. `FetchTweetsAttribute`. `Bad` + `Response`
    /// composes to `BadResponse` without special handling.
    pub fn class_name(&self) -> String {
        format!("{}{}", self.name, self.kind.suffix())
    }
}

/// Deterministically derived targets for one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub namespace: String,
    pub class_name: String,
    pub class_path: PathBuf,
    pub test_namespace: String,
    pub test_path: PathBuf,
}

/// Resolve targets for a generation request. Pure; no side effects.
pub fn resolve(request: &GenerationRequest, config: &GeneratorConfig) -> ResolvedTarget {
    let segment = config.segments.for_kind(request.kind);
    let class_name = request.class_name();

    let base_namespace = request
        .overrides
        .namespace
        .as_deref()
        .unwrap_or(&config.base_namespace);
    let namespace = join_namespace(&[base_namespace, &request.client, segment]);

    let base_path = request
        .overrides
        .path
        .as_deref()
        .unwrap_or(&config.base_path);
    let class_path = base_path
        .join(&request.client)
        .join(segment)
        .join(format!("{class_name}.php"));

    let tests_path = request
        .overrides
        .tests_path
        .as_deref()
        .unwrap_or(&config.tests_path);
    let test_path = tests_path
        .join(&request.client)
        .join(segment)
        .join(format!("{class_name}Test.php"));

    let test_namespace = match &request.overrides.test_namespace {
        Some(ns) => ns.clone(),
        None => {
            let base = config
                .tests_namespace
                .clone()
                .unwrap_or_else(|| namespace_from_path(tests_path));
            join_namespace(&[&base, &request.client, segment])
        }
    };

    ResolvedTarget {
        namespace,
        class_name,
        class_path,
        test_namespace,
        test_path,
    }
}

/// Resolve targets for a client macro class. Macros live directly under the
/// client directory, with no kind segment: `{base}\{Client}\{Client}Macro`.
pub fn resolve_macro(client: &str, config: &GeneratorConfig) -> ResolvedTarget {
    let class_name = format!("{client}Macro");
    let namespace = join_namespace(&[&config.base_namespace, client]);
    let class_path = config
        .base_path
        .join(client)
        .join(format!("{class_name}.php"));
    let test_path = config
        .tests_path
        .join(client)
        .join(format!("{class_name}Test.php"));
    let tests_base = config
        .tests_namespace
        .clone()
        .unwrap_or_else(|| namespace_from_path(&config.tests_path));
    let test_namespace = join_namespace(&[&tests_base, client]);

    ResolvedTarget {
        namespace,
        class_name,
        class_path,
        test_namespace,
        test_path,
    }
}

/// Resolve targets for a class shared by every client, living directly under
/// the clients root: no client segment, no kind segment.
pub fn resolve_shared(class_name: &str, config: &GeneratorConfig) -> ResolvedTarget {
    let namespace = join_namespace(&[&config.base_namespace]);
    let class_path = config.base_path.join(format!("{class_name}.php"));
    let test_path = config.tests_path.join(format!("{class_name}Test.php"));
    let test_namespace = config
        .tests_namespace
        .clone()
        .unwrap_or_else(|| namespace_from_path(&config.tests_path));

    ResolvedTarget {
        namespace,
        class_name: class_name.to_string(),
        class_path,
        test_namespace,
        test_path,
    }
}

/// Join namespace parts, skipping empties and trimming stray separators.
pub fn join_namespace(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim_matches(NAMESPACE_SEPARATOR))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(&NAMESPACE_SEPARATOR.to_string())
}

/// Convert a filesystem path into a namespace: slash segments become
/// PascalCase segments joined by the namespace separator.
/// `tests/Unit/Http/Clients` → `Tests\Unit\Http\Clients`.
pub fn namespace_from_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            std::path::Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .map(pascal_case)
        .collect::<Vec<_>>()
        .join(&NAMESPACE_SEPARATOR.to_string())
}

/// Uppercase the first letter of each `-`/`_`-separated word.
fn pascal_case(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Validate a client or class name before it lands in a namespace, a path
/// and a PHP class declaration.
pub fn validate_identifier(what: &'static str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::InvalidIdentifier {
            what,
            value: value.into(),
            reason: "must not be empty".into(),
        });
    }
    if !value
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    {
        return Err(DomainError::InvalidIdentifier {
            what,
            value: value.into(),
            reason: "must start with a letter or underscore".into(),
        });
    }
    if let Some(bad) = value.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(DomainError::InvalidIdentifier {
            what,
            value: value.into(),
            reason: format!("contains invalid character '{bad}'"),
        });
    }
    Ok(())
}
