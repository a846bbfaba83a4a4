//! Literal placeholder substitution over stub text.
//!
//! The token contract is deliberately tiny: a fixed set of `{{ token }}`
//! placeholders, substituted verbatim in a single pass. No escaping, no
//! recursion — a substituted value that itself contains a placeholder is
//! left alone, and unrecognised tokens pass through unchanged.

use super::resolve::ResolvedTarget;

/// Ordered (placeholder, value) pairs for one render.
///
/// Values are computed once per request by the resolver and passed in; the
/// renderer never derives anything itself.
#[derive(Debug, Clone, Default)]
pub struct TokenContext {
    values: Vec<(&'static str, String)>,
}

impl TokenContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard token set for a class/test generation: the target's own
    /// namespace plus the sibling namespaces stubs may reference.
    pub fn for_target(
        target: &ResolvedTarget,
        client: &str,
        name: &str,
        base_namespace: &str,
        attribute_namespace: &str,
        request_namespace: &str,
        response_namespace: &str,
    ) -> Self {
        let mut ctx = Self::new();
        ctx.insert("namespace", &target.namespace);
        ctx.insert("client", client);
        ctx.insert("name", name);
        ctx.insert("base_namespace", base_namespace);
        ctx.insert("attribute_namespace", attribute_namespace);
        ctx.insert("request_namespace", request_namespace);
        ctx.insert("response_namespace", response_namespace);
        ctx.insert("test_namespace", &target.test_namespace);
        ctx
    }

    pub fn insert(&mut self, token: &'static str, value: impl Into<String>) {
        self.values.push((token, value.into()));
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| v.as_str())
    }

    /// Render `input` in one left-to-right pass.
    ///
    /// Placeholders are `{{` ... `}}` with the inner token trimmed, so both
    /// `{{ name }}` and `{{name}}` resolve. Substituted values are copied
    /// verbatim and never re-scanned.
    pub fn render(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            match tail.find("}}") {
                Some(end) => {
                    let token = tail[2..end].trim();
                    match self.get(token) {
                        Some(value) => out.push_str(value),
                        // Unknown token: pass through unchanged.
                        None => out.push_str(&tail[..end + 2]),
                    }
                    rest = &tail[end + 2..];
                }
                None => {
                    // Unterminated opener: literal text.
                    out.push_str(tail);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}
