//! Core domain layer for clientgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (stub loading, file emission, cache access) is handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: Resolution is recomputed per request, never cached
//!
pub mod error;
pub mod fqdn;
pub mod kind;
pub mod render;
pub mod resolve;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use fqdn::ParsedFqdn;
pub use kind::ClassKind;
pub use render::TokenContext;
pub use resolve::{
    GenerationRequest, GeneratorConfig, Overrides, ResolvedTarget, Segments, validate_identifier,
};
