//! Clientgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the clientgen
//! boilerplate generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         clientgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GeneratorService, MacroDiscovery)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: StubStore, Filesystem,       │
//! │            MacroCache)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   clientgen-adapters (Infrastructure)   │
//! │ (DiskStubStore, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ClassKind, Fqdn, Resolver, Tokens)    │
//! │        No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clientgen_core::{
//!     application::GeneratorService,
//!     domain::{ClassKind, GenerationRequest, GeneratorConfig},
//! };
//!
//! // 1. Describe what to generate
//! let request = GenerationRequest::new("Twitter", "FetchTweets", ClassKind::Attribute);
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GeneratorService::new(&stubs, &filesystem, &config);
//! let report = service.generate(&request)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, GeneratorService, MacroDiscovery, MacroEntry, MacroState, MacroStatus,
        Step, StepOutcome, TestTarget,
        ports::{Filesystem, MacroCache, StubFlavor, StubId, StubStore},
    };
    pub use crate::domain::{
        ClassKind, GenerationRequest, GeneratorConfig, Overrides, ParsedFqdn, ResolvedTarget,
        TokenContext,
    };
    pub use crate::error::{ClientgenError, ClientgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
