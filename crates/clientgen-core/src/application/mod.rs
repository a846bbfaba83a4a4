//! Application layer: orchestration of the generation and macro-discovery
//! use cases over the driven ports.

pub mod error;
pub mod generator;
pub mod macros;
pub mod ports;

pub use error::ApplicationError;
pub use generator::{GenerationReport, GeneratorService, Step, StepOutcome, TestTarget};
pub use macros::{MACRO_CACHE_KEY, MacroDiscovery, MacroEntry, MacroState, MacroStatus};
