//! Infrastructure adapters for clientgen.
//!
//! This crate implements the ports defined in `clientgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod cache;
pub mod filesystem;
pub mod stubs;

// Re-export commonly used adapters
pub use cache::FileCache;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use stubs::DiskStubStore;
