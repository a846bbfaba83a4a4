//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `clientgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::macros::MacroEntry;
use crate::domain::ClassKind;
use crate::error::ClientgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `clientgen_adapters::filesystem::LocalFilesystem` (production)
/// - `clientgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ClientgenResult<()>;

    /// Write content to a file in one whole-file operation.
    fn write_file(&self, path: &Path, content: &str) -> ClientgenResult<()>;

    /// Read a file's content.
    fn read_file(&self, path: &Path) -> ClientgenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Immediate subdirectories of `path`, sorted by name.
    fn list_dirs(&self, path: &Path) -> ClientgenResult<Vec<PathBuf>>;
}

/// Which stub template a lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubId {
    Attribute,
    Request,
    Response,
    /// Dedicated stub; not derived from the Response one.
    BadResponse,
    Factory,
    Macro,
    /// Shared trait placed directly under the clients root.
    HasStatus,
}

impl StubId {
    pub fn from_kind(kind: ClassKind) -> Self {
        match kind {
            ClassKind::Attribute => Self::Attribute,
            ClassKind::Request => Self::Request,
            ClassKind::Response => Self::Response,
            ClassKind::Factory => Self::Factory,
        }
    }

    /// Stub file name inside a stub directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Attribute => "Attribute.stub",
            Self::Request => "Request.stub",
            Self::Response => "Response.stub",
            Self::BadResponse => "BadResponse.stub",
            Self::Factory => "Factory.stub",
            Self::Macro => "Macro.stub",
            Self::HasStatus => "HasStatus.stub",
        }
    }
}

/// Class stub or its test counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubFlavor {
    Class,
    Test,
}

/// Port for stub template lookup.
///
/// Implemented by `clientgen_adapters::stubs::DiskStubStore`, which checks a
/// configured custom directory before falling back to the bundled defaults.
#[cfg_attr(test, mockall::automock)]
pub trait StubStore: Send + Sync {
    /// Raw stub text for the given id/flavor.
    ///
    /// Returns `ApplicationError::StubNotFound` when neither a custom nor a
    /// bundled stub exists — callers skip that emission step and continue.
    fn find(&self, id: StubId, flavor: StubFlavor) -> ClientgenResult<String>;
}

/// Port for the macro-discovery cache.
///
/// An explicitly injected get-or-compute/invalidate abstraction instead of a
/// process-wide cache singleton. Discovery results live under one well-known
/// key with a configurable TTL.
pub trait MacroCache: Send + Sync {
    /// Return the cached value for `key` if present and younger than `ttl`,
    /// otherwise run `producer`, store its result, and return it.
    fn get_or_compute(
        &self,
        key: &str,
        ttl: Duration,
        producer: &dyn Fn() -> ClientgenResult<Vec<MacroEntry>>,
    ) -> ClientgenResult<Vec<MacroEntry>>;

    /// Remove `key`, forcing rediscovery on the next access.
    fn invalidate(&self, key: &str) -> ClientgenResult<()>;
}
