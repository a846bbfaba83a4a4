//! Stub template storage.
//!
//! Templates are looked up in an optional user-provided directory first
//! (`{dir}/{Kind}.stub` for classes, `{dir}/Tests/{Kind}.stub` for tests),
//! falling back to the bundled defaults compiled into the binary.

use std::path::PathBuf;

use clientgen_core::{
    application::{
        ports::{StubFlavor, StubId, StubStore},
        ApplicationError,
    },
    error::ClientgenResult,
};
use tracing::debug;

/// Stub store backed by bundled templates with a custom-directory override.
#[derive(Debug, Clone, Default)]
pub struct DiskStubStore {
    custom_dir: Option<PathBuf>,
}

impl DiskStubStore {
    /// Store serving the bundled templates only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that checks `dir` before the bundled templates.
    pub fn with_custom_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            custom_dir: Some(dir.into()),
        }
    }

    /// Bundled template text, compiled in via `include_str!`.
    pub fn bundled(id: StubId, flavor: StubFlavor) -> &'static str {
        match (id, flavor) {
            (StubId::Attribute, StubFlavor::Class) => include_str!("../stubs/Attribute.stub"),
            (StubId::Request, StubFlavor::Class) => include_str!("../stubs/Request.stub"),
            (StubId::Response, StubFlavor::Class) => include_str!("../stubs/Response.stub"),
            (StubId::BadResponse, StubFlavor::Class) => include_str!("../stubs/BadResponse.stub"),
            (StubId::Factory, StubFlavor::Class) => include_str!("../stubs/Factory.stub"),
            (StubId::Macro, StubFlavor::Class) => include_str!("../stubs/Macro.stub"),
            (StubId::HasStatus, StubFlavor::Class) => include_str!("../stubs/HasStatus.stub"),
            (StubId::Attribute, StubFlavor::Test) => include_str!("../stubs/Tests/Attribute.stub"),
            (StubId::Request, StubFlavor::Test) => include_str!("../stubs/Tests/Request.stub"),
            (StubId::Response, StubFlavor::Test) => include_str!("../stubs/Tests/Response.stub"),
            (StubId::BadResponse, StubFlavor::Test) => {
                include_str!("../stubs/Tests/BadResponse.stub")
            }
            (StubId::Factory, StubFlavor::Test) => include_str!("../stubs/Tests/Factory.stub"),
            (StubId::Macro, StubFlavor::Test) => include_str!("../stubs/Tests/Macro.stub"),
            (StubId::HasStatus, StubFlavor::Test) => {
                include_str!("../stubs/Tests/HasStatus.stub")
            }
        }
    }

    fn custom_path(&self, id: StubId, flavor: StubFlavor) -> Option<PathBuf> {
        let dir = self.custom_dir.as_ref()?;
        Some(match flavor {
            StubFlavor::Class => dir.join(id.file_name()),
            StubFlavor::Test => dir.join("Tests").join(id.file_name()),
        })
    }
}

impl StubStore for DiskStubStore {
    fn find(&self, id: StubId, flavor: StubFlavor) -> ClientgenResult<String> {
        if let Some(path) = self.custom_path(id, flavor) {
            if path.is_file() {
                debug!(path = %path.display(), "using custom stub");
                return std::fs::read_to_string(&path).map_err(|e| {
                    ApplicationError::Filesystem {
                        path,
                        reason: format!("Failed to read stub: {}", e),
                    }
                    .into()
                });
            }
        }
        Ok(Self::bundled(id, flavor).to_string())
    }
}
