//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use clientgen_core::{application::ports::Filesystem, error::ClientgenResult};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ClientgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ClientgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> ClientgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dirs(&self, path: &Path) -> ClientgenResult<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                map_io_error(path, e.into(), "list directory")
            })?;
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }
        dirs.sort();
        Ok(dirs)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> clientgen_core::error::ClientgenError {
    use clientgen_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
