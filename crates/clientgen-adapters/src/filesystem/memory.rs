//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use clientgen_core::{
    application::{ports::Filesystem, ApplicationError},
    error::ClientgenResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.to_string());
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(path: &Path) -> clientgen_core::error::ClientgenError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "Filesystem lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ClientgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ClientgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> ClientgenResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn list_dirs(&self, path: &Path) -> ClientgenResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        let mut dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|d| d.parent() == Some(path))
            .cloned()
            .collect();
        dirs.sort();
        Ok(dirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b/File.php"), "x").is_err());

        fs.create_dir_all(Path::new("a/b")).unwrap();
        fs.write_file(Path::new("a/b/File.php"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("a/b/File.php")).unwrap(), "x");
    }

    #[test]
    fn list_dirs_is_immediate_children_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("root/Twitter/deep")).unwrap();
        fs.create_dir_all(Path::new("root/Stripe")).unwrap();

        let dirs = fs.list_dirs(Path::new("root")).unwrap();
        assert_eq!(
            dirs,
            vec![PathBuf::from("root/Stripe"), PathBuf::from("root/Twitter")]
        );
    }

    #[test]
    fn backs_the_generator_service() {
        use crate::stubs::DiskStubStore;
        use clientgen_core::application::GeneratorService;
        use clientgen_core::domain::{ClassKind, GenerationRequest, GeneratorConfig};

        let fs = MemoryFilesystem::new();
        let stubs = DiskStubStore::new();
        let config = GeneratorConfig::default();
        let service = GeneratorService::new(&stubs, &fs, &config);

        let request = GenerationRequest::new("Twitter", "FetchTweets", ClassKind::Attribute);
        let report = service.generate(&request).unwrap();

        assert_eq!(report.created_count(), 2);
        let class = fs
            .read_file(Path::new(
                "app/Http/Clients/Twitter/Attributes/FetchTweetsAttribute.php",
            ))
            .unwrap();
        assert!(class.contains(r"namespace App\Http\Clients\Twitter\Attributes;"));
        assert_eq!(fs.list_files().len(), 2);
    }

    #[test]
    fn seed_file_creates_parents() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("app/Http/Clients/Twitter/TwitterMacro.php", "<?php");

        assert!(fs.exists(Path::new("app/Http/Clients/Twitter")));
        assert_eq!(
            fs.list_dirs(Path::new("app/Http/Clients")).unwrap(),
            vec![PathBuf::from("app/Http/Clients/Twitter")]
        );
    }
}
