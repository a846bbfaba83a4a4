//! Macro discovery.
//!
//! Clients may ship a `{Client}Macro.php` next to their generated classes;
//! the host application mixes each one into its shared HTTP client at boot.
//! This module finds those files by directory convention and reports, per
//! entry, whether the file actually declares the expected class and mixin
//! method. The verdict is a typed [`MacroState`] in every mode — callers
//! decide severity.
//!
//! Discovery results are cached under one well-known key through the
//! injected [`MacroCache`] port; `clear` invalidates that key so the next
//! access rescans the filesystem.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    application::ports::{Filesystem, MacroCache},
    domain::resolve::join_namespace,
    error::ClientgenResult,
};

/// The single cache key discovery results live under.
pub const MACRO_CACHE_KEY: &str = "clientgen.macros";

/// One discovered macro class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroEntry {
    pub client: String,
    /// Mixin method name the host client will expose: lowercased client.
    pub method: String,
    pub class_fqdn: String,
    pub file: PathBuf,
}

/// Static inspection verdict for a discovered macro file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroState {
    /// File declares the expected class and mixin method.
    Ready,
    /// Class declaration found, mixin method not.
    MethodMissing,
    /// File unreadable or the class declaration is absent.
    ClassMissing,
}

impl std::fmt::Display for MacroState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::MethodMissing => write!(f, "method missing"),
            Self::ClassMissing => write!(f, "class missing"),
        }
    }
}

/// A macro entry with its inspection verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroStatus {
    pub entry: MacroEntry,
    pub state: MacroState,
}

/// Discovery service over the filesystem and cache ports.
pub struct MacroDiscovery<'a> {
    fs: &'a dyn Filesystem,
    cache: &'a dyn MacroCache,
}

impl<'a> MacroDiscovery<'a> {
    pub fn new(fs: &'a dyn Filesystem, cache: &'a dyn MacroCache) -> Self {
        Self { fs, cache }
    }

    /// Scan immediate subdirectories of the clients root: a `{Client}/`
    /// directory containing `{Client}Macro.php` yields one entry. Sorted by
    /// client name for stable output.
    #[instrument(skip_all, fields(root = %clients_root.display()))]
    pub fn discover(
        &self,
        clients_root: &Path,
        base_namespace: &str,
    ) -> ClientgenResult<Vec<MacroEntry>> {
        if !self.fs.exists(clients_root) {
            debug!("clients root does not exist, nothing to discover");
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for dir in self.fs.list_dirs(clients_root)? {
            let Some(client) = dir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let macro_file = dir.join(format!("{client}Macro.php"));
            if self.fs.exists(&macro_file) {
                let class_name = format!("{client}Macro");
                entries.push(MacroEntry {
                    client: client.to_string(),
                    method: client.to_lowercase(),
                    class_fqdn: join_namespace(&[base_namespace, client, &class_name]),
                    file: macro_file,
                });
            }
        }
        entries.sort_by(|a, b| a.client.cmp(&b.client));
        debug!(count = entries.len(), "macro discovery finished");
        Ok(entries)
    }

    /// Discovery via the cache: a fresh entry under [`MACRO_CACHE_KEY`] is
    /// returned as-is; an absent or expired one triggers a full rescan.
    pub fn cached(
        &self,
        clients_root: &Path,
        base_namespace: &str,
        ttl: Duration,
    ) -> ClientgenResult<Vec<MacroEntry>> {
        let root = clients_root.to_path_buf();
        let namespace = base_namespace.to_string();
        self.cache.get_or_compute(MACRO_CACHE_KEY, ttl, &move || {
            self.discover(&root, &namespace)
        })
    }

    /// Invalidate the cache key; the next access rescans.
    pub fn clear(&self) -> ClientgenResult<()> {
        self.cache.invalidate(MACRO_CACHE_KEY)
    }

    /// Check that the macro file declares `class {Client}Macro` and a
    /// `function {method}` — static file inspection, no code loading.
    pub fn inspect(&self, entry: &MacroEntry) -> MacroStatus {
        let state = match self.fs.read_file(&entry.file) {
            Err(_) => MacroState::ClassMissing,
            Ok(content) => {
                if !content.contains(&format!("class {}Macro", entry.client)) {
                    MacroState::ClassMissing
                } else if content.contains(&format!("function {}(", entry.method)) {
                    MacroState::Ready
                } else {
                    MacroState::MethodMissing
                }
            }
        };
        MacroStatus {
            entry: entry.clone(),
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use std::sync::Mutex;

    /// Pass-through cache that records invalidations.
    #[derive(Default)]
    struct FakeCache {
        invalidated: Mutex<Vec<String>>,
    }

    impl MacroCache for FakeCache {
        fn get_or_compute(
            &self,
            _key: &str,
            _ttl: Duration,
            producer: &dyn Fn() -> ClientgenResult<Vec<MacroEntry>>,
        ) -> ClientgenResult<Vec<MacroEntry>> {
            producer()
        }

        fn invalidate(&self, key: &str) -> ClientgenResult<()> {
            self.invalidated.lock().unwrap().push(key.to_string());
            Ok(())
        }
    }

    fn entry(client: &str) -> MacroEntry {
        MacroEntry {
            client: client.into(),
            method: client.to_lowercase(),
            class_fqdn: format!(r"App\Http\Clients\{client}\{client}Macro"),
            file: PathBuf::from(format!("app/Http/Clients/{client}/{client}Macro.php")),
        }
    }

    #[test]
    fn discovers_macro_files_in_client_dirs() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("app/Http/Clients"))
            .return_const(true);
        fs.expect_list_dirs().returning(|_| {
            Ok(vec![
                PathBuf::from("app/Http/Clients/Stripe"),
                PathBuf::from("app/Http/Clients/Twitter"),
            ])
        });
        // Stripe has a macro, Twitter does not.
        fs.expect_exists()
            .withf(|p| p == Path::new("app/Http/Clients/Stripe/StripeMacro.php"))
            .return_const(true);
        fs.expect_exists()
            .withf(|p| p == Path::new("app/Http/Clients/Twitter/TwitterMacro.php"))
            .return_const(false);

        let cache = FakeCache::default();
        let discovery = MacroDiscovery::new(&fs, &cache);
        let entries = discovery
            .discover(Path::new("app/Http/Clients"), r"App\Http\Clients")
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].client, "Stripe");
        assert_eq!(entries[0].method, "stripe");
        assert_eq!(entries[0].class_fqdn, r"App\Http\Clients\Stripe\StripeMacro");
    }

    #[test]
    fn missing_root_discovers_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        let cache = FakeCache::default();

        let discovery = MacroDiscovery::new(&fs, &cache);
        let entries = discovery
            .discover(Path::new("nope"), r"App\Http\Clients")
            .unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn clear_invalidates_the_well_known_key() {
        let fs = MockFilesystem::new();
        let cache = FakeCache::default();

        let discovery = MacroDiscovery::new(&fs, &cache);
        discovery.clear().unwrap();

        assert_eq!(*cache.invalidated.lock().unwrap(), vec![MACRO_CACHE_KEY]);
    }

    #[test]
    fn inspect_distinguishes_states() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file()
            .withf(|p| p == Path::new("app/Http/Clients/Stripe/StripeMacro.php"))
            .returning(|_| {
                Ok("<?php\nclass StripeMacro\n{\n    public function stripe(): callable {}\n}"
                    .into())
            });
        fs.expect_read_file()
            .withf(|p| p == Path::new("app/Http/Clients/Slack/SlackMacro.php"))
            .returning(|_| Ok("<?php\nclass SlackMacro\n{\n}".into()));
        fs.expect_read_file()
            .withf(|p| p == Path::new("app/Http/Clients/Other/OtherMacro.php"))
            .returning(|_| Ok("<?php\n// empty file".into()));

        let cache = FakeCache::default();
        let discovery = MacroDiscovery::new(&fs, &cache);

        assert_eq!(discovery.inspect(&entry("Stripe")).state, MacroState::Ready);
        assert_eq!(
            discovery.inspect(&entry("Slack")).state,
            MacroState::MethodMissing
        );
        assert_eq!(
            discovery.inspect(&entry("Other")).state,
            MacroState::ClassMissing
        );
    }
}
