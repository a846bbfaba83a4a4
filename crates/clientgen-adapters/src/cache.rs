//! File-backed macro cache.
//!
//! Implements the `MacroCache` port with a single JSON file: each key maps
//! to the stored entries plus the timestamp they were stored at. A slot
//! older than the caller's TTL counts as absent.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use clientgen_core::{
    application::{macros::MacroEntry, ports::MacroCache, ApplicationError},
    error::ClientgenResult,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// JSON-file cache for macro discovery results.
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheFile {
    slots: HashMap<String, CacheSlot>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheSlot {
    stored_at: DateTime<Utc>,
    entries: Vec<MacroEntry>,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> CacheFile {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return CacheFile::default();
        };
        match serde_json::from_str(&raw) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding corrupt cache file");
                CacheFile::default()
            }
        }
    }

    fn store(&self, file: &CacheFile) -> ClientgenResult<()> {
        let cache_error = |reason: String| ApplicationError::Cache { reason };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| cache_error(format!("Failed to create cache directory: {}", e)))?;
            }
        }
        let raw = serde_json::to_string_pretty(file)
            .map_err(|e| cache_error(format!("Failed to serialize cache: {}", e)))?;
        std::fs::write(&self.path, raw)
            .map_err(|e| cache_error(format!("Failed to write cache file: {}", e)))?;
        Ok(())
    }

    fn fresh(slot: &CacheSlot, ttl: Duration) -> bool {
        let Ok(ttl) = chrono::Duration::from_std(ttl) else {
            // A TTL beyond chrono's range never expires.
            return true;
        };
        Utc::now().signed_duration_since(slot.stored_at) < ttl
    }
}

impl MacroCache for FileCache {
    fn get_or_compute(
        &self,
        key: &str,
        ttl: Duration,
        producer: &dyn Fn() -> ClientgenResult<Vec<MacroEntry>>,
    ) -> ClientgenResult<Vec<MacroEntry>> {
        let mut file = self.load();
        if let Some(slot) = file.slots.get(key) {
            if Self::fresh(slot, ttl) {
                debug!(key, "macro cache hit");
                return Ok(slot.entries.clone());
            }
            debug!(key, "macro cache entry expired");
        }

        let entries = producer()?;
        file.slots.insert(
            key.to_string(),
            CacheSlot {
                stored_at: Utc::now(),
                entries: entries.clone(),
            },
        );
        self.store(&file)?;
        Ok(entries)
    }

    fn invalidate(&self, key: &str) -> ClientgenResult<()> {
        let mut file = self.load();
        if file.slots.remove(key).is_some() {
            self.store(&file)?;
            debug!(key, "macro cache invalidated");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn entry(client: &str) -> MacroEntry {
        MacroEntry {
            client: client.into(),
            method: client.to_lowercase(),
            class_fqdn: format!(r"App\Http\Clients\{client}\{client}Macro"),
            file: PathBuf::from(format!("app/Http/Clients/{client}/{client}Macro.php")),
        }
    }

    #[test]
    fn computes_then_serves_from_cache() {
        let tmp = TempDir::new().unwrap();
        let cache = FileCache::new(tmp.path().join("macros.json"));
        let ttl = Duration::from_secs(3600);

        let first = cache
            .get_or_compute("clientgen.macros", ttl, &|| Ok(vec![entry("Stripe")]))
            .unwrap();
        assert_eq!(first, vec![entry("Stripe")]);

        // Second access must not re-run the producer.
        let second = cache
            .get_or_compute("clientgen.macros", ttl, &|| {
                panic!("producer ran on a fresh cache entry")
            })
            .unwrap();
        assert_eq!(second, vec![entry("Stripe")]);
    }

    #[test]
    fn zero_ttl_always_recomputes() {
        let tmp = TempDir::new().unwrap();
        let cache = FileCache::new(tmp.path().join("macros.json"));

        cache
            .get_or_compute("clientgen.macros", Duration::ZERO, &|| {
                Ok(vec![entry("Stripe")])
            })
            .unwrap();
        let entries = cache
            .get_or_compute("clientgen.macros", Duration::ZERO, &|| {
                Ok(vec![entry("Twitter")])
            })
            .unwrap();
        assert_eq!(entries, vec![entry("Twitter")]);
    }

    #[test]
    fn invalidate_forces_rediscovery() {
        let tmp = TempDir::new().unwrap();
        let cache = FileCache::new(tmp.path().join("macros.json"));
        let ttl = Duration::from_secs(3600);

        cache
            .get_or_compute("clientgen.macros", ttl, &|| Ok(vec![entry("Stripe")]))
            .unwrap();
        cache.invalidate("clientgen.macros").unwrap();

        let entries = cache
            .get_or_compute("clientgen.macros", ttl, &|| Ok(vec![entry("Twitter")]))
            .unwrap();
        assert_eq!(entries, vec![entry("Twitter")]);
    }

    #[test]
    fn corrupt_cache_file_is_discarded() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("macros.json");
        std::fs::write(&path, "{ not json").unwrap();

        let cache = FileCache::new(&path);
        let entries = cache
            .get_or_compute("clientgen.macros", Duration::from_secs(10), &|| {
                Ok(vec![entry("Stripe")])
            })
            .unwrap();
        assert_eq!(entries, vec![entry("Stripe")]);
    }

    #[test]
    fn invalidating_a_missing_key_is_a_no_op() {
        let tmp = TempDir::new().unwrap();
        let cache = FileCache::new(tmp.path().join("macros.json"));
        cache.invalidate("clientgen.macros").unwrap();
        assert!(!tmp.path().join("macros.json").exists());
    }
}
