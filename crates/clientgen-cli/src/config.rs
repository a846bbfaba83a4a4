//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`GeneratorConfig`]
//! it is handed.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`CLIENTGEN_*`, `__` as section separator)
//! 3. Config file (`--config` path or `./clientgen.toml`)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use clientgen_core::domain::{GeneratorConfig, Segments};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Namespace/path resolution settings.
    pub generator: GeneratorSection,
    /// Stub template settings.
    pub stubs: StubsSection,
    /// Macro discovery settings.
    pub macros: MacrosSection,
    /// Output settings.
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSection {
    /// Base namespace for generated classes.
    pub base_namespace: String,
    /// Base path for generated classes, relative to the project root.
    pub base_path: PathBuf,
    /// Base path for generated tests.
    pub tests_path: PathBuf,
    /// Explicit tests namespace; derived from `tests_path` when absent.
    pub tests_namespace: Option<String>,
    /// Whether generation commands emit companion tests by default.
    pub generate_tests: bool,
    /// Per-kind namespace/path segment names.
    pub segments: SegmentsSection,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        let core = GeneratorConfig::default();
        Self {
            base_namespace: core.base_namespace,
            base_path: core.base_path,
            tests_path: core.tests_path,
            tests_namespace: None,
            generate_tests: true,
            segments: SegmentsSection::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentsSection {
    pub attributes: String,
    pub requests: String,
    pub responses: String,
    pub factories: String,
}

impl Default for SegmentsSection {
    fn default() -> Self {
        let core = Segments::default();
        Self {
            attributes: core.attributes,
            requests: core.requests,
            responses: core.responses,
            factories: core.factories,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StubsSection {
    /// Directory of user stubs checked before the bundled ones.
    pub custom_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MacrosSection {
    /// Discovery cache time-to-live, in seconds.
    pub cache_ttl_secs: u64,
    /// Where the discovery cache file lives.
    pub cache_path: PathBuf,
}

impl Default for MacrosSection {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 3600,
            cache_path: PathBuf::from(".clientgen/macros.json"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment
    /// variables.
    ///
    /// A `--config` path that does not exist is an error; the default
    /// `./clientgen.toml` is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder().add_source(
            config::Config::try_from(&Self::default())
                .context("failed to encode default configuration")?,
        );

        match config_file {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.clone()));
            }
            None => {
                builder = builder
                    .add_source(config::File::with_name("clientgen").required(false));
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CLIENTGEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .context("failed to load configuration")?
            .try_deserialize()
            .context("invalid configuration")?;
        Ok(config)
    }

    /// Map the file-level config onto the core resolution settings.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            base_namespace: self.generator.base_namespace.clone(),
            base_path: self.generator.base_path.clone(),
            tests_path: self.generator.tests_path.clone(),
            tests_namespace: self.generator.tests_namespace.clone(),
            segments: Segments {
                attributes: self.generator.segments.attributes.clone(),
                requests: self.generator.segments.requests.clone(),
                responses: self.generator.segments.responses.clone(),
                factories: self.generator.segments.factories.clone(),
            },
        }
    }

    /// Macro cache TTL as a `Duration`.
    pub fn macro_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.macros.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_namespace() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generator.base_namespace, r"App\Http\Clients");
        assert_eq!(cfg.generator.base_path, PathBuf::from("app/Http/Clients"));
    }

    #[test]
    fn default_cache_ttl_is_an_hour() {
        assert_eq!(AppConfig::default().macro_cache_ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn tests_generated_by_default() {
        assert!(AppConfig::default().generator.generate_tests);
    }

    #[test]
    fn generator_config_mirrors_sections() {
        let mut cfg = AppConfig::default();
        cfg.generator.base_namespace = r"Custom\Clients".into();
        cfg.generator.segments.attributes = "Attrs".into();

        let core = cfg.generator_config();
        assert_eq!(core.base_namespace, r"Custom\Clients");
        assert_eq!(core.segments.attributes, "Attrs");
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/clientgen.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }
}
