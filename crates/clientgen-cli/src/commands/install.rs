//! Implementation of `clientgen install`.
//!
//! Writes a starter `clientgen.toml` with every setting at its default, so
//! users can edit instead of reading documentation.

use std::path::PathBuf;

use tracing::instrument;

use crate::{
    cli::InstallArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `clientgen install`.
///
/// Honors `--config` as the destination; defaults to `./clientgen.toml`.
#[instrument(skip_all)]
pub fn execute(
    args: InstallArgs,
    config_path: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    let path = config_path.unwrap_or_else(|| PathBuf::from("clientgen.toml"));

    if path.exists() && !args.force {
        return Err(CliError::ConfigError {
            message: format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ),
            source: None,
        });
    }

    let rendered = toml::to_string_pretty(&AppConfig::default()).map_err(|e| {
        CliError::ConfigError {
            message: format!("failed to serialize default configuration: {e}"),
            source: Some(Box::new(e)),
        }
    })?;

    std::fs::write(&path, rendered)?;
    output.success(&format!("Configuration written to {}", path.display()))?;
    output.info("Edit the [generator] section to match your project layout.")?;
    Ok(())
}
