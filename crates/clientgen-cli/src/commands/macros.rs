//! Implementation of `clientgen macros list` and `clientgen macros
//! clear-cache`.
//!
//! Listing goes through the discovery cache unless `--no-cache` is passed;
//! each discovered macro file is statically inspected for its class and
//! mixin-method declarations and reported with a readiness verdict.

use tracing::instrument;

use clientgen_adapters::{FileCache, LocalFilesystem};
use clientgen_core::application::macros::{MacroDiscovery, MacroState};

use crate::{
    cli::MacrosCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch the `macros` subcommands.
pub fn execute(cmd: MacrosCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        MacrosCommands::List { no_cache, json } => list(no_cache, json, config, output),
        MacrosCommands::ClearCache => clear_cache(config, output),
    }
}

#[instrument(skip_all, fields(no_cache))]
fn list(no_cache: bool, json: bool, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let fs = LocalFilesystem::new();
    let cache = FileCache::new(&config.macros.cache_path);
    let discovery = MacroDiscovery::new(&fs, &cache);

    let root = &config.generator.base_path;
    let namespace = &config.generator.base_namespace;
    let entries = if no_cache {
        discovery.discover(root, namespace)?
    } else {
        discovery.cached(root, namespace, config.macro_cache_ttl())?
    };

    if entries.is_empty() {
        output.info(&format!("No client macros found under {}.", root.display()))?;
        return Ok(());
    }

    let statuses: Vec<_> = entries.iter().map(|e| discovery.inspect(e)).collect();

    if json {
        let rows: Vec<_> = statuses
            .iter()
            .map(|s| {
                serde_json::json!({
                    "client": s.entry.client,
                    "method": s.entry.method,
                    "class": s.entry.class_fqdn,
                    "file": s.entry.file,
                    "state": s.state.to_string(),
                })
            })
            .collect();
        let rendered =
            serde_json::to_string_pretty(&rows).map_err(|e| CliError::InvalidInput {
                message: format!("failed to serialize macro list: {e}"),
            })?;
        println!("{rendered}");
        return Ok(());
    }

    output.header("Discovered client macros")?;
    for status in &statuses {
        let line = format!(
            "Http::{}() -> {} ({})",
            status.entry.method,
            status.entry.class_fqdn,
            status.entry.file.display()
        );
        match status.state {
            MacroState::Ready => output.success(&line)?,
            MacroState::MethodMissing => output.warning(&format!(
                "{line} - expected method '{}' not declared",
                status.entry.method
            ))?,
            MacroState::ClassMissing => output.warning(&format!(
                "{line} - expected class '{}Macro' not declared",
                status.entry.client
            ))?,
        }
    }
    Ok(())
}

fn clear_cache(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let fs = LocalFilesystem::new();
    let cache = FileCache::new(&config.macros.cache_path);
    let discovery = MacroDiscovery::new(&fs, &cache);

    discovery.clear()?;
    output.success("Macro discovery cache cleared.")?;
    Ok(())
}
