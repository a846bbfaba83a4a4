//! # Clientgen CLI
//!
//! Generator for the HTTP-client class sets (Attribute, Request, Response,
//! BadResponse, Factory) a typed client integration is built from.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                          |
//! |------|--------------------------------------------------|
//! |  0   | Success (including skipped steps)                |
//! |  1   | Fatal error (bad FQDN, missing source, I/O, ...) |
//! |  2   | Argument-parse error (clap)                      |

use std::process::ExitCode;

use clap::Parser;
use clientgen_core::domain::ClassKind;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.  Silently
    // ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            });
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    let verbose = cli.global.verbose > 0;
    match run(cli, config, output) {
        Ok(()) => {
            info!("clientgen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error_verbose(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Attribute(args) => {
            commands::generate::execute_kind(ClassKind::Attribute, args, config, output)
        }
        Commands::Request(args) => {
            commands::generate::execute_kind(ClassKind::Request, args, config, output)
        }
        Commands::Response(args) => {
            commands::generate::execute_kind(ClassKind::Response, args, config, output)
        }
        Commands::Factory(args) => {
            commands::generate::execute_kind(ClassKind::Factory, args, config, output)
        }
        Commands::BadResponse(args) => {
            commands::generate::execute_bad_response(args, config, output)
        }
        Commands::HasStatus(args) => {
            commands::generate::execute_has_status(args, config, output)
        }
        Commands::Macro(args) => commands::generate::execute_macro(args, config, output),
        Commands::All(args) => commands::generate::execute_all(args, config, output),
        Commands::Test(args) => commands::test::execute(args, config, output),
        Commands::TestAll(args) => commands::test::execute_all(args, config, output),
        Commands::Macros(cmd) => commands::macros::execute(cmd, config, output),
        Commands::Install(args) => commands::install::execute(args, cli.global.config, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes — the format/suggestion machinery in `CliError`
/// is all exercised here.
fn handle_error(err: CliError) -> ExitCode {
    handle_error_verbose(err, false)
}

fn handle_error_verbose(err: CliError, verbose: bool) -> ExitCode {
    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print a user-friendly message, directly to stderr so it appears
    //    even when stdout is redirected.  Colour is disabled when stderr is
    //    not a TTY (same logic as logging.rs).
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
