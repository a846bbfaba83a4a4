//! Implementation of the generation commands: per-kind, `bad-response`,
//! `macro` and `all`.
//!
//! Responsibility: translate CLI arguments into a [`GenerationRequest`],
//! call the core generator service, and display results.

use tracing::{debug, instrument};

use clientgen_adapters::{DiskStubStore, LocalFilesystem};
use clientgen_core::{
    application::GeneratorService,
    domain::{ClassKind, GenerationRequest, Overrides},
};

use crate::{
    cli::{ClientArgs, GenerateArgs, HasStatusArgs, OverrideArgs},
    commands::{render_report, require_arg},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute one of the per-kind commands (`attribute`, `request`, `response`,
/// `factory`).
#[instrument(skip_all, fields(kind = %kind))]
pub fn execute_kind(
    kind: ClassKind,
    args: GenerateArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let client = require_arg(args.client, "Client name")?;
    let name = require_arg(args.name, "Class name")?;

    let request = GenerationRequest::new(&client, &name, kind)
        .with_overrides(to_overrides(&args.overrides))
        .with_tests(generate_tests(&config, args.no_tests));
    debug!(class = %request.class_name(), "generation request built");

    let stubs = stub_store(&config);
    let fs = LocalFilesystem::new();
    let gen_config = config.generator_config();
    let service = GeneratorService::new(&stubs, &fs, &gen_config);

    let report = service.generate(&request)?;
    render_report(&report, &output)
}

/// Execute `clientgen bad-response`.
#[instrument(skip_all)]
pub fn execute_bad_response(
    args: ClientArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let client = require_arg(args.client, "Client name")?;

    let stubs = stub_store(&config);
    let fs = LocalFilesystem::new();
    let gen_config = config.generator_config();
    let service = GeneratorService::new(&stubs, &fs, &gen_config);

    let report = service.generate_bad_response(
        &client,
        to_overrides(&args.overrides),
        generate_tests(&config, args.no_tests),
    )?;
    render_report(&report, &output)
}

/// Execute `clientgen has-status`. The trait is shared by every client and
/// takes no client argument.
#[instrument(skip_all)]
pub fn execute_has_status(
    args: HasStatusArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let stubs = stub_store(&config);
    let fs = LocalFilesystem::new();
    let gen_config = config.generator_config();
    let service = GeneratorService::new(&stubs, &fs, &gen_config);

    let report = service.generate_has_status(generate_tests(&config, args.no_tests))?;
    render_report(&report, &output)
}

/// Execute `clientgen macro`.
#[instrument(skip_all)]
pub fn execute_macro(
    args: ClientArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let client = require_arg(args.client, "Client name")?;

    let stubs = stub_store(&config);
    let fs = LocalFilesystem::new();
    let gen_config = config.generator_config();
    let service = GeneratorService::new(&stubs, &fs, &gen_config);

    let report = service.generate_macro(&client, generate_tests(&config, args.no_tests))?;
    render_report(&report, &output)
}

/// Execute `clientgen all`: the whole class set in one run.
#[instrument(skip_all)]
pub fn execute_all(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let client = require_arg(args.client, "Client name")?;
    let name = require_arg(args.name, "Class name")?;

    let stubs = stub_store(&config);
    let fs = LocalFilesystem::new();
    let gen_config = config.generator_config();
    let service = GeneratorService::new(&stubs, &fs, &gen_config);

    output.header(&format!("Generating class set for {client}::{name}..."))?;
    let report = service.generate_all(&client, &name, generate_tests(&config, args.no_tests))?;
    render_report(&report, &output)?;

    if report.created_count() > 0 {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  clientgen macro {client}   # register a shared Http macro"
        ))?;
    }
    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

pub(crate) fn stub_store(config: &AppConfig) -> DiskStubStore {
    match &config.stubs.custom_path {
        Some(dir) => DiskStubStore::with_custom_dir(dir),
        None => DiskStubStore::new(),
    }
}

fn to_overrides(args: &OverrideArgs) -> Overrides {
    Overrides {
        namespace: args.namespace.clone(),
        path: args.path.clone(),
        tests_path: args.tests_path.clone(),
        test_namespace: args.test_namespace.clone(),
    }
}

fn generate_tests(config: &AppConfig, no_tests: bool) -> bool {
    !no_tests && config.generator.generate_tests
}
