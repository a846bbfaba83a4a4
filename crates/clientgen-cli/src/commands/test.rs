//! Implementation of `clientgen test` and `clientgen test-all`.
//!
//! Both commands require the source class file to already exist; `test`
//! fails hard when it is missing, `test-all` records the miss and moves on.

use tracing::instrument;

use clientgen_adapters::LocalFilesystem;
use clientgen_core::application::GeneratorService;

use crate::{
    cli::{TestAllArgs, TestArgs},
    commands::{generate::stub_store, render_report},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute `clientgen test`: one test for one existing class, by FQDN.
#[instrument(skip_all, fields(fqdn = %args.fqdn))]
pub fn execute(args: TestArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let stubs = stub_store(&config);
    let fs = LocalFilesystem::new();
    let gen_config = config.generator_config();
    let service = GeneratorService::new(&stubs, &fs, &gen_config);

    let report =
        service.generate_test_for(&args.fqdn, args.kind.to_target(), args.test_namespace)?;
    render_report(&report, &output)
}

/// Execute `clientgen test-all`: tests for every class of the set whose
/// source file exists.
#[instrument(skip_all, fields(namespace = %args.namespace, name = %args.name))]
pub fn execute_all(args: TestAllArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let stubs = stub_store(&config);
    let fs = LocalFilesystem::new();
    let gen_config = config.generator_config();
    let service = GeneratorService::new(&stubs, &fs, &gen_config);

    output.header(&format!("Generating tests for {}...", args.namespace))?;
    let report = service.generate_all_tests(&args.namespace, &args.name, args.test_namespace)?;
    render_report(&report, &output)
}
