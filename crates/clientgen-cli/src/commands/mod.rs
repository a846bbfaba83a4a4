//! Command handlers.
//!
//! Each module translates parsed CLI arguments into core service calls and
//! renders the resulting [`GenerationReport`]. No resolution or rendering
//! logic lives here.
//!
//! [`GenerationReport`]: clientgen_core::application::generator::GenerationReport

pub mod completions;
pub mod generate;
pub mod install;
pub mod macros;
pub mod test;

use clientgen_core::application::generator::{GenerationReport, StepOutcome};

use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

/// Print one line per step of a generation run.
///
/// Skipped steps (existing target, missing stub, missing source) are
/// warnings, not errors; the command still exits 0.
pub(crate) fn render_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for step in &report.steps {
        match &step.outcome {
            StepOutcome::Created(path) => {
                output.success(&format!("{} created at {}", step.label, path.display()))?;
            }
            StepOutcome::AlreadyExists(path) => {
                output.warning(&format!(
                    "{} already exists at {}. Skipping.",
                    step.label,
                    path.display()
                ))?;
            }
            StepOutcome::StubMissing(stub) => {
                output.warning(&format!(
                    "Stub '{}' not found. Skipping {}.",
                    stub, step.label
                ))?;
            }
            StepOutcome::SourceMissing(fqdn) => {
                output.warning(&format!("Source class {fqdn} not found. Skipping test."))?;
            }
        }
    }

    if report.created_count() == 0 && !report.steps.is_empty() {
        output.info("Nothing new was created.")?;
    }
    Ok(())
}

/// Take a positional argument or prompt for it when the session is
/// interactive.
pub(crate) fn require_arg(value: Option<String>, prompt: &str) -> CliResult<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;
        if std::io::stdin().is_terminal() {
            // An aborted prompt (Ctrl-C, EOF) cancels the command.
            return dialoguer::Input::<String>::new()
                .with_prompt(prompt)
                .interact_text()
                .map_err(|_| CliError::Cancelled);
        }
        // Non-interactive session: missing arguments are a hard input error.
        return Err(CliError::InvalidInput {
            message: format!("missing required argument: {prompt}"),
        });
    }

    #[cfg(not(feature = "interactive"))]
    Err(CliError::FeatureNotAvailable {
        feature: "interactive prompts",
    })
}
