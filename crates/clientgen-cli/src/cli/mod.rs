//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use clientgen_core::{application::generator::TestTarget, domain::ClassKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "clientgen",
    bin_name = "clientgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} HTTP-client boilerplate generator",
    long_about = "Clientgen generates the attribute/request/response/factory \
                  class quartet (plus tests) that a typed HTTP client \
                  integration is built from.",
    after_help = "EXAMPLES:\n\
        \x20 clientgen all Twitter FetchTweets\n\
        \x20 clientgen attribute Twitter FetchTweets --no-tests\n\
        \x20 clientgen test attribute 'App\\Http\\Clients\\Twitter\\Attributes\\FetchTweetsAttribute'\n\
        \x20 clientgen macros list",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an Attribute class (and its test).
    #[command(
        visible_alias = "attr",
        about = "Generate an Attribute class",
        after_help = "EXAMPLES:\n\
            \x20 clientgen attribute Twitter FetchTweets\n\
            \x20 clientgen attribute Twitter FetchTweets --no-tests"
    )]
    Attribute(GenerateArgs),

    /// Generate a Request class (and its test).
    #[command(visible_alias = "req", about = "Generate a Request class")]
    Request(GenerateArgs),

    /// Generate a Response class (and its test).
    #[command(visible_alias = "res", about = "Generate a Response class")]
    Response(GenerateArgs),

    /// Generate a Factory class (and its test).
    #[command(about = "Generate a Factory class")]
    Factory(GenerateArgs),

    /// Generate the shared BadResponse class for a client.
    #[command(
        name = "bad-response",
        about = "Generate the BadResponse class",
        after_help = "EXAMPLES:\n\
            \x20 clientgen bad-response Twitter"
    )]
    BadResponse(ClientArgs),

    /// Generate the shared `HasStatus` trait under the clients root.
    #[command(
        name = "has-status",
        about = "Generate the shared HasStatus trait",
        after_help = "EXAMPLES:\n\
            \x20 clientgen has-status\n\
            \x20 clientgen has-status --no-tests"
    )]
    HasStatus(HasStatusArgs),

    /// Generate the `{Client}Macro` mixin class for a client.
    #[command(
        about = "Generate a client macro class",
        after_help = "EXAMPLES:\n\
            \x20 clientgen macro Twitter"
    )]
    Macro(ClientArgs),

    /// Generate the full class set: Attribute, Request, Response,
    /// BadResponse, Factory.
    #[command(
        visible_alias = "a",
        about = "Generate the full class set",
        after_help = "EXAMPLES:\n\
            \x20 clientgen all Twitter FetchTweets\n\
            \x20 clientgen all Stripe CreateCharge --no-tests"
    )]
    All(GenerateArgs),

    /// Generate a test for an already-generated class, addressed by FQDN.
    #[command(
        about = "Generate a test for an existing class",
        after_help = "EXAMPLES:\n\
            \x20 clientgen test attribute 'App\\Http\\Clients\\Twitter\\Attributes\\FetchTweetsAttribute'\n\
            \x20 clientgen test bad-response 'App\\Http\\Clients\\Twitter\\Responses\\BadResponse'"
    )]
    Test(TestArgs),

    /// Generate tests for every class of a client whose source file exists.
    #[command(
        name = "test-all",
        about = "Generate tests for a whole class set",
        after_help = "EXAMPLES:\n\
            \x20 clientgen test-all 'App\\Http\\Clients\\Twitter' FetchTweets"
    )]
    TestAll(TestAllArgs),

    /// Inspect and manage discovered client macros.
    #[command(
        subcommand,
        about = "Macro discovery and cache management",
        after_help = "EXAMPLES:\n\
            \x20 clientgen macros list\n\
            \x20 clientgen macros list --no-cache\n\
            \x20 clientgen macros clear-cache"
    )]
    Macros(MacrosCommands),

    /// Write a starter `clientgen.toml` configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 clientgen install\n\
            \x20 clientgen install --force"
    )]
    Install(InstallArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 clientgen completions bash > ~/.local/share/bash-completion/completions/clientgen\n\
            \x20 clientgen completions zsh  > ~/.zfunc/_clientgen"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for the per-kind and `all` generation commands.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Client the class belongs to, e.g. `Twitter`.  Prompted for when
    /// omitted in an interactive session.
    #[arg(value_name = "CLIENT", help = "Client name (e.g. Twitter)")]
    pub client: Option<String>,

    /// Base class name without the kind suffix, e.g. `FetchTweets`.
    #[arg(value_name = "NAME", help = "Class name without suffix (e.g. FetchTweets)")]
    pub name: Option<String>,

    /// Skip generating the companion test.
    #[arg(long = "no-tests", help = "Skip test generation")]
    pub no_tests: bool,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Arguments for commands addressed by client only.
#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Client name, e.g. `Twitter`.
    #[arg(value_name = "CLIENT", help = "Client name (e.g. Twitter)")]
    pub client: Option<String>,

    /// Skip generating the companion test.
    #[arg(long = "no-tests", help = "Skip test generation")]
    pub no_tests: bool,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Arguments for `clientgen has-status`. The trait has a fixed name and
/// location, so only test generation is configurable.
#[derive(Debug, Args)]
pub struct HasStatusArgs {
    /// Skip generating the companion test.
    #[arg(long = "no-tests", help = "Skip test generation")]
    pub no_tests: bool,
}

/// Per-invocation resolution overrides, shared by all generation commands.
#[derive(Debug, Args, Default)]
pub struct OverrideArgs {
    /// Override the configured base namespace.
    #[arg(long = "namespace", value_name = "NS", help = "Base namespace override")]
    pub namespace: Option<String>,

    /// Override the configured base path.
    #[arg(long = "path", value_name = "DIR", help = "Base path override")]
    pub path: Option<PathBuf>,

    /// Override the configured tests path.
    #[arg(long = "tests-path", value_name = "DIR", help = "Tests path override")]
    pub tests_path: Option<PathBuf>,

    /// Use this test namespace verbatim instead of deriving it.
    #[arg(
        long = "test-namespace",
        value_name = "NS",
        help = "Test namespace override (used verbatim)"
    )]
    pub test_namespace: Option<String>,
}

// ── test ──────────────────────────────────────────────────────────────────────

/// Arguments for `clientgen test`.
#[derive(Debug, Args)]
pub struct TestArgs {
    /// Kind of class the FQDN is expected to name.
    #[arg(value_enum, value_name = "KIND", help = "Expected class kind")]
    pub kind: TestKind,

    /// Fully-qualified class name, e.g.
    /// `App\Http\Clients\Twitter\Attributes\FetchTweetsAttribute`.
    #[arg(value_name = "FQDN", help = "Fully-qualified class name")]
    pub fqdn: String,

    /// Use this test namespace verbatim instead of deriving it.
    #[arg(long = "test-namespace", value_name = "NS")]
    pub test_namespace: Option<String>,
}

/// Arguments for `clientgen test-all`.
#[derive(Debug, Args)]
pub struct TestAllArgs {
    /// Client base namespace, e.g. `App\Http\Clients\Twitter`.
    #[arg(value_name = "NAMESPACE", help = "Client base namespace")]
    pub namespace: String,

    /// Base class name without the kind suffix.
    #[arg(value_name = "NAME", help = "Class name without suffix")]
    pub name: String,

    /// Use this test namespace verbatim instead of deriving it.
    #[arg(long = "test-namespace", value_name = "NS")]
    pub test_namespace: Option<String>,
}

/// Class kinds a test can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TestKind {
    Attribute,
    Request,
    Response,
    Factory,
    BadResponse,
}

impl TestKind {
    pub fn to_target(self) -> TestTarget {
        match self {
            Self::Attribute => TestTarget::Kind(ClassKind::Attribute),
            Self::Request => TestTarget::Kind(ClassKind::Request),
            Self::Response => TestTarget::Kind(ClassKind::Response),
            Self::Factory => TestTarget::Kind(ClassKind::Factory),
            Self::BadResponse => TestTarget::BadResponse,
        }
    }
}

// ── macros ────────────────────────────────────────────────────────────────────

/// Subcommands for `clientgen macros`.
#[derive(Debug, Subcommand)]
pub enum MacrosCommands {
    /// List discovered client macros and their readiness.
    List {
        /// Bypass the cache and rescan the filesystem.
        #[arg(long = "no-cache", help = "Rescan instead of using the cache")]
        no_cache: bool,

        /// Print the result as JSON instead of a table.
        #[arg(long = "json", help = "JSON output")]
        json: bool,
    },
    /// Drop the cached discovery results.
    #[command(name = "clear-cache")]
    ClearCache,
}

// ── install ───────────────────────────────────────────────────────────────────

/// Arguments for `clientgen install`.
#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `clientgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_attribute_command() {
        let cli = Cli::parse_from(["clientgen", "attribute", "Twitter", "FetchTweets"]);
        match cli.command {
            Commands::Attribute(args) => {
                assert_eq!(args.client.as_deref(), Some("Twitter"));
                assert_eq!(args.name.as_deref(), Some("FetchTweets"));
                assert!(!args.no_tests);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn no_tests_flag_parses() {
        let cli = Cli::parse_from(["clientgen", "all", "Twitter", "FetchTweets", "--no-tests"]);
        match cli.command {
            Commands::All(args) => assert!(args.no_tests),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn has_status_parses_with_no_tests() {
        let cli = Cli::parse_from(["clientgen", "has-status", "--no-tests"]);
        match cli.command {
            Commands::HasStatus(args) => assert!(args.no_tests),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_command_takes_kind_and_fqdn() {
        let cli = Cli::parse_from([
            "clientgen",
            "test",
            "bad-response",
            r"App\Http\Clients\Twitter\Responses\BadResponse",
        ]);
        match cli.command {
            Commands::Test(args) => {
                assert_eq!(args.kind, TestKind::BadResponse);
                assert!(args.fqdn.ends_with("BadResponse"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn override_flags_parse() {
        let cli = Cli::parse_from([
            "clientgen",
            "request",
            "Twitter",
            "FetchTweets",
            "--namespace",
            r"Custom\Ns",
            "--path",
            "src/Custom",
            "--test-namespace",
            r"Custom\Tests",
        ]);
        match cli.command {
            Commands::Request(args) => {
                assert_eq!(args.overrides.namespace.as_deref(), Some(r"Custom\Ns"));
                assert_eq!(
                    args.overrides.path.as_deref(),
                    Some(std::path::Path::new("src/Custom"))
                );
                assert_eq!(
                    args.overrides.test_namespace.as_deref(),
                    Some(r"Custom\Tests")
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["clientgen", "--quiet", "--verbose", "macros", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_kind_maps_to_targets() {
        assert_eq!(
            TestKind::Attribute.to_target(),
            TestTarget::Kind(ClassKind::Attribute)
        );
        assert_eq!(TestKind::BadResponse.to_target(), TestTarget::BadResponse);
    }
}
