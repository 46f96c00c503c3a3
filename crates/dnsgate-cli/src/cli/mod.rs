//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dnsgate",
    bin_name = "dnsgate",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate DNSEndpoint resources before they reach the cluster",
    long_about = "dnsgate checks externaldns.nginx.org/v1 DNSEndpoint manifests: \
                  endpoints must be present, record types must be supported and \
                  targets must be IP addresses.",
    after_help = "EXAMPLES:\n\
        \x20 dnsgate validate dnsendpoint.yaml\n\
        \x20 dnsgate validate manifests/ --all-errors\n\
        \x20 dnsgate validate records.yaml --format json\n\
        \x20 dnsgate record-types",
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
    /// Validate DNSEndpoint manifests.
    #[command(
        visible_alias = "v",
        about = "Validate DNSEndpoint manifests",
        after_help = "EXAMPLES:\n\
            \x20 dnsgate validate web.yaml\n\
            \x20 dnsgate validate manifests/ --all-errors\n\
            \x20 dnsgate validate a.yaml b.json --format json"
    )]
    Validate(ValidateArgs),

    /// List the supported DNS record types.
    #[command(
        visible_alias = "types",
        about = "List supported record types",
        after_help = "EXAMPLES:\n\
            \x20 dnsgate record-types\n\
            \x20 dnsgate record-types --format json"
    )]
    RecordTypes(RecordTypesArgs),

    /// Initialise a dnsgate configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 dnsgate init           # default location\n\
            \x20 dnsgate init --force   # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dnsgate completions bash > ~/.local/share/bash-completion/completions/dnsgate\n\
            \x20 dnsgate completions zsh  > ~/.zfunc/_dnsgate\n\
            \x20 dnsgate completions fish > ~/.config/fish/completions/dnsgate.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the dnsgate configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dnsgate config get validation.all_errors\n\
            \x20 dnsgate config list\n\
            \x20 dnsgate config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `dnsgate validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Manifest files or directories.  Directories are searched recursively
    /// for files with one of the configured extensions.
    #[arg(
        value_name = "PATH",
        required = true,
        num_args = 1..,
        help = "Manifest files or directories"
    )]
    pub paths: Vec<PathBuf>,

    /// Report every violation instead of the first one per resource.
    #[arg(long = "all-errors", help = "Report all violations per resource")]
    pub all_errors: bool,

    /// Report format.
    #[arg(long = "format", value_enum, help = "Report format")]
    pub format: Option<ReportFormat>,
}

/// Output format for the `validate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One line per resource.
    Table,
    /// JSON document.
    Json,
}

impl ReportFormat {
    /// Map a configured format name; unknown names fall back to `Table`.
    pub fn from_config(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

// ── record-types ──────────────────────────────────────────────────────────────

/// Arguments for `dnsgate record-types`.
#[derive(Debug, Args)]
pub struct RecordTypesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "list",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `record-types` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// One value per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `dnsgate init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write somewhere other than the default location.
    #[arg(long = "path", value_name = "FILE", help = "Where to write the config file")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dnsgate completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dnsgate config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `validation.all_errors`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_validate_command() {
        let cli = Cli::parse_from(["dnsgate", "validate", "a.yaml", "dir/", "--all-errors"]);
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.paths, [PathBuf::from("a.yaml"), PathBuf::from("dir/")]);
                assert!(args.all_errors);
                assert_eq!(args.format, None);
            }
            other => panic!("expected Validate command, got {other:?}"),
        }
    }

    #[test]
    fn validate_requires_a_path() {
        assert!(Cli::try_parse_from(["dnsgate", "validate"]).is_err());
    }

    #[test]
    fn validate_alias() {
        let cli = Cli::parse_from(["dnsgate", "v", "a.yaml", "--format", "json"]);
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.format, Some(ReportFormat::Json));
        } else {
            panic!("expected Validate command");
        }
    }

    #[test]
    fn record_types_default_format() {
        let cli = Cli::parse_from(["dnsgate", "record-types"]);
        if let Commands::RecordTypes(args) = cli.command {
            assert_eq!(args.format, ListFormat::List);
        } else {
            panic!("expected RecordTypes command");
        }
    }

    #[test]
    fn report_format_from_config() {
        assert_eq!(ReportFormat::from_config("json"), ReportFormat::Json);
        assert_eq!(ReportFormat::from_config("JSON"), ReportFormat::Json);
        assert_eq!(ReportFormat::from_config("human"), ReportFormat::Table);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["dnsgate", "--quiet", "--verbose", "record-types"]);
        assert!(result.is_err());
    }
}
