//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::diagnostics::OutputFormat;

/// Check a vehicle record for missing data, missing parts and damaged parts.
#[derive(Debug, Parser)]
#[command(name = "car-diagnostics")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Only print the overall result
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Diagnose options used when no subcommand is given
    #[command(flatten)]
    pub diagnose: DiagnoseArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run diagnostics on a vehicle record (default if no command specified)
    Diagnose(DiagnoseArgs),

    /// Show the required-parts table
    Requirements(RequirementsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `diagnose` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DiagnoseArgs {
    /// Record document to check (.xml, .json, .yml); defaults to the bundled sample
    #[arg(short, long, env = "CAR_DIAGNOSTICS_RECORD", value_name = "PATH")]
    pub record: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `requirements` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RequirementsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_uses_top_level_diagnose_args() {
        let cli = Cli::parse_from(["car-diagnostics", "--record", "car.json", "-f", "json"]);

        assert!(cli.command.is_none());
        assert_eq!(cli.diagnose.record, Some(PathBuf::from("car.json")));
        assert_eq!(cli.diagnose.format, OutputFormat::Json);
    }

    #[test]
    fn parses_diagnose_subcommand() {
        let cli = Cli::parse_from(["car-diagnostics", "diagnose", "-r", "car.xml"]);

        match cli.command {
            Some(Commands::Diagnose(args)) => {
                assert_eq!(args.record, Some(PathBuf::from("car.xml")));
                assert_eq!(args.format, OutputFormat::Human);
            }
            other => panic!("Expected Diagnose command, got {:?}", other),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["car-diagnostics", "diagnose", "--quiet", "--no-color"]);
        assert!(cli.quiet);
        assert!(cli.no_color);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_requirements_json() {
        let cli = Cli::parse_from(["car-diagnostics", "requirements", "--json"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Requirements(RequirementsArgs { json: true }))
        ));
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Cli::try_parse_from(["car-diagnostics", "--format", "xml"]);
        assert!(result.is_err());
    }
}
