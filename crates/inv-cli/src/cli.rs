//! CLI argument definitions for the invoice normalizer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "invoice-normalizer",
    version,
    about = "Normalize extracted invoice documents",
    long_about = "Normalize invoice documents produced by automated extraction.\n\n\
                  Dates, codes, IBANs and amounts are brought into canonical form,\n\
                  the subtotal/tax/total triad is reconciled, and every correction\n\
                  is reported."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include document values (IBANs, e-mail addresses, finding messages) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize documents and write the canonical JSON.
    Normalize(NormalizeArgs),

    /// Report what normalization would correct without writing anything.
    Check(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Invoice JSON files; `-` reads stdin.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Exit non-zero when any document needed corrections.
    #[arg(long = "deny-findings")]
    pub deny_findings: bool,
}

#[derive(Args)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Directory for normalized documents (default: stdout, single input only).
    #[arg(long = "output-dir", value_name = "DIR", conflicts_with = "in_place")]
    pub output_dir: Option<PathBuf>,

    /// Overwrite each input file with its normalized form.
    #[arg(long = "in-place")]
    pub in_place: bool,

    /// Write JSON on a single line instead of pretty-printed.
    #[arg(long = "compact")]
    pub compact: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_dir_conflicts_with_in_place() {
        let parsed = Cli::try_parse_from([
            "invoice-normalizer",
            "normalize",
            "a.json",
            "--in-place",
            "--output-dir",
            "out",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "invoice-normalizer",
            "check",
            "-",
            "--deny-findings",
            "--log-format",
            "json",
            "--log-data",
        ])
        .unwrap();
        assert!(cli.log_data);
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.inputs, [PathBuf::from("-")]);
        assert!(args.deny_findings);
    }
}
