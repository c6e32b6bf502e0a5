//! CLI argument definitions for the promo console.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use promo_cli::logging::LogFormat;
use promo_ingest::{DEFAULT_SHEET_URL, SheetSource};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "promo-console",
    version,
    about = "Inspect partner card configuration sheets",
    long_about = "Fetch the published card configuration sheet, recover its four tables,\n\
                  and show what each audience segment would see.\n\n\
                  Tables: partners, card presentation, product details, display rules."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub source: SourceArgs,

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
}

#[derive(Args)]
pub struct SourceArgs {
    /// Published CSV URL of the configuration sheet.
    #[arg(long = "url", value_name = "URL", global = true, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read a local CSV export instead of fetching.
    #[arg(long = "file", value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// HTTP request timeout in seconds.
    #[arg(
        long = "timeout-secs",
        value_name = "SECS",
        default_value_t = 30,
        global = true
    )]
    pub timeout_secs: u64,
}

impl SourceArgs {
    /// Resolves the flags to a sheet location, defaulting to the published URL.
    pub fn sheet_source(&self) -> SheetSource {
        match (&self.file, &self.url) {
            (Some(path), _) => SheetSource::File(path.clone()),
            (None, Some(url)) => SheetSource::Url(url.clone()),
            (None, None) => SheetSource::Url(DEFAULT_SHEET_URL.to_string()),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Show how many records were recovered for each table.
    Tables,

    /// Show every card joined with its partner and first display rule.
    Admin(OutputArgs),

    /// Show the cards a segment may see, highest priority first.
    Eligible(EligibleArgs),

    /// Show one card with its partner, benefits, and product detail.
    Preview(PreviewArgs),
}

#[derive(Args)]
pub struct OutputArgs {
    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,
}

#[derive(Args)]
pub struct EligibleArgs {
    /// Viewer segment, matched exactly (e.g. "New User").
    #[arg(long = "segment", value_name = "SEGMENT", default_value = "All")]
    pub segment: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Config_ID of the card to preview.
    #[arg(long = "config", value_name = "CONFIG_ID")]
    pub config_id: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn source_defaults_to_published_url() {
        let cli = Cli::try_parse_from(["promo-console", "tables"]).unwrap();
        assert_eq!(
            cli.source.sheet_source(),
            SheetSource::Url(DEFAULT_SHEET_URL.to_string())
        );
    }

    #[test]
    fn file_and_url_conflict() {
        let result = Cli::try_parse_from([
            "promo-console",
            "tables",
            "--file",
            "sheet.csv",
            "--url",
            "https://example.com/sheet.csv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn eligible_parses_segment() {
        let cli = Cli::try_parse_from([
            "promo-console",
            "eligible",
            "--segment",
            "New User",
            "--output",
            "json",
        ])
        .unwrap();
        let Command::Eligible(args) = cli.command else {
            panic!("expected eligible command");
        };
        assert_eq!(args.segment, "New User");
        assert!(args.output.output == OutputFormatArg::Json);
    }
}
