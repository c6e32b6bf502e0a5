//! Promo console CLI.

use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use promo_cli::load::load_into;
use promo_cli::logging::{LogConfig, init_logging};
use promo_ingest::{RecoveryStats, SheetClient};
use promo_resolve::{LoadStatus, SnapshotStore};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod render;

use crate::cli::{Cli, Command};
use crate::commands::{run_admin, run_eligible, run_preview, run_tables};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let store = SnapshotStore::new();
    let stats = match load(&cli, &store) {
        Ok(stats) => stats,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };

    let status = store.status();
    let tables = match status.as_ref() {
        LoadStatus::Ready(tables) => tables,
        LoadStatus::Failed(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
        LoadStatus::Loading => {
            eprintln!("error: sheet load did not complete");
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        Command::Tables => run_tables(tables, stats.as_ref()),
        Command::Admin(args) => run_admin(tables, args),
        Command::Eligible(args) => run_eligible(tables, args),
        Command::Preview(args) => run_preview(tables, args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Runs one sheet load on a single-threaded runtime.
fn load(cli: &Cli, store: &SnapshotStore) -> Result<Option<RecoveryStats>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    let client = SheetClient::new(Duration::from_secs(cli.source.timeout_secs))
        .context("create HTTP client")?;
    let source = cli.source.sheet_source();
    Ok(runtime.block_on(load_into(store, &client, &source)))
}

/// Logging settings from the CLI flags.
///
/// `--log-level` beats `-v`/`-q`; either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.map(LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter: explicit.unwrap_or_else(|| cli.verbosity.tracing_level_filter()),
        use_env_filter: explicit.is_none() && !cli.verbosity.is_present(),
        with_ansi,
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        ..LogConfig::default()
    }
}
