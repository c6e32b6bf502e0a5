//! Logging setup for the console binary.
//!
//! Library crates only emit `tracing` events; the subscriber is installed
//! here, once, from the CLI flags.
//!
//! | level   | what is logged                                        |
//! |---------|-------------------------------------------------------|
//! | `error` | the sheet could not be loaded                         |
//! | `info`  | completed load with record and orphan counts          |
//! | `debug` | header detection, recovery totals, stale loads        |
//! | `trace` | rows dropped outside any table, tokenized row counts  |

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Crates whose events follow the configured level. Everything else stays
/// at `warn`.
const WORKSPACE_TARGETS: [&str; 4] = ["promo_cli", "promo_ingest", "promo_model", "promo_resolve"];

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for workspace crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace `level_filter` when it is set.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_logging_with_writer(config, Mutex::new(file));
        }
        None => init_logging_with_writer(config, io::stderr),
    }
    Ok(())
}

/// Installs the global subscriber writing to `writer`.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(format_layer(config, writer))
        .with(build_env_filter(config))
        .init();
}

fn format_layer<W>(config: &LogConfig, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let base = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target);

    match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => base.json().boxed(),
        (LogFormat::Compact, true) => base.compact().with_ansi(config.with_ansi).boxed(),
        (LogFormat::Compact, false) => base
            .compact()
            .without_time()
            .with_ansi(config.with_ansi)
            .boxed(),
        (LogFormat::Pretty, true) => base.with_ansi(config.with_ansi).boxed(),
        (LogFormat::Pretty, false) => base.without_time().with_ansi(config.with_ansi).boxed(),
    }
}

/// `warn` globally, `level` for each workspace crate.
fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    std::iter::once("warn".to_string())
        .chain(
            WORKSPACE_TARGETS
                .iter()
                .map(|target| format!("{target}={level}")),
        )
        .collect::<Vec<_>>()
        .join(",")
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_scope_workspace_crates() {
        let directives = default_directives(LevelFilter::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("promo_ingest=debug"));
        assert!(directives.contains("promo_resolve=debug"));
        assert_eq!(directives.matches('=').count(), WORKSPACE_TARGETS.len());
    }

    #[test]
    fn off_level_is_valid_directive() {
        let directives = default_directives(LevelFilter::OFF);
        assert!(directives.contains("promo_cli=off"));
    }

    #[test]
    fn default_config_logs_warnings_to_stderr() {
        let config = LogConfig::default();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.log_file.is_none());
    }
}
