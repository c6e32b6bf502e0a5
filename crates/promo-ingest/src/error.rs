//! Error types for sheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while obtaining a sheet.
///
/// Table recovery itself never fails; malformed rows are dropped. Only
/// getting hold of the document at all can go wrong.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Transport Errors ===
    /// The server answered with a non-success status.
    #[error("failed to fetch sheet from {url}: HTTP {status}{}", reason_suffix(.reason))]
    FetchFailure {
        url: String,
        status: u16,
        reason: Option<String>,
    },

    /// Network, DNS, or connection failure before a full response arrived.
    #[error("network error fetching {url}: {message}")]
    Transport { url: String, message: String },

    /// Failed to build the HTTP client.
    #[error("failed to create HTTP client: {message}")]
    Client { message: String },

    // === Local Source Errors ===
    /// Failed to read a local sheet export.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// The CSV tokenizer rejected the document.
    #[error("failed to tokenize CSV: {message}")]
    Csv { message: String },
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|reason| format!(" {reason}"))
        .unwrap_or_default()
}

impl IngestError {
    /// Message shown to the user when loading fails.
    ///
    /// Transport errors are surfaced verbatim, with no retry.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Returns true if the failure came from the HTTP transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::FetchFailure { .. } | Self::Transport { .. })
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::Csv {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
