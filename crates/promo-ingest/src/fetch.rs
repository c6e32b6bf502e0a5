//! HTTP client for the published sheet.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{IngestError, Result};

/// Published CSV export of the configuration sheet.
pub const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/e/PUBLISHED_SHEET_ID/pub?output=csv";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent string for sheet requests.
const USER_AGENT_VALUE: &str = concat!("promo-console/", env!("CARGO_PKG_VERSION"));

/// Fetches the sheet as text with a plain unauthenticated GET.
#[derive(Debug, Clone)]
pub struct SheetClient {
    client: reqwest::Client,
}

impl SheetClient {
    /// Creates a client with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| IngestError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Wraps an already configured HTTP client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Downloads the whole document body.
    ///
    /// A non-success status is a [`IngestError::FetchFailure`]; anything that
    /// stops a response from arriving is a [`IngestError::Transport`].
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching sheet from {}", url);

        let transport = |e: reqwest::Error| IngestError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::FetchFailure {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().map(str::to_string),
            });
        }

        let body = response.text().await.map_err(transport)?;
        tracing::debug!(bytes = body.len(), "sheet downloaded");
        Ok(body)
    }
}
