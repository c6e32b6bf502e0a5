//! Where a sheet snapshot comes from.

use std::fmt;
use std::path::PathBuf;

use promo_model::RecoveredTables;

use crate::error::{IngestError, Result};
use crate::fetch::SheetClient;
use crate::grid::read_grid;
use crate::recovery::{Recovery, recover};

/// A sheet location: the published URL, or a local CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for SheetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSource::Url(url) => write!(f, "{url}"),
            SheetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads the whole document from `source`.
pub async fn load_text(client: &SheetClient, source: &SheetSource) -> Result<String> {
    match source {
        SheetSource::Url(url) => client.fetch_text(url).await,
        SheetSource::File(path) => {
            std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
                path: path.clone(),
                source: e,
            })
        }
    }
}

/// Reads `source` and recovers its tables.
pub async fn load_recovery(client: &SheetClient, source: &SheetSource) -> Result<Recovery> {
    let text = load_text(client, source).await?;
    let grid = read_grid(&text)?;
    tracing::debug!(source = %source, rows = grid.len(), "sheet tokenized");
    Ok(recover(&grid))
}

/// Reads `source` and returns only the recovered tables.
pub async fn load_tables(client: &SheetClient, source: &SheetSource) -> Result<RecoveredTables> {
    Ok(load_recovery(client, source).await?.tables)
}
