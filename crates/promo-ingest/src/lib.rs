//! Sheet ingestion utilities.
//!
//! This crate turns the published configuration sheet into the four typed
//! tables defined in `promo-model`.
//!
//! # Features
//!
//! - **Grid Reading**: Tokenize CSV text while keeping blank rows
//! - **Table Recovery**: Split the grid into tables by header signatures
//! - **Fetching**: Download the published sheet over HTTP
//!
//! # Example
//!
//! ```ignore
//! use promo_ingest::{read_grid, recover_tables};
//!
//! let grid = read_grid(&text)?;
//! let tables = recover_tables(&grid);
//! println!("{} cards", tables.cards.len());
//! ```

mod error;
mod fetch;
mod grid;
mod recovery;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Grid Reading ===
pub use grid::{Grid, read_grid};

// === Table Recovery ===
pub use recovery::{
    Recovery, RecoveryState, RecoveryStats, Step, detect_header, is_blank_row, recover,
    recover_tables,
};

// === Fetching ===
pub use fetch::{DEFAULT_SHEET_URL, DEFAULT_TIMEOUT, SheetClient};
pub use source::{SheetSource, load_recovery, load_tables, load_text};
