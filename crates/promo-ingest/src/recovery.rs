//! Table recovery: splits one grid into the four stacked tables.
//!
//! The scan is a single top-to-bottom pass with no lookahead. Each row is
//! classified against the current state:
//!
//! - **Separator**: every cell blank. Clears the current table.
//! - **Header**: first cell is a table's key column and the row contains
//!   that table's signature column. Selects the table and its headers.
//! - **Record**: any other row while a table is selected.
//! - **Orphan**: any other row while no table is selected. Dropped.
//!
//! Recovery never fails. Rows that cannot be attributed are counted and
//! dropped.

use promo_model::{FieldMap, RecoveredTables, TableKind};
use tracing::{debug, trace};

/// What one row did to the recovery state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Separator,
    Header(TableKind),
    Record(TableKind, FieldMap),
    Orphan,
}

/// Scanner state between rows.
#[derive(Debug, Clone, Default)]
pub struct RecoveryState {
    current: Option<TableKind>,
    headers: Vec<String>,
}

impl RecoveryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table that data rows are currently attributed to.
    pub fn current(&self) -> Option<TableKind> {
        self.current
    }

    /// Advances the state by one row.
    pub fn step<S: AsRef<str>>(&mut self, row: &[S]) -> Step {
        if is_blank_row(row) {
            self.current = None;
            return Step::Separator;
        }

        if let Some(kind) = detect_header(row) {
            self.current = Some(kind);
            self.headers = row.iter().map(|cell| cell.as_ref().trim().to_string()).collect();
            return Step::Header(kind);
        }

        match self.current {
            Some(kind) => Step::Record(kind, self.zip_row(row)),
            None => Step::Orphan,
        }
    }

    /// Pairs the current headers with a row's cells by position.
    ///
    /// Missing cells read as empty, extra cells are ignored, and empty
    /// headers contribute no field.
    fn zip_row<S: AsRef<str>>(&self, row: &[S]) -> FieldMap {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, header)| !header.is_empty())
            .map(|(idx, header)| {
                let value = row.get(idx).map_or("", |cell| cell.as_ref().trim());
                (header.as_str(), value)
            })
            .collect()
    }
}

/// Counters collected during one recovery pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoveryStats {
    pub rows: usize,
    pub separators: usize,
    pub headers: usize,
    pub records: usize,
    pub orphans: usize,
}

/// Tables plus counters from one recovery pass.
#[derive(Debug, Clone, Default)]
pub struct Recovery {
    pub tables: RecoveredTables,
    pub stats: RecoveryStats,
}

/// Returns true if every cell is empty or whitespace.
pub fn is_blank_row<S: AsRef<str>>(row: &[S]) -> bool {
    row.iter().all(|cell| cell.as_ref().trim().is_empty())
}

/// Identifies the table a header row introduces, if any.
///
/// Kinds are tried in [`TableKind::DETECTION_ORDER`], so a row carrying both
/// `Card_Title` and `Hero_Banner_URL` is a card presentation header.
pub fn detect_header<S: AsRef<str>>(row: &[S]) -> Option<TableKind> {
    let first = row.first()?.as_ref().trim();
    TableKind::DETECTION_ORDER.into_iter().find(|kind| {
        first == kind.key_column()
            && row
                .iter()
                .any(|cell| cell.as_ref().trim() == kind.signature_column())
    })
}

/// Recovers the four tables from a grid, with counters.
pub fn recover<S: AsRef<str>>(grid: &[Vec<S>]) -> Recovery {
    let (_, recovery) = grid.iter().enumerate().fold(
        (RecoveryState::new(), Recovery::default()),
        |(mut state, mut recovery), (idx, row)| {
            recovery.stats.rows += 1;
            match state.step(row) {
                Step::Separator => recovery.stats.separators += 1,
                Step::Header(kind) => {
                    debug!(table = %kind, row = idx + 1, "table header detected");
                    recovery.stats.headers += 1;
                }
                Step::Record(kind, fields) => {
                    recovery.tables.push(kind, &fields);
                    recovery.stats.records += 1;
                }
                Step::Orphan => {
                    trace!(row = idx + 1, "dropping row outside any table");
                    recovery.stats.orphans += 1;
                }
            }
            (state, recovery)
        },
    );

    debug!(
        rows = recovery.stats.rows,
        records = recovery.stats.records,
        orphans = recovery.stats.orphans,
        partners = recovery.tables.partners.len(),
        cards = recovery.tables.cards.len(),
        product_details = recovery.tables.product_details.len(),
        display_rules = recovery.tables.display_rules.len(),
        "table recovery finished"
    );
    recovery
}

/// Recovers the four tables from a grid.
pub fn recover_tables<S: AsRef<str>>(grid: &[Vec<S>]) -> RecoveredTables {
    recover(grid).tables
}
