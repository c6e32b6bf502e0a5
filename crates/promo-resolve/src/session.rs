//! Snapshot lifecycle for one viewing session.
//!
//! Each fetch produces a complete, independent [`RecoveredTables`]. The
//! store publishes it by swapping a single `Arc`, so readers see either the
//! old snapshot or the new one, never a mix. Every load is tagged with a
//! generation number; a load that finishes after a newer one has started is
//! discarded instead of overwriting the newer result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use promo_model::RecoveredTables;

/// What the view layer renders: a spinner, an error, or the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Failed(String),
    Ready(Arc<RecoveredTables>),
}

impl LoadStatus {
    pub fn tables(&self) -> Option<&Arc<RecoveredTables>> {
        match self {
            LoadStatus::Ready(tables) => Some(tables),
            LoadStatus::Loading | LoadStatus::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(message) => Some(message),
            LoadStatus::Loading | LoadStatus::Ready(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }
}

/// Identity of one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Holds the current [`LoadStatus`] and guards it against stale loads.
#[derive(Debug)]
pub struct SnapshotStore {
    generation: AtomicU64,
    status: RwLock<Arc<LoadStatus>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self {
            generation: AtomicU64::new(0),
            status: RwLock::new(Arc::new(LoadStatus::Loading)),
        }
    }
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load and publishes [`LoadStatus::Loading`].
    ///
    /// Any load started earlier becomes stale.
    pub fn begin_load(&self) -> LoadTicket {
        let mut status = self.status.write().unwrap_or_else(PoisonError::into_inner);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *status = Arc::new(LoadStatus::Loading);
        tracing::debug!(generation, "sheet load started");
        LoadTicket { generation }
    }

    /// Publishes the outcome of a load if it is still the latest one.
    ///
    /// Returns false when a newer load has started since `ticket` was issued;
    /// the outcome is then dropped and the current status is left alone.
    pub fn complete(&self, ticket: LoadTicket, outcome: Result<RecoveredTables, String>) -> bool {
        let mut status = self.status.write().unwrap_or_else(PoisonError::into_inner);
        let current = self.generation.load(Ordering::SeqCst);
        if ticket.generation != current {
            tracing::debug!(
                stale = ticket.generation,
                current,
                "discarding result of superseded sheet load"
            );
            return false;
        }

        *status = Arc::new(match outcome {
            Ok(tables) => LoadStatus::Ready(Arc::new(tables)),
            Err(message) => {
                tracing::error!(generation = current, "sheet load failed: {message}");
                LoadStatus::Failed(message)
            }
        });
        true
    }

    /// Current status. Cheap to clone and safe to hold across loads.
    pub fn status(&self) -> Arc<LoadStatus> {
        Arc::clone(&*self.status.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Tables of the current snapshot, if one is ready.
    pub fn snapshot(&self) -> Option<Arc<RecoveredTables>> {
        self.status().tables().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_model::Partner;

    fn tables_with_partner(id: &str) -> RecoveredTables {
        RecoveredTables {
            partners: vec![Partner {
                partner_id: id.to_string(),
                ..Partner::default()
            }],
            ..RecoveredTables::default()
        }
    }

    #[test]
    fn test_new_store_is_loading() {
        let store = SnapshotStore::new();
        assert!(store.status().is_loading());
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_complete_publishes_ready() {
        let store = SnapshotStore::new();
        let ticket = store.begin_load();
        assert!(store.complete(ticket, Ok(tables_with_partner("P1"))));
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.partners[0].partner_id, "P1");
    }

    #[test]
    fn test_complete_publishes_failure() {
        let store = SnapshotStore::new();
        let ticket = store.begin_load();
        assert!(store.complete(ticket, Err("HTTP 500".to_string())));
        assert_eq!(store.status().error(), Some("HTTP 500"));
    }

    #[test]
    fn test_stale_load_does_not_overwrite_newer() {
        let store = SnapshotStore::new();
        let old = store.begin_load();
        let new = store.begin_load();

        assert!(store.complete(new, Ok(tables_with_partner("NEW"))));
        assert!(!store.complete(old, Ok(tables_with_partner("OLD"))));

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.partners[0].partner_id, "NEW");
        assert!(new.generation() > old.generation());
    }

    #[test]
    fn test_reader_keeps_old_snapshot_after_swap() {
        let store = SnapshotStore::new();
        let first = store.begin_load();
        store.complete(first, Ok(tables_with_partner("P1")));
        let held = store.snapshot().unwrap();

        let second = store.begin_load();
        store.complete(second, Ok(tables_with_partner("P2")));

        assert_eq!(held.partners[0].partner_id, "P1");
        assert_eq!(store.snapshot().unwrap().partners[0].partner_id, "P2");
    }
}
