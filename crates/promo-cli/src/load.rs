//! Loads a sheet into the session's snapshot store.

use std::time::Instant;

use promo_ingest::{RecoveryStats, SheetClient, SheetSource, load_recovery};
use promo_resolve::SnapshotStore;
use tracing::{Instrument, info, info_span};

/// Fetches and recovers `source`, then publishes the outcome to `store`.
///
/// Returns the recovery counters when this load's result was published.
/// Returns `None` when the load failed or was superseded by a newer one;
/// the store's status then holds the error or the newer snapshot.
pub async fn load_into(
    store: &SnapshotStore,
    client: &SheetClient,
    source: &SheetSource,
) -> Option<RecoveryStats> {
    let span = info_span!("load", source = %source);
    load_and_publish(store, client, source)
        .instrument(span)
        .await
}

async fn load_and_publish(
    store: &SnapshotStore,
    client: &SheetClient,
    source: &SheetSource,
) -> Option<RecoveryStats> {
    let ticket = store.begin_load();
    let started = Instant::now();

    match load_recovery(client, source).await {
        Ok(recovery) => {
            let stats = recovery.stats;
            info!(
                records = stats.records,
                orphans = stats.orphans,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "sheet loaded"
            );
            store.complete(ticket, Ok(recovery.tables)).then_some(stats)
        }
        Err(error) => {
            store.complete(ticket, Err(error.user_message()));
            None
        }
    }
}
