//! Producer interval analysis over a movie store.

use razzie_core::{analyze_win_intervals, ExtremesResult};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::storage_traits::{MovieStore, StorageResult};

/// Run the interval analysis on the store's current winner snapshot.
#[instrument(skip(store))]
pub async fn producer_intervals(store: &dyn MovieStore) -> StorageResult<ExtremesResult> {
    let winners = store.winners().await?;
    debug!(winners = winners.len(), "Winner snapshot taken");
    Ok(analyze_win_intervals(&winners))
}

/// Totals reported by `razzie stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub total: usize,
    pub winners: usize,
}

pub async fn store_stats(store: &dyn MovieStore) -> StorageResult<StoreStats> {
    Ok(StoreStats {
        total: store.count().await?,
        winners: store.count_winners().await?,
    })
}
