use std::sync::Arc;

use es_core::ScanRecord;

use crate::history::ScanHistoryStore;

/// Newest-first history, freshly read from the durable store.
pub struct ListScanHistory {
    store: Arc<ScanHistoryStore>,
    max_limit: usize,
}

impl ListScanHistory {
    pub fn new(store: Arc<ScanHistoryStore>) -> Self {
        Self {
            store,
            max_limit: 1000,
        }
    }

    /// `limit` is clamped to `1..=1000`.
    pub async fn execute(&self, limit: usize) -> Vec<ScanRecord> {
        let limit = limit.clamp(1, self.max_limit);
        let mut records = self.store.all_records().await;
        records.truncate(limit);
        records
    }
}
