use std::sync::Arc;

use es_core::ports::ScanStoreError;

use crate::history::ScanHistoryStore;

/// Bulk-deletes the scan history. Returns how many records were removed.
pub struct ResetScanHistory {
    store: Arc<ScanHistoryStore>,
}

impl ResetScanHistory {
    pub fn new(store: Arc<ScanHistoryStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.reset_scan_history.execute", skip(self))]
    pub async fn execute(&self) -> Result<usize, ScanStoreError> {
        self.store.reset().await
    }
}
