//! Durable scan history with an in-memory, publishable snapshot.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use es_core::analytics::calendar;
use es_core::ports::{ScanRecordRepositoryPort, ScanStoreError};
use es_core::{ScanDraft, ScanId, ScanRecord};

/// Full history in display order (newest first).
pub type HistorySnapshot = Arc<Vec<ScanRecord>>;

/// Append-only scan history.
///
/// Writes go through a single lock so the durable store and the published
/// snapshot never diverge. Readers hold an `Arc` to an immutable snapshot and
/// are never blocked by a writer.
pub struct ScanHistoryStore {
    repo: Arc<dyn ScanRecordRepositoryPort>,
    write_lock: Mutex<()>,
    snapshot_tx: watch::Sender<HistorySnapshot>,
}

impl ScanHistoryStore {
    /// Creates a store with an empty snapshot. Call [`Self::all_records`]
    /// (or use [`Self::open`]) to load what is already persisted.
    pub fn new(repo: Arc<dyn ScanRecordRepositoryPort>) -> Self {
        let (snapshot_tx, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            repo,
            write_lock: Mutex::new(()),
            snapshot_tx,
        }
    }

    /// Creates the store and loads the persisted history into the snapshot.
    pub async fn open(repo: Arc<dyn ScanRecordRepositoryPort>) -> Self {
        let store = Self::new(repo);
        store.all_records().await;
        store
    }

    /// Receives every snapshot published after a successful append,
    /// refresh or reset.
    pub fn subscribe(&self) -> watch::Receiver<HistorySnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// The last published snapshot.
    pub fn snapshot(&self) -> HistorySnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Persists `record` and publishes the new snapshot.
    ///
    /// On failure nothing is published and the record is not visible anywhere.
    pub async fn append(&self, record: ScanRecord) -> Result<(), ScanStoreError> {
        let _guard = self.write_lock.lock().await;
        self.insert_and_publish(record).await
    }

    /// Creates a record from `draft` and appends it as the newest entry.
    ///
    /// The timestamp is `now`, or one millisecond past the newest record in
    /// the snapshot when `now` is not later than it. This holds across
    /// restarts because the snapshot is loaded from the durable store.
    pub async fn append_draft(
        &self,
        draft: ScanDraft,
        now: DateTime<Utc>,
    ) -> Result<ScanRecord, ScanStoreError> {
        let _guard = self.write_lock.lock().await;

        let timestamp = match self.snapshot().first() {
            Some(newest) if now <= newest.timestamp() => {
                debug!(
                    observed = %now,
                    newest = %newest.timestamp(),
                    "Clock behind newest scan, stamping after it"
                );
                newest.timestamp() + Duration::milliseconds(1)
            }
            _ => now,
        };

        let record = ScanRecord::new(ScanId::new(), draft, timestamp);
        self.insert_and_publish(record.clone()).await?;
        Ok(record)
    }

    /// Caller must hold `write_lock`.
    async fn insert_and_publish(&self, record: ScanRecord) -> Result<(), ScanStoreError> {
        self.repo.insert(&record).await.map_err(|e| {
            warn!(scan_id = %record.id(), error = %e, "Failed to persist scan record");
            ScanStoreError::Persistence(e.to_string())
        })?;

        let mut next = Vec::clone(&self.snapshot());
        let position = next.partition_point(|existing| {
            ScanRecord::history_order(existing, &record) == Ordering::Less
        });
        debug!(scan_id = %record.id(), position, "Scan record appended");
        next.insert(position, record);

        self.snapshot_tx.send_replace(Arc::new(next));
        Ok(())
    }

    /// Re-reads the durable store, publishes it and returns it.
    ///
    /// A read failure yields an empty sequence and leaves the published
    /// snapshot untouched.
    pub async fn all_records(&self) -> Vec<ScanRecord> {
        let _guard = self.write_lock.lock().await;

        match self.repo.list_all().await {
            Ok(mut records) => {
                records.sort_by(ScanRecord::history_order);
                self.snapshot_tx.send_replace(Arc::new(records.clone()));
                records
            }
            Err(e) => {
                warn!(error = %e, "Failed to read scan history, returning empty");
                Vec::new()
            }
        }
    }

    /// Records of the calendar month containing `any_date_in_month`, taken
    /// from the current snapshot in store order.
    pub fn records_in_month(&self, any_date_in_month: NaiveDate) -> Vec<ScanRecord> {
        calendar::filter_month(&self.snapshot(), any_date_in_month)
    }

    /// Deletes every record and publishes an empty snapshot.
    pub async fn reset(&self) -> Result<usize, ScanStoreError> {
        let _guard = self.write_lock.lock().await;

        let removed = self
            .repo
            .clear()
            .await
            .map_err(|e| ScanStoreError::Persistence(e.to_string()))?;

        self.snapshot_tx.send_replace(Arc::new(Vec::new()));
        info!(removed, "Scan history reset");
        Ok(removed)
    }
}
