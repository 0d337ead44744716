use anyhow::Result;
use async_trait::async_trait;

use crate::scan::ScanRecord;

/// Durable, append-only scan storage.
#[async_trait]
pub trait ScanRecordRepositoryPort: Send + Sync {
    async fn insert(&self, record: &ScanRecord) -> Result<()>;

    /// All records, newest first.
    async fn list_all(&self) -> Result<Vec<ScanRecord>>;

    /// Deletes every record and returns how many were removed.
    async fn clear(&self) -> Result<usize>;
}
