use std::sync::Arc;

use tracing::info;

use es_core::ports::{ClockPort, ScanStoreError};
use es_core::ScanRecord;

use crate::history::ScanHistoryStore;
use crate::models::ProductAnalysis;

/// Confirms an analysis: the store stamps a fresh id and a timestamp after
/// every saved scan, then appends it.
pub struct SaveScan {
    store: Arc<ScanHistoryStore>,
    clock: Arc<dyn ClockPort>,
}

impl SaveScan {
    pub fn new(store: Arc<ScanHistoryStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    #[tracing::instrument(
        name = "usecase.save_scan.execute",
        skip(self, analysis),
        fields(barcode = %analysis.barcode)
    )]
    pub async fn execute(&self, analysis: &ProductAnalysis) -> Result<ScanRecord, ScanStoreError> {
        let record = self
            .store
            .append_draft(analysis.to_draft(), self.clock.now())
            .await?;

        info!(scan_id = %record.id(), "Scan saved");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use es_core::ports::ScanRecordRepositoryPort;
    use es_core::{DisposalType, ImpactTier, Locality};

    struct FixedClock(i64);

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    struct MockRepo {
        should_fail: bool,
    }

    #[async_trait]
    impl ScanRecordRepositoryPort for MockRepo {
        async fn insert(&self, _record: &ScanRecord) -> anyhow::Result<()> {
            if self.should_fail {
                Err(anyhow::anyhow!("read-only database"))
            } else {
                Ok(())
            }
        }

        async fn list_all(&self) -> anyhow::Result<Vec<ScanRecord>> {
            Ok(Vec::new())
        }

        async fn clear(&self) -> anyhow::Result<usize> {
            Ok(0)
        }
    }

    fn analysis() -> ProductAnalysis {
        ProductAnalysis {
            barcode: "4006381333931".into(),
            locality: Locality::SanFrancisco,
            product_name: "Sparkling Water".into(),
            category: "beverages".into(),
            image_ref: None,
            packaging_text: "glass bottle".into(),
            impact_tier: ImpactTier::Yellow,
            impact_label: "Medium Impact".into(),
            impact_reason: "insufficient data, default medium".into(),
            co2_estimate: 2.5,
            disposal_type: DisposalType::Recycle,
            disposal_detail: "Blue bin".into(),
            suggestion: String::new(),
        }
    }

    #[tokio::test]
    async fn execute_stamps_clock_time_and_tier_co2() {
        let store = Arc::new(ScanHistoryStore::new(Arc::new(MockRepo { should_fail: false })));
        let usecase = SaveScan::new(store.clone(), Arc::new(FixedClock(1_780_000_000_000)));

        let record = usecase.execute(&analysis()).await.unwrap();

        assert_eq!(record.timestamp().timestamp_millis(), 1_780_000_000_000);
        assert_eq!(record.co2_estimate(), ImpactTier::Yellow.co2_kg());
        assert_eq!(record.disposal_type(), DisposalType::Recycle);
        assert_eq!(store.snapshot().as_slice(), &[record]);
    }

    #[tokio::test]
    async fn execute_surfaces_persistence_failure() {
        let store = Arc::new(ScanHistoryStore::new(Arc::new(MockRepo { should_fail: true })));
        let usecase = SaveScan::new(store.clone(), Arc::new(FixedClock(0)));

        let result = usecase.execute(&analysis()).await;

        assert!(matches!(result, Err(ScanStoreError::Persistence(_))));
        assert!(store.snapshot().is_empty());
    }
}
