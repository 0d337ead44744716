use std::sync::Arc;

use es_core::analytics::{environmental_score, lifetime_totals, recompute, trend_line, TREND_DAYS};
use es_core::ports::ClockPort;

use crate::history::ScanHistoryStore;
use crate::models::DashboardView;

/// Recomputes every analytics view from the current history snapshot.
pub struct ComputeDashboard {
    store: Arc<ScanHistoryStore>,
    clock: Arc<dyn ClockPort>,
}

impl ComputeDashboard {
    pub fn new(store: Arc<ScanHistoryStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    pub fn execute(&self) -> DashboardView {
        let snapshot = self.store.snapshot();
        let now = self.clock.now();

        DashboardView {
            analytics: recompute(&snapshot, now),
            environmental_score: environmental_score(&snapshot, now),
            trend: trend_line(&snapshot, now, TREND_DAYS),
            lifetime: lifetime_totals(&snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use es_core::ports::ScanRecordRepositoryPort;
    use es_core::{DisposalType, ImpactTier, Locality, ScanDraft, ScanId, ScanRecord};

    struct NullRepo;

    #[async_trait]
    impl ScanRecordRepositoryPort for NullRepo {
        async fn insert(&self, _record: &ScanRecord) -> anyhow::Result<()> {
            Ok(())
        }

        async fn list_all(&self) -> anyhow::Result<Vec<ScanRecord>> {
            Ok(Vec::new())
        }

        async fn clear(&self) -> anyhow::Result<usize> {
            Ok(0)
        }
    }

    struct FixedClock(i64);

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    #[tokio::test]
    async fn execute_reflects_appended_scans() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 15, 30, 0).unwrap();
        let store = Arc::new(ScanHistoryStore::new(Arc::new(NullRepo)));

        for (i, tier) in [ImpactTier::Green, ImpactTier::Red, ImpactTier::Green]
            .into_iter()
            .enumerate()
        {
            let draft = ScanDraft {
                barcode: format!("1000{i}"),
                product_name: format!("P{i}"),
                category: String::new(),
                locality: Locality::Chicago,
                impact_tier: tier,
                disposal_type: DisposalType::Trash,
            };
            let at = now - Duration::days(i as i64);
            store
                .append(ScanRecord::new(ScanId::new(), draft, at))
                .await
                .unwrap();
        }

        let usecase = ComputeDashboard::new(store, Arc::new(FixedClock(now.timestamp_millis())));
        let view = usecase.execute();

        assert_eq!(view.analytics.summary.total_scans, 3);
        assert_eq!(view.analytics.summary.streak_days, 3);
        assert_eq!(view.analytics.weekly_series.len(), 7);
        assert_eq!(view.environmental_score, 3 + 1 + 3);
        assert_eq!(view.trend.len(), TREND_DAYS as usize);
        assert_eq!(view.lifetime.total_scans, 3);
        assert!((view.lifetime.total_co2 - (0.8 + 5.0 + 0.8)).abs() < 1e-9);
    }
}
