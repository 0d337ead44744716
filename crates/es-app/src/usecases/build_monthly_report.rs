use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use es_core::analytics::MonthlyReport;

use crate::history::ScanHistoryStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("invalid report month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}

/// Tabulates one calendar month of the current history snapshot.
pub struct BuildMonthlyReport {
    store: Arc<ScanHistoryStore>,
}

impl BuildMonthlyReport {
    pub fn new(store: Arc<ScanHistoryStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, year: i32, month: u32) -> Result<MonthlyReport, ReportError> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(ReportError::InvalidMonth { year, month })?;

        let records = self.store.records_in_month(first_day);
        debug!(year, month, records = records.len(), "Building monthly report");

        Ok(MonthlyReport::build(first_day, &records))
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

    async fn store_with_scans(count: i64) -> Arc<ScanHistoryStore> {
        let store = Arc::new(ScanHistoryStore::new(Arc::new(NullRepo)));
        let base = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        for i in 0..count {
            let draft = ScanDraft {
                barcode: format!("20000{i}"),
                product_name: format!("Scan {i}"),
                category: String::new(),
                locality: Locality::SanFrancisco,
                impact_tier: ImpactTier::Red,
                disposal_type: DisposalType::Trash,
            };
            store
                .append(ScanRecord::new(ScanId::new(), draft, base + Duration::hours(i)))
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn execute_limits_rows_but_totals_whole_month() {
        let usecase = BuildMonthlyReport::new(store_with_scans(30).await);

        let report = usecase.execute(2026, 3).unwrap();

        assert_eq!(report.title, "EcoScan Monthly Report: March 2026");
        assert_eq!(report.rows.len(), 24);
        assert_eq!(report.rows[0].product_name, "Scan 29");
        assert_eq!(report.total_scans, 30);
        assert_eq!(report.total_co2, "150.0");
    }

    #[tokio::test]
    async fn execute_for_empty_month_has_zero_totals() {
        let usecase = BuildMonthlyReport::new(store_with_scans(3).await);

        let report = usecase.execute(2026, 4).unwrap();

        assert!(report.rows.is_empty());
        assert_eq!(report.total_scans, 0);
        assert_eq!(report.total_co2, "0.0");
    }

    #[tokio::test]
    async fn execute_rejects_month_out_of_range() {
        let usecase = BuildMonthlyReport::new(store_with_scans(0).await);

        assert_eq!(
            usecase.execute(2026, 13).unwrap_err(),
            ReportError::InvalidMonth { year: 2026, month: 13 }
        );
    }
}
