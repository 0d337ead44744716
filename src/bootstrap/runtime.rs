use std::sync::Arc;

use es_app::usecases::{
    AnalyzeProduct, BuildMonthlyReport, ComputeDashboard, ExportMonthlyScans, ListLocalities, ListScanHistory,
    ResetScanHistory, SaveScan,
};
use es_app::{AppDeps, ScanHistoryStore};
use es_core::Locality;

/// Application dependencies plus the shared history store.
///
/// Use cases are obtained through [`AppRuntime::usecases`].
pub struct AppRuntime {
    pub deps: AppDeps,
    pub default_locality: Locality,
    history: Arc<ScanHistoryStore>,
}

impl AppRuntime {
    /// Loads the persisted history once; every use case shares that snapshot.
    pub async fn new(deps: AppDeps, default_locality: Locality) -> Self {
        let history = Arc::new(ScanHistoryStore::open(deps.scan_repo.clone()).await);
        Self {
            deps,
            default_locality,
            history,
        }
    }

    pub fn history(&self) -> &Arc<ScanHistoryStore> {
        &self.history
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Use case accessor for [`AppRuntime`].
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn analyze_product(&self) -> AnalyzeProduct {
        AnalyzeProduct::from_ports(
            self.runtime.deps.product_lookup.clone(),
            self.runtime.deps.disposal_rules.clone(),
        )
    }

    pub fn save_scan(&self) -> SaveScan {
        SaveScan::new(self.runtime.history.clone(), self.runtime.deps.clock.clone())
    }

    pub fn list_scan_history(&self) -> ListScanHistory {
        ListScanHistory::new(self.runtime.history.clone())
    }

    pub fn compute_dashboard(&self) -> ComputeDashboard {
        ComputeDashboard::new(self.runtime.history.clone(), self.runtime.deps.clock.clone())
    }

    pub fn build_monthly_report(&self) -> BuildMonthlyReport {
        BuildMonthlyReport::new(self.runtime.history.clone())
    }

    pub fn export_monthly_scans(&self) -> ExportMonthlyScans {
        ExportMonthlyScans::new(self.runtime.history.clone())
    }

    pub fn list_localities(&self) -> ListLocalities {
        ListLocalities::new(self.runtime.deps.disposal_rules.clone())
    }

    pub fn reset_scan_history(&self) -> ResetScanHistory {
        ResetScanHistory::new(self.runtime.history.clone())
    }
}
