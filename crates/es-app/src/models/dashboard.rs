use serde::Serialize;

use es_core::analytics::{AnalyticsSnapshot, LifetimeTotals, TrendPoint};

/// Dashboard read model: the weekly analytics plus the longer-range views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    #[serde(flatten)]
    pub analytics: AnalyticsSnapshot,
    /// Tier points over the last seven days.
    pub environmental_score: u32,
    pub trend: Vec<TrendPoint>,
    pub lifetime: LifetimeTotals,
}
