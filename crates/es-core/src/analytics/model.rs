use chrono::NaiveDate;
use serde::Serialize;

use crate::impact::ImpactTier;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCo2Point {
    pub date: NaiveDate,
    /// Three-letter weekday, e.g. "Mon".
    pub label: String,
    pub co2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub co2: f64,
    pub scans: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactCount {
    pub tier: ImpactTier,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub total_scans: usize,
    pub total_co2: f64,
    pub streak_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifetimeTotals {
    pub total_scans: usize,
    pub total_co2: f64,
}

/// The three views recomputed on every snapshot change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    pub weekly_series: Vec<DailyCo2Point>,
    pub impact_counts: Vec<ImpactCount>,
    pub summary: WeeklySummary,
}
