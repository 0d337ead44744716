//! Views derived from a scan history snapshot.
//!
//! Everything here is a pure function of `(snapshot, now)`; nothing is cached
//! or persisted, so views can be recomputed whenever the snapshot changes.

pub mod calendar;
mod engine;
mod model;
mod report;

pub use engine::{
    daily_co2_series, environmental_score, impact_counts, lifetime_totals, recompute,
    streak_days, trend_line, weekly_summary, TREND_DAYS, WEEK_DAYS,
};
pub use model::{
    AnalyticsSnapshot, DailyCo2Point, ImpactCount, LifetimeTotals, TrendPoint, WeeklySummary,
};
pub use report::{
    export_file_name, export_rows, ExportRow, MonthlyReport, ReportRow, EXPORT_HEADER,
    REPORT_ROW_LIMIT,
};
