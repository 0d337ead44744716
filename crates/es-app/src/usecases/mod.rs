pub mod analyze_product;
pub mod build_monthly_report;
pub mod compute_dashboard;
pub mod export_monthly_scans;
pub mod list_localities;
pub mod list_scan_history;
pub mod reset_scan_history;
pub mod save_scan;

pub use analyze_product::{analyze_metadata, validate_barcode, AnalyzeProduct};
pub use build_monthly_report::{BuildMonthlyReport, ReportError};
pub use compute_dashboard::ComputeDashboard;
pub use export_monthly_scans::{ExportMonthlyScans, MonthlyExport};
pub use list_localities::ListLocalities;
pub use list_scan_history::ListScanHistory;
pub use reset_scan_history::ResetScanHistory;
pub use save_scan::SaveScan;
