use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use es_core::analytics::{export_file_name, export_rows, ExportRow};

use crate::history::ScanHistoryStore;
use crate::usecases::ReportError;

/// Every scan of one month, oldest first, plus the suggested file name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyExport {
    pub file_name: String,
    pub rows: Vec<ExportRow>,
}

/// Collects the full-month export from the current history snapshot.
pub struct ExportMonthlyScans {
    store: Arc<ScanHistoryStore>,
}

impl ExportMonthlyScans {
    pub fn new(store: Arc<ScanHistoryStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, year: i32, month: u32) -> Result<MonthlyExport, ReportError> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(ReportError::InvalidMonth { year, month })?;

        let records = self.store.records_in_month(first_day);
        debug!(year, month, records = records.len(), "Exporting monthly scans");

        Ok(MonthlyExport {
            file_name: export_file_name(first_day),
            rows: export_rows(&records),
        })
    }
}
