use chrono::NaiveDate;
use serde::Serialize;

use super::calendar::month_start;
use crate::scan::ScanRecord;

/// Rows beyond this prefix are left out of the rendered table but still
/// counted in the totals.
pub const REPORT_ROW_LIMIT: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub product_name: String,
    pub tier_label: String,
    /// Kilograms, one decimal.
    pub co2_estimate: String,
    pub locality_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    /// First day of the reported month.
    pub month: NaiveDate,
    pub title: String,
    pub rows: Vec<ReportRow>,
    pub total_scans: usize,
    /// Kilograms, one decimal.
    pub total_co2: String,
}

impl MonthlyReport {
    /// Builds the report from the month's records, in the store's order.
    pub fn build(any_date_in_month: NaiveDate, records: &[ScanRecord]) -> Self {
        let month = month_start(any_date_in_month);

        let rows = records
            .iter()
            .take(REPORT_ROW_LIMIT)
            .map(|record| ReportRow {
                product_name: record.product_name().to_string(),
                tier_label: record.impact_tier().label().to_string(),
                co2_estimate: format!("{:.1}", record.co2_estimate()),
                locality_label: record.locality().label().to_string(),
            })
            .collect();

        let total_co2: f64 = records.iter().map(ScanRecord::co2_estimate).sum();

        Self {
            month,
            title: format!("EcoScan Monthly Report: {}", month.format("%B %Y")),
            rows,
            total_scans: records.len(),
            total_co2: format!("{total_co2:.1}"),
        }
    }
}

/// Column names of the full-month export, in file order.
pub const EXPORT_HEADER: [&str; 8] = [
    "id",
    "product_name",
    "barcode",
    "city",
    "impact_score",
    "disposal_type",
    "co2_estimate",
    "timestamp",
];

/// One line of the full-month export. Field order matches [`EXPORT_HEADER`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub id: String,
    pub product_name: String,
    pub barcode: String,
    pub city: String,
    pub impact_score: String,
    pub disposal_type: String,
    pub co2_estimate: f64,
    /// UTC, `YYYY-MM-DD HH:MM:SS.mmm`.
    pub timestamp: String,
}

/// Every record of the month, oldest first. Unlike [`MonthlyReport`] there is
/// no row limit.
pub fn export_rows(records: &[ScanRecord]) -> Vec<ExportRow> {
    let mut ordered: Vec<&ScanRecord> = records.iter().collect();
    ordered.sort_by(|a, b| ScanRecord::history_order(b, a));

    ordered
        .into_iter()
        .map(|record| ExportRow {
            id: record.id().as_str().to_string(),
            product_name: record.product_name().to_string(),
            barcode: record.barcode().to_string(),
            city: record.locality().label().to_string(),
            impact_score: record.impact_tier().as_str().to_string(),
            disposal_type: record.disposal_type().as_str().to_string(),
            co2_estimate: record.co2_estimate(),
            timestamp: record.timestamp().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        })
        .collect()
}

/// `ecoscan_report_YYYY_MM.csv` for the month containing `any_date_in_month`.
pub fn export_file_name(any_date_in_month: NaiveDate) -> String {
    month_start(any_date_in_month)
        .format("ecoscan_report_%Y_%m.csv")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DisposalType, ImpactTier, Locality, ScanDraft, ScanId};
    use chrono::{Duration, TimeZone, Utc};

    fn records(count: usize) -> Vec<ScanRecord> {
        let base = Utc.with_ymd_and_hms(2026, 9, 30, 12, 0, 0).unwrap();
        (0..count)
            .map(|i| {
                let tier = if i % 2 == 0 { ImpactTier::Red } else { ImpactTier::Green };
                ScanRecord::new(
                    ScanId::from(format!("scan-{i:02}")),
                    ScanDraft {
                        barcode: format!("{i:012}"),
                        product_name: format!("Item {i}"),
                        category: "misc".into(),
                        locality: Locality::Chicago,
                        impact_tier: tier,
                        disposal_type: DisposalType::Trash,
                    },
                    base - Duration::minutes(i as i64),
                )
            })
            .collect()
    }

    #[test]
    fn rows_are_capped_but_totals_cover_every_record() {
        let records = records(30);
        let report = MonthlyReport::build(NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(), &records);

        assert_eq!(report.rows.len(), REPORT_ROW_LIMIT);
        assert_eq!(report.total_scans, 30);
        // 15 Red + 15 Green
        assert_eq!(report.total_co2, "87.0");
        assert_eq!(report.rows[0].product_name, "Item 0");
        assert_eq!(report.rows[23].product_name, "Item 23");
    }

    #[test]
    fn rows_carry_labels_and_one_decimal_co2() {
        let report = MonthlyReport::build(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(), &records(2));

        assert_eq!(
            report.rows[0],
            ReportRow {
                product_name: "Item 0".into(),
                tier_label: "High Impact".into(),
                co2_estimate: "5.0".into(),
                locality_label: "Chicago".into(),
            }
        );
        assert_eq!(report.rows[1].co2_estimate, "0.8");
        assert_eq!(report.total_co2, "5.8");
        assert_eq!(report.month, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
        assert_eq!(report.title, "EcoScan Monthly Report: September 2026");
    }

    #[test]
    fn export_keeps_every_record_oldest_first() {
        let records = records(30);

        let rows = export_rows(&records);

        assert_eq!(rows.len(), 30);
        assert_eq!(rows[0].id, "scan-29");
        assert_eq!(rows[29].id, "scan-00");
        assert!(rows.windows(2).all(|pair| pair[0].timestamp <= pair[1].timestamp));
        assert_eq!(
            rows[29],
            ExportRow {
                id: "scan-00".into(),
                product_name: "Item 0".into(),
                barcode: "000000000000".into(),
                city: "Chicago".into(),
                impact_score: "Red".into(),
                disposal_type: "trash".into(),
                co2_estimate: 5.0,
                timestamp: "2026-09-30 12:00:00.000".into(),
            }
        );
    }

    #[test]
    fn export_file_name_is_zero_padded() {
        let name = export_file_name(NaiveDate::from_ymd_opt(2026, 3, 17).unwrap());
        assert_eq!(name, "ecoscan_report_2026_03.csv");
    }

    #[test]
    fn empty_month_has_zero_totals() {
        let report = MonthlyReport::build(NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(), &[]);
        assert!(report.rows.is_empty());
        assert_eq!(report.total_scans, 0);
        assert_eq!(report.total_co2, "0.0");
    }
}
