use crate::db::schema::scan_record;
use diesel::prelude::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = scan_record)]
pub struct ScanRecordRow {
    pub id: String,
    pub barcode: String,
    pub product_name: String,
    pub category: String,
    pub locality: String,
    pub impact_tier: String,
    pub co2_estimate: f64,
    pub disposal_type: String,
    pub scanned_at_ms: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = scan_record)]
pub struct NewScanRecordRow {
    pub id: String,
    pub barcode: String,
    pub product_name: String,
    pub category: String,
    pub locality: String,
    pub impact_tier: String,
    pub co2_estimate: f64,
    pub disposal_type: String,
    pub scanned_at_ms: i64,
}
