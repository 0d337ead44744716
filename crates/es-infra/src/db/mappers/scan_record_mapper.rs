use anyhow::{anyhow, Result};
use chrono::DateTime;
use es_core::{ScanId, ScanRecord};

use crate::db::models::{NewScanRecordRow, ScanRecordRow};
use crate::db::ports::{InsertMapper, RowMapper};

pub struct ScanRecordRowMapper;

impl InsertMapper<ScanRecord, NewScanRecordRow> for ScanRecordRowMapper {
    fn to_row(&self, domain: &ScanRecord) -> Result<NewScanRecordRow> {
        Ok(NewScanRecordRow {
            id: domain.id().to_string(),
            barcode: domain.barcode().to_string(),
            product_name: domain.product_name().to_string(),
            category: domain.category().to_string(),
            locality: domain.locality().as_str().to_string(),
            impact_tier: domain.impact_tier().as_str().to_string(),
            co2_estimate: domain.co2_estimate(),
            disposal_type: domain.disposal_type().as_str().to_string(),
            scanned_at_ms: domain.timestamp().timestamp_millis(),
        })
    }
}

impl RowMapper<ScanRecordRow, ScanRecord> for ScanRecordRowMapper {
    fn to_domain(&self, row: &ScanRecordRow) -> Result<ScanRecord> {
        let timestamp = DateTime::from_timestamp_millis(row.scanned_at_ms)
            .ok_or_else(|| anyhow!("scan {} has out-of-range timestamp {}", row.id, row.scanned_at_ms))?;

        Ok(ScanRecord::restore(
            ScanId::from(row.id.clone()),
            row.barcode.clone(),
            row.product_name.clone(),
            row.category.clone(),
            row.locality.parse()?,
            row.impact_tier.parse()?,
            row.co2_estimate,
            row.disposal_type.parse()?,
            timestamp,
        ))
    }
}
