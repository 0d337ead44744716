use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::disposal::{DisposalType, Locality};
use crate::ids::ScanId;
use crate::impact::ImpactTier;

/// Everything the caller decides about a scan before it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanDraft {
    pub barcode: String,
    pub product_name: String,
    pub category: String,
    pub locality: Locality,
    pub impact_tier: ImpactTier,
    pub disposal_type: DisposalType,
}

/// A finalized scan. Created once on save, never updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanRecord {
    id: ScanId,
    barcode: String,
    product_name: String,
    category: String,
    locality: Locality,
    impact_tier: ImpactTier,
    co2_estimate: f64,
    disposal_type: DisposalType,
    timestamp: DateTime<Utc>,
}

impl ScanRecord {
    /// Creates a new record. The CO2 estimate always comes from the tier.
    pub fn new(id: ScanId, draft: ScanDraft, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            barcode: draft.barcode,
            product_name: draft.product_name,
            category: draft.category,
            locality: draft.locality,
            co2_estimate: draft.impact_tier.co2_kg(),
            impact_tier: draft.impact_tier,
            disposal_type: draft.disposal_type,
            timestamp,
        }
    }

    /// Rebuilds a record exactly as it was persisted.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: ScanId,
        barcode: String,
        product_name: String,
        category: String,
        locality: Locality,
        impact_tier: ImpactTier,
        co2_estimate: f64,
        disposal_type: DisposalType,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            barcode,
            product_name,
            category,
            locality,
            impact_tier,
            co2_estimate,
            disposal_type,
            timestamp,
        }
    }

    /// History order: newest first, ties broken by id descending.
    pub fn history_order(a: &ScanRecord, b: &ScanRecord) -> Ordering {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.id.cmp(&a.id))
    }

    pub fn id(&self) -> &ScanId {
        &self.id
    }

    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn locality(&self) -> Locality {
        self.locality
    }

    pub fn impact_tier(&self) -> ImpactTier {
        self.impact_tier
    }

    pub fn co2_estimate(&self) -> f64 {
        self.co2_estimate
    }

    pub fn disposal_type(&self) -> DisposalType {
        self.disposal_type
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
