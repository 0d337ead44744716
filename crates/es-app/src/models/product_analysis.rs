use serde::Serialize;

use es_core::{DisposalType, ImpactTier, Locality, ScanDraft};

/// Everything shown to the user after a lookup, before anything is saved.
///
/// This is a presentation model, not a domain entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductAnalysis {
    pub barcode: String,
    pub locality: Locality,
    pub product_name: String,
    pub category: String,
    pub image_ref: Option<String>,
    pub packaging_text: String,

    pub impact_tier: ImpactTier,
    pub impact_label: String,
    pub impact_reason: String,
    pub co2_estimate: f64,

    pub disposal_type: DisposalType,
    pub disposal_detail: String,

    pub suggestion: String,
}

impl ProductAnalysis {
    pub fn to_draft(&self) -> ScanDraft {
        ScanDraft {
            barcode: self.barcode.clone(),
            product_name: self.product_name.clone(),
            category: self.category.clone(),
            locality: self.locality,
            impact_tier: self.impact_tier,
            disposal_type: self.disposal_type,
        }
    }
}
