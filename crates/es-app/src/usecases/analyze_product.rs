use std::ops::RangeInclusive;
use std::sync::Arc;

use tracing::info;

use es_core::impact::{score, suggestion};
use es_core::ports::{LookupError, ProductLookupPort};
use es_core::{DisposalRuleTable, Locality, ProductMetadata};

use crate::models::ProductAnalysis;

const BARCODE_LEN: RangeInclusive<usize> = 5..=32;

/// Trims the barcode and checks it is 5 to 32 ASCII letters or digits.
///
/// The barcode ends up in a lookup URL path, so anything else is rejected
/// before any I/O.
pub fn validate_barcode(raw: &str) -> Result<&str, LookupError> {
    let barcode = raw.trim();
    if BARCODE_LEN.contains(&barcode.len()) && barcode.chars().all(|c| c.is_ascii_alphanumeric())
    {
        Ok(barcode)
    } else {
        Err(LookupError::InvalidBarcode(raw.to_string()))
    }
}

/// Scores and classifies already-fetched metadata. Pure; never fails.
pub fn analyze_metadata(
    barcode: &str,
    locality: Locality,
    metadata: &ProductMetadata,
    rules: &DisposalRuleTable,
) -> ProductAnalysis {
    let product_name = metadata.display_name();
    let assessment = score(&metadata.signals());
    let disposal = rules.instruction(locality, &metadata.packaging_text, &metadata.category);

    ProductAnalysis {
        barcode: barcode.to_string(),
        locality,
        category: metadata.category.clone(),
        image_ref: metadata.image_ref.clone(),
        packaging_text: metadata.packaging_text.clone(),
        impact_tier: assessment.tier,
        impact_label: assessment.tier.label().to_string(),
        impact_reason: assessment.reason,
        co2_estimate: assessment.tier.co2_kg(),
        disposal_type: disposal.disposal_type,
        disposal_detail: disposal.detail,
        suggestion: suggestion(assessment.tier, &product_name),
        product_name,
    }
}

/// Looks a barcode up upstream and derives its impact and disposal guidance.
/// Nothing is persisted.
pub struct AnalyzeProduct {
    lookup: Arc<dyn ProductLookupPort>,
    rules: Arc<DisposalRuleTable>,
}

impl AnalyzeProduct {
    pub fn from_ports(lookup: Arc<dyn ProductLookupPort>, rules: Arc<DisposalRuleTable>) -> Self {
        Self { lookup, rules }
    }

    /// Lookup failures are returned unchanged.
    #[tracing::instrument(
        name = "usecase.analyze_product.execute",
        skip(self, locality),
        fields(locality = locality.as_str())
    )]
    pub async fn execute(
        &self,
        barcode: &str,
        locality: Locality,
    ) -> Result<ProductAnalysis, LookupError> {
        let barcode = validate_barcode(barcode)?;
        let metadata = self.lookup.lookup(barcode).await?;

        let analysis = analyze_metadata(barcode, locality, &metadata, &self.rules);
        info!(
            barcode,
            tier = analysis.impact_tier.as_str(),
            disposal = analysis.disposal_type.as_str(),
            "Product analyzed"
        );
        Ok(analysis)
    }
}
