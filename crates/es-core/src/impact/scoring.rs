//! Deterministic keyword scorer.
//!
//! Rules are evaluated in declaration order and the first match wins. Meat
//! indicators are checked first so an ambiguous product (e.g. "vegan beef
//! style") resolves to the most severe tier.

use serde::{Deserialize, Serialize};

use super::ImpactTier;
use crate::product::ProductSignals;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub tier: ImpactTier,
    pub reason: String,
}

struct KeywordRule {
    terms: &'static [&'static str],
    tier: ImpactTier,
    reason: &'static str,
}

const SCORING_RULES: &[KeywordRule] = &[
    KeywordRule {
        terms: &["beef", "meat"],
        tier: ImpactTier::Red,
        reason: "meat-heavy category",
    },
    KeywordRule {
        terms: &["nova 4", "packaged", "ultra-processed", "chips"],
        tier: ImpactTier::Yellow,
        reason: "likely ultra-processed",
    },
    KeywordRule {
        terms: &["plant", "vegan", "vegetarian", "plant-based"],
        tier: ImpactTier::Green,
        reason: "plant-based indicators",
    },
    KeywordRule {
        terms: &["bulk", "recyclable", "paper"],
        tier: ImpactTier::Green,
        reason: "lower packaging impact",
    },
];

const DEFAULT_TIER: ImpactTier = ImpactTier::Yellow;
const DEFAULT_REASON: &str = "insufficient data, default medium";

/// Classifies a product from its text signals. Never fails.
pub fn score(signals: &ProductSignals) -> ImpactAssessment {
    let blob = signals.text_blob();

    let (tier, reason) = SCORING_RULES
        .iter()
        .find(|rule| rule.terms.iter().any(|term| blob.contains(term)))
        .map(|rule| (rule.tier, rule.reason))
        .unwrap_or((DEFAULT_TIER, DEFAULT_REASON));

    #[cfg(feature = "tracing")]
    tracing::debug!(tier = %tier, reason, "scored product");

    ImpactAssessment {
        tier,
        reason: reason.to_string(),
    }
}

/// Lower-impact suggestion shown next to a result.
pub fn suggestion(tier: ImpactTier, product_name: &str) -> String {
    let name = match product_name.trim() {
        "" => "this product",
        name => name,
    };

    match tier {
        ImpactTier::Red => {
            format!("Try a plant-based version of {name} and choose minimal packaging.")
        }
        ImpactTier::Yellow => {
            format!("Consider a less-processed or refill/bulk alternative to {name}.")
        }
        ImpactTier::Green => {
            format!("{name} is a lower-impact choice. Prioritize local sourcing when possible.")
        }
    }
}
