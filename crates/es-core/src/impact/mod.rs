mod scoring;
mod tier;

pub use scoring::{score, suggestion, ImpactAssessment};
pub use tier::{ImpactTier, ParseImpactTierError};
