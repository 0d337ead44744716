use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse environmental-footprint classification.
///
/// Variants are declared in severity order, so the derived `Ord` ranks
/// `Green < Yellow < Red`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactTier {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown impact tier: {0}")]
pub struct ParseImpactTierError(pub String);

impl ImpactTier {
    pub const ALL: [ImpactTier; 3] = [ImpactTier::Green, ImpactTier::Yellow, ImpactTier::Red];

    /// Fixed CO2-equivalent estimate in kilograms.
    pub fn co2_kg(self) -> f64 {
        match self {
            ImpactTier::Green => 0.8,
            ImpactTier::Yellow => 2.5,
            ImpactTier::Red => 5.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImpactTier::Green => "Low Impact",
            ImpactTier::Yellow => "Medium Impact",
            ImpactTier::Red => "High Impact",
        }
    }

    /// Environmental score contribution; lower impact earns more points.
    pub fn points(self) -> u32 {
        match self {
            ImpactTier::Green => 3,
            ImpactTier::Yellow => 2,
            ImpactTier::Red => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImpactTier::Green => "Green",
            ImpactTier::Yellow => "Yellow",
            ImpactTier::Red => "Red",
        }
    }
}

impl fmt::Display for ImpactTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImpactTier {
    type Err = ParseImpactTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImpactTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseImpactTierError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn co2_constants_are_fixed_per_tier() {
        assert_eq!(ImpactTier::Green.co2_kg(), 0.8);
        assert_eq!(ImpactTier::Yellow.co2_kg(), 2.5);
        assert_eq!(ImpactTier::Red.co2_kg(), 5.0);
    }

    #[test]
    fn severity_order_follows_co2() {
        assert!(ImpactTier::Green < ImpactTier::Yellow);
        assert!(ImpactTier::Yellow < ImpactTier::Red);
        for pair in ImpactTier::ALL.windows(2) {
            assert!(pair[0].co2_kg() < pair[1].co2_kg());
        }
    }

    #[test]
    fn parses_stored_names_case_insensitively() {
        assert_eq!("Red".parse::<ImpactTier>().unwrap(), ImpactTier::Red);
        assert_eq!("yellow".parse::<ImpactTier>().unwrap(), ImpactTier::Yellow);
        assert!("purple".parse::<ImpactTier>().is_err());
    }
}
