use std::collections::BTreeMap;

use super::{DisposalInstruction, DisposalRule, DisposalType, Locality};

pub const FALLBACK_DETAIL: &str = "material unclear, check local sorting guide";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RuleTableError {
    #[error("rule #{index} for {locality} has no usable trigger")]
    EmptyTriggers { locality: Locality, index: usize },
}

/// Locality → ordered rule list. Order within a list is precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisposalRuleTable {
    rules: BTreeMap<Locality, Vec<DisposalRule>>,
}

impl DisposalRuleTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seed rule lists shipped with the application.
    pub fn builtin() -> Self {
        Self::empty()
            .with_rules(
                Locality::SanFrancisco,
                vec![
                    DisposalRule::new(
                        &["battery", "electronics", "aerosol", "paint", "light bulb"],
                        DisposalType::SpecialDropOff,
                        "Take to a household hazardous waste drop-off site, never the curbside bins.",
                    ),
                    DisposalRule::new(
                        &["film", "wrapper", "styrofoam", "foam"],
                        DisposalType::Trash,
                        "Black bin (landfill): film, wrappers and foam are not accepted in blue or green bins.",
                    ),
                    DisposalRule::new(
                        &["food scrap", "compostable", "paper", "cardboard"],
                        DisposalType::Compost,
                        "Green bin: food scraps, compostable packaging and food-soiled paper.",
                    ),
                    DisposalRule::new(
                        &["plastic", "pet", "hdpe", "glass", "aluminum", "metal can", "carton"],
                        DisposalType::Recycle,
                        "Blue bin: empty and rinse containers before recycling.",
                    ),
                ],
            )
            .with_rules(
                Locality::Chicago,
                vec![
                    DisposalRule::new(
                        &["battery", "electronics", "paint", "light bulb", "aerosol"],
                        DisposalType::SpecialDropOff,
                        "Take to the household chemicals and computer recycling facility.",
                    ),
                    DisposalRule::new(
                        &["film", "wrapper", "styrofoam", "foam"],
                        DisposalType::Trash,
                        "Black cart (landfill): bags, film and foam jam the sorting lines.",
                    ),
                    DisposalRule::new(
                        &[
                            "plastic", "pet", "hdpe", "glass", "aluminum", "metal can", "carton",
                            "paper", "cardboard",
                        ],
                        DisposalType::Recycle,
                        "Blue cart: empty, rinse and place items loose, not bagged.",
                    ),
                    DisposalRule::new(
                        &["food scrap", "compostable"],
                        DisposalType::Compost,
                        "Bring to a compost drop-off site; there is no curbside compost pickup.",
                    ),
                ],
            )
    }

    /// Replaces the whole rule list of `locality`.
    pub fn with_rules(mut self, locality: Locality, rules: Vec<DisposalRule>) -> Self {
        self.rules.insert(locality, rules);
        self
    }

    /// Applies configured rule lists on top of this table, locality by locality.
    pub fn with_overrides(mut self, overrides: &BTreeMap<Locality, Vec<DisposalRule>>) -> Self {
        for (locality, rules) in overrides {
            self.rules.insert(*locality, rules.clone());
        }
        self
    }

    pub fn rules_for(&self, locality: Locality) -> &[DisposalRule] {
        self.rules.get(&locality).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn localities(&self) -> impl Iterator<Item = Locality> + '_ {
        self.rules.keys().copied()
    }

    /// Rejects rules that could never match.
    pub fn validate(&self) -> Result<(), RuleTableError> {
        for (locality, rules) in &self.rules {
            for (index, rule) in rules.iter().enumerate() {
                if rule.triggers.iter().all(|t| t.trim().is_empty()) {
                    return Err(RuleTableError::EmptyTriggers {
                        locality: *locality,
                        index,
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolves the disposal instruction for a product. Never fails: a locality
    /// without rules, or a blob no rule matches, yields the trash fallback.
    pub fn instruction(
        &self,
        locality: Locality,
        packaging_text: &str,
        category: &str,
    ) -> DisposalInstruction {
        let blob = format!("{packaging_text} {category}").to_lowercase();

        match self.rules_for(locality).iter().find(|rule| rule.matches(&blob)) {
            Some(rule) => DisposalInstruction {
                locality,
                disposal_type: rule.disposal_type,
                detail: rule.detail.clone(),
            },
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(locality = locality.as_str(), "no disposal rule matched");

                DisposalInstruction {
                    locality,
                    disposal_type: DisposalType::Trash,
                    detail: FALLBACK_DETAIL.to_string(),
                }
            }
        }
    }
}
