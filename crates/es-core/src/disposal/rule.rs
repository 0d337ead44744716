use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Locality;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisposalType {
    Recycle,
    Compost,
    SpecialDropOff,
    Trash,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown disposal type: {0}")]
pub struct ParseDisposalTypeError(pub String);

impl DisposalType {
    pub const ALL: [DisposalType; 4] = [
        DisposalType::Recycle,
        DisposalType::Compost,
        DisposalType::SpecialDropOff,
        DisposalType::Trash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DisposalType::Recycle => "recycle",
            DisposalType::Compost => "compost",
            DisposalType::SpecialDropOff => "special_drop_off",
            DisposalType::Trash => "trash",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisposalType::Recycle => "Recycle",
            DisposalType::Compost => "Compost",
            DisposalType::SpecialDropOff => "Special Drop-off",
            DisposalType::Trash => "Trash",
        }
    }
}

impl fmt::Display for DisposalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisposalType {
    type Err = ParseDisposalTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        DisposalType::ALL
            .into_iter()
            .find(|kind| {
                kind.as_str().eq_ignore_ascii_case(needle)
                    || kind.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseDisposalTypeError(s.to_string()))
    }
}

/// One entry of a locality's ordered rule list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposalRule {
    /// Substrings that trigger the rule; any one is enough.
    pub triggers: Vec<String>,
    pub disposal_type: DisposalType,
    pub detail: String,
}

impl DisposalRule {
    pub fn new(triggers: &[&str], disposal_type: DisposalType, detail: &str) -> Self {
        Self {
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            disposal_type,
            detail: detail.to_string(),
        }
    }

    /// Plain substring containment against an already lower-cased blob,
    /// so "glass" also matches inside "fiberglass".
    pub fn matches(&self, blob: &str) -> bool {
        self.triggers
            .iter()
            .filter(|trigger| !trigger.trim().is_empty())
            .any(|trigger| blob.contains(&trigger.to_lowercase()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposalInstruction {
    pub locality: Locality,
    pub disposal_type: DisposalType,
    pub detail: String,
}
