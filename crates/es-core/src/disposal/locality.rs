use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Jurisdictions with a disposal rule list.
///
/// Adding a locality means adding a variant and its rule list in
/// [`super::DisposalRuleTable::builtin`]; matching logic stays the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locality {
    SanFrancisco,
    Chicago,
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported locality: {0}")]
pub struct ParseLocalityError(pub String);

impl Locality {
    pub const ALL: [Locality; 2] = [Locality::SanFrancisco, Locality::Chicago];

    /// Stable identifier used in storage and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Locality::SanFrancisco => "san_francisco",
            Locality::Chicago => "chicago",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Locality::SanFrancisco => "San Francisco",
            Locality::Chicago => "Chicago",
        }
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Locality {
    type Err = ParseLocalityError;

    /// Accepts either the identifier (`san_francisco`) or the label (`San Francisco`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Locality::ALL
            .into_iter()
            .find(|locality| {
                locality.as_str().eq_ignore_ascii_case(needle)
                    || locality.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseLocalityError(s.to_string()))
    }
}
