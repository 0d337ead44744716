use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::disposal::DisposalRule;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub storage: StorageConfig,
    pub lookup: LookupConfig,

    /// Rule lists keyed by locality identifier (e.g. `san_francisco`).
    /// A configured list replaces the built-in one for that locality.
    pub disposal: BTreeMap<String, Vec<DisposalRule>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Locality identifier or label; may be empty.
    pub default_locality: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database path (path info only, no existence check)
    pub database_path: Option<PathBuf>,
    pub logs_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: "https://world.openfoodfacts.org".to_string(),
            timeout_secs: 12,
        }
    }
}
