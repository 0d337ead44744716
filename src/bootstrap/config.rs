//! # Configuration Loader
//!
//! Reads `ecoscan.toml` into the [`AppConfig`] DTO and turns its disposal
//! section into a validated [`DisposalRuleTable`].
//!
//! Loading accepts whatever is in the file. Missing sections fall back to
//! their defaults; only the disposal overrides are checked, because a rule
//! that can never match would silently change guidance.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use es_core::{AppConfig, DisposalRuleTable, Locality};
use tracing::{debug, info};

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`AppConfig`].
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Like [`load_config`], but a missing file yields the default configuration.
pub fn load_config_or_default(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }
    load_config(config_path)
}

/// Built-in rule lists with the configured ones replacing them per locality.
pub fn disposal_rules_from_config(config: &AppConfig) -> anyhow::Result<DisposalRuleTable> {
    let mut overrides = BTreeMap::new();
    for (key, rules) in &config.disposal {
        let locality: Locality = key
            .parse()
            .with_context(|| format!("Invalid [disposal.{key}] section"))?;
        info!(locality = locality.as_str(), rules = rules.len(), "Using configured disposal rules");
        overrides.insert(locality, rules.clone());
    }

    let table = DisposalRuleTable::builtin().with_overrides(&overrides);
    table.validate().context("Invalid disposal rules in config")?;
    Ok(table)
}

/// The `[general] default_locality` setting, or San Francisco when unset.
pub fn default_locality(config: &AppConfig) -> anyhow::Result<Locality> {
    let configured = config.general.default_locality.trim();
    if configured.is_empty() {
        return Ok(Locality::SanFrancisco);
    }
    configured
        .parse()
        .context("Invalid [general] default_locality")
}

#[cfg(test)]
mod tests {
    use super::*;
    use es_core::DisposalType;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let file = write_config(
            r#"
            [general]
            default_locality = "chicago"

            [storage]
            database_path = "/path/to/ecoscan.db"

            [lookup]
            base_url = "http://localhost:9000"
            timeout_secs = 3

            [[disposal.chicago]]
            triggers = ["pizza box"]
            disposal_type = "compost"
            detail = "Compost greasy pizza boxes."
        "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.general.default_locality, "chicago");
        assert_eq!(config.storage.database_path, Some(PathBuf::from("/path/to/ecoscan.db")));
        assert_eq!(config.storage.logs_dir, None);
        assert_eq!(config.lookup.base_url, "http://localhost:9000");
        assert_eq!(config.lookup.timeout_secs, 3);
        assert_eq!(config.disposal["chicago"][0].disposal_type, DisposalType::Compost);
    }

    #[test]
    fn test_load_config_fills_missing_sections_with_defaults() {
        let file = write_config("[general]\n");

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.lookup.base_url, "https://world.openfoodfacts.org");
        assert_eq!(config.lookup.timeout_secs, 12);
        assert!(config.disposal.is_empty());
        assert_eq!(default_locality(&config).unwrap(), Locality::SanFrancisco);
    }

    #[test]
    fn test_load_config_returns_io_error_on_file_not_found() {
        let result = load_config(Path::new("/this/path/does/not/exist/ecoscan.toml"));

        let err_msg = result.unwrap_err().to_string().to_lowercase();
        assert!(err_msg.contains("failed to read"), "Expected IO error message, got: {err_msg}");
    }

    #[test]
    fn test_load_config_or_default_tolerates_missing_file() {
        let config =
            load_config_or_default(Path::new("/this/path/does/not/exist/ecoscan.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_config_rejects_malformed_toml() {
        let file = write_config("[general\ndefault_locality = ");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_disposal_override_replaces_locality_list_wholesale() {
        let file = write_config(
            r#"
            [[disposal.chicago]]
            triggers = ["pizza box"]
            disposal_type = "compost"
            detail = "Compost greasy pizza boxes."
        "#,
        );
        let config = load_config(file.path()).unwrap();

        let table = disposal_rules_from_config(&config).unwrap();

        assert_eq!(table.rules_for(Locality::Chicago).len(), 1);
        let glass = table.instruction(Locality::Chicago, "glass bottle", "");
        assert_eq!(glass.disposal_type, DisposalType::Trash);
        let pizza = table.instruction(Locality::Chicago, "pizza box", "");
        assert_eq!(pizza.disposal_type, DisposalType::Compost);
        // Other localities keep their built-in list.
        assert_eq!(
            table.rules_for(Locality::SanFrancisco),
            DisposalRuleTable::builtin().rules_for(Locality::SanFrancisco)
        );
    }

    #[test]
    fn test_disposal_override_rejects_unknown_locality_and_empty_triggers() {
        let unknown = load_config(
            write_config(
                r#"
                [[disposal.springfield]]
                triggers = ["glass"]
                disposal_type = "recycle"
                detail = "x"
            "#,
            )
            .path(),
        )
        .unwrap();
        assert!(disposal_rules_from_config(&unknown).is_err());

        let empty = load_config(
            write_config(
                r#"
                [[disposal.san_francisco]]
                triggers = [" "]
                disposal_type = "recycle"
                detail = "x"
            "#,
            )
            .path(),
        )
        .unwrap();
        assert!(disposal_rules_from_config(&empty).is_err());
    }

    #[test]
    fn test_default_locality_accepts_label_and_rejects_unknown() {
        let mut config = AppConfig::default();
        config.general.default_locality = "Chicago".into();
        assert_eq!(default_locality(&config).unwrap(), Locality::Chicago);

        config.general.default_locality = "Gotham".into();
        assert!(default_locality(&config).is_err());
    }
}
