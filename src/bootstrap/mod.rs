pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

use anyhow::Context;
use es_app::AppPaths;

pub use config::{disposal_rules_from_config, load_config, load_config_or_default};
pub use runtime::AppRuntime;
pub use wiring::wire_dependencies;

use crate::cli::Cli;

/// Resolves paths and config, installs tracing, wires dependencies and runs
/// the requested command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_root = es_infra::fs::app_data_dir()?;
    let default_paths = AppPaths::from_app_data_root(&data_root);

    let config_path = cli.config.clone().unwrap_or_else(|| default_paths.config_path.clone());
    let config = load_config_or_default(&config_path)?;

    let paths = default_paths
        .with_overrides(config.storage.database_path.clone(), config.storage.logs_dir.clone())
        .with_overrides(cli.db.clone(), None);

    self::tracing::init_tracing_subscriber(Some(&paths.logs_dir))?;
    ::tracing::debug!(
        config = %config_path.display(),
        db = %paths.db_path.display(),
        "Starting ecoscan"
    );

    let disposal_rules = disposal_rules_from_config(&config)?;
    let default_locality = config::default_locality(&config)?;

    let deps = wire_dependencies(&config, &paths.db_path, disposal_rules)
        .context("Failed to wire application dependencies")?;
    let runtime = AppRuntime::new(deps, default_locality).await;

    crate::commands::dispatch(&runtime, cli.command).await
}
