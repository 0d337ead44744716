//! # Dependency Injection
//!
//! Creates the infrastructure implementations and groups them into
//! [`AppDeps`]. This is the only place that depends on `es-infra` and
//! `es-app` together; it assembles, it does not decide.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use es_app::AppDeps;
use es_core::ports::{ClockPort, ProductLookupPort, ScanRecordRepositoryPort};
use es_core::{AppConfig, DisposalRuleTable};
use es_infra::db::executor::DieselSqliteExecutor;
use es_infra::db::mappers::ScanRecordRowMapper;
use es_infra::db::pool::{init_db_pool, DbPool};
use es_infra::db::repositories::DieselScanRecordRepository;
use es_infra::{MonotonicClock, OpenFoodFactsClient, SystemClock};

pub type WiringResult<T> = Result<T, WiringError>;

/// Infrastructure initialization failures.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),

    #[error("Product lookup initialization failed: {0}")]
    LookupInit(String),
}

/// Creates the SQLite pool, making the parent directory first.
///
/// # Errors
///
/// Returns `WiringError::DatabaseInit` if the directory cannot be created,
/// the path is not valid UTF-8, or the pool or migrations fail.
fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {:#}", e)))
}

pub fn wire_dependencies(
    config: &AppConfig,
    db_path: &Path,
    disposal_rules: DisposalRuleTable,
) -> WiringResult<AppDeps> {
    let db_pool = create_db_pool(db_path)?;
    let scan_repo: Arc<dyn ScanRecordRepositoryPort> = Arc::new(DieselScanRecordRepository::new(
        DieselSqliteExecutor::new(db_pool),
        ScanRecordRowMapper,
    ));

    let product_lookup: Arc<dyn ProductLookupPort> = Arc::new(
        OpenFoodFactsClient::new(
            config.lookup.base_url.clone(),
            Duration::from_secs(config.lookup.timeout_secs),
        )
        .map_err(|e| WiringError::LookupInit(format!("{:#}", e)))?,
    );

    let clock: Arc<dyn ClockPort> = Arc::new(MonotonicClock::new(SystemClock));

    Ok(AppDeps {
        scan_repo,
        product_lookup,
        clock,
        disposal_rules: Arc::new(disposal_rules),
    })
}
