//! # Application Dependencies
//!
//! Parameter grouping for constructing the runtime. Not a builder: there are
//! no defaults and no hidden logic, every dependency is required.

use std::sync::Arc;

use es_core::ports::{ClockPort, ProductLookupPort, ScanRecordRepositoryPort};
use es_core::DisposalRuleTable;

pub struct AppDeps {
    // Storage
    pub scan_repo: Arc<dyn ScanRecordRepositoryPort>,

    // Upstream product database
    pub product_lookup: Arc<dyn ProductLookupPort>,

    pub clock: Arc<dyn ClockPort>,

    /// Validated rule table (built-ins merged with configured overrides).
    pub disposal_rules: Arc<DisposalRuleTable>,
}
