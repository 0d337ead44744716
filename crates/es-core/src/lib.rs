//! # es-core
//!
//! Core domain models and business logic for EcoScan.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! impact scoring, locality disposal rules, the scan record model and the
//! analytics that are derived from a history snapshot.

// Public module exports
pub mod analytics;
pub mod config;
pub mod disposal;
pub mod ids;
pub mod impact;
pub mod ports;
pub mod product;
pub mod scan;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use disposal::{DisposalInstruction, DisposalRule, DisposalRuleTable, DisposalType, Locality};
pub use ids::ScanId;
pub use impact::{ImpactAssessment, ImpactTier};
pub use product::{ProductMetadata, ProductSignals};
pub use scan::{ScanDraft, ScanRecord};
