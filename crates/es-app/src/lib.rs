//! EcoScan Application Orchestration Layer
//!
//! This crate contains the use cases and the in-memory scan history snapshot
//! that analytics are computed from.

pub mod app_paths;
pub mod deps;
pub mod history;
pub mod models;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use history::ScanHistoryStore;
