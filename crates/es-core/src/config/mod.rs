//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration structures mapped from `ecoscan.toml`. No validation and no
//! I/O happens here; the binary's bootstrap reads and parses the file.

mod app_config;

pub use app_config::{AppConfig, GeneralConfig, LookupConfig, StorageConfig};
