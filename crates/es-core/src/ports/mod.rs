//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! implementations, keeping the scoring and analytics logic independent of
//! SQLite, HTTP and the system clock.

mod clock;
pub mod errors;
mod product_lookup;
mod scan_record_repository;

pub use clock::ClockPort;
pub use errors::{LookupError, ScanStoreError};
pub use product_lookup::ProductLookupPort;
pub use scan_record_repository::ScanRecordRepositoryPort;
