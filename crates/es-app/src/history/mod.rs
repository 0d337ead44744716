mod store;

pub use store::{HistorySnapshot, ScanHistoryStore};
