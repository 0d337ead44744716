mod record;

pub use record::{ScanDraft, ScanRecord};
