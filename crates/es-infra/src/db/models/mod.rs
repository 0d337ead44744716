pub mod scan_record_row;

pub use scan_record_row::{NewScanRecordRow, ScanRecordRow};
