mod scan_record_repo;

pub use scan_record_repo::*;
