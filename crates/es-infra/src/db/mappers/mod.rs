pub mod scan_record_mapper;

pub use scan_record_mapper::ScanRecordRowMapper;
