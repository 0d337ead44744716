//! ID type wrappers for type safety.

mod id_macro;
pub mod scan_id;

pub use scan_id::ScanId;
