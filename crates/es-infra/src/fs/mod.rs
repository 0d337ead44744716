pub mod app_data_dir;
pub mod csv_export;

pub use app_data_dir::app_data_dir;
pub use csv_export::{write_export_csv, write_export_csv_file};
