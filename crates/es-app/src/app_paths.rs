use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub db_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_data_root(root: &Path) -> Self {
        Self {
            db_path: root.join("ecoscan.db"),
            config_path: root.join("ecoscan.toml"),
            logs_dir: root.join("logs"),
        }
    }

    /// Applies explicit storage locations from configuration.
    pub fn with_overrides(mut self, db_path: Option<PathBuf>, logs_dir: Option<PathBuf>) -> Self {
        if let Some(db_path) = db_path {
            self.db_path = db_path;
        }
        if let Some(logs_dir) = logs_dir {
            self.logs_dir = logs_dir;
        }
        self
    }
}
