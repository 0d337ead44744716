use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "ecoscan";

/// EcoScan data root under the platform data directory.
///
/// - macOS: ~/Library/Application Support/ecoscan
/// - Windows: %APPDATA%\ecoscan
/// - Linux: $XDG_DATA_HOME/ecoscan or ~/.local/share/ecoscan
///
/// Directories are not created here; callers decide when to create them.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join(APP_DIR_NAME))
}
