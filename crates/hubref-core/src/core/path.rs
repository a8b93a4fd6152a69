use crate::core::error::{HubrefError, HubrefResult};
use std::path::{Path, PathBuf};

/// Get the Hubref home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\hubref
/// - Linux: ~/.config/hubref
/// - macOS: ~/Library/Application Support/hubref
pub fn hubref_home() -> HubrefResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| HubrefError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("hubref"))
}

/// Get the config file path (`<hubref home>/config.yaml`)
pub fn config_file() -> HubrefResult<PathBuf> {
    Ok(hubref_home()?.join("config.yaml"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> HubrefResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
