//! Location of the hook config file.

use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::result::AppResult;

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "webhook";

/// File name of the hook config.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Default config file path for the current user:
/// - Linux:   `$XDG_CONFIG_HOME/webhook/config.yml` or `~/.config/webhook/config.yml`
/// - macOS:   `~/Library/Application Support/webhook/config.yml`
/// - Windows: `%APPDATA%\webhook\config.yml`
pub fn default_config_path() -> AppResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| AppError::configuration("could not determine platform config directory"))?;
    Ok(config_path_in(&base))
}

/// Config file path beneath an arbitrary base directory.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Pick the config file: explicit path first, then the settings value,
/// then the platform default.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    configured: Option<&Path>,
) -> AppResult<PathBuf> {
    match explicit.or(configured) {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}
