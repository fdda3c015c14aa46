//! Config path resolution
//!
//! Handles resolving paths for configuration files based on the plugin's
//! install location, with an explicit override for hosts (and tests)
//! that dictate the directory themselves.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use parking_lot::RwLock;

use super::{ConfigError, ConfigResult};

static CONFIG_DIR_OVERRIDE: LazyLock<RwLock<Option<PathBuf>>> =
    LazyLock::new(|| RwLock::new(None));

/// Pin the config directory to an explicit path.
///
/// The host loader calls this during startup when it knows where plugin
/// configs live; afterwards [`config_dir`] returns this path instead of
/// deriving one from the plugin binary's location.
pub fn set_config_dir<P: AsRef<Path>>(dir: P) {
    *CONFIG_DIR_OVERRIDE.write() = Some(dir.as_ref().to_path_buf());
}

/// Returns the base configs directory.
///
/// Uses the override set via [`set_config_dir`] when present. Otherwise
/// the plugin is assumed to be loaded from `<base>/bin/`, and the result
/// is `<base>/configs/`.
pub fn config_dir() -> ConfigResult<PathBuf> {
    if let Some(dir) = CONFIG_DIR_OVERRIDE.read().as_ref() {
        return Ok(dir.clone());
    }

    let exe = std::env::current_exe().map_err(ConfigError::Io)?;

    // Navigate: plugin binary -> bin/ -> <base>/
    exe.parent()
        .and_then(|p| p.parent())
        .map(|base| base.join("configs"))
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the path for a plugin's config file inside `dir`.
///
/// Path: `{dir}/{plugin_name}.json`
pub fn plugin_config_path_in(dir: &Path, plugin_name: &str) -> PathBuf {
    dir.join(format!("{}.json", plugin_name))
}

/// Returns the resolved path for a plugin's config file.
pub fn plugin_config_path(plugin_name: &str) -> ConfigResult<PathBuf> {
    Ok(plugin_config_path_in(&config_dir()?, plugin_name))
}
