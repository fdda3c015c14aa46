//! Configuration system
//!
//! This module provides a trait-based configuration system that supports:
//! - Type-safe config structs via serde
//! - JSON file format, matching the record layout the host persists
//! - Auto-generation of default configs on first run
//! - Manual reload capability
//!
//! # Example
//!
//! ```ignore
//! use serde::{Deserialize, Serialize};
//! use nomarkers_core::PluginConfig;
//!
//! #[derive(Default, Serialize, Deserialize)]
//! pub struct MyPluginConfig {
//!     pub enabled: bool,
//! }
//!
//! impl PluginConfig for MyPluginConfig {
//!     const PLUGIN_NAME: &'static str = "my_plugin";
//! }
//!
//! fn load_config() {
//!     let config = MyPluginConfig::load().unwrap_or_default();
//! }
//! ```

mod loader;

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

pub use loader::{config_dir, plugin_config_path, plugin_config_path_in, set_config_dir};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse persisted JSON content. Fatal at plugin load:
    /// a malformed record is never partially applied.
    #[error("Failed to parse config JSON: {0}")]
    Parse(serde_json::Error),

    /// Failed to serialize config to JSON
    #[error("Failed to serialize config: {0}")]
    Serialize(serde_json::Error),

    /// Could not determine config directory from plugin location
    #[error("Config directory not available - could not resolve plugin base path")]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Trait for plugin configuration types.
///
/// Implement this trait on your config struct to enable automatic
/// loading, saving, and reloading of configuration files.
///
/// # Requirements
///
/// Your config type must implement:
/// - `Default` - for generating initial config files
/// - `Serialize` - for saving to JSON
/// - `DeserializeOwned` - for loading from JSON
/// - `Send + Sync` - for thread-safe access
///
/// Unknown keys in the persisted record are ignored; missing keys fall
/// back to the field's serde default.
pub trait PluginConfig: Default + Serialize + DeserializeOwned + Send + Sync {
    /// The plugin name used for config file path resolution.
    ///
    /// This determines the config file location:
    /// `configs/{PLUGIN_NAME}.json`
    const PLUGIN_NAME: &'static str;

    /// Load config from the resolved config directory, creating the
    /// default if missing.
    fn load() -> ConfigResult<Self> {
        Self::load_from(&config_dir()?)
    }

    /// Load config from an explicit directory, creating the default if
    /// missing.
    fn load_from(dir: &Path) -> ConfigResult<Self> {
        let path = plugin_config_path_in(dir, Self::PLUGIN_NAME);

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
            tracing::debug!("Loaded config for {} from {:?}", Self::PLUGIN_NAME, path);
            Ok(config)
        } else {
            let default = Self::default();
            default.save_to(dir)?;
            tracing::info!(
                "Created default config for {} at {:?}",
                Self::PLUGIN_NAME,
                path
            );
            Ok(default)
        }
    }

    /// Save config to the resolved config directory.
    fn save(&self) -> ConfigResult<()> {
        self.save_to(&config_dir()?)
    }

    /// Save config to an explicit directory.
    ///
    /// Creates parent directories if they don't exist. The write is
    /// synchronous; when this returns the record is on disk.
    fn save_to(&self, dir: &Path) -> ConfigResult<()> {
        let path = plugin_config_path_in(dir, Self::PLUGIN_NAME);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(&path, content)?;
        tracing::debug!("Saved config for {} to {:?}", Self::PLUGIN_NAME, path);
        Ok(())
    }

    /// Reload config from the resolved config directory.
    fn reload(&mut self) -> ConfigResult<()> {
        self.reload_from(&config_dir()?)
    }

    /// Reload config from an explicit directory.
    ///
    /// Updates self with the current file contents.
    fn reload_from(&mut self, dir: &Path) -> ConfigResult<()> {
        let path = plugin_config_path_in(dir, Self::PLUGIN_NAME);
        let content = std::fs::read_to_string(&path)?;
        *self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        tracing::debug!("Reloaded config for {} from {:?}", Self::PLUGIN_NAME, path);
        Ok(())
    }
}
