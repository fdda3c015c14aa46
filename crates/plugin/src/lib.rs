//! No Event Markers
//!
//! Removes map markers for events such as patrol helicopters, hackable
//! crates, and cargo ships. Each marker kind is gated by its own
//! configuration flag; enabled kinds have their marker destroyed both
//! during the one-time sweep after the world initializes and whenever a
//! matching entity spawns later.
//!
//! The host loader is expected to construct a [`NoMarkersPlugin`] at
//! plugin load (failing the load if the persisted config is malformed),
//! fire the core listener events as the world delivers them, and call
//! [`NoMarkersPlugin::unload`] at teardown.

pub mod config;
pub mod suppressor;

#[cfg(test)]
pub(crate) mod test_support;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use nomarkers_core::{
    config_dir, listeners, ConfigResult, ListenerKey,
};

pub use config::{MarkerConfig, CURRENT_VERSION};
pub use suppressor::{EventSource, MarkerSuppressor};

/// Plugin display name
pub const PLUGIN_NAME: &str = "No Event Markers";

/// Plugin version, also the version written into saved config records
pub const PLUGIN_VERSION: &str = CURRENT_VERSION;

/// The loaded plugin: owns the configuration (via its suppressor) and
/// the listener registrations that feed it.
pub struct NoMarkersPlugin {
    suppressor: Arc<MarkerSuppressor>,
    config_dir: PathBuf,
    listeners: Vec<ListenerKey>,
}

impl NoMarkersPlugin {
    /// Load the plugin using the resolved config directory.
    ///
    /// A malformed persisted config is fatal: the error propagates and
    /// no listeners are registered.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(config_dir()?)
    }

    /// Load the plugin with an explicit config directory.
    pub fn load_from(dir: impl Into<PathBuf>) -> ConfigResult<Self> {
        let dir = dir.into();
        let config = MarkerConfig::load_current_from(&dir)?;

        info!("{} v{} loading...", PLUGIN_NAME, PLUGIN_VERSION);

        let suppressor = Arc::new(MarkerSuppressor::new(config));

        let sweeper = Arc::clone(&suppressor);
        let on_init = listeners::on_server_initialized(move |registry| {
            sweeper.sweep_world(registry);
        });

        let spawn_handler = Arc::clone(&suppressor);
        let on_spawn = listeners::on_entity_spawned(move |entity| {
            spawn_handler.suppress_if_configured(entity, EventSource::EntitySpawned);
        });

        Ok(Self {
            suppressor,
            config_dir: dir,
            listeners: vec![on_init, on_spawn],
        })
    }

    /// The suppressor driving both event paths.
    pub fn suppressor(&self) -> &MarkerSuppressor {
        &self.suppressor
    }

    /// Re-read the persisted config and swap it in wholesale.
    ///
    /// Invoked by the host when an operator requests a config reload.
    /// The running record is untouched if the load fails.
    pub fn reload_config(&self) -> ConfigResult<()> {
        let config = MarkerConfig::load_current_from(&self.config_dir)?;
        self.suppressor.replace_config(config);
        info!("{} configuration reloaded", PLUGIN_NAME);
        Ok(())
    }

    /// Unregister from host events and drop the configuration.
    pub fn unload(self) {
        info!("{} unloading...", PLUGIN_NAME);
        // Listener removal happens in Drop
    }
}

impl Drop for NoMarkersPlugin {
    fn drop(&mut self) {
        for key in self.listeners.drain(..) {
            listeners::remove_listener(key);
        }
    }
}
