//! Plugin configuration
//!
//! The persisted record is a flat JSON object: a version string plus one
//! boolean per suppressible marker kind, under the key names the host
//! has always persisted. Records written by older plugin versions are
//! migrated in place on load and saved straight back, so after
//! [`MarkerConfig::load_current_from`] every flag is defined and the
//! version is current.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use nomarkers_core::config::plugin_config_path_in;
use nomarkers_core::{ConfigResult, EntityKind, PluginConfig};

/// Current plugin version, written into every saved record.
pub const CURRENT_VERSION: &str = "1.2.1";

fn enabled() -> bool {
    true
}

/// Suppression flags, one per marker kind.
///
/// Missing flag keys load as `true`: an absent key means the record
/// predates the flag, and the backfill value for every flag is `true`.
/// A missing version loads as `""`, which orders before every release
/// and therefore triggers the full reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerConfig {
    #[serde(rename = "Version", default)]
    pub version: String,

    #[serde(rename = "Disable Patrol Helicopter Marker", default = "enabled")]
    pub disable_patrol_helicopter_marker: bool,

    #[serde(rename = "Disable Hackable Locked Crate Marker", default = "enabled")]
    pub disable_hackable_locked_crate_marker: bool,

    #[serde(rename = "Disable Cargo Ship Marker", default = "enabled")]
    pub disable_cargo_ship_marker: bool,

    #[serde(rename = "Disable Chinook Helicopter Marker", default = "enabled")]
    pub disable_chinook_helicopter_marker: bool,

    #[serde(rename = "Disable Explosion Marker", default = "enabled")]
    pub disable_explosion_marker: bool,

    #[serde(rename = "Disable Travelling Vendor Marker", default = "enabled")]
    pub disable_travelling_vendor_marker: bool,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            disable_patrol_helicopter_marker: true,
            disable_hackable_locked_crate_marker: true,
            disable_cargo_ship_marker: true,
            disable_chinook_helicopter_marker: true,
            disable_explosion_marker: true,
            disable_travelling_vendor_marker: true,
        }
    }
}

impl PluginConfig for MarkerConfig {
    const PLUGIN_NAME: &'static str = "no_event_markers";
}

impl MarkerConfig {
    /// Whether the given kind's marker should be suppressed.
    pub fn is_disabled(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::PatrolHelicopter => self.disable_patrol_helicopter_marker,
            EntityKind::CargoShip => self.disable_cargo_ship_marker,
            EntityKind::HackableLockedCrate => self.disable_hackable_locked_crate_marker,
            EntityKind::ChinookHelicopter => self.disable_chinook_helicopter_marker,
            EntityKind::ExplosionMarker => self.disable_explosion_marker,
            EntityKind::TravellingVendor => self.disable_travelling_vendor_marker,
        }
    }

    /// Bring a record written by an older plugin version up to date.
    ///
    /// Steps apply cumulatively, oldest first, each backfilling only the
    /// fields introduced in that release; already-current records are
    /// left untouched. Version strings are ordered by plain lexical
    /// comparison, matching how every released version of this plugin
    /// has compared them.
    ///
    /// Returns `true` if the record was behind and got rewritten.
    pub fn migrate(&mut self) -> bool {
        if self.version.as_str() >= CURRENT_VERSION {
            return false;
        }

        warn!("Config changes detected! Updating...");

        let from = self.version.clone();
        let defaults = MarkerConfig::default();

        if self.version.as_str() < "1.0.0" {
            *self = defaults.clone();
        }

        if self.version.as_str() < "1.1.0" {
            self.disable_chinook_helicopter_marker = defaults.disable_chinook_helicopter_marker;
            self.disable_explosion_marker = defaults.disable_explosion_marker;
        }

        if self.version.as_str() < "1.2.0" {
            self.disable_travelling_vendor_marker = defaults.disable_travelling_vendor_marker;
        }

        self.version = CURRENT_VERSION.to_string();
        warn!(
            "Config update complete! Updated from version {} to {}",
            from, CURRENT_VERSION
        );
        true
    }

    /// Load the record from the resolved config directory.
    pub fn load_current() -> ConfigResult<Self> {
        Self::load_current_from(&nomarkers_core::config_dir()?)
    }

    /// Load the record from `dir`, migrate it if needed, and persist it
    /// back.
    ///
    /// On a fresh install the defaults are written out; on every later
    /// load the (possibly migrated) record is saved straight back, so
    /// the on-disk copy always carries the current version. A malformed
    /// record is fatal: the parse error propagates and the plugin does
    /// not load.
    pub fn load_current_from(dir: &Path) -> ConfigResult<Self> {
        let path = plugin_config_path_in(dir, Self::PLUGIN_NAME);
        if !path.exists() {
            let config = MarkerConfig::default();
            config.save_to(dir)?;
            return Ok(config);
        }

        let mut config = MarkerConfig::load_from(dir)?;
        config.migrate();
        config.save_to(dir)?;
        Ok(config)
    }
}
