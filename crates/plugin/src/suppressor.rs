//! Marker suppression
//!
//! One dispatch path serves both host events: classify the entity by its
//! [`EntityRef`] variant, check the matching suppression flag, and if it
//! is set, destroy the entity's map marker. The explosion marker is the
//! one kind where the entity itself is the marker, so it is destroyed
//! directly.

use parking_lot::RwLock;
use tracing::{info, trace};

use nomarkers_core::{EntityRef, EntityRegistry, MarkerRef};

use crate::config::MarkerConfig;

/// Which host event routed an entity into the suppressor.
///
/// Both paths behave identically; the source only shows up in trace
/// output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventSource {
    /// The one-time world sweep after server initialization
    ServerInitialized,
    /// A per-entity spawn notification
    EntitySpawned,
}

impl EventSource {
    fn as_str(&self) -> &'static str {
        match self {
            EventSource::ServerInitialized => "server_initialized",
            EventSource::EntitySpawned => "entity_spawned",
        }
    }
}

/// Destroys event map markers as their owners appear in the world.
///
/// Holds the plugin configuration; a config reload replaces the record
/// wholesale under the write lock, so concurrent readers only ever see a
/// complete record.
pub struct MarkerSuppressor {
    config: RwLock<MarkerConfig>,
}

impl MarkerSuppressor {
    pub fn new(config: MarkerConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Swap in a freshly loaded configuration record.
    pub fn replace_config(&self, config: MarkerConfig) {
        *self.config.write() = config;
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> MarkerConfig {
        self.config.read().clone()
    }

    /// Destroy the entity's map marker if its kind is configured for
    /// suppression.
    ///
    /// Returns `true` when a destroy call was issued. Unrecognized
    /// entities, kinds whose flag is off, and entities without a live
    /// marker are silent no-ops.
    pub fn suppress_if_configured(&self, entity: &EntityRef, source: EventSource) -> bool {
        let Some(kind) = entity.kind() else {
            return false;
        };

        if !self.config.read().is_disabled(kind) {
            return false;
        }

        let killed = match entity {
            EntityRef::PatrolHelicopter(heli) => kill_marker(heli.marker_reference()),
            EntityRef::CargoShip(ship) => kill_marker(ship.map_marker()),
            EntityRef::HackableLockedCrate(crate_) => kill_marker(crate_.map_marker()),
            EntityRef::ChinookHelicopter(chinook) => kill_marker(chinook.map_marker()),
            // The entity is the marker
            EntityRef::ExplosionMarker(marker) => {
                marker.kill();
                true
            }
            EntityRef::TravellingVendor(vendor) => kill_marker(vendor.marker_reference()),
            EntityRef::Unknown { .. } => false,
        };

        if killed {
            trace!(source = source.as_str(), kind = %kind, "map marker removed");
        }
        killed
    }

    /// Process every entity already alive when the world finished
    /// initializing.
    ///
    /// Enumeration order is whatever the host produces. Returns the
    /// number of markers destroyed.
    pub fn sweep_world(&self, registry: &dyn EntityRegistry) -> usize {
        let mut removed = 0;
        for entity in registry.live_entities() {
            if self.suppress_if_configured(&entity, EventSource::ServerInitialized) {
                removed += 1;
            }
        }
        info!("World sweep removed {} event map markers", removed);
        removed
    }
}

fn kill_marker(marker: Option<MarkerRef>) -> bool {
    match marker {
        Some(marker) => {
            marker.kill();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entity_of_kind, TestEntity};
    use nomarkers_core::{EntityKind, WorldSnapshot};

    fn suppressor_with(config: MarkerConfig) -> MarkerSuppressor {
        MarkerSuppressor::new(config)
    }

    fn all_enabled() -> MarkerSuppressor {
        suppressor_with(MarkerConfig::default())
    }

    fn only_disabled(kind: EntityKind) -> MarkerConfig {
        let mut config = MarkerConfig::default();
        config.disable_patrol_helicopter_marker = kind == EntityKind::PatrolHelicopter;
        config.disable_cargo_ship_marker = kind == EntityKind::CargoShip;
        config.disable_hackable_locked_crate_marker = kind == EntityKind::HackableLockedCrate;
        config.disable_chinook_helicopter_marker = kind == EntityKind::ChinookHelicopter;
        config.disable_explosion_marker = kind == EntityKind::ExplosionMarker;
        config.disable_travelling_vendor_marker = kind == EntityKind::TravellingVendor;
        config
    }

    #[test]
    fn test_destroys_marker_for_every_kind_when_enabled() {
        let suppressor = all_enabled();

        for kind in EntityKind::ALL {
            let entity = TestEntity::with_marker();
            let entity_ref = entity_of_kind(kind, &entity);

            assert!(
                suppressor.suppress_if_configured(&entity_ref, EventSource::EntitySpawned),
                "{} marker not suppressed",
                kind
            );

            if kind == EntityKind::ExplosionMarker {
                // The entity itself is the marker
                assert_eq!(entity.kills(), 1);
                assert_eq!(entity.marker_kills(), 0);
            } else {
                assert_eq!(entity.marker_kills(), 1, "{} marker", kind);
                assert_eq!(entity.kills(), 0, "{} owner must survive", kind);
            }
        }
    }

    #[test]
    fn test_flag_gates_each_kind_independently() {
        for enabled_kind in EntityKind::ALL {
            let suppressor = suppressor_with(only_disabled(enabled_kind));

            for kind in EntityKind::ALL {
                let entity = TestEntity::with_marker();
                let entity_ref = entity_of_kind(kind, &entity);
                let suppressed =
                    suppressor.suppress_if_configured(&entity_ref, EventSource::EntitySpawned);

                assert_eq!(suppressed, kind == enabled_kind);
            }
        }
    }

    #[test]
    fn test_absent_marker_is_a_silent_noop() {
        let suppressor = all_enabled();

        for kind in EntityKind::ALL {
            if kind == EntityKind::ExplosionMarker {
                continue;
            }
            let entity = TestEntity::without_marker();
            let entity_ref = entity_of_kind(kind, &entity);

            assert!(!suppressor.suppress_if_configured(&entity_ref, EventSource::EntitySpawned));
            assert_eq!(entity.kills(), 0);
        }
    }

    #[test]
    fn test_unrecognized_entity_is_a_silent_noop() {
        let suppressor = all_enabled();
        let entity_ref = EntityRef::Unknown {
            classname: "supply_drop".to_string(),
            index: 12,
        };

        assert!(!suppressor.suppress_if_configured(&entity_ref, EventSource::EntitySpawned));
    }

    #[test]
    fn test_explosion_marker_destroyed_exactly_once() {
        let suppressor = all_enabled();
        let entity = TestEntity::with_marker();
        let entity_ref = entity_of_kind(EntityKind::ExplosionMarker, &entity);

        assert!(suppressor.suppress_if_configured(&entity_ref, EventSource::EntitySpawned));
        assert_eq!(entity.kills(), 1);
    }

    #[test]
    fn test_world_sweep_covers_every_recognized_entity() {
        let suppressor = all_enabled();

        let entities: Vec<_> = [
            EntityKind::PatrolHelicopter,
            EntityKind::CargoShip,
            EntityKind::HackableLockedCrate,
            EntityKind::ChinookHelicopter,
            EntityKind::TravellingVendor,
        ]
        .into_iter()
        .map(|kind| (kind, TestEntity::with_marker()))
        .collect();

        let mut world: Vec<EntityRef> = entities
            .iter()
            .map(|(kind, entity)| entity_of_kind(*kind, entity))
            .collect();
        world.push(EntityRef::Unknown {
            classname: "supply_drop".to_string(),
            index: 99,
        });

        let removed = suppressor.sweep_world(&WorldSnapshot::new(world));

        assert_eq!(removed, 5);
        for (kind, entity) in &entities {
            assert_eq!(entity.marker_kills(), 1, "{} marker", kind);
        }
    }

    #[test]
    fn test_spawn_and_sweep_paths_share_behavior() {
        let suppressor = all_enabled();

        let spawned = TestEntity::with_marker();
        let spawned_ref = entity_of_kind(EntityKind::CargoShip, &spawned);
        suppressor.suppress_if_configured(&spawned_ref, EventSource::EntitySpawned);

        let preexisting = TestEntity::with_marker();
        let world = WorldSnapshot::new(vec![entity_of_kind(EntityKind::CargoShip, &preexisting)]);
        suppressor.sweep_world(&world);

        assert_eq!(spawned.marker_kills(), preexisting.marker_kills());
    }

    #[test]
    fn test_replace_config_switches_behavior_wholesale() {
        let suppressor = all_enabled();
        let entity = TestEntity::with_marker();
        let entity_ref = entity_of_kind(EntityKind::CargoShip, &entity);

        let mut reloaded = MarkerConfig::default();
        reloaded.disable_cargo_ship_marker = false;
        suppressor.replace_config(reloaded);

        assert!(!suppressor.suppress_if_configured(&entity_ref, EventSource::EntitySpawned));
        assert_eq!(entity.marker_kills(), 0);
        assert!(!suppressor.config().disable_cargo_ship_marker);
    }
}
