//! Entity lifecycle listener
//!
//! - OnEntitySpawned: called when an entity becomes active in the world

use std::sync::LazyLock;

use parking_lot::RwLock;
use slotmap::SecondaryMap;

use super::{register_key, ListenerKey, ListenerType};
use crate::entities::EntityRef;

/// Callback for entity events, receives a typed EntityRef
pub type EntityCallback = Box<dyn Fn(&EntityRef) + Send + Sync>;

struct EntitySpawnedRegistry {
    callbacks: SecondaryMap<ListenerKey, EntityCallback>,
}

static ENTITY_SPAWNED_REGISTRY: LazyLock<RwLock<EntitySpawnedRegistry>> = LazyLock::new(|| {
    RwLock::new(EntitySpawnedRegistry {
        callbacks: SecondaryMap::new(),
    })
});

/// Register a callback to be called when an entity is spawned
///
/// The entity is fully initialized at this point. The callback receives
/// an [`EntityRef`] which provides typed access to the entity.
///
/// # Returns
/// A key that can be used to unregister the callback via `remove_listener`.
pub fn on_entity_spawned<F>(callback: F) -> ListenerKey
where
    F: Fn(&EntityRef) + Send + Sync + 'static,
{
    let key = register_key(ListenerType::EntitySpawned);
    ENTITY_SPAWNED_REGISTRY
        .write()
        .callbacks
        .insert(key, Box::new(callback));
    key
}

pub(super) fn remove_entity_spawned(key: ListenerKey) -> bool {
    ENTITY_SPAWNED_REGISTRY
        .write()
        .callbacks
        .remove(key)
        .is_some()
}

/// Fire all entity spawned callbacks
///
/// Called by the integration layer once per newly spawned entity.
pub fn fire_entity_spawned(entity: &EntityRef) {
    tracing::trace!("Firing OnEntitySpawned: {}", entity.classname());
    let registry = ENTITY_SPAWNED_REGISTRY.read();
    for (_, callback) in registry.callbacks.iter() {
        callback(entity);
    }
}
