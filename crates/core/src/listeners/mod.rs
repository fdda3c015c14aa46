//! Global listeners for host-delivered events
//!
//! The host calls into the plugin at two points: once when the world has
//! finished initializing, and once for every entity spawned afterwards.
//! This module provides the callback registration system for both.
//! Callbacks are stored in a thread-safe registry and invoked
//! synchronously, on the host's processing thread, when the integration
//! layer fires the corresponding event.
//!
//! # Example
//!
//! ```ignore
//! use nomarkers_core::listeners;
//!
//! let key = listeners::on_entity_spawned(|entity| {
//!     tracing::trace!("spawned: {}", entity.classname());
//! });
//!
//! // Later, unregister if needed
//! listeners::remove_listener(key);
//! ```

pub mod entity;
pub mod server;

use std::sync::LazyLock;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key for registered listeners, used for removal
    pub struct ListenerKey;
}

/// Internal enum to track which registry a listener belongs to
#[derive(Clone, Copy, Debug)]
enum ListenerType {
    ServerInitialized,
    EntitySpawned,
}

/// Allocates listener keys and remembers each key's event type so
/// `remove_listener` can route the removal.
struct KeyRegistry {
    keys: SlotMap<ListenerKey, ListenerType>,
}

static KEY_REGISTRY: LazyLock<RwLock<KeyRegistry>> = LazyLock::new(|| {
    RwLock::new(KeyRegistry {
        keys: SlotMap::with_key(),
    })
});

/// Allocate a key in the global registry
fn register_key(listener_type: ListenerType) -> ListenerKey {
    KEY_REGISTRY.write().keys.insert(listener_type)
}

/// Remove a listener by its key
///
/// Returns `true` if the listener was found and removed.
pub fn remove_listener(key: ListenerKey) -> bool {
    let listener_type = KEY_REGISTRY.write().keys.remove(key);

    match listener_type {
        Some(ListenerType::ServerInitialized) => server::remove_server_initialized(key),
        Some(ListenerType::EntitySpawned) => entity::remove_entity_spawned(key),
        None => false,
    }
}

// Re-export public API
pub use entity::on_entity_spawned;
pub use server::on_server_initialized;

// Re-export fire functions for the host integration layer
pub use entity::fire_entity_spawned;
pub use server::fire_server_initialized;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_unknown_key_is_false() {
        assert!(!remove_listener(ListenerKey::default()));
    }
}
