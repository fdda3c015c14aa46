//! Server lifecycle listener
//!
//! - OnServerInitialized: called once, after the world has finished
//!   loading and every pre-existing entity is live

use std::sync::LazyLock;

use parking_lot::RwLock;
use slotmap::SecondaryMap;

use super::{register_key, ListenerKey, ListenerType};
use crate::entities::EntityRegistry;

/// Callback for the server-initialized event.
///
/// The event itself carries no per-entity data; callbacks enumerate the
/// world through the registry they are handed.
pub type ServerInitializedCallback = Box<dyn Fn(&dyn EntityRegistry) + Send + Sync>;

struct ServerInitializedRegistry {
    callbacks: SecondaryMap<ListenerKey, ServerInitializedCallback>,
}

static SERVER_INITIALIZED_REGISTRY: LazyLock<RwLock<ServerInitializedRegistry>> =
    LazyLock::new(|| {
        RwLock::new(ServerInitializedRegistry {
            callbacks: SecondaryMap::new(),
        })
    });

/// Register a callback to be called when the server finishes initializing
///
/// # Arguments
/// The callback receives the host's live-entity registry, which it may
/// enumerate to process entities that predate the plugin.
///
/// # Returns
/// A key that can be used to unregister the callback via `remove_listener`.
pub fn on_server_initialized<F>(callback: F) -> ListenerKey
where
    F: Fn(&dyn EntityRegistry) + Send + Sync + 'static,
{
    let key = register_key(ListenerType::ServerInitialized);
    SERVER_INITIALIZED_REGISTRY
        .write()
        .callbacks
        .insert(key, Box::new(callback));
    key
}

pub(super) fn remove_server_initialized(key: ListenerKey) -> bool {
    SERVER_INITIALIZED_REGISTRY
        .write()
        .callbacks
        .remove(key)
        .is_some()
}

/// Fire all server-initialized callbacks
///
/// Called by the integration layer once the world is up.
pub fn fire_server_initialized(registry: &dyn EntityRegistry) {
    tracing::info!("Firing OnServerInitialized");
    let listeners = SERVER_INITIALIZED_REGISTRY.read();
    for (_, callback) in listeners.callbacks.iter() {
        callback(registry);
    }
}
