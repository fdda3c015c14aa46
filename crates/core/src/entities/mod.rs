//! Host entity model
//!
//! The host engine owns every networked object; plugins only ever hold
//! opaque handles to them. This module defines the narrow capabilities a
//! handle can expose:
//!
//! - [`Networkable`] - the one operation available on every networked
//!   object: ask the host to destroy it.
//! - [`MarkerOwner`] - entities whose map-marker reference is part of the
//!   host object's public surface.
//! - [`HiddenMarkerSource`] - entities whose map-marker reference is not
//!   publicly exposed by the host object and is reachable only through an
//!   adapter supplied by the integration layer.
//!
//! Listener callbacks receive an [`EntityRef`], which pairs each known
//! entity kind with the capability handle appropriate for it.
//!
//! # Example
//!
//! ```ignore
//! use nomarkers_core::{listeners, EntityRef};
//!
//! listeners::on_entity_spawned(|entity| {
//!     if let EntityRef::CargoShip(ship) = entity {
//!         if let Some(marker) = ship.map_marker() {
//!             marker.kill();
//!         }
//!     }
//! });
//! ```

pub mod entity_ref;
pub mod system;

use std::sync::Arc;

pub use entity_ref::EntityRef;
pub use system::{EntityRegistry, WorldSnapshot};

/// A host-owned networked object.
///
/// The only thing a plugin may do with one is ask the host to tear it
/// down. The call is fire-and-forget: the host removes the object from
/// the simulation and from network replication on its own schedule, and
/// calling it on an already-destroyed object is safe.
pub trait Networkable: Send + Sync {
    /// Instruct the host to destroy this object.
    fn kill(&self);
}

/// Shared handle to a map-marker sub-entity.
pub type MarkerRef = Arc<dyn Networkable>;

/// Marker access for entities that expose their marker reference
/// directly (cargo ship, hackable locked crate, Chinook helicopter).
pub trait MarkerOwner: Networkable {
    /// The map-marker sub-entity currently attached, if any.
    fn map_marker(&self) -> Option<MarkerRef>;
}

/// Marker access for entities whose marker reference is not part of the
/// host object's public surface (patrol helicopter, travelling vendor).
///
/// The integration layer implements this as an adapter around the host
/// object, standing in for what would otherwise require reaching into
/// host internals.
pub trait HiddenMarkerSource: Networkable {
    /// The map-marker sub-entity currently attached, if any.
    fn marker_reference(&self) -> Option<MarkerRef>;
}

/// The closed set of entity kinds that carry an event map marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    PatrolHelicopter,
    CargoShip,
    HackableLockedCrate,
    ChinookHelicopter,
    ExplosionMarker,
    TravellingVendor,
}

impl EntityKind {
    /// Every recognized kind, in dispatch order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::PatrolHelicopter,
        EntityKind::CargoShip,
        EntityKind::HackableLockedCrate,
        EntityKind::ChinookHelicopter,
        EntityKind::ExplosionMarker,
        EntityKind::TravellingVendor,
    ];

    /// Stable lowercase name, used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::PatrolHelicopter => "patrol_helicopter",
            EntityKind::CargoShip => "cargo_ship",
            EntityKind::HackableLockedCrate => "hackable_locked_crate",
            EntityKind::ChinookHelicopter => "chinook_helicopter",
            EntityKind::ExplosionMarker => "explosion_marker",
            EntityKind::TravellingVendor => "travelling_vendor",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
