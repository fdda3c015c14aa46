//! EntityRef enum for typed entity access in listener callbacks
//!
//! The integration layer classifies each host object once, at the event
//! boundary, and hands plugins an `EntityRef` variant carrying the
//! capability handle appropriate for that kind. Pattern matching on the
//! variant replaces any per-callback type sniffing, and the compiler
//! checks that dispatch over the known kinds is exhaustive.

use std::fmt;
use std::sync::Arc;

use super::{EntityKind, HiddenMarkerSource, MarkerOwner, Networkable};

/// Typed reference to a host entity.
///
/// One variant per entity kind that carries an event map marker, plus
/// [`EntityRef::Unknown`] as the fallback for every other networked
/// object the host spawns. The patrol helicopter and travelling vendor
/// variants hold a [`HiddenMarkerSource`] because the host object does
/// not expose their marker reference publicly; the explosion marker
/// carries a plain [`Networkable`] because the entity *is* the marker.
///
/// # Example
///
/// ```ignore
/// listeners::on_entity_spawned(|entity| {
///     match entity {
///         EntityRef::PatrolHelicopter(heli) => {
///             if let Some(marker) = heli.marker_reference() {
///                 marker.kill();
///             }
///         }
///         EntityRef::Unknown { classname, .. } => {
///             tracing::trace!("ignoring {}", classname);
///         }
///         _ => {}
///     }
/// });
/// ```
#[derive(Clone)]
pub enum EntityRef {
    /// Patrol helicopter; marker reachable only through the adapter.
    PatrolHelicopter(Arc<dyn HiddenMarkerSource>),

    /// Cargo ship; marker reference exposed directly.
    CargoShip(Arc<dyn MarkerOwner>),

    /// Hackable locked crate; marker reference exposed directly.
    HackableLockedCrate(Arc<dyn MarkerOwner>),

    /// Chinook (CH47) helicopter; marker reference exposed directly.
    ChinookHelicopter(Arc<dyn MarkerOwner>),

    /// Explosion map marker; the entity itself is the marker.
    ExplosionMarker(Arc<dyn Networkable>),

    /// Travelling vendor; marker reachable only through the adapter.
    TravellingVendor(Arc<dyn HiddenMarkerSource>),

    /// Any other networked object - fallback for entities without a
    /// marker of interest.
    Unknown {
        /// Host classname (e.g. "supply_drop", "basic_car")
        classname: String,
        /// Host network index
        index: u32,
    },
}

impl fmt::Debug for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::PatrolHelicopter(h) => f
                .debug_tuple("PatrolHelicopter")
                .field(&format_args!("{:p}", Arc::as_ptr(h)))
                .finish(),
            EntityRef::CargoShip(h) => f
                .debug_tuple("CargoShip")
                .field(&format_args!("{:p}", Arc::as_ptr(h)))
                .finish(),
            EntityRef::HackableLockedCrate(h) => f
                .debug_tuple("HackableLockedCrate")
                .field(&format_args!("{:p}", Arc::as_ptr(h)))
                .finish(),
            EntityRef::ChinookHelicopter(h) => f
                .debug_tuple("ChinookHelicopter")
                .field(&format_args!("{:p}", Arc::as_ptr(h)))
                .finish(),
            EntityRef::ExplosionMarker(h) => f
                .debug_tuple("ExplosionMarker")
                .field(&format_args!("{:p}", Arc::as_ptr(h)))
                .finish(),
            EntityRef::TravellingVendor(h) => f
                .debug_tuple("TravellingVendor")
                .field(&format_args!("{:p}", Arc::as_ptr(h)))
                .finish(),
            EntityRef::Unknown { classname, index } => f
                .debug_struct("Unknown")
                .field("classname", classname)
                .field("index", index)
                .finish(),
        }
    }
}

impl EntityRef {
    /// The recognized kind, or `None` for [`EntityRef::Unknown`].
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            EntityRef::PatrolHelicopter(_) => Some(EntityKind::PatrolHelicopter),
            EntityRef::CargoShip(_) => Some(EntityKind::CargoShip),
            EntityRef::HackableLockedCrate(_) => Some(EntityKind::HackableLockedCrate),
            EntityRef::ChinookHelicopter(_) => Some(EntityKind::ChinookHelicopter),
            EntityRef::ExplosionMarker(_) => Some(EntityKind::ExplosionMarker),
            EntityRef::TravellingVendor(_) => Some(EntityKind::TravellingVendor),
            EntityRef::Unknown { .. } => None,
        }
    }

    /// Name used in log output: the kind name for recognized entities,
    /// the host classname otherwise.
    pub fn classname(&self) -> &str {
        match self {
            EntityRef::Unknown { classname, .. } => classname.as_str(),
            other => other.kind().map(|k| k.as_str()).unwrap_or("unknown"),
        }
    }

    /// Check whether this entity is one of the recognized marker kinds.
    pub fn is_recognized(&self) -> bool {
        self.kind().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopEntity;

    impl Networkable for NoopEntity {
        fn kill(&self) {}
    }

    #[test]
    fn test_unknown_has_no_kind() {
        let entity = EntityRef::Unknown {
            classname: "supply_drop".to_string(),
            index: 42,
        };
        assert_eq!(entity.kind(), None);
        assert!(!entity.is_recognized());
        assert_eq!(entity.classname(), "supply_drop");
    }

    #[test]
    fn test_explosion_marker_kind() {
        let entity = EntityRef::ExplosionMarker(Arc::new(NoopEntity));
        assert_eq!(entity.kind(), Some(EntityKind::ExplosionMarker));
        assert_eq!(entity.classname(), "explosion_marker");
    }
}
