//! Mock host objects for tests
//!
//! The host engine is absent under test, so these stand-ins implement
//! the capability traits with kill counters. `TestEntity` implements
//! every marker-access capability, letting one type play any entity
//! kind.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use nomarkers_core::{
    EntityKind, EntityRef, HiddenMarkerSource, MarkerOwner, MarkerRef, Networkable,
};

/// A marker sub-entity that counts how often the host was asked to
/// destroy it.
pub(crate) struct TestMarker {
    kills: AtomicUsize,
}

impl TestMarker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            kills: AtomicUsize::new(0),
        })
    }

    pub fn kills(&self) -> usize {
        self.kills.load(Ordering::SeqCst)
    }
}

impl Networkable for TestMarker {
    fn kill(&self) {
        self.kills.fetch_add(1, Ordering::SeqCst);
    }
}

/// A host entity with an optional attached marker and its own kill
/// counter.
pub(crate) struct TestEntity {
    kills: AtomicUsize,
    marker: Option<Arc<TestMarker>>,
}

impl TestEntity {
    pub fn with_marker() -> Arc<Self> {
        Arc::new(Self {
            kills: AtomicUsize::new(0),
            marker: Some(TestMarker::new()),
        })
    }

    pub fn without_marker() -> Arc<Self> {
        Arc::new(Self {
            kills: AtomicUsize::new(0),
            marker: None,
        })
    }

    /// Times the entity itself was destroyed.
    pub fn kills(&self) -> usize {
        self.kills.load(Ordering::SeqCst)
    }

    /// Times the attached marker was destroyed (0 if none attached).
    pub fn marker_kills(&self) -> usize {
        self.marker.as_ref().map(|m| m.kills()).unwrap_or(0)
    }
}

impl Networkable for TestEntity {
    fn kill(&self) {
        self.kills.fetch_add(1, Ordering::SeqCst);
    }
}

impl MarkerOwner for TestEntity {
    fn map_marker(&self) -> Option<MarkerRef> {
        self.marker.clone().map(|m| m as MarkerRef)
    }
}

impl HiddenMarkerSource for TestEntity {
    fn marker_reference(&self) -> Option<MarkerRef> {
        self.marker.clone().map(|m| m as MarkerRef)
    }
}

/// Wrap a `TestEntity` in the `EntityRef` variant for `kind`.
pub(crate) fn entity_of_kind(kind: EntityKind, entity: &Arc<TestEntity>) -> EntityRef {
    match kind {
        EntityKind::PatrolHelicopter => EntityRef::PatrolHelicopter(entity.clone()),
        EntityKind::CargoShip => EntityRef::CargoShip(entity.clone()),
        EntityKind::HackableLockedCrate => EntityRef::HackableLockedCrate(entity.clone()),
        EntityKind::ChinookHelicopter => EntityRef::ChinookHelicopter(entity.clone()),
        EntityKind::ExplosionMarker => EntityRef::ExplosionMarker(entity.clone()),
        EntityKind::TravellingVendor => EntityRef::TravellingVendor(entity.clone()),
    }
}
