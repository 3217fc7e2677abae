//! The collision-query capability.
//!
//! # Pluggability
//!
//! The resolver never looks up a physics engine itself; the host injects any
//! type implementing [`CollisionQuery`].  Broad-phase and narrow-phase
//! detection stay inside the host's engine.
//!
//! # Contract
//!
//! - Results are ordered nearest first and hold at most two entries.
//! - The agent's own collider may appear in the results; callers filter it.
//! - Queries are read-only: two identical calls against the same snapshot
//!   return the same results.

use glam::Vec2;

use slide_core::LayerMask;

use crate::{CastHits, Overlaps};

pub trait CollisionQuery {
    /// Sweep a circle of `radius` from `origin` along the unit vector
    /// `direction` for `max_distance`, testing colliders on `layers`.
    fn circle_cast(
        &self,
        origin:       Vec2,
        radius:       f32,
        direction:    Vec2,
        max_distance: f32,
        layers:       LayerMask,
    ) -> CastHits;

    /// Colliders on `layers` intersecting a circle of `radius` at `position`.
    fn circle_overlap(&self, position: Vec2, radius: f32, layers: LayerMask) -> Overlaps;
}

impl<Q: CollisionQuery + ?Sized> CollisionQuery for &Q {
    #[inline]
    fn circle_cast(
        &self,
        origin:       Vec2,
        radius:       f32,
        direction:    Vec2,
        max_distance: f32,
        layers:       LayerMask,
    ) -> CastHits {
        (**self).circle_cast(origin, radius, direction, max_distance, layers)
    }

    #[inline]
    fn circle_overlap(&self, position: Vec2, radius: f32, layers: LayerMask) -> Overlaps {
        (**self).circle_overlap(position, radius, layers)
    }
}

// ── NoCollisions ──────────────────────────────────────────────────────────────

/// A [`CollisionQuery`] over an empty world: every cast is clear and nothing
/// ever overlaps.
///
/// Useful as a placeholder in tests or for agents that should ignore
/// obstacles entirely.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoCollisions;

impl CollisionQuery for NoCollisions {
    fn circle_cast(
        &self,
        _origin:       Vec2,
        _radius:       f32,
        _direction:    Vec2,
        _max_distance: f32,
        _layers:       LayerMask,
    ) -> CastHits {
        CastHits::new()
    }

    fn circle_overlap(&self, _position: Vec2, _radius: f32, _layers: LayerMask) -> Overlaps {
        Overlaps::new()
    }
}
