//! Results of collision queries.

use glam::Vec2;
use smallvec::SmallVec;

use slide_core::ColliderId;

/// One contact reported by a circle cast.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastHit {
    /// Portion of the cast distance travelled before contact, in `[0, 1]`.
    ///
    /// - `0.0` = touching at the cast origin
    /// - `0.5` = contact halfway along the cast
    pub fraction: f32,

    /// Unit surface normal at the contact, pointing away from the obstacle.
    pub normal: Vec2,

    /// The collider that was hit.  May be the agent's own collider.
    pub collider: ColliderId,
}

impl CastHit {
    pub fn new(fraction: f32, normal: Vec2, collider: ColliderId) -> Self {
        Self { fraction, normal, collider }
    }

    /// `true` if the hit satisfies the query contract: fraction in `[0, 1]`
    /// and a finite, unit-length normal.
    pub fn is_well_formed(&self) -> bool {
        (0.0..=1.0).contains(&self.fraction)
            && self.normal.is_finite()
            && (self.normal.length_squared() - 1.0).abs() < 1e-3
    }
}

/// Up to two cast hits, nearest first.  Stored inline.
pub type CastHits = SmallVec<[CastHit; 2]>;

/// Up to two colliders present at a position.  Stored inline.
pub type Overlaps = SmallVec<[ColliderId; 2]>;

/// Nearest hit that does not belong to `own`.
#[inline]
pub fn first_blocking(hits: &[CastHit], own: ColliderId) -> Option<&CastHit> {
    hits.iter().find(|h| h.collider != own)
}

/// `true` if nothing other than `own` overlaps.
#[inline]
pub fn is_clear(overlaps: &[ColliderId], own: ColliderId) -> bool {
    overlaps.iter().all(|&c| c == own)
}
