//! Collision layer masks.

use std::fmt;
use std::ops::BitOr;

/// A 32-bit set of collision layers.
///
/// The resolver never interprets the mask; it forwards it unchanged to both
/// collision queries so the host can decide which obstacles block the agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask containing only `layer` (0..32).  Out-of-range layers give `NONE`.
    #[inline]
    pub fn from_layer(layer: u32) -> Self {
        LayerMask(1u32.checked_shl(layer).unwrap_or(0))
    }

    /// `true` if every bit of `other` is set in `self`.
    #[inline]
    pub fn contains(self, other: LayerMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// `true` if the two masks share at least one layer.
    #[inline]
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn union(self, other: LayerMask) -> Self {
        LayerMask(self.0 | other.0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for LayerMask {
    /// Collide with everything.
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for LayerMask {
    type Output = LayerMask;
    #[inline]
    fn bitor(self, rhs: LayerMask) -> LayerMask {
        self.union(rhs)
    }
}

impl fmt::Display for LayerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#034b}", self.0)
    }
}
