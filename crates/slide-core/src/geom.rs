//! Planar vector helpers used by the resolver.
//!
//! All functions are pure.  Inputs to [`signed_normalized_angle`] and
//! [`rotate90`] are expected to be unit length; passing a zero direction is a
//! caller bug and simply yields zero.

use glam::Vec2;

/// Perp-dot of two unit vectors: `-a.x * b.y + a.y * b.x`.
///
/// This is `sin θ` of the signed angle from `a` to `b` measured about −Z
/// (clockwise positive with y up), not an angle in radians.  `0.0` means `a` and `b` are parallel or anti-parallel (a
/// straight-on hit when `a` is the reversed travel direction), `±1.0` means
/// they are perpendicular (a grazing hit).  The sign tells which side `b`
/// lies on relative to `a`.
#[inline]
pub fn signed_normalized_angle(a: Vec2, b: Vec2) -> f32 {
    -a.x * b.y + a.y * b.x
}

/// Rotate `v` by 90° about the plane normal pointing into the plane (−Z).
///
/// `sign >= 0` rotates by +90°, which with a y-up frame is clockwise:
/// `(x, y) → (y, -x)`.  A negative sign rotates the other way:
/// `(x, y) → (-y, x)`.
#[inline]
pub fn rotate90(v: Vec2, sign: f32) -> Vec2 {
    if sign >= 0.0 {
        Vec2::new(v.y, -v.x)
    } else {
        Vec2::new(-v.y, v.x)
    }
}

/// Split a motion into `(unit direction, distance)`.
///
/// Zero motion yields `(Vec2::ZERO, 0.0)`.
#[inline]
pub fn direction_and_distance(motion: Vec2) -> (Vec2, f32) {
    let distance = motion.length();
    if distance > 0.0 {
        (motion / distance, distance)
    } else {
        (Vec2::ZERO, 0.0)
    }
}
