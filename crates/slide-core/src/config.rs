//! Controller configuration and the validated settings derived from it.
//!
//! `ControllerConfig` is the tunable surface a host exposes (editor fields,
//! TOML/JSON files with the `serde` feature).  [`ControllerConfig::settings`]
//! checks it and produces [`AgentSettings`], the immutable bundle the
//! resolver reads during a call.

use crate::{ColliderId, ConfigError, ConfigResult, LayerMask};

// ── ThresholdSpec ─────────────────────────────────────────────────────────────

/// How the minimum movement threshold is chosen.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThresholdSpec {
    /// A fixed distance in world units.
    Absolute(f32),
    /// A fraction of the collision radius (`0.02` = radius / 50).
    RadiusRatio(f32),
}

impl ThresholdSpec {
    /// Resolve to a distance for an agent of collision radius `radius`.
    #[inline]
    pub fn distance(self, radius: f32) -> f32 {
        match self {
            ThresholdSpec::Absolute(d) => d,
            ThresholdSpec::RadiusRatio(r) => radius * r,
        }
    }
}

// ── RecoveryProbe ─────────────────────────────────────────────────────────────

/// Radius used by the overlap test during stuck recovery.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecoveryProbe {
    /// `radius - minimum_movement`: tests for real clearance, ignoring contacts
    /// that merely touch the surface.
    #[default]
    Shrunk,
    /// The full collision radius.
    Full,
}

impl RecoveryProbe {
    /// Probe radius for a body of `radius` with threshold `minimum_movement`.
    /// Never negative.
    #[inline]
    pub fn radius(self, radius: f32, minimum_movement: f32) -> f32 {
        match self {
            RecoveryProbe::Shrunk => (radius - minimum_movement).max(0.0),
            RecoveryProbe::Full => radius,
        }
    }
}

// ── ControllerConfig ──────────────────────────────────────────────────────────

/// Host-facing configuration for one circular agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    /// Radius of the agent's own collider.
    pub base_radius: f32,

    /// Extra distance added to `base_radius` for collision testing.
    pub radius_buffer: f32,

    /// Smallest displacement worth committing.  Also the distance contacts are
    /// pushed off a surface and the step size of stuck recovery.
    pub minimum_movement: ThresholdSpec,

    /// Upper bound on stuck-recovery nudges per resolve call.
    pub max_recovery_iterations: u32,

    /// Layers tested by both collision queries.
    pub collision_layers: LayerMask,

    /// Overlap radius used while recovering.
    pub recovery_probe: RecoveryProbe,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            base_radius:             0.5,
            radius_buffer:           0.0,
            minimum_movement:        ThresholdSpec::Absolute(0.1),
            max_recovery_iterations: 8,
            collision_layers:        LayerMask::ALL,
            recovery_probe:          RecoveryProbe::Shrunk,
        }
    }
}

impl ControllerConfig {
    /// `base_radius + radius_buffer`.
    #[inline]
    pub fn collision_radius(&self) -> f32 {
        self.base_radius + self.radius_buffer
    }

    /// Check every field without building anything.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.radius_buffer.is_finite() || self.radius_buffer < 0.0 {
            return Err(ConfigError::NegativeBuffer(self.radius_buffer));
        }
        let radius = self.collision_radius();
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        let threshold = self.minimum_movement.distance(radius);
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(())
    }

    /// Validate and derive the per-agent settings for the collider `collider`.
    pub fn settings(&self, collider: ColliderId) -> ConfigResult<AgentSettings> {
        self.validate()?;
        let radius = self.collision_radius();
        Ok(AgentSettings {
            body:                    AgentBody { collider, radius },
            thresholds:              Thresholds::new(self.minimum_movement.distance(radius)),
            max_recovery_iterations: self.max_recovery_iterations,
            collision_layers:        self.collision_layers,
            recovery_probe:          self.recovery_probe,
        })
    }
}

// ── Derived settings ──────────────────────────────────────────────────────────

/// The agent's circular footprint and its self token.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentBody {
    /// The agent's own collider, filtered out of every query result.
    pub collider: ColliderId,
    /// Collision radius (base radius plus buffer).  Always `> 0`.
    pub radius: f32,
}

/// Minimum movement threshold plus its square for cheap comparisons.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    pub minimum_movement: f32,
    pub minimum_movement_sq: f32,
}

impl Thresholds {
    #[inline]
    pub fn new(minimum_movement: f32) -> Self {
        Self {
            minimum_movement,
            minimum_movement_sq: minimum_movement * minimum_movement,
        }
    }

    /// `true` if a displacement of squared length `len_sq` is too small to
    /// commit.
    #[inline]
    pub fn is_below(&self, len_sq: f32) -> bool {
        len_sq < self.minimum_movement_sq
    }
}

/// Validated, immutable settings read by the resolver.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSettings {
    pub body: AgentBody,
    pub thresholds: Thresholds,
    pub max_recovery_iterations: u32,
    pub collision_layers: LayerMask,
    pub recovery_probe: RecoveryProbe,
}

impl AgentSettings {
    /// Radius of the overlap test used during stuck recovery.
    #[inline]
    pub fn recovery_radius(&self) -> f32 {
        self.recovery_probe
            .radius(self.body.radius, self.thresholds.minimum_movement)
    }
}
