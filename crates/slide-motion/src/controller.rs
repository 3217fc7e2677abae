//! A stateful character controller: current position plus commit guard.

use glam::Vec2;
use tracing::trace;

use slide_core::{AgentSettings, ColliderId, ControllerConfig, LayerMask, RecoveryProbe, ThresholdSpec};
use slide_query::CollisionQuery;

use crate::{MotionResult, MoveObserver, NoopObserver, Outcome, Resolution, Resolver};

// ── MoveReport ────────────────────────────────────────────────────────────────

/// Result of one [`CharacterController::move_by`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveReport {
    /// Position before the move.
    pub from: Vec2,
    /// Position after the move (equals `from` when not committed).
    pub to: Vec2,
    /// How the resolver reached its candidate position.
    pub outcome: Outcome,
    /// `false` if the candidate was closer than the minimum movement
    /// threshold and the position was left unchanged.
    pub committed: bool,
}

impl MoveReport {
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.to - self.from
    }
}

// ── CharacterController ───────────────────────────────────────────────────────

/// Moves one circular agent through a host's collision world.
///
/// Each [`move_by`][Self::move_by] resolves the requested motion and then
/// applies the commit guard: a candidate whose squared distance from the
/// current position is below the threshold squared is dropped, which keeps
/// the agent from jittering a hair's width against corners every frame.
///
/// Create via [`ControllerBuilder`] or [`CharacterController::new`].
#[derive(Clone, Debug)]
pub struct CharacterController {
    position: Vec2,
    resolver: Resolver,
}

impl CharacterController {
    pub fn new(position: Vec2, resolver: Resolver) -> Self {
        Self { position, resolver }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Teleport without any collision testing.
    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[inline]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    #[inline]
    pub fn settings(&self) -> &AgentSettings {
        self.resolver.settings()
    }

    /// Move by `motion`, sliding along whatever `query` reports.
    pub fn move_by<Q: CollisionQuery>(&mut self, motion: Vec2, query: &Q) -> MoveReport {
        self.move_by_observed(motion, query, &mut NoopObserver)
    }

    /// [`move_by`][Self::move_by] with observer callbacks.
    pub fn move_by_observed<Q, O>(&mut self, motion: Vec2, query: &Q, observer: &mut O) -> MoveReport
    where
        Q: CollisionQuery,
        O: MoveObserver,
    {
        let resolution = self
            .resolver
            .resolve_observed(self.position, motion, query, observer);
        self.commit(resolution, observer)
    }

    /// Apply the commit guard to an already computed resolution.
    ///
    /// Batch stepping resolves every controller first and commits afterwards;
    /// this is the second half of that split.
    pub fn commit<O: MoveObserver>(&mut self, resolution: Resolution, observer: &mut O) -> MoveReport {
        let from = self.position;
        let candidate = resolution.position;

        let committed = !self
            .settings()
            .thresholds
            .is_below((candidate - from).length_squared());

        if committed {
            self.position = candidate;
        } else if resolution.outcome != Outcome::Idle {
            trace!(?from, ?candidate, "move below threshold suppressed");
            observer.on_suppressed(candidate);
        }

        MoveReport {
            from,
            to: self.position,
            outcome: resolution.outcome,
            committed,
        }
    }
}

// ── ControllerBuilder ─────────────────────────────────────────────────────────

/// Fluent builder for [`CharacterController`].
///
/// # Required inputs
///
/// - `ColliderId` — the agent's own collider, used to ignore self-hits.
///
/// # Optional inputs (have defaults)
///
/// | Method                       | Default                          |
/// |------------------------------|----------------------------------|
/// | `.config(c)`                 | `ControllerConfig::default()`    |
/// | `.position(p)`               | `Vec2::ZERO`                     |
/// | `.base_radius(r)`            | `0.5`                            |
/// | `.radius_buffer(b)`          | `0.0`                            |
/// | `.minimum_movement(t)`       | `ThresholdSpec::Absolute(0.1)`   |
/// | `.max_recovery_iterations(n)`| `8`                              |
/// | `.collision_layers(m)`       | `LayerMask::ALL`                 |
/// | `.recovery_probe(p)`         | `RecoveryProbe::Shrunk`          |
///
/// # Example
///
/// ```rust,ignore
/// let mut controller = ControllerBuilder::new(ColliderId(3))
///     .position(Vec2::new(1.0, 2.0))
///     .base_radius(0.4)
///     .collision_layers(LayerMask::from_layer(1))
///     .build()?;
/// controller.move_by(Vec2::new(0.5, 0.0), &world);
/// ```
pub struct ControllerBuilder {
    collider: ColliderId,
    position: Vec2,
    config:   ControllerConfig,
}

impl ControllerBuilder {
    pub fn new(collider: ColliderId) -> Self {
        Self {
            collider,
            position: Vec2::ZERO,
            config:   ControllerConfig::default(),
        }
    }

    /// Replace the whole configuration (e.g. one loaded from a file).
    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn base_radius(mut self, radius: f32) -> Self {
        self.config.base_radius = radius;
        self
    }

    pub fn radius_buffer(mut self, buffer: f32) -> Self {
        self.config.radius_buffer = buffer;
        self
    }

    pub fn minimum_movement(mut self, threshold: ThresholdSpec) -> Self {
        self.config.minimum_movement = threshold;
        self
    }

    pub fn max_recovery_iterations(mut self, n: u32) -> Self {
        self.config.max_recovery_iterations = n;
        self
    }

    pub fn collision_layers(mut self, layers: LayerMask) -> Self {
        self.config.collision_layers = layers;
        self
    }

    pub fn recovery_probe(mut self, probe: RecoveryProbe) -> Self {
        self.config.recovery_probe = probe;
        self
    }

    /// Validate the configuration and return a ready-to-use controller.
    pub fn build(self) -> MotionResult<CharacterController> {
        let resolver = Resolver::from_config(&self.config, self.collider)?;
        Ok(CharacterController::new(self.position, resolver))
    }
}
