//! Observer hooks for inspecting a resolve call from the outside.

use glam::Vec2;

use slide_core::AgentId;
use slide_query::CastHit;

use crate::{MoveReport, Resolution};

/// Callbacks invoked by [`Resolver::resolve_observed`][crate::Resolver::resolve_observed]
/// and [`CharacterController::move_by_observed`][crate::CharacterController::move_by_observed].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — contact counter
///
/// ```rust,ignore
/// struct Contacts(usize);
///
/// impl MoveObserver for Contacts {
///     fn on_contact(&mut self, _hit: &CastHit) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait MoveObserver {
    /// A non-self hit blocked the direct move or the slide.
    fn on_contact(&mut self, _hit: &CastHit) {}

    /// A slide along `direction` for `distance` is about to be cast.
    fn on_slide(&mut self, _direction: Vec2, _distance: f32) {}

    /// Stuck recovery pushed the agent to `position` (`iteration` starts at 1).
    fn on_recovery_nudge(&mut self, _iteration: u32, _position: Vec2) {}

    /// The resolver produced its final answer.
    fn on_resolved(&mut self, _resolution: &Resolution) {}

    /// The controller dropped a move to `candidate` as below threshold.
    fn on_suppressed(&mut self, _candidate: Vec2) {}
}

/// A [`MoveObserver`] that does nothing.
pub struct NoopObserver;

impl MoveObserver for NoopObserver {}

// ── StepObserver ──────────────────────────────────────────────────────────────

/// Callbacks invoked by [`step_batch_observed`][crate::step_batch_observed]
/// during the sequential commit phase.
pub trait StepObserver {
    /// Called before any controller is resolved.
    fn on_step_start(&mut self, _controllers: usize) {}

    /// Called once per controller, in ascending `AgentId` order.
    fn on_agent_moved(&mut self, _agent: AgentId, _report: &MoveReport) {}

    /// Called after every commit; `moved` counts committed, non-zero moves.
    fn on_step_end(&mut self, _moved: usize) {}
}

impl StepObserver for NoopObserver {}
