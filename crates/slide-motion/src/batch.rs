//! Stepping many controllers against one collision snapshot.
//!
//! # Two-phase step
//!
//! ```text
//! ① Resolve — every controller resolves its motion against the same
//!             read-only query (parallel with the `parallel` feature).
//! ② Commit  — in ascending AgentId order, apply the commit guard and
//!             update each controller's position.
//! ```
//!
//! No controller observes another's uncommitted move during ①, so the result
//! is the same whether ① ran sequentially or on Rayon's pool.  Controllers do
//! not collide with each other here; if the host registers agents in its
//! collision world, it must refresh that world between steps.

use glam::Vec2;

use slide_core::AgentId;
use slide_query::CollisionQuery;

use crate::{
    CharacterController, MotionError, MotionResult, MoveReport, NoopObserver, Resolution,
    StepObserver,
};

/// Move every controller by its motion (`motions[i]` for `controllers[i]`).
///
/// Returns one [`MoveReport`] per controller, indexed like the inputs.
pub fn step_batch<Q>(
    controllers: &mut [CharacterController],
    motions:     &[Vec2],
    query:       &Q,
) -> MotionResult<Vec<MoveReport>>
where
    Q: CollisionQuery + Sync,
{
    step_batch_observed(controllers, motions, query, &mut NoopObserver)
}

/// [`step_batch`] with observer callbacks.
pub fn step_batch_observed<Q, O>(
    controllers: &mut [CharacterController],
    motions:     &[Vec2],
    query:       &Q,
    observer:    &mut O,
) -> MotionResult<Vec<MoveReport>>
where
    Q: CollisionQuery + Sync,
    O: StepObserver,
{
    if motions.len() != controllers.len() {
        return Err(MotionError::AgentCountMismatch {
            expected: controllers.len(),
            got:      motions.len(),
            what:     "motions",
        });
    }

    observer.on_step_start(controllers.len());

    // ── Phase 1: resolve against the shared snapshot ──────────────────────
    let resolutions = resolve_all(controllers, motions, query);

    // ── Phase 2: commit in ascending AgentId order ────────────────────────
    let mut moved = 0;
    let mut reports = Vec::with_capacity(controllers.len());
    for (i, (controller, resolution)) in controllers.iter_mut().zip(resolutions).enumerate() {
        let report = controller.commit(resolution, &mut NoopObserver);
        if report.committed && report.to != report.from {
            moved += 1;
        }
        observer.on_agent_moved(AgentId(i as u32), &report);
        reports.push(report);
    }

    observer.on_step_end(moved);
    Ok(reports)
}

fn resolve_all<Q>(
    controllers: &[CharacterController],
    motions:     &[Vec2],
    query:       &Q,
) -> Vec<Resolution>
where
    Q: CollisionQuery + Sync,
{
    #[cfg(not(feature = "parallel"))]
    {
        controllers
            .iter()
            .zip(motions)
            .map(|(c, &motion)| c.resolver().resolve(c.position(), motion, query))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        controllers
            .par_iter()
            .zip(motions.par_iter())
            .map(|(c, &motion)| c.resolver().resolve(c.position(), motion, query))
            .collect()
    }
}
