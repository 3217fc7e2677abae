//! The movement resolver.
//!
//! # Algorithm
//!
//! ```text
//! resolve(position, motion):
//!   ① zero motion                → position                      (Idle)
//!   ② cast along motion; drop self-hits
//!   ③ no blocking hit            → position + motion             (Direct)
//!   ④ contact = hit point pushed off the normal by the threshold
//!      |angle| < 0.01            → contact                       (Blocked)
//!      slide = normal rotated 90° toward the approach side
//!      remaining = distance · (1 - fraction) · |angle|
//!      cast along slide for remaining:
//!        clear                   → contact + slide · remaining   (Slid)
//!        hit2 beyond threshold   → second contact point          (SlideBlocked)
//!        otherwise               → stuck recovery
//!   ⑤ nudge along the first normal until an overlap test at the probe
//!      radius comes back clear, at most `max_recovery_iterations` times
//!                                                   (Recovered / RecoveryExhausted)
//! ```
//!
//! Only one slide step is taken per call.  Each call issues at most two casts
//! and `max_recovery_iterations` overlap tests.

use glam::Vec2;
use tracing::{debug, trace, warn};

use slide_core::{
    direction_and_distance, rotate90, signed_normalized_angle, AgentSettings, ColliderId,
    ConfigResult, ControllerConfig,
};
use slide_query::{first_blocking, is_clear, CastHit, CollisionQuery};

use crate::{MoveObserver, NoopObserver, Outcome, Resolution};

/// Incidence below which a contact counts as head-on and no slide is tried.
pub const HEAD_ON_CUTOFF: f32 = 0.01;

/// Resolves one movement step for a single circular agent.
///
/// Holds only immutable agent settings, so a `Resolver` can be shared freely
/// and called from any thread as long as the query is usable there.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolver {
    settings: AgentSettings,
}

impl Resolver {
    pub fn new(settings: AgentSettings) -> Self {
        Self { settings }
    }

    /// Validate `config` and build a resolver for the collider `collider`.
    pub fn from_config(config: &ControllerConfig, collider: ColliderId) -> ConfigResult<Self> {
        config.settings(collider).map(Self::new)
    }

    #[inline]
    pub fn settings(&self) -> &AgentSettings {
        &self.settings
    }

    /// Compute the end position for moving from `position` by `motion`.
    pub fn resolve<Q: CollisionQuery>(&self, position: Vec2, motion: Vec2, query: &Q) -> Resolution {
        self.resolve_observed(position, motion, query, &mut NoopObserver)
    }

    /// [`resolve`][Self::resolve] with observer callbacks.
    pub fn resolve_observed<Q, O>(
        &self,
        position: Vec2,
        motion:   Vec2,
        query:    &Q,
        observer: &mut O,
    ) -> Resolution
    where
        Q: CollisionQuery,
        O: MoveObserver,
    {
        let resolution = self.step(position, motion, query, observer);
        observer.on_resolved(&resolution);
        resolution
    }

    fn step<Q, O>(&self, position: Vec2, motion: Vec2, query: &Q, observer: &mut O) -> Resolution
    where
        Q: CollisionQuery,
        O: MoveObserver,
    {
        debug_assert!(motion.is_finite(), "non-finite motion {motion}");

        let (direction, distance) = direction_and_distance(motion);
        if distance == 0.0 {
            return Resolution::new(position, Outcome::Idle);
        }

        let s = &self.settings;
        let own = s.body.collider;

        let hits = query.circle_cast(position, s.body.radius, direction, distance, s.collision_layers);
        let Some(&hit) = first_blocking(&hits, own) else {
            trace!(?position, ?motion, "direct move");
            return Resolution::new(position + motion, Outcome::Direct);
        };
        debug_assert!(hit.is_well_formed(), "collision query returned malformed hit {hit:?}");
        observer.on_contact(&hit);

        let contact = self.contact_point(position, direction, distance, &hit);

        let angle = signed_normalized_angle(-direction, hit.normal);
        if angle.abs() < HEAD_ON_CUTOFF {
            debug!(?contact, collider = %hit.collider, "head-on contact, stopping");
            return Resolution::new(contact, Outcome::Blocked);
        }

        let remaining = distance * (1.0 - hit.fraction) * angle.abs();
        let slide = rotate90(hit.normal, if angle < 0.0 { -1.0 } else { 1.0 });
        observer.on_slide(slide, remaining);

        let slide_hits = query.circle_cast(contact, s.body.radius, slide, remaining, s.collision_layers);
        let Some(&slide_hit) = first_blocking(&slide_hits, own) else {
            trace!(?contact, ?slide, remaining, "slid");
            return Resolution::new(contact + slide * remaining, Outcome::Slid);
        };
        debug_assert!(
            slide_hit.is_well_formed(),
            "collision query returned malformed hit {slide_hit:?}"
        );
        observer.on_contact(&slide_hit);

        if remaining * slide_hit.fraction > s.thresholds.minimum_movement {
            let end = self.contact_point(contact, slide, remaining, &slide_hit);
            debug!(?end, collider = %slide_hit.collider, "slide stopped at second contact");
            return Resolution::new(end, Outcome::SlideBlocked);
        }

        self.recover(contact, hit.normal, query, observer)
    }

    /// `origin` advanced to the hit fraction, then pushed off the surface by
    /// the threshold so the next query does not start inside the obstacle.
    #[inline]
    fn contact_point(&self, origin: Vec2, direction: Vec2, distance: f32, hit: &CastHit) -> Vec2 {
        origin
            + direction * (distance * hit.fraction)
            + hit.normal * self.settings.thresholds.minimum_movement
    }

    /// Bounded push-out along `normal` starting from `start`.
    fn recover<Q, O>(&self, start: Vec2, normal: Vec2, query: &Q, observer: &mut O) -> Resolution
    where
        Q: CollisionQuery,
        O: MoveObserver,
    {
        let s = &self.settings;
        let step = normal * s.thresholds.minimum_movement;
        let probe = s.recovery_radius();

        let mut position = start;
        for iteration in 1..=s.max_recovery_iterations {
            position += step;
            observer.on_recovery_nudge(iteration, position);
            trace!(iteration, ?position, "recovery nudge");

            let overlaps = query.circle_overlap(position, probe, s.collision_layers);
            if is_clear(&overlaps, s.body.collider) {
                debug!(nudges = iteration, ?position, "recovered from wedge");
                return Resolution::new(position, Outcome::Recovered { nudges: iteration });
            }
        }

        warn!(
            nudges = s.max_recovery_iterations,
            ?position,
            "stuck recovery exhausted its budget"
        );
        Resolution::new(
            position,
            Outcome::RecoveryExhausted { nudges: s.max_recovery_iterations },
        )
    }
}
