//! What a resolve call ended with.

use glam::Vec2;

/// The states of the per-call movement state machine.
///
/// Every call starts in `Direct`.  A blocking first hit moves it to
/// `Blocked`, a non-head-on incidence to `Sliding`, and a slide that cannot
/// travel past the threshold to `StuckRecovery`.  Nothing carries over to
/// the next call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveState {
    Direct,
    Blocked,
    Sliding,
    StuckRecovery,
}

/// Terminal outcome of one [`Resolver::resolve`][crate::Resolver::resolve].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Zero motion; no query was issued.
    Idle,
    /// Nothing but the agent itself along the path; full motion applied.
    Direct,
    /// Head-on contact; stopped at the nudged contact point.
    Blocked,
    /// Slid along the first surface for the full scaled remainder.
    Slid,
    /// The slide met a second surface and stopped at that contact.
    SlideBlocked,
    /// Wedged; cleared after `nudges` pushes along the first normal.
    Recovered { nudges: u32 },
    /// Wedged; the iteration budget ran out after `nudges` pushes.  The
    /// position may still interpenetrate lightly.
    RecoveryExhausted { nudges: u32 },
}

impl Outcome {
    /// The state the call terminated in.
    pub fn state(self) -> MoveState {
        match self {
            Outcome::Idle | Outcome::Direct => MoveState::Direct,
            Outcome::Blocked => MoveState::Blocked,
            Outcome::Slid | Outcome::SlideBlocked => MoveState::Sliding,
            Outcome::Recovered { .. } | Outcome::RecoveryExhausted { .. } => {
                MoveState::StuckRecovery
            }
        }
    }

    /// Number of recovery nudges applied (0 outside stuck recovery).
    pub fn nudges(self) -> u32 {
        match self {
            Outcome::Recovered { nudges } | Outcome::RecoveryExhausted { nudges } => nudges,
            _ => 0,
        }
    }
}

/// A resolved end position together with how it was reached.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub position: Vec2,
    pub outcome: Outcome,
}

impl Resolution {
    #[inline]
    pub fn new(position: Vec2, outcome: Outcome) -> Self {
        Self { position, outcome }
    }
}
