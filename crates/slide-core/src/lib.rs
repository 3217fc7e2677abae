//! `slide-core` — foundational types for the slide2d movement resolver.
//!
//! This crate is a dependency of every other `slide-*` crate.  It has no
//! `slide-*` dependencies and few external ones (`glam` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`geom`]     | `signed_normalized_angle`, `rotate90`, `direction_and_distance` |
//! | [`ids`]      | `ColliderId`, `AgentId`                                     |
//! | [`layers`]   | `LayerMask`                                                 |
//! | [`config`]   | `ControllerConfig`, `AgentSettings`, `Thresholds`, …        |
//! | [`error`]    | `ConfigError`, `ConfigResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod layers;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    AgentBody, AgentSettings, ControllerConfig, RecoveryProbe, ThresholdSpec, Thresholds,
};
pub use error::{ConfigError, ConfigResult};
pub use geom::{direction_and_distance, rotate90, signed_normalized_angle};
pub use ids::{AgentId, ColliderId};
pub use layers::LayerMask;

pub use glam::Vec2;
