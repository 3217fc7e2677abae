//! `slide-motion` — movement resolution for circular 2D agents.
//!
//! Given a start position, a desired motion, and an injected
//! [`CollisionQuery`][slide_query::CollisionQuery], compute where the agent
//! actually ends up: straight through when clear, stopped on head-on
//! contacts, slid along surfaces on oblique ones, and pushed out when wedged
//! in a corner.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`resolver`]   | `Resolver` — the per-call state machine                       |
//! | [`outcome`]    | `Resolution`, `Outcome`, `MoveState`                          |
//! | [`controller`] | `CharacterController` (commit guard), `ControllerBuilder`     |
//! | [`batch`]      | `step_batch` — two-phase stepping of many controllers         |
//! | [`observer`]   | `MoveObserver`, `StepObserver`, `NoopObserver`                |
//! | [`error`]      | `MotionError`, `MotionResult<T>`                              |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs the resolve phase of `step_batch` on Rayon's pool.   |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public value types.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use slide_core::{ColliderId, Vec2};
//! use slide_motion::ControllerBuilder;
//!
//! let mut controller = ControllerBuilder::new(ColliderId(1)).build()?;
//! let report = controller.move_by(Vec2::new(2.0, 0.0), &world);
//! ```

pub mod batch;
pub mod controller;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod resolver;


pub use batch::{step_batch, step_batch_observed};
pub use controller::{CharacterController, ControllerBuilder, MoveReport};
pub use error::{MotionError, MotionResult};
pub use observer::{MoveObserver, NoopObserver, StepObserver};
pub use outcome::{MoveState, Outcome, Resolution};
pub use resolver::{Resolver, HEAD_ON_CUTOFF};
