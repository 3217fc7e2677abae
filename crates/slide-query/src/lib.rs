//! `slide-query` — the collision-query capability the resolver consumes.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`hit`]    | `CastHit`, `CastHits`, `Overlaps`, self-filtering helpers      |
//! | [`query`]  | `CollisionQuery` trait, `NoCollisions`                         |
//!
//! Results are `SmallVec`s with inline capacity 2, so a query allocates
//! nothing on the heap as long as the implementation honours the two-result
//! limit.

pub mod hit;
pub mod query;


pub use hit::{first_blocking, is_clear, CastHit, CastHits, Overlaps};
pub use query::{CollisionQuery, NoCollisions};
