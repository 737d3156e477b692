//! Fox and snake pursuit.
//!
//! Pursuers only ever chase the active player. The dice decide how many of
//! each kind move; the nearest ones go first.

pub mod engine;

pub use engine::{advance_pursuers, select_pursuers, PursuitMove, PursuitMoves};
