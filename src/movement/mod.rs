//! Movement resolution over the ring board.
//!
//! - `resolver`: legal single steps, exact-budget player moves, pursuit steps
//! - `distance`: BFS distance fields used to rank pursuit steps and pursuers

pub mod distance;
pub mod resolver;

pub use distance::{graph_distance, DistanceField};
pub use resolver::{
    legal_moves, reachable_in, step_toward, step_toward_field, steps_from, Step, StepKind,
};
