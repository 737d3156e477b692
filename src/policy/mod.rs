//! Automatic move selection.

pub mod selector;

pub use selector::{MoveSelector, RaceSelector, RandomSelector};
