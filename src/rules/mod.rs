//! Turn rules: the phase machine that sequences roll, move, pursuit and the
//! terminal check.
//!
//! `GameEngine` holds the board and configuration; every game's mutable
//! data lives in a `GameState` passed to each call.

pub mod engine;

pub use engine::GameEngine;
