//! Automatic game play driven by a `MoveSelector`.

pub mod runner;

pub use runner::{play_game, AutoplayConfig, AutoplayRunner, GameSummary};
