//! # snakes-foxes
//!
//! Game-state engine for Snakes and Foxes, a dice race on a ring board.
//!
//! Two players start on the center, race out to the rim and back again.
//! Each turn six dice are thrown: black pips move the active player, red
//! triangles advance foxes and green lines advance snakes toward them.
//! A pursuer landing on the active player captures it.
//!
//! ## Design Principles
//!
//! 1. **Engine, not front end**: no rendering, input or sound. Collaborators
//!    read `GameState::public` between calls and drive the game through
//!    `GameEngine`.
//!
//! 2. **Deterministic**: all randomness comes from a seeded `GameRng`, so a
//!    seed replays a game exactly.
//!
//! 3. **Validate, then mutate**: a rejected call leaves the state unchanged.
//!
//! ## Modules
//!
//! - `core`: nodes, board, dice, pieces, state, configuration, errors
//! - `movement`: legal player moves and pursuit steps
//! - `pursuit`: choosing and advancing foxes and snakes
//! - `rules`: the turn state machine
//! - `policy`: automatic move selectors
//! - `autoplay`: playing whole games unattended

pub mod core;
pub mod movement;
pub mod pursuit;
pub mod rules;
pub mod policy;
pub mod autoplay;

// Re-export commonly used types
pub use crate::core::{
    Board, DiceRoll, Face, GameConfig, GameError, GameResult, GameRng, GameRngState, GameState,
    LossReason, MoveSet, Node, Outcome, Phase, Piece, PieceId, PieceKind, PieceSet, PublicState,
    PursuerKind, RingDirection, Tally, TurnEvent, TurnRecord,
};

pub use crate::movement::{legal_moves, step_toward, DistanceField};

pub use crate::pursuit::{advance_pursuers, PursuitMove};

pub use crate::rules::GameEngine;

pub use crate::policy::{MoveSelector, RaceSelector, RandomSelector};

pub use crate::autoplay::{play_game, AutoplayConfig, AutoplayRunner, GameSummary};
