//! Core engine types: nodes, board, dice, pieces, state, configuration.
//!
//! Everything here is plain data plus pure queries. Turn sequencing lives
//! in `rules`, movement search in `movement`, hostile moves in `pursuit`.

pub mod node;
pub mod board;
pub mod rng;
pub mod dice;
pub mod piece;
pub mod config;
pub mod event;
pub mod state;
pub mod error;

pub use node::{MoveSet, Node};
pub use board::{Board, Neighbors, RingDirection, MIN_NODES_PER_RING, MIN_RINGS};
pub use rng::{GameRng, GameRngState};
pub use dice::{DiceRoll, Face, Tally, DICE_COUNT};
pub use piece::{
    Piece, PieceId, PieceKind, PieceSet, PursuerKind, FOX_COUNT, PLAYER_COUNT, SNAKE_COUNT,
};
pub use config::GameConfig;
pub use event::{TurnEvent, TurnRecord};
pub use state::{GameState, LossReason, Outcome, Phase, PublicState};
pub use error::{GameError, GameResult};
