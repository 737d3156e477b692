//! Engine error types.
//!
//! Every non-fatal error is reported before the engine touches the game
//! state, so a failed call leaves the state exactly as it was.

use thiserror::Error;

use super::node::Node;
use super::piece::PieceId;
use super::state::Phase;

/// Result alias used throughout the engine.
pub type GameResult<T> = Result<T, GameError>;

/// Errors reported by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GameError {
    /// The operation is not allowed in the current turn phase.
    #[error("{operation} is not allowed during {actual:?} (expected {expected:?})")]
    InvalidPhase {
        operation: &'static str,
        expected: Phase,
        actual: Phase,
    },

    /// The chosen destination is not in the legal-move set for this roll.
    #[error("illegal destination {destination} for {piece}")]
    IllegalDestination { piece: PieceId, destination: Node },

    /// A move or query named a piece other than the active player.
    #[error("{piece} is not the active player (active: {active})")]
    InactivePiece { piece: PieceId, active: PieceId },

    /// Board dimensions out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Internal consistency failure. Indicates a bug in the engine.
    #[error("engine invariant violated: {0}")]
    EngineInvariantViolation(String),
}

impl GameError {
    /// Check if this error indicates an engine bug rather than caller misuse.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::EngineInvariantViolation(_))
    }
}
