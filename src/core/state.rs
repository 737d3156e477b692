//! Game state: public snapshot plus engine-private bookkeeping.
//!
//! ## PublicState
//!
//! Everything a renderer may read between engine calls:
//! - Phase, turn number, active player
//! - Last roll, piece positions, outcome
//! - Turn history
//!
//! ## GameState
//!
//! Public state plus the dice RNG and the legal-move set of the turn in
//! progress. Only the engine mutates it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::dice::DiceRoll;
use super::event::{TurnEvent, TurnRecord};
use super::node::MoveSet;
use super::piece::{Piece, PieceId, PieceSet};
use super::rng::GameRng;

/// Turn state machine phase.
///
/// `ResolvingPursuit` and `CheckingTerminal` are passed through inside a
/// single engine call; between calls the phase is one of the other three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    AwaitingRoll,
    AwaitingPlayerMove,
    ResolvingPursuit,
    CheckingTerminal,
    GameOver,
}

/// Why a game was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReason {
    /// Both player tokens were captured.
    AllCaptured,
    /// The configured turn limit ran out.
    TurnLimit,
}

/// Game outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Undetermined,
    Win {
        player: PieceId,
    },
    Loss {
        reason: LossReason,
    },
}

impl Outcome {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undetermined)
    }
}

/// Public game state - safe to read, render and serialize.
///
/// Uses `im` persistent data structures so snapshots clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    /// Current phase.
    pub phase: Phase,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// The player token whose turn it is.
    pub active_player: PieceId,

    /// Dice of the current or most recent turn.
    pub last_roll: Option<DiceRoll>,

    /// All pieces.
    pub pieces: PieceSet,

    /// Game outcome.
    pub outcome: Outcome,

    /// Completed turns, oldest first.
    pub history: Vector<TurnRecord>,
}

impl PublicState {
    /// Create the opening position.
    ///
    /// ## Defaults
    ///
    /// - `active_player`: Piece 0
    /// - `phase`: AwaitingRoll
    /// - `turn_number`: 1
    #[must_use]
    pub fn new(pieces: PieceSet) -> Self {
        Self {
            phase: Phase::AwaitingRoll,
            turn_number: 1,
            active_player: PieceId::new(0),
            last_roll: None,
            pieces,
            outcome: Outcome::Undetermined,
            history: Vector::new(),
        }
    }

    /// The active player's piece.
    #[must_use]
    pub fn active_piece(&self) -> Option<&Piece> {
        self.pieces.get(self.active_player)
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

/// Full game state including engine bookkeeping.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Public state (observable by collaborators).
    pub public: PublicState,

    /// Deterministic dice stream.
    pub rng: GameRng,

    /// Legal destinations offered for the turn in progress.
    legal_moves: Option<MoveSet>,

    /// Record of the turn in progress.
    current_turn: Option<TurnRecord>,
}

impl GameState {
    /// Create a game state.
    #[must_use]
    pub fn new(pieces: PieceSet, rng: GameRng) -> Self {
        Self {
            public: PublicState::new(pieces),
            rng,
            legal_moves: None,
            current_turn: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.public.phase
    }

    /// Active player id.
    #[must_use]
    pub fn active_player(&self) -> PieceId {
        self.public.active_player
    }

    /// Game outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.public.outcome
    }

    /// All pieces.
    #[must_use]
    pub fn pieces(&self) -> &PieceSet {
        &self.public.pieces
    }

    /// Completed turns.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.public.history
    }

    /// Legal destinations offered for the turn in progress.
    ///
    /// `Some` only while awaiting the player's move.
    #[must_use]
    pub fn offered_moves(&self) -> Option<&MoveSet> {
        self.legal_moves.as_ref()
    }

    /// The turn being played, if any.
    #[must_use]
    pub fn current_turn(&self) -> Option<&TurnRecord> {
        self.current_turn.as_ref()
    }

    // === Engine bookkeeping ===

    pub(crate) fn begin_turn(&mut self, roll: DiceRoll) {
        self.public.last_roll = Some(roll);
        self.current_turn = Some(TurnRecord::new(
            self.public.turn_number,
            self.public.active_player,
            roll,
        ));
    }

    pub(crate) fn record(&mut self, event: TurnEvent) {
        if let Some(turn) = self.current_turn.as_mut() {
            turn.push(event);
        }
    }

    pub(crate) fn offer_moves(&mut self, moves: MoveSet) {
        self.legal_moves = Some(moves);
    }

    pub(crate) fn clear_offered_moves(&mut self) {
        self.legal_moves = None;
    }

    /// Close the turn in progress, appending it to the history.
    pub(crate) fn finish_turn(&mut self) -> Option<TurnRecord> {
        let record = self.current_turn.take()?;
        self.public.history.push_back(record.clone());
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Board;
    use crate::core::dice::Tally;
    use crate::core::node::Node;

    fn state() -> GameState {
        let board = Board::new(6, 10).unwrap();
        GameState::new(PieceSet::standard(&board), GameRng::new(42))
    }

    #[test]
    fn test_public_state_new() {
        let state = state();

        assert_eq!(state.phase(), Phase::AwaitingRoll);
        assert_eq!(state.public.turn_number, 1);
        assert_eq!(state.active_player(), PieceId::new(0));
        assert_eq!(state.outcome(), Outcome::Undetermined);
        assert!(state.public.last_roll.is_none());
        assert!(state.history().is_empty());
        assert_eq!(state.public.active_piece().unwrap().node, Node::Center);
    }

    #[test]
    fn test_turn_bookkeeping() {
        let mut state = state();
        let roll = DiceRoll::from_tally(Tally {
            black: 6,
            red: 0,
            green: 0,
        })
        .unwrap();

        state.begin_turn(roll);
        state.record(TurnEvent::MoveSkipped {
            piece: PieceId::new(0),
        });
        assert_eq!(state.current_turn().unwrap().events.len(), 1);

        let record = state.finish_turn().unwrap();
        assert_eq!(record.roll, roll);
        assert_eq!(state.history().len(), 1);
        assert!(state.current_turn().is_none());
        assert!(state.finish_turn().is_none());
    }

    #[test]
    fn test_outcome_decided() {
        assert!(!Outcome::Undetermined.is_decided());
        assert!(Outcome::Win {
            player: PieceId::new(0)
        }
        .is_decided());
        assert!(Outcome::Loss {
            reason: LossReason::TurnLimit
        }
        .is_decided());
    }

    #[test]
    fn test_public_state_serialization() {
        let state = state();
        let json = serde_json::to_string(&state.public).unwrap();
        let deserialized: PublicState = serde_json::from_str(&json).unwrap();
        assert_eq!(state.public, deserialized);
    }
}
