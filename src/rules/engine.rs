//! Turn sequencing for the Snakes and Foxes race.
//!
//! ## Turn state machine
//!
//! ```text
//! AwaitingRoll -> AwaitingPlayerMove -> ResolvingPursuit -> CheckingTerminal -> AwaitingRoll
//!                                                                           \-> GameOver
//! ```
//!
//! - `request_roll` throws the dice. If the black pips leave no legal
//!   destination the turn resolves on the spot.
//! - `commit_move` applies the player's move, then runs pursuit and the
//!   terminal check in the same call.
//! - `restart` is the only way out of `GameOver`.
//!
//! Every entry point checks the phase and its arguments before touching the
//! state, so a rejected call leaves it unchanged.

use smallvec::SmallVec;

use crate::core::{
    Board, DiceRoll, GameConfig, GameError, GameResult, GameRng, GameState, LossReason, MoveSet,
    Node, Outcome, Phase, Piece, PieceId, PieceSet, PursuerKind, TurnEvent, TurnRecord,
};
use crate::movement::legal_moves;
use crate::pursuit::{advance_pursuers, PursuitMoves};

/// The game engine: immutable board and configuration.
///
/// All mutable data lives in `GameState`, so one engine can drive any
/// number of games on the same board.
///
/// ## Example
///
/// ```
/// use snakes_foxes::core::{GameConfig, Phase};
/// use snakes_foxes::rules::GameEngine;
///
/// let (engine, mut state) = GameEngine::new_game(GameConfig::new().with_seed(1)).unwrap();
///
/// engine.request_roll(&mut state).unwrap();
/// if state.phase() == Phase::AwaitingPlayerMove {
///     let player = state.active_player();
///     let moves = engine.legal_moves_for(&state, player).unwrap();
///     let target = *moves.iter().next().unwrap();
///     engine.commit_move(&mut state, player, target).unwrap();
/// }
/// assert!(matches!(state.phase(), Phase::AwaitingRoll | Phase::GameOver));
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
}

impl GameEngine {
    /// Create an engine, validating the configuration.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let board = config.board()?;
        Ok(Self { config, board })
    }

    /// Create an engine and the opening state of a game.
    pub fn new_game(config: GameConfig) -> GameResult<(Self, GameState)> {
        let engine = Self::new(config)?;
        let state = engine.initial_state(GameRng::new(engine.config.seed));
        Ok((engine, state))
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Opening position on this engine's board, using the given dice stream.
    #[must_use]
    pub fn initial_state(&self, rng: GameRng) -> GameState {
        GameState::new(PieceSet::standard(&self.board), rng)
    }

    /// Replace the state with a fresh game.
    ///
    /// The dice continue on a fork of the old stream, so a restarted game
    /// does not replay the previous one but stays reproducible.
    pub fn restart(&self, state: &mut GameState) {
        let rng = state.rng.fork();
        *state = self.initial_state(rng);
    }

    // === External entry points ===

    /// Throw the dice for the active player.
    ///
    /// Valid only in `AwaitingRoll`. Moves to `AwaitingPlayerMove`, or
    /// straight through the rest of the turn when the player cannot move.
    pub fn request_roll(&self, state: &mut GameState) -> GameResult<DiceRoll> {
        Self::expect_phase(state, Phase::AwaitingRoll, "request_roll")?;
        let roll = DiceRoll::roll(&mut state.rng);
        self.start_turn(state, roll)?;
        Ok(roll)
    }

    /// Play the turn with a roll supplied by the caller instead of the RNG.
    ///
    /// For collaborators using physical dice, and for replaying known games.
    pub fn apply_roll(&self, state: &mut GameState, roll: DiceRoll) -> GameResult<DiceRoll> {
        Self::expect_phase(state, Phase::AwaitingRoll, "apply_roll")?;
        self.start_turn(state, roll)?;
        Ok(roll)
    }

    /// Legal destinations for the active player's current roll.
    ///
    /// Valid only in `AwaitingPlayerMove`, and only for the active player.
    pub fn legal_moves_for(&self, state: &GameState, piece: PieceId) -> GameResult<MoveSet> {
        Self::expect_phase(state, Phase::AwaitingPlayerMove, "legal_moves_for")?;
        Self::expect_active(state, piece)?;
        state.offered_moves().cloned().ok_or_else(|| {
            GameError::EngineInvariantViolation(
                "awaiting a player move but no moves were offered".to_string(),
            )
        })
    }

    /// Move the active player and resolve the rest of the turn.
    ///
    /// `destination` must be one of the nodes returned by `legal_moves_for`.
    /// Returns the record of the completed turn.
    pub fn commit_move(
        &self,
        state: &mut GameState,
        piece: PieceId,
        destination: Node,
    ) -> GameResult<TurnRecord> {
        Self::expect_phase(state, Phase::AwaitingPlayerMove, "commit_move")?;
        Self::expect_active(state, piece)?;
        let offered = state.offered_moves().ok_or_else(|| {
            GameError::EngineInvariantViolation(
                "awaiting a player move but no moves were offered".to_string(),
            )
        })?;
        if !offered.contains(&destination) {
            return Err(GameError::IllegalDestination { piece, destination });
        }

        state.clear_offered_moves();
        let from = state
            .public
            .pieces
            .move_piece(piece, destination)
            .ok_or_else(|| missing_piece(piece))?;
        state.record(TurnEvent::PlayerMoved {
            piece,
            from,
            to: destination,
        });

        if self.board.is_outer_ring(destination) && state.public.pieces.mark_outer_ring_visit(piece)
        {
            state.record(TurnEvent::VisitedOuterRing { piece });
        }

        self.resolve_turn(state)
    }

    // === Turn phases ===

    fn start_turn(&self, state: &mut GameState, roll: DiceRoll) -> GameResult<()> {
        let active = *Self::active_piece(state)?;
        state.begin_turn(roll);

        let moves = legal_moves(&self.board, &active, roll.tally().black);
        if moves.is_empty() {
            state.record(TurnEvent::MoveSkipped { piece: active.id });
            self.resolve_turn(state)?;
        } else {
            state.offer_moves(moves);
            state.public.phase = Phase::AwaitingPlayerMove;
        }
        Ok(())
    }

    fn resolve_turn(&self, state: &mut GameState) -> GameResult<TurnRecord> {
        state.public.phase = Phase::ResolvingPursuit;
        let tally = state
            .public
            .last_roll
            .map(|roll| roll.tally())
            .ok_or_else(|| {
                GameError::EngineInvariantViolation("resolving a turn without a roll".to_string())
            })?;
        let target = Self::active_piece(state)?.node;

        let foxes = advance_pursuers(
            PursuerKind::Fox,
            tally.red as usize,
            target,
            &mut state.public.pieces,
            &self.board,
        )?;
        Self::record_pursuit(state, &foxes);

        let snakes = advance_pursuers(
            PursuerKind::Snake,
            tally.green as usize,
            target,
            &mut state.public.pieces,
            &self.board,
        )?;
        Self::record_pursuit(state, &snakes);

        state.public.phase = Phase::CheckingTerminal;
        self.check_terminal(state)?;

        state.finish_turn().ok_or_else(|| {
            GameError::EngineInvariantViolation("finished a turn that was never begun".to_string())
        })
    }

    fn check_terminal(&self, state: &mut GameState) -> GameResult<()> {
        let active = *Self::active_piece(state)?;

        if active.has_completed_race() {
            state.record(TurnEvent::Won { piece: active.id });
            Self::end_game(state, Outcome::Win { player: active.id });
            return Ok(());
        }

        let by: SmallVec<[PieceId; 2]> =
            state.public.pieces.pursuers_at(active.node).map(|p| p.id).collect();
        if !by.is_empty() {
            state.public.pieces.capture(active.id);
            state.record(TurnEvent::Captured {
                piece: active.id,
                node: active.node,
                by,
            });
        }

        let Some(next) = Self::next_player(&state.public.pieces, active.id) else {
            Self::lose(state, LossReason::AllCaptured);
            return Ok(());
        };

        state.public.active_player = next;
        state.public.turn_number += 1;

        match self.config.turn_limit {
            Some(limit) if state.public.turn_number > limit => {
                Self::lose(state, LossReason::TurnLimit);
            }
            _ => state.public.phase = Phase::AwaitingRoll,
        }
        Ok(())
    }

    fn record_pursuit(state: &mut GameState, moves: &PursuitMoves) {
        for m in moves {
            state.record(TurnEvent::PursuerMoved {
                piece: m.piece,
                kind: m.kind,
                from: m.from,
                to: m.to,
            });
        }
    }

    fn lose(state: &mut GameState, reason: LossReason) {
        state.record(TurnEvent::Lost { reason });
        Self::end_game(state, Outcome::Loss { reason });
    }

    fn end_game(state: &mut GameState, outcome: Outcome) {
        state.public.outcome = outcome;
        state.public.phase = Phase::GameOver;
    }

    // === Helpers ===

    /// The next player in id order after `current` that is still in play,
    /// wrapping around. `current` itself if it is the only one left.
    fn next_player(pieces: &PieceSet, current: PieceId) -> Option<PieceId> {
        let in_play: SmallVec<[PieceId; 2]> =
            pieces.players_in_play().map(|p| p.id).collect();
        in_play
            .iter()
            .copied()
            .find(|&id| id > current)
            .or_else(|| in_play.first().copied())
    }

    fn active_piece(state: &GameState) -> GameResult<&Piece> {
        let id = state.active_player();
        state.pieces().get(id).ok_or_else(|| missing_piece(id))
    }

    fn expect_phase(state: &GameState, expected: Phase, operation: &'static str) -> GameResult<()> {
        let actual = state.phase();
        if actual == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                operation,
                expected,
                actual,
            })
        }
    }

    fn expect_active(state: &GameState, piece: PieceId) -> GameResult<()> {
        let active = state.active_player();
        if piece == active {
            Ok(())
        } else {
            Err(GameError::InactivePiece { piece, active })
        }
    }
}

fn missing_piece(id: PieceId) -> GameError {
    GameError::EngineInvariantViolation(format!("{id} is missing from the piece set"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tally;

    fn roll(black: u8, red: u8, green: u8) -> DiceRoll {
        DiceRoll::from_tally(Tally { black, red, green }).unwrap()
    }

    fn new_game() -> (GameEngine, GameState) {
        GameEngine::new_game(GameConfig::new().with_seed(42)).unwrap()
    }

    #[test]
    fn test_new_game() {
        let (engine, state) = new_game();

        assert_eq!(engine.board().ring_count(), 6);
        assert_eq!(state.phase(), Phase::AwaitingRoll);
        assert_eq!(state.active_player(), PieceId::new(0));
        assert_eq!(state.pieces().len(), 12);
    }

    #[test]
    fn test_invalid_configuration() {
        let err = GameEngine::new_game(GameConfig::new().with_nodes_per_ring(2)).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_roll_then_move() {
        let (engine, mut state) = new_game();

        engine.apply_roll(&mut state, roll(1, 0, 5)).unwrap();
        assert_eq!(state.phase(), Phase::AwaitingPlayerMove);

        let moves = engine.legal_moves_for(&state, PieceId::new(0)).unwrap();
        assert_eq!(moves.len(), 10);

        let record = engine
            .commit_move(&mut state, PieceId::new(0), Node::slot(1, 0))
            .unwrap();
        assert_eq!(record.turn, 1);
        assert_eq!(state.phase(), Phase::AwaitingRoll);
        assert_eq!(state.active_player(), PieceId::new(1));
        assert_eq!(state.public.turn_number, 2);
    }

    #[test]
    fn test_no_black_pips_skips_move() {
        let (engine, mut state) = new_game();

        engine.apply_roll(&mut state, roll(0, 3, 3)).unwrap();

        assert_eq!(state.phase(), Phase::AwaitingRoll);
        assert_eq!(state.active_player(), PieceId::new(1));
        let record = state.history().back().unwrap();
        assert_eq!(
            record.events[0],
            TurnEvent::MoveSkipped {
                piece: PieceId::new(0)
            }
        );
        assert_eq!(record.pursuer_moves().count(), 6);
    }

    #[test]
    fn test_wrong_phase_rejected() {
        let (engine, mut state) = new_game();

        let err = engine
            .commit_move(&mut state, PieceId::new(0), Node::slot(1, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidPhase {
                expected: Phase::AwaitingPlayerMove,
                actual: Phase::AwaitingRoll,
                ..
            }
        ));

        engine.apply_roll(&mut state, roll(2, 2, 2)).unwrap();
        assert!(matches!(
            engine.request_roll(&mut state),
            Err(GameError::InvalidPhase { .. })
        ));
    }

    #[test]
    fn test_inactive_piece_rejected() {
        let (engine, mut state) = new_game();
        engine.apply_roll(&mut state, roll(1, 0, 5)).unwrap();

        assert!(matches!(
            engine.legal_moves_for(&state, PieceId::new(1)),
            Err(GameError::InactivePiece { .. })
        ));
        assert!(matches!(
            engine.commit_move(&mut state, PieceId::new(2), Node::slot(1, 0)),
            Err(GameError::InactivePiece { .. })
        ));
    }

    #[test]
    fn test_next_player_skips_captured() {
        let (engine, _) = new_game();
        let mut pieces = PieceSet::standard(engine.board());

        assert_eq!(GameEngine::next_player(&pieces, PieceId::new(0)), Some(PieceId::new(1)));
        assert_eq!(GameEngine::next_player(&pieces, PieceId::new(1)), Some(PieceId::new(0)));

        pieces.capture(PieceId::new(1));
        assert_eq!(GameEngine::next_player(&pieces, PieceId::new(0)), Some(PieceId::new(0)));

        pieces.capture(PieceId::new(0));
        assert_eq!(GameEngine::next_player(&pieces, PieceId::new(0)), None);
    }

    #[test]
    fn test_turn_limit() {
        let (engine, mut state) =
            GameEngine::new_game(GameConfig::new().with_turn_limit(2)).unwrap();

        engine.apply_roll(&mut state, roll(0, 0, 6)).unwrap();
        assert_eq!(state.phase(), Phase::AwaitingRoll);

        engine.apply_roll(&mut state, roll(0, 0, 6)).unwrap();
        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(
            state.outcome(),
            Outcome::Loss {
                reason: LossReason::TurnLimit
            }
        );
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_restart() {
        let (engine, mut state) = new_game();
        engine.apply_roll(&mut state, roll(0, 6, 0)).unwrap();
        assert_eq!(state.history().len(), 1);

        engine.restart(&mut state);

        assert_eq!(state.phase(), Phase::AwaitingRoll);
        assert_eq!(state.public.turn_number, 1);
        assert!(state.history().is_empty());
        assert_eq!(state.public.pieces, PieceSet::standard(engine.board()));
        assert_ne!(state.rng.seed(), 42);
    }
}
