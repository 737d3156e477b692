//! Unattended play: a selector makes every move until the game ends.
//!
//! Used for smoke-testing rule changes and for benchmarking the engine.

use serde::{Deserialize, Serialize};

use crate::core::{GameResult, GameRng, GameState, Outcome, PieceId, Phase, TurnEvent};
use crate::policy::MoveSelector;
use crate::rules::GameEngine;

/// Configuration for autoplay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoplayConfig {
    /// Maximum turns per game, applied on top of the game's own turn limit.
    /// A game cut off here is reported as undetermined.
    pub max_turns: u32,

    /// Seed offset (combined with game index for unique seeds).
    pub seed_offset: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            max_turns: 500,
            seed_offset: 0,
        }
    }
}

impl AutoplayConfig {
    /// Create a new autoplay config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-game turn cap.
    pub fn with_max_turns(mut self, max: u32) -> Self {
        self.max_turns = max;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Result of one automatically played game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Dice seed the game was played with.
    pub seed: u64,
    /// Final outcome; `Undetermined` if the turn cap cut the game off.
    pub outcome: Outcome,
    /// Completed turns.
    pub turns: u32,
    /// Players captured during the game.
    pub captures: u32,
    /// Winning player, if any.
    pub winner: Option<PieceId>,
}

impl GameSummary {
    fn from_state(seed: u64, state: &GameState) -> Self {
        let captures = state
            .history()
            .iter()
            .flat_map(|record| record.events.iter())
            .filter(|event| matches!(event, TurnEvent::Captured { .. }))
            .count() as u32;
        let winner = match state.outcome() {
            Outcome::Win { player } => Some(player),
            _ => None,
        };

        Self {
            seed,
            outcome: state.outcome(),
            turns: state.history().len() as u32,
            captures,
            winner,
        }
    }
}

/// Play `state` to completion (or the turn cap) with `selector` moving for
/// both players.
///
/// The selector draws from a fork of the game's RNG, so the dice sequence is
/// the same whichever selector is used.
pub fn play_game<S: MoveSelector + ?Sized>(
    engine: &GameEngine,
    state: &mut GameState,
    selector: &S,
    config: &AutoplayConfig,
) -> GameResult<GameSummary> {
    let seed = state.rng.seed();
    let mut choice_rng = state.rng.fork();

    while !state.public.is_over() && (state.history().len() as u32) < config.max_turns {
        engine.request_roll(state)?;
        if state.phase() != Phase::AwaitingPlayerMove {
            continue;
        }

        let player = state.active_player();
        let moves = engine.legal_moves_for(state, player)?;
        if let Some(destination) = selector.choose(engine, state, &moves, &mut choice_rng) {
            engine.commit_move(state, player, destination)?;
        }
    }

    Ok(GameSummary::from_state(seed, state))
}

/// Plays batches of games on one engine.
pub struct AutoplayRunner<S: MoveSelector> {
    engine: GameEngine,
    selector: S,
    config: AutoplayConfig,
}

impl<S: MoveSelector> AutoplayRunner<S> {
    /// Create a new runner.
    pub fn new(engine: GameEngine, selector: S, config: AutoplayConfig) -> Self {
        Self {
            engine,
            selector,
            config,
        }
    }

    /// Play one fresh game with the given dice seed.
    pub fn play_seed(&self, seed: u64) -> GameResult<GameSummary> {
        let mut state = self.engine.initial_state(GameRng::new(seed));
        play_game(&self.engine, &mut state, &self.selector, &self.config)
    }

    /// Play `count` games, seeded `seed_offset`, `seed_offset + 1`, ...
    pub fn play_games(&self, count: usize) -> GameResult<Vec<GameSummary>> {
        (0..count)
            .map(|i| self.play_seed(self.config.seed_offset.wrapping_add(i as u64)))
            .collect()
    }

    /// Get the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Get the configuration.
    pub fn config(&self) -> &AutoplayConfig {
        &self.config
    }
}
