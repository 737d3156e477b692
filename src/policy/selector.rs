//! Move selectors for automatic play.
//!
//! The engine never chooses a player's move. A selector stands in for the
//! person at the board when games are played out unattended:
//! - `RandomSelector`: uniform over the offered destinations
//! - `RaceSelector`: greedy race toward the rim and back, avoiding pursuers

use smallvec::SmallVec;

use crate::core::{GameRng, GameState, MoveSet, Node, Piece};
use crate::rules::GameEngine;

/// Policy for choosing the active player's destination.
pub trait MoveSelector: Send + Sync {
    /// Choose one of `moves` for the active player.
    ///
    /// Returns `None` only if `moves` is empty.
    fn choose(
        &self,
        engine: &GameEngine,
        state: &GameState,
        moves: &MoveSet,
        rng: &mut GameRng,
    ) -> Option<Node>;
}

/// Uniform random selector.
#[derive(Clone, Debug, Default)]
pub struct RandomSelector;

impl MoveSelector for RandomSelector {
    fn choose(
        &self,
        _engine: &GameEngine,
        _state: &GameState,
        moves: &MoveSet,
        rng: &mut GameRng,
    ) -> Option<Node> {
        let moves: SmallVec<[Node; 16]> = moves.iter().copied().collect();
        rng.choose(moves.as_slice()).copied()
    }
}

/// Greedy racing selector.
///
/// Takes a winning move when one is offered. Otherwise avoids nodes already
/// holding a pursuer, then minimizes the radial distance left in the race:
/// out to the rim and back while the rim is unvisited, only back afterwards.
/// Ties go to the lowest node.
#[derive(Clone, Debug, Default)]
pub struct RaceSelector;

impl RaceSelector {
    fn rank(
        engine: &GameEngine,
        state: &GameState,
        player: &Piece,
        to: Node,
    ) -> (bool, bool, u16, Node) {
        let outer = engine.board().outer_ring();
        let visited = player.visited_outer_ring();
        let wins = visited && to.is_center();
        let guarded = state.pieces().pursuers_at(to).next().is_some();
        let remaining = if visited {
            to.ring()
        } else {
            (outer - to.ring()) + outer
        };
        (!wins, guarded, remaining, to)
    }
}

impl MoveSelector for RaceSelector {
    fn choose(
        &self,
        engine: &GameEngine,
        state: &GameState,
        moves: &MoveSet,
        _rng: &mut GameRng,
    ) -> Option<Node> {
        let player = state.pieces().get(state.active_player())?;
        moves
            .iter()
            .copied()
            .min_by_key(|&to| Self::rank(engine, state, player, to))
    }
}
