//! Pursuer advancement.
//!
//! Each turn the dice say how many foxes and how many snakes move. The
//! pieces chosen are the ones nearest the active player, and each takes one
//! step toward it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, GameError, GameResult, Node, PieceId, PieceSet, PursuerKind};
use crate::movement::{step_toward_field, DistanceField};

/// One pursuer step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PursuitMove {
    pub piece: PieceId,
    pub kind: PursuerKind,
    pub from: Node,
    pub to: Node,
}

/// Pursuer steps of one phase. Five per kind at most, so always inline.
pub type PursuitMoves = SmallVec<[PursuitMove; 5]>;

/// Pick the `count` uncaptured pursuers of `kind` nearest the field's target.
///
/// Ordered by distance, ties by ascending piece id. Returns fewer ids when
/// fewer pursuers are eligible.
#[must_use]
pub fn select_pursuers(
    kind: PursuerKind,
    count: usize,
    pieces: &PieceSet,
    field: &DistanceField,
) -> SmallVec<[PieceId; 5]> {
    let mut ranked: SmallVec<[(u32, PieceId); 5]> = pieces
        .pursuers(kind)
        .map(|p| (field.distance(p.node).unwrap_or(u32::MAX), p.id))
        .collect();
    ranked.sort_unstable();
    ranked.into_iter().take(count).map(|(_, id)| id).collect()
}

/// Advance up to `count` pursuers of `kind` one step toward `target`.
///
/// Distances are measured once, before anyone moves, so selection does not
/// depend on the order pieces step in. Pieces not selected stay put.
pub fn advance_pursuers(
    kind: PursuerKind,
    count: usize,
    target: Node,
    pieces: &mut PieceSet,
    board: &Board,
) -> GameResult<PursuitMoves> {
    let field = DistanceField::from_target(board, target);
    let selected = select_pursuers(kind, count, pieces, &field);

    let mut moves = PursuitMoves::new();
    for id in selected {
        let from = match pieces.get(id) {
            Some(piece) if piece.is_live_pursuer(kind) => piece.node,
            Some(_) => {
                return Err(GameError::EngineInvariantViolation(format!(
                    "{id} selected as a {kind:?} pursuer but is not one"
                )))
            }
            None => {
                return Err(GameError::EngineInvariantViolation(format!(
                    "{id} selected for pursuit but missing from the piece set"
                )))
            }
        };
        let to = step_toward_field(board, from, &field);
        pieces.move_piece(id, to);
        moves.push(PursuitMove {
            piece: id,
            kind,
            from,
            to,
        });
    }

    Ok(moves)
}
