//! Legal moves and pursuit steps.
//!
//! A single step from a node is one of:
//! - **Inward**: the radial step toward the center
//! - **Outward**: the radial step away from the center (from the center,
//!   any ring-1 slot)
//! - **Along**: the ring step in the ring's permitted direction
//!
//! Players spend their whole black-pip budget in such steps. Pursuers take
//! one step per turn, choosing the one that closes the most distance.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, MoveSet, Node, Piece};

use super::distance::DistanceField;

/// Kind of single step. Declaration order is the pursuit tie-break order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StepKind {
    Inward,
    Outward,
    Along,
}

/// One legal single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    pub kind: StepKind,
    pub to: Node,
}

/// Legal single steps from a node, in tie-break order.
///
/// Ring slots have at most three (inward, outward, along). The center has
/// one outward step per ring-1 slot.
#[must_use]
pub fn steps_from(board: &Board, from: Node) -> SmallVec<[Step; 4]> {
    match from {
        Node::Center => board
            .ring_nodes(1)
            .map(|to| Step {
                kind: StepKind::Outward,
                to,
            })
            .collect(),
        Node::Slot { .. } => {
            let mut steps = SmallVec::new();
            if let Some(to) = board.inward(from) {
                steps.push(Step {
                    kind: StepKind::Inward,
                    to,
                });
            }
            if let Some(to) = board.outward(from) {
                steps.push(Step {
                    kind: StepKind::Outward,
                    to,
                });
            }
            if let Some(to) = board.forward(from) {
                steps.push(Step {
                    kind: StepKind::Along,
                    to,
                });
            }
            steps
        }
    }
}

/// Nodes reachable from `from` in exactly `budget` legal steps.
///
/// Paths may revisit nodes, so the start node itself can be a destination.
/// A budget of zero yields the empty set: there is no move to make.
#[must_use]
pub fn reachable_in(board: &Board, from: Node, budget: u8) -> MoveSet {
    if budget == 0 || !board.contains(from) {
        return MoveSet::new();
    }

    let mut frontier: FxHashSet<Node> = FxHashSet::default();
    frontier.insert(from);

    for _ in 0..budget {
        let mut next = FxHashSet::default();
        for node in &frontier {
            next.extend(steps_from(board, *node).into_iter().map(|s| s.to));
        }
        frontier = next;
    }

    frontier.into_iter().collect()
}

/// Legal destinations for a piece spending `step_budget` steps.
///
/// Captured pieces have no moves.
#[must_use]
pub fn legal_moves(board: &Board, piece: &Piece, step_budget: u8) -> MoveSet {
    if piece.captured {
        return MoveSet::new();
    }
    reachable_in(board, piece.node, step_budget)
}

/// The single step from `from` that best closes on the field's target.
///
/// Minimizes graph distance to the target. Ties prefer inward, then
/// outward, then along-ring, then the lowest node. A piece already on the
/// target holds its position.
#[must_use]
pub fn step_toward_field(board: &Board, from: Node, field: &DistanceField) -> Node {
    if from == field.target() {
        return from;
    }

    steps_from(board, from)
        .into_iter()
        .min_by_key(|step| {
            (
                field.distance(step.to).unwrap_or(u32::MAX),
                step.kind,
                step.to,
            )
        })
        .map_or(from, |step| step.to)
}

/// One pursuit step from `from` toward `target`.
#[must_use]
pub fn step_toward(board: &Board, from: Node, target: Node) -> Node {
    let field = DistanceField::from_target(board, target);
    step_toward_field(board, from, &field)
}
