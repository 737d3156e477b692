//! Graph distances to a single target.
//!
//! One breadth-first search from the target over `Board::neighbors` gives
//! the distance from every node. Adjacency is symmetric and edges are
//! unweighted, so this is also the distance *to* the target.

use std::collections::VecDeque;

use crate::core::{Board, Node};

/// BFS distances from every board node to one target.
#[derive(Clone, Debug)]
pub struct DistanceField {
    board: Board,
    target: Node,
    distances: Vec<u32>,
}

impl DistanceField {
    /// Sentinel for nodes not reached. Cannot happen on a valid board.
    const UNREACHED: u32 = u32::MAX;

    /// Run a BFS outward from `target`.
    #[must_use]
    pub fn from_target(board: &Board, target: Node) -> Self {
        let mut distances = vec![Self::UNREACHED; board.node_count()];
        let mut queue = VecDeque::new();

        if let Some(start) = board.index_of(target) {
            distances[start] = 0;
            queue.push_back(target);
        }

        while let Some(node) = queue.pop_front() {
            let Some(here) = board.index_of(node) else {
                continue;
            };
            let next = distances[here] + 1;
            for neighbor in board.neighbors(node) {
                if let Some(i) = board.index_of(neighbor) {
                    if distances[i] == Self::UNREACHED {
                        distances[i] = next;
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        Self {
            board: *board,
            target,
            distances,
        }
    }

    /// The node distances are measured to.
    #[must_use]
    pub fn target(&self) -> Node {
        self.target
    }

    /// Edges between `node` and the target, or `None` if `node` is off the board.
    #[must_use]
    pub fn distance(&self, node: Node) -> Option<u32> {
        let d = *self.distances.get(self.board.index_of(node)?)?;
        (d != Self::UNREACHED).then_some(d)
    }
}

/// Shortest-path length between two nodes.
#[must_use]
pub fn graph_distance(board: &Board, from: Node, to: Node) -> Option<u32> {
    DistanceField::from_target(board, to).distance(from)
}
