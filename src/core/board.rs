//! Ring board topology.
//!
//! The board is a center node surrounded by `ring_count` concentric rings of
//! `nodes_per_ring` slots. Adjacency is a pure function of `(ring, slot)`:
//! nothing is materialized beyond the two dimensions.
//!
//! ## Edges
//!
//! - **Ring edges**: slot `i` touches slots `i + 1` and `i - 1` (mod N).
//! - **Radial edges**: `(r, i)` touches `(r - 1, i)` and `(r + 1, i)`.
//!   The center touches every ring-1 slot.
//!
//! ## Direction
//!
//! Movement along a ring is one-way. Odd rings run clockwise (increasing
//! slot index), even rings run counter-clockwise (decreasing slot index).
//! Radial steps are always allowed in both directions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{GameError, GameResult};
use super::node::Node;

/// Fewest rings a board may have.
pub const MIN_RINGS: u16 = 1;

/// Fewest slots per ring. Below three a ring is not a cycle.
pub const MIN_NODES_PER_RING: u16 = 3;

/// Neighbor list. Inline for ring slots (at most 4), spills for the center.
pub type Neighbors = SmallVec<[Node; 4]>;

/// Permitted travel direction along a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RingDirection {
    /// Increasing slot index.
    Clockwise,
    /// Decreasing slot index.
    CounterClockwise,
}

impl RingDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            RingDirection::Clockwise => RingDirection::CounterClockwise,
            RingDirection::CounterClockwise => RingDirection::Clockwise,
        }
    }
}

/// Immutable ring board.
///
/// ## Example
///
/// ```
/// use snakes_foxes::core::{Board, Node, RingDirection};
///
/// let board = Board::new(6, 10).unwrap();
///
/// assert_eq!(board.neighbors(Node::Center).len(), 10);
/// assert_eq!(board.ring_direction(1), RingDirection::Clockwise);
/// assert_eq!(board.forward(Node::slot(1, 9)), Some(Node::slot(1, 0)));
/// assert!(board.is_outer_ring(Node::slot(6, 3)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    ring_count: u16,
    nodes_per_ring: u16,
}

impl Board {
    /// Create a board.
    ///
    /// Fails with `InvalidConfiguration` if `ring_count < 1` or
    /// `nodes_per_ring < 3`.
    pub fn new(ring_count: u16, nodes_per_ring: u16) -> GameResult<Self> {
        if ring_count < MIN_RINGS {
            return Err(GameError::InvalidConfiguration {
                message: format!("ring_count must be at least {MIN_RINGS}, got {ring_count}"),
            });
        }
        if nodes_per_ring < MIN_NODES_PER_RING {
            return Err(GameError::InvalidConfiguration {
                message: format!(
                    "nodes_per_ring must be at least {MIN_NODES_PER_RING}, got {nodes_per_ring}"
                ),
            });
        }
        Ok(Self {
            ring_count,
            nodes_per_ring,
        })
    }

    /// Number of rings around the center.
    #[must_use]
    pub const fn ring_count(&self) -> u16 {
        self.ring_count
    }

    /// Number of slots on each ring.
    #[must_use]
    pub const fn nodes_per_ring(&self) -> u16 {
        self.nodes_per_ring
    }

    /// Total number of nodes, center included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.ring_count as usize * self.nodes_per_ring as usize
    }

    /// Index of the outermost ring.
    #[must_use]
    pub const fn outer_ring(&self) -> u16 {
        self.ring_count
    }

    /// Check if a node exists on this board.
    #[must_use]
    pub fn contains(&self, node: Node) -> bool {
        match node {
            Node::Center => true,
            Node::Slot { ring, slot } => {
                (1..=self.ring_count).contains(&ring) && slot < self.nodes_per_ring
            }
        }
    }

    /// Check if a node is the center.
    #[must_use]
    pub fn is_center(&self, node: Node) -> bool {
        node.is_center()
    }

    /// Check if a node lies on the outermost ring.
    #[must_use]
    pub fn is_outer_ring(&self, node: Node) -> bool {
        node.ring() == self.ring_count && !node.is_center()
    }

    /// Travel direction of a ring. Odd rings clockwise, even counter-clockwise.
    #[must_use]
    pub const fn ring_direction(&self, ring: u16) -> RingDirection {
        if ring % 2 == 1 {
            RingDirection::Clockwise
        } else {
            RingDirection::CounterClockwise
        }
    }

    /// Dense index in `0..node_count()`. The center is 0, then ring by ring.
    #[must_use]
    pub fn index_of(&self, node: Node) -> Option<usize> {
        if !self.contains(node) {
            return None;
        }
        Some(match node {
            Node::Center => 0,
            Node::Slot { ring, slot } => {
                1 + (ring as usize - 1) * self.nodes_per_ring as usize + slot as usize
            }
        })
    }

    /// All nodes in index order (center first).
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        std::iter::once(Node::Center).chain((1..=self.ring_count).flat_map(move |ring| {
            (0..self.nodes_per_ring).map(move |slot| Node::slot(ring, slot))
        }))
    }

    /// All slots of one ring in slot order. Empty for ring 0 or out-of-range rings.
    pub fn ring_nodes(&self, ring: u16) -> impl Iterator<Item = Node> {
        let count = if (1..=self.ring_count).contains(&ring) {
            self.nodes_per_ring
        } else {
            0
        };
        (0..count).map(move |slot| Node::slot(ring, slot))
    }

    // === Directed steps ===

    /// The single permitted ring step from a node, following its ring's direction.
    ///
    /// `None` for the center.
    #[must_use]
    pub fn forward(&self, node: Node) -> Option<Node> {
        match node {
            Node::Center => None,
            Node::Slot { ring, slot } => {
                Some(Node::slot(ring, self.shift(slot, self.ring_direction(ring))))
            }
        }
    }

    /// The ring step against the ring's direction. Counts for adjacency only.
    #[must_use]
    pub fn backward(&self, node: Node) -> Option<Node> {
        match node {
            Node::Center => None,
            Node::Slot { ring, slot } => Some(Node::slot(
                ring,
                self.shift(slot, self.ring_direction(ring).reversed()),
            )),
        }
    }

    /// Radial step toward the center. Ring 1 steps onto the center itself.
    #[must_use]
    pub fn inward(&self, node: Node) -> Option<Node> {
        match node {
            Node::Center => None,
            Node::Slot { ring: 1, .. } => Some(Node::Center),
            Node::Slot { ring, slot } => Some(Node::slot(ring - 1, slot)),
        }
    }

    /// Radial step away from the center, for ring slots below the outer ring.
    ///
    /// `None` for the center (it fans out to every ring-1 slot, see
    /// `neighbors`) and for the outer ring.
    #[must_use]
    pub fn outward(&self, node: Node) -> Option<Node> {
        match node {
            Node::Slot { ring, slot } if ring < self.ring_count => Some(Node::slot(ring + 1, slot)),
            _ => None,
        }
    }

    /// Every node one ring step or one radial step away, ignoring direction.
    ///
    /// The center returns all ring-1 slots. Ring slots return both ring
    /// neighbors plus whichever radial neighbors exist.
    #[must_use]
    pub fn neighbors(&self, node: Node) -> Neighbors {
        match node {
            Node::Center => self.ring_nodes(1).collect(),
            Node::Slot { .. } => [
                self.backward(node),
                self.forward(node),
                self.inward(node),
                self.outward(node),
            ]
            .into_iter()
            .flatten()
            .collect(),
        }
    }

    /// One slot along a ring, wrapping. Computed in `u32` so rings near
    /// `u16::MAX` slots do not overflow.
    fn shift(&self, slot: u16, direction: RingDirection) -> u16 {
        let n = u32::from(self.nodes_per_ring);
        let slot = u32::from(slot);
        let shifted = match direction {
            RingDirection::Clockwise => (slot + 1) % n,
            RingDirection::CounterClockwise => (slot + n - 1) % n,
        };
        shifted as u16
    }
}
