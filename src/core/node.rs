//! Board node identification.
//!
//! Every position on the board is a `Node`.
//!
//! ## Layout
//!
//! - Ring 0 is the single center node. It has no slot index.
//! - Rings `1..=ring_count` each hold `nodes_per_ring` slots, indexed `0..nodes_per_ring`.
//!
//! Nodes are plain values. Whether a node actually exists on a given board
//! is answered by `Board::contains`, not by the node itself.
//!
//! ## Usage
//!
//! ```
//! use snakes_foxes::core::Node;
//!
//! let center = Node::Center;
//! let slot = Node::slot(1, 0);
//!
//! assert_eq!(center.ring(), 0);
//! assert_eq!(slot.ring(), 1);
//! assert_eq!(slot.slot_index(), Some(0));
//! assert_eq!(center.slot_index(), None);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A set of destinations, iterated in node order.
pub type MoveSet = BTreeSet<Node>;

/// A position on the ring board.
///
/// Ordering is total and stable: the center sorts first, then slots by
/// `(ring, slot)`. Sets of nodes returned by the engine iterate in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Node {
    /// The singleton center node (ring 0).
    Center,
    /// A slot on one of the outer rings.
    Slot {
        /// Ring index, `1..=ring_count`.
        ring: u16,
        /// Slot index within the ring, `0..nodes_per_ring`.
        slot: u16,
    },
}

impl Node {
    /// Create a ring slot node.
    #[must_use]
    pub const fn slot(ring: u16, slot: u16) -> Self {
        Node::Slot { ring, slot }
    }

    /// Ring index of this node (0 for the center).
    #[must_use]
    pub const fn ring(self) -> u16 {
        match self {
            Node::Center => 0,
            Node::Slot { ring, .. } => ring,
        }
    }

    /// Slot index, or `None` for the center.
    #[must_use]
    pub const fn slot_index(self) -> Option<u16> {
        match self {
            Node::Center => None,
            Node::Slot { slot, .. } => Some(slot),
        }
    }

    /// Check if this is the center node.
    #[must_use]
    pub const fn is_center(self) -> bool {
        matches!(self, Node::Center)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Center => write!(f, "center"),
            Node::Slot { ring, slot } => write!(f, "({}, {})", ring, slot),
        }
    }
}
