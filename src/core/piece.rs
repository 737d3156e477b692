//! Pieces and the piece set.
//!
//! ## Pieces
//!
//! A piece is a player token, a fox or a snake. All share an id, a node and
//! a captured flag; only players track whether they reached the outer ring.
//!
//! ## PieceSet
//!
//! Fixed roster backed by `im::Vector`, indexed by `PieceId`:
//! - ids `0..2`: players
//! - ids `2..7`: foxes
//! - ids `7..12`: snakes
//!
//! Pieces are never removed. Captured players keep their last node so
//! terminal checks can still see them.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::node::Node;

/// Number of player tokens.
pub const PLAYER_COUNT: usize = 2;

/// Number of foxes on the board.
pub const FOX_COUNT: usize = 5;

/// Number of snakes on the board.
pub const SNAKE_COUNT: usize = 5;

/// Piece identifier. Ascending id order is the engine's tie-break order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece {}", self.0)
    }
}

/// The two kinds of hostile piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PursuerKind {
    Fox,
    Snake,
}

/// Variant-specific piece data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Player {
        /// Set once the token has stood on the outer ring.
        visited_outer_ring: bool,
    },
    Fox,
    Snake,
}

impl PieceKind {
    /// The pursuer kind, or `None` for players.
    #[must_use]
    pub const fn pursuer(self) -> Option<PursuerKind> {
        match self {
            PieceKind::Player { .. } => None,
            PieceKind::Fox => Some(PursuerKind::Fox),
            PieceKind::Snake => Some(PursuerKind::Snake),
        }
    }
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub node: Node,
    pub captured: bool,
}

impl Piece {
    /// Check if this is a player token.
    #[must_use]
    pub const fn is_player(&self) -> bool {
        matches!(self.kind, PieceKind::Player { .. })
    }

    /// Check if this is an uncaptured pursuer of the given kind.
    #[must_use]
    pub fn is_live_pursuer(&self, kind: PursuerKind) -> bool {
        !self.captured && self.kind.pursuer() == Some(kind)
    }

    /// Whether a player has reached the outer ring. Always false for pursuers.
    #[must_use]
    pub const fn visited_outer_ring(&self) -> bool {
        matches!(
            self.kind,
            PieceKind::Player {
                visited_outer_ring: true
            }
        )
    }

    /// A player's personal win condition: outer ring visited, now on the center.
    #[must_use]
    pub const fn has_completed_race(&self) -> bool {
        self.visited_outer_ring() && self.node.is_center()
    }
}

/// All pieces of one game.
///
/// Uses `im::Vector` so snapshots of the public state clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSet {
    pieces: Vector<Piece>,
}

impl PieceSet {
    /// Place the standard roster on a board.
    ///
    /// Players start on the center. Fox `k` starts on the outer ring at slot
    /// `2k + 1`, snake `k` at slot `2k` (both mod `nodes_per_ring`), so the
    /// two kinds alternate around the rim.
    #[must_use]
    pub fn standard(board: &Board) -> Self {
        let outer = board.outer_ring();
        let n = board.nodes_per_ring() as usize;
        let mut pieces = Vector::new();

        for i in 0..PLAYER_COUNT {
            pieces.push_back(Piece {
                id: PieceId(i as u8),
                kind: PieceKind::Player {
                    visited_outer_ring: false,
                },
                node: Node::Center,
                captured: false,
            });
        }
        for k in 0..FOX_COUNT {
            pieces.push_back(Piece {
                id: PieceId((PLAYER_COUNT + k) as u8),
                kind: PieceKind::Fox,
                node: Node::slot(outer, ((2 * k + 1) % n) as u16),
                captured: false,
            });
        }
        for k in 0..SNAKE_COUNT {
            pieces.push_back(Piece {
                id: PieceId((PLAYER_COUNT + FOX_COUNT + k) as u8),
                kind: PieceKind::Snake,
                node: Node::slot(outer, ((2 * k) % n) as u16),
                captured: false,
            });
        }

        Self { pieces }
    }

    /// Build a piece set from explicit pieces.
    ///
    /// Ids must equal positions; returns `None` otherwise.
    #[must_use]
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Option<Self> {
        let pieces: Vector<Piece> = pieces.into_iter().collect();
        if pieces.iter().enumerate().any(|(i, p)| p.id.index() != i) {
            return None;
        }
        Some(Self { pieces })
    }

    /// Number of pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Get a piece.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Get a mutable piece.
    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())
    }

    /// Iterate over all pieces in id order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Player tokens in id order.
    pub fn players(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_player())
    }

    /// Uncaptured player tokens in id order.
    pub fn players_in_play(&self) -> impl Iterator<Item = &Piece> {
        self.players().filter(|p| !p.captured)
    }

    /// Uncaptured pursuers of one kind in id order.
    pub fn pursuers(&self, kind: PursuerKind) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.is_live_pursuer(kind))
    }

    /// Pieces standing on a node.
    pub fn at(&self, node: Node) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.node == node)
    }

    /// Uncaptured pursuers standing on a node, in id order.
    pub fn pursuers_at(&self, node: Node) -> impl Iterator<Item = &Piece> {
        self.at(node).filter(|p| !p.captured && p.kind.pursuer().is_some())
    }

    /// Move a piece. Returns its previous node, or `None` if the id is unknown.
    pub fn move_piece(&mut self, id: PieceId, to: Node) -> Option<Node> {
        let piece = self.get_mut(id)?;
        let from = piece.node;
        piece.node = to;
        Some(from)
    }

    /// Flag a piece captured. Returns false if the id is unknown.
    pub fn capture(&mut self, id: PieceId) -> bool {
        match self.get_mut(id) {
            Some(piece) => {
                piece.captured = true;
                true
            }
            None => false,
        }
    }

    /// Mark a player as having reached the outer ring.
    ///
    /// Returns true if the flag changed. No-op for pursuers.
    pub fn mark_outer_ring_visit(&mut self, id: PieceId) -> bool {
        match self.get_mut(id) {
            Some(Piece {
                kind: PieceKind::Player { visited_outer_ring },
                ..
            }) if !*visited_outer_ring => {
                *visited_outer_ring = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces() -> PieceSet {
        PieceSet::standard(&Board::new(6, 10).unwrap())
    }

    #[test]
    fn test_standard_roster() {
        let set = pieces();
        assert_eq!(set.len(), PLAYER_COUNT + FOX_COUNT + SNAKE_COUNT);
        assert_eq!(set.players().count(), 2);
        assert_eq!(set.pursuers(PursuerKind::Fox).count(), 5);
        assert_eq!(set.pursuers(PursuerKind::Snake).count(), 5);

        for player in set.players() {
            assert_eq!(player.node, Node::Center);
            assert!(!player.visited_outer_ring());
        }
    }

    #[test]
    fn test_pursuers_alternate_on_outer_ring() {
        let set = pieces();
        let fox_slots: Vec<_> = set
            .pursuers(PursuerKind::Fox)
            .map(|p| p.node.slot_index().unwrap())
            .collect();
        let snake_slots: Vec<_> = set
            .pursuers(PursuerKind::Snake)
            .map(|p| p.node.slot_index().unwrap())
            .collect();

        assert_eq!(fox_slots, vec![1, 3, 5, 7, 9]);
        assert_eq!(snake_slots, vec![0, 2, 4, 6, 8]);
        assert!(set.pursuers(PursuerKind::Fox).all(|p| p.node.ring() == 6));
    }

    #[test]
    fn test_small_ring_wraps_placement() {
        let set = PieceSet::standard(&Board::new(2, 3).unwrap());
        assert!(set.iter().all(|p| p.node.slot_index().map_or(true, |s| s < 3)));
    }

    #[test]
    fn test_move_and_capture() {
        let mut set = pieces();
        let p0 = PieceId::new(0);

        assert_eq!(set.move_piece(p0, Node::slot(1, 0)), Some(Node::Center));
        assert_eq!(set.get(p0).unwrap().node, Node::slot(1, 0));

        assert!(set.capture(p0));
        assert!(set.get(p0).unwrap().captured);
        assert_eq!(set.players_in_play().count(), 1);

        assert_eq!(set.move_piece(PieceId::new(99), Node::Center), None);
        assert!(!set.capture(PieceId::new(99)));
    }

    #[test]
    fn test_outer_ring_visit_flag() {
        let mut set = pieces();
        let p1 = PieceId::new(1);

        assert!(set.mark_outer_ring_visit(p1));
        assert!(!set.mark_outer_ring_visit(p1));
        assert!(set.get(p1).unwrap().visited_outer_ring());

        // Foxes carry no flag
        assert!(!set.mark_outer_ring_visit(PieceId::new(2)));
    }

    #[test]
    fn test_completed_race() {
        let mut set = pieces();
        let p0 = PieceId::new(0);
        assert!(!set.get(p0).unwrap().has_completed_race());

        set.mark_outer_ring_visit(p0);
        assert!(set.get(p0).unwrap().has_completed_race());

        set.move_piece(p0, Node::slot(1, 1));
        assert!(!set.get(p0).unwrap().has_completed_race());
    }

    #[test]
    fn test_pursuers_at() {
        let set = pieces();
        let at: Vec<_> = set.pursuers_at(Node::slot(6, 1)).map(|p| p.id).collect();
        assert_eq!(at, vec![PieceId::new(2)]);
        assert_eq!(set.pursuers_at(Node::Center).count(), 0);
    }

    #[test]
    fn test_from_pieces_checks_ids() {
        let set = pieces();
        let rebuilt = PieceSet::from_pieces(set.iter().copied()).unwrap();
        assert_eq!(rebuilt, set);

        let shuffled = set.iter().rev().copied().collect::<Vec<_>>();
        assert!(PieceSet::from_pieces(shuffled).is_none());
    }

    #[test]
    fn test_serialization() {
        let set = pieces();
        let json = serde_json::to_string(&set).unwrap();
        let deserialized: PieceSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, deserialized);
    }
}
