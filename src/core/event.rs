//! Turn records: the engine's structured history.
//!
//! Every completed turn appends one `TurnRecord` to the public state. A
//! record lists what happened in order, so renderers can animate a turn and
//! tests can assert on it without re-deriving engine behavior.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::dice::DiceRoll;
use super::node::Node;
use super::piece::{PieceId, PursuerKind};
use super::state::LossReason;

/// One thing that happened during a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The active player moved.
    PlayerMoved { piece: PieceId, from: Node, to: Node },

    /// The roll left no legal destination, so the player stayed put.
    MoveSkipped { piece: PieceId },

    /// The player stood on the outer ring for the first time.
    VisitedOuterRing { piece: PieceId },

    /// A pursuer stepped toward the active player.
    PursuerMoved {
        piece: PieceId,
        kind: PursuerKind,
        from: Node,
        to: Node,
    },

    /// Pursuers caught the active player on `node`.
    Captured {
        piece: PieceId,
        node: Node,
        by: SmallVec<[PieceId; 2]>,
    },

    /// The active player completed the race.
    Won { piece: PieceId },

    /// The game ended without a winner.
    Lost { reason: LossReason },
}

/// Everything that happened in one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn: u32,

    /// The player whose turn it was.
    pub player: PieceId,

    /// The dice thrown.
    pub roll: DiceRoll,

    /// Events in the order they happened.
    /// SmallVec covers a typical turn (move plus a few pursuer steps) inline.
    pub events: SmallVec<[TurnEvent; 8]>,
}

impl TurnRecord {
    /// Start a record for a new turn.
    #[must_use]
    pub fn new(turn: u32, player: PieceId, roll: DiceRoll) -> Self {
        Self {
            turn,
            player,
            roll,
            events: SmallVec::new(),
        }
    }

    /// Append an event.
    pub fn push(&mut self, event: TurnEvent) {
        self.events.push(event);
    }

    /// Pursuer steps taken this turn, in order.
    pub fn pursuer_moves(&self) -> impl Iterator<Item = &TurnEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, TurnEvent::PursuerMoved { .. }))
    }

    /// Check if the active player was captured this turn.
    #[must_use]
    pub fn was_capture(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TurnEvent::Captured { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::Tally;

    fn roll() -> DiceRoll {
        DiceRoll::from_tally(Tally {
            black: 2,
            red: 2,
            green: 2,
        })
        .unwrap()
    }

    #[test]
    fn test_record_events() {
        let mut record = TurnRecord::new(3, PieceId::new(1), roll());
        record.push(TurnEvent::PlayerMoved {
            piece: PieceId::new(1),
            from: Node::Center,
            to: Node::slot(1, 2),
        });
        record.push(TurnEvent::PursuerMoved {
            piece: PieceId::new(2),
            kind: PursuerKind::Fox,
            from: Node::slot(6, 1),
            to: Node::slot(5, 1),
        });

        assert_eq!(record.turn, 3);
        assert_eq!(record.events.len(), 2);
        assert_eq!(record.pursuer_moves().count(), 1);
        assert!(!record.was_capture());

        record.push(TurnEvent::Captured {
            piece: PieceId::new(1),
            node: Node::slot(1, 2),
            by: SmallVec::from_slice(&[PieceId::new(2)]),
        });
        assert!(record.was_capture());
    }

    #[test]
    fn test_record_serialization() {
        let mut record = TurnRecord::new(1, PieceId::new(0), roll());
        record.push(TurnEvent::MoveSkipped {
            piece: PieceId::new(0),
        });
        record.push(TurnEvent::Lost {
            reason: LossReason::AllCaptured,
        });

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TurnRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
