//! Game configuration.
//!
//! A game is configured once at startup:
//! - Board size (`ring_count`, `nodes_per_ring`)
//! - Dice seed
//! - Optional turn limit
//!
//! The piece roster is fixed by the rules and is not configurable.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::GameResult;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use snakes_foxes::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_rings(4)
///     .with_nodes_per_ring(8)
///     .with_seed(99)
///     .with_turn_limit(100);
///
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new().with_nodes_per_ring(2).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rings around the center (at least 1).
    pub ring_count: u16,

    /// Slots per ring (at least 3).
    pub nodes_per_ring: u16,

    /// Seed for the dice stream.
    pub seed: u64,

    /// Turns allowed before the game is lost. `None` plays until a win or
    /// both captures.
    pub turn_limit: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ring_count: 6,
            nodes_per_ring: 10,
            seed: 0,
            turn_limit: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (6 rings of 10, seed 0, no limit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ring count.
    #[must_use]
    pub fn with_rings(mut self, ring_count: u16) -> Self {
        self.ring_count = ring_count;
        self
    }

    /// Set the number of slots per ring.
    #[must_use]
    pub fn with_nodes_per_ring(mut self, nodes_per_ring: u16) -> Self {
        self.nodes_per_ring = nodes_per_ring;
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Cap the number of turns.
    #[must_use]
    pub fn with_turn_limit(mut self, turns: u32) -> Self {
        self.turn_limit = Some(turns);
        self
    }

    /// Check the configuration, building the board it describes.
    pub fn board(&self) -> GameResult<Board> {
        Board::new(self.ring_count, self.nodes_per_ring)
    }

    /// Check the configuration.
    pub fn validate(&self) -> GameResult<()> {
        self.board().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GameError;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.ring_count, 6);
        assert_eq!(config.nodes_per_ring, 10);
        assert_eq!(config.turn_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_rings(3)
            .with_nodes_per_ring(5)
            .with_seed(7)
            .with_turn_limit(20);

        let board = config.board().unwrap();
        assert_eq!(board.ring_count(), 3);
        assert_eq!(board.nodes_per_ring(), 5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.turn_limit, Some(20));
    }

    #[test]
    fn test_invalid_sizes() {
        for config in [
            GameConfig::new().with_rings(0),
            GameConfig::new().with_nodes_per_ring(0),
            GameConfig::new().with_nodes_per_ring(2),
        ] {
            assert!(matches!(
                config.validate(),
                Err(GameError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().with_seed(3).with_turn_limit(50);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
