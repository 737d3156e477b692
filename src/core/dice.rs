//! Six three-faced dice.
//!
//! Each die shows one of three equally likely faces. A roll is read as a
//! tally:
//! - **Black pips**: steps the active player must take
//! - **Red triangles**: how many foxes advance
//! - **Green lines**: how many snakes advance

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Number of dice thrown each turn.
pub const DICE_COUNT: usize = 6;

/// One die face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    BlackPip,
    RedTriangle,
    GreenLine,
}

impl Face {
    /// All faces, in draw order.
    pub const ALL: [Face; 3] = [Face::BlackPip, Face::RedTriangle, Face::GreenLine];
}

/// Face counts of a roll. Always sums to `DICE_COUNT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tally {
    pub black: u8,
    pub red: u8,
    pub green: u8,
}

impl Tally {
    /// Total dice counted.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.black + self.red + self.green
    }
}

/// The faces shown by one throw of all six dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    faces: [Face; DICE_COUNT],
}

impl DiceRoll {
    /// Build a roll from explicit faces.
    ///
    /// Used by collaborators replaying a known throw and by tests.
    #[must_use]
    pub const fn from_faces(faces: [Face; DICE_COUNT]) -> Self {
        Self { faces }
    }

    /// Build a roll with the given counts, faces ordered black, red, green.
    ///
    /// Returns `None` unless the counts sum to `DICE_COUNT`.
    #[must_use]
    pub fn from_tally(tally: Tally) -> Option<Self> {
        if tally.total() as usize != DICE_COUNT {
            return None;
        }
        let mut faces = [Face::BlackPip; DICE_COUNT];
        let black = tally.black as usize;
        let red = tally.red as usize;
        for (i, face) in faces.iter_mut().enumerate() {
            *face = if i < black {
                Face::BlackPip
            } else if i < black + red {
                Face::RedTriangle
            } else {
                Face::GreenLine
            };
        }
        Some(Self { faces })
    }

    /// Throw all six dice.
    pub fn roll(rng: &mut GameRng) -> Self {
        let mut faces = [Face::BlackPip; DICE_COUNT];
        for face in &mut faces {
            *face = Face::ALL[rng.gen_index(Face::ALL.len())];
        }
        Self { faces }
    }

    /// The individual faces.
    #[must_use]
    pub fn faces(&self) -> &[Face; DICE_COUNT] {
        &self.faces
    }

    /// Count each face.
    #[must_use]
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for face in &self.faces {
            match face {
                Face::BlackPip => tally.black += 1,
                Face::RedTriangle => tally.red += 1,
                Face::GreenLine => tally.green += 1,
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_sums_to_six() {
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            let roll = DiceRoll::roll(&mut rng);
            assert_eq!(roll.faces().len(), DICE_COUNT);
            assert_eq!(roll.tally().total() as usize, DICE_COUNT);
        }
    }

    #[test]
    fn test_seeded_rolls_repeat() {
        let mut rng1 = GameRng::new(11);
        let mut rng2 = GameRng::new(11);

        let seq1: Vec<_> = (0..20).map(|_| DiceRoll::roll(&mut rng1)).collect();
        let seq2: Vec<_> = (0..20).map(|_| DiceRoll::roll(&mut rng2)).collect();

        assert_eq!(seq1, seq2);
    }

    #[test]
    fn test_all_faces_appear() {
        let mut rng = GameRng::new(5);
        let mut seen = Tally::default();
        for _ in 0..50 {
            let t = DiceRoll::roll(&mut rng).tally();
            seen.black = seen.black.saturating_add(t.black);
            seen.red = seen.red.saturating_add(t.red);
            seen.green = seen.green.saturating_add(t.green);
        }
        assert!(seen.black > 0 && seen.red > 0 && seen.green > 0);
    }

    #[test]
    fn test_faces_are_uniform() {
        let mut rng = GameRng::new(2024);
        let rolls = 10_000;
        let mut counts = [0u32; 3];
        for _ in 0..rolls {
            for face in DiceRoll::roll(&mut rng).faces() {
                counts[*face as usize] += 1;
            }
        }

        let draws = (rolls * DICE_COUNT) as f64;
        for (face, count) in Face::ALL.iter().zip(counts) {
            let share = f64::from(count) / draws;
            assert!((share - 1.0 / 3.0).abs() < 0.01, "{face:?} drawn {share:.4} of the time");
        }
    }

    #[test]
    fn test_from_tally() {
        let roll = DiceRoll::from_tally(Tally {
            black: 1,
            red: 2,
            green: 3,
        })
        .unwrap();
        assert_eq!(
            roll.tally(),
            Tally {
                black: 1,
                red: 2,
                green: 3
            }
        );
        assert_eq!(roll.faces()[0], Face::BlackPip);
        assert_eq!(roll.faces()[5], Face::GreenLine);

        assert!(DiceRoll::from_tally(Tally {
            black: 1,
            red: 1,
            green: 1
        })
        .is_none());
    }

    #[test]
    fn test_serialization() {
        let mut rng = GameRng::new(8);
        let roll = DiceRoll::roll(&mut rng);
        let json = serde_json::to_string(&roll).unwrap();
        let deserialized: DiceRoll = serde_json::from_str(&json).unwrap();
        assert_eq!(roll, deserialized);
    }
}
