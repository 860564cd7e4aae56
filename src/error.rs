//! Error types for configuration and move application.
//!
//! Both kinds are ordinary values: construction returns `Result<_, ConfigError>`
//! and move application returns `Result<_, MoveError>`. Nothing in the engine
//! panics on caller input.

use crate::core::Side;

/// Invalid construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("pits per side must be positive, got {0}")]
    NonPositivePits(i64),

    #[error("seeds per pit must be non-negative, got {0}")]
    NegativeSeeds(i64),

    #[error("{pits_per_side} pits of {seeds_per_pit} seeds overflow the seed counter")]
    SeedOverflow { pits_per_side: i64, seeds_per_pit: i64 },

    #[error("pits per side must be at most {max}, got {pits_per_side}")]
    TooManyPits { pits_per_side: i64, max: i64 },

    #[error("board holds {total} seeds, more than the seed counter allows")]
    SeedTotalOverflow { total: u64 },

    #[error("{side} has {actual} pits, expected {expected}")]
    PitCountMismatch {
        side: Side,
        expected: usize,
        actual: usize,
    },
}

/// An illegal move attempt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("out of range: pit {pit} (pits per side: {pits_per_side})")]
    OutOfRange { pit: usize, pits_per_side: usize },

    #[error("empty pit: {pit}")]
    EmptyPit { pit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NonPositivePits(0);
        assert_eq!(err.to_string(), "pits per side must be positive, got 0");

        let err = ConfigError::PitCountMismatch {
            side: Side::South,
            expected: 6,
            actual: 5,
        };
        assert_eq!(err.to_string(), "Side 0 has 5 pits, expected 6");

        let err = ConfigError::TooManyPits {
            pits_per_side: 5000,
            max: 1024,
        };
        assert_eq!(err.to_string(), "pits per side must be at most 1024, got 5000");
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfRange {
            pit: 9,
            pits_per_side: 6,
        };
        assert!(err.to_string().starts_with("out of range"));

        let err = MoveError::EmptyPit { pit: 2 };
        assert_eq!(err.to_string(), "empty pit: 2");
    }
}
