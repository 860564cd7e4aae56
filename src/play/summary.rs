//! Per-ply records and end-of-game summaries.
//!
//! A `GameSummary` is the payload handed to observers when a session ends.
//! It is plain serde data; shipping it anywhere is the caller's business.

use serde::{Deserialize, Serialize};

use crate::core::{MoveOutcome, Side, SideMap};
use crate::rules::GameOutcome;

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlyRecord {
    /// Side that moved.
    pub side: Side,

    /// Pit sown from.
    pub pit: usize,

    pub extra_turn: bool,

    /// Seeds taken by a capture (0 if none).
    pub captured: u32,

    /// Ply number in the session (0-indexed).
    pub ply: usize,
}

impl PlyRecord {
    /// Record for `outcome`, played as ply number `ply`.
    pub fn from_outcome(outcome: &MoveOutcome, ply: usize) -> Self {
        Self {
            side: outcome.mover,
            pit: outcome.pit,
            extra_turn: outcome.extra_turn,
            captured: outcome.captured_seeds(),
            ply,
        }
    }
}

/// Summary of a finished (or abandoned) game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Caller-supplied mode tag, e.g. "ai-vs-human".
    pub mode: String,

    /// Search depth used by the advisor, if any.
    pub search_depth: Option<i32>,

    /// Every ply in order.
    pub plies: Vec<PlyRecord>,

    pub ply_count: usize,

    /// Stores at the end of the session.
    pub final_stores: SideMap<u32>,

    /// `None` when the session stopped before a terminal position.
    pub outcome: Option<GameOutcome>,
}

impl GameSummary {
    /// True when the game reached a terminal position.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Plies made by one side.
    pub fn plies_by(&self, side: Side) -> impl Iterator<Item = &PlyRecord> {
        self.plies.iter().filter(move |p| p.side == side)
    }

    /// Extra turns earned by one side.
    #[must_use]
    pub fn extra_turns(&self, side: Side) -> usize {
        self.plies_by(side).filter(|p| p.extra_turn).count()
    }

    /// Seeds captured by one side.
    #[must_use]
    pub fn captured(&self, side: Side) -> u32 {
        self.plies_by(side).map(|p| p.captured).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ply(side: Side, pit: usize, extra_turn: bool, captured: u32, n: usize) -> PlyRecord {
        PlyRecord {
            side,
            pit,
            extra_turn,
            captured,
            ply: n,
        }
    }

    fn sample() -> GameSummary {
        GameSummary {
            mode: "ai-vs-ai".to_string(),
            search_depth: Some(4),
            plies: vec![
                ply(Side::South, 2, true, 0, 0),
                ply(Side::South, 5, false, 0, 1),
                ply(Side::North, 0, false, 7, 2),
            ],
            ply_count: 3,
            final_stores: SideMap::from_values(2, 8),
            outcome: None,
        }
    }

    #[test]
    fn test_per_side_tallies() {
        let summary = sample();

        assert_eq!(summary.plies_by(Side::South).count(), 2);
        assert_eq!(summary.extra_turns(Side::South), 1);
        assert_eq!(summary.extra_turns(Side::North), 0);
        assert_eq!(summary.captured(Side::North), 7);
        assert!(!summary.is_finished());
    }

    #[test]
    fn test_summary_serializes() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["mode"], "ai-vs-ai");
        assert_eq!(json["search_depth"], 4);
        assert_eq!(json["ply_count"], 3);
        assert_eq!(json["plies"][2]["captured"], 7);
        assert!(json["outcome"].is_null());
    }

    #[test]
    fn test_ply_record_roundtrip() {
        let record = ply(Side::North, 3, true, 0, 11);
        let json = serde_json::to_string(&record).unwrap();
        let back: PlyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
