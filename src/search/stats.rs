//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one search call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, root children included.
    pub nodes: u64,

    /// Nodes scored by the evaluator.
    pub leaves: u64,

    /// Sibling loops stopped by an alpha-beta cutoff.
    pub cutoffs: u64,

    /// Deepest ply reached below the root.
    pub max_ply: u16,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of nodes that were leaves.
    #[must_use]
    pub fn leaf_ratio(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.leaves as f64 / self.nodes as f64
        }
    }

    /// Add another search's counters into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
        self.max_ply = self.max_ply.max(other.max_ply);
    }
}
