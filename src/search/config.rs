//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Leaf evaluation weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per seed of store swing (root gain minus opponent gain since the root).
    pub store_swing: i64,

    /// Per extra turn earned by the root player along the line.
    pub extra_turn: i64,

    /// Bonus when the root player's pit nearest its store is empty.
    pub empty_near_store: i64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            store_swing: 10,
            extra_turn: 1,
            empty_near_store: 5,
        }
    }
}

/// Move ordering weights.
///
/// Ordering only changes how much of the tree is pruned, never the value of
/// the recommended move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingWeights {
    pub extra_turn: i64,
    pub capture: i64,
    /// Per seed the mover's store gains from the move itself.
    pub store_gain: i64,
}

impl Default for OrderingWeights {
    fn default() -> Self {
        Self {
            extra_turn: 1000,
            capture: 200,
            store_gain: 1,
        }
    }
}

/// Alpha-beta search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Default ply budget. Callers bound latency by choosing it; there is no
    /// timeout inside the search.
    pub depth: i32,

    pub eval: EvalWeights,

    pub ordering: OrderingWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
            eval: EvalWeights::default(),
            ordering: OrderingWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Default depth for `SearchConfig::default()`.
    pub const DEFAULT_DEPTH: i32 = 6;

    /// Config with the given depth and default weights.
    pub fn new(depth: i32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Set the ply budget.
    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    /// Set leaf evaluation weights.
    pub fn with_eval_weights(mut self, eval: EvalWeights) -> Self {
        self.eval = eval;
        self
    }

    /// Set move ordering weights.
    pub fn with_ordering_weights(mut self, ordering: OrderingWeights) -> Self {
        self.ordering = ordering;
        self
    }
}
