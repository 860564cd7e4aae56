//! Leaf evaluation.
//!
//! Scores are relative to the search root: store seeds are counted as the
//! swing since the root position, so absolute material never enters the
//! score.

use crate::core::{GameState, RulesConfig, Side, SideMap};

use super::config::EvalWeights;

/// What an evaluator knows about the line leading to a leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeafContext {
    /// Side the search is run for.
    pub root: Side,

    /// Stores at the search root.
    pub root_stores: SideMap<u32>,

    /// Extra turns earned by `root` between the root and this leaf.
    pub root_extra_turns: u32,
}

/// Scores a position from the root player's perspective.
pub trait Evaluator: Send + Sync {
    /// Higher is better for `ctx.root`.
    fn evaluate(&self, state: &GameState, rules: &RulesConfig, ctx: &LeafContext) -> i64;
}

/// Store swing, extra turns, and an empty near-store pit.
///
/// `store_swing * (Δroot - Δopp) + extra_turn * reps + empty_near_store * [pit n-1 empty]`
#[derive(Clone, Copy, Debug, Default)]
pub struct StoreSwingEvaluator {
    weights: EvalWeights,
}

impl StoreSwingEvaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }
}

impl Evaluator for StoreSwingEvaluator {
    fn evaluate(&self, state: &GameState, _rules: &RulesConfig, ctx: &LeafContext) -> i64 {
        let root = ctx.root;
        let opponent = root.opponent();

        let delta = |side: Side| i64::from(state.store(side)) - i64::from(ctx.root_stores[side]);
        let swing = delta(root) - delta(opponent);

        let near_store = state.pits_per_side() - 1;
        let near_store_empty = i64::from(state.pit(root, near_store) == 0);

        self.weights.store_swing * swing
            + self.weights.extra_turn * i64::from(ctx.root_extra_turns)
            + self.weights.empty_near_store * near_store_empty
    }
}
