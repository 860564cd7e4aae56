//! Move ordering for alpha-beta.
//!
//! Orderers simulate every legal move once and hand back the resulting
//! outcomes, so the search descends into the already-applied children instead
//! of replaying each move.

use smallvec::SmallVec;

use crate::core::{GameState, MoveOutcome, RulesConfig};
use crate::rules::{apply_move, legal_moves};

use super::config::OrderingWeights;

/// A simulated legal move with its ordering priority.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub pit: usize,
    pub outcome: MoveOutcome,
    pub priority: i64,
}

/// Candidates in exploration order.
pub type CandidateList = SmallVec<[Candidate; 8]>;

/// Ranks the legal moves of a position before its children are expanded.
pub trait MoveOrderer: Send + Sync {
    /// Every legal move of `state`, most promising first.
    fn order(&self, state: &GameState, rules: &RulesConfig) -> CandidateList;
}

/// Extra turns first, then captures, then raw store gain.
///
/// Priority is `extra_turn * [extra turn] + capture * [capture] + store_gain * gain`,
/// sorted descending; equal priorities keep ascending pit order.
#[derive(Clone, Copy, Debug, Default)]
pub struct TacticalOrdering {
    weights: OrderingWeights,
}

impl TacticalOrdering {
    pub fn new(weights: OrderingWeights) -> Self {
        Self { weights }
    }

    fn priority(&self, before: &GameState, outcome: &MoveOutcome) -> i64 {
        let mover = outcome.mover;
        let gain = i64::from(outcome.state.store(mover)) - i64::from(before.store(mover));

        self.weights.extra_turn * i64::from(outcome.extra_turn)
            + self.weights.capture * i64::from(outcome.capture.is_some())
            + self.weights.store_gain * gain
    }
}

impl MoveOrderer for TacticalOrdering {
    fn order(&self, state: &GameState, rules: &RulesConfig) -> CandidateList {
        let mut candidates: CandidateList = legal_moves(state, rules)
            .into_iter()
            .filter_map(|pit| apply_move(state, rules, pit).ok().map(|outcome| (pit, outcome)))
            .map(|(pit, outcome)| Candidate {
                pit,
                priority: self.priority(state, &outcome),
                outcome,
            })
            .collect();

        // Stable: ties stay in pit order.
        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
        candidates
    }
}

/// Legal moves in pit order, unranked.
///
/// Useful as a baseline when measuring how much ordering saves.
#[derive(Clone, Copy, Debug, Default)]
pub struct PitOrder;

impl MoveOrderer for PitOrder {
    fn order(&self, state: &GameState, rules: &RulesConfig) -> CandidateList {
        legal_moves(state, rules)
            .into_iter()
            .filter_map(|pit| apply_move(state, rules, pit).ok().map(|outcome| (pit, outcome)))
            .map(|(pit, outcome)| Candidate {
                pit,
                outcome,
                priority: 0,
            })
            .collect()
    }
}
