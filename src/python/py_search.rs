//! Search and playout bindings for Python.

use pyo3::prelude::*;

use crate::core::GameRng;
use crate::play;
use crate::search;

use super::py_core::{PyGameState, PyRulesConfig};

/// Recommend a move for the side to move.
///
/// Returns (pit, score); pit is None when no move is legal.
#[pyfunction]
#[pyo3(signature = (state, rules, depth = 6))]
pub fn best_move(state: &PyGameState, rules: &PyRulesConfig, depth: i32) -> (Option<usize>, i64) {
    let result = search::best_move(&state.0, &rules.0, depth);
    (result.best_move, result.score)
}

/// Every legal move as (pit, score), best first.
#[pyfunction]
#[pyo3(signature = (state, rules, depth = 6))]
pub fn rank_moves(state: &PyGameState, rules: &PyRulesConfig, depth: i32) -> Vec<(usize, i64)> {
    search::rank_moves(&state.0, &rules.0, depth)
        .into_iter()
        .map(|m| (m.pit, m.score))
        .collect()
}

/// Leaf count of the legal-move tree.
#[pyfunction]
pub fn perft(state: &PyGameState, rules: &PyRulesConfig, depth: u32) -> u64 {
    play::perft(&state.0, &rules.0, depth)
}

/// Random playout; returns (final state, plies played).
#[pyfunction]
#[pyo3(signature = (state, rules, seed, max_plies = 1000))]
pub fn random_playout(
    state: &PyGameState,
    rules: &PyRulesConfig,
    seed: u64,
    max_plies: usize,
) -> (PyGameState, usize) {
    let result = play::random_playout(&state.0, &rules.0, &mut GameRng::new(seed), max_plies);
    (PyGameState(result.final_state), result.plies)
}
