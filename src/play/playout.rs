//! Random playouts and move-generation counts.

use serde::Serialize;

use crate::core::{GameRng, GameState, RulesConfig};
use crate::rules::{apply_move, is_terminal, legal_moves, outcome, GameOutcome};

/// End of a random playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayoutResult {
    pub final_state: GameState,

    /// Plies played.
    pub plies: usize,

    /// `None` if the ply limit was hit first.
    pub outcome: Option<GameOutcome>,
}

/// Play uniformly random legal moves from `state`.
///
/// Stops at a terminal position, when no move is legal, or after `max_plies`.
pub fn random_playout(
    state: &GameState,
    rules: &RulesConfig,
    rng: &mut GameRng,
    max_plies: usize,
) -> PlayoutResult {
    let mut current = state.clone();
    let mut plies = 0;

    while plies < max_plies && !is_terminal(&current, rules) {
        let moves = legal_moves(&current, rules);
        let Some(&pit) = rng.choose(&moves) else {
            break;
        };
        match apply_move(&current, rules, pit) {
            Ok(next) => current = next.state,
            Err(_) => break,
        }
        plies += 1;
    }

    PlayoutResult {
        outcome: outcome(&current, rules),
        final_state: current,
        plies,
    }
}

/// `count` playouts, each on its own fork of `rng`.
pub fn batch_random_playouts(
    state: &GameState,
    rules: &RulesConfig,
    rng: &mut GameRng,
    count: usize,
    max_plies: usize,
) -> Vec<PlayoutResult> {
    (0..count)
        .map(|_| random_playout(state, rules, &mut rng.fork(), max_plies))
        .collect()
}

/// Leaf count of the legal-move tree, `depth` plies deep.
///
/// Every applied move is one ply, extra turns included. Lines that reach a
/// terminal position (or run out of moves) early count as one leaf.
#[must_use]
pub fn perft(state: &GameState, rules: &RulesConfig, depth: u32) -> u64 {
    if depth == 0 || is_terminal(state, rules) {
        return 1;
    }

    let moves = legal_moves(state, rules);
    if moves.is_empty() {
        return 1;
    }

    moves
        .into_iter()
        .filter_map(|pit| apply_move(state, rules, pit).ok())
        .map(|next| perft(&next.state, rules, depth - 1))
        .sum()
}
