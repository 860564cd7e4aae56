//! Alpha-beta minimax over the Kalah rules engine.
//!
//! Unlike a negamax search, nodes are classified as maximizing or minimizing
//! by comparing the side to move with the root player. Extra turns let one
//! side move several times in a row, so ply parity says nothing about who is
//! to move.
//!
//! There is no transposition table: every call walks a fresh tree and the
//! result depends only on the state, the rules, the depth, and the weights.

use serde::Serialize;
use tracing::{debug, trace};

use crate::core::{GameState, RulesConfig, Side, SideMap};
use crate::rules::is_terminal;

use super::config::SearchConfig;
use super::eval::{Evaluator, LeafContext, StoreSwingEvaluator};
use super::ordering::{CandidateList, MoveOrderer, TacticalOrdering};
use super::stats::SearchStats;

/// Score reported when the root has no legal move.
pub const NO_MOVE_SCORE: i64 = i64::MIN;

/// Recommendation from a search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Recommended pit, or `None` when no move is available.
    pub best_move: Option<usize>,

    /// Minimax value of `best_move`, or `NO_MOVE_SCORE`.
    pub score: i64,

    /// Ply budget the search ran with.
    pub depth: i32,

    pub stats: SearchStats,
}

impl SearchResult {
    /// True when the root had no legal move.
    #[must_use]
    pub fn is_no_move(&self) -> bool {
        self.best_move.is_none()
    }
}

/// A root move with its full-window minimax value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    pub pit: usize,
    pub score: i64,
}

/// Fixed facts about the root, shared by every node of one search.
struct RootInfo {
    side: Side,
    stores: SideMap<u32>,
}

/// Alpha-beta search context.
///
/// Owns the rules, the configuration, and the evaluation/ordering policies.
/// Only the statistics change between calls.
pub struct AlphaBeta {
    rules: RulesConfig,
    config: SearchConfig,
    evaluator: Box<dyn Evaluator>,
    orderer: Box<dyn MoveOrderer>,
    stats: SearchStats,
}

impl AlphaBeta {
    /// Searcher with the default evaluator and ordering, weighted by `config`.
    pub fn new(rules: RulesConfig, config: SearchConfig) -> Self {
        Self {
            rules,
            evaluator: Box::new(StoreSwingEvaluator::new(config.eval)),
            orderer: Box::new(TacticalOrdering::new(config.ordering)),
            config,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom leaf evaluator.
    pub fn with_evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Set a custom move orderer.
    pub fn with_orderer<O: MoveOrderer + 'static>(mut self, orderer: O) -> Self {
        self.orderer = Box::new(orderer);
        self
    }

    /// Recommend a move for the side to move, at the configured depth.
    pub fn best_move(&mut self, state: &GameState) -> SearchResult {
        self.best_move_at_depth(state, self.config.depth)
    }

    /// Recommend a move for the side to move, searching `depth` plies.
    ///
    /// Each root candidate is searched with a full window; the first
    /// candidate (in ordering order) with the highest value wins.
    pub fn best_move_at_depth(&mut self, state: &GameState, depth: i32) -> SearchResult {
        self.stats.reset();

        let candidates = self.orderer.order(state, &self.rules);
        if candidates.is_empty() {
            debug!(side = %state.to_move(), depth, "no legal move at search root");
            return SearchResult {
                best_move: None,
                score: NO_MOVE_SCORE,
                depth,
                stats: self.stats,
            };
        }

        let root = RootInfo {
            side: state.to_move(),
            stores: state.stores(),
        };

        let mut best: Option<ScoredMove> = None;
        for scored in self.score_candidates(&root, candidates, depth) {
            if best.map_or(true, |b| scored.score > b.score) {
                best = Some(scored);
            }
        }

        let result = SearchResult {
            best_move: best.map(|b| b.pit),
            score: best.map_or(NO_MOVE_SCORE, |b| b.score),
            depth,
            stats: self.stats,
        };

        debug!(
            side = %root.side,
            depth,
            best_move = ?result.best_move,
            score = result.score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "search complete"
        );

        result
    }

    /// Score every legal move of the side to move, best first.
    ///
    /// Equal scores keep ordering order, so the head of the list is the move
    /// `best_move_at_depth` would pick.
    pub fn rank_moves(&mut self, state: &GameState, depth: i32) -> Vec<ScoredMove> {
        self.stats.reset();

        let root = RootInfo {
            side: state.to_move(),
            stores: state.stores(),
        };
        let candidates = self.orderer.order(state, &self.rules);

        let mut scored = self.score_candidates(&root, candidates, depth);
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// Full-window value of each root candidate, in candidate order.
    fn score_candidates(
        &mut self,
        root: &RootInfo,
        candidates: CandidateList,
        depth: i32,
    ) -> Vec<ScoredMove> {
        candidates
            .into_iter()
            .map(|candidate| {
                // The root always moves first, so any extra turn here is the root's.
                let extra_turns = u32::from(candidate.outcome.extra_turn);
                let score = self.search(
                    &candidate.outcome.state,
                    depth - 1,
                    i64::MIN,
                    i64::MAX,
                    root,
                    extra_turns,
                    1,
                );
                trace!(pit = candidate.pit, score, "root candidate scored");
                ScoredMove {
                    pit: candidate.pit,
                    score,
                }
            })
            .collect()
    }

    /// Fail-hard alpha-beta.
    #[allow(clippy::too_many_arguments)]
    fn search(
        &mut self,
        state: &GameState,
        depth: i32,
        mut alpha: i64,
        mut beta: i64,
        root: &RootInfo,
        extra_turns: u32,
        ply: u16,
    ) -> i64 {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if depth <= 0 || is_terminal(state, &self.rules) {
            return self.leaf(state, root, extra_turns);
        }

        let candidates = self.orderer.order(state, &self.rules);
        if candidates.is_empty() {
            return self.leaf(state, root, extra_turns);
        }

        let maximizing = state.to_move() == root.side;
        let mut best = if maximizing { i64::MIN } else { i64::MAX };

        for candidate in candidates {
            let earned =
                u32::from(candidate.outcome.extra_turn && candidate.outcome.mover == root.side);
            let value = self.search(
                &candidate.outcome.state,
                depth - 1,
                alpha,
                beta,
                root,
                extra_turns + earned,
                ply + 1,
            );

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                trace!(ply, alpha, beta, "cutoff");
                break;
            }
        }

        best
    }

    fn leaf(&mut self, state: &GameState, root: &RootInfo, extra_turns: u32) -> i64 {
        self.stats.leaves += 1;
        let ctx = LeafContext {
            root: root.side,
            root_stores: root.stores,
            root_extra_turns: extra_turns,
        };
        self.evaluator.evaluate(state, &self.rules, &ctx)
    }

    /// Statistics from the most recent call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the rules.
    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Recommend a move with default weights.
#[must_use]
pub fn best_move(state: &GameState, rules: &RulesConfig, depth: i32) -> SearchResult {
    AlphaBeta::new(*rules, SearchConfig::new(depth)).best_move(state)
}

/// Score every legal move with default weights, best first.
#[must_use]
pub fn rank_moves(state: &GameState, rules: &RulesConfig, depth: i32) -> Vec<ScoredMove> {
    AlphaBeta::new(*rules, SearchConfig::new(depth)).rank_moves(state, depth)
}
