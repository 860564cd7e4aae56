//! Adversarial search for move recommendations.
//!
//! ## Overview
//!
//! - **Alpha-beta minimax**: fail-hard, maximizing by side to move, not by depth
//! - **Evaluator**: store swing since the root, extra turns, near-store pit
//! - **Move ordering**: extra turns, then captures, then store gain
//! - **Deterministic**: no transposition table, no randomness, no clock
//!
//! ## Usage
//!
//! ```rust
//! use kalah_engine::core::{RulesConfig, Side};
//! use kalah_engine::rules::init_standard;
//! use kalah_engine::search::{AlphaBeta, SearchConfig};
//!
//! let rules = RulesConfig::standard();
//! let state = init_standard(&rules, Side::South);
//!
//! let mut search = AlphaBeta::new(rules, SearchConfig::new(4));
//! let result = search.best_move(&state);
//! assert!(result.best_move.is_some());
//!
//! for scored in search.rank_moves(&state, 4) {
//!     println!("pit {}: {}", scored.pit, scored.score);
//! }
//! ```

pub mod alphabeta;
pub mod config;
pub mod eval;
pub mod ordering;
pub mod stats;

pub use alphabeta::{best_move, rank_moves, AlphaBeta, ScoredMove, SearchResult, NO_MOVE_SCORE};
pub use config::{EvalWeights, OrderingWeights, SearchConfig};
pub use eval::{Evaluator, LeafContext, StoreSwingEvaluator};
pub use ordering::{Candidate, CandidateList, MoveOrderer, PitOrder, TacticalOrdering};
pub use stats::SearchStats;
