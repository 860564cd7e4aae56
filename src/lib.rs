//! # kalah-engine
//!
//! A Kalah (Mancala) rules engine with an alpha-beta move advisor.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Every rules operation takes a state by reference and
//!    returns a new one. Nothing is mutated in place.
//!
//! 2. **Configurable Variants**: Board size, seed count, capture, extra turns,
//!    and the end-of-game sweep are all set through `RulesConfig`.
//!
//! 3. **Deterministic**: Search has no clock, no randomness, and no cache.
//!    Random agents and playouts take an explicit seed.
//!
//! ## Architecture
//!
//! - **Side-to-move maximizing**: Search decides max/min nodes by comparing
//!   the side to move with the root, so extra-turn chains are scored correctly.
//!
//! - **Persistent history**: Session history uses `im` vectors, so forking a
//!   session is O(1).
//!
//! ## Modules
//!
//! - `core`: Sides, configuration, state, move outcomes, RNG
//! - `rules`: Sowing, capture, extra turns, sweep, terminal detection
//! - `search`: Alpha-beta search, evaluation, and move ordering
//! - `play`: Agents, game sessions, observers, random playouts
//! - `error`: Configuration and move errors

pub mod core;
pub mod error;
pub mod play;
pub mod rules;
pub mod search;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Capture, CaptureRule, GameRng, GameState, Landing, MoveOutcome, RulesConfig, RulesOptions,
    Side, SideMap, SowPath,
};

pub use crate::error::{ConfigError, MoveError};

pub use crate::rules::{
    apply_move, apply_sweep, create_rules, init_from_arrays, init_standard, is_terminal,
    legal_moves, outcome, GameOutcome, MoveList,
};

pub use crate::search::{
    AlphaBeta, EvalWeights, Evaluator, MoveOrderer, OrderingWeights, ScoredMove, SearchConfig,
    SearchResult, SearchStats,
};

pub use crate::play::{
    Agent, AlphaBetaAgent, GameSession, GameSummary, MoveObserver, PlyRecord, RandomAgent,
};
