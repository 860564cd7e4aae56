//! Kalah rules engine.
//!
//! Pure functions over `GameState` and `RulesConfig`:
//! - State construction (`init_standard`, `init_from_arrays`)
//! - Legal moves and move application (sowing, capture, extra turn)
//! - Terminal detection, sweep, and final outcome
//!
//! Nothing here holds state between calls, so the engine is safe to call
//! from any number of threads on independent states.

pub mod engine;

pub use engine::{
    apply_move, apply_sweep, create_rules, init_from_arrays, init_standard, is_terminal,
    legal_moves, outcome, sow_path, GameOutcome, MoveList,
};
