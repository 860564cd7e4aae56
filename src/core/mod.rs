//! Core engine types: sides, configuration, state, move metadata, RNG.
//!
//! Everything here is a plain value. The rules engine consumes and produces
//! these types but they carry no rules logic of their own.

pub mod config;
pub mod moves;
pub mod rng;
pub mod side;
pub mod state;

pub use config::{CaptureRule, RulesConfig, RulesOptions};
pub use moves::{Capture, Landing, MoveOutcome, SowPath};
pub use rng::GameRng;
pub use side::{Side, SideMap};
pub use state::{GameState, Pits};
