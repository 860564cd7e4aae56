//! Driving whole games: agents, sessions, observers, and random playouts.
//!
//! ```rust
//! use kalah_engine::core::{RulesConfig, Side, SideMap};
//! use kalah_engine::play::{Agent, AlphaBetaAgent, GameSession, RandomAgent};
//! use kalah_engine::search::SearchConfig;
//!
//! let rules = RulesConfig::standard();
//! let mut agents: SideMap<Box<dyn Agent>> = SideMap::from_values(
//!     Box::new(AlphaBetaAgent::new(rules, SearchConfig::new(2))),
//!     Box::new(RandomAgent::new(7)),
//! );
//!
//! let mut session = GameSession::new(rules, Side::South).with_mode("ai-vs-random");
//! let summary = session.play_out(&mut agents, 500);
//! assert_eq!(summary.search_depth, Some(2));
//! ```

pub mod agent;
pub mod playout;
pub mod session;
pub mod summary;

pub use agent::{Agent, AlphaBetaAgent, RandomAgent};
pub use playout::{batch_random_playouts, perft, random_playout, PlayoutResult};
pub use session::{GameSession, MoveObserver};
pub use summary::{GameSummary, PlyRecord};
