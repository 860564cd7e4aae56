//! Move-choosing agents.
//!
//! Agents are trait-based so a session can pit any two against each other:
//! - `AlphaBetaAgent`: depth-bounded alpha-beta recommendation
//! - `RandomAgent`: uniform over legal moves, seeded for reproducibility

use crate::core::{GameRng, GameState, RulesConfig};
use crate::rules::legal_moves;
use crate::search::{AlphaBeta, SearchConfig};

/// Chooses moves for whichever side is to move.
pub trait Agent: Send {
    /// Pick a pit for `state.to_move()`.
    ///
    /// Returns `None` if no legal move exists.
    fn choose_move(&mut self, state: &GameState, rules: &RulesConfig) -> Option<usize>;

    /// Short tag describing the agent (used in game summaries).
    fn name(&self) -> &str;

    /// Search depth, for agents that search.
    fn search_depth(&self) -> Option<i32> {
        None
    }
}

/// Plays the alpha-beta recommendation.
pub struct AlphaBetaAgent {
    search: AlphaBeta,
}

impl AlphaBetaAgent {
    /// Agent searching `config.depth` plies under `rules`.
    pub fn new(rules: RulesConfig, config: SearchConfig) -> Self {
        Self {
            search: AlphaBeta::new(rules, config),
        }
    }

    /// Agent wrapping an already configured searcher.
    pub fn from_search(search: AlphaBeta) -> Self {
        Self { search }
    }

    /// The underlying searcher.
    pub fn search(&self) -> &AlphaBeta {
        &self.search
    }
}

impl Agent for AlphaBetaAgent {
    fn choose_move(&mut self, state: &GameState, _rules: &RulesConfig) -> Option<usize> {
        self.search.best_move(state).best_move
    }

    fn name(&self) -> &str {
        "alphabeta"
    }

    fn search_depth(&self) -> Option<i32> {
        Some(self.search.config().depth)
    }
}

/// Uniform random legal moves.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, state: &GameState, rules: &RulesConfig) -> Option<usize> {
        let moves = legal_moves(state, rules);
        self.rng.choose(&moves).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;
    use crate::rules::{init_from_arrays, init_standard};

    #[test]
    fn test_random_agent_picks_legal_moves() {
        let rules = RulesConfig::standard();
        let state = init_from_arrays(&rules, &[0, 3, 0, 0, 1, 0], &[1; 6], 0, 0, Side::South)
            .unwrap();
        let mut agent = RandomAgent::new(9);

        for _ in 0..20 {
            let pit = agent.choose_move(&state, &rules).unwrap();
            assert!(pit == 1 || pit == 4);
        }
    }

    #[test]
    fn test_random_agent_deterministic() {
        let rules = RulesConfig::standard();
        let state = init_standard(&rules, Side::South);
        let mut a = RandomAgent::new(42);
        let mut b = RandomAgent::new(42);

        for _ in 0..10 {
            assert_eq!(a.choose_move(&state, &rules), b.choose_move(&state, &rules));
        }
    }

    #[test]
    fn test_agents_report_no_move() {
        let rules = RulesConfig::standard();
        let state = init_from_arrays(&rules, &[0; 6], &[1; 6], 0, 0, Side::South).unwrap();

        assert_eq!(RandomAgent::new(1).choose_move(&state, &rules), None);
        assert_eq!(
            AlphaBetaAgent::new(rules, SearchConfig::new(2)).choose_move(&state, &rules),
            None
        );
    }

    #[test]
    fn test_alphabeta_agent_metadata() {
        let agent = AlphaBetaAgent::new(RulesConfig::standard(), SearchConfig::new(5));
        assert_eq!(agent.name(), "alphabeta");
        assert_eq!(agent.search_depth(), Some(5));
        assert_eq!(RandomAgent::new(0).search_depth(), None);
    }
}
