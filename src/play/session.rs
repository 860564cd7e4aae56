//! Game sessions: a running game with history and observers.
//!
//! A session owns the rules, the current position, and the ply history.
//! Every applied move is reported to the registered observers, and the final
//! summary is delivered once when the game reaches a terminal position.

use im::Vector;
use tracing::{debug, warn};

use crate::core::{GameState, MoveOutcome, RulesConfig, Side, SideMap};
use crate::error::MoveError;
use crate::rules::{apply_move, init_standard, is_terminal, legal_moves, outcome, MoveList};

use super::agent::Agent;
use super::summary::{GameSummary, PlyRecord};

/// Receives session events.
///
/// Both hooks default to no-ops, so an observer only implements what it needs.
pub trait MoveObserver {
    /// Called after every applied move.
    fn on_move(&mut self, _outcome: &MoveOutcome) {}

    /// Called once, after the move that ends the game.
    fn on_game_over(&mut self, _summary: &GameSummary) {}
}

/// A game in progress.
pub struct GameSession {
    rules: RulesConfig,
    state: GameState,
    history: Vector<PlyRecord>,
    observers: Vec<Box<dyn MoveObserver>>,
    mode: String,
    search_depth: Option<i32>,
    finished: bool,
}

impl GameSession {
    /// Session from the standard opening.
    pub fn new(rules: RulesConfig, start: Side) -> Self {
        let state = init_standard(&rules, start);
        Self::from_state(rules, state)
    }

    /// Session from an arbitrary position.
    ///
    /// A position that is already terminal counts as finished, so no later
    /// move reports game over.
    pub fn from_state(rules: RulesConfig, state: GameState) -> Self {
        let finished = is_terminal(&state, &rules);
        Self {
            rules,
            state,
            history: Vector::new(),
            observers: Vec::new(),
            mode: String::new(),
            search_depth: None,
            finished,
        }
    }

    /// Set the mode tag reported in the summary.
    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set the advisor depth reported in the summary.
    #[must_use]
    pub fn with_search_depth(mut self, depth: i32) -> Self {
        self.search_depth = Some(depth);
        self
    }

    /// Register an observer.
    pub fn add_observer(&mut self, observer: Box<dyn MoveObserver>) {
        self.observers.push(observer);
    }

    /// Apply a move for the side to move.
    ///
    /// On error nothing changes and no observer is called.
    pub fn play(&mut self, pit: usize) -> Result<MoveOutcome, MoveError> {
        let outcome = apply_move(&self.state, &self.rules, pit)?;

        let record = PlyRecord::from_outcome(&outcome, self.history.len());
        self.history.push_back(record);
        self.state = outcome.state.clone();

        debug!(
            side = %outcome.mover,
            pit,
            extra_turn = outcome.extra_turn,
            captured = outcome.captured_seeds(),
            terminal = outcome.terminal,
            "ply applied"
        );

        for observer in &mut self.observers {
            observer.on_move(&outcome);
        }

        if outcome.terminal && !self.finished {
            self.finished = true;
            let summary = self.summary();
            debug!(plies = summary.ply_count, outcome = ?summary.outcome, "game over");
            for observer in &mut self.observers {
                observer.on_game_over(&summary);
            }
        }

        Ok(outcome)
    }

    /// Let `agents` play until the game ends or `max_plies` more plies are made.
    ///
    /// An agent that returns no move or an illegal move stops the session.
    pub fn play_out(&mut self, agents: &mut SideMap<Box<dyn Agent>>, max_plies: usize) -> GameSummary {
        if self.search_depth.is_none() {
            self.search_depth = Side::ALL.iter().find_map(|&side| agents[side].search_depth());
        }

        for _ in 0..max_plies {
            if self.is_over() {
                break;
            }

            let side = self.state.to_move();
            let Some(pit) = agents[side].choose_move(&self.state, &self.rules) else {
                debug!(%side, "agent has no move");
                break;
            };

            if let Err(err) = self.play(pit) {
                warn!(%side, agent = agents[side].name(), %err, "agent chose an illegal move");
                break;
            }
        }

        self.summary()
    }

    /// Summary of the session so far.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            mode: self.mode.clone(),
            search_depth: self.search_depth,
            plies: self.history.iter().copied().collect(),
            ply_count: self.history.len(),
            final_stores: self.state.stores(),
            outcome: outcome(&self.state, &self.rules),
        }
    }

    /// Copy of this session without its observers.
    ///
    /// History is shared structurally, so forking is cheap.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            rules: self.rules,
            state: self.state.clone(),
            history: self.history.clone(),
            observers: Vec::new(),
            mode: self.mode.clone(),
            search_depth: self.search_depth,
            finished: self.finished,
        }
    }

    /// True once the position is terminal.
    #[must_use]
    pub fn is_over(&self) -> bool {
        is_terminal(&self.state, &self.rules)
    }

    /// Legal moves in the current position.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(&self.state, &self.rules)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Plies applied so far.
    #[must_use]
    pub fn history(&self) -> &Vector<PlyRecord> {
        &self.history
    }

    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::core::RulesOptions;
    use crate::play::agent::RandomAgent;
    use crate::rules::init_from_arrays;

    #[derive(Default)]
    struct Log {
        moves: Vec<(Side, usize)>,
        summaries: Vec<GameSummary>,
    }

    struct Recorder(Arc<Mutex<Log>>);

    impl MoveObserver for Recorder {
        fn on_move(&mut self, outcome: &MoveOutcome) {
            self.0.lock().unwrap().moves.push((outcome.mover, outcome.pit));
        }

        fn on_game_over(&mut self, summary: &GameSummary) {
            self.0.lock().unwrap().summaries.push(summary.clone());
        }
    }

    fn random_agents(seed: u64) -> SideMap<Box<dyn Agent>> {
        SideMap::from_values(
            Box::new(RandomAgent::new(seed)) as Box<dyn Agent>,
            Box::new(RandomAgent::new(seed + 1)) as Box<dyn Agent>,
        )
    }

    #[test]
    fn test_play_records_history() {
        let mut session = GameSession::new(RulesConfig::standard(), Side::South);

        let first = session.play(2).unwrap();
        assert!(first.extra_turn);
        session.play(5).unwrap();

        assert_eq!(session.ply_count(), 2);
        assert_eq!(session.history()[0].pit, 2);
        assert_eq!(session.history()[1].side, Side::South);
        assert_eq!(session.state().to_move(), Side::North);
    }

    #[test]
    fn test_illegal_play_changes_nothing() {
        let log = Arc::new(Mutex::new(Log::default()));
        let mut session = GameSession::new(RulesConfig::standard(), Side::South);
        session.add_observer(Box::new(Recorder(Arc::clone(&log))));

        assert!(session.play(6).is_err());
        session.play(0).unwrap();
        assert!(matches!(session.play(0), Ok(_)));
        assert_eq!(session.state().to_move(), Side::South);
        assert!(matches!(session.play(0), Err(MoveError::EmptyPit { pit: 0 })));

        assert_eq!(session.ply_count(), 2);
        assert_eq!(log.lock().unwrap().moves.len(), 2);
    }

    #[test]
    fn test_observers_see_whole_game() {
        let log = Arc::new(Mutex::new(Log::default()));
        let mut session = GameSession::new(RulesConfig::standard(), Side::South).with_mode("ai-vs-ai");
        session.add_observer(Box::new(Recorder(Arc::clone(&log))));

        let summary = session.play_out(&mut random_agents(7), 10_000);

        let log = log.lock().unwrap();
        assert!(summary.is_finished());
        assert_eq!(log.moves.len(), summary.ply_count);
        assert_eq!(log.summaries.len(), 1);
        assert_eq!(log.summaries[0], summary);
        assert_eq!(summary.mode, "ai-vs-ai");
        assert_eq!(summary.final_stores[Side::South] + summary.final_stores[Side::North], 48);
    }

    #[test]
    fn test_play_out_respects_ply_limit() {
        let mut session = GameSession::new(RulesConfig::standard(), Side::South);

        let summary = session.play_out(&mut random_agents(3), 4);

        assert_eq!(summary.ply_count, 4);
        assert!(!summary.is_finished());
    }

    #[test]
    fn test_no_game_over_from_finished_position() {
        let rules = RulesOptions::new().with_sweep(false).build().unwrap();
        // South is empty; with sweep off North may keep moving.
        let state = init_from_arrays(&rules, &[0; 6], &[1, 0, 0, 0, 0, 2], 20, 25, Side::North)
            .unwrap();
        let log = Arc::new(Mutex::new(Log::default()));
        let mut session = GameSession::from_state(rules, state);
        session.add_observer(Box::new(Recorder(Arc::clone(&log))));

        let outcome = session.play(0).unwrap();

        assert!(outcome.terminal);
        assert!(outcome.already_terminal);
        let log = log.lock().unwrap();
        assert_eq!(log.moves.len(), 1);
        assert!(log.summaries.is_empty());
    }

    #[test]
    fn test_fork_is_independent() {
        let mut session = GameSession::new(RulesConfig::standard(), Side::South);
        session.play(0).unwrap();

        let mut fork = session.fork();
        fork.play(3).unwrap();

        assert_eq!(session.ply_count(), 1);
        assert_eq!(fork.ply_count(), 2);
        assert_eq!(fork.history()[0], session.history()[0]);
    }
}
