//! Game session integration tests: agents, observers, summaries.

use std::cell::RefCell;
use std::rc::Rc;

use kalah_engine::core::{MoveOutcome, RulesConfig, Side, SideMap};
use kalah_engine::play::{
    Agent, AlphaBetaAgent, GameSession, GameSummary, MoveObserver, RandomAgent,
};
use kalah_engine::rules::GameOutcome;
use kalah_engine::search::SearchConfig;

#[derive(Default)]
struct Events {
    outcomes: Vec<MoveOutcome>,
    summaries: Vec<GameSummary>,
}

struct SharedObserver(Rc<RefCell<Events>>);

impl MoveObserver for SharedObserver {
    fn on_move(&mut self, outcome: &MoveOutcome) {
        self.0.borrow_mut().outcomes.push(outcome.clone());
    }

    fn on_game_over(&mut self, summary: &GameSummary) {
        self.0.borrow_mut().summaries.push(summary.clone());
    }
}

fn advisor_vs_random(rules: RulesConfig, depth: i32, seed: u64) -> SideMap<Box<dyn Agent>> {
    SideMap::from_values(
        Box::new(AlphaBetaAgent::new(rules, SearchConfig::new(depth))) as Box<dyn Agent>,
        Box::new(RandomAgent::new(seed)) as Box<dyn Agent>,
    )
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_advisor_beats_random() {
    let rules = RulesConfig::standard();

    let wins = (0..4)
        .filter(|&seed| {
            let mut session = GameSession::new(rules, Side::South);
            let summary = session.play_out(&mut advisor_vs_random(rules, 4, seed), 1000);
            summary.outcome == Some(GameOutcome::Winner(Side::South))
        })
        .count();

    assert!(wins >= 3, "depth-4 advisor won only {wins} of 4 games");
}

#[test]
fn test_observer_receives_every_ply() {
    let rules = RulesConfig::standard();
    let events = Rc::new(RefCell::new(Events::default()));

    let mut session = GameSession::new(rules, Side::North).with_mode("ai-vs-random");
    session.add_observer(Box::new(SharedObserver(Rc::clone(&events))));
    let summary = session.play_out(&mut advisor_vs_random(rules, 2, 17), 1000);

    let events = events.borrow();
    assert_eq!(events.outcomes.len(), summary.ply_count);
    assert_eq!(events.summaries.len(), 1);

    // Each reported ply matches the history, and only the last one ends the game.
    for (outcome, record) in events.outcomes.iter().zip(&summary.plies) {
        assert_eq!(outcome.mover, record.side);
        assert_eq!(outcome.pit, record.pit);
    }
    let last = events.outcomes.last().unwrap();
    assert!(last.ended_game());
    assert!(events.outcomes[..events.outcomes.len() - 1]
        .iter()
        .all(|o| !o.terminal));
}

#[test]
fn test_summary_payload() {
    let rules = RulesConfig::standard();
    let mut session = GameSession::new(rules, Side::South).with_mode("ai-vs-ai");

    let mut agents: SideMap<Box<dyn Agent>> = SideMap::from_values(
        Box::new(AlphaBetaAgent::new(rules, SearchConfig::new(3))),
        Box::new(AlphaBetaAgent::new(rules, SearchConfig::new(3))),
    );
    let summary = session.play_out(&mut agents, 1000);

    assert!(summary.is_finished());
    assert_eq!(summary.search_depth, Some(3));
    assert_eq!(summary.plies.len(), summary.ply_count);
    assert_eq!(summary.final_stores[Side::South] + summary.final_stores[Side::North], 48);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["mode"], "ai-vs-ai");
    assert_eq!(json["ply_count"], summary.ply_count);
    assert_eq!(json["plies"].as_array().unwrap().len(), summary.ply_count);
}

#[test]
fn test_explicit_depth_wins_over_agent_depth() {
    let rules = RulesConfig::standard();
    let mut session = GameSession::new(rules, Side::South).with_search_depth(9);

    let summary = session.play_out(&mut advisor_vs_random(rules, 1, 0), 2);
    assert_eq!(summary.search_depth, Some(9));
}

// =============================================================================
// Manual play
// =============================================================================

#[test]
fn test_human_moves_then_advisor() {
    let rules = RulesConfig::standard();
    let mut session = GameSession::new(rules, Side::South);

    // South takes the free move, then passes the turn.
    assert!(session.play(2).unwrap().extra_turn);
    assert!(!session.play(0).unwrap().extra_turn);
    assert_eq!(session.state().to_move(), Side::North);

    let mut advisor = AlphaBetaAgent::new(rules, SearchConfig::new(4));
    let pit = advisor.choose_move(session.state(), session.rules()).unwrap();
    assert!(session.legal_moves().contains(&pit));
    session.play(pit).unwrap();

    assert_eq!(session.ply_count(), 3);
    assert_eq!(session.history()[2].side, Side::North);
}

#[test]
fn test_forks_diverge() {
    let rules = RulesConfig::standard();
    let mut session = GameSession::new(rules, Side::South);
    session.play(1).unwrap();

    let mut a = session.fork();
    let mut b = session.fork();
    a.play(0).unwrap();
    b.play(5).unwrap();

    assert_ne!(a.state(), b.state());
    assert_eq!(session.ply_count(), 1);
    assert_eq!(a.history()[0], b.history()[0]);
}
