//! Alpha-beta search integration tests.

use kalah_engine::core::{GameState, RulesConfig, Side};
use kalah_engine::rules::{apply_move, init_from_arrays, init_standard, is_terminal, legal_moves};
use kalah_engine::search::{
    best_move, rank_moves, AlphaBeta, EvalWeights, Evaluator, LeafContext, PitOrder,
    SearchConfig, NO_MOVE_SCORE,
};

// =============================================================================
// Recommendations
// =============================================================================

#[test]
fn test_depth_one_takes_only_extra_turn() {
    let rules = RulesConfig::standard();
    // Pit 3 ends in the store; pit 0 lands opposite an empty pit.
    let state = init_from_arrays(&rules, &[2, 0, 0, 3, 0, 0], &[1, 1, 1, 0, 1, 1], 20, 18, Side::South)
        .unwrap();

    let result = best_move(&state, &rules, 1);

    assert_eq!(result.best_move, Some(3));
    // 10 for the store seed, 1 for the extra turn; pit 5 is no longer empty.
    assert_eq!(result.score, 11);

    let ranked = rank_moves(&state, &rules, 1);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[1].pit, 0);
    // Only the empty near-store pit bonus.
    assert_eq!(ranked[1].score, 5);
}

#[test]
fn test_search_is_deterministic() {
    let rules = RulesConfig::standard();
    let state = init_standard(&rules, Side::North);

    let first = best_move(&state, &rules, 5);
    for _ in 0..3 {
        assert_eq!(best_move(&state, &rules, 5), first);
    }
}

#[test]
fn test_no_move_is_not_an_error() {
    let rules = RulesConfig::standard();
    let state = init_from_arrays(&rules, &[3; 6], &[0; 6], 12, 18, Side::North).unwrap();

    let result = best_move(&state, &rules, 6);
    assert!(result.is_no_move());
    assert_eq!(result.score, NO_MOVE_SCORE);
}

#[test]
fn test_recommendation_is_legal() {
    let rules = RulesConfig::standard();
    let mut state = init_standard(&rules, Side::South);

    // Let the advisor play both sides for a while.
    for _ in 0..30 {
        if is_terminal(&state, &rules) {
            break;
        }
        let pit = best_move(&state, &rules, 3).best_move.unwrap();
        assert!(legal_moves(&state, &rules).contains(&pit));
        state = apply_move(&state, &rules, pit).unwrap().state;
    }
}

// =============================================================================
// Extra-turn chains
// =============================================================================

#[test]
fn test_extra_turn_chain_stays_maximizing() {
    let rules = RulesConfig::standard();
    // Pit 5 then pit 4 both end in the store. Playing pit 4 first leaves
    // pit 5 to sow into North and empty South, which hands North the sweep.
    let state = init_from_arrays(&rules, &[0, 0, 0, 0, 2, 1], &[2, 2, 2, 2, 2, 2], 20, 17, Side::South)
        .unwrap();

    let ranked = rank_moves(&state, &rules, 2);

    assert_eq!(ranked[0].pit, 5);
    // Two store seeds (20) and two extra turns (2).
    assert_eq!(ranked[0].score, 22);
    // +2 for South, +13 swept to North, one extra turn, pit 5 empty.
    assert_eq!(ranked[1].pit, 4);
    assert_eq!(ranked[1].score, -110 + 1 + 5);
}

// =============================================================================
// Custom policies
// =============================================================================

struct StoreOnly;

impl Evaluator for StoreOnly {
    fn evaluate(&self, state: &GameState, _rules: &RulesConfig, ctx: &LeafContext) -> i64 {
        i64::from(state.store(ctx.root)) - i64::from(ctx.root_stores[ctx.root])
    }
}

#[test]
fn test_custom_evaluator() {
    let rules = RulesConfig::standard();
    let state = init_standard(&rules, Side::South);

    let mut search = AlphaBeta::new(rules, SearchConfig::new(1)).with_evaluator(StoreOnly);
    let ranked = search.rank_moves(&state, 1);

    assert_eq!(ranked[0].score, 1);
    assert!(ranked.iter().filter(|m| m.score == 0).all(|m| m.pit < 2));
}

#[test]
fn test_weights_from_config() {
    let rules = RulesConfig::standard();
    let state = init_standard(&rules, Side::South);

    let config = SearchConfig::new(1).with_eval_weights(EvalWeights {
        store_swing: 1,
        extra_turn: 100,
        empty_near_store: 0,
    });
    let result = AlphaBeta::new(rules, config).best_move(&state);

    assert_eq!(result.best_move, Some(2));
    assert_eq!(result.score, 101);
}

#[test]
fn test_pruning_saves_nodes() {
    let rules = RulesConfig::standard();
    let state = init_standard(&rules, Side::South);

    let mut ordered = AlphaBeta::new(rules, SearchConfig::new(6));
    let mut plain = AlphaBeta::new(rules, SearchConfig::new(6)).with_orderer(PitOrder);

    let a = ordered.best_move(&state);
    let b = plain.best_move(&state);

    assert_eq!(a.score, b.score);
    assert!(a.stats.cutoffs > 0);
    assert!(b.stats.cutoffs > 0);
}
