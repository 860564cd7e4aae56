//! Kalah rules: state construction, legal moves, sowing, capture, sweep.
//!
//! Every function here is pure. States go in by reference and new states come
//! out; the inputs are never modified.
//!
//! ## Sowing geometry
//!
//! Relative to the mover the board is a cycle of `2n + 1` positions:
//! - `0..n`: the mover's pits, in order
//! - `n`: the mover's store
//! - `n+1..=2n`: the opponent's pits, in order
//!
//! The opponent's store is not on the cycle, so it is never sown into.

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::{
    Capture, CaptureRule, GameState, Landing, MoveOutcome, Pits, RulesConfig, RulesOptions, Side,
    SideMap, SowPath,
};
use crate::error::{ConfigError, MoveError};

/// Legal pit indices, in ascending order.
pub type MoveList = SmallVec<[usize; 8]>;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GameOutcome {
    /// One side has the larger store.
    Winner(Side),
    /// Stores are equal.
    Draw,
}

impl GameOutcome {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameOutcome::Winner(s) if *s == side)
    }
}

/// Validate options into an immutable configuration.
pub fn create_rules(options: RulesOptions) -> Result<RulesConfig, ConfigError> {
    RulesConfig::new(options)
}

/// Opening position: every pit holds `seeds_per_pit`, stores are empty.
#[must_use]
pub fn init_standard(rules: &RulesConfig, start: Side) -> GameState {
    let row: Pits = SmallVec::from_elem(rules.seeds_per_pit(), rules.pits_per_side());
    GameState::from_parts(SideMap::with_value(row), SideMap::with_value(0), start)
}

/// Arbitrary position from explicit rows and stores.
///
/// Fails when either row's length differs from `pits_per_side`, or when the
/// seeds across both rows and stores do not fit in `u32`. The seed total is
/// otherwise taken as given; it need not match a standard opening.
pub fn init_from_arrays(
    rules: &RulesConfig,
    pits0: &[u32],
    pits1: &[u32],
    store0: u32,
    store1: u32,
    start: Side,
) -> Result<GameState, ConfigError> {
    let expected = rules.pits_per_side();
    for (side, row) in [(Side::South, pits0), (Side::North, pits1)] {
        if row.len() != expected {
            return Err(ConfigError::PitCountMismatch {
                side,
                expected,
                actual: row.len(),
            });
        }
    }

    // Moves only redistribute seeds, so a bounded total keeps every later
    // pit and store increment in range.
    let total: u64 = pits0
        .iter()
        .chain(pits1)
        .chain([&store0, &store1])
        .map(|&seeds| u64::from(seeds))
        .sum();
    if total > u64::from(u32::MAX) {
        return Err(ConfigError::SeedTotalOverflow { total });
    }

    Ok(GameState::from_parts(
        SideMap::from_values(SmallVec::from_slice(pits0), SmallVec::from_slice(pits1)),
        SideMap::from_values(store0, store1),
        start,
    ))
}

/// True when either side's pits are all empty.
#[must_use]
pub fn is_terminal(state: &GameState, _rules: &RulesConfig) -> bool {
    state.is_side_empty(Side::South) || state.is_side_empty(Side::North)
}

/// Move every side's remaining pit seeds into its own store.
///
/// Only applies when the state is terminal and `sweep_on_game_end` is set;
/// otherwise the state is returned unchanged.
#[must_use]
pub fn apply_sweep(state: &GameState, rules: &RulesConfig) -> GameState {
    let mut next = state.clone();
    if is_terminal(state, rules) && rules.sweep_on_game_end() {
        sweep_in_place(&mut next);
    }
    next
}

/// Pits the side to move may sow from.
///
/// With `allow_move_from_empty` every index is legal.
#[must_use]
pub fn legal_moves(state: &GameState, rules: &RulesConfig) -> MoveList {
    let pits = state.pits(state.to_move());
    if rules.allow_move_from_empty() {
        (0..rules.pits_per_side()).collect()
    } else {
        pits.iter()
            .enumerate()
            .filter(|&(_, &seeds)| seeds > 0)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Drop locations for sowing `seeds` from `pit` on `mover`'s side.
#[must_use]
pub fn sow_path(rules: &RulesConfig, mover: Side, pit: usize, seeds: u32) -> SowPath {
    let n = rules.pits_per_side();
    let cycle = rules.cycle_len();
    // Laps beyond the first reuse positions; don't reserve for them up front.
    let mut path = SowPath::with_capacity((seeds as usize).min(cycle));
    let mut position = (pit + 1) % cycle;

    for _ in 0..seeds {
        path.push(landing_at(position, mover, n));
        position = (position + 1) % cycle;
    }

    path
}

/// Apply a move for the side to move.
///
/// Sows the chosen pit, then resolves capture, extra turn, and the end-of-game
/// sweep. An illegal move is returned as `Err`; the input state is never
/// modified.
pub fn apply_move(
    state: &GameState,
    rules: &RulesConfig,
    pit: usize,
) -> Result<MoveOutcome, MoveError> {
    let n = rules.pits_per_side();
    if pit >= n {
        return Err(MoveError::OutOfRange {
            pit,
            pits_per_side: n,
        });
    }

    let mover = state.to_move();
    let seeds = state.pit(mover, pit);
    if seeds == 0 && !rules.allow_move_from_empty() {
        return Err(MoveError::EmptyPit { pit });
    }

    let already_terminal = is_terminal(state, rules);
    let path = sow_path(rules, mover, pit, seeds);

    let mut next = state.clone();
    next.pits_mut(mover)[pit] = 0;
    for landing in &path {
        match *landing {
            Landing::Pit { side, index } => next.pits_mut(side)[index] += 1,
            Landing::Store { side } => *next.store_mut(side) += 1,
        }
    }

    let last = path.last();

    let capture = match (rules.capture_rule(), last.and_then(|l| l.own_pit(mover))) {
        (CaptureRule::Kalah, Some(index)) => try_capture(state, &mut next, mover, index),
        _ => None,
    };

    let extra_turn =
        rules.extra_turn_on_store() && last.is_some_and(|l| l.is_store_of(mover));
    next.set_to_move(if extra_turn { mover } else { mover.opponent() });

    let terminal_before_sweep = is_terminal(&next, rules);
    let mut swept = false;
    if terminal_before_sweep && rules.sweep_on_game_end() {
        swept = sweep_in_place(&mut next);
    }
    let terminal = terminal_before_sweep || is_terminal(&next, rules);

    Ok(MoveOutcome {
        state: next,
        path,
        mover,
        pit,
        extra_turn,
        capture,
        swept,
        terminal,
        already_terminal,
    })
}

/// Winner of a terminal position by store comparison.
///
/// Returns `None` while the game is still running. Stores are compared as
/// they stand, so call this on the swept state when sweeping is enabled.
#[must_use]
pub fn outcome(state: &GameState, rules: &RulesConfig) -> Option<GameOutcome> {
    if !is_terminal(state, rules) {
        return None;
    }

    Some(match state.score_margin(Side::South) {
        m if m > 0 => GameOutcome::Winner(Side::South),
        m if m < 0 => GameOutcome::Winner(Side::North),
        _ => GameOutcome::Draw,
    })
}

/// Position `position` on the mover-relative cycle.
fn landing_at(position: usize, mover: Side, n: usize) -> Landing {
    if position < n {
        Landing::Pit {
            side: mover,
            index: position,
        }
    } else if position == n {
        Landing::Store { side: mover }
    } else {
        Landing::Pit {
            side: mover.opponent(),
            index: position - n - 1,
        }
    }
}

/// Kalah capture on `next` after the last seed landed in own pit `index`.
///
/// Fires iff the pit was empty before the move, now holds exactly the landing
/// seed, and the mirror pit is non-empty.
fn try_capture(
    before: &GameState,
    next: &mut GameState,
    mover: Side,
    index: usize,
) -> Option<Capture> {
    let opponent = mover.opponent();
    let opposite_pit = next.pits_per_side() - 1 - index;
    let opposite_seeds = next.pit(opponent, opposite_pit);

    if before.pit(mover, index) != 0 || next.pit(mover, index) != 1 || opposite_seeds == 0 {
        return None;
    }

    let seeds = opposite_seeds + 1;
    next.pits_mut(mover)[index] = 0;
    next.pits_mut(opponent)[opposite_pit] = 0;
    *next.store_mut(mover) += seeds;

    Some(Capture {
        pit: index,
        opposite_pit,
        seeds,
    })
}

/// Empty every pit into its owner's store. Returns true if any seed moved.
fn sweep_in_place(state: &mut GameState) -> bool {
    let mut moved = false;
    for side in Side::ALL {
        let remaining = state.side_seeds(side);
        if remaining > 0 {
            moved = true;
            state.pits_mut(side).iter_mut().for_each(|s| *s = 0);
            *state.store_mut(side) += remaining;
        }
    }
    moved
}
