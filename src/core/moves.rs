//! Move metadata: sow paths, captures, and move outcomes.
//!
//! A successful `rules::apply_move` returns a `MoveOutcome` carrying the new
//! state plus everything a presentation layer needs to animate the move:
//! - `SowPath`: one `Landing` per seed, in sowing order
//! - `Capture`: which pits were emptied into the mover's store
//! - flags for extra turn, sweep, and game end

use serde::Serialize;
use smallvec::SmallVec;

use super::side::Side;
use super::state::GameState;

/// Where a single sown seed landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Landing {
    /// A pit on `side`, at that side's own `index`.
    Pit { side: Side, index: usize },
    /// `side`'s store.
    Store { side: Side },
}

impl Landing {
    /// True if this is `side`'s store.
    #[must_use]
    pub fn is_store_of(self, side: Side) -> bool {
        matches!(self, Landing::Store { side: s } if s == side)
    }

    /// The pit index if this landing is a pit on `side`.
    #[must_use]
    pub fn own_pit(self, side: Side) -> Option<usize> {
        match self {
            Landing::Pit { side: s, index } if s == side => Some(index),
            _ => None,
        }
    }
}

/// Ordered drop locations of one move, one entry per seed.
///
/// SmallVec keeps a standard-board move (rarely more than a lap) inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SowPath {
    landings: SmallVec<[Landing; 16]>,
}

impl SowPath {
    /// Empty path (a zero-seed move).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            landings: SmallVec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, landing: Landing) {
        self.landings.push(landing);
    }

    /// Number of seeds sown.
    #[must_use]
    pub fn len(&self) -> usize {
        self.landings.len()
    }

    /// True when no seed moved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landings.is_empty()
    }

    /// Where the last seed landed.
    #[must_use]
    pub fn last(&self) -> Option<Landing> {
        self.landings.last().copied()
    }

    /// Iterate over landings in sowing order.
    pub fn iter(&self) -> impl Iterator<Item = Landing> + '_ {
        self.landings.iter().copied()
    }

    /// Landings as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Landing] {
        &self.landings
    }
}

impl<'a> IntoIterator for &'a SowPath {
    type Item = &'a Landing;
    type IntoIter = std::slice::Iter<'a, Landing>;

    fn into_iter(self) -> Self::IntoIter {
        self.landings.iter()
    }
}

/// A capture that fired during a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Capture {
    /// Mover's pit where the last seed landed.
    pub pit: usize,
    /// Opponent's mirror pit that was emptied.
    pub opposite_pit: usize,
    /// Seeds added to the mover's store (opposite seeds plus the landing seed).
    pub seeds: u32,
}

/// Result of a successful move.
///
/// A failed move is reported as `Err(MoveError)` instead, so holding a
/// `MoveOutcome` means the move was legal and applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// State after sowing, capture, and any sweep.
    pub state: GameState,
    /// Seed-by-seed drop locations.
    pub path: SowPath,
    /// Side that moved.
    pub mover: Side,
    /// Pit the mover sowed from.
    pub pit: usize,
    /// The mover keeps the turn.
    pub extra_turn: bool,
    /// Capture descriptor, if one fired.
    pub capture: Option<Capture>,
    /// The end-of-game sweep moved seeds into the stores.
    pub swept: bool,
    /// The resulting position is terminal (checked before and after sweep).
    pub terminal: bool,
    /// The position the move was played from was already terminal.
    ///
    /// Distinguishes "this move ended the game" from "the game was already
    /// over" when moves from terminal positions are legal.
    pub already_terminal: bool,
}

impl MoveOutcome {
    /// Seeds captured by this move (0 if none).
    #[must_use]
    pub fn captured_seeds(&self) -> u32 {
        self.capture.map_or(0, |c| c.seeds)
    }

    /// True when this move is the one that ended the game.
    #[must_use]
    pub fn ended_game(&self) -> bool {
        self.terminal && !self.already_terminal
    }
}
