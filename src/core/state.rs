//! Game state: pits, stores, and side to move.
//!
//! `GameState` is a value object. The rules engine never mutates a state it
//! was handed; every transition builds a new instance. Pits are held in a
//! `SmallVec` so boards of up to eight pits per side live entirely inline and
//! cloning a state during search never touches the heap.

use serde::Serialize;
use smallvec::SmallVec;

use super::side::{Side, SideMap};

/// Seed counts for one row of pits, indexed from the side's own first pit.
pub type Pits = SmallVec<[u32; 8]>;

/// Immutable board snapshot.
///
/// Only the rules engine constructs states, so both rows always have the
/// configured length; pass a state only to the rules it was created
/// under. States serialize for logging and telemetry but are not
/// deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    pits: SideMap<Pits>,
    stores: SideMap<u32>,
    to_move: Side,
}

impl GameState {
    /// Assemble a state from parts.
    ///
    /// Row lengths are checked by `rules::init_from_arrays`; inside the crate
    /// callers guarantee both rows have the configured length.
    pub(crate) fn from_parts(pits: SideMap<Pits>, stores: SideMap<u32>, to_move: Side) -> Self {
        debug_assert_eq!(pits[Side::South].len(), pits[Side::North].len());
        Self {
            pits,
            stores,
            to_move,
        }
    }

    /// Side whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Number of pits on each side.
    #[must_use]
    pub fn pits_per_side(&self) -> usize {
        self.pits[Side::South].len()
    }

    /// A side's pits, from its own index 0.
    #[must_use]
    pub fn pits(&self, side: Side) -> &[u32] {
        &self.pits[side]
    }

    /// Seeds in one pit. Panics if `index` is out of range.
    #[must_use]
    pub fn pit(&self, side: Side, index: usize) -> u32 {
        self.pits[side][index]
    }

    /// Seeds in a side's store.
    #[must_use]
    pub fn store(&self, side: Side) -> u32 {
        self.stores[side]
    }

    /// Both stores.
    #[must_use]
    pub fn stores(&self) -> SideMap<u32> {
        self.stores
    }

    /// Seeds still in a side's pits.
    #[must_use]
    pub fn side_seeds(&self, side: Side) -> u32 {
        self.pits[side].iter().sum()
    }

    /// True when every pit on `side` is empty.
    #[must_use]
    pub fn is_side_empty(&self, side: Side) -> bool {
        self.pits[side].iter().all(|&s| s == 0)
    }

    /// Seeds across all pits and both stores.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        Side::ALL
            .iter()
            .map(|&side| self.side_seeds(side) + self.stores[side])
            .sum()
    }

    /// Store difference from `side`'s point of view.
    #[must_use]
    pub fn score_margin(&self, side: Side) -> i64 {
        i64::from(self.stores[side]) - i64::from(self.stores[side.opponent()])
    }

    // === Crate-internal construction ===
    //
    // Used by the rules engine on freshly cloned states only.

    pub(crate) fn pits_mut(&mut self, side: Side) -> &mut Pits {
        &mut self.pits[side]
    }

    pub(crate) fn store_mut(&mut self, side: Side) -> &mut u32 {
        &mut self.stores[side]
    }

    pub(crate) fn set_to_move(&mut self, side: Side) {
        self.to_move = side;
    }
}
