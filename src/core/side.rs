//! Board sides and per-side data storage.
//!
//! ## Side
//!
//! The two players of a Kalah board. Side 0 (`South`) and side 1 (`North`)
//! each own a row of pits and a store.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, backed by an array so it is
//! `Copy` whenever `T` is.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Side 0.
    South,
    /// Side 1.
    North,
}

impl Side {
    /// Both sides, in index order.
    pub const ALL: [Side; 2] = [Side::South, Side::North];

    /// Side for a raw index. Returns `None` for anything other than 0 or 1.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Side::South),
            1 => Some(Side::North),
            _ => None,
        }
    }

    /// Raw index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::South => 0,
            Side::North => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::South => Side::North,
            Side::North => Side::South,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Side {}", self.index())
    }
}

/// Per-side data with O(1) access.
///
/// ```
/// use kalah_engine::core::{Side, SideMap};
///
/// let mut stores = SideMap::with_value(0u32);
/// stores[Side::North] += 3;
///
/// assert_eq!(stores[Side::South], 0);
/// assert_eq!(stores[Side::North], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create from explicit values for side 0 and side 1.
    pub const fn from_values(south: T, north: T) -> Self {
        Self {
            data: [south, north],
        }
    }

    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::South), factory(Side::North)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Map each entry to a new value.
    pub fn map<U>(&self, f: impl Fn(Side, &T) -> U) -> SideMap<U> {
        SideMap::new(|side| f(side, &self.data[side.index()]))
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
