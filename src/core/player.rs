//! Player sides and per-side data storage.
//!
//! ## Side
//!
//! The two players, `A` and `B`. Each owns one store and one row of six pits.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, used wherever a value exists
//! once per player (store totals, final scores).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::board::{PITS_PER_SIDE, STORE_A, STORE_B};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, A first.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Dense index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    /// Ring slot of this side's store.
    #[must_use]
    pub const fn store_slot(self) -> usize {
        match self {
            Side::A => STORE_A,
            Side::B => STORE_B,
        }
    }

    /// Ring slot of this side's pit `index` (0-based, natural order).
    ///
    /// B's pits run forward from slot 1; A's pits run backward from slot 13.
    /// Returns `None` when `index` is not a valid pit index.
    ///
    /// ```
    /// use kalah_engine::core::Side;
    ///
    /// assert_eq!(Side::B.pit_slot(0), Some(1));
    /// assert_eq!(Side::A.pit_slot(0), Some(13));
    /// assert_eq!(Side::A.pit_slot(5), Some(8));
    /// assert_eq!(Side::A.pit_slot(6), None);
    /// ```
    #[must_use]
    pub const fn pit_slot(self, index: usize) -> Option<usize> {
        if index >= PITS_PER_SIDE {
            return None;
        }
        Some(match self {
            Side::A => 13 - index,
            Side::B => index + 1,
        })
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ```
/// use kalah_engine::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::with_value(0);
/// scores[Side::B] += 4;
/// assert_eq!(scores[Side::A], 0);
/// assert_eq!(scores[Side::B], 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::A), factory(Side::B)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, A first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
