//! The 14-slot Kalah ring.
//!
//! ## Layout
//!
//! ```text
//! slot:  0      1  2  3  4  5  6   7       8  9  10 11 12 13
//!        storeA B1 B2 B3 B4 B5 B6  storeB  A6 A5 A4 A3 A2 A1
//! ```
//!
//! Sowing always walks the ring forward (`next_slot`). A pit and the pit
//! directly across the board sit at mirrored ring positions
//! (`opposite_slot`).

use serde::{Deserialize, Serialize};

use super::player::{Side, SideMap};

/// Number of slots in the ring (12 pits + 2 stores).
pub const SLOT_COUNT: usize = 14;

/// Pits in each player's row.
pub const PITS_PER_SIDE: usize = 6;

/// Ring slot of player A's store.
pub const STORE_A: usize = 0;

/// Ring slot of player B's store.
pub const STORE_B: usize = 7;

/// The slot after `slot` in sowing order.
#[must_use]
pub const fn next_slot(slot: usize) -> usize {
    (slot + 1) % SLOT_COUNT
}

/// The slot mirrored across the store axis.
///
/// Stores mirror onto themselves.
#[must_use]
pub const fn opposite_slot(slot: usize) -> usize {
    (SLOT_COUNT - slot) % SLOT_COUNT
}

/// Is this ring slot one of the two stores?
#[must_use]
pub const fn is_store(slot: usize) -> bool {
    slot == STORE_A || slot == STORE_B
}

/// Stone counts for every slot of the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    slots: [u32; SLOT_COUNT],
}

impl Board {
    /// A board with empty stores and `stones_per_pit` in every pit.
    #[must_use]
    pub fn new(stones_per_pit: u32) -> Self {
        let mut slots = [stones_per_pit; SLOT_COUNT];
        slots[STORE_A] = 0;
        slots[STORE_B] = 0;
        Self { slots }
    }

    /// Build a board from raw ring contents.
    #[must_use]
    pub const fn from_slots(slots: [u32; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// Raw ring contents.
    #[must_use]
    pub const fn slots(&self) -> &[u32; SLOT_COUNT] {
        &self.slots
    }

    /// Stones in a ring slot.
    #[must_use]
    pub const fn get(&self, slot: usize) -> u32 {
        self.slots[slot]
    }

    /// Stones in a side's store.
    #[must_use]
    pub const fn store(&self, side: Side) -> u32 {
        self.slots[side.store_slot()]
    }

    /// Both store totals.
    #[must_use]
    pub fn stores(&self) -> SideMap<u32> {
        SideMap::new(|side| self.store(side))
    }

    /// Stones in pit `index` of `side`, or `None` for a bad index.
    #[must_use]
    pub fn pit(&self, side: Side, index: usize) -> Option<u32> {
        side.pit_slot(index).map(|slot| self.slots[slot])
    }

    /// A side's six pits in natural (left-to-right) order.
    #[must_use]
    pub fn row(&self, side: Side) -> [u32; PITS_PER_SIDE] {
        std::array::from_fn(|i| match side.pit_slot(i) {
            Some(slot) => self.slots[slot],
            None => 0,
        })
    }

    /// Is every pit in a side's row empty?
    #[must_use]
    pub fn row_is_empty(&self, side: Side) -> bool {
        self.row(side).iter().all(|&n| n == 0)
    }

    /// Total stones on the board.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.slots.iter().sum()
    }

    /// Total stones, or `None` if the sum does not fit in a `u32`.
    #[must_use]
    pub fn checked_total(&self) -> Option<u32> {
        self.slots.iter().try_fold(0u32, |acc, &n| acc.checked_add(n))
    }

    /// Empty a slot, returning what it held.
    pub fn take(&mut self, slot: usize) -> u32 {
        std::mem::take(&mut self.slots[slot])
    }

    /// Add stones to a slot.
    pub fn add(&mut self, slot: usize, stones: u32) {
        self.slots[slot] += stones;
    }

    /// Move every pit's stones into its owner's store.
    ///
    /// Returns how many stones each store received.
    pub fn sweep(&mut self) -> SideMap<u32> {
        let mut swept = SideMap::with_value(0);
        for side in Side::ALL {
            for index in 0..PITS_PER_SIDE {
                if let Some(slot) = side.pit_slot(index) {
                    swept[side] += self.take(slot);
                }
            }
            self.add(side.store_slot(), swept[side]);
        }
        swept
    }
}

impl std::fmt::Display for Board {
    /// Two-row text picture: B's row on top (left to right), A's row below.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fmt_row = |side: Side| {
            self.row(side)
                .iter()
                .map(|n| format!("{n:>3}"))
                .collect::<String>()
        };
        writeln!(f, "     {}", fmt_row(Side::B))?;
        writeln!(f, "{:>3}{:>24}{:>6}", self.store(Side::A), "", self.store(Side::B))?;
        write!(f, "     {}", fmt_row(Side::A))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_slot_wraps() {
        assert_eq!(next_slot(0), 1);
        assert_eq!(next_slot(6), 7);
        assert_eq!(next_slot(13), 0);
    }

    #[test]
    fn test_opposite_slot() {
        assert_eq!(opposite_slot(3), 11);
        assert_eq!(opposite_slot(11), 3);
        assert_eq!(opposite_slot(1), 13);
        assert_eq!(opposite_slot(6), 8);
        assert_eq!(opposite_slot(STORE_A), STORE_A);
        assert_eq!(opposite_slot(STORE_B), STORE_B);

        // Pit i of B faces pit i of A.
        for i in 0..PITS_PER_SIDE {
            let b = Side::B.pit_slot(i).unwrap();
            let a = Side::A.pit_slot(i).unwrap();
            assert_eq!(opposite_slot(b), a);
        }
    }

    #[test]
    fn test_new_board() {
        let board = Board::new(3);
        assert_eq!(board.store(Side::A), 0);
        assert_eq!(board.store(Side::B), 0);
        assert_eq!(board.row(Side::A), [3; 6]);
        assert_eq!(board.row(Side::B), [3; 6]);
        assert_eq!(board.total_stones(), 36);
    }

    #[test]
    fn test_row_natural_order() {
        let board = Board::from_slots([0, 1, 2, 3, 4, 5, 6, 0, 16, 15, 14, 13, 12, 11]);
        assert_eq!(board.row(Side::B), [1, 2, 3, 4, 5, 6]);
        assert_eq!(board.row(Side::A), [11, 12, 13, 14, 15, 16]);
        assert_eq!(board.pit(Side::A, 0), Some(11));
        assert_eq!(board.pit(Side::A, 6), None);
    }

    #[test]
    fn test_sweep() {
        let mut board = Board::from_slots([10, 0, 0, 0, 0, 0, 0, 12, 1, 2, 0, 0, 0, 3]);
        assert!(board.row_is_empty(Side::B));
        assert!(!board.row_is_empty(Side::A));

        let swept = board.sweep();

        assert_eq!(swept[Side::A], 6);
        assert_eq!(swept[Side::B], 0);
        assert_eq!(board.store(Side::A), 16);
        assert_eq!(board.store(Side::B), 12);
        assert!(board.row_is_empty(Side::A));
        assert_eq!(board.total_stones(), 28);
    }

    #[test]
    fn test_display() {
        let text = Board::new(3).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].split_whitespace().count(), 6);
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), vec!["0", "0"]);
    }

    #[test]
    fn test_checked_total() {
        assert_eq!(Board::new(4).checked_total(), Some(48));

        let mut slots = [0; SLOT_COUNT];
        slots[STORE_A] = u32::MAX;
        slots[1] = 1;
        assert_eq!(Board::from_slots(slots).checked_total(), None);
    }

    #[test]
    fn test_take_and_add() {
        let mut board = Board::new(4);
        assert_eq!(board.take(3), 4);
        assert_eq!(board.get(3), 0);
        board.add(STORE_B, 4);
        assert_eq!(board.store(Side::B), 4);
        assert_eq!(board.total_stones(), 48);
    }
}
