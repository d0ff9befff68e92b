//! Move representation: which pit is sown, and how the sowing ended.
//!
//! A move in Kalah is fully described by the pit it starts from. The engine
//! records each applied move together with where its last stone landed, so
//! hosts can replay or annotate a game.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// A pit addressed the way players see it: a side and a 0-based index in
/// natural left-to-right order.
///
/// ```
/// use kalah_engine::core::{Pit, Side};
///
/// let pit = Pit::new(Side::A, 2);
/// assert_eq!(pit.slot(), Some(11));
/// assert_eq!(Pit::new(Side::B, 9).slot(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pit {
    pub side: Side,
    pub index: usize,
}

impl Pit {
    /// Create a pit reference. The index is not checked here.
    #[must_use]
    pub const fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }

    /// Ring slot for this pit, or `None` if the index is out of range.
    #[must_use]
    pub const fn slot(self) -> Option<usize> {
        self.side.pit_slot(self.index)
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.side, self.index + 1)
    }
}

/// Where the last stone of a sowing ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landing {
    /// In the mover's own store: the mover sows again.
    OwnStore,
    /// In an empty pit: that stone and everything across from it went to
    /// the mover's store.
    Capture {
        /// Ring slot where the last stone arrived.
        slot: usize,
        /// Ring slot that was emptied across the board.
        opposite: usize,
        /// Stones added to the mover's store (the landing stone included).
        captured: u32,
    },
    /// In a non-empty pit.
    Pit { slot: usize },
}

impl Landing {
    /// Does this landing grant another move?
    #[must_use]
    pub const fn is_extra_move(self) -> bool {
        matches!(self, Landing::OwnStore)
    }
}

/// An applied move, as kept in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The pit that was sown.
    pub pit: Pit,

    /// Stones picked up from the pit.
    pub sown: u32,

    /// Where the last stone landed.
    pub landing: Landing,

    /// Turn number when the move was made.
    pub turn: u32,

    /// Sequence number within the turn (extra moves count up).
    pub sequence: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pit_slot() {
        assert_eq!(Pit::new(Side::B, 0).slot(), Some(1));
        assert_eq!(Pit::new(Side::B, 5).slot(), Some(6));
        assert_eq!(Pit::new(Side::A, 0).slot(), Some(13));
        assert_eq!(Pit::new(Side::A, 5).slot(), Some(8));
        assert_eq!(Pit::new(Side::A, 6).slot(), None);
    }

    #[test]
    fn test_pit_display() {
        assert_eq!(Pit::new(Side::A, 0).to_string(), "A1");
        assert_eq!(Pit::new(Side::B, 5).to_string(), "B6");
    }

    #[test]
    fn test_landing_extra_move() {
        assert!(Landing::OwnStore.is_extra_move());
        assert!(!Landing::Pit { slot: 3 }.is_extra_move());
        assert!(!Landing::Capture { slot: 3, opposite: 11, captured: 4 }.is_extra_move());
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord {
            pit: Pit::new(Side::B, 2),
            sown: 4,
            landing: Landing::Capture { slot: 3, opposite: 11, captured: 5 },
            turn: 2,
            sequence: 1,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
