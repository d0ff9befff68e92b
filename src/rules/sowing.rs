//! Sowing: the one place where ring arithmetic, the store-skip rule and the
//! capture rule meet.
//!
//! `sow` assumes its caller already checked that the move is legal. It only
//! rearranges stones, so the board total is unchanged afterwards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{is_store, next_slot, opposite_slot, Board, Landing, Side};

/// Result of distributing one pit's stones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SowOutcome {
    /// Slots that received a stone, in order. The opponent's store never
    /// appears. A capture's landing slot is the last entry even though its
    /// stone went to the store.
    pub path: SmallVec<[usize; 16]>,

    /// Where the last stone went.
    pub landing: Landing,
}

/// The slot the next stone goes to when `mover` sows past `slot`.
///
/// Advances one step and hops over the opponent's store.
#[must_use]
pub fn next_sowing_slot(slot: usize, mover: Side) -> usize {
    let skip = mover.opponent().store_slot();
    let next = next_slot(slot);
    if next == skip {
        next_slot(next)
    } else {
        next
    }
}

/// Pick up every stone at `source` and sow them for `mover`.
///
/// Each stone goes one slot further around the ring, skipping the
/// opponent's store on every lap. The last stone decides the landing:
/// own store, capture from an empty pit, or a plain deposit.
pub fn sow(board: &mut Board, mover: Side, source: usize) -> SowOutcome {
    debug_assert!(!is_store(source), "cannot sow from a store");

    let own_store = mover.store_slot();
    let mut remaining = board.take(source);
    let mut path = SmallVec::new();
    let mut slot = source;

    debug_assert!(remaining > 0, "cannot sow from an empty pit");

    while remaining > 1 {
        slot = next_sowing_slot(slot, mover);
        board.add(slot, 1);
        path.push(slot);
        remaining -= 1;
    }

    slot = next_sowing_slot(slot, mover);
    path.push(slot);

    let landing = if slot == own_store {
        board.add(slot, 1);
        Landing::OwnStore
    } else if board.get(slot) == 0 {
        let opposite = opposite_slot(slot);
        let captured = 1 + board.take(opposite);
        board.add(own_store, captured);
        Landing::Capture {
            slot,
            opposite,
            captured,
        }
    } else {
        board.add(slot, 1);
        Landing::Pit { slot }
    };

    trace!(?mover, source, ?path, ?landing, "sowed");

    SowOutcome { path, landing }
}
