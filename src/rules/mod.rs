//! Kalah rules.
//!
//! - `sowing`: distributing a pit's stones, store skipping, captures
//! - `engine`: the stateful engine with turn and undo management
//! - `outcome`: round results and status
//! - `error`: rejection reasons

pub mod engine;
pub mod error;
pub mod outcome;
pub mod sowing;

pub use engine::{KalahEngine, MoveOutcome};
pub use error::{
    EndTurnError, EndTurnResult, MoveError, MoveResult, UndoError, UndoResult,
};
pub use outcome::{GameResult, GameStatus};
pub use sowing::{next_sowing_slot, sow, SowOutcome};
