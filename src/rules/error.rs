//! Rejection reasons for engine operations.
//!
//! Every rejection leaves the game exactly as it was.

use std::error::Error;
use std::fmt;

use crate::core::{Pit, Side};

pub type MoveResult<T> = Result<T, MoveError>;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Pit index outside `0..6`.
    IndexOutOfRange { index: usize },
    /// The round is over.
    GameOver,
    /// The active player already finished this turn and must end it first.
    TurnAlreadyEnded,
    /// Only the active player may sow, and only from their own row.
    NotYourTurn { side: Side, current: Side },
    /// Sowing from an empty pit.
    EmptyPit { pit: Pit },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IndexOutOfRange { index } => {
                write!(f, "pit index {index} is out of range (expected 0..6)")
            }
            MoveError::GameOver => write!(f, "the game is over"),
            MoveError::TurnAlreadyEnded => write!(f, "the turn has already ended"),
            MoveError::NotYourTurn { side, current } => {
                write!(f, "player {side} cannot move: it is player {current}'s turn")
            }
            MoveError::EmptyPit { pit } => write!(f, "pit {pit} is empty"),
        }
    }
}

impl Error for MoveError {}

pub type EndTurnResult<T> = Result<T, EndTurnError>;

/// Why the turn could not be passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndTurnError {
    /// The active player still owes a move.
    TurnNotEnded,
    /// The round is over.
    GameOver,
}

impl fmt::Display for EndTurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndTurnError::TurnNotEnded => write!(f, "turn not yet ended"),
            EndTurnError::GameOver => write!(f, "the game is over"),
        }
    }
}

impl Error for EndTurnError {}

pub type UndoResult<T> = Result<T, UndoError>;

/// Why an undo was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoError {
    /// No move since the turn started, or the last move was already undone.
    NothingToUndo,
    /// The active player has used every undo for this turn.
    LimitReached,
    /// The round is over.
    GameOver,
}

impl fmt::Display for UndoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoError::NothingToUndo => write!(f, "no undo available"),
            UndoError::LimitReached => write!(f, "no undo available: limit reached for this turn"),
            UndoError::GameOver => write!(f, "the game is over"),
        }
    }
}

impl Error for UndoError {}
