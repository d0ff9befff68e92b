//! Game configuration.
//!
//! Hosts build a `GameConfig` at startup (typically from a setup dialog or
//! command-line flags) and hand it to the engine:
//! - `stones_per_pit`: initial stones in each of the 12 pits
//! - `starting_player`: who moves first after each `initialize`
//! - `layout`: the board skin, carried for the host and ignored by the rules

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::board::{Board, PITS_PER_SIDE};
use super::player::Side;
use crate::layout::BoardLayout;

/// Stones per pit when nothing else is configured.
pub const DEFAULT_STONES_PER_PIT: u32 = 3;

/// Upper bound on stones per pit.
pub const MAX_STONES_PER_PIT: u32 = 1000;

/// Upper bound on stones on a whole board.
pub const MAX_BOARD_STONES: u32 = 2 * PITS_PER_SIDE as u32 * MAX_STONES_PER_PIT;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A game needs at least one stone per pit.
    NoStones,
    /// More stones per pit than the engine accepts.
    TooManyStones { requested: u32, max: u32 },
    /// A starting position holds more stones than the engine accepts.
    TooManyBoardStones { max: u32 },
    /// A starting position with an empty row is already finished.
    EmptyRow { side: Side },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoStones => write!(f, "stones per pit must be at least 1"),
            ConfigError::TooManyStones { requested, max } => {
                write!(f, "{requested} stones per pit exceeds the maximum of {max}")
            }
            ConfigError::TooManyBoardStones { max } => {
                write!(f, "board holds more than {max} stones")
            }
            ConfigError::EmptyRow { side } => {
                write!(f, "player {side}'s row is empty, the position is already over")
            }
        }
    }
}

impl Error for ConfigError {}

/// Check a stones-per-pit value.
pub fn validate_stones_per_pit(stones_per_pit: u32) -> ConfigResult<u32> {
    match stones_per_pit {
        0 => Err(ConfigError::NoStones),
        n if n > MAX_STONES_PER_PIT => Err(ConfigError::TooManyStones {
            requested: n,
            max: MAX_STONES_PER_PIT,
        }),
        n => Ok(n),
    }
}

/// Check a caller-supplied starting position.
///
/// Returns the board's stone total.
pub fn validate_board(board: &Board) -> ConfigResult<u32> {
    let total = board
        .checked_total()
        .filter(|&total| total <= MAX_BOARD_STONES)
        .ok_or(ConfigError::TooManyBoardStones {
            max: MAX_BOARD_STONES,
        })?;

    match Side::ALL.into_iter().find(|&side| board.row_is_empty(side)) {
        Some(side) => Err(ConfigError::EmptyRow { side }),
        None => Ok(total),
    }
}

/// How the first player of a round is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingPlayer {
    /// Always the same side.
    Fixed(Side),
    /// Drawn from a deterministic RNG seeded once per engine; each
    /// `initialize` draws again.
    Seeded(u64),
}

impl Default for StartingPlayer {
    fn default() -> Self {
        StartingPlayer::Fixed(Side::B)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Initial stones in each pit.
    pub stones_per_pit: u32,

    /// Who moves first.
    pub starting_player: StartingPlayer,

    /// Board skin. Cosmetic only.
    pub layout: BoardLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stones_per_pit: DEFAULT_STONES_PER_PIT,
            starting_player: StartingPlayer::default(),
            layout: BoardLayout::default(),
        }
    }
}

impl GameConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set stones per pit.
    #[must_use]
    pub fn with_stones_per_pit(mut self, stones: u32) -> Self {
        self.stones_per_pit = stones;
        self
    }

    /// Set how the starting player is chosen.
    #[must_use]
    pub fn with_starting_player(mut self, starting: StartingPlayer) -> Self {
        self.starting_player = starting;
        self
    }

    /// Shorthand for `StartingPlayer::Fixed(side)`.
    #[must_use]
    pub fn first_player(self, side: Side) -> Self {
        self.with_starting_player(StartingPlayer::Fixed(side))
    }

    /// Set the board skin.
    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_stones_per_pit(self.stones_per_pit).map(|_| ())
    }
}
