//! Core types: sides, the board ring, moves, state, RNG, configuration.
//!
//! Everything here is plain data with local invariants. The rules that move
//! stones between slots live in `rules`.

pub mod player;
pub mod board;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Side, SideMap};
pub use board::{
    is_store, next_slot, opposite_slot, Board, PITS_PER_SIDE, SLOT_COUNT, STORE_A, STORE_B,
};
pub use rng::GameRng;
pub use config::{
    validate_board, validate_stones_per_pit, ConfigError, ConfigResult, GameConfig,
    StartingPlayer, DEFAULT_STONES_PER_PIT, MAX_BOARD_STONES, MAX_STONES_PER_PIT,
};
pub use action::{Landing, MoveRecord, Pit};
pub use state::{GameState, TurnState, UNDO_LIMIT};
