//! # kalah-engine
//!
//! A rules engine for two-player Kalah (Mancala).
//!
//! ## Design Principles
//!
//! 1. **One engine, one game**: `KalahEngine` is a plain value with no
//!    global state. Hosts running many games own many engines.
//!
//! 2. **Atomic operations**: every call either completes (and notifies
//!    observers exactly once) or is rejected with a typed reason and no
//!    change.
//!
//! 3. **Presentation stays outside**: the engine never draws or hit-tests.
//!    Hosts subscribe to changes and read state through accessors.
//!
//! ## Board
//!
//! Fourteen slots in a ring: store A at 0, B's pits 1..=6, store B at 7,
//! A's pits 13 down to 8. Sowing runs forward around the ring and skips the
//! opponent's store.
//!
//! ## Example
//!
//! ```
//! use kalah_engine::{GameConfig, KalahEngine, Landing, Side};
//!
//! let mut engine = KalahEngine::new(GameConfig::new().first_player(Side::A)).unwrap();
//!
//! // A's third pit holds 3 stones; the last one drops into A's store.
//! let outcome = engine.make_move(Side::A, 2).unwrap();
//! assert_eq!(outcome.landing, Landing::OwnStore);
//! assert!(!engine.is_turn_ended());
//!
//! // A sows again; this time the turn ends.
//! engine.make_move(Side::A, 0).unwrap();
//! assert!(engine.is_turn_ended());
//! engine.end_turn().unwrap();
//! assert_eq!(engine.current_player(), Side::B);
//! ```
//!
//! ## Modules
//!
//! - `core`: sides, the board ring, moves, state, RNG, configuration
//! - `rules`: sowing, the engine, results, errors
//! - `observers`: change notification
//! - `layout`: cosmetic board skins

pub mod core;
pub mod layout;
pub mod observers;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, ConfigError, GameConfig, GameState, Landing, MoveRecord, Pit, Side, SideMap,
    StartingPlayer, UNDO_LIMIT,
};

pub use crate::layout::BoardLayout;

pub use crate::observers::{Observer, SubscriptionId};

pub use crate::rules::{
    EndTurnError, GameResult, GameStatus, KalahEngine, MoveError, MoveOutcome, UndoError,
};
