//! Game state: the board plus everything needed to decide what may happen
//! next.
//!
//! ## TurnState
//!
//! Whose move it is and where they are within their turn:
//! - `turn_ended`: the active player has made a move that did not earn an
//!   extra one and must now end the turn (or undo)
//! - `undo_remaining`: undos left this turn, reset whenever the turn passes
//! - `game_over`: sticky once a row has emptied and the board was swept
//!
//! ## GameState
//!
//! The board, the turn state, the single undo snapshot and the move history.
//! Observers receive a `&GameState` after each change and read it through the
//! accessors below.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{MoveRecord, Pit};
use super::board::{Board, PITS_PER_SIDE};
use super::player::{Side, SideMap};

/// Undos each player may use per turn.
pub const UNDO_LIMIT: u32 = 3;

/// Turn bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// The player to act.
    pub current_player: Side,

    /// Set once the active player owes no further move this turn.
    pub turn_ended: bool,

    /// Undos left for the active player.
    pub undo_remaining: u32,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Moves made so far this turn.
    pub sequence: u32,

    /// Terminal flag. Only `initialize` clears it.
    pub game_over: bool,
}

impl TurnState {
    /// Fresh turn state for a new round.
    #[must_use]
    pub fn new(first: Side) -> Self {
        Self {
            current_player: first,
            turn_ended: false,
            undo_remaining: UNDO_LIMIT,
            turn_number: 1,
            sequence: 0,
            game_over: false,
        }
    }

    /// Hand the turn to the other player.
    pub fn advance(&mut self) {
        self.current_player = self.current_player.opponent();
        self.turn_ended = false;
        self.undo_remaining = UNDO_LIMIT;
        self.turn_number += 1;
        self.sequence = 0;
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,

    /// Turn bookkeeping.
    pub turn: TurnState,

    /// Ring contents before the most recent move.
    snapshot: Option<Board>,

    /// Applied moves, oldest first.
    history: Vector<MoveRecord>,

    /// Stones in play; fixed for the whole round.
    total_stones: u32,
}

impl GameState {
    /// A new round with `stones_per_pit` in every pit.
    #[must_use]
    pub fn new(stones_per_pit: u32, first: Side) -> Self {
        Self::from_board(Board::new(stones_per_pit), first)
    }

    /// A round starting from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, first: Side) -> Self {
        Self {
            total_stones: board.total_stones(),
            board,
            turn: TurnState::new(first),
            snapshot: None,
            history: Vector::new(),
        }
    }

    // === Board ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for the rules.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Stones in a side's store.
    #[must_use]
    pub fn store(&self, side: Side) -> u32 {
        self.board.store(side)
    }

    /// A side's pits in natural left-to-right order.
    #[must_use]
    pub fn row(&self, side: Side) -> [u32; PITS_PER_SIDE] {
        self.board.row(side)
    }

    /// Stones in play for this round.
    #[must_use]
    pub fn initial_total(&self) -> u32 {
        self.total_stones
    }

    // === Turn ===

    /// The player to act.
    #[must_use]
    pub fn current_player(&self) -> Side {
        self.turn.current_player
    }

    /// Has the active player finished their moves for this turn?
    #[must_use]
    pub fn is_turn_ended(&self) -> bool {
        self.turn.turn_ended
    }

    /// Has the round ended?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.turn.game_over
    }

    /// Undos left for the active player.
    #[must_use]
    pub fn undo_remaining(&self) -> u32 {
        self.turn.undo_remaining
    }

    /// Can the most recent move be taken back right now?
    #[must_use]
    pub fn is_undo_allowed(&self) -> bool {
        self.snapshot.is_some() && self.turn.undo_remaining > 0 && !self.turn.game_over
    }

    /// Is there a saved position to return to?
    #[must_use]
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Pits the active player may sow from now.
    ///
    /// Empty once the turn has ended or the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Pit> {
        if self.turn.turn_ended || self.turn.game_over {
            return Vec::new();
        }
        let side = self.turn.current_player;
        self.board
            .row(side)
            .iter()
            .enumerate()
            .filter(|&(_, &stones)| stones > 0)
            .map(|(index, _)| Pit::new(side, index))
            .collect()
    }

    // === Snapshot ===

    /// Save the board before a move, replacing any earlier snapshot.
    pub(crate) fn save_snapshot(&mut self) {
        self.snapshot = Some(self.board);
    }

    /// Restore the saved board, consuming the snapshot.
    pub(crate) fn restore_snapshot(&mut self) -> bool {
        match self.snapshot.take() {
            Some(board) => {
                self.board = board;
                true
            }
            None => false,
        }
    }

    /// Forget the saved board.
    pub(crate) fn clear_snapshot(&mut self) {
        self.snapshot = None;
    }

    // === History ===

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Most recent move.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.back()
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }

    pub(crate) fn forget_last_move(&mut self) -> Option<MoveRecord> {
        self.history.pop_back()
    }

    // === Scores ===

    /// Store totals for both sides.
    #[must_use]
    pub fn scores(&self) -> SideMap<u32> {
        self.board.stores()
    }
}
