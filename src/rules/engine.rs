//! The Kalah rules engine.
//!
//! `KalahEngine` owns one game. Every mutating call either completes fully
//! (state updated, observers notified once) or is rejected with a reason and
//! leaves the game untouched:
//! - `initialize`: fresh board, first player from configuration
//! - `make_move`: sow one pit, apply extra move / capture, end the round if
//!   a row is empty
//! - `end_turn`: pass play once the active player has finished
//! - `undo`: take back the most recent move, a limited number of times per
//!   turn

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{
    validate_board, validate_stones_per_pit, Board, ConfigResult, GameConfig, GameRng, GameState,
    Landing, MoveRecord, Pit, Side, StartingPlayer, PITS_PER_SIDE,
};
use crate::observers::{Observer, ObserverRegistry, SubscriptionId};

use super::error::{EndTurnError, EndTurnResult, MoveError, MoveResult, UndoError, UndoResult};
use super::outcome::{GameResult, GameStatus};
use super::sowing::sow;

/// What an applied move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The pit that was sown.
    pub pit: Pit,

    /// Stones picked up.
    pub sown: u32,

    /// Slots that received a stone, in order.
    pub path: SmallVec<[usize; 16]>,

    /// Where the last stone went.
    pub landing: Landing,

    /// Did this move end the round?
    pub game_over: bool,
}

impl MoveOutcome {
    /// Must the mover sow again?
    #[must_use]
    pub fn extra_move(&self) -> bool {
        self.landing.is_extra_move() && !self.game_over
    }
}

/// A single game of Kalah.
#[derive(Debug)]
pub struct KalahEngine {
    config: GameConfig,
    state: GameState,
    rng: Option<GameRng>,
    observers: ObserverRegistry,
}

impl KalahEngine {
    /// Create an engine and set up the first round.
    ///
    /// No observers exist yet, so nothing is notified.
    pub fn new(config: GameConfig) -> ConfigResult<Self> {
        config.validate()?;

        let mut engine = Self {
            state: GameState::new(config.stones_per_pit, Side::B),
            config,
            rng: None,
            observers: ObserverRegistry::new(),
        };
        engine.reset(engine.config.stones_per_pit);
        Ok(engine)
    }

    /// Create an engine at an arbitrary position with `first` to move.
    ///
    /// Used for puzzles and for replaying a position a host already knows.
    /// `initialize` later starts an ordinary round from `config`.
    ///
    /// The board must hold at most `MAX_BOARD_STONES` and have stones in
    /// both rows.
    pub fn from_position(config: GameConfig, board: Board, first: Side) -> ConfigResult<Self> {
        validate_board(&board).inspect_err(|err| {
            debug!(%err, "position rejected");
        })?;
        let mut engine = Self::new(config)?;
        engine.state = GameState::from_board(board, first);
        Ok(engine)
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Mutations ===

    /// Start a new round with `stones_per_pit` in every pit.
    pub fn initialize(&mut self, stones_per_pit: u32) -> ConfigResult<()> {
        let stones = validate_stones_per_pit(stones_per_pit).inspect_err(|err| {
            debug!(%err, stones_per_pit, "initialize rejected");
        })?;

        self.config.stones_per_pit = stones;
        self.reset(stones);
        self.notify();
        Ok(())
    }

    /// Sow the stones of `side`'s pit `index`.
    ///
    /// Checks, in order: index range, game over, turn already ended, whose
    /// turn it is, empty pit.
    pub fn make_move(&mut self, side: Side, index: usize) -> MoveResult<MoveOutcome> {
        let source = self.check_move(side, index).inspect_err(|err| {
            debug!(%err, %side, index, "move rejected");
        })?;

        let pit = Pit::new(side, index);
        let sown = self.state.board().get(source);

        self.state.save_snapshot();
        self.state.turn.turn_ended = true;

        let sowing = sow(self.state.board_mut(), side, source);
        if sowing.landing == Landing::OwnStore {
            self.state.turn.turn_ended = false;
        }

        let board = self.state.board();
        let game_over = board.row_is_empty(Side::A) || board.row_is_empty(Side::B);
        if game_over {
            self.finish_round();
        }

        let record = MoveRecord {
            pit,
            sown,
            landing: sowing.landing,
            turn: self.state.turn.turn_number,
            sequence: self.state.turn.sequence,
        };
        self.state.record_move(record);
        self.state.turn.sequence += 1;

        debug!(
            %pit,
            sown,
            landing = ?sowing.landing,
            turn_ended = self.state.is_turn_ended(),
            "move applied"
        );

        self.notify();

        Ok(MoveOutcome {
            pit,
            sown,
            path: sowing.path,
            landing: sowing.landing,
            game_over,
        })
    }

    /// Pass play to the other player.
    pub fn end_turn(&mut self) -> EndTurnResult<()> {
        let check = if self.state.is_game_over() {
            Err(EndTurnError::GameOver)
        } else if !self.state.is_turn_ended() {
            Err(EndTurnError::TurnNotEnded)
        } else {
            Ok(())
        };
        check.inspect_err(|err| debug!(%err, "end turn rejected"))?;

        self.state.turn.advance();
        self.state.clear_snapshot();

        debug!(
            player = %self.state.current_player(),
            turn = self.state.turn.turn_number,
            "turn passed"
        );

        self.notify();
        Ok(())
    }

    /// Take back the most recent move.
    ///
    /// One undo per move, and at most `UNDO_LIMIT` per turn.
    pub fn undo(&mut self) -> UndoResult<()> {
        let check = if self.state.is_game_over() {
            Err(UndoError::GameOver)
        } else if !self.state.has_snapshot() {
            Err(UndoError::NothingToUndo)
        } else if self.state.undo_remaining() == 0 {
            Err(UndoError::LimitReached)
        } else {
            Ok(())
        };
        check.inspect_err(|err| debug!(%err, "undo rejected"))?;

        self.state.restore_snapshot();
        self.state.forget_last_move();
        let turn = &mut self.state.turn;
        turn.undo_remaining -= 1;
        turn.turn_ended = false;
        turn.sequence = turn.sequence.saturating_sub(1);

        debug!(remaining = turn.undo_remaining, "move undone");

        self.notify();
        Ok(())
    }

    // === Observers ===

    /// Register an observer, called after every successful mutation.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: Observer + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // === Accessors ===

    /// Full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Stones in a side's store.
    #[must_use]
    pub fn store(&self, side: Side) -> u32 {
        self.state.store(side)
    }

    /// A side's pits in natural left-to-right order.
    #[must_use]
    pub fn row(&self, side: Side) -> [u32; PITS_PER_SIDE] {
        self.state.row(side)
    }

    /// The player to act.
    #[must_use]
    pub fn current_player(&self) -> Side {
        self.state.current_player()
    }

    /// Has the active player finished moving this turn?
    #[must_use]
    pub fn is_turn_ended(&self) -> bool {
        self.state.is_turn_ended()
    }

    /// Can the last move be undone now?
    #[must_use]
    pub fn is_undo_allowed(&self) -> bool {
        self.state.is_undo_allowed()
    }

    /// Undos left this turn.
    #[must_use]
    pub fn undo_remaining(&self) -> u32 {
        self.state.undo_remaining()
    }

    /// Has the round ended?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Final result, once the round is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    /// Current status line.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Pits the active player may sow from now.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Pit> {
        self.state.legal_moves()
    }

    /// Applied moves this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<MoveRecord> {
        self.state.history()
    }

    // === Internals ===

    fn check_move(&self, side: Side, index: usize) -> MoveResult<usize> {
        let slot = side
            .pit_slot(index)
            .ok_or(MoveError::IndexOutOfRange { index })?;

        if self.state.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if self.state.is_turn_ended() {
            return Err(MoveError::TurnAlreadyEnded);
        }
        let current = self.state.current_player();
        if side != current {
            return Err(MoveError::NotYourTurn { side, current });
        }
        if self.state.board().get(slot) == 0 {
            return Err(MoveError::EmptyPit {
                pit: Pit::new(side, index),
            });
        }
        Ok(slot)
    }

    fn reset(&mut self, stones_per_pit: u32) {
        let first = match self.config.starting_player {
            StartingPlayer::Fixed(side) => side,
            StartingPlayer::Seeded(seed) => self
                .rng
                .get_or_insert_with(|| GameRng::new(seed))
                .choose_side(),
        };
        self.state = GameState::new(stones_per_pit, first);

        debug!(stones_per_pit, first = %first, "round initialized");
    }

    fn finish_round(&mut self) {
        let swept = self.state.board_mut().sweep();
        self.state.turn.game_over = true;

        let scores = self.state.scores();
        info!(
            store_a = scores[Side::A],
            store_b = scores[Side::B],
            swept_a = swept[Side::A],
            swept_b = swept[Side::B],
            result = ?GameResult::from_scores(&scores),
            "game over"
        );
    }

    fn notify(&mut self) {
        debug_assert_eq!(
            self.state.board().total_stones(),
            self.state.initial_total(),
            "stones must be conserved"
        );
        self.observers.notify(&self.state);
    }
}
