//! Round results and the one-line status a host shows next to the board.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{GameState, Side, SideMap};

/// Result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The side with the larger store.
    Winner(Side),
    /// Both stores hold the same number of stones.
    Draw,
}

impl GameResult {
    /// Decide a result from final store totals.
    #[must_use]
    pub fn from_scores(scores: &SideMap<u32>) -> Self {
        let (a, b) = (scores[Side::A], scores[Side::B]);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameResult::Winner(Side::A),
            std::cmp::Ordering::Less => GameResult::Winner(Side::B),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Where the round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// `player` must sow.
    AwaitingMove { player: Side },
    /// `player` has finished moving and may end the turn or undo.
    TurnEnded { player: Side },
    /// The round is over.
    Finished { result: GameResult, scores: SideMap<u32> },
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::AwaitingMove { player } => write!(f, "It's player {player}'s turn"),
            GameStatus::TurnEnded { player } => {
                write!(f, "Player {player}'s turn ends: end the turn or undo")
            }
            GameStatus::Finished { result, scores } => {
                write!(f, "Game over: {} vs {}, ", scores[Side::A], scores[Side::B])?;
                match result {
                    GameResult::Winner(side) => write!(f, "player {side} wins"),
                    GameResult::Draw => write!(f, "draw"),
                }
            }
        }
    }
}

impl GameState {
    /// Final result, once the round is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_game_over()
            .then(|| GameResult::from_scores(&self.scores()))
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let player = self.current_player();
        match self.result() {
            Some(result) => GameStatus::Finished {
                result,
                scores: self.scores(),
            },
            None if self.is_turn_ended() => GameStatus::TurnEnded { player },
            None => GameStatus::AwaitingMove { player },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_from_scores() {
        let mut scores = SideMap::with_value(18);
        assert_eq!(GameResult::from_scores(&scores), GameResult::Draw);

        scores[Side::A] = 20;
        assert_eq!(GameResult::from_scores(&scores), GameResult::Winner(Side::A));

        scores[Side::B] = 21;
        let result = GameResult::from_scores(&scores);
        assert!(result.is_winner(Side::B));
        assert!(!result.is_winner(Side::A));
        assert!(!GameResult::Draw.is_winner(Side::A));
    }

    #[test]
    fn test_status_messages() {
        let state = GameState::new(3, Side::A);
        assert_eq!(state.result(), None);
        assert_eq!(state.status(), GameStatus::AwaitingMove { player: Side::A });
        assert_eq!(state.status().to_string(), "It's player A's turn");

        let mut ended = state.clone();
        ended.turn.turn_ended = true;
        assert_eq!(
            ended.status().to_string(),
            "Player A's turn ends: end the turn or undo"
        );

        let finished = GameStatus::Finished {
            result: GameResult::Winner(Side::B),
            scores: SideMap::new(|s| if s == Side::A { 16 } else { 20 }),
        };
        assert_eq!(finished.to_string(), "Game over: 16 vs 20, player B wins");
    }
}
