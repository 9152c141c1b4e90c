//! Game status and results.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Board filled up with no line.
    Draw,
    /// One move completed lines for both players. Scored as a draw.
    DoubleWin,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Nobody won outright.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        !matches!(self, GameResult::Winner(_))
    }
}

/// Where the game stands between moves.
///
/// There is no in-between state: a move is either fully applied, leaving
/// the game awaiting the next player or finished, or rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    AwaitingMove(Player),
    Terminal(GameResult),
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Terminal(_))
    }

    /// The finished game's result, if any.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            GameStatus::Terminal(result) => Some(*result),
            GameStatus::AwaitingMove(_) => None,
        }
    }
}
