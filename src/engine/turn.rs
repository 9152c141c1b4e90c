//! Moves and per-turn reports.

use serde::{Deserialize, Serialize};

use crate::board::{CellPos, DiscKind};
use crate::core::Player;
use crate::effects::ChangedCells;
use crate::rules::{GameStatus, WinCheck};

/// A column and the kind of disc to drop into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub col: usize,
    pub kind: DiscKind,
}

impl Move {
    #[must_use]
    pub const fn new(col: usize, kind: DiscKind) -> Self {
        Self { col, kind }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} disc in column {}", self.kind, self.col)
    }
}

/// Everything that happened during one committed move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Who moved.
    pub mover: Player,
    /// Where the disc landed, before its effect ran.
    pub landed: CellPos,
    /// Cells whose owner the effect may have changed.
    pub changed: ChangedCells,
    /// Lines completed by this move.
    pub wins: WinCheck,
    /// Game status after the move.
    pub status: GameStatus,
}
