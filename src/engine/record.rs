//! Serializable picture of a game in progress.
//!
//! The engine does not choose a storage format; a `GameRecord` is plain
//! serde data that callers can write however they like.

use serde::{Deserialize, Serialize};

use crate::board::{DiscKind, DiscStock};
use crate::core::{EngineError, Player};

use super::MoveEngine;

/// Everything needed to resume a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub rows: usize,
    pub cols: usize,
    pub win_len: usize,
    pub vs_computer: bool,
    pub current_player: Player,
    /// Owner matrix indexed `[row][col]`, row 0 at the bottom.
    pub owners: Vec<Vec<Option<Player>>>,
    /// Kind matrix, same layout as `owners`.
    pub kinds: Vec<Vec<DiscKind>>,
    pub stock_p1: DiscStock,
    pub stock_p2: DiscStock,
}

impl GameRecord {
    /// Both matrices must be exactly `rows x cols`.
    fn check_shape(&self) -> Result<(), EngineError> {
        let expected = (self.rows, self.cols);
        let shape = |lens: &[usize]| (lens.len(), lens.first().copied().unwrap_or(0));
        let owner_lens: Vec<usize> = self.owners.iter().map(Vec::len).collect();
        let kind_lens: Vec<usize> = self.kinds.iter().map(Vec::len).collect();

        if self.rows == 0 || self.cols == 0 || self.rows.checked_mul(self.cols).is_none() {
            return Err(EngineError::DimensionMismatch {
                expected,
                found: shape(&owner_lens),
            });
        }
        for lens in [&owner_lens, &kind_lens] {
            let found = match lens.iter().find(|&&len| len != self.cols) {
                Some(&bad) => (lens.len(), bad),
                None => shape(lens),
            };
            if found != expected {
                return Err(EngineError::DimensionMismatch { expected, found });
            }
        }
        Ok(())
    }
}

impl MoveEngine {
    /// Capture the game as a [`GameRecord`].
    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord {
            rows: self.rows(),
            cols: self.cols(),
            win_len: self.win_len(),
            vs_computer: self.is_vs_computer(),
            current_player: self.current_player(),
            owners: self.owners(),
            kinds: self.kinds(),
            stock_p1: self.stock(Player::One),
            stock_p2: self.stock(Player::Two),
        }
    }

    /// Rebuild an engine from a record.
    ///
    /// The record's own win length is kept even if it differs from the
    /// one the board size would give.
    ///
    /// The matrices are checked against the stated size before anything is
    /// allocated, so a corrupt record fails with `DimensionMismatch`.
    pub fn from_record(record: &GameRecord) -> Result<Self, EngineError> {
        record.check_shape()?;

        let mut engine = Self::new(record.rows, record.cols)
            .with_vs_computer(record.vs_computer)
            .with_win_len(record.win_len);
        engine.restore_state(
            &record.owners,
            &record.kinds,
            record.current_player,
            record.stock_p1,
            record.stock_p2,
        )?;
        Ok(engine)
    }
}
