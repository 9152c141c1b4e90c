//! Captured engine state for speculative moves.

use crate::board::{DiscStock, Grid};
use crate::core::{Player, PlayerMap};
use crate::rules::GameResult;

/// A full copy of everything a move can change.
///
/// Produced by [`MoveEngine::snapshot`](super::MoveEngine::snapshot) and
/// consumed by [`MoveEngine::rollback`](super::MoveEngine::rollback).
/// The grid is a persistent vector, so taking a snapshot is O(1) no matter
/// the board size; later writes to the engine never show through.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a snapshot does nothing unless passed to rollback"]
pub struct Snapshot {
    pub(super) grid: Grid,
    pub(super) stocks: PlayerMap<DiscStock>,
    pub(super) current: Player,
    pub(super) result: Option<GameResult>,
}

impl Snapshot {
    /// Player to move at capture time.
    pub fn current_player(&self) -> Player {
        self.current
    }
}
