//! Line-based win detection.

use crate::board::{CellPos, Grid};
use crate::core::Player;

/// Row/column steps for the four line axes: vertical, horizontal, and the
/// two diagonals. Each axis is walked in both directions.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Which players completed a line through the checked cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinCheck {
    pub mover_won: bool,
    pub opponent_won: bool,
}

impl WinCheck {
    /// Exactly the mover won.
    #[must_use]
    pub fn is_clean_win(&self) -> bool {
        self.mover_won && !self.opponent_won
    }

    /// Nobody won.
    #[must_use]
    pub fn is_none(&self) -> bool {
        !self.mover_won && !self.opponent_won
    }
}

/// Detects same-owner runs of at least `win_len` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinDetector {
    win_len: usize,
}

impl WinDetector {
    #[must_use]
    pub const fn new(win_len: usize) -> Self {
        Self { win_len }
    }

    #[must_use]
    pub const fn win_len(&self) -> usize {
        self.win_len
    }

    /// Longest same-owner run through `pos` over all four axes, counting
    /// the cell itself. Zero for an empty cell.
    #[must_use]
    pub fn longest_run(&self, grid: &Grid, pos: CellPos) -> usize {
        let Some(player) = grid.get(pos).owner() else {
            return 0;
        };

        AXES.iter()
            .map(|&(dr, dc)| {
                1 + run_length(grid, pos, player, dr, dc) + run_length(grid, pos, player, -dr, -dc)
            })
            .max()
            .unwrap_or(0)
    }

    /// True iff the owner of `pos` holds a line of at least `win_len`
    /// cells through it on any axis.
    #[must_use]
    pub fn check_cell_win(&self, grid: &Grid, pos: CellPos) -> bool {
        let Some(player) = grid.get(pos).owner() else {
            return false;
        };

        AXES.iter().any(|&(dr, dc)| {
            1 + run_length(grid, pos, player, dr, dc) + run_length(grid, pos, player, -dr, -dc)
                >= self.win_len
        })
    }

    /// Check every owned cell in `changed` for a win, attributing each win
    /// to the mover or the opponent by the cell's owner.
    #[must_use]
    pub fn win_check(&self, grid: &Grid, changed: &[CellPos], mover: Player) -> WinCheck {
        let mut result = WinCheck::default();

        for &pos in changed {
            if pos.row >= grid.rows() || pos.col >= grid.cols() {
                continue;
            }
            let Some(owner) = grid.get(pos).owner() else {
                continue;
            };
            if !self.check_cell_win(grid, pos) {
                continue;
            }

            if owner == mover {
                result.mover_won = true;
            } else {
                result.opponent_won = true;
            }
            if result.mover_won && result.opponent_won {
                break;
            }
        }

        result
    }
}

/// Cells owned by `player` walking from `pos` (exclusive) in one direction.
fn run_length(grid: &Grid, pos: CellPos, player: Player, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let mut row = pos.row as isize + dr;
    let mut col = pos.col as isize + dc;

    while grid.in_bounds(row, col) && grid.owner(row as usize, col as usize) == Some(player) {
        count += 1;
        row += dr;
        col += dc;
    }

    count
}
