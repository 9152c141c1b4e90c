//! Game rules: line detection and game results.
//!
//! A line is a run of same-owner cells along a column, a row, or either
//! diagonal. A move wins when it leaves such a run of at least the win
//! length through one of the cells it changed.

mod outcome;
mod win;

pub use outcome::{GameResult, GameStatus};
pub use win::{WinCheck, WinDetector};
