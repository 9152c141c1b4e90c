//! # lineup
//!
//! Rule engine for a gravity-drop line-up game with special discs.
//!
//! Two players drop discs into the columns of a `rows x cols` grid; a disc
//! falls to the lowest empty cell. A player wins by owning a straight run
//! of `floor(rows * cols / 10)` cells along a column, a row, or a diagonal.
//! Besides ordinary discs each player holds a few special ones:
//!
//! - **Magnetic**: becomes ordinary, then sinks to rest directly on top of
//!   the mover's nearest ordinary disc below it, swapping places with the
//!   disc that was there.
//! - **Boring**: clears its column, returning the removed discs to their
//!   owners, and settles at the bottom as an ordinary disc.
//!
//! ## Architecture
//!
//! - **Single owner**: [`MoveEngine`] owns the grid, both stocks and the
//!   turn. A turn is drop, effect, win check, then the turn passes.
//!
//! - **Persistent Data Structures**: the grid is stored in an
//!   [`im::Vector`], so [`Snapshot`]s are O(1) and speculative probes cost
//!   nothing to undo.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `board`: disc kinds, cells, the grid, disc stocks
//! - `effects`: special-disc effect resolution
//! - `rules`: win detection and game results
//! - `engine`: the move engine, snapshots, turn reports, records
//! - `search`: one-ply move search and the computer opponent
//!
//! ```
//! use lineup::{DiscKind, GameStatus, MoveEngine, Player};
//!
//! let mut engine = MoveEngine::new(6, 7);
//! let report = engine.play_move(3, DiscKind::Ordinary).unwrap();
//! assert_eq!(report.status, GameStatus::AwaitingMove(Player::Two));
//! ```

pub mod core;
pub mod board;
pub mod effects;
pub mod rules;
pub mod engine;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    win_len_for, ConfigError, EngineError, GameConfig, GameRng, Player, PlayerMap,
};

pub use crate::board::{Cell, CellPos, DiscKind, DiscStock, Grid};

pub use crate::effects::{ChangedCells, EffectResolver};

pub use crate::rules::{GameResult, GameStatus, WinCheck, WinDetector};

pub use crate::engine::{GameRecord, Move, MoveEngine, Snapshot, TurnReport};

pub use crate::search::{ComputerOpponent, MoveSearch};
