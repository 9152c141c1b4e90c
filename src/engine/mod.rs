//! The move engine and its supporting value types.
//!
//! [`MoveEngine`] owns all mutable game state. A turn is drop, effect,
//! win check, then either the game ends or the turn passes; `play_move`
//! runs that sequence, and the individual steps stay public for callers
//! that need finer control. [`Snapshot`] captures state so speculative
//! moves can be undone.

mod move_engine;
mod record;
mod snapshot;
mod turn;

pub use move_engine::MoveEngine;
pub use record::GameRecord;
pub use snapshot::Snapshot;
pub use turn::{Move, TurnReport};
