//! Core engine types: players, RNG, configuration, errors.
//!
//! Nothing in here knows about the board; the board and rules modules
//! build on these.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{win_len_for, GameConfig, MIN_COLS, MIN_ROWS};
pub use error::{ConfigError, EngineError};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
