use std::path::PathBuf;

use crate::board::DiscKind;

use super::Player;

/// Errors reported by a move engine call.
///
/// None of these are fatal: the caller rejects the move and asks again.
/// A failed call leaves the engine state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("column {col} is out of range (board has {cols} columns)")]
    InvalidColumn { col: usize, cols: usize },

    #[error("column {col} is full")]
    ColumnFull { col: usize },

    #[error("{player} has no {kind} discs left")]
    OutOfStock { player: Player, kind: DiscKind },

    #[error("board dimensions mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
