//! Game configuration.
//!
//! A game is configured once at startup: board size, whether player two
//! is the computer, and the computer's RNG seed. The win length is not
//! configurable; it is derived from the board size.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest playable board height.
pub const MIN_ROWS: usize = 6;

/// Smallest playable board width.
pub const MIN_COLS: usize = 7;

/// Board and session configuration, loadable from TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board height.
    pub rows: usize,

    /// Board width.
    pub cols: usize,

    /// Player two is driven by the computer opponent.
    pub vs_computer: bool,

    /// Seed for the computer opponent's random fallback.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: MIN_ROWS,
            cols: MIN_COLS,
            vs_computer: false,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a config for a board of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Play against the computer.
    #[must_use]
    pub fn with_vs_computer(mut self, vs_computer: bool) -> Self {
        self.vs_computer = vs_computer;
        self
    }

    /// Set the computer opponent's seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Minimum line length that wins: a tenth of the board, rounded down.
    #[must_use]
    pub fn win_len(&self) -> usize {
        win_len_for(self.rows, self.cols)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate board dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_ROWS {
            return Err(ConfigError::Validation(format!(
                "rows must be >= {MIN_ROWS}"
            )));
        }
        if self.cols < MIN_COLS {
            return Err(ConfigError::Validation(format!(
                "cols must be >= {MIN_COLS}"
            )));
        }
        if self.rows > self.cols {
            return Err(ConfigError::Validation(
                "rows must be <= cols".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).unwrap_or_default()
    }
}

/// Win length for a `rows x cols` board.
#[must_use]
pub const fn win_len_for(rows: usize, cols: usize) -> usize {
    rows * cols / 10
}
