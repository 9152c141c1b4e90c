//! The computer opponent.

use tracing::{debug, instrument};

use crate::core::{EngineError, GameConfig, GameRng};
use crate::engine::{Move, MoveEngine, TurnReport};

use super::moves::MoveSearch;

/// Plays an immediate win when one exists, otherwise a random legal move.
#[derive(Clone, Debug)]
pub struct ComputerOpponent {
    rng: GameRng,
}

impl ComputerOpponent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.seed)
    }

    /// Pick a move for the current player without playing it.
    pub fn choose_move(&mut self, engine: &mut MoveEngine) -> Option<Move> {
        if let Some(mv) = MoveSearch::find_winning_move(engine) {
            debug!(%mv, "found winning move");
            return Some(mv);
        }
        MoveSearch::random_move(engine, &mut self.rng)
    }

    /// Choose and play a move. `Ok(None)` when there is nothing to play.
    #[instrument(level = "debug", skip_all, fields(seed = self.rng.seed()))]
    pub fn take_turn(&mut self, engine: &mut MoveEngine) -> Result<Option<TurnReport>, EngineError> {
        if engine.status().is_terminal() {
            return Err(EngineError::GameOver);
        }
        let Some(mv) = self.choose_move(engine) else {
            debug!(player = %engine.current_player(), "no legal move");
            return Ok(None);
        };
        engine.play_move(mv.col, mv.kind).map(Some)
    }
}
