//! One-ply move search: immediate wins and random fallback.

use tracing::trace;

use crate::board::DiscKind;
use crate::core::GameRng;
use crate::engine::{Move, MoveEngine};

/// Stateless move search over a [`MoveEngine`].
///
/// Every probe runs inside [`MoveEngine::probe`], so the engine is left
/// exactly as it was found.
pub struct MoveSearch;

impl MoveSearch {
    /// Would dropping `kind` into `col` win outright for the current player?
    ///
    /// False if the drop is illegal or if the move also completes a line
    /// for the opponent.
    pub fn try_move_wins(engine: &mut MoveEngine, col: usize, kind: DiscKind) -> bool {
        engine.probe(|e| {
            let Ok(row) = e.drop_disc(col, kind) else {
                return false;
            };
            let changed = e.apply_disc_effect(row, col);
            let wins = e.win_check(&changed).is_clean_win();
            trace!(col, %kind, wins, "probed move");
            wins
        })
    }

    /// First immediately winning move, scanning columns left to right and
    /// kinds in ordinary, magnetic, boring order.
    pub fn find_winning_move(engine: &mut MoveEngine) -> Option<Move> {
        let kinds = engine.stock(engine.current_player()).available_kinds();
        let cols: Vec<usize> = engine.grid().playable_columns().collect();

        cols.into_iter()
            .flat_map(|col| kinds.iter().map(move |&kind| Move::new(col, kind)))
            .find(|mv| Self::try_move_wins(engine, mv.col, mv.kind))
    }

    /// A uniformly random legal move, or `None` if there is no playable
    /// column or the current player has no discs.
    pub fn random_move(engine: &MoveEngine, rng: &mut GameRng) -> Option<Move> {
        rng.choose(&engine.legal_moves()).copied()
    }
}
