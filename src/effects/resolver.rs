//! Effect resolution - applying a landed disc's effect to the board.
//!
//! Each kind is resolved in one place, and every write goes through
//! `Grid::set`/`Grid::swap`/`Grid::clear_column`, which move owner and
//! kind together. An empty cell therefore never keeps a stale kind.

use smallvec::{smallvec, SmallVec};

use crate::board::{Cell, CellPos, DiscKind, DiscStock, Grid};
use crate::core::{Player, PlayerMap};

/// Cells whose owner may have changed, in the order they should be
/// checked for a win. At most three for any effect.
pub type ChangedCells = SmallVec<[CellPos; 3]>;

/// Resolves the effect of a just-dropped disc.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve the disc at `pos`, mutating the grid (and, for a boring
    /// disc, both stocks) in place.
    ///
    /// Returns the cells to win-check. An empty `pos` has no effect and
    /// yields no cells.
    pub fn resolve(
        grid: &mut Grid,
        stocks: &mut PlayerMap<DiscStock>,
        pos: CellPos,
    ) -> ChangedCells {
        let cell = grid.get(pos);
        let Some(owner) = cell.owner() else {
            return ChangedCells::new();
        };

        match cell.kind() {
            DiscKind::Ordinary => smallvec![pos],
            DiscKind::Boring => Self::resolve_boring(grid, stocks, pos, owner),
            DiscKind::Magnetic => Self::resolve_magnetic(grid, pos, owner),
        }
    }

    /// Clear the column, hand cleared discs back as ordinary stock, and
    /// settle the driller at the bottom as an ordinary disc.
    fn resolve_boring(
        grid: &mut Grid,
        stocks: &mut PlayerMap<DiscStock>,
        pos: CellPos,
        owner: Player,
    ) -> ChangedCells {
        let cleared = grid.clear_column(pos.col, pos.row);
        for (player, &count) in cleared.iter() {
            stocks[player].return_discs(count);
        }

        let bottom = CellPos::new(0, pos.col);
        grid.set(bottom, Cell::disc(owner, DiscKind::Ordinary));

        tracing::trace!(
            col = pos.col,
            p1_returned = cleared[Player::One],
            p2_returned = cleared[Player::Two],
            "boring disc cleared column"
        );
        smallvec![bottom]
    }

    /// Decay to ordinary, then drop onto the owner's nearest ordinary disc
    /// below, if there is one and it isn't already directly underneath.
    fn resolve_magnetic(grid: &mut Grid, pos: CellPos, owner: Player) -> ChangedCells {
        grid.set(pos, Cell::disc(owner, DiscKind::Ordinary));

        if pos.row == 0 || grid.get(CellPos::new(pos.row - 1, pos.col)).is_owned_by(owner) {
            return smallvec![pos];
        }

        let anchor = (0..pos.row - 1)
            .rev()
            .map(|row| CellPos::new(row, pos.col))
            .find(|&p| grid.get(p) == Cell::disc(owner, DiscKind::Ordinary));

        match anchor {
            Some(anchor) => {
                let above = CellPos::new(anchor.row + 1, pos.col);
                grid.swap(pos, above);
                tracing::trace!(from = %pos, to = %above, "magnetic disc pulled down");
                smallvec![pos, above, anchor]
            }
            None => smallvec![pos],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(grid: &mut Grid, col: usize, discs: &[(Player, DiscKind)]) {
        for &(player, kind) in discs {
            grid.drop_disc(col, Cell::disc(player, kind)).unwrap();
        }
    }

    fn owners_in(grid: &Grid, col: usize) -> Vec<Option<Player>> {
        (0..grid.rows()).map(|row| grid.owner(row, col)).collect()
    }

    const P1: Player = Player::One;
    const P2: Player = Player::Two;
    const O: DiscKind = DiscKind::Ordinary;
    const M: DiscKind = DiscKind::Magnetic;
    const B: DiscKind = DiscKind::Boring;

    #[test]
    fn test_ordinary_has_no_effect() {
        let mut grid = Grid::new(6, 7);
        let mut stocks = PlayerMap::with_value(DiscStock::initial(6, 7));
        column(&mut grid, 0, &[(P1, O)]);
        let before = grid.clone();

        let changed = EffectResolver::resolve(&mut grid, &mut stocks, CellPos::new(0, 0));

        assert_eq!(changed.as_slice(), &[CellPos::new(0, 0)]);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_empty_cell_yields_nothing() {
        let mut grid = Grid::new(6, 7);
        let mut stocks = PlayerMap::default();

        let changed = EffectResolver::resolve(&mut grid, &mut stocks, CellPos::new(0, 0));
        assert!(changed.is_empty());
    }

    #[test]
    fn test_boring_clears_column_and_returns_discs() {
        let mut grid = Grid::new(6, 7);
        let mut stocks = PlayerMap::from_pair(DiscStock::new(10, 2, 1), DiscStock::new(10, 2, 2));
        column(&mut grid, 4, &[(P1, O), (P2, O), (P1, O), (P1, B)]);

        let changed = EffectResolver::resolve(&mut grid, &mut stocks, CellPos::new(3, 4));

        assert_eq!(changed.as_slice(), &[CellPos::new(0, 4)]);
        assert_eq!(owners_in(&grid, 4), vec![Some(P1), None, None, None, None, None]);
        assert_eq!(grid.kind(0, 4), DiscKind::Ordinary);
        assert_eq!(stocks[P1], DiscStock::new(12, 2, 1));
        assert_eq!(stocks[P2], DiscStock::new(11, 2, 2));
    }

    #[test]
    fn test_boring_on_empty_column_decays_in_place() {
        let mut grid = Grid::new(6, 7);
        let mut stocks = PlayerMap::with_value(DiscStock::new(5, 2, 2));
        column(&mut grid, 0, &[(P2, B)]);

        let changed = EffectResolver::resolve(&mut grid, &mut stocks, CellPos::new(0, 0));

        assert_eq!(changed.as_slice(), &[CellPos::new(0, 0)]);
        assert_eq!(grid.get(CellPos::new(0, 0)), Cell::disc(P2, DiscKind::Ordinary));
        assert_eq!(stocks[P1], DiscStock::new(5, 2, 2));
        assert_eq!(stocks[P2], DiscStock::new(5, 2, 2));
    }

    #[test]
    fn test_boring_leaves_other_columns_alone() {
        let mut grid = Grid::new(6, 7);
        let mut stocks = PlayerMap::default();
        column(&mut grid, 0, &[(P2, O), (P2, O)]);
        column(&mut grid, 1, &[(P2, O), (P1, B)]);

        EffectResolver::resolve(&mut grid, &mut stocks, CellPos::new(1, 1));

        assert_eq!(grid.owner(1, 0), Some(P2));
        assert_eq!(grid.owner(0, 1), Some(P1));
        assert_eq!(grid.owner(1, 1), None);
        assert!(grid.is_settled());
    }

    #[test]
    fn test_magnetic_on_bottom_row_stays() {
        let mut grid = Grid::new(6, 7);
        let mut stocks = PlayerMap::default();
        column(&mut grid, 2, &[(P1, M)]);

        let changed = EffectResolver::resolve(&mut grid, &mut stocks, CellPos::new(0, 2));

        assert_eq!(changed.as_slice(), &[CellPos::new(0, 2)]);
        assert_eq!(grid.get(CellPos::new(0, 2)), Cell::disc(P1, DiscKind::Ordinary));
    }

    #[test]
    fn test_magnetic_already_adjacent_stays() {
        let mut grid = Grid::new(6, 7);
        let mut stocks = PlayerMap::default();
        column(&mut grid, 2, &[(P1, O), (P2, O), (P1, O), (P1, M)]);

        let changed = EffectResolver::resolve(&mut grid, &mut stocks, CellPos::new(3, 2));

        assert_eq!(changed.as_slice(), &[CellPos::new(3, 2)]);
        assert_eq!(owners_in(&grid, 2)[..4], [Some(P1), Some(P2), Some(P1), Some(P1)]);
        assert_eq!(grid.kind(3, 2), DiscKind::Ordinary);
    }

    #[test]
    fn test_magnetic_pulls_onto_nearest_own_ordinary() {
        let mut grid = Grid::new(6, 7);
        let mut stocks = PlayerMap::default();
        column(&mut grid, 5, &[(P1, O), (P2, O), (P2, O), (P1, M)]);

        let changed = EffectResolver::resolve(&mut grid, &mut stocks, CellPos::new(3, 5));

        assert_eq!(
            changed.as_slice(),
            &[CellPos::new(3, 5), CellPos::new(1, 5), CellPos::new(0, 5)]
        );
        assert_eq!(owners_in(&grid, 5)[..4], [Some(P1), Some(P1), Some(P2), Some(P2)]);
        assert!(grid.kinds().iter().all(|row| row[5] == DiscKind::Ordinary));
        assert!(grid.is_settled());
    }

    #[test]
    fn test_magnetic_picks_highest_matching_disc() {
        let mut grid = Grid::new(7, 7);
        let mut stocks = PlayerMap::default();
        column(&mut grid, 0, &[(P1, O), (P1, O), (P2, O), (P2, O), (P1, M)]);

        let changed = EffectResolver::resolve(&mut grid, &mut stocks, CellPos::new(4, 0));

        assert_eq!(changed[2], CellPos::new(1, 0));
        assert_eq!(
            owners_in(&grid, 0)[..5],
            [Some(P1), Some(P1), Some(P1), Some(P2), Some(P2)]
        );
    }

    #[test]
    fn test_magnetic_ignores_opponent_discs() {
        let mut grid = Grid::new(6, 7);
        let mut stocks = PlayerMap::default();
        column(&mut grid, 1, &[(P2, O), (P2, O), (P1, M)]);
        let owners_before = owners_in(&grid, 1);

        let changed = EffectResolver::resolve(&mut grid, &mut stocks, CellPos::new(2, 1));

        assert_eq!(changed.as_slice(), &[CellPos::new(2, 1)]);
        assert_eq!(owners_in(&grid, 1), owners_before);
        assert_eq!(grid.kind(2, 1), DiscKind::Ordinary);
    }

    #[test]
    fn test_magnetic_ignores_own_special_discs() {
        let owners = vec![
            vec![Some(P1)],
            vec![Some(P2)],
            vec![Some(P1)],
            vec![None],
        ];
        let kinds = vec![vec![M], vec![O], vec![M], vec![O]];
        let mut grid = Grid::from_matrices(&owners, &kinds).unwrap();
        let mut stocks = PlayerMap::default();

        let changed = EffectResolver::resolve(&mut grid, &mut stocks, CellPos::new(2, 0));

        assert_eq!(changed.as_slice(), &[CellPos::new(2, 0)]);
        assert_eq!(grid.kind(0, 0), DiscKind::Magnetic);
        assert_eq!(grid.kind(2, 0), DiscKind::Ordinary);
    }
}
