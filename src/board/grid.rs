//! The board grid: who owns each cell, and with which kind of disc.
//!
//! ## Layout
//!
//! Cells are stored row-major in a persistent `im::Vector`, so cloning a
//! grid for a speculative probe is O(1) and shares structure with the
//! original until one of them is written.
//!
//! Row 0 is the bottom; discs stack upward from it. Within a column the
//! owned cells always form a contiguous run starting at row 0.

use im::Vector;

use crate::core::{EngineError, Player, PlayerMap};

use super::{Cell, CellPos, DiscKind};

/// Owner and disc-kind matrix for a `rows x cols` board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vector<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// If either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");

        Self {
            rows,
            cols,
            cells: std::iter::repeat(Cell::EMPTY).take(rows * cols).collect(),
        }
    }

    /// Build a grid from an owner matrix and a kind matrix, both indexed
    /// `[row][col]` with row 0 at the bottom.
    ///
    /// Kinds on empty cells are reset to ordinary.
    pub fn from_matrices(
        owners: &[Vec<Option<Player>>],
        kinds: &[Vec<DiscKind>],
    ) -> Result<Self, EngineError> {
        let rows = owners.len();
        let cols = owners.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(EngineError::DimensionMismatch {
                expected: (rows.max(1), cols.max(1)),
                found: (rows, cols),
            });
        }
        check_shape(owners, (rows, cols))?;
        check_shape(kinds, (rows, cols))?;

        let cells = owners
            .iter()
            .zip(kinds)
            .flat_map(|(owner_row, kind_row)| {
                owner_row
                    .iter()
                    .zip(kind_row)
                    .map(|(&owner, &kind)| Cell::from_parts(owner, kind))
            })
            .collect();

        Ok(Self { rows, cols, cells })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if `(row, col)` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    fn index(&self, pos: CellPos) -> usize {
        debug_assert!(pos.row < self.rows && pos.col < self.cols, "{pos} off board");
        pos.row * self.cols + pos.col
    }

    /// Contents of a cell.
    #[must_use]
    pub fn get(&self, pos: CellPos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Owner of the cell at `(row, col)`.
    #[must_use]
    pub fn owner(&self, row: usize, col: usize) -> Option<Player> {
        self.get(CellPos::new(row, col)).owner()
    }

    /// Disc kind at `(row, col)`; ordinary for an empty cell.
    #[must_use]
    pub fn kind(&self, row: usize, col: usize) -> DiscKind {
        self.get(CellPos::new(row, col)).kind()
    }

    /// Overwrite a cell. Owner and kind change together.
    pub(crate) fn set(&mut self, pos: CellPos, cell: Cell) {
        let idx = self.index(pos);
        self.cells.set(idx, cell);
    }

    /// Exchange the contents of two cells.
    pub(crate) fn swap(&mut self, a: CellPos, b: CellPos) {
        let (ia, ib) = (self.index(a), self.index(b));
        self.cells.swap(ia, ib);
    }

    // === Columns ===

    /// True iff `col` is on the board and its top cell is empty.
    #[must_use]
    pub fn is_column_playable(&self, col: usize) -> bool {
        col < self.cols && self.get(CellPos::new(self.rows - 1, col)).is_empty()
    }

    /// Lowest empty row of a column, scanning up from row 0.
    #[must_use]
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        (0..self.rows).find(|&row| self.get(CellPos::new(row, col)).is_empty())
    }

    /// Columns that can still take a disc, in ascending order.
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter(|&col| self.is_column_playable(col))
    }

    /// Drop a disc into `col`, returning the row it landed on.
    pub fn drop_disc(&mut self, col: usize, cell: Cell) -> Result<usize, EngineError> {
        if col >= self.cols {
            return Err(EngineError::InvalidColumn {
                col,
                cols: self.cols,
            });
        }

        let row = self
            .lowest_empty_row(col)
            .ok_or(EngineError::ColumnFull { col })?;
        self.set(CellPos::new(row, col), cell);
        Ok(row)
    }

    /// Empty a whole column, returning how many discs each player lost.
    /// The cell at `skip_row` is cleared but not counted.
    pub(crate) fn clear_column(&mut self, col: usize, skip_row: usize) -> PlayerMap<u32> {
        let mut cleared = PlayerMap::with_value(0u32);

        for row in 0..self.rows {
            let pos = CellPos::new(row, col);
            if let Some(owner) = self.get(pos).owner() {
                if row != skip_row {
                    cleared[owner] += 1;
                }
                self.set(pos, Cell::EMPTY);
            }
        }

        cleared
    }

    /// True iff every column's top cell is owned.
    #[must_use]
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_column_playable(col))
    }

    /// True iff no column has an owned cell above an empty one.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (0..self.cols).all(|col| {
            let height = self.lowest_empty_row(col).unwrap_or(self.rows);
            (height..self.rows).all(|row| self.get(CellPos::new(row, col)).is_empty())
        })
    }

    // === Matrix views ===

    /// Owner matrix indexed `[row][col]`, row 0 at the bottom.
    #[must_use]
    pub fn owners(&self) -> Vec<Vec<Option<Player>>> {
        self.matrix(Cell::owner)
    }

    /// Disc-kind matrix indexed `[row][col]`, row 0 at the bottom.
    #[must_use]
    pub fn kinds(&self) -> Vec<Vec<DiscKind>> {
        self.matrix(Cell::kind)
    }

    fn matrix<T>(&self, f: impl Fn(&Cell) -> T) -> Vec<Vec<T>> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| f(&self.get(CellPos::new(row, col))))
                    .collect()
            })
            .collect()
    }

    /// Discs on the board owned by `player`.
    #[must_use]
    pub fn count_owned(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is_owned_by(player)).count()
    }
}

fn check_shape<T>(matrix: &[Vec<T>], expected: (usize, usize)) -> Result<(), EngineError> {
    if matrix.len() != expected.0 {
        return Err(EngineError::DimensionMismatch {
            expected,
            found: (matrix.len(), matrix.first().map_or(0, Vec::len)),
        });
    }
    if let Some(bad) = matrix.iter().find(|row| row.len() != expected.1) {
        return Err(EngineError::DimensionMismatch {
            expected,
            found: (matrix.len(), bad.len()),
        });
    }
    Ok(())
}

impl std::fmt::Display for Grid {
    /// Top row first; `@`/`#` for players one and two, `M`/`B` (`m`/`b`)
    /// for undecayed magnetic and boring discs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                let cell = self.get(CellPos::new(row, col));
                let symbol = match (cell.owner(), cell.kind()) {
                    (None, _) => ' ',
                    (Some(Player::One), DiscKind::Ordinary) => '@',
                    (Some(Player::One), DiscKind::Magnetic) => 'M',
                    (Some(Player::One), DiscKind::Boring) => 'B',
                    (Some(Player::Two), DiscKind::Ordinary) => '#',
                    (Some(Player::Two), DiscKind::Magnetic) => 'm',
                    (Some(Player::Two), DiscKind::Boring) => 'b',
                };
                write!(f, "|{symbol}")?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
