//! The move engine: owns the board, both stocks and the turn, and runs
//! drop → effect → win check → turn switch.

use tracing::{debug, instrument, trace, warn};

use crate::board::{Cell, CellPos, DiscKind, DiscStock, Grid};
use crate::core::{win_len_for, ConfigError, EngineError, GameConfig, Player, PlayerMap};
use crate::effects::{ChangedCells, EffectResolver};
use crate::rules::{GameResult, GameStatus, WinCheck, WinDetector};

use super::snapshot::Snapshot;
use super::turn::{Move, TurnReport};

/// Rule engine for one game.
///
/// The low-level steps (`drop_disc`, `apply_disc_effect`, `win_check`,
/// `switch_turn`) are public so callers can drive a turn by hand; every
/// successful `drop_disc` must be followed by exactly one
/// `apply_disc_effect` before any win check. `play_move` runs the whole
/// sequence and tracks when the game ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveEngine {
    grid: Grid,
    stocks: PlayerMap<DiscStock>,
    current: Player,
    result: Option<GameResult>,
    detector: WinDetector,
    vs_computer: bool,
}

impl MoveEngine {
    /// Start a game on an empty `rows x cols` board with player one to move.
    ///
    /// # Panics
    ///
    /// If either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            stocks: PlayerMap::with_value(DiscStock::initial(rows, cols)),
            current: Player::One,
            result: None,
            detector: WinDetector::new(win_len_for(rows, cols)),
            vs_computer: false,
        }
    }

    /// Start a game from a validated configuration.
    pub fn with_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.rows, config.cols).with_vs_computer(config.vs_computer))
    }

    /// Mark player two as computer-driven.
    #[must_use]
    pub fn with_vs_computer(mut self, vs_computer: bool) -> Self {
        self.vs_computer = vs_computer;
        self
    }

    pub(super) fn with_win_len(mut self, win_len: usize) -> Self {
        self.detector = WinDetector::new(win_len);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    #[must_use]
    pub fn win_len(&self) -> usize {
        self.detector.win_len()
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[must_use]
    pub fn is_vs_computer(&self) -> bool {
        self.vs_computer
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owner matrix indexed `[row][col]`, row 0 at the bottom.
    #[must_use]
    pub fn owners(&self) -> Vec<Vec<Option<Player>>> {
        self.grid.owners()
    }

    /// Disc-kind matrix indexed `[row][col]`, row 0 at the bottom.
    #[must_use]
    pub fn kinds(&self) -> Vec<Vec<DiscKind>> {
        self.grid.kinds()
    }

    /// A player's remaining discs.
    #[must_use]
    pub fn stock(&self, player: Player) -> DiscStock {
        self.stocks[player]
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.result {
            Some(result) => GameStatus::Terminal(result),
            None => GameStatus::AwaitingMove(self.current),
        }
    }

    #[must_use]
    pub fn is_column_playable(&self, col: usize) -> bool {
        self.grid.is_column_playable(col)
    }

    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.grid.is_full()
    }

    /// True iff `player` could drop something if it were their turn: a
    /// column is open and they hold at least one disc.
    fn has_legal_move(&self, player: Player) -> bool {
        !self.grid.is_full() && self.stocks[player].total() > 0
    }

    /// Every (column, kind) pair the current player could drop right now,
    /// columns ascending, kinds in search order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let kinds = self.stocks[self.current].available_kinds();
        self.grid
            .playable_columns()
            .flat_map(|col| kinds.iter().map(move |&kind| Move::new(col, kind)))
            .collect()
    }

    // === Turn steps ===

    /// Drop one of the current player's discs into `col`, returning the
    /// landing row. No effect is applied and the turn does not pass.
    ///
    /// On error nothing has changed.
    pub fn drop_disc(&mut self, col: usize, kind: DiscKind) -> Result<usize, EngineError> {
        let cols = self.cols();
        if col >= cols {
            return Err(EngineError::InvalidColumn { col, cols });
        }
        if !self.grid.is_column_playable(col) {
            return Err(EngineError::ColumnFull { col });
        }
        if !self.stocks[self.current].has(kind) {
            return Err(EngineError::OutOfStock {
                player: self.current,
                kind,
            });
        }

        let row = self.grid.drop_disc(col, Cell::disc(self.current, kind))?;
        self.stocks[self.current].consume(kind);
        Ok(row)
    }

    /// Resolve the effect of the disc just dropped at `(row, col)`.
    ///
    /// Returns the cells to win-check; empty if the cell is off the board
    /// or unowned.
    pub fn apply_disc_effect(&mut self, row: usize, col: usize) -> ChangedCells {
        if row >= self.rows() || col >= self.cols() {
            return ChangedCells::new();
        }
        EffectResolver::resolve(&mut self.grid, &mut self.stocks, CellPos::new(row, col))
    }

    /// True iff the owner of `(row, col)` has a winning line through it.
    #[must_use]
    pub fn check_cell_win(&self, row: usize, col: usize) -> bool {
        row < self.rows()
            && col < self.cols()
            && self.detector.check_cell_win(&self.grid, CellPos::new(row, col))
    }

    /// Check the cells changed by the current player's move for wins.
    #[must_use]
    pub fn win_check(&self, changed: &[CellPos]) -> WinCheck {
        self.detector.win_check(&self.grid, changed, self.current)
    }

    /// Pass the turn to the other player.
    pub fn switch_turn(&mut self) {
        self.current = self.current.other();
    }

    // === Full turn ===

    /// Play a complete move for the current player: drop, resolve the
    /// effect, check for lines, then either end the game or pass the turn.
    ///
    /// With no line completed, the game is drawn when the next player has
    /// nothing to play: the board is full or their stock is empty.
    #[instrument(level = "debug", skip(self), fields(player = %self.current))]
    pub fn play_move(&mut self, col: usize, kind: DiscKind) -> Result<TurnReport, EngineError> {
        if self.result.is_some() {
            return Err(EngineError::GameOver);
        }

        let mover = self.current;
        let row = self.drop_disc(col, kind)?;
        let changed = self.apply_disc_effect(row, col);
        let wins = self.win_check(&changed);

        self.result = match (wins.mover_won, wins.opponent_won) {
            (true, false) => Some(GameResult::Winner(mover)),
            (false, true) => Some(GameResult::Winner(mover.other())),
            (true, true) => Some(GameResult::DoubleWin),
            (false, false) if !self.has_legal_move(mover.other()) => Some(GameResult::Draw),
            (false, false) => None,
        };
        if self.result.is_none() {
            self.switch_turn();
        }

        let status = self.status();
        let longest = changed
            .iter()
            .map(|&pos| self.detector.longest_run(&self.grid, pos))
            .max()
            .unwrap_or(0);
        debug!(row, changed = changed.len(), longest, ?status, "move played");

        Ok(TurnReport {
            mover,
            landed: CellPos::new(row, col),
            changed,
            wins,
            status,
        })
    }

    // === Snapshot / rollback ===

    /// Capture the full mutable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            stocks: self.stocks,
            current: self.current,
            result: self.result,
        }
    }

    /// Restore the state captured by `snapshot`, discarding it.
    pub fn rollback(&mut self, snapshot: Snapshot) {
        self.grid = snapshot.grid;
        self.stocks = snapshot.stocks;
        self.current = snapshot.current;
        self.result = snapshot.result;
    }

    /// Run `f` against the engine and undo everything it did.
    pub fn probe<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let snapshot = self.snapshot();
        let out = f(self);
        self.rollback(snapshot);
        trace!("probe rolled back");
        out
    }

    // === Restore ===

    /// Replace the whole mutable state with previously read values.
    ///
    /// The matrices must match this engine's board size. Kinds on empty
    /// cells are reset to ordinary. The game is treated as in progress.
    pub fn restore_state(
        &mut self,
        owners: &[Vec<Option<Player>>],
        kinds: &[Vec<DiscKind>],
        current: Player,
        stock_p1: DiscStock,
        stock_p2: DiscStock,
    ) -> Result<(), EngineError> {
        let expected = (self.rows(), self.cols());
        let found = (owners.len(), owners.first().map_or(0, Vec::len));
        if found != expected {
            return Err(EngineError::DimensionMismatch { expected, found });
        }
        let grid = Grid::from_matrices(owners, kinds)?;

        let stale = owners
            .iter()
            .flatten()
            .zip(kinds.iter().flatten())
            .filter(|(owner, kind)| owner.is_none() && **kind != DiscKind::Ordinary)
            .count();
        if stale > 0 {
            warn!(stale, "restored board had kinds on empty cells; reset to ordinary");
        }

        self.grid = grid;
        self.stocks = PlayerMap::from_pair(stock_p1, stock_p2);
        self.current = current;
        self.result = None;
        debug!(rows = expected.0, cols = expected.1, %current, "state restored");
        Ok(())
    }
}
