//! Disc kinds and cell contents.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// The three kinds of disc a player can drop.
///
/// Only ordinary discs stay on the board as-is. Magnetic and boring discs
/// act once when they land and then decay to ordinary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscKind {
    #[default]
    Ordinary,
    /// Pulls itself down onto the mover's nearest lower ordinary disc.
    Magnetic,
    /// Clears its column, returns the cleared discs, and settles at the bottom.
    Boring,
}

impl DiscKind {
    /// All kinds in search order.
    pub const ALL: [DiscKind; 3] = [DiscKind::Ordinary, DiscKind::Magnetic, DiscKind::Boring];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DiscKind::Ordinary => "ordinary",
            DiscKind::Magnetic => "magnetic",
            DiscKind::Boring => "boring",
        }
    }
}

impl std::fmt::Display for DiscKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of one board cell.
///
/// An empty cell always carries `DiscKind::Ordinary`; use [`Cell::EMPTY`]
/// and [`Cell::disc`] rather than building cells field by field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    owner: Option<Player>,
    kind: DiscKind,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        owner: None,
        kind: DiscKind::Ordinary,
    };

    /// A cell holding `owner`'s disc of the given kind.
    #[must_use]
    pub const fn disc(owner: Player, kind: DiscKind) -> Self {
        Self {
            owner: Some(owner),
            kind,
        }
    }

    /// Build a cell from its two matrix entries, dropping a stale kind on
    /// an empty cell.
    #[must_use]
    pub const fn from_parts(owner: Option<Player>, kind: DiscKind) -> Self {
        match owner {
            Some(p) => Self::disc(p, kind),
            None => Self::EMPTY,
        }
    }

    #[must_use]
    pub const fn owner(&self) -> Option<Player> {
        self.owner
    }

    #[must_use]
    pub const fn kind(&self) -> DiscKind {
        self.kind
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.owner.is_none()
    }

    /// True if `player` owns this cell.
    #[must_use]
    pub fn is_owned_by(&self, player: Player) -> bool {
        self.owner == Some(player)
    }

    /// Same owner, kind decayed to ordinary.
    #[must_use]
    pub const fn decayed(self) -> Self {
        Self::from_parts(self.owner, DiscKind::Ordinary)
    }
}

/// A board coordinate. Row 0 is the bottom row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
