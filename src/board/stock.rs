//! Per-player disc inventory.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::DiscKind;

/// Special discs each player starts with, per special kind.
pub const SPECIAL_DISCS: u32 = 2;

/// How many discs of each kind a player has left to drop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscStock {
    pub ordinary: u32,
    pub magnetic: u32,
    pub boring: u32,
}

impl DiscStock {
    #[must_use]
    pub const fn new(ordinary: u32, magnetic: u32, boring: u32) -> Self {
        Self {
            ordinary,
            magnetic,
            boring,
        }
    }

    /// Starting allocation for a `rows x cols` board: half the cells,
    /// two of them magnetic and two boring.
    #[must_use]
    pub fn initial(rows: usize, cols: usize) -> Self {
        let half = u32::try_from(rows * cols / 2).unwrap_or(u32::MAX);
        Self {
            ordinary: half.saturating_sub(2 * SPECIAL_DISCS),
            magnetic: SPECIAL_DISCS,
            boring: SPECIAL_DISCS,
        }
    }

    #[must_use]
    pub const fn count(&self, kind: DiscKind) -> u32 {
        match kind {
            DiscKind::Ordinary => self.ordinary,
            DiscKind::Magnetic => self.magnetic,
            DiscKind::Boring => self.boring,
        }
    }

    #[must_use]
    pub const fn has(&self, kind: DiscKind) -> bool {
        self.count(kind) > 0
    }

    /// Take one disc of `kind`. Returns false, leaving the stock untouched,
    /// if none are left.
    pub fn consume(&mut self, kind: DiscKind) -> bool {
        let slot = match kind {
            DiscKind::Ordinary => &mut self.ordinary,
            DiscKind::Magnetic => &mut self.magnetic,
            DiscKind::Boring => &mut self.boring,
        };
        match slot.checked_sub(1) {
            Some(left) => {
                *slot = left;
                true
            }
            None => false,
        }
    }

    /// Credit discs cleared off the board. They always come back as
    /// ordinary, whatever kind they were dropped as.
    pub fn return_discs(&mut self, count: u32) {
        self.ordinary = self.ordinary.saturating_add(count);
    }

    /// Kinds with at least one disc left, in search order.
    #[must_use]
    pub fn available_kinds(&self) -> SmallVec<[DiscKind; 3]> {
        DiscKind::ALL.into_iter().filter(|&k| self.has(k)).collect()
    }

    /// Discs left across all kinds.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.ordinary
            .saturating_add(self.magnetic)
            .saturating_add(self.boring)
    }
}
