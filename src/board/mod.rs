//! Board state: disc kinds, cells, the grid, and per-player disc stock.

mod disc;
mod grid;
mod stock;

pub use disc::{Cell, CellPos, DiscKind};
pub use grid::Grid;
pub use stock::{DiscStock, SPECIAL_DISCS};
