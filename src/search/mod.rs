//! Move search and the computer opponent.

mod moves;
mod opponent;

pub use moves::MoveSearch;
pub use opponent::ComputerOpponent;
