//! Disc effects.
//!
//! Every drop is followed by exactly one resolution of the landed disc:
//! - Ordinary: nothing happens
//! - Magnetic: decays to ordinary and may slide down onto an own disc
//! - Boring: empties the column, refunds the cleared discs, settles at row 0
//!
//! The resolver reports the cells a win check has to look at.

mod resolver;

pub use resolver::{ChangedCells, EffectResolver};
