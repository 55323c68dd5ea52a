//! Move processing: the sowing walk and the sowing pass.
//!
//! The engine is the single place that mutates the board. It is driven by
//! [`crate::game::Game`], which owns legality checking and turn transitions;
//! the pure walk in [`cursor`] is exposed for inspection and testing.

pub mod cursor;
mod sow;

pub use cursor::{next_slot, Slot};

pub(crate) use sow::sow;
