#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Game state types for knight's Isolation.
//!
//! The [types] module holds the capability traits a search needs from a game state (legal
//! actions, successor states, terminal detection, liberties, ...). Searches are written
//! against those traits only, so any board that implements them can be searched.
//!
//! The [board] module holds [board::Isolation], the reference 11x9 knight's Isolation board.

pub mod board;
pub mod types;
