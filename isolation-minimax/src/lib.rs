#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements a minimax agent for knight's Isolation. The search is written against
//! the capability traits from the `types` crate, and scores the positions at its depth limit
//! with one of the heuristics in [heuristic].
//!
//! An [agent::Agent] never returns its decision. It deposits actions into an [sink::ActionSink]
//! as it finds them, so whoever is waiting on it can stop listening at any time and still use
//! the best action found so far.

pub mod agent;
pub mod alpha_beta;
pub mod error;
pub mod heuristic;
pub mod opening;
pub mod sink;
