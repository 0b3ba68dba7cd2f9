//! Errors raised while configuring an agent
use std::{error::Error, fmt};

/// A [crate::alpha_beta::MinimaxAgent] was configured with something it can't run with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The named heuristic doesn't exist
    UnknownHeuristic(String),
    /// A search has to look at least one ply ahead
    ZeroSearchDepth,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownHeuristic(name) => write!(
                f,
                "unknown heuristic {name:?}, expected one of \"baseline\" or \"custom\""
            ),
            ConfigError::ZeroSearchDepth => write!(f, "the search depth must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
