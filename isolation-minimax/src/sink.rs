//! Where an agent deposits the actions it decides on
//!
//! An agent may deposit several actions while it thinks. The caller uses the most recent one,
//! so every deposit has to be a complete decision.
use std::{error::Error, fmt, sync::mpsc};

/// The receiving side of an [ActionSink] went away, nobody will read any more actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkClosed;

impl fmt::Display for SinkClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the action sink is closed")
    }
}

impl Error for SinkClosed {}

/// An append-only destination for actions
pub trait ActionSink<ActionType> {
    /// Append `action` as the current best decision
    fn deposit(&mut self, action: ActionType) -> Result<(), SinkClosed>;
}

impl<ActionType> ActionSink<ActionType> for mpsc::Sender<ActionType> {
    fn deposit(&mut self, action: ActionType) -> Result<(), SinkClosed> {
        self.send(action).map_err(|_| SinkClosed)
    }
}

impl<ActionType> ActionSink<ActionType> for Vec<ActionType> {
    fn deposit(&mut self, action: ActionType) -> Result<(), SinkClosed> {
        self.push(action);
        Ok(())
    }
}
