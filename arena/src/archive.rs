use std::{
    fs::{read_to_string, OpenOptions},
    io::Write,
    path::Path,
};

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};
use types::{
    board::{Action, Isolation},
    types::{ActionEnumerableGame, PlayerId, SimulableGame},
};

/// Why a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Outcome {
    /// The loser had no legal move left
    Isolated,
    /// The loser didn't decide on an action in time
    Timeout,
    /// The loser decided on an action that isn't legal
    IllegalAction(Action),
}

/// One finished match, stored as a single line of JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct GameRecord {
    pub width: i32,
    pub height: i32,
    /// Names of the agents, indexed by player
    pub players: [String; 2],
    /// Every legal action that was played, in order
    pub actions: Vec<Action>,
    pub winner: PlayerId,
    pub outcome: Outcome,
}

impl GameRecord {
    /// Every position of the match, starting with the empty board
    pub fn states(&self) -> Result<Vec<Isolation>> {
        let mut state = Isolation::new(self.width, self.height)?;
        let mut states = Vec::with_capacity(self.actions.len() + 1);
        states.push(state);

        for (ply, &action) in self.actions.iter().enumerate() {
            if !state.actions().contains(&action) {
                return Err(eyre!("{action} at ply {ply} is not a legal action"));
            }

            state = state.result(action);
            states.push(state);
        }

        Ok(states)
    }
}

/// Add `record` to the end of the archive at `path`, creating it if needed
pub(crate) fn append(path: &Path, record: &GameRecord) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Couldn't open archive {}", path.display()))?;

    let line = serde_json::to_string(record)?;
    writeln!(file, "{line}")?;

    Ok(())
}

/// Read the `index`th match, counting from 0, from the archive at `path`
pub(crate) fn read_game(path: &Path, index: usize) -> Result<GameRecord> {
    let contents = read_to_string(path)
        .wrap_err_with(|| format!("Couldn't read archive {}", path.display()))?;

    let line = contents
        .lines()
        .filter(|l| !l.trim().is_empty())
        .nth(index)
        .ok_or_else(|| eyre!("The archive {} has no game {index}", path.display()))?;

    serde_json::from_str(line).wrap_err_with(|| format!("Game {index} is not a valid record"))
}
