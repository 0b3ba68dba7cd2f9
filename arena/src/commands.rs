pub mod play;
pub mod replay;
pub mod solve;

use play::Play;
use replay::Replay;
use solve::Solve;

use clap::Subcommand;
use color_eyre::eyre::Result;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Play matches between two agents
    Play(Play),
    /// Print every position of an archived match
    Replay(Replay),
    /// Search one position of an archived match and print the game tree
    Solve(Solve),
}

impl Command {
    pub fn run(self) -> Result<()> {
        match self {
            Command::Play(p) => p.run()?,
            Command::Replay(r) => r.run()?,
            Command::Solve(s) => s.run()?,
        }

        Ok(())
    }
}
