use std::path::PathBuf;

use color_eyre::eyre::Result;

use crate::archive::read_game;

#[derive(clap::Args, Debug)]
pub(crate) struct Replay {
    /// Archive written by `play`
    #[clap(short, long, value_parser)]
    archive: PathBuf,

    /// Which match in the archive, counting from 0
    #[clap(short, long, value_parser, default_value_t = 0)]
    game: usize,
}

impl Replay {
    pub(crate) fn run(self) -> Result<()> {
        let record = read_game(&self.archive, self.game)?;
        let states = record.states()?;

        println!(
            "{} (Player 1) vs {} (Player 2) on a {}x{} board",
            record.players[0], record.players[1], record.width, record.height
        );
        println!();
        println!("Ply 0");
        println!("{}", states[0]);

        for (ply, (action, state)) in record.actions.iter().zip(&states[1..]).enumerate() {
            println!("Ply {}: {action}", ply + 1);
            println!("{state}");
        }

        println!(
            "{} won, {:?}",
            record.players[record.winner.as_index()],
            record.outcome
        );

        Ok(())
    }
}
