use std::{path::PathBuf, str::FromStr};

use color_eyre::eyre::{eyre, Result};
use colored::Colorize;
use isolation_minimax::{
    alpha_beta::{AgentOptions, MinMaxReturn, MinimaxAgent, WrappedScore},
    heuristic::{Evaluation, Heuristic},
};
use itertools::Itertools;
use types::{
    board::Action,
    types::{ActivePlayerGame, PlayerId, VictorDeterminableGame},
};

use crate::archive::read_game;

#[derive(clap::Args, Debug)]
pub(crate) struct Solve {
    /// Archive written by `play`
    #[clap(short, long, value_parser)]
    archive: PathBuf,

    /// Which match in the archive, counting from 0
    #[clap(short, long, value_parser, default_value_t = 0)]
    game: usize,

    /// Ply to analyse. Uses the last position of the game if not specified
    #[clap(short, long, value_parser)]
    ply: Option<usize>,

    /// Evaluation to use at the depth limit, `baseline` or `custom`
    #[clap(long, value_parser = Heuristic::from_str, default_value_t = Heuristic::Custom)]
    heuristic: Heuristic,

    /// How many plies to search ahead
    #[clap(short, long, value_parser, default_value_t = 4)]
    depth: usize,

    /// Also print the whole searched tree
    #[clap(long)]
    tree: bool,
}

impl Solve {
    pub(crate) fn run(self) -> Result<()> {
        let record = read_game(&self.archive, self.game)?;
        let states = record.states()?;

        let ply = self.ply.unwrap_or(states.len() - 1);
        let state = states.get(ply).ok_or_else(|| {
            eyre!(
                "Game {} only has plies 0 through {}",
                self.game,
                states.len() - 1
            )
        })?;

        println!("Ply {ply}");
        println!("{state}");

        let player = state.active_player();
        if state.terminal_test() {
            println!("{player} has no moves left, the game is over");
            return Ok(());
        }

        let agent = MinimaxAgent::new(
            player,
            AgentOptions {
                heuristic: self.heuristic,
                search_depth: self.depth,
                ..Default::default()
            },
        )?;

        let (depth, result) = agent
            .deepened_minimax(state, &mut Vec::<Action>::new())
            .ok_or_else(|| eyre!("There was nothing to search"))?;

        let MinMaxReturn::Node { options, .. } = &result else {
            return Err(eyre!("The search didn't expand ply {ply}"));
        };

        let moves_scoring = |f: fn(&WrappedScore<Evaluation>) -> bool| {
            options
                .iter()
                .filter(|(_, r)| f(r.score()))
                .map(|(a, _)| *a)
                .collect_vec()
        };

        match result.score() {
            WrappedScore::Win(_) => {
                let winning = moves_scoring(|s| matches!(s, WrappedScore::Win(_)));
                println!(
                    "{}",
                    format!("{player} can force a win with {}", winning.iter().join(", ")).green()
                );
            }
            WrappedScore::Lose(_) | WrappedScore::Tie(_) => {
                println!(
                    "{}",
                    format!("{player} loses against best play within {depth} plies").red()
                );
            }
            WrappedScore::Scored(_) => {
                let safe = moves_scoring(|s| matches!(s, WrappedScore::Scored(_)));
                println!(
                    "At ply {ply} the safe actions for {player} were {}",
                    safe.iter().join(", ")
                );
            }
        }

        print_route(&result, depth, player);

        if self.tree {
            if let Some(tree) = result.to_text_tree() {
                println!("{tree}");
            }
        }

        Ok(())
    }
}

fn print_route(result: &MinMaxReturn<Action, Evaluation>, depth: usize, player: PlayerId) {
    let route = result.chosen_route();

    println!(
        "Searched {depth} plies, {} nodes. Best for {player}: {:?} scoring {:?}",
        result.node_count(),
        result.best_action(),
        result.score(),
    );
    for (moving, action) in route {
        println!("  {moving}: {action}");
    }
    println!()
}
