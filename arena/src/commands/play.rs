use std::{path::PathBuf, str::FromStr, time::Duration};

use color_eyre::eyre::{Result, WrapErr};
use colored::Colorize;
use isolation_minimax::{
    alpha_beta::{AgentOptions, MoveOrdering},
    heuristic::Heuristic,
};
use tracing::info_span;
use types::{
    board::{Isolation, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    types::PlayerId,
};

use crate::{
    archive::{self, GameRecord},
    game_loop::play_match,
    players::AgentKind,
};

#[derive(clap::Args, Debug)]
pub(crate) struct Play {
    /// The first agent
    #[clap(long, value_enum, default_value_t = AgentKind::Minimax)]
    one: AgentKind,

    /// The second agent
    #[clap(long, value_enum, default_value_t = AgentKind::Random)]
    two: AgentKind,

    /// Number of matches to play. The agents take turns moving first
    #[clap(short, long, value_parser, default_value_t = 10)]
    rounds: usize,

    /// How long an agent may think about one move
    #[clap(long, value_parser, default_value_t = 150)]
    time_limit_ms: u64,

    /// Evaluation used by minimax agents, `baseline` or `custom`
    #[clap(long, value_parser = Heuristic::from_str, default_value_t = Heuristic::Custom)]
    heuristic: Heuristic,

    /// How many plies minimax agents search ahead
    #[clap(short, long, value_parser, default_value_t = 4)]
    depth: usize,

    /// Minimax agents play greedily while the ply count is at most this
    #[clap(long, value_parser, default_value_t = 2)]
    opening_plies: usize,

    /// Search straight to the full depth instead of deepening one ply at a time
    #[clap(long)]
    no_deepening: bool,

    /// Plain minimax without alpha-beta pruning
    #[clap(long)]
    no_prune: bool,

    /// Order moves by the previous iteration of deepening
    #[clap(long)]
    best_first: bool,

    /// Rank quicker wins and slower losses higher instead of taking the first one found
    #[clap(long)]
    prefer_quick_wins: bool,

    #[clap(long, value_parser, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    #[clap(long, value_parser, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Append every finished match to this JSON lines file
    #[clap(short, long, value_parser)]
    archive: Option<PathBuf>,
}

impl Play {
    fn agent_options(&self) -> AgentOptions {
        AgentOptions {
            heuristic: self.heuristic,
            search_depth: self.depth,
            opening_plies: self.opening_plies,
            iterative_deepening: !self.no_deepening,
            alpha_beta_prune: !self.no_prune,
            move_ordering: if self.best_first {
                MoveOrdering::BestFirst
            } else {
                MoveOrdering::InOrder
            },
            prefer_quick_wins: self.prefer_quick_wins,
        }
    }

    pub(crate) fn run(self) -> Result<()> {
        let options = self.agent_options();
        let initial = Isolation::new(self.width, self.height)?;
        let time_limit = Duration::from_millis(self.time_limit_ms);
        let kinds = [self.one, self.two];

        let mut wins = [0usize; 2];

        for round in 0..self.rounds {
            // Which of `kinds` moves first this round
            let first = round % 2;
            let seats = [first, 1 - first];

            let agents = [
                kinds[seats[0]]
                    .build(PlayerId::FIRST, options)
                    .wrap_err("Couldn't build the first player")?,
                kinds[seats[1]]
                    .build(PlayerId::SECOND, options)
                    .wrap_err("Couldn't build the second player")?,
            ];

            let result = info_span!(
                "match",
                round,
                first = %kinds[seats[0]],
                second = %kinds[seats[1]],
            )
            .in_scope(|| play_match(agents, initial, time_limit));

            let winning_seat = seats[result.winner.as_index()];
            wins[winning_seat] += 1;

            println!(
                "Round {round}: {} ({}) beat {} after {} plies, {:?}",
                kinds[winning_seat].to_string().green(),
                result.winner,
                kinds[1 - winning_seat].to_string().red(),
                result.actions.len(),
                result.outcome,
            );

            if let Some(path) = &self.archive {
                let record = GameRecord {
                    width: self.width,
                    height: self.height,
                    players: [kinds[seats[0]].to_string(), kinds[seats[1]].to_string()],
                    actions: result.actions,
                    winner: result.winner,
                    outcome: result.outcome,
                };

                archive::append(path, &record)?;
            }
        }

        println!();
        println!(
            "{} (one) won {} of {} matches, {} (two) won {}",
            self.one, wins[0], self.rounds, self.two, wins[1]
        );

        Ok(())
    }
}
