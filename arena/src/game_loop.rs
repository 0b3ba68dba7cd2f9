use std::time::Duration;

use isolation_minimax::agent::{decide_within, BoxedAgent};
use tracing::{info, warn};
use types::{
    board::{Action, Isolation},
    types::{
        ActionEnumerableGame, ActivePlayerGame, PlayerId, SimulableGame, VictorDeterminableGame,
    },
};

use crate::archive::Outcome;

/// How a match played out
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MatchResult {
    pub winner: PlayerId,
    pub outcome: Outcome,
    pub actions: Vec<Action>,
}

/// Alternate between `agents`, indexed by player, until one of them can't move
///
/// Agents are only ever asked to move in positions that aren't over. An agent that doesn't
/// decide in time or decides on an illegal action forfeits.
pub(crate) fn play_match(
    agents: [BoxedAgent<Isolation>; 2],
    initial: Isolation,
    time_limit: Duration,
) -> MatchResult {
    let mut state = initial;
    let mut actions = vec![];

    loop {
        let player = state.active_player();

        if state.terminal_test() {
            info!(loser = %player, plies = actions.len(), "Isolated, the game is over");

            return MatchResult {
                winner: player.opponent(),
                outcome: Outcome::Isolated,
                actions,
            };
        }

        let agent = agents[player.as_index()].clone();
        let outcome = match decide_within(agent, state, time_limit) {
            None => Outcome::Timeout,
            Some(action) if !state.actions().contains(&action) => Outcome::IllegalAction(action),
            Some(action) => {
                actions.push(action);
                state = state.result(action);
                continue;
            }
        };

        warn!(%player, ?outcome, "Forfeits the game");

        return MatchResult {
            winner: player.opponent(),
            outcome,
            actions,
        };
    }
}
