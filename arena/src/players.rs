use std::{fmt, sync::Arc};

use clap::ValueEnum;
use isolation_minimax::{
    agent::{Agent, BoxedAgent},
    alpha_beta::{AgentOptions, MinimaxAgent},
    error::ConfigError,
    opening::greedy_opening,
    sink::ActionSink,
};
use rand::seq::SliceRandom;
use tracing::debug;
use types::{
    board::{Action, Isolation},
    types::{ActionEnumerableGame, PlayerId},
};

/// The agents the arena knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AgentKind {
    /// Alpha-beta search with the configured options
    Minimax,
    /// Always takes the action that leaves it the most room
    Greedy,
    /// Picks any legal action
    Random,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Minimax => "minimax",
            AgentKind::Greedy => "greedy",
            AgentKind::Random => "random",
        };

        f.write_str(name)
    }
}

impl AgentKind {
    /// Build this kind of agent to play as `player`. `options` only matter for minimax.
    pub(crate) fn build(
        self,
        player: PlayerId,
        options: AgentOptions,
    ) -> Result<BoxedAgent<Isolation>, ConfigError> {
        let agent: BoxedAgent<Isolation> = match self {
            AgentKind::Minimax => Arc::new(MinimaxAgent::new(player, options)?),
            AgentKind::Greedy => Arc::new(GreedyAgent { player }),
            AgentKind::Random => Arc::new(RandomAgent),
        };

        Ok(agent)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RandomAgent;

impl<GameType: ActionEnumerableGame> Agent<GameType> for RandomAgent {
    fn choose_action(&self, state: &GameType, sink: &mut dyn ActionSink<GameType::ActionType>) {
        if let Some(&action) = state.actions().choose(&mut rand::thread_rng()) {
            let _ = sink.deposit(action);
        }
    }
}

/// Plays the opening rule for the whole game
#[derive(Debug, Clone, Copy)]
pub(crate) struct GreedyAgent {
    player: PlayerId,
}

impl Agent<Isolation> for GreedyAgent {
    fn choose_action(&self, state: &Isolation, sink: &mut dyn ActionSink<Action>) {
        if let Some(action) = greedy_opening(state, self.player) {
            debug!(player = %self.player, %action, "Greedy agent chose");
            let _ = sink.deposit(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use types::types::{Position, SimulableGame};

    use super::*;

    fn decide(agent: &dyn Agent<Isolation>, state: &Isolation) -> Vec<Action> {
        let mut sink: Vec<Action> = vec![];
        agent.choose_action(state, &mut sink);
        sink
    }

    #[test]
    fn test_random_agent_plays_legal_actions() {
        let state = Isolation::default()
            .result(Action::Place(Position::new(0, 0)))
            .result(Action::Place(Position::new(10, 8)));

        for _ in 0..20 {
            let actions = decide(&RandomAgent, &state);
            assert_eq!(actions.len(), 1);
            assert!(state.actions().contains(&actions[0]));
        }
    }

    #[test]
    fn test_greedy_agent_follows_the_opening_rule() {
        let state = Isolation::default();
        let agent = GreedyAgent {
            player: PlayerId::FIRST,
        };

        assert_eq!(
            decide(&agent, &state),
            vec![Action::Place(Position::new(2, 2))]
        );
    }

    #[test]
    fn test_names_match_the_cli() {
        for kind in AgentKind::value_variants() {
            assert_eq!(
                AgentKind::from_str(&kind.to_string(), false),
                Ok(*kind)
            );
        }
    }
}
