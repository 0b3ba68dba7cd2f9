//! The interface between a game loop and the players it runs
use std::{
    sync::{
        mpsc::{self, RecvTimeoutError},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use tracing::warn;
use types::types::ActionEnumerableGame;

use crate::sink::ActionSink;

/// Anything that can pick an action for the player to move
pub trait Agent<GameType: ActionEnumerableGame> {
    /// Decide on an action for the active player of `state`.
    ///
    /// The decision is delivered through `sink`, possibly several times as better actions are
    /// found. `state` must not be terminal.
    fn choose_action(&self, state: &GameType, sink: &mut dyn ActionSink<GameType::ActionType>);
}

/// An [Agent] that can be handed to another thread
pub type BoxedAgent<GameType> = Arc<dyn Agent<GameType> + Send + Sync>;

/// Run `agent` on `state` for at most `time_limit` and return its latest decision
///
/// The agent runs on its own thread and deposits into a channel. We keep the latest action
/// until the agent finishes or the time runs out, whichever comes first. Dropping the receiver
/// closes the agent's sink, which is how a still running agent learns to stop.
///
/// The agent's thread is joined before returning, so it never keeps thinking into somebody
/// else's turn. An agent that is late only notices at its next deposit, which is how long this
/// can run past `time_limit`.
///
/// Returns `None` if the agent didn't deposit anything in time.
pub fn decide_within<GameType>(
    agent: BoxedAgent<GameType>,
    state: GameType,
    time_limit: Duration,
) -> Option<GameType::ActionType>
where
    GameType: ActionEnumerableGame + Send + 'static,
    GameType::ActionType: Send + 'static,
{
    let started_at = Instant::now();
    let (to_main_thread, from_agent_thread) = mpsc::channel::<GameType::ActionType>();

    let worker = thread::spawn(move || {
        let mut sink = to_main_thread;
        agent.choose_action(&state, &mut sink);
    });

    let mut current = None;

    loop {
        let remaining = time_limit.saturating_sub(started_at.elapsed());
        if remaining.is_zero() {
            break;
        }

        match from_agent_thread.recv_timeout(remaining) {
            Ok(action) => current = Some(action),
            Err(RecvTimeoutError::Timeout) => break,
            // The agent is done thinking
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(from_agent_thread);
    if worker.join().is_err() {
        warn!("The agent panicked while deciding");
    }

    if current.is_none() {
        warn!(?time_limit, "Agent didn't decide on an action in time");
    }

    current
}
