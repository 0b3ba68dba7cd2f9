use std::fmt::Debug;

use derivative::Derivative;
use itertools::Itertools;
use tracing::{debug, info, info_span, warn};
use types::types::{
    ActivePlayerGame, IsolationGame, PlayerId, SimulableGame, VictorDeterminableGame,
};

use crate::{
    agent::Agent,
    error::ConfigError,
    heuristic::{Evaluation, Heuristic, HeuristicScorer},
    opening::greedy_opening,
    sink::ActionSink,
};

use super::{
    move_ordering::pair_with_previous, MinMaxReturn, MoveOrdering, Scorable, WrappedScorable,
    WrappedScore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Optional properties that can be defined for a [MinimaxAgent]
///
/// The defaults (as implemented by [Default]) are as follows:
/// ```
/// use isolation_minimax::alpha_beta::{AgentOptions, MoveOrdering};
/// use isolation_minimax::heuristic::Heuristic;
///
/// let defaults: AgentOptions = Default::default();
///
/// assert_eq!(defaults.heuristic, Heuristic::Custom);
/// assert_eq!(defaults.search_depth, 4);
/// assert_eq!(defaults.opening_plies, 2);
/// assert!(defaults.iterative_deepening);
/// assert!(defaults.alpha_beta_prune);
/// assert_eq!(defaults.move_ordering, MoveOrdering::InOrder);
/// assert!(!defaults.prefer_quick_wins);
/// ```
pub struct AgentOptions {
    /// How positions at the depth limit are scored
    pub heuristic: Heuristic,
    /// How many plies ahead we search
    ///
    /// Defaults to 4
    pub search_depth: usize,
    /// While the ply count is at most this we play the greedy opening instead of searching
    ///
    /// Defaults to 2
    pub opening_plies: usize,
    /// Search depth 1, then 2, and so on up to [AgentOptions::search_depth], depositing the best
    /// action after every depth. When false we only search [AgentOptions::search_depth] and
    /// deposit once at the end
    pub iterative_deepening: bool,
    /// Turn alpha-beta pruning off to get plain minimax. Only useful to compare the two, the
    /// chosen action is the same either way
    pub alpha_beta_prune: bool,
    /// How moves are ordered in the tree search
    pub move_ordering: MoveOrdering,
    /// Rank a win found in fewer plies above one found in more, and a loss found in more plies
    /// above one found in fewer. When false all wins are equal, so the first winning action in
    /// enumeration order is chosen
    pub prefer_quick_wins: bool,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Custom,
            search_depth: 4,
            opening_plies: 2,
            iterative_deepening: true,
            alpha_beta_prune: true,
            move_ordering: MoveOrdering::InOrder,
            prefer_quick_wins: false,
        }
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
/// Everything the recursive search needs to know that doesn't change from node to node
pub struct SearchContext<'scorer, ScorableType> {
    /// The player we are searching for. Nodes where they move are maximizing nodes
    pub player: PlayerId,
    /// Scores nodes at the depth limit
    #[derivative(Debug = "ignore")]
    pub scorer: &'scorer ScorableType,
    /// Whether to cut off branches that can't change the result
    pub alpha_beta_prune: bool,
    /// How to order actions below the root
    pub move_ordering: MoveOrdering,
    /// See [AgentOptions::prefer_quick_wins]
    pub prefer_quick_wins: bool,
}

impl<'scorer, GameType, ScoreType, ScorableType> WrappedScorable<GameType, ScoreType>
    for SearchContext<'scorer, ScorableType>
where
    GameType: VictorDeterminableGame,
    ScoreType: Debug + PartialOrd + Ord + Copy,
    ScorableType: Scorable<GameType, ScoreType>,
{
    fn score(&self, node: &GameType) -> ScoreType {
        self.scorer.score(node)
    }

    fn player(&self) -> PlayerId {
        self.player
    }

    fn rank_terminals_by_depth(&self) -> bool {
        self.prefer_quick_wins
    }
}

/// Sort options best first for the moving player, keeping enumeration order among equal scores
fn sort_options<ActionType, ScoreType>(
    options: &mut [(ActionType, MinMaxReturn<ActionType, ScoreType>)],
    is_maximizing: bool,
) where
    ActionType: Copy + Debug,
    ScoreType: Copy + Ord + Debug,
{
    if is_maximizing {
        options.sort_by(|(_, a), (_, b)| b.score().cmp(a.score()));
    } else {
        options.sort_by(|(_, a), (_, b)| a.score().cmp(b.score()));
    }
}

/// Depth limited minimax with alpha-beta pruning below the root
///
/// `depth` is how many plies below the root `node` is and `remaining_depth` how many more plies
/// we may look ahead. A node is a leaf when the game is over or `remaining_depth` is 0.
///
/// At a maximizing node we stop as soon as a child scores at least `beta`, at a minimizing node
/// as soon as one scores at most `alpha`. The returned score in that case is the score of that
/// child, which is enough for the parent to know this branch won't be picked.
#[allow(clippy::too_many_arguments)]
pub fn minimax<GameType, ScoreType, ScorableType>(
    context: &SearchContext<ScorableType>,
    node: &GameType,
    depth: i64,
    remaining_depth: usize,
    alpha: WrappedScore<ScoreType>,
    beta: WrappedScore<ScoreType>,
    previous_return: Option<MinMaxReturn<GameType::ActionType, ScoreType>>,
) -> MinMaxReturn<GameType::ActionType, ScoreType>
where
    GameType: ActivePlayerGame + SimulableGame + VictorDeterminableGame,
    ScoreType: Copy + Ord + Debug,
    ScorableType: Scorable<GameType, ScoreType>,
{
    let mut alpha = alpha;
    let mut beta = beta;

    if let Some(score) = context.wrapped_score(node, depth, remaining_depth) {
        return MinMaxReturn::Leaf { score };
    }

    let moving_player = node.active_player();
    let is_maximizing = moving_player == context.player;

    let ordered = context
        .move_ordering
        .order_moves(previous_return, node.actions());

    let mut options: Vec<(GameType::ActionType, MinMaxReturn<_, _>)> =
        Vec::with_capacity(ordered.len());
    let mut alpha_beta_cutoff = false;

    for (action, previous_return) in ordered {
        let next_return = minimax(
            context,
            &node.result(action),
            depth + 1,
            remaining_depth - 1,
            alpha,
            beta,
            previous_return,
        );
        let value = *next_return.score();
        options.push((action, next_return));

        if !context.alpha_beta_prune {
            continue;
        }

        if is_maximizing {
            if value >= beta {
                alpha_beta_cutoff = true;
                break;
            }

            alpha = std::cmp::max(alpha, value);
        } else {
            if value <= alpha {
                alpha_beta_cutoff = true;
                break;
            }

            beta = std::cmp::min(beta, value);
        }
    }

    sort_options(&mut options, is_maximizing);

    let Some(score) = options.first().map(|(_, r)| *r.score()) else {
        panic!("A state that isn't terminal must have at least one legal action");
    };

    MinMaxReturn::Node {
        options,
        is_maximizing,
        moving_player,
        score,
        alpha_beta_cutoff,
    }
}

/// Search every root action to `max_depth` plies and rank them
///
/// Each root action gets its own full alpha-beta window, so every root option carries its exact
/// minimax value and the options can be compared with each other. Root actions are searched in
/// enumeration order and the first of several equally good actions is chosen.
pub fn search_root<GameType, ScoreType, ScorableType>(
    context: &SearchContext<ScorableType>,
    game: &GameType,
    max_depth: usize,
    previous_return: Option<MinMaxReturn<GameType::ActionType, ScoreType>>,
) -> MinMaxReturn<GameType::ActionType, ScoreType>
where
    GameType: ActivePlayerGame + SimulableGame + VictorDeterminableGame,
    ScoreType: Copy + Ord + Debug,
    ScorableType: Scorable<GameType, ScoreType>,
{
    if let Some(score) = context.wrapped_score(game, 0, max_depth) {
        return MinMaxReturn::Leaf { score };
    }

    let moving_player = game.active_player();
    let is_maximizing = moving_player == context.player;

    let mut options: Vec<_> = pair_with_previous(previous_return, game.actions())
        .into_iter()
        .map(|(action, previous_return)| {
            let next_return = minimax(
                context,
                &game.result(action),
                1,
                max_depth - 1,
                WrappedScore::<ScoreType>::worst_possible_score(),
                WrappedScore::<ScoreType>::best_possible_score(),
                previous_return,
            );

            (action, next_return)
        })
        .collect();

    sort_options(&mut options, is_maximizing);

    let Some(score) = options.first().map(|(_, r)| *r.score()) else {
        panic!("A state that isn't terminal must have at least one legal action");
    };

    MinMaxReturn::Node {
        options,
        is_maximizing,
        moving_player,
        score,
        alpha_beta_cutoff: false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A player that searches the game tree with depth limited minimax and alpha-beta pruning
///
/// It also outputs traces using the [tracing] crate.
pub struct MinimaxAgent {
    player: PlayerId,
    options: AgentOptions,
}

impl MinimaxAgent {
    /// Construct a new `MinimaxAgent` playing as `player`
    ///
    /// [AgentOptions] implements [Default] so you can override specific options and rely on
    /// defaults for the rest.
    ///
    /// ```rust
    /// use isolation_minimax::alpha_beta::{AgentOptions, MinimaxAgent};
    /// use isolation_minimax::heuristic::Heuristic;
    /// use types::types::PlayerId;
    ///
    /// let options = AgentOptions {
    ///     heuristic: Heuristic::Baseline,
    ///     search_depth: 3,
    ///     ..Default::default()
    /// };
    ///
    /// let agent = MinimaxAgent::new(PlayerId::FIRST, options).unwrap();
    /// assert_eq!(agent.options().search_depth, 3);
    ///
    /// let too_shallow = AgentOptions {
    ///     search_depth: 0,
    ///     ..Default::default()
    /// };
    /// assert!(MinimaxAgent::new(PlayerId::FIRST, too_shallow).is_err());
    /// ```
    pub fn new(player: PlayerId, options: AgentOptions) -> Result<Self, ConfigError> {
        if options.search_depth == 0 {
            return Err(ConfigError::ZeroSearchDepth);
        }

        Ok(Self { player, options })
    }

    /// Construct a new `MinimaxAgent` with the default [AgentOptions]
    pub fn with_defaults(player: PlayerId) -> Self {
        Self {
            player,
            options: Default::default(),
        }
    }

    /// The player we choose actions for
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The options this agent was built with
    pub fn options(&self) -> &AgentOptions {
        &self.options
    }

    fn scorer(&self) -> HeuristicScorer {
        self.options.heuristic.scorer(self.player)
    }

    fn context<'scorer>(
        &self,
        scorer: &'scorer HeuristicScorer,
    ) -> SearchContext<'scorer, HeuristicScorer> {
        SearchContext {
            player: self.player,
            scorer,
            alpha_beta_prune: self.options.alpha_beta_prune,
            move_ordering: self.options.move_ordering,
            prefer_quick_wins: self.options.prefer_quick_wins,
        }
    }

    /// This runs the minimax algorithm to the specified number of plies, returning a struct that
    /// contains all the information about the 'tree' we searched.
    ///
    /// The return value is a recursive struct that tells you the score of the current node, and
    /// the score of all its children nodes.
    ///
    /// This is also used as a benchmark entry point
    pub fn single_minimax<GameType>(
        &self,
        game: &GameType,
        max_depth: usize,
    ) -> MinMaxReturn<GameType::ActionType, Evaluation>
    where
        GameType: IsolationGame,
    {
        let scorer = self.scorer();
        search_root(&self.context(&scorer), game, max_depth, None)
    }

    /// This will do an iterative deepening minimax up to [AgentOptions::search_depth] plies.
    /// Iterative deepening means we first search 1 ply deep, deposit the best action into `sink`,
    /// then search 2 plies deep and deposit again, and so on. A caller that stops listening
    /// early still has the best action of the deepest finished search.
    ///
    /// With [MoveOrdering::BestFirst] each search orders its interior nodes by the scores of the
    /// previous one, which lets alpha-beta prune more.
    ///
    /// We stop before [AgentOptions::search_depth] when the outcome of the game is already
    /// decided within the searched depth, or when `sink` is closed. Without
    /// [AgentOptions::prefer_quick_wins] any win or loss at the root is decided.
    ///
    /// Returns the deepest finished search and its depth, or `None` if `game` is already over.
    pub fn deepened_minimax<GameType>(
        &self,
        game: &GameType,
        sink: &mut dyn ActionSink<GameType::ActionType>,
    ) -> Option<(usize, MinMaxReturn<GameType::ActionType, Evaluation>)>
    where
        GameType: IsolationGame,
    {
        let scorer = self.scorer();
        let context = self.context(&scorer);

        let max_depth = self.options.search_depth.max(1);
        let first_depth = if self.options.iterative_deepening {
            1
        } else {
            max_depth
        };

        let mut current: Option<(usize, MinMaxReturn<_, _>)> = None;

        for depth in first_depth..=max_depth {
            let previous_return = current.take().map(|(_, r)| r);
            let result = search_root(&context, game, depth, previous_return);

            let Some(action) = result.best_action() else {
                warn!(depth, "There is nothing to search in a finished game");
                return None;
            };

            let route = result
                .chosen_route()
                .iter()
                .map(|(player, action)| format!("{player}: {action:?}"))
                .join(", ");
            info!(
                depth,
                score = ?result.score(),
                ?action,
                nodes = result.node_count(),
                %route,
                "Finished searching depth"
            );

            let decided = match result.score().terminal_depth() {
                Some(terminal_depth) => depth as i64 >= terminal_depth,
                None => false,
            };

            let deposited = sink.deposit(action);
            current = Some((depth, result));

            if deposited.is_err() {
                warn!(depth, "The action sink was closed, stopping the search");
                break;
            }

            if decided {
                info!(depth, "This game is decided, no need to keep going");
                break;
            }
        }

        current
    }
}

impl<GameType> Agent<GameType> for MinimaxAgent
where
    GameType: IsolationGame,
{
    fn choose_action(&self, state: &GameType, sink: &mut dyn ActionSink<GameType::ActionType>) {
        info_span!(
            "choose_action",
            player = %self.player,
            ply = state.ply_count(),
            heuristic = %self.options.heuristic,
            search_depth = self.options.search_depth,
        )
        .in_scope(|| {
            if state.ply_count() <= self.options.opening_plies {
                if let Some(action) = greedy_opening(state, self.player) {
                    debug!(?action, "Playing the greedy opening");
                    if sink.deposit(action).is_err() {
                        warn!("The action sink was closed before the opening move");
                    }
                }

                return;
            }

            self.deepened_minimax(state, sink);
        })
    }
}
