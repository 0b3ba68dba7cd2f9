use std::fmt::Debug;
use text_trees::StringTreeNode;
use types::types::PlayerId;

use super::WrappedScore;

#[derive(Debug, Clone)]
/// This is returned from an iteration of the minimax algorithm
/// It contains all the information we generated about the game tree
pub enum MinMaxReturn<ActionType, ScoreType>
where
    ActionType: Copy + Debug,
    ScoreType: Clone + Debug + PartialOrd + Ord + Copy,
{
    /// This is a non-leaf node in the game tree
    /// We have information about all the options we looked at as well as the chosen score
    Node {
        /// Whether this node was a maximizing node or not
        is_maximizing: bool,
        /// A 'recursive' look at all the actions under us
        /// This array is sorted by the score of the action, best first for the moving player.
        /// The sort is stable, so among equal scores the action that was enumerated first comes
        /// first. The first element is always the chosen action at this node. It's
        /// [MinMaxReturn::score()] should always equal the score attribute of this node
        options: Vec<(ActionType, Self)>,
        /// Which player was moving at this node
        moving_player: PlayerId,
        /// The chosen score
        /// This should always match the score of the first element in `options`
        score: WrappedScore<ScoreType>,
        /// True if pruning stopped us before every action was looked at
        alpha_beta_cutoff: bool,
    },
    /// Represents a leaf node in the game tree
    /// This happens when we reach a terminal state (win/lose/tie)
    /// or when we reach the maximum depth
    Leaf {
        #[allow(missing_docs)]
        score: WrappedScore<ScoreType>,
    },
}

impl<ActionType, ScoreType> MinMaxReturn<ActionType, ScoreType>
where
    ActionType: Copy + Debug,
    ScoreType: Clone + Debug + PartialOrd + Ord + Copy,
{
    /// Returns the score for this node
    pub fn score(&self) -> &WrappedScore<ScoreType> {
        match self {
            MinMaxReturn::Node { score, .. } => score,
            MinMaxReturn::Leaf { score } => score,
        }
    }

    /// Returns the action chosen at this node
    /// If we are a leaf node, this will return None
    pub fn best_action(&self) -> Option<ActionType> {
        match self {
            MinMaxReturn::Leaf { .. } => None,
            MinMaxReturn::Node { options, .. } => options.first().map(|(action, _)| *action),
        }
    }

    /// Return the first set of action options for the given player, following the chosen line
    /// down the tree until it is that player's turn
    pub fn first_options_for_player(&self, player: PlayerId) -> Option<&Vec<(ActionType, Self)>> {
        match self {
            MinMaxReturn::Leaf { .. } => None,
            MinMaxReturn::Node {
                moving_player,
                options,
                ..
            } => {
                if *moving_player == player {
                    Some(options)
                } else {
                    let chosen = options.first()?;
                    chosen.1.first_options_for_player(player)
                }
            }
        }
    }

    /// Returns all the actions in the 'route' through the game tree that minimax took
    /// This is useful for debugging as it shows each of the actions we and our opponent made
    /// during the search
    pub fn chosen_route(&self) -> Vec<(PlayerId, ActionType)> {
        match self {
            MinMaxReturn::Leaf { .. } => vec![],
            MinMaxReturn::Node {
                moving_player,
                options,
                ..
            } => {
                if let Some(chosen) = options.first() {
                    let mut tail = chosen.1.chosen_route();
                    tail.insert(0, (*moving_player, chosen.0));
                    tail
                } else {
                    vec![]
                }
            }
        }
    }

    /// Count of every node in the tree, this one included
    pub fn node_count(&self) -> usize {
        match self {
            MinMaxReturn::Leaf { .. } => 1,
            MinMaxReturn::Node { options, .. } => {
                1 + options.iter().map(|(_, r)| r.node_count()).sum::<usize>()
            }
        }
    }

    /// This returns a visual representation of the game tree that minimax generated
    /// It shows the chosen score, the moving player and the chosen action at each level
    pub fn to_text_tree(&self) -> Option<String> {
        let tree_node = self.to_text_tree_node("".to_owned())?;
        Some(format!("{}", tree_node))
    }

    fn to_text_tree_node(&self, label: String) -> Option<StringTreeNode> {
        match self {
            MinMaxReturn::Leaf { .. } => None,
            MinMaxReturn::Node {
                moving_player,
                options,
                score,
                ..
            } => {
                let mut node = StringTreeNode::new(format!("{} {:?}", label, score));
                for (m, result) in options {
                    let child_label = format!("{:?} {}", m, moving_player);
                    match result.to_text_tree_node(child_label.clone()) {
                        Some(next_node) => node.push_node(next_node),
                        None => node.push_node(StringTreeNode::new(format!(
                            "{} {:?}",
                            child_label,
                            result.score()
                        ))),
                    }
                }

                Some(node)
            }
        }
    }
}
