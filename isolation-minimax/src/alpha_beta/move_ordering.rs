use std::{cmp::Reverse, fmt::Debug};

use super::MinMaxReturn;

/// How actions are ordered at interior nodes of the search
///
/// The root is always searched in the order the game enumerates its actions, so ties between
/// root actions are broken the same way no matter which ordering is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrdering {
    /// Search actions in the order the game enumerates them
    #[default]
    InOrder,
    /// Search the actions that scored best in the previous iteration of iterative deepening
    /// first. Actions the previous iteration never looked at go last. This only changes how much
    /// alpha-beta can prune, never the value of a node.
    BestFirst,
}

impl MoveOrdering {
    pub(crate) fn order_moves<ActionType, ScoreType>(
        &self,
        previous_return: Option<MinMaxReturn<ActionType, ScoreType>>,
        possible_moves: Vec<ActionType>,
    ) -> Vec<(ActionType, Option<MinMaxReturn<ActionType, ScoreType>>)>
    where
        ActionType: Copy + Debug + PartialEq,
        ScoreType: Copy + Ord + PartialOrd + Debug,
    {
        let was_maximizing = matches!(
            previous_return,
            Some(MinMaxReturn::Node {
                is_maximizing: true,
                ..
            })
        );
        let mut v = pair_with_previous(previous_return, possible_moves);

        if let MoveOrdering::BestFirst = self {
            if was_maximizing {
                v.sort_by_cached_key(|(_, r)| {
                    (r.is_none(), r.as_ref().map(|x| Reverse(*x.score())))
                });
            } else {
                v.sort_by_cached_key(|(_, r)| (r.is_none(), r.as_ref().map(|x| *x.score())));
            }
        }

        v
    }
}

/// Match each action with the subtree the previous iteration built for it, keeping the
/// enumeration order
pub(crate) fn pair_with_previous<ActionType, ScoreType>(
    previous_return: Option<MinMaxReturn<ActionType, ScoreType>>,
    possible_moves: Vec<ActionType>,
) -> Vec<(ActionType, Option<MinMaxReturn<ActionType, ScoreType>>)>
where
    ActionType: Copy + Debug + PartialEq,
    ScoreType: Copy + Ord + PartialOrd + Debug,
{
    if let Some(MinMaxReturn::Node { mut options, .. }) = previous_return {
        possible_moves
            .into_iter()
            .map(|m| {
                (
                    m,
                    options
                        .iter()
                        .position(|x| x.0 == m)
                        .map(|x| options.remove(x).1),
                )
            })
            .collect()
    } else {
        possible_moves.into_iter().map(|m| (m, None)).collect()
    }
}

#[cfg(test)]
mod tests {
    use types::types::PlayerId;

    use super::*;
    use crate::alpha_beta::WrappedScore;

    fn previous(is_maximizing: bool) -> MinMaxReturn<char, i32> {
        let leaf = |s| MinMaxReturn::Leaf {
            score: WrappedScore::Scored(s),
        };

        MinMaxReturn::Node {
            is_maximizing,
            moving_player: PlayerId::FIRST,
            score: WrappedScore::Scored(5),
            alpha_beta_cutoff: true,
            options: vec![('b', leaf(5)), ('a', leaf(1))],
        }
    }

    fn order(ordering: MoveOrdering, prev: Option<MinMaxReturn<char, i32>>) -> Vec<char> {
        ordering
            .order_moves(prev, vec!['a', 'b', 'c'])
            .into_iter()
            .map(|(m, _)| m)
            .collect()
    }

    #[test]
    fn test_in_order_keeps_enumeration_order() {
        assert_eq!(
            order(MoveOrdering::InOrder, Some(previous(true))),
            vec!['a', 'b', 'c']
        );
    }

    #[test]
    fn test_best_first_for_the_maximizer() {
        assert_eq!(
            order(MoveOrdering::BestFirst, Some(previous(true))),
            vec!['b', 'a', 'c']
        );
    }

    #[test]
    fn test_best_first_for_the_minimizer() {
        assert_eq!(
            order(MoveOrdering::BestFirst, Some(previous(false))),
            vec!['a', 'b', 'c']
        );
    }

    #[test]
    fn test_without_history_nothing_moves() {
        assert_eq!(order(MoveOrdering::BestFirst, None), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_pairs_keep_their_subtrees() {
        let paired = pair_with_previous(Some(previous(true)), vec!['c', 'b']);

        assert!(paired[0].1.is_none());
        assert_eq!(
            paired[1].1.as_ref().map(|r| *r.score()),
            Some(WrappedScore::Scored(5))
        );
    }
}
