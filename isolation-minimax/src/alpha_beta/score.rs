use std::{cmp::Reverse, fmt::Debug};

use types::types::{PlayerId, VictorDeterminableGame};

#[derive(Debug, Clone, PartialOrd, Ord, PartialEq, Eq, Copy, Hash)]
/// The wrapped score type. This takes into account the score provided by the score function, but
/// wraps it with a Score based on the game state. This allows us to say that wins are better than
/// any score and loses are worse than any score, etc.
pub enum WrappedScore<ScoreType>
where
    ScoreType: PartialOrd + Ord + Debug + Clone + Copy,
{
    /// We lost. When ranking by depth we prefer surviving longer, otherwise the depth is 0
    Lose(i64),
    /// Nobody won. When ranking by depth we prefer surviving longer, otherwise the depth is 0
    Tie(i64),
    /// We order this based on the score provided by the score function
    Scored(ScoreType),
    /// We won. When ranking by depth we prefer winning sooner, otherwise the depth is 0
    Win(Reverse<i64>),
}

const LOWEST_DEPTH: i64 = i64::MIN;

impl<ScoreType> WrappedScore<ScoreType>
where
    ScoreType: PartialOrd + Ord + Debug + Clone + Copy,
{
    /// Returns the best possible score
    ///
    /// This is a Win with the depth set as the minimum i64 such that no WrappedScore can be higher
    /// than this given the Ord
    pub fn best_possible_score() -> Self {
        WrappedScore::Win(Reverse(LOWEST_DEPTH))
    }

    /// Returns the worst possible score
    ///
    /// This is a Lose with the depth set as the minimum i64 such that no WrappedScore can be lower
    /// than this given the Ord
    pub fn worst_possible_score() -> Self {
        WrappedScore::Lose(LOWEST_DEPTH)
    }

    /// Returns the depth from this score IFF the score is a terminal node. Otherwise returns None
    pub fn terminal_depth(&self) -> Option<i64> {
        match &self {
            Self::Win(Reverse(d)) => Some(*d),
            Self::Tie(d) | Self::Lose(d) => Some(*d),
            Self::Scored(_) => None,
        }
    }

    /// The heuristic score, if this node was cut off by depth rather than by the game ending
    pub fn scored(&self) -> Option<ScoreType> {
        match self {
            Self::Scored(s) => Some(*s),
            _ => None,
        }
    }
}

/// This trait is used to control something that can return a score from a game board
///
/// Scores are always from the point of view of one fixed player, the one running the search
pub trait Scorable<GameType, ScoreType> {
    /// Convert the given GameType into a ScoreType
    fn score(&self, game: &GameType) -> ScoreType;
}

impl<GameType, ScoreType, FnLike: Fn(&GameType) -> ScoreType> Scorable<GameType, ScoreType>
    for FnLike
{
    fn score(&self, game: &GameType) -> ScoreType {
        (self)(game)
    }
}

/// Provides an implementation for `wrapped_score` if the implementer implements the `score`
/// function.
///
/// `wrapped_score` takes into account if the node is an end_state, and depth based ordering so
/// that the underlying scoring functions don't need to worry about this
pub trait WrappedScorable<GameType, ScoreType>
where
    ScoreType: PartialOrd + Ord + Copy + Debug,
    GameType: VictorDeterminableGame,
{
    /// This is the heuristic used for every frontier node that isn't an end state
    fn score(&self, node: &GameType) -> ScoreType;

    /// The player whose outcome we are scoring
    fn player(&self) -> PlayerId;

    /// Whether terminal scores record how deep they were found, so that quicker wins and slower
    /// losses rank higher. When false every win is as good as any other win, and likewise for
    /// losses and ties.
    fn rank_terminals_by_depth(&self) -> bool {
        false
    }

    /// `wrapped_score` decides if this node is a leaf in our Minimax tree. A terminal node is
    /// scored by the game's utility for [WrappedScorable::player]. A node with no remaining depth
    /// is scored with [WrappedScorable::score]. Any other node returns `None` and must be
    /// expanded.
    fn wrapped_score(
        &self,
        node: &GameType,
        depth: i64,
        remaining_depth: usize,
    ) -> Option<WrappedScore<ScoreType>> {
        if node.terminal_test() {
            let utility = node.utility(self.player());
            let depth = if self.rank_terminals_by_depth() {
                depth
            } else {
                0
            };

            let score = if utility > 0.0 {
                WrappedScore::Win(Reverse(depth))
            } else if utility < 0.0 {
                WrappedScore::Lose(depth)
            } else {
                WrappedScore::Tie(depth)
            };

            return Some(score);
        }

        if remaining_depth == 0 {
            return Some(WrappedScore::Scored(self.score(node)));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wins_beat_scores_beat_losses() {
        let lose: WrappedScore<i32> = WrappedScore::Lose(3);
        let tie = WrappedScore::Tie(3);
        let scored = WrappedScore::Scored(i32::MAX);
        let win = WrappedScore::Win(Reverse(3));

        assert!(lose < tie);
        assert!(tie < scored);
        assert!(scored < win);
        assert!(WrappedScore::Scored(i32::MIN) > lose);
    }

    #[test]
    fn test_prefer_quick_wins_and_slow_losses() {
        let quick_win: WrappedScore<i32> = WrappedScore::Win(Reverse(1));
        let slow_win = WrappedScore::Win(Reverse(5));
        assert!(quick_win > slow_win);

        let quick_loss: WrappedScore<i32> = WrappedScore::Lose(1);
        let slow_loss = WrappedScore::Lose(5);
        assert!(slow_loss > quick_loss);
    }

    struct Ended {
        utility: f64,
    }

    impl VictorDeterminableGame for Ended {
        fn terminal_test(&self) -> bool {
            true
        }

        fn utility(&self, _player: PlayerId) -> f64 {
            self.utility
        }
    }

    struct Scorer {
        by_depth: bool,
    }

    impl WrappedScorable<Ended, i32> for Scorer {
        fn score(&self, _node: &Ended) -> i32 {
            0
        }

        fn player(&self) -> PlayerId {
            PlayerId::FIRST
        }

        fn rank_terminals_by_depth(&self) -> bool {
            self.by_depth
        }
    }

    #[test]
    fn test_terminal_depth_is_only_recorded_when_ranking_by_depth() {
        let won = Ended {
            utility: f64::INFINITY,
        };
        let lost = Ended {
            utility: f64::NEG_INFINITY,
        };

        let flat = Scorer { by_depth: false };
        assert_eq!(
            flat.wrapped_score(&won, 1, 3),
            flat.wrapped_score(&won, 3, 1)
        );
        assert_eq!(flat.wrapped_score(&lost, 2, 2), Some(WrappedScore::Lose(0)));

        let ranked = Scorer { by_depth: true };
        assert_eq!(
            ranked.wrapped_score(&won, 1, 3),
            Some(WrappedScore::Win(Reverse(1)))
        );
        assert_eq!(ranked.wrapped_score(&lost, 2, 2), Some(WrappedScore::Lose(2)));
    }

    #[test]
    fn test_bounds_contain_everything() {
        let best = WrappedScore::<i32>::best_possible_score();
        let worst = WrappedScore::<i32>::worst_possible_score();

        for score in [
            WrappedScore::Lose(0),
            WrappedScore::Tie(0),
            WrappedScore::Scored(0),
            WrappedScore::Win(Reverse(0)),
        ] {
            assert!(worst <= score);
            assert!(score <= best);
        }
    }

    #[test]
    fn test_terminal_depth() {
        assert_eq!(WrappedScore::<i32>::Win(Reverse(2)).terminal_depth(), Some(2));
        assert_eq!(WrappedScore::<i32>::Lose(4).terminal_depth(), Some(4));
        assert_eq!(WrappedScore::Scored(7).terminal_depth(), None);
        assert_eq!(WrappedScore::Scored(7).scored(), Some(7));
    }
}
