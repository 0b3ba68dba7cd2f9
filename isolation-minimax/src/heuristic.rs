//! Static evaluations used at the frontier of the search
//!
//! Every evaluation is from the point of view of one fixed player, the one running the search,
//! no matter whose turn it is in the evaluated position.
use std::{fmt, str::FromStr};

use ordered_float::OrderedFloat;
use types::types::{
    CenterDeterminableGame, LibertyQueryableGame, LocationGettableGame, PlayerId,
};

use crate::{alpha_beta::Scorable, error::ConfigError};

/// The score type every heuristic produces
pub type Evaluation = OrderedFloat<f64>;

type EvaluationFn<GameType> = fn(&GameType, PlayerId) -> f64;

/// The available frontier evaluations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Our liberties minus the opponent's liberties
    Baseline,
    /// Negative straight line distance from our position to the center of the board
    #[default]
    Custom,
}

impl Heuristic {
    /// Every heuristic, in the order they are listed to users
    pub const ALL: [Heuristic; 2] = [Heuristic::Baseline, Heuristic::Custom];

    /// The name used to select this heuristic from configuration
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Baseline => "baseline",
            Heuristic::Custom => "custom",
        }
    }

    fn evaluation_fn<GameType>(self) -> EvaluationFn<GameType>
    where
        GameType: LibertyQueryableGame + LocationGettableGame + CenterDeterminableGame,
    {
        match self {
            Heuristic::Baseline => mobility_difference::<GameType>,
            Heuristic::Custom => center_proximity::<GameType>,
        }
    }

    /// Evaluate `game` for `player`
    pub fn evaluate<GameType>(self, game: &GameType, player: PlayerId) -> Evaluation
    where
        GameType: LibertyQueryableGame + LocationGettableGame + CenterDeterminableGame,
    {
        OrderedFloat((self.evaluation_fn::<GameType>())(game, player))
    }

    /// A [Scorable] that evaluates every position for `player` with this heuristic
    pub fn scorer(self, player: PlayerId) -> HeuristicScorer {
        HeuristicScorer {
            heuristic: self,
            player,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| ConfigError::UnknownHeuristic(s.to_owned()))
    }
}

/// The `baseline` heuristic: how many more cells `player` can move to than their opponent
pub fn mobility_difference<GameType>(game: &GameType, player: PlayerId) -> f64
where
    GameType: LibertyQueryableGame + LocationGettableGame,
{
    let ours = game.liberties(game.location(player)).len();
    let theirs = game.liberties(game.location(player.opponent())).len();

    ours as f64 - theirs as f64
}

/// The `custom` heuristic: the closer `player` stands to the center the better
///
/// A player who hasn't been placed yet has no position to prefer and scores 0.
pub fn center_proximity<GameType>(game: &GameType, player: PlayerId) -> f64
where
    GameType: LocationGettableGame + CenterDeterminableGame,
{
    match game.location(player) {
        Some(pos) => -pos.euclidean_distance(&game.center()),
        None => 0.0,
    }
}

/// Scores game states with a [Heuristic] for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicScorer {
    /// The evaluation to use
    pub heuristic: Heuristic,
    /// The player we evaluate for
    pub player: PlayerId,
}

impl<GameType> Scorable<GameType, Evaluation> for HeuristicScorer
where
    GameType: LibertyQueryableGame + LocationGettableGame + CenterDeterminableGame,
{
    fn score(&self, game: &GameType) -> Evaluation {
        self.heuristic.evaluate(game, self.player)
    }
}

#[cfg(test)]
mod tests {
    use types::{
        board::{Action, Isolation},
        types::{Position, SimulableGame},
    };

    use super::*;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_parse_heuristic_names() {
        assert_eq!("baseline".parse::<Heuristic>(), Ok(Heuristic::Baseline));
        assert_eq!("custom".parse::<Heuristic>(), Ok(Heuristic::Custom));
        assert_eq!(Heuristic::default(), Heuristic::Custom);
    }

    #[test]
    fn test_unknown_heuristic_is_an_error() {
        assert_eq!(
            "Custom".parse::<Heuristic>(),
            Err(ConfigError::UnknownHeuristic("Custom".to_owned()))
        );
        assert_eq!(
            "".parse::<Heuristic>(),
            Err(ConfigError::UnknownHeuristic("".to_owned()))
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for h in Heuristic::ALL {
            assert_eq!(h.to_string().parse::<Heuristic>(), Ok(h));
        }
    }

    #[test]
    fn test_mobility_difference() {
        // Player 1 in the corner has 2 jumps, player 2 in the middle has 8
        let board = Isolation::default()
            .result(Action::Place(pos(0, 0)))
            .result(Action::Place(pos(5, 4)));

        assert_eq!(mobility_difference(&board, PlayerId::FIRST), -6.0);
        assert_eq!(mobility_difference(&board, PlayerId::SECOND), 6.0);
    }

    #[test]
    fn test_center_proximity() {
        let board = Isolation::default()
            .result(Action::Place(pos(2, 0)))
            .result(Action::Place(pos(5, 4)));

        assert_eq!(center_proximity(&board, PlayerId::FIRST), -5.0);
        assert_eq!(center_proximity(&board, PlayerId::SECOND), 0.0);
        assert_eq!(center_proximity(&Isolation::default(), PlayerId::FIRST), 0.0);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let board = Isolation::default()
            .result(Action::Place(pos(3, 3)))
            .result(Action::Place(pos(7, 2)));

        for h in Heuristic::ALL {
            let first = h.evaluate(&board, PlayerId::FIRST);
            let second = h.evaluate(&board, PlayerId::FIRST);
            assert_eq!(first, second);
            assert_eq!(h.scorer(PlayerId::FIRST).score(&board), first);
        }
    }

    #[test]
    fn test_heuristics_disagree() {
        // From the center player 1 is boxed in with a single jump left, from the edge they
        // still have 4
        let blocked = [
            pos(6, 6),
            pos(7, 5),
            pos(7, 3),
            pos(6, 2),
            pos(4, 2),
            pos(3, 3),
            pos(3, 5),
        ];
        let boxed_in_center =
            Isolation::from_parts(11, 9, &blocked, [Some(pos(5, 4)), Some(pos(10, 8))], 3)
                .unwrap();
        let free_on_the_edge =
            Isolation::from_parts(11, 9, &blocked, [Some(pos(0, 4)), Some(pos(10, 8))], 3)
                .unwrap();

        let custom = Heuristic::Custom;
        let baseline = Heuristic::Baseline;

        assert!(
            custom.evaluate(&boxed_in_center, PlayerId::FIRST)
                > custom.evaluate(&free_on_the_edge, PlayerId::FIRST)
        );
        assert!(
            baseline.evaluate(&boxed_in_center, PlayerId::FIRST)
                < baseline.evaluate(&free_on_the_edge, PlayerId::FIRST)
        );
    }
}
