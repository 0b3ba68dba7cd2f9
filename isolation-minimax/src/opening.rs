//! Greedy play for the first plies of the game
//!
//! Early in the game every heuristic sees a nearly empty board and can't tell positions apart,
//! so instead of searching we take whatever leaves us the most room.
use std::cmp::Reverse;

use types::types::{LibertyQueryableGame, LocationGettableGame, PlayerId, SimulableGame};

/// The action after which `player` can reach the most cells from where they stand
///
/// Ties go to the action enumerated first. Returns `None` when there is no legal action.
pub fn greedy_opening<GameType>(game: &GameType, player: PlayerId) -> Option<GameType::ActionType>
where
    GameType: SimulableGame + LibertyQueryableGame + LocationGettableGame,
{
    game.actions()
        .into_iter()
        .map(|action| {
            let next = game.result(action);
            (action, next.liberties(next.location(player)).len())
        })
        // `min_by_key` keeps the first of several equal elements, `max_by_key` the last
        .min_by_key(|(_, liberties)| Reverse(*liberties))
        .map(|(action, _)| action)
}

#[cfg(test)]
mod tests {
    use types::{
        board::{Action, Isolation, KnightMove},
        types::{ActionEnumerableGame, Position},
    };

    use super::*;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    /// Recomputes the greedy choice the long way, keeping the first maximum
    fn expected(board: &Isolation, player: PlayerId) -> Action {
        let mut best = None;
        for action in board.actions() {
            let next = board.result(action);
            let liberties = next.liberties(next.location(player)).len();
            match best {
                Some((_, most)) if most >= liberties => {}
                _ => best = Some((action, liberties)),
            }
        }

        best.unwrap().0
    }

    #[test]
    fn test_first_placement_is_first_cell_with_eight_jumps() {
        let board = Isolation::default();

        let action = greedy_opening(&board, PlayerId::FIRST).unwrap();

        assert_eq!(action, Action::Place(pos(2, 2)));
        assert_eq!(action, expected(&board, PlayerId::FIRST));
    }

    #[test]
    fn test_second_placement_avoids_the_taken_cell() {
        let board = Isolation::default().result(Action::Place(pos(2, 2)));

        let action = greedy_opening(&board, PlayerId::SECOND).unwrap();

        assert_eq!(action, Action::Place(pos(3, 2)));
        assert_eq!(action, expected(&board, PlayerId::SECOND));
    }

    #[test]
    fn test_third_ply_jumps_to_the_roomiest_cell() {
        let board = Isolation::default()
            .result(Action::Place(pos(0, 0)))
            .result(Action::Place(pos(10, 8)));

        // (1, 2) has 5 onward jumps, (2, 1) has 5 too, so the first one enumerated wins
        let action = greedy_opening(&board, PlayerId::FIRST).unwrap();

        assert_eq!(action, Action::Jump(KnightMove::NNE));
        assert_eq!(action, expected(&board, PlayerId::FIRST));
    }

    #[test]
    fn test_no_actions_no_choice() {
        let board = Isolation::from_parts(
            3,
            3,
            &[pos(0, 1), pos(1, 2)],
            [Some(pos(1, 1)), Some(pos(2, 0))],
            2,
        )
        .unwrap();

        assert_eq!(greedy_opening(&board, PlayerId::FIRST), None);
    }
}
