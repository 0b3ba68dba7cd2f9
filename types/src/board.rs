//! The reference knight's Isolation board
//!
//! Each player moves like a chess knight. A player's first move places them on any open
//! cell, and every cell a player lands on stays blocked for the rest of the game. The
//! player to move with no open knight move loses.
use std::{
    error::Error,
    fmt::{self, Display},
};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Width of the standard board
pub const DEFAULT_WIDTH: i32 = 11;
/// Height of the standard board
pub const DEFAULT_HEIGHT: i32 = 9;

/// The open cells are tracked in a `u128` so a board can't have more cells than this
pub const MAX_CELLS: i32 = 128;

/// One of the eight knight jumps, named by compass direction
///
/// The first letter is the long leg of the jump, so `NNE` moves two cells north (`+y`) and one
/// cell east (`+x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum KnightMove {
    NNE,
    ENE,
    ESE,
    SSE,
    SSW,
    WSW,
    WNW,
    NNW,
}

impl KnightMove {
    /// All jumps, in the order actions are enumerated
    pub const fn all() -> [KnightMove; 8] {
        use KnightMove::*;

        [NNE, ENE, ESE, SSE, SSW, WSW, WNW, NNW]
    }

    /// The `(dx, dy)` this jump moves by
    pub const fn offset(self) -> (i32, i32) {
        match self {
            KnightMove::NNE => (1, 2),
            KnightMove::ENE => (2, 1),
            KnightMove::ESE => (2, -1),
            KnightMove::SSE => (1, -2),
            KnightMove::SSW => (-1, -2),
            KnightMove::WSW => (-2, -1),
            KnightMove::WNW => (-2, 1),
            KnightMove::NNW => (-1, 2),
        }
    }

    /// Where this jump lands when made from `from`. May be off the board.
    pub fn apply(self, from: Position) -> Position {
        let (dx, dy) = self.offset();
        Position::new(from.x + dx, from.y + dy)
    }
}

impl Display for KnightMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A move on the knight's Isolation board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// First move of a player: stand on any open cell
    Place(Position),
    /// Every later move: a knight jump from the current cell
    Jump(KnightMove),
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(pos) => write!(f, "place {}", pos),
            Action::Jump(m) => write!(f, "jump {}", m),
        }
    }
}

/// Reasons a board can't be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The board is empty or has more than [MAX_CELLS] cells
    InvalidDimensions {
        #[allow(missing_docs)]
        width: i32,
        #[allow(missing_docs)]
        height: i32,
    },
    /// A cell that was given to block or stand on is not on the board
    OutOfBounds(Position),
    /// Both players were given the same cell
    SharedCell(Position),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } => write!(
                f,
                "a {width}x{height} board must have between 1 and {MAX_CELLS} cells"
            ),
            BoardError::OutOfBounds(pos) => write!(f, "{pos} is not on the board"),
            BoardError::SharedCell(pos) => write!(f, "both players stand on {pos}"),
        }
    }
}

impl Error for BoardError {}

/// An immutable knight's Isolation position
///
/// Applying an action with [SimulableGame::result] returns a new board, the original is
/// never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Isolation {
    width: i32,
    height: i32,
    /// Bit `y * width + x` is set while cell `(x, y)` is open
    open: u128,
    ply_count: usize,
    locs: [Option<Position>; 2],
}

impl Default for Isolation {
    fn default() -> Self {
        Self::empty(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Isolation {
    /// An empty board where neither player has moved yet
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        let too_big = width
            .checked_mul(height)
            .map_or(true, |cells| cells > MAX_CELLS);

        if width <= 0 || height <= 0 || too_big {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        Ok(Self::empty(width, height))
    }

    fn empty(width: i32, height: i32) -> Self {
        let cells = (width * height) as u32;
        let open = if cells == u128::BITS {
            u128::MAX
        } else {
            (1u128 << cells) - 1
        };

        Self {
            width,
            height,
            open,
            ply_count: 0,
            locs: [None, None],
        }
    }

    /// Build a position by hand
    ///
    /// `blocked` cells and the cells in `locs` start out closed. The active player is derived
    /// from `ply_count`, so an even count means [PlayerId::FIRST] moves next.
    pub fn from_parts(
        width: i32,
        height: i32,
        blocked: &[Position],
        locs: [Option<Position>; 2],
        ply_count: usize,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new(width, height)?;

        if let [Some(first), Some(second)] = locs {
            if first == second {
                return Err(BoardError::SharedCell(first));
            }
        }

        for pos in blocked.iter().chain(locs.iter().flatten()) {
            let bit = board.bit(pos).ok_or(BoardError::OutOfBounds(*pos))?;
            board.open &= !bit;
        }

        board.locs = locs;
        board.ply_count = ply_count;

        Ok(board)
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// True if `pos` is on the board
    pub fn contains(&self, pos: &Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    fn bit(&self, pos: &Position) -> Option<u128> {
        if !self.contains(pos) {
            return None;
        }

        Some(1u128 << (pos.y * self.width + pos.x))
    }

    /// True if `pos` is on the board and nobody has stood on it
    pub fn is_open(&self, pos: &Position) -> bool {
        self.bit(pos).map_or(false, |bit| self.open & bit != 0)
    }

    /// All open cells, row by row starting at `y = 0`
    pub fn open_cells(&self) -> Vec<Position> {
        (0..self.height)
            .cartesian_product(0..self.width)
            .map(|(y, x)| Position::new(x, y))
            .filter(|pos| self.is_open(pos))
            .collect()
    }

    /// The cell the active player would land on by playing `action`
    ///
    /// Returns `None` when the action makes no sense for the active player, for example a
    /// jump before they have been placed.
    pub fn destination(&self, action: Action) -> Option<Position> {
        match (action, self.locs[self.active_player().as_index()]) {
            (Action::Place(pos), None) => Some(pos),
            (Action::Jump(m), Some(from)) => Some(m.apply(from)),
            _ => None,
        }
    }

    fn has_liberties(&self, location: Option<Position>) -> bool {
        match location {
            None => self.open != 0,
            Some(from) => KnightMove::all()
                .iter()
                .any(|m| self.is_open(&m.apply(from))),
        }
    }
}

impl ActivePlayerGame for Isolation {
    fn active_player(&self) -> PlayerId {
        PlayerId::for_ply(self.ply_count)
    }
}

impl ActionEnumerableGame for Isolation {
    type ActionType = Action;

    fn actions(&self) -> Vec<Action> {
        match self.locs[self.active_player().as_index()] {
            None => self.open_cells().into_iter().map(Action::Place).collect(),
            Some(from) => KnightMove::all()
                .into_iter()
                .filter(|m| self.is_open(&m.apply(from)))
                .map(Action::Jump)
                .collect(),
        }
    }
}

impl SimulableGame for Isolation {
    fn result(&self, action: Action) -> Self {
        let destination = self
            .destination(action)
            .filter(|pos| self.is_open(pos))
            .unwrap_or_else(|| panic!("{action} is not a legal action in this position"));

        let mut next = *self;
        if let Some(bit) = next.bit(&destination) {
            next.open &= !bit;
        }
        next.locs[self.active_player().as_index()] = Some(destination);
        next.ply_count += 1;

        next
    }
}

impl VictorDeterminableGame for Isolation {
    fn terminal_test(&self) -> bool {
        !self.has_liberties(self.locs[self.active_player().as_index()])
    }

    fn utility(&self, player: PlayerId) -> f64 {
        if !self.terminal_test() {
            return 0.0;
        }

        if player == self.active_player() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }
}

impl LibertyQueryableGame for Isolation {
    fn liberties(&self, location: Option<Position>) -> Vec<Position> {
        match location {
            None => self.open_cells(),
            Some(from) => KnightMove::all()
                .into_iter()
                .map(|m| m.apply(from))
                .filter(|pos| self.is_open(pos))
                .collect(),
        }
    }
}

impl LocationGettableGame for Isolation {
    fn location(&self, player: PlayerId) -> Option<Position> {
        self.locs[player.as_index()]
    }
}

impl PlyCountableGame for Isolation {
    fn ply_count(&self) -> usize {
        self.ply_count
    }
}

impl CenterDeterminableGame for Isolation {
    fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }
}

impl Display for Isolation {
    /// Renders the board with the highest row first, so north is up.
    ///
    /// `1` and `2` are the players, `#` a blocked cell and `.` an open one
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            let row = (0..self.width)
                .map(|x| {
                    let pos = Position::new(x, y);
                    if self.locs[0] == Some(pos) {
                        '1'
                    } else if self.locs[1] == Some(pos) {
                        '2'
                    } else if self.is_open(&pos) {
                        '.'
                    } else {
                        '#'
                    }
                })
                .join(" ");
            writeln!(f, "{row}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_default_board_is_eleven_by_nine() {
        let board = Isolation::default();

        assert_eq!(board.width(), 11);
        assert_eq!(board.height(), 9);
        assert_eq!(board.open_cells().len(), 99);
        assert_eq!(board.center(), pos(5, 4));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Isolation::new(0, 4),
            Err(BoardError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(Isolation::new(12, 11).is_err());
        assert!(Isolation::new(16, 8).is_ok());
    }

    #[test]
    fn test_huge_dimensions_are_invalid() {
        assert_eq!(
            Isolation::new(65536, 65536),
            Err(BoardError::InvalidDimensions {
                width: 65536,
                height: 65536
            })
        );
        assert!(Isolation::new(i32::MAX, 2).is_err());
        assert!(Isolation::from_parts(65536, 65536, &[], [None, None], 0).is_err());
    }

    #[test]
    fn test_opening_actions_are_placements() {
        let board = Isolation::default();
        let actions = board.actions();

        assert_eq!(actions.len(), 99);
        assert_eq!(actions[0], Action::Place(pos(0, 0)));
        assert_eq!(actions[1], Action::Place(pos(1, 0)));
        assert!(!board.terminal_test());
        assert_eq!(board.utility(PlayerId::FIRST), 0.0);
    }

    #[test]
    fn test_result_blocks_the_destination_and_advances_the_ply() {
        let board = Isolation::default();
        let next = board.result(Action::Place(pos(5, 4)));

        assert_eq!(board.ply_count(), 0);
        assert_eq!(next.ply_count(), 1);
        assert_eq!(next.active_player(), PlayerId::SECOND);
        assert_eq!(next.location(PlayerId::FIRST), Some(pos(5, 4)));
        assert!(!next.is_open(&pos(5, 4)));
        assert!(board.is_open(&pos(5, 4)));
        assert_eq!(next.actions().len(), 98);
    }

    #[test]
    fn test_jumps_from_the_corner() {
        let board = Isolation::default()
            .result(Action::Place(pos(0, 0)))
            .result(Action::Place(pos(10, 8)));

        assert_eq!(
            board.actions(),
            vec![Action::Jump(KnightMove::NNE), Action::Jump(KnightMove::ENE)]
        );
        assert_eq!(
            board.liberties(board.location(PlayerId::FIRST)),
            vec![pos(1, 2), pos(2, 1)]
        );

        let next = board.result(Action::Jump(KnightMove::ENE));
        assert_eq!(next.location(PlayerId::FIRST), Some(pos(2, 1)));
        // the cell we left stays blocked
        assert!(!next.is_open(&pos(0, 0)));
    }

    #[test]
    #[should_panic]
    fn test_jump_before_placing_panics() {
        Isolation::default().result(Action::Jump(KnightMove::NNE));
    }

    #[test]
    fn test_cornered_player_loses() {
        // On a 3x3 board the outer cells form a ring of knight moves.
        // Player 2 on (2, 0) can only reach (1, 2) and (0, 1).
        let board = Isolation::from_parts(
            3,
            3,
            &[pos(0, 1)],
            [Some(pos(0, 0)), Some(pos(2, 0))],
            4,
        )
        .unwrap();
        assert!(!board.terminal_test());

        let cornered = board.result(Action::Jump(KnightMove::NNE));
        assert_eq!(cornered.location(PlayerId::FIRST), Some(pos(1, 2)));
        assert!(cornered.terminal_test());
        assert!(cornered.actions().is_empty());
        assert_eq!(cornered.utility(PlayerId::FIRST), f64::INFINITY);
        assert_eq!(cornered.utility(PlayerId::SECOND), f64::NEG_INFINITY);
    }

    #[test]
    fn test_from_parts_rejects_bad_cells() {
        assert_eq!(
            Isolation::from_parts(3, 3, &[pos(3, 0)], [None, None], 0),
            Err(BoardError::OutOfBounds(pos(3, 0)))
        );
        assert_eq!(
            Isolation::from_parts(3, 3, &[], [Some(pos(1, 1)), Some(pos(1, 1))], 2),
            Err(BoardError::SharedCell(pos(1, 1)))
        );
    }

    #[test]
    fn test_display() {
        let board =
            Isolation::from_parts(3, 3, &[pos(1, 1)], [Some(pos(0, 0)), Some(pos(2, 2))], 2)
                .unwrap();

        assert_eq!(format!("{board}"), ". . 2\n. # .\n1 . .\n");
    }

    #[test]
    fn test_action_serializes_for_archives() {
        let json = serde_json::to_string(&Action::Jump(KnightMove::WSW)).unwrap();
        assert_eq!(json, r#"{"Jump":"WSW"}"#);

        let action: Action = serde_json::from_str(r#"{"Place":{"x":3,"y":4}}"#).unwrap();
        assert_eq!(action, Action::Place(pos(3, 4)));
    }
}
