//! Capability traits describing an Isolation game state
//!
//! Each trait covers one query. Code that consumes a game lists the traits it needs in its
//! `where` clause, and [IsolationGame] bundles all of them for callers that want everything.
use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

/// Identifies one of the two players
///
/// The player who moves on even plies is [PlayerId::FIRST], the other one is [PlayerId::SECOND]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who makes the first move of the game
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player who makes the second move of the game
    pub const SECOND: PlayerId = PlayerId(1);

    /// The other player
    pub fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Index into per-player arrays
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// The player who is to move after `ply_count` plies have been played
    pub fn for_ply(ply_count: usize) -> Self {
        PlayerId((ply_count % 2) as u8)
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A cell on the board
///
/// `x` grows along the columns and `y` along the rows, both starting at 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Position {
    #[allow(missing_docs)]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight line distance between the centers of two cells
    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);

        (dx * dx + dy * dy).sqrt()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A game that knows whose turn it is
pub trait ActivePlayerGame {
    /// The player who moves next
    fn active_player(&self) -> PlayerId;
}

/// A game that can list the legal actions for the player to move
pub trait ActionEnumerableGame {
    /// The token that represents one move
    type ActionType: Copy + Eq + Debug;

    /// All legal actions for the active player. Empty only at terminal states.
    fn actions(&self) -> Vec<Self::ActionType>;
}

/// A game that can produce the state that follows an action
pub trait SimulableGame: ActionEnumerableGame + Sized {
    /// Apply `action` for the active player, returning the successor state.
    ///
    /// `self` is left untouched.
    fn result(&self, action: Self::ActionType) -> Self;
}

/// A game that can tell when it is over and who won
pub trait VictorDeterminableGame {
    /// True when the active player has no legal move left
    fn terminal_test(&self) -> bool;

    /// The outcome for `player`
    ///
    /// `f64::INFINITY` when `player` won, `f64::NEG_INFINITY` when they lost and `0.0` when the
    /// game is not over yet.
    fn utility(&self, player: PlayerId) -> f64;
}

/// A game that can list the cells reachable from a location
pub trait LibertyQueryableGame {
    /// Open cells a piece standing on `location` could move to.
    ///
    /// A piece that hasn't been placed yet (`None`) can go to any open cell.
    fn liberties(&self, location: Option<Position>) -> Vec<Position>;
}

/// A game that knows where each player stands
pub trait LocationGettableGame {
    /// Where `player` is, or `None` before their first move
    fn location(&self, player: PlayerId) -> Option<Position>;
}

/// A game that counts the plies played so far
pub trait PlyCountableGame {
    /// Number of moves made by both players together
    fn ply_count(&self) -> usize;
}

/// A game that knows the geometric center of its board
pub trait CenterDeterminableGame {
    /// The cell at the center of the board
    fn center(&self) -> Position;
}

/// Everything a search needs from an Isolation state
///
/// Implemented for every type that implements all the capability traits.
pub trait IsolationGame:
    ActivePlayerGame
    + SimulableGame
    + VictorDeterminableGame
    + LibertyQueryableGame
    + LocationGettableGame
    + PlyCountableGame
    + CenterDeterminableGame
    + Clone
    + Debug
{
}

impl<T> IsolationGame for T where
    T: ActivePlayerGame
        + SimulableGame
        + VictorDeterminableGame
        + LibertyQueryableGame
        + LocationGettableGame
        + PlyCountableGame
        + CenterDeterminableGame
        + Clone
        + Debug
{
}
