//! Two player minimax with Alpha-Beta pruning
//!
//! Every node is scored from the point of view of the searching player. When propagating
//! scores up the tree we choose the highest score when it's their turn and the lowest score
//! when it's the opponent's turn.
//!
//! ```rust
//! use isolation_minimax::alpha_beta::{AgentOptions, MinMaxReturn, MinimaxAgent};
//! use isolation_minimax::heuristic::Heuristic;
//! use types::board::{Action, Isolation};
//! use types::types::{PlayerId, Position, SimulableGame};
//!
//! // Both players have been placed, so the next move is a knight jump
//! let game = Isolation::default()
//!     .result(Action::Place(Position::new(3, 3)))
//!     .result(Action::Place(Position::new(7, 5)));
//!
//! let options = AgentOptions {
//!     heuristic: Heuristic::Baseline,
//!     search_depth: 3,
//!     ..Default::default()
//! };
//! let agent = MinimaxAgent::new(PlayerId::FIRST, options).unwrap();
//!
//! // Every deposited action is the best one found at that depth, the last one is the deepest
//! let mut deposited: Vec<Action> = vec![];
//! let (depth, result): (usize, MinMaxReturn<_, _>) =
//!     agent.deepened_minimax(&game, &mut deposited).unwrap();
//!
//! assert_eq!(depth, 3);
//! assert_eq!(deposited.len(), 3);
//! assert_eq!(deposited.last().copied(), result.best_action());
//! ```

mod score;
pub use score::{Scorable, WrappedScorable, WrappedScore};

mod minimax_return;
pub use minimax_return::MinMaxReturn;

mod move_ordering;
pub use move_ordering::MoveOrdering;

mod eval;
pub use eval::{minimax, search_root, AgentOptions, MinimaxAgent, SearchContext};
