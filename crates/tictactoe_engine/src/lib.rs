//! Pure tic-tac-toe game logic.
//!
//! [`GameEngine`] owns the board, the player to move and the move count. It
//! enforces move legality, detects wins and ties, and alternates turns. It
//! knows nothing about rendering: a front-end maps user input to
//! [`GameEngine::apply_move`] and redraws from the query methods.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, MoveOutcome, Player};
//!
//! let mut engine = GameEngine::new();
//! assert_eq!(engine.apply_move(1, 1), Ok(MoveOutcome::Continue(Player::O)));
//! assert!(engine.apply_move(1, 1).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use engine::{GameEngine, GamePhase, MoveOutcome};
pub use error::MoveError;
pub use position::Position;
pub use types::{Board, Cell, Player};
