//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to tic-tac-toe rules.
//! Rules are kept apart from board storage so invariants and tests
//! can reuse them without going through the engine.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_win, winning_line};
