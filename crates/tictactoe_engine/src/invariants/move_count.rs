//! Move count invariant: the counter matches the marks on the board.

use super::Invariant;
use crate::GameEngine;

/// Invariant: `move_count` equals the number of occupied cells.
///
/// Marks are only ever added by legal moves, and every legal move
/// adds exactly one.
pub struct MoveCountInvariant;

impl Invariant<GameEngine> for MoveCountInvariant {
    fn holds(engine: &GameEngine) -> bool {
        usize::from(engine.move_count()) == engine.board().occupied()
    }

    fn description() -> &'static str {
        "Move count equals the number of occupied cells"
    }
}
