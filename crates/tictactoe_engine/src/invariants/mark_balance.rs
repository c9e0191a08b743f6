//! Mark balance invariant: X never falls behind or pulls two ahead.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: X's mark count minus O's mark count is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let xs = board.count(Player::X);
        let os = board.count(Player::O);
        xs == os || xs == os + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
