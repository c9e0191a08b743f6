//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: the player to move follows from the move count.
///
/// While the game is in progress X moves on even counts and O on odd
/// counts. Once it is over the engine keeps the player who made the
/// last move, which is X after an odd count.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let even = engine.move_count() % 2 == 0;
        let expected = match (engine.is_over(), even) {
            (false, true) | (true, false) => Player::X,
            (false, false) | (true, true) => Player::O,
        };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
