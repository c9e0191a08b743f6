//! The game engine: single source of truth for a tic-tac-toe game.
//!
//! The engine owns the board, the player to move and the move count.
//! Callers (a UI, a test) hand it coordinates and render whatever it
//! reports back; it never knows how it is being displayed.

use crate::invariants::{EngineInvariants, InvariantSet};
use crate::rules;
use crate::{Board, Cell, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// No line can be complete before this many marks are on the board.
const WIN_CHECK_THRESHOLD: u8 = 5;

/// Total number of cells; the move that fills the last one ends the game.
const MAX_MOVES: u8 = 9;

/// Phase of the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are being accepted.
    #[default]
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board filled with no line completed.
    Tied,
}

impl GamePhase {
    /// Returns true for `Won` and `Tied`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }
}

/// Result of a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues; carries the player now to move.
    Continue(Player),
    /// The mover completed a line.
    Win(Player),
    /// The board is full and nobody won.
    Tie,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    move_count: u8,
    phase: GamePhase,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            move_count: 0,
            phase: GamePhase::InProgress,
        }
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidCoordinate`] if either coordinate is outside `0..3`.
    /// - [`MoveError::GameOver`] if the game has already been won or tied.
    /// - [`MoveError::SquareOccupied`] if the cell already holds a mark.
    ///
    /// A rejected move leaves the engine untouched.
    #[instrument(skip(self), fields(player = %self.current_player, move_count = self.move_count))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or_else(|| {
            warn!(row, col, "Rejected move off the board");
            MoveError::InvalidCoordinate { row, col }
        })?;
        self.apply_at(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Same semantics as [`GameEngine::apply_move`].
    #[instrument(skip(self), fields(player = %self.current_player, move_count = self.move_count))]
    pub fn apply_at(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if self.phase.is_terminal() {
            warn!(phase = ?self.phase, "Rejected move after game end");
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            warn!(position = %pos, "Rejected move on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Cell::Occupied(player));
        self.move_count += 1;
        debug!(position = %pos, move_count = self.move_count, "Mark placed");

        let outcome = decide(&self.board, player, self.move_count);
        match outcome {
            MoveOutcome::Win(winner) => {
                self.phase = GamePhase::Won(winner);
                info!(winner = %winner, "Game won");
            }
            MoveOutcome::Tie => {
                self.phase = GamePhase::Tied;
                info!("Game tied");
            }
            MoveOutcome::Continue(next) => {
                self.current_player = next;
            }
        }

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "engine invariants violated: {:?}",
            EngineInvariants::check_all(self)
        );

        Ok(outcome)
    }

    /// Clears the board and starts a new game with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(previous_phase = ?self.phase, "Resetting game");
        *self = Self::new();
    }

    /// Returns true iff `player` fills any of the 8 winning lines.
    pub fn check_win(&self, player: Player) -> bool {
        rules::check_win(&self.board, player)
    }

    /// Returns the cell at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidCoordinate`] if either coordinate is outside `0..3`.
    pub fn get_cell(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        Position::from_row_col(row, col)
            .map(|pos| self.board.get(pos))
            .ok_or(MoveError::InvalidCoordinate { row, col })
    }

    /// Returns the cell at `pos`.
    pub fn cell_at(&self, pos: Position) -> Cell {
        self.board.get(pos)
    }

    /// Player to move, or the player who made the final move once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of legal moves applied since the last reset.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Current phase of the game.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns true once the game is won or tied.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Returns the winner, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            GamePhase::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The completed line, once the game has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winner()
            .and_then(|player| rules::winning_line(&self.board, player))
    }

    /// Positions that would currently be accepted as moves.
    pub fn available_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::ALL
            .into_iter()
            .filter(|pos| self.board.is_empty(*pos))
            .collect()
    }
}

/// Outcome of `player` having just placed the `move_count`-th mark on `board`.
///
/// The win check is skipped below [`WIN_CHECK_THRESHOLD`]; a win is checked
/// before a tie so a ninth move completing a line still wins.
fn decide(board: &Board, player: Player, move_count: u8) -> MoveOutcome {
    if move_count >= WIN_CHECK_THRESHOLD && rules::check_win(board, player) {
        MoveOutcome::Win(player)
    } else if move_count == MAX_MOVES {
        MoveOutcome::Tie
    } else {
        MoveOutcome::Continue(player.opponent())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
