//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line entirely occupied by `player`, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    let mark = Cell::Occupied(player);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Checks whether `player` has three in a row on the board.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board, Player::X));
        assert!(!check_win(&board, Player::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(Player::O, &line);
            assert!(check_win(&board, Player::O), "line {:?}", line);
            assert!(!check_win(&board, Player::X));
            assert_eq!(winning_line(&board, Player::O), Some(line));
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Cell::Occupied(Player::O));
        assert!(!check_win(&board, Player::X));
        assert!(!check_win(&board, Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::Center]);
        assert_eq!(winning_line(&board, Player::X), None);
    }
}
