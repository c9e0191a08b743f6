//! Application state and key handling.
//!
//! The app owns the engine, the cursor and whichever popup is showing.
//! It turns key presses into engine calls and tells the main loop
//! whether to keep going; it never touches the terminal itself.

use crossterm::event::KeyCode;
use tictactoe_engine::{GameEngine, MoveError, MoveOutcome, Player, Position};
use tracing::{debug, info, instrument, warn};

use crate::input::{digit_position, move_cursor};

/// Modal message drawn over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    /// The chosen square was already taken.
    IllegalMove,
    /// The game ended; asks whether to play again.
    GameOver(Option<Player>),
    /// Asks whether the user really wants to quit.
    ConfirmQuit,
}

impl Popup {
    /// Title shown on the popup border.
    pub fn title(self) -> &'static str {
        match self {
            Popup::IllegalMove => "Illegal Move",
            Popup::GameOver(_) => "Game Over",
            Popup::ConfirmQuit => "Confirm Quit",
        }
    }

    /// Body text of the popup.
    pub fn message(self) -> String {
        match self {
            Popup::IllegalMove => {
                "Illegal move! Square already taken. Please try again.".to_string()
            }
            Popup::GameOver(winner) => {
                let result = match winner {
                    Some(player) => format!("Player {} wins!", player),
                    None => "The game is a tie!".to_string(),
                };
                format!("{}\nDo you want to play again? (y/n)", result)
            }
            Popup::ConfirmQuit => "Are you sure you want to quit? (y/n)".to_string(),
        }
    }
}

/// What the main loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    popup: Option<Popup>,
    confirm_quit: bool,
    status: String,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(confirm_quit: bool) -> Self {
        let engine = GameEngine::new();
        let status = turn_message(engine.current_player());
        Self {
            engine,
            cursor: Position::Center,
            popup: None,
            confirm_quit,
            status,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the popup currently showing, if any.
    pub fn popup(&self) -> Option<Popup> {
        self.popup
    }

    /// Gets the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(popup = ?self.popup))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match self.popup {
            Some(popup) => self.handle_popup_key(popup, key),
            None => self.handle_board_key(key),
        }
    }

    fn handle_popup_key(&mut self, popup: Popup, key: KeyCode) -> Control {
        match (popup, key) {
            (Popup::IllegalMove, _) => {
                self.popup = None;
            }
            (Popup::GameOver(_), KeyCode::Char('y' | 'Y')) => {
                self.restart();
            }
            (Popup::GameOver(_), KeyCode::Char('n' | 'N' | 'q') | KeyCode::Esc) => {
                info!("Declined another game");
                return Control::Quit;
            }
            (Popup::ConfirmQuit, KeyCode::Char('y' | 'Y')) => {
                info!("Quit confirmed");
                return Control::Quit;
            }
            (Popup::ConfirmQuit, KeyCode::Char('n' | 'N') | KeyCode::Esc) => {
                debug!("Quit cancelled");
                self.popup = None;
            }
            _ => {}
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return self.request_quit(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        Control::Continue
    }

    fn request_quit(&mut self) -> Control {
        if self.confirm_quit {
            self.popup = Some(Popup::ConfirmQuit);
            Control::Continue
        } else {
            info!("Quit without confirmation");
            Control::Quit
        }
    }

    /// Plays the current player's mark at `pos` and updates the view state.
    #[instrument(skip(self))]
    fn play(&mut self, pos: Position) {
        let player = self.engine.current_player();
        match self.engine.apply_at(pos) {
            Ok(MoveOutcome::Continue(next)) => {
                self.status = format!("{} played {}. {}", player, pos, turn_message(next));
            }
            Ok(MoveOutcome::Win(winner)) => {
                self.status = format!("Player {} wins!", winner);
                self.popup = Some(Popup::GameOver(Some(winner)));
            }
            Ok(MoveOutcome::Tie) => {
                self.status = "The game is a tie!".to_string();
                self.popup = Some(Popup::GameOver(None));
            }
            Err(MoveError::SquareOccupied(_)) => {
                self.popup = Some(Popup::IllegalMove);
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status = e.to_string();
            }
        }
    }

    /// Starts a new game.
    fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.popup = None;
        self.cursor = Position::Center;
        self.status = turn_message(self.engine.current_player());
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {}'s turn", player)
}
