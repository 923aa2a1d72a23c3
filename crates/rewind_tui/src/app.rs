//! Application state and key handling.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use rewind_tictactoe::{Game, Position};
use tracing::debug;

use crate::input;

/// Which pane owns the navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// The 3x3 board.
    Board,
    /// The move history list.
    Moves,
}

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Main application state.
///
/// Owns the single [`Game`] instance for the application's lifetime.
/// All legality checks live in the engine; the app only routes keys.
#[derive(Debug, Getters)]
pub struct App {
    /// The game, with its full history.
    game: Game,
    /// Board square under the cursor.
    cursor: Position,
    /// Pane receiving navigation keys.
    pane: Pane,
    /// History step selected in the move list.
    selected_step: usize,
    /// Move list display order; `true` lists oldest first.
    ascending: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            pane: Pane::Board,
            selected_step: 0,
            ascending: true,
        }
    }

    /// Handles a key press, mutating state in place.
    pub fn handle_key(&mut self, key: KeyCode) -> Transition {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Transition::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_order(),
            KeyCode::Tab => self.switch_pane(),
            KeyCode::Char(c @ '1'..='9') => {
                // Digit shortcuts address squares directly, whichever
                // pane has focus.
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => self.navigate(key),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => {}
        }
        Transition::Continue
    }

    fn navigate(&mut self, key: KeyCode) {
        match self.pane {
            Pane::Board => self.cursor = input::move_cursor(self.cursor, key),
            Pane::Moves => self.move_selection(key),
        }
    }

    fn activate(&mut self) {
        match self.pane {
            Pane::Board => self.play(self.cursor),
            Pane::Moves => {
                debug!(step = self.selected_step, "jumping to selected step");
                self.game.jump_to(self.selected_step);
            }
        }
    }

    fn play(&mut self, pos: Position) {
        debug!(?pos, "placing mark");
        self.game.apply(pos);
        // Keep the list selection on the step being viewed.
        self.selected_step = self.game.current_step();
    }

    /// Moves the list selection one rendered row up or down.
    ///
    /// The selection is stored as the entry's recorded step, not its
    /// row, so toggling the display order never changes which entry is
    /// selected or where it jumps.
    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        let towards_newer = match (key, self.ascending) {
            (KeyCode::Down, true) | (KeyCode::Up, false) => true,
            (KeyCode::Up, true) | (KeyCode::Down, false) => false,
            _ => return,
        };
        self.selected_step = if towards_newer {
            (self.selected_step + 1).min(last)
        } else {
            self.selected_step.saturating_sub(1)
        };
    }

    fn switch_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Board => Pane::Moves,
            Pane::Moves => Pane::Board,
        };
    }

    fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "toggled move list order");
    }

    /// Replaces the game with a fresh one.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.game = Game::new();
        self.cursor = Position::Center;
        self.selected_step = 0;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
