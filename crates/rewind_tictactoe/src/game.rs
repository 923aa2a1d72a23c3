//! The game engine: move application, history, and time travel.
//!
//! Every applied move records a full board snapshot, so any prior step
//! can be revisited without replaying moves. Jumping back and playing
//! a new move discards the abandoned future before appending.

use crate::action::Move;
use crate::position::Position;
use crate::rules::{WinResult, check_winner};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A recorded step: the board after a move, and the move's label.
///
/// The start-of-game entry has no label. Snapshots are immutable once
/// recorded; time travel only moves the current-step pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    label: Option<String>,
}

impl HistoryEntry {
    fn start() -> Self {
        Self {
            board: Board::new(),
            label: None,
        }
    }

    /// The board snapshot recorded at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The label of the move that produced this step, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Game state with full history and a movable current step.
///
/// The player to move is derived from the current step's parity and
/// never stored, so it cannot drift from the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: Vec<HistoryEntry>,
    current_step: usize,
}

impl Game {
    /// Creates a new game holding the empty start entry.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
        }
    }

    /// The board at the current step.
    pub fn board(&self) -> &Board {
        &self.history[self.current_step].board
    }

    /// The recorded history, oldest first. Entry 0 is the start state.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The history index currently displayed and playable.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The player to move at the current step.
    ///
    /// X moves on even steps, O on odd ones.
    pub fn to_move(&self) -> Player {
        if self.current_step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The win result for the board at the current step, if any.
    ///
    /// Recomputed from the snapshot on every call rather than cached,
    /// so it always matches the step being viewed.
    pub fn win(&self) -> Option<WinResult> {
        check_winner(self.board())
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Ignored if the square is already occupied or the current board
    /// has a winner. Otherwise every step after the current one is
    /// discarded, and the new board is appended as the latest step.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.to_move()))]
    pub fn apply(&mut self, pos: Position) {
        if self.win().is_some() {
            debug!(?pos, "ignoring move, board already has a winner");
            return;
        }
        if !self.board().is_empty(pos) {
            debug!(?pos, "ignoring move, square occupied");
            return;
        }

        let mov = Move::new(self.to_move(), pos);
        self.history.truncate(self.current_step + 1);

        let mut board = self.board().clone();
        board.set(pos, Square::Occupied(mov.player()));
        self.history.push(HistoryEntry {
            board,
            label: Some(mov.to_string()),
        });
        self.current_step = self.history.len() - 1;
        debug_assert_eq!(self.current_step + 1, self.history.len());

        debug!(%mov, step = self.current_step, board = %self.board().display(), "recorded move");
    }

    /// Moves the current step to `step` without touching history.
    ///
    /// Targets outside the recorded range are ignored; the move list
    /// only ever offers recorded steps.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            debug!(step, len = self.history.len(), "ignoring jump to unrecorded step");
            return;
        }
        self.current_step = step;
    }

    /// One-line status for display: the winner at the current step, or
    /// the player to move.
    pub fn status_line(&self) -> String {
        match self.win() {
            Some(win) => format!("Winner: {}", win.winner()),
            None => format!("Next player: {}", self.to_move()),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
