//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A detected three-in-a-row: the winner and the line that won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    winner: Player,
    line: [Position; 3],
}

impl WinResult {
    /// The player who completed the line.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// The three positions forming the completed line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }
}

/// The 8 winning triples, in scan order: rows top to bottom, columns
/// left to right, then the two diagonals.
const LINES: [[Position; 3]; 8] = [
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

/// Checks if there is a completed line on the board.
///
/// Scans the triples in `LINES` order and returns the first one whose
/// three squares hold the same player's mark, `None` otherwise. The
/// fixed order keeps the reported line reproducible.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinResult> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(winner) = sq {
                return Some(WinResult { winner, line });
            }
        }
    }

    None
}
