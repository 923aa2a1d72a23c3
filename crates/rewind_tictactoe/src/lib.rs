//! Rewind Tic-Tac-Toe - game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: board, players, squares ([`Board`], [`Player`], [`Square`])
//! - **Rules**: win detection over the 8 line triples ([`check_winner`])
//! - **Game**: snapshot-per-move history with a movable current step ([`Game`])
//!
//! The engine is deliberately UI-free: frontends render the snapshots
//! it exposes and feed positions back through [`Game::apply`] and
//! [`Game::jump_to`]. Illegal interactions (occupied square, move on a
//! decided board, jump past the end) are ignored rather than reported.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Player, Position};
//!
//! let mut game = Game::new();
//! game.apply(Position::Center);
//! game.apply(Position::TopLeft);
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.to_move(), Player::X);
//!
//! // Revisit the opening, then branch: the O move is discarded.
//! game.jump_to(1);
//! game.apply(Position::BottomRight);
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.history()[2].label(), Some("O: (2,2)"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
mod rules;
mod types;

pub use action::Move;
pub use game::{Game, HistoryEntry};
pub use position::Position;
pub use rules::{WinResult, check_winner};
pub use types::{Board, Player, Square};
