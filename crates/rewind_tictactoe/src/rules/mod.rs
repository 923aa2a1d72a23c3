//! Game rules.

mod win;

pub use win::{WinResult, check_winner};
