//! Game rules for freestyle Omok
//!
//! Win condition: five or more stones in a row on any of the four axes.
//! Overlines count (freestyle convention) — six in a row wins too.

pub mod win;

// Re-exports for convenient access
pub use win::{count_consecutive, has_win_at, scan_board_for_winner, WIN_LEN};
