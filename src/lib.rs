//! # Omok Engine
//!
//! A game engine for Omok (five-in-a-row on a 15x15 board): board
//! representation, win detection, position evaluation, alpha-beta
//! search, and a difficulty-tiered move policy.
//!
//! ## Modules
//!
//! - [`board`]: bitboard-backed 15x15 board, positions, move errors
//! - [`rules`]: consecutive-run counting and win detection
//! - [`eval`]: windowed pattern evaluation and move-ordering heuristics
//! - [`search`]: candidate generation and fixed-depth alpha-beta
//! - [`engine`]: the difficulty-tiered decision engine
//!
//! ## Quick start
//!
//! ```
//! use omok::{AiEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut board = Board::new();
//! for col in 3..7 {
//!     board.place_stone(Pos::new(7, col), Stone::Black);
//! }
//!
//! // Black has four in a row: every difficulty completes the five
//! let engine = AiEngine::new(Difficulty::Hard);
//! let mov = engine.get_move(&board, Stone::Black).unwrap();
//! assert!(mov == Pos::new(7, 2) || mov == Pos::new(7, 7));
//! ```
//!
//! ## Decision order
//!
//! At every difficulty the engine first plays a win-in-one if it has
//! one, then blocks an opponent win-in-one. Only after that gate do
//! the tiers diverge: Easy and Normal use a shallow one-ply policy
//! with blunder noise, Hard and Master search 2 and 4 plies.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, MoveError, Pos, Stone, BOARD_SIZE, CENTER, TOTAL_CELLS};
pub use engine::{AiEngine, DecisionKind, Difficulty, MoveDecision};
pub use eval::{evaluate, PatternScore};
pub use rules::{count_consecutive, has_win_at, scan_board_for_winner, WIN_LEN};
pub use search::{SearchResult, Searcher};
