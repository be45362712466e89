//! Position evaluation and heuristics

pub mod heuristic;
pub mod patterns;

// Re-exports
pub use heuristic::{evaluate, pattern_score_for, point_score_at, quick_move_score};
pub use patterns::{PatternScore, DEFENSE_BIAS, OPPONENT_DISCOUNT};
