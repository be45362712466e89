//! Pattern scores for windowed evaluation
//!
//! Every 5-cell window on the board is scored by how many own stones
//! and empties it contains; a single opposing stone voids the window.
//! The exact values are tuning knobs — what matters is the strict
//! ordering five > live four >> live three > dead three ~ live two >
//! dead two > single stone, and the live/dead split for twos and
//! threes (an open-ended run is more dangerous than a capped one).

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 100_000;
    /// Live four: four own stones and one empty in the window
    pub const LIVE_FOUR: i32 = 10_000;
    /// Live three: three own stones, two empties
    pub const LIVE_THREE: i32 = 1_000;
    /// Dead three: three own stones, single empty
    pub const DEAD_THREE: i32 = 100;
    /// Live two: two own stones, three empties
    pub const LIVE_TWO: i32 = 100;
    /// Dead two: two own stones, fewer empties
    pub const DEAD_TWO: i32 = 10;
    /// Lone stone in an otherwise empty window
    pub const SINGLE: i32 = 1;
}

/// Weight on the opponent's pattern total in [`super::evaluate`].
///
/// Values above 1.0 bias the evaluator toward defense: blocking an
/// opponent threat is worth slightly more than building an equivalent
/// threat of one's own.
pub const DEFENSE_BIAS: f64 = 1.2;

/// Discount on the opponent's hypothetical gain in the shallow
/// (Easy/Normal) move policy: "what the opponent would get from this
/// cell" counts at 90% of "what we get from it".
pub const OPPONENT_DISCOUNT: f64 = 0.9;
