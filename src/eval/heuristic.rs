//! Heuristic evaluation for Omok positions
//!
//! Two tiers of scoring, at two price points:
//! - [`evaluate`] / [`pattern_score_for`]: the static evaluator used at
//!   search leaves. Scans every 5-cell window on the board, so a single
//!   strong shape is counted once per overlapping window it joins —
//!   overlapping windows are how multi-directional threats compound.
//! - [`quick_move_score`]: a much cheaper run-length heuristic used
//!   only to order candidates for alpha-beta. Coarse on purpose.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::rules::count_consecutive;

use super::patterns::{PatternScore, DEFENSE_BIAS};

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Window length scored by the pattern evaluator
const WINDOW: i32 = 5;

// Ordering weights for quick_move_score. An immediate five for either
// side dominates, a four comes next, everything else contributes its
// raw run length.
const QUICK_FIVE: i32 = 10_000;
const QUICK_BLOCK_FIVE: i32 = 5_000;
const QUICK_FOUR: i32 = 1_000;
const QUICK_BLOCK_FOUR: i32 = 500;

/// Evaluate the board from the perspective of the given side.
///
/// Returns `pattern_score_for(side)` minus [`DEFENSE_BIAS`] times the
/// opponent's total, so the evaluator values blocking opponent threats
/// slightly above building equivalent threats.
///
/// # Arguments
/// * `board` - The current board state
/// * `side` - The side to evaluate for
///
/// # Returns
/// An i32 score; positive favors `side`, negative favors the opponent.
#[must_use]
pub fn evaluate(board: &Board, side: Stone) -> i32 {
    let opponent = side.opponent();

    let own = pattern_score_for(board, side);
    let theirs = pattern_score_for(board, opponent);

    #[allow(clippy::cast_possible_truncation)]
    {
        own - (f64::from(theirs) * DEFENSE_BIAS) as i32
    }
}

/// Sum the pattern score of every 5-cell window for one side.
///
/// Windows run along all four axes. A window containing any opposing
/// stone scores 0; otherwise it scores by its (stones, empties) split,
/// see [`PatternScore`].
#[must_use]
pub fn pattern_score_for(board: &Board, side: Stone) -> i32 {
    let n = BOARD_SIZE as i32;
    let mut total = 0;

    // Horizontal
    for r in 0..n {
        for c in 0..=n - WINDOW {
            total += window_score(board, r, c, 0, 1, side);
        }
    }
    // Vertical
    for r in 0..=n - WINDOW {
        for c in 0..n {
            total += window_score(board, r, c, 1, 0, side);
        }
    }
    // Diagonal SE
    for r in 0..=n - WINDOW {
        for c in 0..=n - WINDOW {
            total += window_score(board, r, c, 1, 1, side);
        }
    }
    // Diagonal NE
    for r in WINDOW - 1..n {
        for c in 0..=n - WINDOW {
            total += window_score(board, r, c, -1, 1, side);
        }
    }

    total
}

/// Score one 5-cell window starting at (r, c) along (dr, dc).
///
/// The window must lie fully on the board.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn window_score(board: &Board, r: i32, c: i32, dr: i32, dc: i32, side: Stone) -> i32 {
    let mut stones = 0;
    let mut empties = 0;

    for i in 0..WINDOW {
        let pos = Pos::new((r + dr * i) as u8, (c + dc * i) as u8);
        match board.get(pos) {
            s if s == side => stones += 1,
            Stone::Empty => empties += 1,
            _ => return 0, // opposing stone voids the window
        }
    }

    match stones {
        5 => PatternScore::FIVE,
        4 => {
            if empties == 1 {
                PatternScore::LIVE_FOUR
            } else {
                0
            }
        }
        3 => {
            if empties == 2 {
                PatternScore::LIVE_THREE
            } else {
                PatternScore::DEAD_THREE
            }
        }
        2 => {
            if empties == 3 {
                PatternScore::LIVE_TWO
            } else {
                PatternScore::DEAD_TWO
            }
        }
        1 => {
            if empties == 4 {
                PatternScore::SINGLE
            } else {
                0
            }
        }
        _ => 0,
    }
}

/// Sum the pattern score of every 5-cell window passing through `pos`.
///
/// Used by the shallow move policy to price a single cell: the caller
/// places a trial stone at `pos` first, then asks what patterns it
/// participates in.
#[must_use]
pub fn point_score_at(board: &Board, pos: Pos, side: Stone) -> i32 {
    let mut score = 0;

    for &(dr, dc) in &DIRECTIONS {
        for offset in -(WINDOW - 1)..=0 {
            let r = i32::from(pos.row) + dr * offset;
            let c = i32::from(pos.col) + dc * offset;
            // Both window endpoints must be on the board
            if Pos::is_valid(r, c) && Pos::is_valid(r + dr * (WINDOW - 1), c + dc * (WINDOW - 1)) {
                score += window_score(board, r, c, dr, dc, side);
            }
        }
    }

    score
}

/// Cheap combined-threat score for move ordering.
///
/// For each axis through `pos`, measures the run length the mover and
/// the opponent would each reach at that cell. A five for either side
/// dominates, a four is weighted next, all other runs contribute their
/// raw lengths. Ordering heuristic only — far coarser than
/// [`evaluate`].
#[must_use]
pub fn quick_move_score(board: &Board, pos: Pos, side: Stone, opponent: Stone) -> i32 {
    let mut score = 0;

    for &(dr, dc) in &DIRECTIONS {
        let own = count_consecutive(board, pos, dr, dc, side) as i32;
        let theirs = count_consecutive(board, pos, dr, dc, opponent) as i32;

        if own >= 5 {
            score += QUICK_FIVE;
        } else if theirs >= 5 {
            score += QUICK_BLOCK_FIVE;
        } else if own == 4 {
            score += QUICK_FOUR;
        } else if theirs == 4 {
            score += QUICK_BLOCK_FOUR;
        } else {
            score += own + theirs;
        }
    }

    score
}
