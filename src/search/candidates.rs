//! Candidate generation and move ordering
//!
//! Search breadth is bounded to the active frontier: only empty cells
//! near existing stones are worth considering, which keeps the fixed
//! search depth tractable on a 225-cell board.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, CENTER};
use crate::eval::quick_move_score;

/// Chebyshev radius around existing stones within which empty cells
/// become candidates.
pub const CANDIDATE_RADIUS: i32 = 2;

/// Width cap: at each search node only this many of the best-ordered
/// candidates are explored. A deliberate completeness/runtime trade-off
/// — the search is an approximation of minimax, not a guarantee.
pub const MAX_CANDIDATES: usize = 20;

/// Generate candidate moves near existing stones.
///
/// Returns every empty cell within [`CANDIDATE_RADIUS`] of any stone,
/// deduplicated. On an empty board, returns exactly the center cell.
/// A full board yields an empty list — the caller's draw signal.
#[must_use]
pub fn generate_candidates(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![CENTER];
    }

    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut candidates = Vec::with_capacity(64);

    for pos in board.black.iter_ones().chain(board.white.iter_ones()) {
        for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                let r = i32::from(pos.row) + dr;
                let c = i32::from(pos.col) + dc;

                if !Pos::is_valid(r, c) {
                    continue;
                }

                #[allow(clippy::cast_sign_loss)]
                let (r_usize, c_usize) = (r as usize, c as usize);

                if seen[r_usize][c_usize] {
                    continue;
                }
                seen[r_usize][c_usize] = true;

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let candidate = Pos::new(r as u8, c as u8);

                if board.is_empty(candidate) {
                    candidates.push(candidate);
                }
            }
        }
    }

    candidates
}

/// Order candidates descending by [`quick_move_score`] so alpha-beta
/// visits the most promising moves first and prunes early.
pub fn order_candidates(board: &Board, candidates: &mut Vec<Pos>, side: Stone, opponent: Stone) {
    let mut scored: Vec<(Pos, i32)> = candidates
        .iter()
        .map(|&pos| (pos, quick_move_score(board, pos, side, opponent)))
        .collect();

    scored.sort_unstable_by(|a, b| b.1.cmp(&a.1));

    candidates.clear();
    candidates.extend(scored.into_iter().map(|(pos, _)| pos));
}
