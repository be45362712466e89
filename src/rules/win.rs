//! Win detection for freestyle Omok
//!
//! Two entry points with different trust models:
//! - [`has_win_at`] checks the four axes through a single cell. This is
//!   the hot path after every placement: bounded work (4 directions,
//!   at most 8 steps each) regardless of board population.
//! - [`scan_board_for_winner`] walks every occupied cell. It is the
//!   reconciliation tool for board snapshots that arrived from outside
//!   (e.g. a remote peer) whose placement history is unknown.

use crate::board::{Board, Pos, Stone};

/// Run length required to win. Longer runs also win (freestyle rule).
pub const WIN_LEN: u32 = 5;

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count the run of `stone` through `pos` along one axis.
///
/// Scans up to four steps in the positive direction and four in the
/// negative direction, stopping at a board edge or a non-matching cell.
/// The origin is counted unconditionally, whatever it holds: callers
/// probing a hypothetical placement pass the empty target cell and get
/// the run length the placement would create, without mutating the
/// board.
pub fn count_consecutive(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> u32 {
    let mut count = 1;

    // Positive direction
    for i in 1..WIN_LEN as i32 {
        let r = i32::from(pos.row) + dr * i;
        let c = i32::from(pos.col) + dc * i;
        if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != stone {
            break;
        }
        count += 1;
    }

    // Negative direction
    for i in 1..WIN_LEN as i32 {
        let r = i32::from(pos.row) - dr * i;
        let c = i32::from(pos.col) - dc * i;
        if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != stone {
            break;
        }
        count += 1;
    }

    count
}

/// Check whether `stone` at `pos` completes a run of five or more.
///
/// Works both for a stone already on the board (post-placement check)
/// and for an empty cell (pre-placement probe), because the origin is
/// counted either way.
#[inline]
#[must_use]
pub fn has_win_at(board: &Board, pos: Pos, stone: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| count_consecutive(board, pos, dr, dc, stone) >= WIN_LEN)
}

/// Full-board winner scan.
///
/// O(N²) over occupied cells — use only when the board's placement
/// history is not trusted. Locally built boards should check
/// [`has_win_at`] from the last placed stone instead.
#[must_use]
pub fn scan_board_for_winner(board: &Board) -> Option<Stone> {
    for stone in [Stone::Black, Stone::White] {
        let Some(stones) = board.stones(stone) else {
            continue;
        };
        for pos in stones.iter_ones() {
            if has_win_at(board, pos, stone) {
                return Some(stone);
            }
        }
    }
    None
}
