//! Fixed-depth minimax search with alpha-beta pruning
//!
//! The search tree is bounded in two ways: depth is fixed by the
//! caller, and breadth is capped at [`MAX_CANDIDATES`] best-ordered
//! moves per node. Wins found during expansion short-circuit the
//! subtree with a depth-weighted terminal score, so the search prefers
//! the quickest win and the slowest loss.

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, PatternScore};
use crate::rules::has_win_at;

use super::candidates::{generate_candidates, order_candidates, MAX_CANDIDATES};

const INF: i32 = i32::MAX;

/// Outcome of a search: the chosen move (if any legal move exists) and
/// the minimax score backed up to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Pos>,
    pub score: i32,
}

/// Minimax searcher. Holds per-search statistics.
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the most recent [`search`](Self::search) call.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search the position to `depth` plies for `side` to move.
    ///
    /// The board is mutated during the search (stones placed and
    /// retracted) but is restored to its input state on return.
    pub fn search(&mut self, board: &mut Board, side: Stone, depth: u32) -> SearchResult {
        self.nodes = 0;
        self.minimax(board, side, depth, -INF, INF, true)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        side: Stone,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.nodes += 1;

        if depth == 0 {
            return SearchResult {
                best_move: None,
                score: evaluate(board, side),
            };
        }

        let mover = if maximizing { side } else { side.opponent() };

        let mut candidates = generate_candidates(board);
        if candidates.is_empty() {
            // No legal move: drawn position
            return SearchResult {
                best_move: None,
                score: 0,
            };
        }

        order_candidates(board, &mut candidates, mover, mover.opponent());
        candidates.truncate(MAX_CANDIDATES);

        // Depth-weighted terminal score: nearer wins back up larger
        #[allow(clippy::cast_possible_wrap)]
        let win_score = PatternScore::FIVE * (depth as i32 + 1);

        let mut best_move = candidates[0];

        if maximizing {
            let mut best_score = -INF;

            for &mov in &candidates {
                board.place_stone(mov, mover);

                if has_win_at(board, mov, mover) {
                    board.remove_stone(mov);
                    return SearchResult {
                        best_move: Some(mov),
                        score: win_score,
                    };
                }

                let score = self
                    .minimax(board, side, depth - 1, alpha, beta, false)
                    .score;
                board.remove_stone(mov);

                if score > best_score {
                    best_score = score;
                    best_move = mov;
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }

            SearchResult {
                best_move: Some(best_move),
                score: best_score,
            }
        } else {
            let mut best_score = INF;

            for &mov in &candidates {
                board.place_stone(mov, mover);

                if has_win_at(board, mov, mover) {
                    board.remove_stone(mov);
                    return SearchResult {
                        best_move: Some(mov),
                        score: -win_score,
                    };
                }

                let score = self
                    .minimax(board, side, depth - 1, alpha, beta, true)
                    .score;
                board.remove_stone(mov);

                if score < best_score {
                    best_score = score;
                    best_move = mov;
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }

            SearchResult {
                best_move: Some(best_move),
                score: best_score,
            }
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
