//! Decision engine: difficulty tiers on top of the search stack
//!
//! Every difficulty shares the same front gate: if any single move wins
//! outright, play it; if the opponent has such a move, block it. Only
//! after that gate do the tiers diverge — Easy and Normal use a shallow
//! one-ply policy with deliberate blunder noise, Hard and Master run
//! the alpha-beta search at fixed depth.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos, Stone, BOARD_SIZE, CENTER};
use crate::eval::{point_score_at, PatternScore, OPPONENT_DISCOUNT};
use crate::rules::has_win_at;
use crate::search::{generate_candidates, Searcher};

/// Playing strength tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Master,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Normal
    }
}

impl Difficulty {
    /// Search depth for this tier, or `None` for the shallow policy.
    #[must_use]
    pub fn search_depth(self) -> Option<u32> {
        match self {
            Difficulty::Easy | Difficulty::Normal => None,
            Difficulty::Hard => Some(2),
            Difficulty::Master => Some(4),
        }
    }

    /// Probability that the shallow policy discards its chosen move
    /// for a random candidate.
    #[must_use]
    pub fn blunder_rate(self) -> f64 {
        match self {
            Difficulty::Easy => 0.4,
            Difficulty::Normal => 0.2,
            Difficulty::Hard | Difficulty::Master => 0.0,
        }
    }
}

/// How a decision was reached. Gives callers (and tests) visibility
/// into which stage of the pipeline produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// A single move completes five for the engine's side
    ImmediateWin,
    /// A single opponent move would complete five; this blocks it
    Block,
    /// Shallow one-ply policy (Easy/Normal)
    Heuristic,
    /// Fixed-depth alpha-beta search (Hard/Master)
    Search,
    /// No legal move available
    Draw,
}

/// A decided move with its score and provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDecision {
    pub best_move: Option<Pos>,
    pub score: i32,
    pub kind: DecisionKind,
}

/// The Omok AI engine.
///
/// Stateless between calls: each decision works from the board it is
/// given. The caller's board is never mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiEngine {
    pub difficulty: Difficulty,
}

impl AiEngine {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Decide a move for `side`, returning just the chosen cell.
    #[must_use]
    pub fn get_move(&self, board: &Board, side: Stone) -> Option<Pos> {
        self.decide_move(board, side).best_move
    }

    /// Decide a move for `side` with full provenance.
    ///
    /// Decision order, at every difficulty:
    /// 1. Win in one if possible
    /// 2. Block an opponent win-in-one
    /// 3. Tier policy: shallow heuristic (Easy/Normal) or alpha-beta
    ///    search (Hard/Master)
    #[must_use]
    pub fn decide_move(&self, board: &Board, side: Stone) -> MoveDecision {
        let opponent = side.opponent();

        if let Some(pos) = find_immediate_win(board, side) {
            return MoveDecision {
                best_move: Some(pos),
                score: PatternScore::FIVE,
                kind: DecisionKind::ImmediateWin,
            };
        }
        if let Some(pos) = find_immediate_win(board, opponent) {
            return MoveDecision {
                best_move: Some(pos),
                score: 0,
                kind: DecisionKind::Block,
            };
        }

        // Search and the shallow policy both mutate their board, so
        // work on a copy.
        let mut work = board.clone();

        match self.difficulty.search_depth() {
            Some(depth) => {
                let result = Searcher::new().search(&mut work, side, depth);
                match result.best_move {
                    Some(pos) => MoveDecision {
                        best_move: Some(pos),
                        score: result.score,
                        kind: DecisionKind::Search,
                    },
                    None => MoveDecision {
                        best_move: None,
                        score: 0,
                        kind: DecisionKind::Draw,
                    },
                }
            }
            None => best_move_by_score(&mut work, side, opponent, self.difficulty),
        }
    }
}

/// Find a cell where placing `stone` would complete five in a row.
///
/// Probes every empty cell without placing: the run counter includes
/// the origin cell unconditionally, so an empty cell flanked by runs
/// summing to four reads as a five.
#[must_use]
pub fn find_immediate_win(board: &Board, stone: Stone) -> Option<Pos> {
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(row, col);
            if board.is_empty(pos) && has_win_at(board, pos, stone) {
                return Some(pos);
            }
        }
    }
    None
}

/// Shallow one-ply policy for the Easy and Normal tiers.
///
/// Each candidate is priced as a center-proximity bonus plus the
/// pattern score of the cell for `side` plus a discounted pattern
/// score for the opponent (blocking value). Ties keep the earliest
/// candidate. The tier's blunder rate then randomly swaps the pick
/// for an arbitrary candidate.
fn best_move_by_score(
    board: &mut Board,
    side: Stone,
    opponent: Stone,
    difficulty: Difficulty,
) -> MoveDecision {
    let candidates = generate_candidates(board);
    if candidates.is_empty() {
        return MoveDecision {
            best_move: None,
            score: 0,
            kind: DecisionKind::Draw,
        };
    }

    let mut best_move = candidates[0];
    let mut best_score = i32::MIN;

    for &pos in &candidates {
        let mut score = proximity_bonus(pos);

        board.place_stone(pos, side);
        score += point_score_at(board, pos, side);
        board.remove_stone(pos);

        board.place_stone(pos, opponent);
        #[allow(clippy::cast_possible_truncation)]
        {
            score += (f64::from(point_score_at(board, pos, opponent)) * OPPONENT_DISCOUNT) as i32;
        }
        board.remove_stone(pos);

        if score > best_score {
            best_score = score;
            best_move = pos;
        }
    }

    let rate = difficulty.blunder_rate();
    if rate > 0.0 {
        let mut rng = rand::thread_rng();
        if rng.gen_bool(rate) {
            if let Some(&pick) = candidates.choose(&mut rng) {
                best_move = pick;
            }
        }
    }

    MoveDecision {
        best_move: Some(best_move),
        score: best_score,
        kind: DecisionKind::Heuristic,
    }
}

/// Bonus for cells near the board center.
fn proximity_bonus(pos: Pos) -> i32 {
    let center = i32::from(CENTER.row);
    (center - (i32::from(pos.row) - center).abs()) + (center - (i32::from(pos.col) - center).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    const ALL_DIFFICULTIES: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Master,
    ];

    fn board_with_black_four() -> Board {
        let mut board = Board::new();
        for col in 3..7 {
            board.place_stone(Pos::new(7, col), Stone::Black);
        }
        board
    }

    #[test]
    fn test_immediate_win_beats_every_tier() {
        let board = board_with_black_four();

        for difficulty in ALL_DIFFICULTIES {
            let engine = AiEngine::new(difficulty);
            let decision = engine.decide_move(&board, Stone::Black);

            assert_eq!(decision.kind, DecisionKind::ImmediateWin, "{:?}", difficulty);
            let mov = decision.best_move.unwrap();
            assert!(
                mov == Pos::new(7, 2) || mov == Pos::new(7, 7),
                "{:?} must complete the five, got {:?}",
                difficulty,
                mov
            );
        }
    }

    #[test]
    fn test_block_beats_every_tier() {
        let board = board_with_black_four();

        for difficulty in ALL_DIFFICULTIES {
            let engine = AiEngine::new(difficulty);
            let decision = engine.decide_move(&board, Stone::White);

            assert_eq!(decision.kind, DecisionKind::Block, "{:?}", difficulty);
            let mov = decision.best_move.unwrap();
            assert!(
                mov == Pos::new(7, 2) || mov == Pos::new(7, 7),
                "{:?} must block the four, got {:?}",
                difficulty,
                mov
            );
        }
    }

    #[test]
    fn test_empty_board_opens_center() {
        for difficulty in ALL_DIFFICULTIES {
            let engine = AiEngine::new(difficulty);
            let board = Board::new();
            assert_eq!(
                engine.get_move(&board, Stone::Black),
                Some(Pos::new(7, 7)),
                "{:?} must open at the center",
                difficulty
            );
        }
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            let band = (usize::from(pos.row) + usize::from(pos.col) / 3) % 2;
            let stone = if band == 0 { Stone::Black } else { Stone::White };
            board.place_stone(pos, stone);
        }

        for difficulty in ALL_DIFFICULTIES {
            let decision = AiEngine::new(difficulty).decide_move(&board, Stone::Black);
            assert_eq!(decision.kind, DecisionKind::Draw, "{:?}", difficulty);
            assert_eq!(decision.best_move, None);
        }
    }

    #[test]
    fn test_caller_board_unchanged() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);
        let snapshot = board.clone();

        for difficulty in ALL_DIFFICULTIES {
            AiEngine::new(difficulty).decide_move(&board, Stone::White);
            assert_eq!(board, snapshot, "{:?} mutated the caller's board", difficulty);
        }
    }

    #[test]
    fn test_easy_move_is_legal_and_local() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        // Blunder noise is random: every outcome must still be a legal
        // candidate near the existing stone.
        for _ in 0..50 {
            let mov = AiEngine::new(Difficulty::Easy)
                .get_move(&board, Stone::White)
                .unwrap();
            assert!(board.is_empty(mov));
            let dr = (i32::from(mov.row) - 7).abs();
            let dc = (i32::from(mov.col) - 7).abs();
            assert!(dr.max(dc) <= 2, "move {:?} not near the stone", mov);
        }
    }

    #[test]
    fn test_shallow_policy_extends_or_blocks() {
        let mut board = Board::new();
        // Open black three: a sensible one-ply reply lands adjacent
        // on the same row
        for col in 6..9 {
            board.place_stone(Pos::new(7, col), Stone::Black);
        }

        let decision = AiEngine::new(Difficulty::Normal).decide_move(&board, Stone::Black);
        assert_eq!(decision.kind, DecisionKind::Heuristic);
        assert!(decision.best_move.is_some());
    }

    #[test]
    fn test_hard_and_master_report_search() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::White);

        for difficulty in [Difficulty::Hard, Difficulty::Master] {
            let decision = AiEngine::new(difficulty).decide_move(&board, Stone::Black);
            assert_eq!(decision.kind, DecisionKind::Search, "{:?}", difficulty);
            assert!(decision.best_move.is_some());
        }
    }

    #[test]
    fn test_find_immediate_win_probes_without_placing() {
        let board = board_with_black_four();
        let snapshot = board.clone();

        let win = find_immediate_win(&board, Stone::Black);
        assert!(win == Some(Pos::new(7, 2)) || win == Some(Pos::new(7, 7)));
        assert_eq!(board, snapshot);

        assert_eq!(find_immediate_win(&Board::new(), Stone::Black), None);
    }

    #[test]
    fn test_difficulty_parameters() {
        assert_eq!(Difficulty::Easy.search_depth(), None);
        assert_eq!(Difficulty::Normal.search_depth(), None);
        assert_eq!(Difficulty::Hard.search_depth(), Some(2));
        assert_eq!(Difficulty::Master.search_depth(), Some(4));

        assert!((Difficulty::Easy.blunder_rate() - 0.4).abs() < f64::EPSILON);
        assert!((Difficulty::Normal.blunder_rate() - 0.2).abs() < f64::EPSILON);
        assert_eq!(Difficulty::Hard.blunder_rate(), 0.0);
        assert_eq!(Difficulty::Master.blunder_rate(), 0.0);

        assert!(Difficulty::Easy < Difficulty::Master);
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }
}
