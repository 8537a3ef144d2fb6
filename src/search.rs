//! Sequential negamax search with alpha-beta pruning.
//!
//! Scores are always reported from the point of view of the side to move;
//! a caller negates a child's score to compare it with its siblings.
//!
//! Node handling:
//! - depth exhausted, or neither side can move: static evaluation
//! - side to move has no move but the opponent does: pass (consumes one ply)
//! - otherwise: branch over legal moves in scan order, pruning on `alpha >= beta`
//!
//! [`Searcher::minimax`] runs the same recursion without pruning and exists
//! so that pruning can be checked against the exhaustive answer.
//!
//! Both entry points search a copy with `Candidate` marks cleared, so marks
//! left for display never reach the evaluator or a child node.

use crate::board::{Board, Side};
use crate::constants::SCORE_INF;
use crate::error::{EngineError, Result};
use crate::eval::{Evaluator, Score};
use crate::moves::{apply_move, has_legal_move, legal_moves};

/// A single-threaded searcher bound to one evaluator.
///
/// Counts visited nodes; each parallel worker owns its own `Searcher`.
pub struct Searcher<'e, E: Evaluator + ?Sized> {
    eval: &'e E,
    /// Nodes visited since construction
    pub nodes: u64,
}

impl<'e, E: Evaluator + ?Sized> Searcher<'e, E> {
    pub fn new(eval: &'e E) -> Self {
        Self { eval, nodes: 0 }
    }

    /// Best score for `side` within the window `(alpha, beta)`.
    ///
    /// With the full window the result is exact. Fail-soft: a result outside
    /// the window is still a valid bound.
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        side: Side,
        depth: i32,
        alpha: Score,
        beta: Score,
    ) -> Result<Score> {
        if depth < 0 {
            return Err(EngineError::InvalidDepth(depth));
        }
        self.negamax(&board.without_candidates(), side, depth, alpha, beta)
    }

    /// Exact negamax value for `side` without any pruning.
    pub fn minimax(&mut self, board: &Board, side: Side, depth: i32) -> Result<Score> {
        if depth < 0 {
            return Err(EngineError::InvalidDepth(depth));
        }
        self.exhaustive(&board.without_candidates(), side, depth)
    }

    fn negamax(
        &mut self,
        board: &Board,
        side: Side,
        depth: i32,
        mut alpha: Score,
        beta: Score,
    ) -> Result<Score> {
        self.nodes += 1;
        if depth == 0 {
            return Ok(self.eval.evaluate(board, side));
        }

        let moves = legal_moves(board, side);
        if moves.is_empty() {
            if !has_legal_move(board, side.opponent()) {
                return Ok(self.eval.evaluate(board, side));
            }
            let score = self.negamax(board, side.opponent(), depth - 1, -beta, -alpha)?;
            return Ok(-score);
        }

        let mut best = -SCORE_INF;
        for mv in moves {
            let child = apply_move(board, side, mv)?;
            let score = -self.negamax(&child, side.opponent(), depth - 1, -beta, -alpha)?;
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }

    fn exhaustive(&mut self, board: &Board, side: Side, depth: i32) -> Result<Score> {
        self.nodes += 1;
        if depth == 0 {
            return Ok(self.eval.evaluate(board, side));
        }

        let moves = legal_moves(board, side);
        if moves.is_empty() {
            if !has_legal_move(board, side.opponent()) {
                return Ok(self.eval.evaluate(board, side));
            }
            return Ok(-self.exhaustive(board, side.opponent(), depth - 1)?);
        }

        let mut best = -SCORE_INF;
        for mv in moves {
            let child = apply_move(board, side, mv)?;
            let score = -self.exhaustive(&child, side.opponent(), depth - 1)?;
            if score > best {
                best = score;
            }
        }
        Ok(best)
    }
}

/// Full-window alpha-beta from `board` for `side`.
pub fn search_sequential<E: Evaluator + ?Sized>(
    board: &Board,
    side: Side,
    depth: i32,
    eval: &E,
) -> Result<Score> {
    Searcher::new(eval).alpha_beta(board, side, depth, -SCORE_INF, SCORE_INF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::eval::{DiscDifference, Positional};
    use crate::moves::Move;

    #[test]
    fn test_depth_zero_is_static_eval() {
        let board = Board::new(8, 8).unwrap();
        let s = search_sequential(&board, Side::First, 0, &Positional).unwrap();
        assert_eq!(s, Positional.evaluate(&board, Side::First));
    }

    #[test]
    fn test_depth_one_picks_best_reply() {
        let board = Board::new(8, 8).unwrap();
        // every opening move flips exactly one disc: 4 vs 1
        let s = search_sequential(&board, Side::First, 1, &DiscDifference).unwrap();
        assert_eq!(s, 3.0);
    }

    #[test]
    fn test_negative_depth_rejected() {
        let board = Board::new(4, 4).unwrap();
        assert_eq!(
            search_sequential(&board, Side::First, -1, &DiscDifference),
            Err(EngineError::InvalidDepth(-1))
        );
    }

    #[test]
    fn test_pruning_matches_minimax() {
        let board = Board::new(6, 6).unwrap();
        for depth in 0..=4 {
            let mut ab = Searcher::new(&Positional);
            let mut mm = Searcher::new(&Positional);
            let a = ab.alpha_beta(&board, Side::First, depth, -SCORE_INF, SCORE_INF).unwrap();
            let m = mm.minimax(&board, Side::First, depth).unwrap();
            assert_eq!(a, m, "depth {depth}");
            assert!(ab.nodes <= mm.nodes);
        }
    }

    #[test]
    fn test_pass_consumes_a_ply() {
        // . O X : Second has no move, First can play (0,0)
        // . . .
        let mut board = Board::empty(3, 2).unwrap();
        board.set(1, 0, Cell::Second).unwrap();
        board.set(2, 0, Cell::First).unwrap();
        assert!(legal_moves(&board, Side::Second).is_empty());
        assert_eq!(legal_moves(&board, Side::First), vec![Move::new(0, 0)]);

        // depth 1: the pass is the only ply, so the board is evaluated for First
        let s = search_sequential(&board, Side::Second, 1, &DiscDifference).unwrap();
        assert_eq!(s, -DiscDifference.evaluate(&board, Side::First));

        // depth 2: First captures, leaving three First discs
        let s = search_sequential(&board, Side::Second, 2, &DiscDifference).unwrap();
        assert_eq!(s, -3.0);
    }

    #[test]
    fn test_terminal_board_evaluates_immediately() {
        let board = Board::new(2, 2).unwrap();
        let mut searcher = Searcher::new(&DiscDifference);
        let s = searcher
            .alpha_beta(&board, Side::First, 5, -SCORE_INF, SCORE_INF)
            .unwrap();
        assert_eq!(s, 0.0);
        assert_eq!(searcher.nodes, 1);
    }

    #[test]
    fn test_candidate_marks_never_reach_evaluator() {
        let board = Board::new(6, 6).unwrap();
        let mut marked = board.clone();
        marked.mark_candidates(&legal_moves(&board, Side::First));

        let seen_candidate = |b: &Board, s: Side| -> Score {
            if b.has_candidates() {
                Score::NAN
            } else {
                DiscDifference.evaluate(b, s)
            }
        };
        for depth in 0..=3 {
            let clean = search_sequential(&board, Side::First, depth, &DiscDifference).unwrap();
            let s = search_sequential(&marked, Side::First, depth, &seen_candidate).unwrap();
            assert_eq!(s, clean, "alpha-beta depth {depth}");
            let m = Searcher::new(&seen_candidate)
                .minimax(&marked, Side::First, depth)
                .unwrap();
            assert_eq!(m, clean, "minimax depth {depth}");
        }
        // the caller's board keeps its marks
        assert!(marked.has_candidates());
    }
}
