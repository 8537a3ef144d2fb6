//! Static evaluation.
//!
//! The search only needs the [`Evaluator`] capability; the concrete scoring
//! functions here are small reference heuristics for the CLI and tests.

use crate::board::{Board, Side};
use crate::constants::{CORNER_WEIGHT, EDGE_WEIGHT};

/// Evaluation score. Higher is better for the side it is reported for.
pub type Score = f32;

/// Scores a position from one side's point of view.
///
/// Implementations must be pure: the same board and side always give the
/// same score, bit for bit, on every thread.
pub trait Evaluator: Sync {
    fn evaluate(&self, board: &Board, side: Side) -> Score;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Side) -> Score + Sync,
{
    #[inline]
    fn evaluate(&self, board: &Board, side: Side) -> Score {
        self(board, side)
    }
}

/// Own discs minus opponent discs.
#[derive(Copy, Clone, Debug, Default)]
pub struct DiscDifference;

impl Evaluator for DiscDifference {
    fn evaluate(&self, board: &Board, side: Side) -> Score {
        board.count(side) as Score - board.count(side.opponent()) as Score
    }
}

/// Disc difference plus bonuses for stable-ish cells: corners and edges.
#[derive(Copy, Clone, Debug, Default)]
pub struct Positional;

impl Positional {
    fn weight(board: &Board, x: i32, y: i32) -> Score {
        let on_x_edge = x == 0 || x == board.dim_x() - 1;
        let on_y_edge = y == 0 || y == board.dim_y() - 1;
        match (on_x_edge, on_y_edge) {
            (true, true) => 1.0 + CORNER_WEIGHT,
            (true, false) | (false, true) => 1.0 + EDGE_WEIGHT,
            (false, false) => 1.0,
        }
    }
}

impl Evaluator for Positional {
    fn evaluate(&self, board: &Board, side: Side) -> Score {
        let mut s = 0.0;
        for y in 0..board.dim_y() {
            for x in 0..board.dim_x() {
                match board.at(x, y).side() {
                    Some(owner) if owner == side => s += Self::weight(board, x, y),
                    Some(_) => s -= Self::weight(board, x, y),
                    None => {}
                }
            }
        }
        s
    }
}
