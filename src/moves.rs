//! Legal move enumeration and move application.
//!
//! Both halves share one primitive, `bracketed_run`: walking from a cell in
//! one direction, count the contiguous opponent discs that end on a disc of
//! the acting side. A direction with a non-zero run makes the cell legal, and
//! applying the move flips exactly those runs.
//!
//! Enumeration never writes into the board. Callers that want the legal
//! cells shown on the grid use [`Board::mark_candidates`].

use crate::board::{Board, Side};
use crate::constants::DIRECTIONS;
use crate::error::{EngineError, Result};

/// A placement at `(x, y)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub x: i32,
    pub y: i32,
}

impl Move {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Length of the run of `side`'s opponent discs starting next to `(x, y)` in
/// direction `(dx, dy)` and closed by a disc of `side`. Zero when the run is
/// empty, hits a vacant cell, or runs off the board.
fn bracketed_run(board: &Board, side: Side, x: i32, y: i32, dx: i32, dy: i32) -> usize {
    let own = side.cell();
    let opp = side.opponent().cell();
    let (mut cx, mut cy) = (x + dx, y + dy);
    let mut run = 0;
    while board.in_bounds(cx, cy) {
        let c = board.at(cx, cy);
        if c == opp {
            run += 1;
        } else if c == own {
            return run;
        } else {
            return 0;
        }
        cx += dx;
        cy += dy;
    }
    0
}

fn is_legal_at(board: &Board, side: Side, x: i32, y: i32) -> bool {
    board.at(x, y).is_vacant()
        && DIRECTIONS
            .iter()
            .any(|&(dx, dy)| bracketed_run(board, side, x, y, dx, dy) > 0)
}

/// All legal moves for `side`, in row-major scan order.
///
/// An empty result means `side` must pass; it is not an error.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for y in 0..board.dim_y() {
        for x in 0..board.dim_x() {
            if is_legal_at(board, side, x, y) {
                moves.push(Move::new(x, y));
            }
        }
    }
    moves
}

/// Whether `side` has at least one legal move. Stops at the first one found.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    (0..board.dim_y()).any(|y| (0..board.dim_x()).any(|x| is_legal_at(board, side, x, y)))
}

/// Cells that `mv` would flip for `side`, grouped by direction in scan order.
///
/// Empty when the move is illegal (occupied target or nothing bracketed).
pub fn flips(board: &Board, side: Side, mv: Move) -> Result<Vec<Move>> {
    if !board.in_bounds(mv.x, mv.y) {
        return Err(EngineError::OutOfBounds { x: mv.x, y: mv.y });
    }
    let mut out = Vec::new();
    if !board.at(mv.x, mv.y).is_vacant() {
        return Ok(out);
    }
    for &(dx, dy) in &DIRECTIONS {
        let run = bracketed_run(board, side, mv.x, mv.y, dx, dy) as i32;
        for k in 1..=run {
            out.push(Move::new(mv.x + k * dx, mv.y + k * dy));
        }
    }
    Ok(out)
}

/// Play `mv` for `side` in place, returning the number of discs flipped.
///
/// On error the board is left untouched.
pub fn play_move(board: &mut Board, side: Side, mv: Move) -> Result<usize> {
    let flipped = flips(board, side, mv)?;
    if flipped.is_empty() {
        return Err(EngineError::IllegalMove { x: mv.x, y: mv.y });
    }
    let own = side.cell();
    board.put(mv.x, mv.y, own);
    for f in &flipped {
        board.put(f.x, f.y, own);
    }
    Ok(flipped.len())
}

/// The successor of `board` after `side` plays `mv`. The input is not modified.
pub fn apply_move(board: &Board, side: Side, mv: Move) -> Result<Board> {
    let mut child = board.clone();
    play_move(&mut child, side, mv)?;
    Ok(child)
}

/// Whether neither side can move.
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Side::First) && !has_legal_move(board, Side::Second)
}

/// Count the cells currently vacant but not legal for either side.
///
/// Used by diagnostics to show how much of the board is dead space.
pub fn dead_cells(board: &Board) -> usize {
    let mut n = 0;
    for y in 0..board.dim_y() {
        for x in 0..board.dim_x() {
            if board.at(x, y).is_vacant()
                && !is_legal_at(board, Side::First, x, y)
                && !is_legal_at(board, Side::Second, x, y)
            {
                n += 1;
            }
        }
    }
    n
}
