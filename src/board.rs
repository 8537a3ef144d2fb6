//! Rectangular game board with row-major cell storage.
//!
//! A [`Board`] owns its cells exclusively; cloning produces an independent
//! copy, which is how parallel workers get private lines of play.

use std::borrow::Cow;
use std::fmt;

use crate::constants::{CHAR_CANDIDATE, CHAR_EMPTY, CHAR_FIRST, CHAR_SECOND, MIN_DIM};
use crate::error::{EngineError, Result};
use crate::moves::Move;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Moves first by convention (Black in Othello).
    First,
    Second,
}

impl Side {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// The cell state holding this side's disc.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Side::First => Cell::First,
            Side::Second => Cell::Second,
        }
    }
}

/// State of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    First,
    Second,
    Empty,
    /// Empty cell marked as a legal move, for display only.
    Candidate,
}

impl Cell {
    /// True for `Empty` and `Candidate`: the cell holds no disc.
    #[inline]
    pub fn is_vacant(self) -> bool {
        matches!(self, Cell::Empty | Cell::Candidate)
    }

    /// The side owning the disc on this cell, if any.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::First => Some(Side::First),
            Cell::Second => Some(Side::Second),
            Cell::Empty | Cell::Candidate => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::First => CHAR_FIRST,
            Cell::Second => CHAR_SECOND,
            Cell::Empty => CHAR_EMPTY,
            Cell::Candidate => CHAR_CANDIDATE,
        }
    }
}

/// A `dim_x` by `dim_y` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dim_x: i32,
    dim_y: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board in the conventional starting layout.
    ///
    /// The four center cells alternate: `Second` on the main diagonal of the
    /// 2x2 center, `First` on the anti-diagonal. Everything else is empty.
    pub fn new(dim_x: i32, dim_y: i32) -> Result<Self> {
        let mut board = Self::empty(dim_x, dim_y)?;
        let (cx, cy) = (dim_x / 2, dim_y / 2);
        board.set(cx - 1, cy - 1, Cell::Second)?;
        board.set(cx, cy, Cell::Second)?;
        board.set(cx, cy - 1, Cell::First)?;
        board.set(cx - 1, cy, Cell::First)?;
        Ok(board)
    }

    /// Create a board with every cell empty.
    pub fn empty(dim_x: i32, dim_y: i32) -> Result<Self> {
        // The cell count must fit in i32 so that row-major indices never overflow.
        let len = match dim_x.checked_mul(dim_y) {
            Some(len) if dim_x >= MIN_DIM && dim_y >= MIN_DIM => len,
            _ => return Err(EngineError::InvalidDimensions { dim_x, dim_y }),
        };
        Ok(Self {
            dim_x,
            dim_y,
            cells: vec![Cell::Empty; len as usize],
        })
    }

    #[inline]
    pub fn dim_x(&self) -> i32 {
        self.dim_x
    }

    #[inline]
    pub fn dim_y(&self) -> i32 {
        self.dim_y
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.dim_x).contains(&x) && (0..self.dim_y).contains(&y)
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> usize {
        (y * self.dim_x + x) as usize
    }

    fn check(&self, x: i32, y: i32) -> Result<usize> {
        if self.in_bounds(x, y) {
            Ok(self.idx(x, y))
        } else {
            Err(EngineError::OutOfBounds { x, y })
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Cell> {
        let i = self.check(x, y)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<()> {
        let i = self.check(x, y)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Unchecked read for scanners that have already tested `in_bounds`.
    #[inline]
    pub(crate) fn at(&self, x: i32, y: i32) -> Cell {
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub(crate) fn put(&mut self, x: i32, y: i32, cell: Cell) {
        let i = self.idx(x, y);
        self.cells[i] = cell;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of discs owned by `side`.
    pub fn count(&self, side: Side) -> usize {
        let target = side.cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Number of cells without a disc.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_vacant()).count()
    }

    /// Mark the given moves as `Candidate` for display.
    ///
    /// Moves pointing at occupied or off-board cells are ignored.
    pub fn mark_candidates(&mut self, moves: &[Move]) {
        for mv in moves {
            if self.in_bounds(mv.x, mv.y) && self.at(mv.x, mv.y) == Cell::Empty {
                self.put(mv.x, mv.y, Cell::Candidate);
            }
        }
    }

    /// Reset every `Candidate` cell back to `Empty`.
    pub fn clear_candidates(&mut self) {
        for c in &mut self.cells {
            if *c == Cell::Candidate {
                *c = Cell::Empty;
            }
        }
    }

    pub fn has_candidates(&self) -> bool {
        self.cells.contains(&Cell::Candidate)
    }

    /// This board with every `Candidate` mark reset to `Empty`.
    ///
    /// Borrows when there is nothing to clear.
    pub fn without_candidates(&self) -> Cow<'_, Board> {
        if self.has_candidates() {
            let mut clean = self.clone();
            clean.clear_candidates();
            Cow::Owned(clean)
        } else {
            Cow::Borrowed(self)
        }
    }
}

/// Build a board in the starting layout; the crate's public setup entry point.
pub fn setup_board(dim_x: i32, dim_y: i32) -> Result<Board> {
    Board::new(dim_x, dim_y)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.dim_y {
            for x in 0..self.dim_x {
                write!(f, "{} ", self.at(x, y).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_standard_layout() {
        let board = Board::new(8, 8).unwrap();
        assert_eq!(board.get(3, 3).unwrap(), Cell::Second);
        assert_eq!(board.get(4, 4).unwrap(), Cell::Second);
        assert_eq!(board.get(4, 3).unwrap(), Cell::First);
        assert_eq!(board.get(3, 4).unwrap(), Cell::First);
        assert_eq!(board.count(Side::First), 2);
        assert_eq!(board.count(Side::Second), 2);
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        for (x, y) in [(0, 8), (8, 0), (-3, 4), (1, 5), (5, 1)] {
            assert_eq!(
                Board::new(x, y),
                Err(EngineError::InvalidDimensions { dim_x: x, dim_y: y })
            );
        }
    }

    #[test]
    fn test_new_rejects_oversized_dimensions() {
        for (x, y) in [(65536, 65536), (i32::MAX, 2), (2, i32::MAX)] {
            assert_eq!(
                Board::new(x, y),
                Err(EngineError::InvalidDimensions { dim_x: x, dim_y: y })
            );
        }
    }

    #[test]
    fn test_without_candidates() {
        let mut board = Board::new(4, 4).unwrap();
        assert!(matches!(board.without_candidates(), Cow::Borrowed(_)));
        board.mark_candidates(&[Move::new(0, 0)]);
        let clean = board.without_candidates();
        assert!(!clean.has_candidates());
        assert_eq!(*clean, Board::new(4, 4).unwrap());
        // the original keeps its marks
        assert!(board.has_candidates());
    }

    #[test]
    fn test_smallest_board() {
        let board = Board::new(2, 2).unwrap();
        assert_eq!(board.empty_count(), 0);
        assert_eq!(board.count(Side::First), 2);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new(4, 6).unwrap();
        assert_eq!(board.get(4, 0), Err(EngineError::OutOfBounds { x: 4, y: 0 }));
        assert_eq!(board.get(0, 6), Err(EngineError::OutOfBounds { x: 0, y: 6 }));
        assert_eq!(
            board.set(-1, 2, Cell::First),
            Err(EngineError::OutOfBounds { x: -1, y: 2 })
        );
        assert!(board.get(3, 5).is_ok());
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::new(6, 6).unwrap();
        let mut copy = board.clone();
        copy.set(0, 0, Cell::First).unwrap();
        assert_eq!(board.get(0, 0).unwrap(), Cell::Empty);
        assert_eq!(copy.get(0, 0).unwrap(), Cell::First);
    }

    #[test]
    fn test_candidates_mark_and_clear() {
        let mut board = Board::new(4, 4).unwrap();
        board.mark_candidates(&[Move::new(0, 0), Move::new(1, 1), Move::new(9, 9)]);
        assert_eq!(board.get(0, 0).unwrap(), Cell::Candidate);
        // occupied center cell is left alone
        assert_eq!(board.get(1, 1).unwrap(), Cell::Second);
        assert!(board.has_candidates());
        assert_eq!(board.empty_count(), 12);

        board.clear_candidates();
        assert!(!board.has_candidates());
        assert_eq!(board, Board::new(4, 4).unwrap());
    }

    #[test]
    fn test_display() {
        let board = Board::new(4, 4).unwrap();
        let s = board.to_string();
        assert_eq!(s, ". . . . \n. O X . \n. X O . \n. . . . \n");
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::First.opponent(), Side::Second);
        assert_eq!(Side::Second.cell(), Cell::Second);
        assert_eq!(Cell::First.side(), Some(Side::First));
        assert_eq!(Cell::Candidate.side(), None);
        assert!(Cell::Candidate.is_vacant());
    }
}
