//! Constants for board geometry, direction scanning, and search defaults.
//!
//! Board dimensions are runtime values (every [`Board`](crate::board::Board)
//! carries its own `dim_x`/`dim_y`), so this module only holds the fixed
//! parts of the rules and the defaults used by the CLI and `parallel_prune`.

use crate::eval::Score;

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board width and height (standard Othello is 8x8).
pub const DEFAULT_DIM: i32 = 8;

/// Smallest accepted dimension: the starting layout needs a 2x2 center.
pub const MIN_DIM: i32 = 2;

// =============================================================================
// Direction Scanning
// =============================================================================

/// Number of directions scanned per cell when testing or applying a move.
pub const MAX_MOVES: usize = 8;

/// Unit vectors `(dx, dy)` scanned from a candidate cell.
/// Order: NW, N, NE, W, E, SW, S, SE (row-major over the 3x3 neighbourhood).
pub const DIRECTIONS: [(i32, i32); MAX_MOVES] = [
    (-1, -1), // NW
    (0, -1),  // N
    (1, -1),  // NE
    (-1, 0),  // W
    (1, 0),   // E
    (-1, 1),  // SW
    (0, 1),   // S
    (1, 1),   // SE
];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies.
pub const DEFAULT_DEPTH: i32 = 5;

/// Window bound used for a full `(-inf, +inf)` alpha-beta window.
pub const SCORE_INF: Score = Score::INFINITY;

// =============================================================================
// Positional Evaluation Weights
// =============================================================================

/// Bonus per owned corner in the positional evaluator.
pub const CORNER_WEIGHT: Score = 10.0;

/// Bonus per owned non-corner edge cell in the positional evaluator.
pub const EDGE_WEIGHT: Score = 2.0;

// =============================================================================
// Cell Display Characters
// =============================================================================

/// First side's disc (moves first).
pub const CHAR_FIRST: char = 'X';

/// Second side's disc.
pub const CHAR_SECOND: char = 'O';

/// Empty cell.
pub const CHAR_EMPTY: char = '.';

/// Empty cell currently marked as a legal move.
pub const CHAR_CANDIDATE: char = '*';
