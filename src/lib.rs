//! Othello-Prune: a root-parallel alpha-beta engine for disc-flipping games.
//!
//! This crate searches positions of an Othello/Reversi-style game on any
//! rectangular board of at least 2x2, to a fixed depth, with the root moves
//! spread across a rayon worker pool.
//!
//! ## Modules
//!
//! - [`constants`] - Direction table, defaults, and evaluation weights
//! - [`error`] - Error taxonomy shared by every operation
//! - [`board`] - Board storage, sides, and the starting layout
//! - [`moves`] - Legal move enumeration and move application (flip rule)
//! - [`eval`] - The evaluator capability and reference heuristics
//! - [`search`] - Sequential negamax alpha-beta (and unpruned minimax)
//! - [`parallel`] - Root-parallel dispatch and result reduction
//! - [`playout`] - Seeded random playouts for varied positions
//!
//! ## Example
//!
//! ```
//! use othello_prune::board::{setup_board, Side};
//! use othello_prune::eval::DiscDifference;
//! use othello_prune::parallel::{parallel_prune, search, SearchConfig};
//!
//! // Evaluate the 8x8 starting position three plies deep
//! let score = parallel_prune(3, 8, 8).unwrap();
//!
//! // Same search with an explicit board and pool size
//! let board = setup_board(8, 8).unwrap();
//! let config = SearchConfig::with_threads(2);
//! let result = search(&board, Side::First, 3, &DiscDifference, config).unwrap();
//! assert_eq!(result.score, score);
//! println!("best move: {:?}", result.best_move);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod eval;
pub mod moves;
pub mod parallel;
pub mod playout;
pub mod search;

pub use board::{setup_board, Board, Cell, Side};
pub use error::{EngineError, Result};
pub use eval::{Evaluator, Score};
pub use moves::Move;
pub use parallel::{parallel_prune, SearchConfig, SearchResult};
