//! Seeded random playouts.
//!
//! Plays uniformly random legal moves from the starting layout to reach
//! varied mid-game positions for demos and tests. A given seed always
//! produces the same position.

use crate::board::{setup_board, Board, Side};
use crate::error::Result;
use crate::moves::{legal_moves, play_move};

/// A position reached by a playout, with the side to move next.
#[derive(Debug, Clone)]
pub struct Playout {
    pub board: Board,
    pub to_move: Side,
    /// Plies actually played, passes included
    pub plies: usize,
}

/// Play up to `plies` random plies on `board`, starting with `side`.
///
/// A side without moves passes; two passes in a row end the playout early.
pub fn random_playout(
    board: &mut Board,
    mut side: Side,
    plies: usize,
    rng: &mut fastrand::Rng,
) -> Result<Playout> {
    let mut played = 0;
    let mut passes = 0;

    while played < plies && passes < 2 {
        let moves = legal_moves(board, side);
        if moves.is_empty() {
            passes += 1;
        } else {
            passes = 0;
            let mv = moves[rng.usize(..moves.len())];
            play_move(board, side, mv)?;
        }
        side = side.opponent();
        played += 1;
    }

    Ok(Playout {
        board: board.clone(),
        to_move: side,
        plies: played,
    })
}

/// Start a `dim_x` by `dim_y` game and play `plies` random plies from it.
pub fn random_position(dim_x: i32, dim_y: i32, plies: usize, seed: u64) -> Result<Playout> {
    let mut board = setup_board(dim_x, dim_y)?;
    let mut rng = fastrand::Rng::with_seed(seed);
    random_playout(&mut board, Side::First, plies, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_position() {
        let a = random_position(8, 8, 20, 42).unwrap();
        let b = random_position(8, 8, 20, 42).unwrap();
        assert_eq!(a.board, b.board);
        assert_eq!(a.to_move, b.to_move);
    }

    #[test]
    fn test_zero_plies_is_start() {
        let p = random_position(6, 4, 0, 7).unwrap();
        assert_eq!(p.board, setup_board(6, 4).unwrap());
        assert_eq!(p.to_move, Side::First);
        assert_eq!(p.plies, 0);
    }

    #[test]
    fn test_disc_count_grows_by_at_most_one_per_ply() {
        let p = random_position(8, 8, 10, 3).unwrap();
        let discs = p.board.count(Side::First) + p.board.count(Side::Second);
        assert!(discs > 4 && discs <= 4 + p.plies);
        assert!(!p.board.has_candidates());
    }

    #[test]
    fn test_playout_stops_when_game_ends() {
        let p = random_position(2, 2, 10, 1).unwrap();
        assert_eq!(p.plies, 2);
        assert_eq!(p.board, setup_board(2, 2).unwrap());
    }
}
