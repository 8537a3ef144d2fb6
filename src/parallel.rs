//! Root-parallel search.
//!
//! Each legal root move becomes one task on a rayon pool built for the call.
//! A task clones the root, plays its move, and runs a full-window sequential
//! alpha-beta on the child. Tasks share nothing mutable: the root snapshot is
//! only read, and every board a worker touches is its own clone.
//!
//! Windows are not shared between root branches, so each subtree is pruned
//! only against itself. That costs some pruning compared with a sequential
//! search, in exchange for the root moves running side by side.
//!
//! The reduction is a maximum over negated child scores, taken in move
//! enumeration order with strict comparison, so equal scores resolve to the
//! earlier move regardless of which worker finished first.

use log::{debug, trace};
use rayon::prelude::*;

use crate::board::{setup_board, Board, Side};
use crate::constants::SCORE_INF;
use crate::error::{EngineError, Result};
use crate::eval::{DiscDifference, Evaluator, Score};
use crate::moves::{apply_move, legal_moves, Move};
use crate::search::Searcher;

/// Worker pool configuration for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    /// Worker threads; `None` uses the machine's available parallelism.
    pub threads: Option<usize>,
}

impl SearchConfig {
    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads: Some(threads),
        }
    }

    #[inline]
    pub fn normalized_threads(self) -> usize {
        self.threads
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1)
    }
}

/// Outcome of one root move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootScore {
    pub mv: Move,
    /// Score for the side to move at the root (the negated child score)
    pub score: Score,
    /// Nodes visited in this move's subtree
    pub nodes: u64,
}

/// Outcome of a complete search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Evaluation of the root for the side to move
    pub score: Score,
    /// Move achieving `score`; `None` at depth 0 or when the root side must pass
    pub best_move: Option<Move>,
    /// Per-move results in enumeration order
    pub root_scores: Vec<RootScore>,
    /// Total nodes visited, root included
    pub nodes: u64,
}

/// Pick the best root move: highest score, earliest move on ties.
fn best_root(scores: &[RootScore]) -> Option<&RootScore> {
    scores.iter().fold(None, |best, r| match best {
        Some(b) if r.score <= b.score => Some(b),
        _ => Some(r),
    })
}

/// Combine per-move worker outcomes, given in enumeration order, into one
/// result. The first failed move fails the whole search; no branch is dropped.
fn reduce_root(outcomes: Vec<Result<RootScore>>) -> Result<SearchResult> {
    let root_scores = outcomes.into_iter().collect::<Result<Vec<_>>>()?;
    let nodes = 1 + root_scores.iter().map(|r| r.nodes).sum::<u64>();
    let (score, best_move) = match best_root(&root_scores) {
        Some(b) => (b.score, Some(b.mv)),
        None => (-SCORE_INF, None),
    };
    Ok(SearchResult {
        score,
        best_move,
        root_scores,
        nodes,
    })
}

/// Search `board` for `side` to `depth` plies, fanning the root moves out
/// across a worker pool.
///
/// Any `Candidate` marks on `board` are ignored: workers start from a copy
/// with those cells reset to empty.
pub fn search<E: Evaluator + ?Sized>(
    board: &Board,
    side: Side,
    depth: i32,
    eval: &E,
    config: SearchConfig,
) -> Result<SearchResult> {
    if depth < 0 {
        return Err(EngineError::InvalidDepth(depth));
    }
    let root = board.without_candidates();

    if depth == 0 {
        return Ok(SearchResult {
            score: eval.evaluate(&root, side),
            best_move: None,
            root_scores: Vec::new(),
            nodes: 1,
        });
    }

    let moves = legal_moves(&root, side);
    if moves.is_empty() {
        // Pass or game over: nothing to fan out.
        debug!("no root moves for {side:?}, searching sequentially");
        let mut searcher = Searcher::new(eval);
        let score = searcher.alpha_beta(&root, side, depth, -SCORE_INF, SCORE_INF)?;
        return Ok(SearchResult {
            score,
            best_move: None,
            root_scores: Vec::new(),
            nodes: searcher.nodes,
        });
    }

    let threads = config.normalized_threads();
    debug!(
        "dispatching {} root moves for {side:?} at depth {depth} on {threads} threads",
        moves.len()
    );
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| EngineError::WorkerPool(e.to_string()))?;

    let root = &*root;
    let outcomes: Vec<Result<RootScore>> = pool.install(|| {
        moves
            .par_iter()
            .map(|&mv| {
                let child = apply_move(root, side, mv)?;
                let mut searcher = Searcher::new(eval);
                let child_score = searcher.alpha_beta(
                    &child,
                    side.opponent(),
                    depth - 1,
                    -SCORE_INF,
                    SCORE_INF,
                )?;
                trace!("root move {mv}: {} ({} nodes)", -child_score, searcher.nodes);
                Ok(RootScore {
                    mv,
                    score: -child_score,
                    nodes: searcher.nodes,
                })
            })
            .collect()
    });

    let result = reduce_root(outcomes)?;
    debug!(
        "root score {} via {:?}, {} nodes",
        result.score, result.best_move, result.nodes
    );
    Ok(result)
}

/// Search the starting position of a `dim_x` by `dim_y` board to `depth`
/// plies, with [`Side::First`] to move and [`DiscDifference`] scoring.
///
/// For an explicit position, evaluator, or pool size, call [`search`].
pub fn parallel_prune(depth: i32, dim_x: i32, dim_y: i32) -> Result<Score> {
    if depth < 0 {
        return Err(EngineError::InvalidDepth(depth));
    }
    let board = setup_board(dim_x, dim_y)?;
    let result = search(&board, Side::First, depth, &DiscDifference, SearchConfig::default())?;
    Ok(result.score)
}
