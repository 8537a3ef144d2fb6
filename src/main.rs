//! Othello-Prune command line.
//!
//! ## Usage
//!
//! - `othello-prune` - Run a small demo search
//! - `othello-prune search --depth 6` - Search the 8x8 starting position
//! - `othello-prune moves --random-plies 12 --seed 5` - Show legal moves
//!
//! Set `RUST_LOG=debug` (or pass `--verbose`) to see dispatch details.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use othello_prune::board::Board;
use othello_prune::constants::{DEFAULT_DEPTH, DEFAULT_DIM};
use othello_prune::eval::{DiscDifference, Evaluator, Positional};
use othello_prune::moves::{dead_cells, legal_moves};
use othello_prune::parallel::{search, SearchConfig, SearchResult};
use othello_prune::playout::{random_position, Playout};

/// Othello-Prune: root-parallel alpha-beta search for Othello-style games
#[derive(Parser)]
#[command(name = "othello-prune")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log search dispatch at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a position and print its evaluation
    Search {
        #[command(flatten)]
        position: PositionArgs,
        /// Search depth in plies
        #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
        depth: i32,
        /// Worker threads (defaults to available parallelism)
        #[arg(short, long)]
        threads: Option<usize>,
        /// Static evaluator
        #[arg(short, long, value_enum, default_value_t = EvalKind::Disc)]
        eval: EvalKind,
    },
    /// Print a position with its legal moves marked
    Moves {
        #[command(flatten)]
        position: PositionArgs,
    },
    /// Run a small demo search
    Demo,
}

#[derive(Args)]
struct PositionArgs {
    /// Board width
    #[arg(long, default_value_t = DEFAULT_DIM)]
    width: i32,
    /// Board height
    #[arg(long, default_value_t = DEFAULT_DIM)]
    height: i32,
    /// Random plies played from the starting layout before searching
    #[arg(long, default_value_t = 0)]
    random_plies: usize,
    /// Seed for the random plies
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

impl PositionArgs {
    fn build(&self) -> Result<Playout> {
        random_position(self.width, self.height, self.random_plies, self.seed)
            .with_context(|| format!("cannot set up a {}x{} board", self.width, self.height))
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum EvalKind {
    /// Disc difference
    Disc,
    /// Disc difference with corner and edge bonuses
    Positional,
}

impl EvalKind {
    fn evaluator(self) -> &'static dyn Evaluator {
        match self {
            EvalKind::Disc => &DiscDifference,
            EvalKind::Positional => &Positional,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Some(Commands::Search {
            position,
            depth,
            threads,
            eval,
        }) => {
            let playout = position.build()?;
            let config = SearchConfig { threads };
            println!("{}", playout.board);
            println!("To move: {:?}", playout.to_move);
            let result = search(&playout.board, playout.to_move, depth, eval.evaluator(), config)
                .with_context(|| format!("search to depth {depth} failed"))?;
            print_result(&result);
        }
        Some(Commands::Moves { position }) => {
            let playout = position.build()?;
            show_moves(&playout);
        }
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn show_moves(playout: &Playout) {
    let moves = legal_moves(&playout.board, playout.to_move);
    let mut marked: Board = playout.board.clone();
    marked.mark_candidates(&moves);
    println!("{marked}");
    println!("To move: {:?}", playout.to_move);
    let list: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    println!("Legal moves ({}): {}", moves.len(), list.join(" "));
    println!("Dead cells: {}", dead_cells(&playout.board));
}

fn print_result(result: &SearchResult) {
    for r in &result.root_scores {
        println!("  {:<10} {:>8.2}  ({} nodes)", r.mv.to_string(), r.score, r.nodes);
    }
    match result.best_move {
        Some(mv) => println!("Best move: {mv}"),
        None => println!("Best move: none"),
    }
    println!("Score: {:.2}", result.score);
    println!("Nodes: {}", result.nodes);
}

fn run_demo() -> Result<()> {
    println!("Othello-Prune: root-parallel alpha-beta\n");

    println!("=== Starting Position ===");
    let start = random_position(DEFAULT_DIM, DEFAULT_DIM, 0, 0)?;
    show_moves(&start);

    println!("\n=== Depth 4 Search ===");
    let result = search(&start.board, start.to_move, 4, &Positional, SearchConfig::default())?;
    print_result(&result);
    Ok(())
}
