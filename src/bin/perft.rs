use anyhow::{Context, Result};
use clap::Parser;
use greedychess::board::{Board, Color};
use greedychess::moves::apply_move;
use greedychess::movegen::all_moves;
use greedychess::perft::perft;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Pseudo-legal perft driver")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board file (8 rows of 8 piece characters); the initial position when omitted
    #[arg(long)]
    board: Option<PathBuf>,
    /// Side to move: 'w' or 'b'
    #[arg(long, default_value = "w")]
    side: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print the node count below each root move
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base = match &args.board {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading board {}", path.display()))?
            .parse::<Board>()?,
        None => Board::startpos(),
    };
    let color = match args.side.as_str() {
        "w" | "white" => Color::White,
        "b" | "black" => Color::Black,
        other => anyhow::bail!("invalid side {other:?}: use 'w' or 'b'"),
    };
    let depth = args.depth;

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes = if depth == 0 {
        1
    } else {
        let root_moves = all_moves(&base, color);
        let per_move: Vec<u64> = pool.install(|| {
            root_moves.par_iter().map(|&mv| {
                let mut b = base.clone();
                apply_move(&mut b, mv);
                perft(&b, !color, depth - 1)
            }).collect()
        });
        if args.divide {
            for (mv, n) in root_moves.iter().zip(&per_move) { println!("{mv}: {n}"); }
        }
        per_move.iter().sum()
    };
    let dt = t0.elapsed().as_secs_f64();

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
