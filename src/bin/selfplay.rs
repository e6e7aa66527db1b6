use anyhow::{Context, Result};
use clap::Parser;
use greedychess::board::Color;
use greedychess::selfplay::{generate_games_with, write_jsonl, SelfPlayParams, StopReason};
use greedychess::EngineConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "greedychess-selfplay", about = "Play engine games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Side handed to a random mover: 'w', 'b', or omitted for engine vs engine
    #[arg(long)]
    random_side: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let a = Args::parse();
    let config = match &a.config {
        Some(p) => EngineConfig::from_json_file(p).with_context(|| format!("reading config {}", p.display()))?,
        None => EngineConfig::default(),
    };
    let random_side = match a.random_side.as_deref() {
        None => None,
        Some("w") | Some("white") => Some(Color::White),
        Some("b") | Some("black") => Some(Color::Black),
        Some(other) => anyhow::bail!("invalid side {other:?}: use 'w' or 'b'"),
    };
    let params = SelfPlayParams { games: a.games, max_plies: a.max_plies, seed: a.seed, random_side };

    eprintln!("Playing {} games (max_plies={}, random_side={:?}, threads={})", a.games, a.max_plies, random_side, config.threads);
    let bar = ProgressBar::new(params.games as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}] {msg}")?,
    );
    let games = generate_games_with(&params, &config, |g| {
        bar.set_message(format!("last: {} plies, {:?}", g.plies, g.stop));
        bar.inc(1);
    });
    bar.finish();

    let kings_taken = games.iter().filter(|g| matches!(g.stop, StopReason::KingCaptured(_))).count();
    eprintln!("{kings_taken}/{} games ended with a captured king", games.len());
    write_jsonl(&games, &a.out).with_context(|| format!("writing {}", a.out.display()))?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
