use crate::board::{Color, Position};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::movegen::all_moves;
use crate::moves::Move;
use crate::search::eval::material_score;
use crate::search::Searcher;
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub seed: u64,
    /// Side played by a uniform random mover; `None` means engine vs engine.
    pub random_side: Option<Color>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    MaxPlies,
    KingCaptured(Color),
    NoMoves,
    /// The position refused a generated move; the game is abandoned.
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub plies: usize,
    /// White-positive material at the end of the game.
    pub material: i32,
    pub stop: StopReason,
}

pub fn generate_games(params: &SelfPlayParams, config: &EngineConfig) -> Vec<GameRecord> {
    generate_games_with(params, config, |_| {})
}

/// Plays `params.games` games from one seeded rng, calling `on_game` after each.
pub fn generate_games_with<F>(params: &SelfPlayParams, config: &EngineConfig, mut on_game: F) -> Vec<GameRecord>
where
    F: FnMut(&GameRecord),
{
    let searcher = Searcher::new(config.clone());
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut games = Vec::with_capacity(params.games);
    for _ in 0..params.games {
        let g = play_game(params, &searcher, &mut rng);
        on_game(&g);
        games.push(g);
    }
    games
}

pub fn play_game(params: &SelfPlayParams, searcher: &Searcher, rng: &mut SmallRng) -> GameRecord {
    let mut pos = Position::startpos();
    let mut moves = Vec::new();
    let mut passes = 0usize;
    let mut plies = 0usize;
    let stop = loop {
        if let Some(lost) = [Color::White, Color::Black].into_iter().find(|&c| !pos.board().has_king(c)) {
            break StopReason::KingCaptured(lost);
        }
        if plies >= params.max_plies { break StopReason::MaxPlies; }
        let mv = if params.random_side == Some(pos.side_to_move()) {
            select_random_move(&pos, rng)
        } else {
            searcher.select_move(pos.board(), pos.side_to_move())
        };
        match mv {
            Some(m) => {
                // Moves come from the generator for the side to move.
                if let Err(e) = pos.play(m) {
                    debug_assert!(false, "generated move refused: {e}");
                    warn!("abandoning game at ply {plies}: {e}");
                    break StopReason::Rejected;
                }
                moves.push(m);
                passes = 0;
            }
            None => {
                pos.pass();
                passes += 1;
                if passes >= 2 { break StopReason::NoMoves; }
            }
        }
        plies += 1;
    };
    let material = material_score(pos.board(), &searcher.config().piece_values);
    debug!("game over after {plies} plies: {stop:?}, material {material}");
    GameRecord { moves, plies, material, stop }
}

fn select_random_move(pos: &Position, rng: &mut SmallRng) -> Option<Move> {
    let moves = all_moves(pos.board(), pos.side_to_move());
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
}

/// One JSON object per line.
pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir)?;
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
