use crate::board::{Board, Color};
use crate::config::EngineConfig;
use crate::movegen::all_moves;
use crate::moves::{apply_move, Move};
use crate::search::eval::signed_score;
use log::{debug, trace, warn};
use rayon::prelude::*;

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    pub bestmove: Option<Move>,
    /// Signed material after `bestmove`, from the mover's side.
    pub score_cp: i32,
    pub nodes: u64,
}

/// One-ply material maximiser. Holds its configuration and nothing else, so
/// the same searcher can serve both colours for a whole game.
pub struct Searcher {
    config: EngineConfig,
    pool: Option<rayon::ThreadPool>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Searcher {
    pub fn new(config: EngineConfig) -> Self {
        let pool = if config.threads > 1 {
            match rayon::ThreadPoolBuilder::new().num_threads(config.threads).build() {
                Ok(p) => Some(p),
                Err(e) => {
                    warn!("falling back to single-threaded selection: {e}");
                    None
                }
            }
        } else {
            None
        };
        Self { config, pool }
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn get_threads(&self) -> usize {
        self.pool.as_ref().map_or(1, |p| p.current_num_threads())
    }

    /// Best move for `color` on `board`, or `None` when it has no moves. The
    /// board is only read; each candidate is played on its own clone.
    pub fn select_move(&self, board: &Board, color: Color) -> Option<Move> {
        self.search(board, color).bestmove
    }

    pub fn search(&self, board: &Board, color: Color) -> SearchResult {
        let moves = all_moves(board, color);
        let scored: Vec<(Move, i32)> = match &self.pool {
            Some(pool) => pool.install(|| {
                moves.par_iter().map(|&m| (m, self.score_after(board, m, color))).collect()
            }),
            None => moves.iter().map(|&m| (m, self.score_after(board, m, color))).collect(),
        };

        // Strict '>' keeps the first of equal scores, in enumeration order.
        let mut best: Option<(Move, i32)> = None;
        for &(m, s) in &scored {
            trace!("candidate {m} -> {s}");
            if best.map_or(true, |(_, bs)| s > bs) { best = Some((m, s)); }
        }
        let Some((bm, sc)) = best else {
            debug!("{color} has no moves");
            return SearchResult { bestmove: None, score_cp: signed_score(board, color, &self.config.piece_values), nodes: 0 };
        };
        debug!("{color}: {} candidates, best {bm} ({sc})", scored.len());
        SearchResult { bestmove: Some(bm), score_cp: sc, nodes: scored.len() as u64 }
    }

    fn score_after(&self, board: &Board, m: Move, color: Color) -> i32 {
        let mut child = board.clone();
        apply_move(&mut child, m);
        signed_score(&child, color, &self.config.piece_values)
    }
}

/// Single-shot convenience over a default-configured [`Searcher`].
pub fn select_move(board: &Board, color: Color) -> Option<Move> {
    Searcher::default().select_move(board, color)
}
