use std::io::{self, BufRead, Write};
use crate::board::{Board, Color, Position};
use crate::search::Searcher;
use log::{debug, warn};

pub struct UciEngine {
    pos: Position,
    searcher: Searcher,
}

impl Default for UciEngine {
    fn default() -> Self { Self::new(Searcher::default()) }
}

impl UciEngine {
    pub fn new(searcher: Searcher) -> Self { Self { pos: Position::startpos(), searcher } }

    pub fn position(&self) -> &Position { &self.pos }

    fn cmd_uci(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "id name greedychess")?;
        writeln!(out, "id author PieBot Team")?;
        writeln!(out, "option name Threads type spin default {} min 1 max 512", self.searcher.get_threads())?;
        writeln!(out, "uciok")
    }

    fn cmd_position(&mut self, args: &str) {
        // Supports: 'position startpos [moves ...]' and 'position board <64 cells> <w|b> [moves ...]'
        let mut tokens = args.split_whitespace();
        let base = match tokens.next() {
            Some("startpos") => Position::startpos(),
            Some("board") => {
                let cells = tokens.next().unwrap_or("");
                let side = match tokens.next() {
                    Some("w") | Some("white") => Color::White,
                    Some("b") | Some("black") => Color::Black,
                    other => { warn!("ignoring position: expected side w|b, got {other:?}"); return; }
                };
                let rows: Vec<String> = cells.as_bytes().chunks(8).map(|c| String::from_utf8_lossy(c).into_owned()).collect();
                match rows.join("\n").parse::<Board>() {
                    Ok(b) => Position::new(b, side),
                    Err(e) => { warn!("ignoring position: {e}"); return; }
                }
            }
            other => { debug!("ignoring position: unknown base {other:?}"); return; }
        };
        let moves: Vec<String> = match tokens.next() {
            None => Vec::new(),
            Some("moves") => tokens.map(|s| s.to_string()).collect(),
            Some(other) => { warn!("ignoring position: unexpected token {other:?}"); return; }
        };
        // All or nothing: a bad move keeps the previous position.
        match base.with_moves(&moves) {
            Ok(p) => self.pos = p,
            Err(e) => warn!("ignoring position: {e}"),
        }
    }

    fn cmd_go(&mut self, out: &mut impl Write) -> io::Result<()> {
        let res = self.searcher.search(self.pos.board(), self.pos.side_to_move());
        debug!("go: {} candidates, score {}", res.nodes, res.score_cp);
        match res.bestmove {
            Some(best) => writeln!(out, "info depth 1 score cp {} nodes {}\nbestmove {}", res.score_cp, res.nodes, best),
            None => writeln!(out, "bestmove 0000"),
        }
    }

    /// Handles one command line. Returns `false` on `quit`.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let line = line.trim();
        if line.is_empty() { return Ok(true); }
        if line == "uci" { self.cmd_uci(out)?; }
        else if line == "isready" { writeln!(out, "readyok")?; }
        else if line == "ucinewgame" { self.pos = Position::startpos(); }
        else if line == "quit" { return Ok(false); }
        else if let Some(rest) = line.strip_prefix("position ") { self.cmd_position(rest); }
        else if line == "go" || line.starts_with("go ") { self.cmd_go(out)?; }
        else { debug!("unknown command: {line}"); }
        out.flush()?;
        Ok(true)
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in stdin.lock().lines() {
            if !self.handle_line(&line?, &mut out)? { break; }
        }
        Ok(())
    }
}
