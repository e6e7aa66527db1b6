use anyhow::{Context, Result};
use clap::Parser;
use greedychess::board::{Board, Color, Position, Square};
use greedychess::uci::UciEngine;
use greedychess::{EngineConfig, Move, Searcher};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against the greedy material engine", long_about = None)]
struct Args {
    /// Speak the UCI-style line protocol on stdin/stdout instead of the interactive board
    #[arg(long)]
    uci: bool,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// JSON engine config (piece values, threads)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Worker threads for move scoring (overrides the config file)
    #[arg(long)]
    threads: Option<usize>,

    /// Starting layout: 8 rows of 8 piece characters ('.' for empty)
    #[arg(long)]
    board: Option<PathBuf>,

    /// Let the engine play both sides for at most this many plies
    #[arg(long)]
    autoplay: Option<usize>,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn print_board(board: &Board) {
    println!();
    for (r, line) in board.to_string().lines().enumerate() {
        println!("{} {}", 8 - r, line);
    }
    println!("  abcdefgh");
}

enum Input {
    Quit,
    Play(Move),
}

fn get_human_move(pos: &Position) -> Result<Input> {
    loop {
        print!("Your move (e.g. e2e4, or a square like e2 to list its moves): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(Input::Quit);
        }
        let input = input.trim();
        if input == "quit" {
            return Ok(Input::Quit);
        }

        if let Ok(sq) = input.parse::<Square>() {
            let dests: Vec<String> = pos.candidates(sq).iter().map(|s| s.to_string()).collect();
            if dests.is_empty() {
                println!("No moves from {sq}");
            } else {
                println!("{sq}: {}", dests.join(" "));
            }
            continue;
        }

        match input.parse::<Move>() {
            Ok(mv) if pos.candidates(mv.from).contains(&mv.to) => return Ok(Input::Play(mv)),
            Ok(_) => println!("Illegal move!"),
            Err(_) => println!("Invalid move format! Use format like 'e2e4'"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(t) = args.threads {
        config = config.with_threads(t);
    }
    let searcher = Searcher::new(config);

    if args.uci {
        let mut engine = UciEngine::new(searcher);
        engine.run_loop()?;
        return Ok(());
    }

    let board = match &args.board {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading board {}", path.display()))?
            .parse::<Board>()
            .context("parsing board")?,
        None => Board::startpos(),
    };
    let mut pos = Position::new(board, Color::White);

    if let Some(max_plies) = args.autoplay {
        for _ in 0..max_plies {
            let side = pos.side_to_move();
            match pos.play_ai(&searcher) {
                Some(mv) => println!("{side} plays {mv}"),
                None => println!("{side} has no moves and passes"),
            }
        }
        print_board(pos.board());
        return Ok(());
    }

    let human_color = parse_color(&args.color)?;
    loop {
        println!("\n{}'s turn", pos.side_to_move());
        print_board(pos.board());

        if pos.side_to_move() == human_color {
            if pos.moves_count() == 0 {
                if greedychess::all_moves(pos.board(), !human_color).is_empty() {
                    println!("Neither side has a move left");
                    break;
                }
                println!("You have no moves and pass");
                pos.pass();
                continue;
            }
            let mv = match get_human_move(&pos)? {
                Input::Quit => break,
                Input::Play(mv) => mv,
            };
            let captured = pos.play(mv)?;
            if !captured.is_empty() {
                println!("You captured {captured}");
            }
        } else {
            match pos.play_ai(&searcher) {
                Some(mv) => println!("Computer plays: {mv}"),
                // Only check detection could make this game-ending; hand the turn back.
                None => println!("Computer has no moves and passes"),
            }
        }
    }

    Ok(())
}
