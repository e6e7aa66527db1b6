use greedychess::board::{Board, Color, Position, Square};
use greedychess::uci::UciEngine;
use greedychess::EngineError;
use pretty_assertions::assert_eq;

fn run(engine: &mut UciEngine, lines: &[&str]) -> String {
    let mut out = Vec::new();
    for l in lines {
        engine.handle_line(l, &mut out).unwrap();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn apply_startpos_moves_sequence() {
    let moves = vec!["e2e4".to_string(), "e7e5".to_string(), "g1f3".to_string()];
    let pos = Position::set_from_start_and_moves(&moves).expect("legal move sequence");
    assert_eq!(pos.side_to_move(), Color::Black, "expected black to move after 3 plies");
}

#[test]
fn position_rejects_moves_outside_candidate_set() {
    let mut pos = Position::startpos();
    assert!(matches!(pos.make_move_uci("e2e5"), Err(EngineError::IllegalMove(_))));
    // Black piece on White's turn.
    assert!(matches!(pos.make_move_uci("e7e5"), Err(EngineError::IllegalMove(_))));
    assert!(matches!(pos.make_move_uci("zz"), Err(EngineError::InvalidMove(_))));
    assert_eq!(pos, Position::startpos());
}

#[test]
fn candidates_follow_side_to_move() {
    let mut pos = Position::startpos();
    assert_eq!(pos.candidates(Square::new(6, 4)), vec![Square::new(5, 4), Square::new(4, 4)]);
    assert!(pos.candidates(Square::new(1, 4)).is_empty());
    assert!(pos.candidates(Square::new(4, 4)).is_empty());
    pos.make_move_uci("e2e4").unwrap();
    assert_eq!(pos.candidates(Square::new(1, 4)), vec![Square::new(2, 4), Square::new(3, 4)]);
    assert_eq!(pos.moves_count(), 20);
}

#[test]
fn engine_turn_plays_or_passes() {
    use greedychess::search::Searcher;
    let s = Searcher::default();
    let mut pos = Position::startpos();
    pos.make_move_uci("e2e4").unwrap();
    let reply = pos.play_ai(&s).expect("black has moves");
    assert_eq!(reply.to_string(), "b8a6");
    assert_eq!(pos.side_to_move(), Color::White);

    let stuck = "....K...\n........\n........\n........\n........\n........\n........\n...p....".parse().unwrap();
    let mut pos = Position::new(stuck, Color::Black);
    assert_eq!(pos.play_ai(&s), None);
    assert_eq!(pos.side_to_move(), Color::White);
}

#[test]
fn captured_piece_is_reported() {
    use greedychess::board::{Piece, PieceKind};
    let mut pos = Position::startpos();
    for m in ["e2e4", "d7d5"] { pos.make_move_uci(m).unwrap(); }
    let captured = pos.make_move_uci("e4d5").unwrap();
    assert_eq!(captured, Piece::new(Color::Black, PieceKind::Pawn));
}

#[test]
fn uci_handshake_and_bestmove() {
    let mut e = UciEngine::default();
    let out = run(&mut e, &["uci", "isready", "position startpos moves e2e4", "go"]);
    assert!(out.contains("uciok"));
    assert!(out.contains("readyok"));
    assert!(out.trim_end().ends_with("bestmove b8a6"), "unexpected output: {out}");
}

#[test]
fn uci_board_position_and_quit() {
    let mut e = UciEngine::default();
    let cells = format!("{}{}{}", "Q.......", "........".repeat(6), ".......p");
    let out = run(&mut e, &[format!("position board {cells} w").as_str(), "go"]);
    assert!(out.trim_end().ends_with("bestmove a8h1"), "unexpected output: {out}");

    let mut sink = Vec::new();
    assert!(!e.handle_line("quit", &mut sink).unwrap());
}

#[test]
fn uci_reports_null_move_when_stuck() {
    let mut e = UciEngine::default();
    let cells = format!("{}{}", "........".repeat(7), "...p....");
    let out = run(&mut e, &[format!("position board {cells} b").as_str(), "go"]);
    assert!(out.trim_end().ends_with("bestmove 0000"), "unexpected output: {out}");
    assert_eq!(e.position().side_to_move(), Color::Black);
}

#[test]
fn uci_board_position_requires_side_token() {
    let mut e = UciEngine::default();
    let cells = Board::startpos().to_string().replace('\n', "");
    run(&mut e, &["position startpos moves e2e4"]);
    let after_e4 = e.position().clone();

    // 'moves' is not a side; the command is ignored as a whole.
    run(&mut e, &[format!("position board {cells} moves d2d4").as_str()]);
    assert_eq!(e.position(), &after_e4);
    run(&mut e, &[format!("position board {cells}").as_str()]);
    assert_eq!(e.position(), &after_e4);

    run(&mut e, &[format!("position board {cells} white moves d2d4").as_str()]);
    assert_eq!(e.position().side_to_move(), Color::Black);
    assert_eq!(e.position().board().piece_at(Square::new(4, 3)).to_char(), 'P');
    assert_eq!(e.position().board().piece_at(Square::new(6, 4)).to_char(), 'P');
}

#[test]
fn uci_bad_move_keeps_previous_position() {
    let mut e = UciEngine::default();
    run(&mut e, &["position startpos moves e2e4"]);
    let after_e4 = e.position().clone();

    run(&mut e, &["position startpos moves d2d4 zzzz g8f6"]);
    assert_eq!(e.position(), &after_e4);
    // Well-formed but not playable.
    run(&mut e, &["position startpos moves d2d4 d7d5 d4d6"]);
    assert_eq!(e.position(), &after_e4);
    assert_eq!(e.position().side_to_move(), Color::Black);
    assert_eq!(e.position().board().piece_at(Square::new(6, 3)).to_char(), 'P');

    let out = run(&mut e, &["go"]);
    assert!(out.trim_end().ends_with("bestmove b8a6"), "unexpected output: {out}");
}

#[test]
fn with_moves_leaves_base_untouched_on_error() {
    let base = Position::startpos();
    let moves = vec!["e2e4".to_string(), "e2e4".to_string()];
    assert!(matches!(base.with_moves(&moves), Err(EngineError::IllegalMove(_))));
    assert_eq!(base, Position::startpos());
    let ok = base.with_moves(&moves[..1]).unwrap();
    assert_eq!(ok.side_to_move(), Color::Black);
}
