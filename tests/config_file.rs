use greedychess::board::{Board, Color};
use greedychess::{EngineConfig, EngineError, Searcher};
use std::fs::{create_dir_all, write};

#[test]
fn config_file_round_trips_into_searcher() {
    let dir = std::path::Path::new("target/config_test");
    create_dir_all(dir).unwrap();
    let path = dir.join("engine.json");
    write(&path, r#"{ "piece_values": { "pawn": 150 }, "threads": 2 }"#).unwrap();

    let cfg = EngineConfig::from_json_file(&path).expect("valid config");
    assert_eq!(cfg.piece_values.pawn, 150);
    assert_eq!(cfg.piece_values.king, 20_000);
    let s = Searcher::new(cfg);
    assert_eq!(s.get_threads(), 2);
    assert_eq!(s.config().piece_values.pawn, 150);
    assert!(s.select_move(&Board::startpos(), Color::White).is_some());
}

#[test]
fn missing_config_file_is_io_error() {
    let err = EngineConfig::from_json_file("target/config_test/does-not-exist.json").unwrap_err();
    assert!(matches!(err, EngineError::Io(_)));
}

#[test]
fn zero_threads_clamps_to_one() {
    let cfg = EngineConfig::default().with_threads(0);
    assert_eq!(cfg.threads, 1);
    assert_eq!(Searcher::new(cfg).get_threads(), 1);
}
