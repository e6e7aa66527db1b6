use greedychess::board::{Board, Color};
use greedychess::perft::perft;

#[test]
fn perft_startpos_small_depths() {
    let b = Board::startpos();
    assert_eq!(perft(&b, Color::White, 0), 1);
    assert_eq!(perft(&b, Color::White, 1), 20);
    assert_eq!(perft(&b, Color::White, 2), 400);
    assert_eq!(perft(&b, Color::White, 3), 8902);
}

#[test]
fn perft_counts_king_captures_as_moves() {
    // Pseudo-legal: nothing stops White from moving next to the black king,
    // or Black from then taking the white king.
    let b: Board = "k.......\n........\n.K......\n........\n........\n........\n........\n........"
        .parse()
        .unwrap();
    assert_eq!(perft(&b, Color::White, 1), 8);
    assert_eq!(perft(&b, Color::Black, 1), 3);
}
