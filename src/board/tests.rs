use super::*;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
}

#[test]
#[should_panic]
fn test_empty_has_no_opponent() {
    let _ = Stone::Empty.opponent();
}

#[test]
fn test_board_constants() {
    assert_eq!(GOMOKU_SIZE, 7);
    assert_eq!(MAX_POINTS, 703);
}

#[test]
fn test_padded_layout() {
    let board = Board::new(7);
    assert_eq!(board.max_point(), 7 * 7 + 3 * 8);
    assert_eq!(board.stride(), 8);
    assert_eq!(board.empty_points().len(), 49);
    assert_eq!(board.row_start(1), 9);
    assert_eq!(board.pt(1, 1), 9);
    assert_eq!(board.pt(7, 7), 63);
    // Row separator and the last padding cell are border
    assert_eq!(board.get_color(16), Stone::Border);
    assert_eq!(board.get_color(board.max_point() - 1), Stone::Border);
    assert_eq!(board.cell(board.max_point()), None);
    assert_eq!(board.current_player(), Stone::Black);
    assert_eq!(board.ko_point(), None);
}

#[test]
#[should_panic]
fn test_board_size_too_small() {
    let _ = Board::new(1);
}

#[test]
fn test_coord_conversion() {
    for row in 1..=7 {
        for col in 1..=7 {
            let p = coord_to_point(row, col, 7);
            assert_eq!(point_to_coord(p, 7), (row, col));
        }
    }
}

#[test]
fn test_neighbors() {
    let board = Board::new(7);
    let corner = board.pt(1, 1);
    let mut nbs = board.neighbors_of(corner).to_vec();
    nbs.sort_unstable();
    assert_eq!(nbs, vec![board.pt(1, 2), board.pt(2, 1)]);

    let center = board.pt(4, 4);
    assert_eq!(board.neighbors_of(center).len(), 4);
    assert!(board.neighbors_of(0).is_empty());
    assert_eq!(board.diag_neighbors(center)[3], board.pt(5, 5));
}

#[test]
fn test_format_and_parse_moves() {
    let board = Board::new(7);
    assert_eq!(format_point(board.pt(4, 3), 7), "c4");
    assert_eq!(parse_move("c4", 7), Ok(Move::Play(board.pt(4, 3))));
    assert_eq!(parse_move(" PASS ", 7), Ok(Move::Pass));
    assert_eq!(format_move(Move::Pass, 7), "pass");

    // Column letters skip 'i'
    assert_eq!(format_point(coord_to_point(1, 9, 19), 19), "j1");
    assert_eq!(parse_move("i3", 19), Err(CoordError::BadColumn('i')));
}

#[test]
fn test_parse_move_errors() {
    assert_eq!(parse_move("", 7), Err(CoordError::Empty));
    assert_eq!(parse_move("c", 7), Err(CoordError::BadRow("c".to_string())));
    assert_eq!(parse_move("h1", 7), Err(CoordError::OffBoard("h1".to_string(), 7)));
    assert_eq!(parse_move("a8", 7), Err(CoordError::OffBoard("a8".to_string(), 7)));
    assert_eq!(parse_move("a0", 7), Err(CoordError::OffBoard("a0".to_string(), 7)));
}

#[test]
fn test_play_gomoku_rejects_occupied() {
    let mut board = Board::new(7);
    let p = board.pt(4, 4);
    assert!(board.play_gomoku(p, Stone::Black));
    assert_eq!(board.current_player(), Stone::White);
    assert!(!board.play_gomoku(p, Stone::White));
    // Rejected move leaves everything alone
    assert_eq!(board.get_color(p), Stone::Black);
    assert_eq!(board.current_player(), Stone::White);
    // Border and past-the-end points are never legal
    assert!(!board.is_legal_gomoku(0));
    assert!(!board.is_legal_gomoku(10_000));
    assert!(!board.play_gomoku(10_000, Stone::White));
}

#[test]
#[should_panic]
fn test_play_gomoku_requires_player_color() {
    let mut board = Board::new(7);
    let p = board.pt(1, 1);
    board.play_gomoku(p, Stone::Empty);
}

#[test]
fn test_undo_symmetry_on_random_boards() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..50 {
        let mut board = Board::new(7);
        let mut empties = board.empty_points();
        empties.shuffle(&mut rng);
        for &p in empties.iter().take(20) {
            let color = board.current_player();
            assert!(board.play_gomoku(p, color));
        }

        let before_cells = board.cells.clone();
        let before_player = board.current_player();
        for p in board.empty_points() {
            let color = board.current_player();
            assert!(board.play_gomoku(p, color));
            board.undo(p);
            assert_eq!(board.cells, before_cells);
            assert_eq!(board.current_player(), before_player);
        }
    }
}

#[test]
fn test_placed_guard_undoes_on_drop() {
    let mut board = Board::new(7);
    let p = board.pt(2, 3);
    {
        let placed = board.place(p).unwrap();
        assert_eq!(placed.point(), p);
        assert_eq!(placed.get_color(p), Stone::Black);
        assert_eq!(placed.current_player(), Stone::White);
    }
    assert_eq!(board.get_color(p), Stone::Empty);
    assert_eq!(board.current_player(), Stone::Black);
}

#[test]
fn test_placed_guard_nested() {
    let mut board = Board::new(7);
    let a = board.pt(1, 1);
    let b = board.pt(1, 2);
    {
        let mut first = board.place(a).unwrap();
        {
            let second = first.place(b).unwrap();
            assert_eq!(second.get_color(b), Stone::White);
            assert_eq!(second.current_player(), Stone::Black);
        }
        assert!(first.place(a).is_none());
        assert_eq!(first.get_color(b), Stone::Empty);
    }
    assert_eq!(board.empty_points().len(), 49);
}

#[test]
fn test_copy_is_independent() {
    let mut board = Board::new(7);
    let p = board.pt(3, 3);
    let snapshot = board.clone();
    board.play_gomoku(p, Stone::Black);
    assert_eq!(snapshot.get_color(p), Stone::Empty);
    assert_eq!(snapshot.current_player(), Stone::Black);
}

#[test]
fn test_display() {
    let mut board = Board::new(3);
    let p = board.pt(3, 1);
    board.play_gomoku(p, Stone::Black);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], " 3  x . .");
    assert_eq!(lines[3], "    a b c");
}
