use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gomoku::search::{pattern_moves, HeuristicSearch, Solver, SOLVER_DEPTH};
use gomoku::{Board, Stone};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    black: &'static [(usize, usize)],
    white: &'static [(usize, usize)],
    to_move: Stone,
    /// Known solver verdict, when the position is simple enough to know it
    expect_win: Option<bool>,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "open_three",
        black: &[(4, 3), (4, 4), (4, 5)],
        white: &[(1, 1), (7, 7)],
        to_move: Stone::Black,
        expect_win: Some(true),
    },
    BenchCase {
        name: "block_four",
        black: &[(2, 2), (2, 3), (2, 4), (2, 5)],
        white: &[(5, 5), (6, 6), (4, 4)],
        to_move: Stone::White,
        expect_win: Some(false),
    },
    BenchCase {
        name: "middle_game",
        black: &[(4, 4), (3, 5), (5, 3), (2, 2)],
        white: &[(4, 5), (3, 3), (5, 5), (6, 2)],
        to_move: Stone::Black,
        expect_win: None,
    },
];

fn setup(case: &BenchCase) -> Board {
    let mut board = Board::new(7);
    for &(row, col) in case.black {
        let p = board.pt(row, col);
        assert!(board.play_gomoku(p, Stone::Black), "{}: bad stone", case.name);
    }
    for &(row, col) in case.white {
        let p = board.pt(row, col);
        assert!(board.play_gomoku(p, Stone::White), "{}: bad stone", case.name);
    }
    board.set_current_player(case.to_move);
    board
}

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let board = setup(case);

        // Correctness guard before benchmarking.
        let mut warmup = board.clone();
        let solution = Solver::new(SOLVER_DEPTH).solve(&mut warmup);
        if let Some(expect_win) = case.expect_win {
            assert_eq!(
                solution.winning_move.is_some(),
                expect_win,
                "verdict mismatch for {}",
                case.name
            );
        }
        assert_eq!(
            warmup.to_string(),
            board.to_string(),
            "{}: solver left stones behind",
            case.name
        );

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| {
                let mut work = board.clone();
                let solution = Solver::new(SOLVER_DEPTH).solve(black_box(&mut work));
                black_box(solution.nodes)
            });
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristic_search");
    group.sample_size(20);

    for case in CASES {
        let board = setup(case);
        for depth in 1..=2 {
            let bench_name = format!("{}_d{}", case.name, depth);
            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                &board,
                |b, board| {
                    b.iter(|| {
                        let mut work = board.clone();
                        let result = HeuristicSearch::new(depth).search(black_box(&mut work));
                        black_box(result.score)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_moves");

    for case in CASES {
        let board = setup(case);
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(pattern_moves(black_box(board))));
        });
    }

    group.finish();
}

criterion_group!(solver_benches, bench_solver, bench_search, bench_patterns);
criterion_main!(solver_benches);
