//! Pattern detector: critical points found by sliding line windows
//!
//! Two scans over the fixed shapes in [`crate::eval::patterns`]:
//! - [`win_detection`] walks every row, column and diagonal once and sorts
//!   what it sees into four buckets (wins and two-move wins, both sides)
//! - [`solve_points`] / [`pattern_moves`] try every start point and
//!   direction against four ranked tiers and report the best non-empty one
//!
//! Everything is read from the side to move's point of view.

use std::collections::BTreeSet;

use crate::board::{Board, Point, Stone};
use crate::eval::patterns::{
    Shape, BLOCK_FOUR_SHAPES, BLOCK_OPEN_FOUR_SHAPES, BLOCK_TWO_MOVE_SHAPES, BLOCK_WIN_SHAPES,
    MAKE_FOUR_SHAPES, WIN_SHAPES,
};
use crate::rules::line_offsets;

/// Critical points found by [`win_detection`], each list in scan order
/// without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreatBuckets {
    /// Points that make five for the side to move
    pub own_wins: Vec<Point>,
    /// Points where the opponent would make five
    pub opponent_wins: Vec<Point>,
    /// Points that make an open four for the side to move
    pub own_two_move_wins: Vec<Point>,
    /// Points where the opponent would make an open four
    pub opponent_two_move_wins: Vec<Point>,
}

impl ThreatBuckets {
    #[inline]
    pub fn is_quiet(&self) -> bool {
        self.own_wins.is_empty()
            && self.opponent_wins.is_empty()
            && self.own_two_move_wins.is_empty()
            && self.opponent_two_move_wins.is_empty()
    }
}

/// Ranked groups of critical points, most urgent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Make five
    Win,
    /// Stop the opponent's five
    BlockWin,
    /// Make an open four
    MakeFour,
    /// Stop the opponent's open four
    BlockFour,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Win, Tier::BlockWin, Tier::MakeFour, Tier::BlockFour];
}

/// Shapes per tier for [`solve_points`]
const SOLVE_TIERS: [&[Shape]; 4] = [
    &WIN_SHAPES,
    &BLOCK_WIN_SHAPES,
    &MAKE_FOUR_SHAPES,
    &BLOCK_FOUR_SHAPES,
];

/// Shapes per tier for [`pattern_moves`]
const PATTERN_TIERS: [&[Shape]; 4] = [
    &WIN_SHAPES,
    &BLOCK_WIN_SHAPES,
    &MAKE_FOUR_SHAPES,
    &BLOCK_OPEN_FOUR_SHAPES,
];

/// Every full line of the board as (first point, step): rows, columns,
/// diagonals, then anti-diagonals.
fn lines(board: &Board) -> Vec<(Point, usize)> {
    let n = board.size();
    let [horizontal, vertical, diagonal, anti_diagonal] = line_offsets(board);
    let mut lines = Vec::with_capacity(6 * n);
    lines.extend((1..=n).map(|row| (board.pt(row, 1), horizontal)));
    lines.extend((1..=n).map(|col| (board.pt(1, col), vertical)));
    lines.extend((1..=n).map(|row| (board.pt(row, 1), diagonal)));
    lines.extend((2..=n).map(|col| (board.pt(1, col), diagonal)));
    lines.extend((1..=n).map(|col| (board.pt(1, col), anti_diagonal)));
    lines.extend((2..=n).map(|row| (board.pt(row, n), anti_diagonal)));
    lines
}

#[inline]
fn push_unique(list: &mut Vec<Point>, point: Point) {
    if !list.contains(&point) {
        list.push(point);
    }
}

fn collect_targets(
    board: &Board,
    shapes: &[Shape],
    window: Point,
    shift: usize,
    me: Stone,
    out: &mut Vec<Point>,
) {
    for shape in shapes {
        if shape.matches_at(board, window, shift, me) {
            for p in shape.targets_at(window, shift) {
                push_unique(out, p);
            }
        }
    }
}

/// Slide along one line. At each new cell, the 6-cell window ending there
/// is read for two-move wins, then the 5-cell window for wins. Returns the
/// first own winning point as soon as one shows up.
fn scan_line(
    board: &Board,
    start: Point,
    shift: usize,
    me: Stone,
    buckets: &mut ThreatBuckets,
) -> Option<Point> {
    let mut p = start;
    let mut len = 0;
    while board.get_color(p) != Stone::Border {
        len += 1;
        if len >= 6 {
            let window = p - 5 * shift;
            collect_targets(
                board,
                &MAKE_FOUR_SHAPES,
                window,
                shift,
                me,
                &mut buckets.own_two_move_wins,
            );
            collect_targets(
                board,
                &BLOCK_TWO_MOVE_SHAPES,
                window,
                shift,
                me,
                &mut buckets.opponent_two_move_wins,
            );
        }
        if len >= 5 {
            let window = p - 4 * shift;
            if let Some(shape) = WIN_SHAPES
                .iter()
                .find(|s| s.matches_at(board, window, shift, me))
            {
                return shape.targets_at(window, shift).next();
            }
            collect_targets(
                board,
                &BLOCK_WIN_SHAPES,
                window,
                shift,
                me,
                &mut buckets.opponent_wins,
            );
        }
        p += shift;
    }
    None
}

/// Sort every line window into the four threat buckets.
///
/// As soon as the side to move has a winning point, only that point is
/// reported: `own_wins == [p]` and the other buckets empty.
pub fn win_detection(board: &Board) -> ThreatBuckets {
    let me = board.current_player();
    let mut buckets = ThreatBuckets::default();
    for (start, shift) in lines(board) {
        if let Some(win) = scan_line(board, start, shift, me, &mut buckets) {
            return ThreatBuckets {
                own_wins: vec![win],
                ..ThreatBuckets::default()
            };
        }
    }
    buckets
}

/// Try every window from `starts` in the four directions against the tier
/// shapes and return the first tier with any target.
fn scan_tiers(
    board: &Board,
    starts: impl Iterator<Item = Point>,
    tiers: &[&[Shape]; 4],
) -> Option<(Tier, Vec<Point>)> {
    let me = board.current_player();
    let offsets = line_offsets(board);
    let mut found: [BTreeSet<Point>; 4] = Default::default();

    for start in starts {
        for shift in offsets {
            for (targets, shapes) in found.iter_mut().zip(tiers) {
                for shape in shapes.iter() {
                    if shape.matches_at(board, start, shift, me) {
                        targets.extend(shape.targets_at(start, shift));
                    }
                }
            }
        }
    }

    Tier::ALL
        .into_iter()
        .zip(found)
        .find(|(_, targets)| !targets.is_empty())
        .map(|(tier, targets)| (tier, targets.into_iter().collect()))
}

/// Points of the most urgent non-empty tier (win, block-win, make-four,
/// block-open-four), ascending. `None` when nothing is critical.
pub fn solve_points(board: &Board) -> Option<Vec<Point>> {
    let starts = (0..board.max_point()).filter(|&p| board.get_color(p) != Stone::Border);
    scan_tiers(board, starts, &SOLVE_TIERS).map(|(_, points)| points)
}

/// Like [`solve_points`], with the wider border-aware open-four blocks and
/// the tier that fired.
pub fn pattern_moves(board: &Board) -> Option<(Tier, Vec<Point>)> {
    scan_tiers(board, 0..board.max_point(), &PATTERN_TIERS)
}

impl Board {
    /// See [`win_detection`].
    #[inline]
    pub fn win_detection(&self) -> ThreatBuckets {
        win_detection(self)
    }

    /// See [`solve_points`].
    #[inline]
    pub fn solve_points(&self) -> Option<Vec<Point>> {
        solve_points(self)
    }

    /// See [`pattern_moves`].
    #[inline]
    pub fn pattern_moves(&self) -> Option<(Tier, Vec<Point>)> {
        pattern_moves(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup_board(stones: &[(usize, usize, Stone)], to_move: Stone) -> Board {
        let mut board = Board::new(7);
        for &(row, col, stone) in stones {
            let p = board.pt(row, col);
            assert!(board.play_gomoku(p, stone));
        }
        board.set_current_player(to_move);
        board
    }

    fn row_of(row: usize, cols: &[usize], stone: Stone) -> Vec<(usize, usize, Stone)> {
        cols.iter().map(|&c| (row, c, stone)).collect()
    }

    #[test]
    fn test_empty_board_has_no_threats() {
        let board = Board::new(7);
        assert!(board.win_detection().is_quiet());
        assert_eq!(board.solve_points(), None);
        assert_eq!(board.pattern_moves(), None);
    }

    #[test]
    fn test_four_at_edge_has_one_winning_point() {
        let mut board = setup_board(&row_of(1, &[1, 2, 3, 4], Stone::Black), Stone::Black);
        let win = board.pt(1, 5);
        assert_eq!(board.solve_points(), Some(vec![win]));
        assert_eq!(board.pattern_moves(), Some((Tier::Win, vec![win])));

        assert!(board.play_gomoku(win, Stone::Black));
        assert_eq!(board.check_game_end_gomoku(), (true, Some(Stone::Black)));
    }

    #[test]
    fn test_gap_four() {
        let board = setup_board(&row_of(3, &[2, 3, 5, 6], Stone::White), Stone::White);
        let gap = board.pt(3, 4);
        assert_eq!(board.solve_points(), Some(vec![gap]));
        assert_eq!(board.win_detection().own_wins, vec![gap]);
    }

    #[test]
    fn test_diagonal_wins() {
        let stones: Vec<_> = (1..=4).map(|i| (i, i, Stone::Black)).collect();
        let board = setup_board(&stones, Stone::Black);
        assert_eq!(board.solve_points(), Some(vec![board.pt(5, 5)]));
        assert_eq!(board.win_detection().own_wins, vec![board.pt(5, 5)]);

        let stones: Vec<_> = (1..=4).map(|i| (i, 6 - i, Stone::Black)).collect();
        let board = setup_board(&stones, Stone::Black);
        assert_eq!(board.solve_points(), Some(vec![board.pt(5, 1)]));
        assert_eq!(board.win_detection().own_wins, vec![board.pt(5, 1)]);
    }

    #[test]
    fn test_win_preferred_over_block() {
        let mut stones = row_of(1, &[1, 2, 3, 4], Stone::Black);
        stones.extend(row_of(7, &[1, 2, 3, 4], Stone::White));
        let board = setup_board(&stones, Stone::Black);
        assert_eq!(board.solve_points(), Some(vec![board.pt(1, 5)]));

        let board = setup_board(&stones, Stone::White);
        assert_eq!(board.solve_points(), Some(vec![board.pt(7, 5)]));
    }

    #[test]
    fn test_win_detection_exits_early_on_own_win() {
        let mut stones = row_of(1, &[1, 2, 3, 4], Stone::Black);
        stones.extend(row_of(7, &[1, 2, 3, 4], Stone::White));
        stones.extend(row_of(4, &[3, 4, 5], Stone::White));
        let board = setup_board(&stones, Stone::Black);
        assert_eq!(
            board.win_detection(),
            ThreatBuckets {
                own_wins: vec![board.pt(1, 5)],
                ..ThreatBuckets::default()
            }
        );
    }

    #[test]
    fn test_block_opponent_four() {
        let board = setup_board(&row_of(1, &[1, 2, 3, 4], Stone::Black), Stone::White);
        let block = board.pt(1, 5);
        assert_eq!(board.solve_points(), Some(vec![block]));
        assert_eq!(board.pattern_moves(), Some((Tier::BlockWin, vec![block])));

        let buckets = board.win_detection();
        assert!(buckets.own_wins.is_empty());
        assert_eq!(buckets.opponent_wins, vec![block]);
    }

    #[test]
    fn test_open_three_both_flanks() {
        let board = setup_board(&row_of(4, &[3, 4, 5], Stone::Black), Stone::Black);
        let flanks = vec![board.pt(4, 2), board.pt(4, 6)];
        assert_eq!(board.solve_points(), Some(flanks.clone()));
        assert_eq!(board.pattern_moves(), Some((Tier::MakeFour, flanks.clone())));

        let buckets = board.win_detection();
        assert_eq!(buckets.own_two_move_wins, flanks);
        assert!(buckets.opponent_two_move_wins.is_empty());
    }

    #[test]
    fn test_opponent_open_three_blocked_on_flanks() {
        let board = setup_board(&row_of(4, &[3, 4, 5], Stone::Black), Stone::White);
        let flanks = vec![board.pt(4, 2), board.pt(4, 6)];
        assert_eq!(board.solve_points(), Some(flanks.clone()));
        assert_eq!(board.pattern_moves(), Some((Tier::BlockFour, flanks.clone())));
        assert_eq!(board.win_detection().opponent_two_move_wins, flanks);
    }

    #[test]
    fn test_open_three_near_border() {
        // B . o o o . . from White's side: the far point matters too
        let board = setup_board(&row_of(4, &[2, 3, 4], Stone::Black), Stone::White);
        let (near, after, far) = (board.pt(4, 1), board.pt(4, 5), board.pt(4, 6));
        assert_eq!(board.solve_points(), Some(vec![near, after]));
        assert_eq!(
            board.pattern_moves(),
            Some((Tier::BlockFour, vec![near, after, far]))
        );
    }

    #[test]
    fn test_broken_three() {
        let board = setup_board(&row_of(2, &[2, 4, 5], Stone::White), Stone::White);
        // . x . x x . starting at column 1
        let gap = board.pt(2, 3);
        assert_eq!(board.solve_points(), Some(vec![gap]));
        assert_eq!(board.win_detection().own_two_move_wins, vec![gap]);
    }

    #[test]
    fn test_targets_are_empty_on_random_boards() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let mut board = Board::new(7);
            let mut empties = board.empty_points();
            empties.shuffle(&mut rng);
            for &p in empties.iter().take(16) {
                let color = board.current_player();
                board.play_gomoku(p, color);
                if board.outcome().is_over() {
                    board.undo(p);
                    break;
                }
            }

            let buckets = board.win_detection();
            for &p in buckets
                .own_wins
                .iter()
                .chain(&buckets.opponent_wins)
                .chain(&buckets.own_two_move_wins)
                .chain(&buckets.opponent_two_move_wins)
            {
                assert_eq!(board.get_color(p), Stone::Empty);
            }
            if let Some(&win) = buckets.own_wins.first() {
                assert_eq!(
                    buckets,
                    ThreatBuckets {
                        own_wins: vec![win],
                        ..ThreatBuckets::default()
                    }
                );
                let me = board.current_player();
                let mut after = board.clone();
                after.play_gomoku(win, me);
                assert!(after.point_check_game_end_gomoku(win));
            }
            if let Some(points) = board.solve_points() {
                assert!(!points.is_empty());
                assert!(points.windows(2).all(|w| w[0] < w[1]));
                assert!(points.iter().all(|&p| board.get_color(p) == Stone::Empty));
            }
        }
    }
}
