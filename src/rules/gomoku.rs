//! Five-in-a-row rules
//!
//! Win condition: five or more stones of one color in a row, horizontally,
//! vertically or diagonally. Overlines count as wins.

use crate::board::{Board, Point, Stone};

use super::Outcome;

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Padded-array offsets of the four line directions:
/// horizontal, vertical, diagonal and anti-diagonal.
#[inline]
pub fn line_offsets(board: &Board) -> [usize; 4] {
    let ns = board.stride();
    [1, ns, ns + 1, ns - 1]
}

/// Length of the run of `point`'s color through `point` along `shift`.
///
/// The border stops every run, so no bounds checks are needed for on-board
/// points.
pub fn run_length(board: &Board, point: Point, shift: usize) -> usize {
    let color = board.get_color(point);
    let mut count = 1;
    let mut p = point + shift;
    while board.get_color(p) == color {
        count += 1;
        p += shift;
    }
    let mut p = point - shift;
    while board.get_color(p) == color {
        count += 1;
        p -= shift;
    }
    count
}

/// Does the stone on `point` sit in a winning line?
pub fn point_check_game_end_gomoku(board: &Board, point: Point) -> bool {
    debug_assert!(board.get_color(point).is_player());
    line_offsets(board)
        .into_iter()
        .any(|shift| run_length(board, point, shift) >= WIN_LENGTH)
}

/// Scan every stone for a winning line, White stones first.
///
/// Returns `(true, Some(winner))` on the first line found, `(false, None)`
/// otherwise. A full board without a winner is a draw, which the caller
/// detects through [`Board::is_full`].
pub fn check_game_end_gomoku(board: &Board) -> (bool, Option<Stone>) {
    for color in [Stone::White, Stone::Black] {
        if board
            .points_of(color)
            .into_iter()
            .any(|p| point_check_game_end_gomoku(board, p))
        {
            return (true, Some(color));
        }
    }
    (false, None)
}

/// Game outcome under Gomoku rules.
pub fn outcome(board: &Board) -> Outcome {
    match check_game_end_gomoku(board) {
        (true, Some(winner)) => Outcome::Win(winner),
        _ if board.is_full() => Outcome::Draw,
        _ => Outcome::Ongoing,
    }
}

impl Board {
    /// See [`check_game_end_gomoku`].
    #[inline]
    pub fn check_game_end_gomoku(&self) -> (bool, Option<Stone>) {
        check_game_end_gomoku(self)
    }

    /// See [`point_check_game_end_gomoku`].
    #[inline]
    pub fn point_check_game_end_gomoku(&self, point: Point) -> bool {
        point_check_game_end_gomoku(self, point)
    }

    /// Win, draw or still playing.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        outcome(self)
    }
}
