//! Heuristic evaluation of Gomoku positions
//!
//! Every stone looks along the four line directions, both ways. Own stones
//! add to its potential and empty cells add half as much, the walk going on
//! past both; the first opponent stone or border cell subtracts and ends the
//! walk. The position score is the potential of the side to move minus the
//! opponent's.

use crate::board::{Board, Point, Stone};
use crate::rules::line_offsets;

use super::patterns::{LineWeight, Score};

/// Potential of the stone on `point` along one direction, both ways.
pub fn line_potential(board: &Board, point: Point, shift: usize) -> Score {
    let color = board.get_color(point);
    debug_assert!(color.is_player());

    let mut score = 0;
    let mut p = point + shift;
    loop {
        match board.get_color(p) {
            s if s == color => score += LineWeight::OWN,
            Stone::Empty => score += LineWeight::EMPTY,
            _ => {
                score += LineWeight::BLOCKED;
                break;
            }
        }
        p += shift;
    }
    let mut p = point - shift;
    loop {
        match board.get_color(p) {
            s if s == color => score += LineWeight::OWN,
            Stone::Empty => score += LineWeight::EMPTY,
            _ => {
                score += LineWeight::BLOCKED;
                break;
            }
        }
        p -= shift;
    }
    score
}

/// Potential of one stone over all four directions
#[inline]
pub fn stone_potential(board: &Board, point: Point) -> Score {
    line_offsets(board)
        .into_iter()
        .map(|shift| line_potential(board, point, shift))
        .sum()
}

/// Sum of the potentials of every `color` stone
pub fn color_potential(board: &Board, color: Stone) -> Score {
    board
        .points_of(color)
        .into_iter()
        .map(|p| stone_potential(board, p))
        .sum()
}

/// Evaluate the board for the side to move.
///
/// Symmetric: flipping the side to move negates the score.
#[must_use]
pub fn heuristic_score(board: &Board) -> Score {
    let me = board.current_player();
    color_potential(board, me) - color_potential(board, me.opponent())
}

impl Board {
    /// See [`heuristic_score`].
    #[inline]
    pub fn heuristic_score(&self) -> Score {
        heuristic_score(self)
    }
}
