//! Board representation for Gomoku (and the legacy Go rules sharing it)
//!
//! The board is a one-dimensional array padded with [`Stone::Border`] so that
//! every neighbor offset of an on-board point stays inside the array. Row `r`
//! (1-based) starts at `r * (size + 1) + 1`; one border column separates rows.

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use thiserror::Error;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Placed};

/// Board size used by the Gomoku game loop (7x7)
pub const GOMOKU_SIZE: usize = 7;
/// Largest supported board size
pub const MAX_SIZE: usize = 25;
/// Array length of the largest padded board
pub const MAX_POINTS: usize = MAX_SIZE * MAX_SIZE + 3 * (MAX_SIZE + 1);

/// Index into the padded cell array
pub type Point = usize;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
    Border,
}

impl Stone {
    /// Get opponent color
    ///
    /// Panics for `Empty` and `Border`: asking for their opponent is a
    /// programming error, not a game situation.
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            other => panic!("{other:?} is not a player color"),
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        matches!(self, Stone::Black | Stone::White)
    }

    /// Single letter used by board dumps and the protocol (`b`/`w`)
    pub fn letter(self) -> char {
        match self {
            Stone::Black => 'b',
            Stone::White => 'w',
            Stone::Empty => '.',
            Stone::Border => '#',
        }
    }
}

/// A move: a stone on a point, or a pass (Go rules only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Play(Point),
    Pass,
}

/// Errors from parsing move text such as `c4` or `pass`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordError {
    #[error("empty move text")]
    Empty,
    #[error("invalid column letter '{0}'")]
    BadColumn(char),
    #[error("invalid row number in '{0}'")]
    BadRow(String),
    #[error("coordinate {0} is outside a {1}x{1} board")]
    OffBoard(String, usize),
}

/// Vertical stride of a padded board of the given size
#[inline]
pub fn stride(size: usize) -> usize {
    size + 1
}

/// Map 1-based (row, col) to a padded point index.
#[inline]
pub fn coord_to_point(row: usize, col: usize, size: usize) -> Point {
    assert!(1 <= row && row <= size, "row {row} off a {size}x{size} board");
    assert!(1 <= col && col <= size, "col {col} off a {size}x{size} board");
    stride(size) * row + col
}

/// Inverse of [`coord_to_point`]
#[inline]
pub fn point_to_coord(point: Point, size: usize) -> (usize, usize) {
    (point / stride(size), point % stride(size))
}

/// Column letters skip `i`, as on a Go board
const COLUMNS: &str = "abcdefghjklmnopqrstuvwxyz";

/// Format a point as `c4` style text.
pub fn format_point(point: Point, size: usize) -> String {
    let (row, col) = point_to_coord(point, size);
    let letter = COLUMNS.as_bytes()[col - 1] as char;
    format!("{letter}{row}")
}

/// Format a move, `pass` included.
pub fn format_move(mv: Move, size: usize) -> String {
    match mv {
        Move::Play(point) => format_point(point, size),
        Move::Pass => "pass".to_string(),
    }
}

/// Parse `c4` / `pass` style text into a move on a board of `size`.
pub fn parse_move(text: &str, size: usize) -> Result<Move, CoordError> {
    let text = text.trim().to_ascii_lowercase();
    if text.is_empty() {
        return Err(CoordError::Empty);
    }
    if text == "pass" {
        return Ok(Move::Pass);
    }
    let mut chars = text.chars();
    let letter = chars.next().ok_or(CoordError::Empty)?;
    let col = COLUMNS
        .find(letter)
        .map(|i| i + 1)
        .ok_or(CoordError::BadColumn(letter))?;
    let row: usize = chars
        .as_str()
        .parse()
        .map_err(|_| CoordError::BadRow(text.clone()))?;
    if !(1..=size).contains(&row) || col > size {
        return Err(CoordError::OffBoard(text, size));
    }
    Ok(Move::Play(coord_to_point(row, col, size)))
}
