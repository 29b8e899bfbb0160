//! Line shapes and scoring weights for Gomoku evaluation
//!
//! Shapes are written relative to the side to move: `x` own stone, `o`
//! opponent stone, `.` empty, `B` border. Each shape lists the window
//! indices (counted from the first cell) worth playing when it matches.

use crate::board::{Board, Point, Stone};

/// Search and evaluation score, from the side to move
pub type Score = i64;

/// Score of a proven win
pub const WIN_SCORE: Score = 10_000_000_000;

/// Heuristic weights, in half-stone units
pub struct LineWeight;

impl LineWeight {
    /// Own stone along the walk
    pub const OWN: Score = 2;
    /// Empty cell, the walk continues past it
    pub const EMPTY: Score = 1;
    /// Opponent stone or border, the walk stops there
    pub const BLOCKED: Score = -2;
}

/// A fixed window of glyphs and the points it asks for
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub glyphs: &'static [u8],
    pub targets: &'static [usize],
}

const fn shape(glyphs: &'static [u8], targets: &'static [usize]) -> Shape {
    Shape { glyphs, targets }
}

/// Five cells, one empty: playing it makes five
pub const WIN_SHAPES: [Shape; 5] = [
    shape(b"x.xxx", &[1]),
    shape(b"xx.xx", &[2]),
    shape(b"xxx.x", &[3]),
    shape(b".xxxx", &[0]),
    shape(b"xxxx.", &[4]),
];

/// The opponent's fives-in-waiting: must be blocked
pub const BLOCK_WIN_SHAPES: [Shape; 5] = [
    shape(b"o.ooo", &[1]),
    shape(b"oo.oo", &[2]),
    shape(b"ooo.o", &[3]),
    shape(b".oooo", &[0]),
    shape(b"oooo.", &[4]),
];

/// Three in six cells: playing the target makes an open four
pub const MAKE_FOUR_SHAPES: [Shape; 4] = [
    shape(b".x.xx.", &[2]),
    shape(b".xx.x.", &[3]),
    shape(b".xxx..", &[4]),
    shape(b"..xxx.", &[1]),
];

/// The opponent's open-four makers, blocked at the point they would play
pub const BLOCK_TWO_MOVE_SHAPES: [Shape; 4] = [
    shape(b".o.oo.", &[2]),
    shape(b".oo.o.", &[3]),
    shape(b".ooo..", &[4]),
    shape(b"..ooo.", &[1]),
];

/// Open-four blocks ranked last by the critical-point scan
pub const BLOCK_FOUR_SHAPES: [Shape; 4] = [
    shape(b".ooo..", &[0, 4]),
    shape(b"..ooo.", &[1, 5]),
    shape(b".oo.o.", &[3]),
    shape(b".o.oo.", &[2]),
];

/// Wider open-four blocks, border and own-stone aware
pub const BLOCK_OPEN_FOUR_SHAPES: [Shape; 8] = [
    shape(b".ooo..", &[0, 4]),
    shape(b"..ooo.", &[1, 5]),
    shape(b".oo.o.", &[0, 3, 5]),
    shape(b".o.oo.", &[0, 2, 5]),
    shape(b"B.ooo..", &[6]),
    shape(b"..ooo.B", &[0]),
    shape(b"x.ooo..", &[6]),
    shape(b"..ooo.x", &[0]),
];

#[inline]
fn glyph_matches(glyph: u8, stone: Stone, me: Stone) -> bool {
    match glyph {
        b'x' => stone == me,
        b'o' => stone.is_player() && stone != me,
        b'.' => stone == Stone::Empty,
        b'B' => stone == Stone::Border,
        _ => false,
    }
}

impl Shape {
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Does the window starting at `start` and stepping by `shift` match,
    /// with `me` as the `x` color? Windows running past the end of the
    /// array never match.
    pub fn matches_at(&self, board: &Board, start: Point, shift: usize, me: Stone) -> bool {
        let last = start + (self.len() - 1) * shift;
        if last >= board.max_point() {
            return false;
        }
        self.glyphs
            .iter()
            .enumerate()
            .all(|(i, &g)| glyph_matches(g, board.get_color(start + i * shift), me))
    }

    /// Board points of the targets for a window at `start`.
    pub fn targets_at(&self, start: Point, shift: usize) -> impl Iterator<Item = Point> + '_ {
        self.targets.iter().map(move |&i| start + i * shift)
    }
}
