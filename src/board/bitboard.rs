//! Fixed-size point set over the padded board
//!
//! Used as the block marker for flood fills: one bit per padded point,
//! sized for the largest supported board.

use super::{Point, MAX_POINTS};

const WORDS: usize = MAX_POINTS.div_ceil(64);

/// Set of padded point indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Default for Bitboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    #[inline]
    pub fn set(&mut self, point: Point) {
        self.bits[point / 64] |= 1u64 << (point % 64);
    }

    #[inline]
    pub fn clear(&mut self, point: Point) {
        self.bits[point / 64] &= !(1u64 << (point % 64));
    }

    #[inline]
    pub fn get(&self, point: Point) -> bool {
        (self.bits[point / 64] >> (point % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set points in ascending order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
            current_word: self.bits[0],
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        // Clear the bit we just found
        self.current_word &= self.current_word - 1;
        Some(self.word_idx * 64 + bit_pos)
    }
}

impl FromIterator<Point> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Bitboard::new();
        for point in iter {
            set.set(point);
        }
        set
    }
}
