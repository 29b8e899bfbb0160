//! Legacy Go rules: captures, suicide, simple ko and eyes
//!
//! A move captures every adjacent opponent block left without liberties.
//! A move whose own block ends up without liberties (after captures) is
//! suicide and rejected. Capturing exactly one stone by playing into a point
//! fully surrounded by the opponent sets the ko point.
//!
//! `liberty_of` is only a hint: every cached liberty is re-checked against
//! the board before it is trusted.

use crate::board::{Bitboard, Board, Move, Point, Stone};

impl Board {
    /// Can `color` play `mv`? The position is restored before returning.
    pub fn is_legal(&mut self, mv: Move, color: Stone) -> bool {
        assert!(color.is_player(), "{color:?} cannot move");
        let point = match mv {
            Move::Pass => return true,
            Move::Play(point) => point,
        };
        if self.cell(point) != Some(Stone::Empty) || self.ko_recapture == Some(point) {
            return false;
        }

        let opp_color = color.opponent();
        self.cells[point] = color;
        let mut legal = true;
        let has_capture = self.detect_captures(point, opp_color);
        if !has_capture && !self.stone_has_liberty(point) {
            // The trial stone may join blocks that split again once it is
            // lifted, so no hint is recorded for them.
            let block = self.block_of(point);
            if self.get_liberty(&block).is_none() {
                legal = false;
            }
        }
        self.cells[point] = Stone::Empty;
        legal
    }

    /// Play a Go move. Returns false (position unchanged) for occupied,
    /// ko and suicide moves.
    pub fn play(&mut self, mv: Move, color: Stone) -> bool {
        assert!(color.is_player(), "{color:?} cannot move");
        let point = match mv {
            Move::Pass => {
                self.ko_recapture = None;
                self.current_player = color.opponent();
                return true;
            }
            Move::Play(point) => point,
        };
        if self.cell(point) != Some(Stone::Empty) || self.ko_recapture == Some(point) {
            return false;
        }

        let opp_color = color.opponent();
        let in_enemy_eye = self.is_surrounded(point, opp_color);
        self.cells[point] = color;
        let mut single_captures = Vec::new();
        for nb in self.neighbors_of(point).to_vec() {
            if self.cells[nb] == opp_color {
                if let Some(captured) = self.detect_and_process_capture(nb) {
                    single_captures.push(captured);
                }
            }
        }
        if !self.stone_has_liberty(point) {
            let block = self.block_of(point);
            if !self.has_liberty(&block) {
                self.cells[point] = Stone::Empty;
                return false;
            }
        }
        self.ko_recapture = match single_captures.as_slice() {
            [single] if in_enemy_eye => Some(*single),
            _ => None,
        };
        self.current_player = color.opponent();
        true
    }

    /// Simple eye test: every on-board neighbor is `color` and at most one
    /// diagonal is the opponent's (none at the edge).
    pub fn is_eye(&self, point: Point, color: Stone) -> bool {
        if !self.is_on_board(point) || !self.is_surrounded(point, color) {
            return false;
        }
        let opp_color = color.opponent();
        let mut false_count = 0;
        let mut at_edge = 0;
        for d in self.diag_neighbors(point) {
            match self.cells[d] {
                Stone::Border => at_edge = 1,
                s if s == opp_color => false_count += 1,
                _ => {}
            }
        }
        false_count <= 1 - at_edge
    }

    /// Flood fill of the block containing `stone`.
    pub fn block_of(&self, stone: Point) -> Bitboard {
        let color = self.cells[stone];
        assert!(color.is_player(), "block of a non-stone point {stone}");
        let mut marker = Bitboard::new();
        marker.set(stone);
        let mut stack = vec![stone];
        while let Some(p) = stack.pop() {
            for &nb in self.neighbors_of(p) {
                if self.cells[nb] == color && !marker.get(nb) {
                    marker.set(nb);
                    stack.push(nb);
                }
            }
        }
        marker
    }

    /// Any liberty of the block, `None` if it has none.
    pub fn get_liberty(&self, block: &Bitboard) -> Option<Point> {
        block
            .iter_ones()
            .find_map(|stone| self.find_neighbor_of_color(stone, Stone::Empty))
    }

    /// Does the block have a liberty? Refreshes the liberty hint of every
    /// stone in the block when one is found.
    fn has_liberty(&mut self, block: &Bitboard) -> bool {
        let Some(lib) = self.get_liberty(block) else {
            return false;
        };
        debug_assert_eq!(self.cells[lib], Stone::Empty);
        for stone in block.iter_ones() {
            self.liberty_of[stone] = Some(lib);
        }
        true
    }

    fn is_surrounded(&self, point: Point, color: Stone) -> bool {
        self.neighbors_of(point)
            .iter()
            .all(|&nb| self.cells[nb] == color)
    }

    #[inline]
    fn stone_has_liberty(&self, stone: Point) -> bool {
        self.find_neighbor_of_color(stone, Stone::Empty).is_some()
    }

    /// Is the cached liberty of `stone` still an empty point touching
    /// `block`? Any other hint is ignored.
    fn hinted_liberty(&self, stone: Point, block: &Bitboard) -> bool {
        match self.liberty_of[stone] {
            Some(lib) => {
                self.cells[lib] == Stone::Empty
                    && self.neighbors_of(lib).iter().any(|&nb| block.get(nb))
            }
            None => false,
        }
    }

    /// Is the block on `nb_point` without liberties? Tries a liberty next to
    /// the stone, then the cached hint, then the whole block.
    fn block_is_dead(&mut self, nb_point: Point) -> Option<Bitboard> {
        if self.stone_has_liberty(nb_point) {
            return None;
        }
        let block = self.block_of(nb_point);
        if self.hinted_liberty(nb_point, &block) || self.has_liberty(&block) {
            return None;
        }
        Some(block)
    }

    /// Would the opponent block on `nb_point` be captured?
    fn detect_capture(&mut self, nb_point: Point) -> bool {
        self.block_is_dead(nb_point).is_some()
    }

    fn detect_captures(&mut self, point: Point, opp_color: Stone) -> bool {
        self.neighbors_of_color(point, opp_color)
            .into_iter()
            .any(|nb| self.detect_capture(nb))
    }

    /// Remove the block on `nb_point` if it has no liberty. Returns the
    /// captured point when exactly one stone was taken.
    fn detect_and_process_capture(&mut self, nb_point: Point) -> Option<Point> {
        let opp_block = self.block_is_dead(nb_point)?;
        for stone in opp_block.iter_ones() {
            self.cells[stone] = Stone::Empty;
            self.liberty_of[stone] = None;
        }
        (opp_block.count() == 1).then_some(nb_point)
    }
}
