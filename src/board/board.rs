//! Padded one-dimensional board with neighbor tables and a liberty cache

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::{coord_to_point, point_to_coord, stride, Point, Stone, MAX_SIZE};

/// Game board.
///
/// Holds the cells, the side to move and the bookkeeping the legacy Go
/// rules need (liberty hints and the ko point). Gomoku play only touches
/// `cells` and `current_player`.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// Vertical stride (`size + 1`)
    ns: usize,
    pub(crate) cells: Vec<Stone>,
    /// On-board 4-neighbors per point, empty for border points
    neighbors: Vec<Vec<Point>>,
    /// Last known liberty of the block containing each stone (a hint only)
    pub(crate) liberty_of: Vec<Option<Point>>,
    pub(crate) current_player: Stone,
    pub(crate) ko_recapture: Option<Point>,
}

impl Board {
    /// Create an empty board of the given size with Black to move.
    pub fn new(size: usize) -> Self {
        assert!(
            (2..=MAX_SIZE).contains(&size),
            "board size {size} outside 2..={MAX_SIZE}"
        );
        let ns = stride(size);
        let max_point = size * size + 3 * ns;
        let mut cells = vec![Stone::Border; max_point];
        for row in 1..=size {
            let start = row * ns + 1;
            cells[start..start + size].fill(Stone::Empty);
        }

        let neighbors = (0..max_point)
            .map(|point| {
                if cells[point] == Stone::Border {
                    Vec::new()
                } else {
                    [point - 1, point + 1, point - ns, point + ns]
                        .into_iter()
                        .filter(|&nb| cells[nb] != Stone::Border)
                        .collect()
                }
            })
            .collect();

        Self {
            size,
            ns,
            cells,
            neighbors,
            liberty_of: vec![None; max_point],
            current_player: Stone::Black,
            ko_recapture: None,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Vertical stride between rows in the padded array
    #[inline]
    pub fn stride(&self) -> usize {
        self.ns
    }

    /// Length of the padded cell array
    #[inline]
    pub fn max_point(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    /// Set the side to move (used when a caller asks for a move for a
    /// specific color).
    pub fn set_current_player(&mut self, color: Stone) {
        assert!(color.is_player(), "{color:?} cannot move");
        self.current_player = color;
    }

    /// Point forbidden for the next Go move, if any
    #[inline]
    pub fn ko_point(&self) -> Option<Point> {
        self.ko_recapture
    }

    #[inline]
    pub fn get_color(&self, point: Point) -> Stone {
        self.cells[point]
    }

    /// Cell contents, `None` past the end of the padded array
    #[inline]
    pub fn cell(&self, point: Point) -> Option<Stone> {
        self.cells.get(point).copied()
    }

    /// Point of 1-based (row, col)
    #[inline]
    pub fn pt(&self, row: usize, col: usize) -> Point {
        coord_to_point(row, col, self.size)
    }

    /// 1-based (row, col) of a point
    #[inline]
    pub fn coord(&self, point: Point) -> (usize, usize) {
        point_to_coord(point, self.size)
    }

    /// First point of a 1-based row
    #[inline]
    pub fn row_start(&self, row: usize) -> Point {
        assert!(1 <= row && row <= self.size);
        row * self.ns + 1
    }

    #[inline]
    pub fn is_on_board(&self, point: Point) -> bool {
        matches!(self.cell(point), Some(s) if s != Stone::Border)
    }

    /// All points holding `color`, ascending
    pub fn points_of(&self, color: Stone) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == color)
            .map(|(p, _)| p)
            .collect()
    }

    /// All empty points, ascending
    #[inline]
    pub fn empty_points(&self) -> Vec<Point> {
        self.points_of(Stone::Empty)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Stone::Empty)
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    /// Precomputed on-board 4-neighbors
    #[inline]
    pub fn neighbors_of(&self, point: Point) -> &[Point] {
        &self.neighbors[point]
    }

    /// The four diagonal neighbors (may be border points)
    #[inline]
    pub fn diag_neighbors(&self, point: Point) -> [Point; 4] {
        let ns = self.ns;
        [point - ns - 1, point - ns + 1, point + ns - 1, point + ns + 1]
    }

    pub fn neighbors_of_color(&self, point: Point, color: Stone) -> Vec<Point> {
        self.neighbors[point]
            .iter()
            .copied()
            .filter(|&nb| self.cells[nb] == color)
            .collect()
    }

    pub fn find_neighbor_of_color(&self, point: Point, color: Stone) -> Option<Point> {
        self.neighbors[point]
            .iter()
            .copied()
            .find(|&nb| self.cells[nb] == color)
    }

    /// Gomoku legality: on the board and empty.
    #[inline]
    pub fn is_legal_gomoku(&self, point: Point) -> bool {
        self.cell(point) == Some(Stone::Empty)
    }

    /// Play a Gomoku move. Returns false (board untouched) if the point is
    /// occupied or off the board.
    pub fn play_gomoku(&mut self, point: Point, color: Stone) -> bool {
        assert!(color.is_player(), "{color:?} cannot move");
        if !self.is_legal_gomoku(point) {
            return false;
        }
        self.cells[point] = color;
        self.current_player = color.opponent();
        true
    }

    /// Take back the stone on `point` and hand the move back.
    pub fn undo(&mut self, point: Point) {
        debug_assert!(self.cells[point].is_player(), "undo of an empty point");
        self.cells[point] = Stone::Empty;
        self.current_player = self.current_player.opponent();
    }

    /// Play a Gomoku move for the side to move; the returned guard undoes
    /// it when dropped.
    pub fn place(&mut self, point: Point) -> Option<Placed<'_>> {
        let color = self.current_player;
        if self.play_gomoku(point, color) {
            Some(Placed { board: self, point })
        } else {
            None
        }
    }
}

/// A stone placed by [`Board::place`], taken back on drop.
pub struct Placed<'a> {
    board: &'a mut Board,
    point: Point,
}

impl Placed<'_> {
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.board.undo(self.point);
    }
}

impl fmt::Display for Board {
    /// Top row first, with coordinates: `x` Black, `o` White, `.` empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.size).rev() {
            write!(f, "{row:>2} ")?;
            for col in 1..=self.size {
                let c = match self.cells[self.pt(row, col)] {
                    Stone::Black => 'x',
                    Stone::White => 'o',
                    _ => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 1..=self.size {
            let label = super::format_point(self.pt(1, col), self.size);
            write!(f, " {}", &label[..1])?;
        }
        writeln!(f)
    }
}
