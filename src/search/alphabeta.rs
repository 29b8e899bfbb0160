//! Negamax search with alpha-beta pruning
//!
//! One engine, [`Negamax`], parameterised by a leaf [`Evaluator`] and a
//! [`MoveOrdering`]. Two searches are built from it:
//!
//! - [`Solver`]: follows the first critical point of the pattern scan as a
//!   forced line, past the depth horizon too, to prove wins and draws
//! - [`HeuristicSearch`]: counts wins and two-move wins to decide or force
//!   a node, otherwise tries every empty point
//!
//! Scores are from the side to move: `+WIN` proven win, `-WIN` proven loss,
//! 0 draw. Cut-offs are fail-hard. Every move goes through [`Board::place`],
//! so the board is back in its starting position whenever a search returns.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone};
//! use gomoku::search::{Solver, SOLVER_DEPTH};
//!
//! let mut board = Board::new(7);
//! for col in 1..=4 {
//!     let p = board.pt(1, col);
//!     board.play_gomoku(p, Stone::Black);
//! }
//! board.set_current_player(Stone::Black);
//!
//! let solution = Solver::new(SOLVER_DEPTH).solve(&mut board);
//! assert_eq!(solution.winning_move, Some(board.pt(1, 5)));
//! ```

use log::debug;

use crate::board::{format_point, Board, Point, Stone};
use crate::eval::{Score, WIN_SCORE};
use crate::rules::Outcome;

/// Proven win for the side to move
pub const WIN: Score = WIN_SCORE;

/// Bound outside every reachable score
pub const INF: Score = WIN + 1;

/// Plies the solver searches below each root move
pub const SOLVER_DEPTH: i32 = 2;

/// Score of a finished game for the side to move
fn terminal_score(outcome: Outcome, to_move: Stone) -> Score {
    match outcome {
        Outcome::Win(winner) if winner == to_move => WIN,
        Outcome::Win(_) => -WIN,
        Outcome::Draw | Outcome::Ongoing => 0,
    }
}

/// Leaf evaluation at the depth horizon
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> Score;
}

/// Run-potential heuristic, see [`crate::eval::heuristic_score`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Evaluator for Heuristic {
    #[inline]
    fn evaluate(&self, board: &Board) -> Score {
        board.heuristic_score()
    }
}

/// Every horizon node counts as a draw
#[derive(Debug, Clone, Copy, Default)]
pub struct Neutral;

impl Evaluator for Neutral {
    #[inline]
    fn evaluate(&self, _board: &Board) -> Score {
        0
    }
}

/// What a move ordering says about a node before any move is tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forcing {
    /// Value known without searching, with the move that shows it
    Decided { score: Score, point: Option<Point> },
    /// Only this move is searched
    Forced(Point),
    /// Search every candidate
    Open,
}

impl Forcing {
    #[inline]
    fn decided(score: Score, point: Point) -> Self {
        Forcing::Decided {
            score,
            point: Some(point),
        }
    }
}

/// Node classification and move order of a search policy
pub trait MoveOrdering {
    /// Whether forced moves are still played once the depth runs out.
    /// When false the horizon is checked before anything else.
    const FORCED_PAST_HORIZON: bool;

    fn forcing(&self, board: &Board) -> Forcing;

    /// Moves tried at an open node, in order
    fn candidates(&self, board: &Board) -> Vec<Point>;
}

/// Solver policy: terminal check, then the first critical point from
/// [`Board::solve_points`], then every empty point in ascending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriticalPoint;

impl MoveOrdering for CriticalPoint {
    const FORCED_PAST_HORIZON: bool = true;

    fn forcing(&self, board: &Board) -> Forcing {
        let outcome = board.outcome();
        if outcome.is_over() {
            return Forcing::Decided {
                score: terminal_score(outcome, board.current_player()),
                point: None,
            };
        }
        match board.solve_points().and_then(|points| points.first().copied()) {
            Some(point) => Forcing::Forced(point),
            None => Forcing::Open,
        }
    }

    fn candidates(&self, board: &Board) -> Vec<Point> {
        board.empty_points()
    }
}

/// Heuristic-search policy driven by [`Board::win_detection`]:
///
/// - own win: won
/// - two opponent wins, or one plus any opponent two-move win: lost
/// - one opponent win: forced block
/// - own two-move win: won
/// - two opponent two-move wins: lost, one: forced block
///
/// Open nodes try the empty points in descending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatCount;

impl MoveOrdering for ThreatCount {
    const FORCED_PAST_HORIZON: bool = false;

    fn forcing(&self, board: &Board) -> Forcing {
        if board.is_full() {
            return Forcing::Decided {
                score: 0,
                point: None,
            };
        }
        let threats = board.win_detection();
        if let Some(&win) = threats.own_wins.first() {
            return Forcing::decided(WIN, win);
        }
        match threats.opponent_wins.as_slice() {
            [] => {}
            [block] if threats.opponent_two_move_wins.is_empty() => {
                return Forcing::Forced(*block);
            }
            [first, ..] => return Forcing::decided(-WIN, *first),
        }
        if let Some(&win) = threats.own_two_move_wins.first() {
            return Forcing::decided(WIN, win);
        }
        match threats.opponent_two_move_wins.as_slice() {
            [] => Forcing::Open,
            [block] => Forcing::Forced(*block),
            [first, ..] => Forcing::decided(-WIN, *first),
        }
    }

    fn candidates(&self, board: &Board) -> Vec<Point> {
        let mut points = board.empty_points();
        points.reverse();
        points
    }
}

/// Depth-first negamax over a shared board
#[derive(Debug, Clone)]
pub struct Negamax<E, O> {
    evaluator: E,
    ordering: O,
    nodes: u64,
}

impl<E: Evaluator, O: MoveOrdering> Negamax<E, O> {
    pub fn new(evaluator: E, ordering: O) -> Self {
        Self {
            evaluator,
            ordering,
            nodes: 0,
        }
    }

    #[inline]
    pub fn ordering(&self) -> &O {
        &self.ordering
    }

    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Nodes visited since the last reset
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Value of the position for the side to move. A cut-off returns
    /// `beta`, a node with no move above `alpha` returns `alpha`.
    pub fn negamax(
        &mut self,
        board: &mut Board,
        mut alpha: Score,
        beta: Score,
        depth: i32,
    ) -> Score {
        self.nodes += 1;
        if !O::FORCED_PAST_HORIZON && depth <= 0 {
            return self.evaluator.evaluate(board);
        }

        let moves = match self.ordering.forcing(board) {
            Forcing::Decided { score, .. } => return score,
            Forcing::Forced(point) => vec![point],
            Forcing::Open if depth <= 0 => return self.evaluator.evaluate(board),
            Forcing::Open => self.ordering.candidates(board),
        };

        for point in moves {
            let score = self.score_move(board, point, alpha, beta, depth - 1);
            alpha = alpha.max(score);
            if score >= beta {
                return beta;
            }
        }
        alpha
    }

    /// Play `point` for the side to move and score it with `depth` plies
    /// left below it. A move that completes five is `WIN` outright; an
    /// occupied point scores `-INF`.
    pub fn score_move(
        &mut self,
        board: &mut Board,
        point: Point,
        alpha: Score,
        beta: Score,
        depth: i32,
    ) -> Score {
        let Some(mut placed) = board.place(point) else {
            return -INF;
        };
        if placed.point_check_game_end_gomoku(point) {
            return WIN;
        }
        -self.negamax(&mut placed, -beta, -alpha, depth)
    }
}

/// Result of [`Solver::solve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// State of the position as given; the search only runs when `Ongoing`
    pub outcome: Outcome,
    /// Root move proven to win, if any
    pub winning_move: Option<Point>,
    /// No win, but the best root move holds the draw
    pub has_draw: bool,
    /// Best-scoring root move
    pub best_move: Option<Point>,
    /// Score of `best_move`, side to move
    pub best_score: Score,
    /// Nodes visited
    pub nodes: u64,
}

/// Who the solver credits with the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Win { winner: Stone, point: Option<Point> },
    Draw { point: Option<Point> },
}

impl Solution {
    /// Map the solution to a verdict for `to_move`, the side that was to
    /// play. Without a win or a draw the opponent is credited.
    pub fn verdict(&self, to_move: Stone) -> Verdict {
        match self.outcome {
            Outcome::Win(winner) => Verdict::Win {
                winner,
                point: None,
            },
            Outcome::Draw => Verdict::Draw { point: None },
            Outcome::Ongoing => match self.winning_move {
                Some(point) => Verdict::Win {
                    winner: to_move,
                    point: Some(point),
                },
                None if self.has_draw => Verdict::Draw {
                    point: self.best_move,
                },
                None => Verdict::Win {
                    winner: to_move.opponent(),
                    point: None,
                },
            },
        }
    }
}

/// Forced-win prover
#[derive(Debug, Clone)]
pub struct Solver<E = Heuristic> {
    engine: Negamax<E, CriticalPoint>,
    depth: i32,
}

impl Solver<Heuristic> {
    /// Solver with heuristic leaves, `depth` plies below each root move
    pub fn new(depth: i32) -> Self {
        Self::with_evaluator(depth, Heuristic)
    }
}

impl Default for Solver<Heuristic> {
    fn default() -> Self {
        Self::new(SOLVER_DEPTH)
    }
}

impl<E: Evaluator> Solver<E> {
    pub fn with_evaluator(depth: i32, evaluator: E) -> Self {
        Self {
            engine: Negamax::new(evaluator, CriticalPoint),
            depth,
        }
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Look for a winning move for the side to move.
    ///
    /// Only the first critical point is tried when there is one, every
    /// empty point otherwise, each with a full window. The first move
    /// proven to win ends the search.
    pub fn solve(&mut self, board: &mut Board) -> Solution {
        self.engine.reset_nodes();
        let to_move = board.current_player();
        let outcome = board.outcome();
        if outcome.is_over() {
            return Solution {
                outcome,
                winning_move: None,
                has_draw: outcome == Outcome::Draw,
                best_move: None,
                best_score: terminal_score(outcome, to_move),
                nodes: 0,
            };
        }

        let candidates: Vec<Point> = match board.solve_points() {
            Some(points) => points.into_iter().take(1).collect(),
            None => board.empty_points(),
        };

        let mut winning_move = None;
        let mut best_move = None;
        let mut best_score = -INF;
        for point in candidates {
            let score = self.engine.score_move(board, point, -INF, INF, self.depth);
            debug!(
                "solver: {} scores {} (best {})",
                format_point(point, board.size()),
                score,
                best_score
            );
            if score > best_score {
                best_score = score;
                best_move = Some(point);
            }
            if score >= WIN {
                winning_move = Some(point);
                break;
            }
        }

        Solution {
            outcome,
            winning_move,
            has_draw: winning_move.is_none() && best_score == 0,
            best_move,
            best_score,
            nodes: self.engine.nodes(),
        }
    }
}

/// Search result containing the best move found and the nodes spent on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` at depth 0 or on a full board
    pub best_move: Option<Point>,
    /// Score of the position for the side to move
    pub score: Score,
    /// Depth searched
    pub depth: i32,
    /// Total nodes searched
    pub nodes: u64,
}

/// Threat-counting negamax with heuristic leaves
#[derive(Debug, Clone)]
pub struct HeuristicSearch {
    engine: Negamax<Heuristic, ThreatCount>,
    depth: i32,
}

impl HeuristicSearch {
    pub fn new(depth: i32) -> Self {
        Self {
            engine: Negamax::new(Heuristic, ThreatCount),
            depth,
        }
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Search the position for the side to move.
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        self.engine.reset_nodes();
        let depth = self.depth;
        let mut result = SearchResult {
            best_move: None,
            score: 0,
            depth,
            nodes: 1,
        };
        if depth <= 0 {
            result.score = board.heuristic_score();
            return result;
        }

        let candidates = match self.engine.ordering().forcing(board) {
            Forcing::Decided { score, point } => {
                result.score = score;
                result.best_move = point;
                return result;
            }
            Forcing::Forced(point) => vec![point],
            Forcing::Open => self.engine.ordering().candidates(board),
        };

        let mut alpha = -INF;
        for point in candidates {
            let score = self.engine.score_move(board, point, alpha, INF, depth - 1);
            if score > alpha {
                alpha = score;
                result.best_move = Some(point);
            }
            if score >= WIN {
                break;
            }
        }
        result.score = alpha;
        result.nodes += self.engine.nodes();
        debug!(
            "search depth {}: best {:?} score {} nodes {}",
            depth, result.best_move, result.score, result.nodes
        );
        result
    }
}
