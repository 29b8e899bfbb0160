//! Gomoku agent: move selection behind a protocol front end
//!
//! The agent picks a move for a given board and color in this order:
//!
//! 1. **Pass**: no empty point left, or the game is already over
//! 2. **Proven win**: the solver, when the position has a critical point
//! 3. **Pattern**: a random point from the most urgent pattern tier
//! 4. **Search**: threat-counting negamax with heuristic leaves
//! 5. **Random**: any empty point
//!
//! # Example
//!
//! ```
//! use gomoku::{Agent, AgentConfig, Board, Stone};
//!
//! let mut agent = Agent::with_config(AgentConfig {
//!     seed: Some(7),
//!     ..AgentConfig::default()
//! });
//! let board = Board::new(7);
//!
//! let point = agent.get_move(&board, Stone::Black).expect("empty board");
//! assert!(board.is_legal_gomoku(point));
//! ```

use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{format_move, Board, Move, Point, Stone};
use crate::eval::Score;
use crate::search::{HeuristicSearch, Solver, Tier, SOLVER_DEPTH, WIN};

/// Where the chosen move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Nothing to play
    Pass,
    /// Proven win from the solver
    Solver,
    /// Picked from a pattern tier
    Pattern(Tier),
    /// Heuristic search result
    Search,
    /// Random empty point
    Random,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Move to play, `None` for a pass
    pub best_move: Option<Point>,
    /// Score of the move for the side that plays it, when one was computed
    pub score: Score,
    pub source: MoveSource,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn pass(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            source: MoveSource::Pass,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn solver_win(point: Point, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(point),
            score: WIN,
            source: MoveSource::Solver,
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn pattern(point: Point, tier: Tier, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(point),
            score: 0,
            source: MoveSource::Pattern(tier),
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn search(point: Point, score: Score, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(point),
            score,
            source: MoveSource::Search,
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn random(point: Point, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(point),
            score: 0,
            source: MoveSource::Random,
            time_ms,
            nodes,
        }
    }
}

/// Name and version reported to the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Properties {
    pub name: &'static str,
    pub version: &'static str,
}

/// Agent configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentConfig {
    /// Plies the solver searches below each root move
    pub solver_depth: i32,
    /// Depth of the heuristic search
    pub search_depth: i32,
    /// Play from pattern tiers before searching
    pub use_pattern: bool,
    /// Seed for tie-breaking and fallbacks; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            solver_depth: SOLVER_DEPTH,
            search_depth: 2,
            use_pattern: true,
            seed: None,
        }
    }
}

/// Gomoku playing agent.
pub struct Agent {
    solver: Solver,
    searcher: HeuristicSearch,
    config: AgentConfig,
    rng: StdRng,
    last_move: Option<Move>,
    moves_played: usize,
}

impl Agent {
    /// Create an agent with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AgentConfig::default())
    }

    #[must_use]
    pub fn with_config(config: AgentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            solver: Solver::new(config.solver_depth),
            searcher: HeuristicSearch::new(config.search_depth),
            config,
            rng,
            last_move: None,
            moves_played: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Choose a move for `color`; `None` means pass.
    ///
    /// The board is not modified.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Point> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Choose a move for `color` and report how it was found.
    ///
    /// The chosen move is recorded as if passed to [`Agent::update`].
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();
        let result = self.select(board, color, start);
        let mv = result.best_move.map_or(Move::Pass, Move::Play);
        info!(
            "{:?} plays {} ({:?}, score {}, {} nodes, {}ms)",
            color,
            format_move(mv, board.size()),
            result.source,
            result.score,
            result.nodes,
            result.time_ms
        );
        self.update(mv);
        result
    }

    fn select(&mut self, board: &Board, color: Stone, start: Instant) -> MoveResult {
        let elapsed = || start.elapsed().as_millis() as u64;
        let mut work = board.clone();
        work.set_current_player(color);

        let empties = work.empty_points();
        if empties.is_empty() || work.outcome().is_over() {
            return MoveResult::pass(elapsed());
        }

        let mut nodes = 0;
        if work.solve_points().is_some() {
            let solution = self.solver.solve(&mut work);
            nodes += solution.nodes;
            if let Some(point) = solution.winning_move {
                return MoveResult::solver_win(point, elapsed(), nodes);
            }
        }

        if self.config.use_pattern {
            if let Some((tier, points)) = work.pattern_moves() {
                if let Some(&point) = points.choose(&mut self.rng) {
                    return MoveResult::pattern(point, tier, elapsed(), nodes);
                }
            }
        }

        let result = self.searcher.search(&mut work);
        nodes += result.nodes;
        if let Some(point) = result.best_move.filter(|&p| work.is_legal_gomoku(p)) {
            return MoveResult::search(point, result.score, elapsed(), nodes);
        }

        match empties.choose(&mut self.rng) {
            Some(&point) => MoveResult::random(point, elapsed(), nodes),
            None => MoveResult::pass(elapsed()),
        }
    }

    /// Record a move played on the board.
    pub fn update(&mut self, mv: Move) {
        self.last_move = Some(mv);
        self.moves_played += 1;
    }

    /// Forget the recorded moves before a new game.
    pub fn reset(&mut self) {
        self.last_move = None;
        self.moves_played = 0;
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn get_properties(&self) -> Properties {
        Properties {
            name: "Gomoku4",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}
