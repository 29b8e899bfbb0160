//! Gomoku solver and playing agent on a padded board
//!
//! Five in a row on a small board (7x7 by default):
//! - Overlines count as wins
//! - No forbidden moves, no captures
//! - Legacy Go rules share the same board representation
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Padded one-dimensional board, coordinates, move notation
//! - [`rules`]: Gomoku and Go rules behind the [`RuleSet`] trait
//! - [`eval`]: Line shapes and the run-potential heuristic
//! - [`search`]: Pattern detector, exact solver and heuristic search
//! - [`engine`]: Playing agent combining all of the above
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Agent, AgentConfig, Board, Stone};
//!
//! let mut board = Board::new(7);
//! let mut agent = Agent::with_config(AgentConfig {
//!     seed: Some(1),
//!     ..AgentConfig::default()
//! });
//!
//! board.play_gomoku(board.pt(4, 4), Stone::Black);
//! if let Some(point) = agent.get_move(&board, Stone::White) {
//!     board.play_gomoku(point, Stone::White);
//! }
//! ```
//!
//! # Move Priority
//!
//! 1. Pass when nothing can be played
//! 2. Proven win from the two-ply solver
//! 3. Most urgent pattern tier (win, block, make four, block four)
//! 4. Heuristic negamax
//! 5. Random empty point

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, CoordError, Move, Point, Stone, GOMOKU_SIZE};
pub use engine::{Agent, AgentConfig, MoveResult, MoveSource, Properties};
pub use rules::{GoRules, GomokuRules, Outcome, RuleSet};
pub use search::{HeuristicSearch, Solver, Verdict};
