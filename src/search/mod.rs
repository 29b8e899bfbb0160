//! Search module for Gomoku AI
//!
//! Contains:
//! - The pattern detector reporting critical points
//! - One negamax engine with two policies: the forced-win solver and the
//!   threat-counting heuristic search

pub mod alphabeta;
pub mod threat;

pub use alphabeta::{
    CriticalPoint, Evaluator, Forcing, Heuristic, HeuristicSearch, MoveOrdering, Negamax, Neutral,
    SearchResult, Solution, Solver, ThreatCount, Verdict, INF, SOLVER_DEPTH, WIN,
};
pub use threat::{pattern_moves, solve_points, win_detection, ThreatBuckets, Tier};
