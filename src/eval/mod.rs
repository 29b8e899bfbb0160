//! Position evaluation
//!
//! Contains:
//! - Line shapes read by the pattern detector
//! - The run-potential heuristic used at the search horizon

pub mod heuristic;
pub mod patterns;

pub use heuristic::{color_potential, heuristic_score, line_potential, stone_potential};
pub use patterns::{LineWeight, Score, Shape, WIN_SCORE};
