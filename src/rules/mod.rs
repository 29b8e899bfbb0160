//! Game rules sharing one board
//!
//! This module implements:
//! - Gomoku rules (empty-point legality, five-in-a-row terminal test)
//! - Legacy Go rules (captures, suicide, ko, eyes), kept consistent with the
//!   shared board state but not used by the Gomoku game loop
//!
//! Both are reachable through the [`RuleSet`] trait so callers can stay
//! generic over the variant.

pub mod go;
pub mod gomoku;

use crate::board::{Board, Move, Stone};

// Re-exports for convenient access
pub use gomoku::{
    check_game_end_gomoku, line_offsets, point_check_game_end_gomoku, run_length, WIN_LENGTH,
};

/// State of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win(Stone),
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// Capability set of a rules variant
pub trait RuleSet {
    /// Can `color` play `mv` now? May touch the board's caches, never its
    /// position.
    fn is_legal(&self, board: &mut Board, mv: Move, color: Stone) -> bool;

    /// Play `mv` for `color`. Returns false (and leaves the position
    /// unchanged) if the move is illegal.
    fn play(&self, board: &mut Board, mv: Move, color: Stone) -> bool;

    fn outcome(&self, board: &Board) -> Outcome;
}

/// Five in a row on the padded board
#[derive(Debug, Clone, Copy, Default)]
pub struct GomokuRules;

impl RuleSet for GomokuRules {
    fn is_legal(&self, board: &mut Board, mv: Move, _color: Stone) -> bool {
        match mv {
            Move::Play(point) => board.is_legal_gomoku(point),
            Move::Pass => false,
        }
    }

    fn play(&self, board: &mut Board, mv: Move, color: Stone) -> bool {
        match mv {
            Move::Play(point) => board.play_gomoku(point, color),
            Move::Pass => panic!("pass is not a Gomoku move"),
        }
    }

    fn outcome(&self, board: &Board) -> Outcome {
        gomoku::outcome(board)
    }
}

/// Go with captures, suicide and simple ko
#[derive(Debug, Clone, Copy, Default)]
pub struct GoRules;

impl RuleSet for GoRules {
    fn is_legal(&self, board: &mut Board, mv: Move, color: Stone) -> bool {
        board.is_legal(mv, color)
    }

    fn play(&self, board: &mut Board, mv: Move, color: Stone) -> bool {
        board.play(mv, color)
    }

    /// Go games end by consecutive passes, which the caller tracks; the
    /// position alone never decides the game.
    fn outcome(&self, _board: &Board) -> Outcome {
        Outcome::Ongoing
    }
}
