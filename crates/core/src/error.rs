//! Error types for board construction, fixtures and swaps.
//!
//! Out-of-bounds lookups are not errors: [`Grid::get`](crate::Grid::get)
//! returns the `None` sentinel instead, so scans stay branch-cheap.

use thiserror::Error;

use crate::types::Position;

/// Invalid board configuration, rejected before any grid is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width {value} outside [{min}, {max}]")]
    Width { value: u8, min: u8, max: u8 },
    #[error("board height {value} outside [{min}, {max}]")]
    Height { value: u8, min: u8, max: u8 },
    #[error("token kind count {value} outside [{min}, {max}]")]
    Kinds { value: u8, min: u8, max: u8 },
}

/// Malformed text fixture passed to [`Grid::from_ascii`](crate::Grid::from_ascii).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row}: expected {expected} cells, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column {column}: unexpected character {found:?}")]
    BadChar { row: usize, column: usize, found: char },
    #[error("row {row}, column {column}: kind {kind} not below {kinds}")]
    KindOutOfRange {
        row: usize,
        column: usize,
        kind: u8,
        kinds: u8,
    },
}

/// A swap request that cannot be attempted. The board is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),
    #[error("positions {a} and {b} are not adjacent")]
    NotAdjacent { a: Position, b: Position },
    #[error("no legal moves remain")]
    GameOver,
}

impl SwapError {
    /// Stable identifier for logs and machine-readable reports
    pub fn code(self) -> &'static str {
        match self {
            SwapError::OutOfBounds(_) => "out_of_bounds",
            SwapError::NotAdjacent { .. } => "illegal_swap",
            SwapError::GameOver => "game_over",
        }
    }
}
