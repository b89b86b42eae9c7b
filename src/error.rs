//! Error types for the checkers engine
//!
//! Covers coordinate validation, selection of empty spaces, rejected move
//! sequences and malformed board input.

use thiserror::Error;

/// Errors that can occur in the checkers engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// Coordinate outside the board
    #[error("Coordinate ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// No piece on the selected space
    #[error("No piece at ({row}, {col})")]
    EmptySpaceSelected { row: usize, col: usize },

    /// A move sequence does not match what the board allows
    #[error("Illegal move at step {step}: ({row}, {col}) is not an available destination")]
    IllegalSequenceApplied { step: usize, row: usize, col: usize },

    /// Board dimensions cannot hold the requested layout
    #[error("Invalid board dimensions {rows}x{cols}: {reason}")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// Unknown character in a board diagram
    #[error("Invalid diagram character '{found}' at line {line}, column {column}")]
    InvalidDiagram {
        line: usize,
        column: usize,
        found: char,
    },

    /// A turn was committed before any move was chosen
    #[error("No moves chosen, nothing to commit")]
    NothingToCommit,
}

/// Result type alias for checkers engine operations
pub type CheckersResult<T> = Result<T, CheckersError>;
