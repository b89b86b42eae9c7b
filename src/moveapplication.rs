//! Move application module.
//!
//! Applying a move sequence is the only way the engine mutates a board. Both
//! entry points are atomic: on error the board is left as it was.

use tracing::{debug, warn};

use crate::checkers_move::{Effect, Move};
use crate::error::{CheckersError, CheckersResult};
use crate::movegeneration::available_moves;
use crate::position::{Board, Coord};

/// Slides the piece on `from` through every move of `moves` in order.
///
/// Each step copies the piece onto the destination, clears the square it
/// left and, for a capture, clears the recorded captured square whatever it
/// currently holds. The sequence is trusted: it is not checked against the
/// rules, only against the board bounds.
///
/// # Arguments
///
/// * `board` - The board to mutate
/// * `from` - Where the moving piece starts
/// * `moves` - The moves of one turn, in order
///
/// # Returns
///
/// * `OutOfBounds` if any coordinate is off the board, in which case nothing
///   was applied
pub fn apply_moves(board: &mut Board, from: Coord, moves: &[Move]) -> CheckersResult<()> {
    board.check(from)?;
    for mv in moves {
        board.check(mv.destination)?;
        if let Effect::Capture(captured) = mv.effect {
            board.check(captured)?;
        }
    }

    debug!(%from, count = moves.len(), "applying moves");
    let mut cursor = from;
    for mv in moves {
        apply_step(board, cursor, mv)?;
        cursor = mv.destination;
    }
    Ok(())
}

/// Applies a single move of the piece standing on `cursor`.
pub(crate) fn apply_step(board: &mut Board, cursor: Coord, mv: &Move) -> CheckersResult<()> {
    let moving = board.remove(cursor)?;
    match moving {
        Some(piece) => {
            board.place(mv.destination, piece)?;
        }
        None => {
            board.remove(mv.destination)?;
        }
    }
    if let Effect::Capture(captured) = mv.effect {
        board.remove(captured)?;
    }
    Ok(())
}

/// Applies `moves` after checking every step against the rules.
///
/// The sequence is replayed on a copy of the board; before each step the
/// available moves are regenerated from the current position and the step
/// must be one of them. The live board is only replaced once the whole
/// sequence has been accepted.
///
/// # Returns
///
/// * `EmptySpaceSelected` if `from` holds no piece
/// * `IllegalSequenceApplied` naming the first rejected step
pub fn apply_moves_checked(board: &mut Board, from: Coord, moves: &[Move]) -> CheckersResult<()> {
    let piece = board
        .piece_at(from)?
        .ok_or(CheckersError::EmptySpaceSelected {
            row: from.row,
            col: from.col,
        })?;

    let mut scratch = board.clone();
    let mut cursor = from;
    for (step, mv) in moves.iter().enumerate() {
        let legal = available_moves(&scratch, Some(cursor), Some(piece), &moves[..step])?;
        if !legal.contains(mv) {
            warn!(%from, step, destination = %mv.destination, "rejected move sequence");
            return Err(CheckersError::IllegalSequenceApplied {
                step,
                row: mv.destination.row,
                col: mv.destination.col,
            });
        }
        apply_step(&mut scratch, cursor, mv)?;
        cursor = mv.destination;
    }

    debug!(%from, count = moves.len(), "applied checked moves");
    *board = scratch;
    Ok(())
}
