//! Checkers move generation module.
//!
//! This module computes the single-step moves available to a selected piece.
//! Legality is derived only from board occupancy and from the pending chain
//! of moves in the current turn, so identical arguments always produce
//! identical results.

use tracing::trace;

use crate::checkers_move::{ChainState, Move};
use crate::directions::Directions;
use crate::error::CheckersResult;
use crate::position::{Board, Coord, Piece};

/// Generates the moves available to `piece` standing on `from`.
///
/// Directions are tried in a fixed order (up-left, up-right, down-left,
/// down-right, restricted to the piece's directions) and the result keeps
/// that order. When the last move of `chain` captured, only captures are
/// returned; when it was a plain step, nothing is.
///
/// # Arguments
///
/// * `board` - The board whose occupancy is read
/// * `from` - The square the piece moves from, `None` if nothing is selected
/// * `piece` - The moving piece, `None` if nothing is selected
/// * `chain` - Moves already chosen earlier in this turn
///
/// # Returns
///
/// * The available moves, or `OutOfBounds` if `from` is off the board
pub fn available_moves(
    board: &Board,
    from: Option<Coord>,
    piece: Option<Piece>,
    chain: &[Move],
) -> CheckersResult<Vec<Move>> {
    let (from, piece) = match (from, piece) {
        (Some(from), Some(piece)) => (from, piece),
        _ => return Ok(Vec::new()),
    };
    board.check(from)?;

    let state = ChainState::of(chain);
    if state == ChainState::Ended {
        return Ok(Vec::new());
    }

    let mut moves: Vec<Move> = Directions::for_piece(&piece)
        .steps()
        .filter_map(|(d_row, d_col)| step_in_direction(board, from, &piece, d_row, d_col))
        .collect();

    if state == ChainState::Continuing {
        moves.retain(Move::is_capture);
    }

    trace!(%from, ?piece, ?state, count = moves.len(), "generated moves");
    Ok(moves)
}

/// Evaluates a single diagonal step from `from`.
///
/// # Returns
///
/// * A plain step onto an empty neighbour, a capture over an opposing
///   neighbour onto an empty landing square, or `None`
fn step_in_direction(
    board: &Board,
    from: Coord,
    piece: &Piece,
    d_row: isize,
    d_col: isize,
) -> Option<Move> {
    let neighbour = board.offset(from, d_row, d_col)?;
    match board.piece_at(neighbour).ok()? {
        None => Some(Move::step(neighbour)),
        Some(other) if other.is_opponent_of(piece) => {
            let landing = board.offset(neighbour, d_row, d_col)?;
            if board.is_empty_at(landing).ok()? {
                Some(Move::capture(landing, neighbour))
            } else {
                None
            }
        }
        Some(_) => None,
    }
}

/// Moves for the piece currently standing on `from`.
///
/// Convenience wrapper that reads the piece from the board; an empty square
/// yields no moves.
pub fn moves_from(board: &Board, from: Coord, chain: &[Move]) -> CheckersResult<Vec<Move>> {
    let piece = board.piece_at(from)?;
    available_moves(board, Some(from), piece, chain)
}
