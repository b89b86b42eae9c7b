//! Turn accumulation.
//!
//! A `Turn` follows the protocol a front end uses to build a move: select a
//! piece, repeatedly pick one of the offered moves, then commit the chosen
//! sequence once. Chosen moves are played on a preview copy of the board so
//! later options see the piece on its new square and captured pieces gone.

use crate::checkers_move::Move;
use crate::error::{CheckersError, CheckersResult};
use crate::moveapplication::{apply_moves_checked, apply_step};
use crate::movegeneration::available_moves;
use crate::position::{Board, Coord, Piece};

#[derive(Debug, Clone)]
pub struct Turn {
    origin: Coord,
    piece: Piece,
    moves: Vec<Move>,
    preview: Board,
}

impl Turn {
    /// Starts a turn with the piece on `at`.
    ///
    /// Selecting an empty space fails with `EmptySpaceSelected`.
    pub fn select(board: &Board, at: Coord) -> CheckersResult<Turn> {
        let piece = board.piece_at(at)?.ok_or(CheckersError::EmptySpaceSelected {
            row: at.row,
            col: at.col,
        })?;
        Ok(Turn {
            origin: at,
            piece,
            moves: Vec::new(),
            preview: board.clone(),
        })
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The board with the chosen moves played.
    pub fn preview(&self) -> &Board {
        &self.preview
    }

    /// Where the selected piece currently stands.
    pub fn cursor(&self) -> Coord {
        self.moves.last().map_or(self.origin, |mv| mv.destination)
    }

    /// Moves that may be chosen next.
    pub fn options(&self) -> CheckersResult<Vec<Move>> {
        available_moves(&self.preview, Some(self.cursor()), Some(self.piece), &self.moves)
    }

    /// Picks the option leading to `destination`, if there is one.
    pub fn option_to(&self, destination: Coord) -> CheckersResult<Option<Move>> {
        Ok(self
            .options()?
            .into_iter()
            .find(|mv| mv.destination == destination))
    }

    /// Appends `mv`, which must be one of the current options.
    pub fn choose(&mut self, mv: Move) -> CheckersResult<()> {
        if !self.options()?.contains(&mv) {
            return Err(CheckersError::IllegalSequenceApplied {
                step: self.moves.len(),
                row: mv.destination.row,
                col: mv.destination.col,
            });
        }
        let cursor = self.cursor();
        apply_step(&mut self.preview, cursor, &mv)?;
        self.moves.push(mv);
        Ok(())
    }

    /// True once a move was chosen and nothing further is offered.
    pub fn is_finished(&self) -> CheckersResult<bool> {
        Ok(!self.moves.is_empty() && self.options()?.is_empty())
    }

    /// Applies the chosen moves to `board` and returns them.
    pub fn commit(self, board: &mut Board) -> CheckersResult<Vec<Move>> {
        if self.moves.is_empty() {
            return Err(CheckersError::NothingToCommit);
        }
        apply_moves_checked(board, self.origin, &self.moves)?;
        Ok(self.moves)
    }
}
