//! Diagonal direction sets.
//!
//! Each piece kind moves along a subset of the four diagonals. The subset is
//! a `Directions` bit set and is always walked in the fixed order of
//! `DIAGONALS`: up-left, up-right, down-left, down-right.
//!
//! Left and right are taken relative to the vertical heading: the column
//! step is the row step times the horizontal sign (left = -1, right = +1).
//! Going up, left is therefore towards the last column.

use bitflags::bitflags;

use crate::position::{Piece, PieceKind, Player};

bitflags! {
    pub struct Directions: u8 {
        const NONE = 0;
        const UP_LEFT = 1 << 0;
        const UP_RIGHT = 1 << 1;
        const DOWN_LEFT = 1 << 2;
        const DOWN_RIGHT = 1 << 3;
        const UP = Self::UP_LEFT.bits | Self::UP_RIGHT.bits;
        const DOWN = Self::DOWN_LEFT.bits | Self::DOWN_RIGHT.bits;
        const ALL = Self::UP.bits | Self::DOWN.bits;
    }
}

/// Every diagonal with its `(row, col)` step, in the order they are tried.
///
/// Up is towards row 0.
pub const DIAGONALS: [(Directions, isize, isize); 4] = [
    (Directions::UP_LEFT, -1, 1),
    (Directions::UP_RIGHT, -1, -1),
    (Directions::DOWN_LEFT, 1, -1),
    (Directions::DOWN_RIGHT, 1, 1),
];

impl Directions {
    /// The diagonals a piece may move along.
    ///
    /// A man only moves forward: up for `Player1`, down for `Player2`.
    pub fn for_piece(piece: &Piece) -> Directions {
        match (piece.kind, piece.owner) {
            (PieceKind::King, _) => Directions::ALL,
            (PieceKind::Man, Player::Player1) => Directions::UP,
            (PieceKind::Man, Player::Player2) => Directions::DOWN,
        }
    }

    /// Row and column steps of the contained diagonals, in the order they are tried.
    pub fn steps(self) -> impl Iterator<Item = (isize, isize)> {
        DIAGONALS
            .into_iter()
            .filter(move |(direction, _, _)| self.contains(*direction))
            .map(|(_, d_row, d_col)| (d_row, d_col))
    }
}
