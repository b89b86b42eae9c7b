use crate::error::{CheckersError, CheckersResult};
use crate::position::{Board, Piece, PieceKind, Player};
use rand::prelude::*;

const SEED: u64 = 0xC4EC_4E55;

/// Zobrist keys for one board size.
#[derive(Clone, Debug)]
pub struct Zobrist {
    rows: usize,
    cols: usize,
    piece_square: Vec<[u64; 4]>, // 2 kinds * 2 owners per square
}

impl Zobrist {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(SEED); // Fixed seed for reproducibility
        let piece_square = (0..rows * cols)
            .map(|_| [rng.gen(), rng.gen(), rng.gen(), rng.gen()])
            .collect();

        Zobrist {
            rows,
            cols,
            piece_square,
        }
    }

    pub fn for_board(board: &Board) -> Self {
        Zobrist::new(board.rows(), board.cols())
    }

    /// Whether these keys cover `board`.
    pub fn fits(&self, board: &Board) -> bool {
        self.rows == board.rows() && self.cols == board.cols()
    }

    /// Fails with `InvalidDimensions` if the keys were drawn for another size.
    pub fn hash_board(&self, board: &Board) -> CheckersResult<u64> {
        if !self.fits(board) {
            return Err(CheckersError::InvalidDimensions {
                rows: board.rows(),
                cols: board.cols(),
                reason: "board size does not match the hashing keys",
            });
        }
        let mut hash = 0;

        for (coord, piece) in board.pieces() {
            let square = coord.row * self.cols + coord.col;
            hash ^= self.piece_square[square][piece_index(&piece)];
        }

        Ok(hash)
    }
}

fn piece_index(piece: &Piece) -> usize {
    let base = match piece.kind {
        PieceKind::Man => 0,
        PieceKind::King => 2,
    };
    base + if piece.owner == Player::Player1 { 0 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moveapplication::apply_moves;
    use crate::movegeneration::moves_from;
    use crate::position::{initial_board, Coord};

    #[test]
    fn test_same_board_same_hash() {
        let board1 = initial_board(8, 8).unwrap();
        let board2 = initial_board(8, 8).unwrap();
        let zobrist = Zobrist::new(8, 8);

        assert_eq!(
            zobrist.hash_board(&board1).unwrap(),
            zobrist.hash_board(&board2).unwrap()
        );
    }

    #[test]
    fn test_keys_are_reproducible() {
        let board = initial_board(8, 8).unwrap();
        assert_eq!(
            Zobrist::new(8, 8).hash_board(&board).unwrap(),
            Zobrist::for_board(&board).hash_board(&board).unwrap()
        );
    }

    #[test]
    fn test_move_changes_hash() {
        let zobrist = Zobrist::new(8, 8);
        let board1 = initial_board(8, 8).unwrap();
        let mut board2 = board1.clone();

        let moves = moves_from(&board2, Coord::new(5, 0), &[]).unwrap();
        apply_moves(&mut board2, Coord::new(5, 0), &moves[..1]).unwrap();
        assert_ne!(
            zobrist.hash_board(&board1).unwrap(),
            zobrist.hash_board(&board2).unwrap()
        );
    }

    #[test]
    fn test_kind_and_owner_affect_hash() {
        let zobrist = Zobrist::new(8, 8);
        let coord = Coord::new(3, 4);
        let mut board = Board::empty(8, 8).unwrap();

        board.place(coord, Piece::man(Player::Player1)).unwrap();
        let man = zobrist.hash_board(&board).unwrap();
        board.place(coord, Piece::king(Player::Player1)).unwrap();
        let king = zobrist.hash_board(&board).unwrap();
        board.place(coord, Piece::king(Player::Player2)).unwrap();
        let other = zobrist.hash_board(&board).unwrap();

        assert_ne!(man, king);
        assert_ne!(king, other);
        let empty = Board::empty(8, 8).unwrap();
        assert_eq!(zobrist.hash_board(&empty).unwrap(), 0);
    }

    #[test]
    fn test_fits() {
        let zobrist = Zobrist::new(8, 8);
        assert!(zobrist.fits(&Board::empty(8, 8).unwrap()));
        assert!(!zobrist.fits(&Board::empty(10, 10).unwrap()));
    }

    #[test]
    fn test_mismatched_board_is_rejected() {
        let zobrist = Zobrist::new(8, 8);
        let mut taller = Board::empty(10, 8).unwrap();
        taller.place(Coord::new(9, 7), Piece::man(Player::Player1)).unwrap();
        assert!(matches!(
            zobrist.hash_board(&taller),
            Err(CheckersError::InvalidDimensions { rows: 10, cols: 8, .. })
        ));

        let narrower = Board::empty(8, 6).unwrap();
        assert!(zobrist.hash_board(&narrower).is_err());
    }
}
