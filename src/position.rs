//! Board model.
//!
//! A board is a rectangular grid of spaces stored row-major in a single
//! owned vector. Each space holds at most one piece. Coordinates are
//! `(row, col)`, 0-indexed, with row 0 at the top (`Player2`'s side).

use std::fmt;

use crate::config::BoardConfig;
use crate::error::{CheckersError, CheckersResult};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Player1,
    Player2,
}
use Player::*;

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player1 => Player2,
            Player2 => Player1,
        }
    }

    /// Row step that carries a man of this player forward.
    ///
    /// `Player1` starts at the bottom and moves towards row 0.
    pub fn forward(self) -> isize {
        match self {
            Player1 => -1,
            Player2 => 1,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub owner: Player,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(owner: Player, kind: PieceKind) -> Piece {
        Piece { owner, kind }
    }

    pub const fn man(owner: Player) -> Piece {
        Piece::new(owner, PieceKind::Man)
    }

    pub const fn king(owner: Player) -> Piece {
        Piece::new(owner, PieceKind::King)
    }

    pub fn is_opponent_of(&self, other: &Piece) -> bool {
        self.owner != other.owner
    }

    /// Diagram character: uppercase for `Player1`, lowercase for `Player2`.
    pub fn to_char(self) -> char {
        let c = match self.kind {
            PieceKind::Man => 'm',
            PieceKind::King => 'k',
        };
        match self.owner {
            Player1 => c.to_ascii_uppercase(),
            Player2 => c,
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'M' => Some(Piece::man(Player1)),
            'K' => Some(Piece::king(Player1)),
            'm' => Some(Piece::man(Player2)),
            'k' => Some(Piece::king(Player2)),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single board cell.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Space {
    pub piece: Option<Piece>,
}

impl Space {
    pub const EMPTY: Space = Space { piece: None };

    pub const fn occupied(piece: Piece) -> Space {
        Space { piece: Some(piece) }
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

/// The playing grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: usize,
    cols: usize,
    spaces: Vec<Space>,
}

impl Board {
    /// Creates a board with every space empty.
    pub fn empty(rows: usize, cols: usize) -> CheckersResult<Board> {
        if rows == 0 || cols == 0 {
            return Err(CheckersError::InvalidDimensions {
                rows,
                cols,
                reason: "board must have at least one row and one column",
            });
        }
        Ok(Board {
            rows,
            cols,
            spaces: vec![Space::EMPTY; rows * cols],
        })
    }

    /// Creates the starting layout described by `config`.
    ///
    /// Pieces sit on the squares where `row + col` is odd. `Player2` fills the
    /// top `starting_rows` rows and `Player1` the bottom ones.
    pub fn with_config(config: &BoardConfig) -> CheckersResult<Board> {
        config.validate()?;
        let mut board = Board::empty(config.rows, config.cols)?;
        for row in 0..config.rows {
            let owner = if row < config.starting_rows {
                Player2
            } else if row >= config.rows - config.starting_rows {
                Player1
            } else {
                continue;
            };
            for col in (0..config.cols).filter(|col| (row + col) % 2 == 1) {
                let index = board.index_unchecked(row, col);
                board.spaces[index] = Space::occupied(Piece::man(owner));
            }
        }
        Ok(board)
    }

    /// Builds a board from explicit rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Space>>) -> CheckersResult<Board> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, |row| row.len());
        let mut board = Board::empty(row_count, cols)?;
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(CheckersError::InvalidDimensions {
                    rows: row_count,
                    cols,
                    reason: "rows have different lengths",
                });
            }
            for (c, space) in row.into_iter().enumerate() {
                let index = board.index_unchecked(r, c);
                board.spaces[index] = space;
            }
        }
        Ok(board)
    }

    /// Parses a diagram with one line per row.
    ///
    /// `.` is an empty space, `M`/`K` are `Player1` men/kings and `m`/`k` are
    /// `Player2` men/kings. Whitespace inside a line and blank lines are ignored,
    /// and reported columns count board squares only.
    pub fn from_diagram(diagram: &str) -> CheckersResult<Board> {
        let mut rows = Vec::new();
        for (line_no, line) in diagram.lines().enumerate() {
            let mut row = Vec::new();
            for (column, c) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let space = if c == '.' {
                    Space::EMPTY
                } else {
                    match Piece::from_char(c) {
                        Some(piece) => Space::occupied(piece),
                        None => {
                            return Err(CheckersError::InvalidDiagram {
                                line: line_no + 1,
                                column: column + 1,
                                found: c,
                            })
                        }
                    }
                };
                row.push(space);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Board::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Steps `coord` by `(d_row, d_col)`, returning `None` off the board.
    pub fn offset(&self, coord: Coord, d_row: isize, d_col: isize) -> Option<Coord> {
        let row = coord.row.checked_add_signed(d_row)?;
        let col = coord.col.checked_add_signed(d_col)?;
        if self.in_bounds(row, col) {
            Some(Coord::new(row, col))
        } else {
            None
        }
    }

    /// Fails with `OutOfBounds` unless `coord` is on the board.
    pub fn check(&self, coord: Coord) -> CheckersResult<()> {
        self.index(coord).map(|_| ())
    }

    fn index(&self, coord: Coord) -> CheckersResult<usize> {
        if self.in_bounds(coord.row, coord.col) {
            Ok(self.index_unchecked(coord.row, coord.col))
        } else {
            Err(CheckersError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn index_unchecked(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn space(&self, coord: Coord) -> CheckersResult<&Space> {
        let index = self.index(coord)?;
        Ok(&self.spaces[index])
    }

    pub fn piece_at(&self, coord: Coord) -> CheckersResult<Option<Piece>> {
        Ok(self.space(coord)?.piece)
    }

    pub fn is_empty_at(&self, coord: Coord) -> CheckersResult<bool> {
        Ok(self.space(coord)?.is_empty())
    }

    /// Puts `piece` on `coord`, returning whatever was there before.
    pub fn place(&mut self, coord: Coord, piece: Piece) -> CheckersResult<Option<Piece>> {
        let index = self.index(coord)?;
        Ok(self.spaces[index].piece.replace(piece))
    }

    /// Clears `coord`, returning the removed piece.
    pub fn remove(&mut self, coord: Coord) -> CheckersResult<Option<Piece>> {
        let index = self.index(coord)?;
        Ok(self.spaces[index].piece.take())
    }

    /// Occupied spaces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.spaces.iter().enumerate().filter_map(move |(i, space)| {
            space
                .piece
                .map(|piece| (Coord::new(i / self.cols, i % self.cols), piece))
        })
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.owner == player)
    }

    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.spaces.chunks(self.cols) {
            let line: String = row
                .iter()
                .map(|space| space.piece.map_or('.', Piece::to_char))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// The standard starting layout on a `rows` x `cols` board, three rows per side.
pub fn initial_board(rows: usize, cols: usize) -> CheckersResult<Board> {
    Board::with_config(&BoardConfig::new(rows, cols))
}

/// The piece at `(row, col)`, if any. Out-of-bounds coordinates are an error.
pub fn piece_at(board: &Board, row: usize, col: usize) -> CheckersResult<Option<Piece>> {
    board.piece_at(Coord::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD: &str = "
        .m.m.m.m
        m.m.m.m.
        .m.m.m.m
        ........
        ........
        M.M.M.M.
        .M.M.M.M
        M.M.M.M.
    ";

    #[test]
    fn test_initial_board_matches_standard_layout() {
        let board = initial_board(8, 8).unwrap();
        assert_eq!(board, Board::from_diagram(STANDARD).unwrap());
        assert_eq!(board.count(Player1), 12);
        assert_eq!(board.count(Player2), 12);
    }

    #[test]
    fn test_initial_board_alternates_parity() {
        let board = initial_board(8, 8).unwrap();
        assert_eq!(piece_at(&board, 0, 0).unwrap(), None);
        assert_eq!(piece_at(&board, 0, 1).unwrap(), Some(Piece::man(Player2)));
        assert_eq!(piece_at(&board, 1, 0).unwrap(), Some(Piece::man(Player2)));
        assert_eq!(piece_at(&board, 5, 0).unwrap(), Some(Piece::man(Player1)));
        assert_eq!(piece_at(&board, 6, 1).unwrap(), Some(Piece::man(Player1)));
        for col in 0..8 {
            assert_eq!(piece_at(&board, 3, col).unwrap(), None);
            assert_eq!(piece_at(&board, 4, col).unwrap(), None);
        }
    }

    #[test]
    fn test_initial_board_other_sizes() {
        let board = initial_board(10, 10).unwrap();
        assert_eq!(board.count(Player1), 15);
        assert_eq!(board.count(Player2), 15);
        assert!(initial_board(4, 8).is_err());
    }

    #[test]
    fn test_piece_at_out_of_bounds() {
        let board = initial_board(8, 8).unwrap();
        assert_eq!(
            piece_at(&board, 8, 0),
            Err(CheckersError::OutOfBounds {
                row: 8,
                col: 0,
                rows: 8,
                cols: 8
            })
        );
        assert!(piece_at(&board, 0, 8).is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let board = Board::empty(8, 8).unwrap();
        assert_eq!(board.offset(Coord::new(0, 0), -1, -1), None);
        assert_eq!(board.offset(Coord::new(7, 7), 1, 1), None);
        assert_eq!(board.offset(Coord::new(3, 0), 1, -1), None);
        assert_eq!(board.offset(Coord::new(3, 3), -1, 1), Some(Coord::new(2, 4)));
    }

    #[test]
    fn test_spaces_are_independent() {
        let mut board = Board::empty(8, 8).unwrap();
        board.place(Coord::new(3, 2), Piece::king(Player1)).unwrap();
        assert_eq!(board.pieces().count(), 1);
        assert_eq!(board.piece_at(Coord::new(4, 2)).unwrap(), None);
    }

    #[test]
    fn test_place_and_remove() {
        let mut board = Board::empty(4, 4).unwrap();
        let coord = Coord::new(1, 2);
        assert_eq!(board.place(coord, Piece::man(Player2)).unwrap(), None);
        assert_eq!(
            board.remove(coord).unwrap(),
            Some(Piece::man(Player2))
        );
        assert!(board.is_empty_at(coord).unwrap());
    }

    #[test]
    fn test_diagram_round_trip_through_display() {
        let board = Board::from_diagram(STANDARD).unwrap();
        assert_eq!(Board::from_diagram(&board.to_string()).unwrap(), board);
    }

    #[test]
    fn test_diagram_rejects_ragged_rows() {
        let result = Board::from_diagram("...\n..\n");
        assert!(matches!(
            result,
            Err(CheckersError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_diagram_rejects_unknown_character() {
        let result = Board::from_diagram("..\n.x\n");
        assert_eq!(
            result,
            Err(CheckersError::InvalidDiagram {
                line: 2,
                column: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_diagram_error_column_ignores_indentation() {
        let result = Board::from_diagram(
            "
            . m .
            . . x
            ",
        );
        assert_eq!(
            result,
            Err(CheckersError::InvalidDiagram {
                line: 3,
                column: 3,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_opponent_and_forward() {
        assert_eq!(Player1.opponent(), Player2);
        assert_eq!(Player2.opponent(), Player1);
        assert_eq!(Player1.forward(), -1);
        assert_eq!(Player2.forward(), 1);
    }
}
