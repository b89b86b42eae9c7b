//! Checkers engine library.
//!
//! This crate generates and applies checkers (draughts) moves. The board
//! model lives in `position`, single-step generation in `movegeneration`
//! and the only board-mutating operation in `moveapplication`. Front ends
//! select a piece, collect a chain of moves through repeated generation
//! calls (see `turn`) and commit the chain once.

pub mod checkers_move;
pub mod config;
pub mod directions;
pub mod error;
pub mod moveapplication;
pub mod movegeneration;
pub mod perft;
pub mod position;
pub mod transposition;
pub mod turn;
pub mod zobrist;

pub use checkers_move::{ChainState, Effect, Move};
pub use config::BoardConfig;
pub use error::{CheckersError, CheckersResult};
pub use moveapplication::{apply_moves, apply_moves_checked};
pub use movegeneration::available_moves;
pub use position::{initial_board, piece_at, Board, Coord, Piece, PieceKind, Player, Space};
pub use turn::Turn;

use tracing::debug;

use transposition::{MoveCache, MoveKey};
use zobrist::Zobrist;

/// Size of the move cache owned by a `Game`, in kilobytes.
pub const DEFAULT_CACHE_KB: usize = 256;

/// A board together with its hashing keys and a memo of generated moves.
///
/// Generation is pure, so results are cached by board hash, origin, piece
/// and chain state; the cache never needs invalidating when the board
/// changes.
#[derive(Debug, Clone)]
pub struct Game {
    /// The current board
    board: Board,
    /// Keys for hashing `board`
    zobrist: Zobrist,
    /// Memoized generation results
    cache: MoveCache,
}

impl Game {
    /// Creates a game with the starting layout described by `config`.
    pub fn new(config: BoardConfig) -> CheckersResult<Game> {
        let board = Board::with_config(&config)?;
        Ok(Game::from_board(board))
    }

    /// Creates a game around an arbitrary board.
    pub fn from_board(board: Board) -> Game {
        Game {
            zobrist: Zobrist::for_board(&board),
            cache: MoveCache::new(DEFAULT_CACHE_KB),
            board,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, row: usize, col: usize) -> CheckersResult<Option<Piece>> {
        piece_at(&self.board, row, col)
    }

    pub fn hash(&self) -> CheckersResult<u64> {
        self.zobrist.hash_board(&self.board)
    }

    /// Memoized `available_moves` against the current board.
    pub fn available_moves(
        &mut self,
        from: Option<Coord>,
        piece: Option<Piece>,
        chain: &[Move],
    ) -> CheckersResult<Vec<Move>> {
        let (from, piece) = match (from, piece) {
            (Some(from), Some(piece)) => (from, piece),
            _ => return Ok(Vec::new()),
        };
        let key = MoveKey {
            board_hash: self.hash()?,
            from,
            piece,
            chain: ChainState::of(chain),
        };
        if let Some(moves) = self.cache.lookup(&key) {
            return Ok(moves.to_vec());
        }
        let moves = available_moves(&self.board, Some(from), Some(piece), chain)?;
        self.cache.store(key, moves.clone());
        Ok(moves)
    }

    /// Starts building a turn for the piece on `at`.
    pub fn select(&self, at: Coord) -> CheckersResult<Turn> {
        Turn::select(&self.board, at)
    }

    /// Validates and applies one turn.
    pub fn apply_moves(&mut self, from: Coord, moves: &[Move]) -> CheckersResult<()> {
        apply_moves_checked(&mut self.board, from, moves)?;
        let hash = self.hash()?;
        debug!(hash, "board updated");
        Ok(())
    }

    /// Commits a turn built with `select`.
    pub fn commit(&mut self, turn: Turn) -> CheckersResult<Vec<Move>> {
        turn.commit(&mut self.board)
    }

    /// Cache hits and misses so far.
    pub fn cache_stats(&self) -> (u64, u64) {
        self.cache.stats()
    }
}
