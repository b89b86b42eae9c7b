use crate::checkers_move::Move;
use crate::error::CheckersResult;
use crate::moveapplication::apply_step;
use crate::movegeneration::available_moves;
use crate::position::{Board, Coord, Piece, Player};

/// Every complete move sequence the piece on `from` can play in one turn.
///
/// Chains are followed on a preview board, so a captured piece is gone for
/// the rest of the chain. An empty square yields no sequences.
pub fn complete_turns(board: &Board, from: Coord) -> CheckersResult<Vec<Vec<Move>>> {
    let mut turns = Vec::new();
    if let Some(piece) = board.piece_at(from)? {
        extend_turns(board, from, piece, &mut Vec::new(), &mut turns)?;
    }
    Ok(turns)
}

fn extend_turns(
    board: &Board,
    cursor: Coord,
    piece: Piece,
    chain: &mut Vec<Move>,
    turns: &mut Vec<Vec<Move>>,
) -> CheckersResult<()> {
    let options = available_moves(board, Some(cursor), Some(piece), chain)?;
    if options.is_empty() {
        if !chain.is_empty() {
            turns.push(chain.clone());
        }
        return Ok(());
    }

    for mv in options {
        let mut next = board.clone();
        apply_step(&mut next, cursor, &mv)?;
        chain.push(mv);
        extend_turns(&next, mv.destination, piece, chain, turns)?;
        chain.pop();
    }
    Ok(())
}

/// Totals over every complete turn available to one player.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftStats {
    pub nodes: u64,
    pub captures: u64,
    pub longest_chain: usize,
    pub movable_pieces: usize,
}

pub struct Perft {
    stats: PerftStats,
}

impl Perft {
    pub fn new() -> Self {
        Perft {
            stats: PerftStats::default(),
        }
    }

    pub fn run(&mut self, board: &Board, player: Player) -> CheckersResult<PerftStats> {
        self.stats = PerftStats::default();
        for (from, _) in board.pieces_of(player) {
            let turns = complete_turns(board, from)?;
            if !turns.is_empty() {
                self.stats.movable_pieces += 1;
            }
            for turn in &turns {
                self.stats.nodes += 1;
                self.stats.captures += turn.iter().filter(|mv| mv.is_capture()).count() as u64;
                self.stats.longest_chain = self.stats.longest_chain.max(turn.len());
            }
        }
        Ok(self.stats)
    }

    pub fn stats(&self) -> PerftStats {
        self.stats
    }
}

impl Default for Perft {
    fn default() -> Self {
        Perft::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::initial_board;
    use crate::position::Player::*;

    #[test]
    fn test_initial_position_counts() {
        let board = initial_board(8, 8).unwrap();
        let mut perft = Perft::new();

        // Front-row men have 7 steps between them; the rest are blocked.
        let expected = PerftStats {
            nodes: 7,
            captures: 0,
            longest_chain: 1,
            movable_pieces: 4,
        };
        assert_eq!(perft.run(&board, Player1).unwrap(), expected);
        assert_eq!(perft.run(&board, Player2).unwrap(), expected);
        assert_eq!(perft.stats(), expected);
    }

    #[test]
    fn test_complete_turns_follow_chains() {
        let board = Board::from_diagram(
            "
            ........
            ........
            ...m.m..
            ........
            ...m....
            ..M.....
            ........
            ........
            ",
        )
        .unwrap();
        let turns = complete_turns(&board, Coord::new(5, 2)).unwrap();

        // The jump to (3,4) followed by either jump, or a step to (4,1).
        assert_eq!(
            turns,
            vec![
                vec![
                    Move::capture(Coord::new(3, 4), Coord::new(4, 3)),
                    Move::capture(Coord::new(1, 6), Coord::new(2, 5)),
                ],
                vec![
                    Move::capture(Coord::new(3, 4), Coord::new(4, 3)),
                    Move::capture(Coord::new(1, 2), Coord::new(2, 3)),
                ],
                vec![Move::step(Coord::new(4, 1))],
            ]
        );
    }

    #[test]
    fn test_king_chain_terminates() {
        let board = Board::from_diagram(
            "
            ......
            ..m...
            ......
            ..m...
            .K....
            ......
            ",
        )
        .unwrap();
        let turns = complete_turns(&board, Coord::new(4, 1)).unwrap();
        assert!(turns.iter().all(|turn| turn.len() <= 2));
        assert!(turns.contains(&vec![
            Move::capture(Coord::new(2, 3), Coord::new(3, 2)),
            Move::capture(Coord::new(0, 1), Coord::new(1, 2)),
        ]));
    }

    #[test]
    fn test_empty_square_has_no_turns() {
        let board = initial_board(8, 8).unwrap();
        assert!(complete_turns(&board, Coord::new(4, 4)).unwrap().is_empty());
    }
}
