use crate::checkers_move::{ChainState, Move};
use crate::position::{Coord, Piece};

/// Identifies one generation request.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct MoveKey {
    pub board_hash: u64, // Zobrist hash of the board
    pub from: Coord,
    pub piece: Piece,
    pub chain: ChainState,
}

impl MoveKey {
    fn slot_hash(&self) -> u64 {
        let mut hash = self.board_hash;
        hash ^= (self.from.row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        hash ^= (self.from.col as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
        hash ^= match self.chain {
            ChainState::Fresh => 0,
            ChainState::Continuing => 0x1656_67B1_9E37_79F9,
            ChainState::Ended => 0x27D4_EB2F_1656_67C5,
        };
        hash
    }
}

#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub key: MoveKey,
    pub moves: Vec<Move>,
}

/// Direct-mapped memo of generated moves.
#[derive(Clone, Debug)]
pub struct MoveCache {
    table: Vec<Option<CacheEntry>>,
    size: usize,
    hits: u64,
    misses: u64,
}

impl MoveCache {
    pub fn new(size_kb: usize) -> Self {
        // Calculate number of entries that fit in size_kb kilobytes, at least one
        let entry_size = std::mem::size_of::<Option<CacheEntry>>();
        let num_entries = ((size_kb * 1024) / entry_size).max(1);

        MoveCache {
            table: vec![None; num_entries],
            size: num_entries,
            hits: 0,
            misses: 0,
        }
    }

    /// Always replaces whatever occupies the slot.
    pub fn store(&mut self, key: MoveKey, moves: Vec<Move>) {
        let index = self.get_index(&key);
        self.table[index] = Some(CacheEntry { key, moves });
    }

    pub fn lookup(&mut self, key: &MoveKey) -> Option<&[Move]> {
        let index = self.get_index(key);
        match &self.table[index] {
            Some(entry) if entry.key == *key => {
                self.hits += 1;
                Some(entry.moves.as_slice())
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.table.fill(None);
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.table.iter().filter(|entry| entry.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Lookup hits and misses since the last clear.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    fn get_index(&self, key: &MoveKey) -> usize {
        (key.slot_hash() as usize) % self.size
    }
}
