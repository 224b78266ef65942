//! Fixed-size bit set over the board cells

use super::{Pos, TOTAL_CELLS};

const WORD_BITS: usize = u64::BITS as usize;

/// Number of words needed to cover every cell (4 * 64 = 256 >= 225)
const WORDS: usize = TOTAL_CELLS.div_ceil(WORD_BITS);

/// One bit per cell, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    words: [u64; WORDS],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    #[inline]
    fn locate(pos: Pos) -> (usize, u64) {
        let idx = pos.to_index();
        (idx / WORD_BITS, 1u64 << (idx % WORD_BITS))
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let (word, mask) = Self::locate(pos);
        self.words[word] |= mask;
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let (word, mask) = Self::locate(pos);
        self.words[word] &= !mask;
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let (word, mask) = Self::locate(pos);
        self.words[word] & mask != 0
    }

    /// Popcount
    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Bitwise union of two sets
    #[inline]
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        let mut words = self.words;
        for (w, o) in words.iter_mut().zip(other.words.iter()) {
            *w |= o;
        }
        Bitboard { words }
    }

    /// True when every board cell is set
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count() as usize == TOTAL_CELLS
    }

    /// Iterate over set positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            words: self.words,
            word_idx: 0,
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    words: [u64; WORDS],
    word_idx: usize,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < WORDS {
            let word = &mut self.words[self.word_idx];
            if *word == 0 {
                self.word_idx += 1;
                continue;
            }
            let idx = self.word_idx * WORD_BITS + word.trailing_zeros() as usize;
            *word &= *word - 1;
            // Bits past the last cell are never set
            return (idx < TOTAL_CELLS).then(|| Pos::from_index(idx));
        }
        None
    }
}
