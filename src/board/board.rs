//! Board structure: one bitboard per colour

use super::bitboard::Bitboard;
use super::{Player, Pos, Stone, BOARD_SIZE};

/// Row-major grid of cell values, the shape handed to presentation code
pub type Grid = [[Stone; BOARD_SIZE]; BOARD_SIZE];

/// Game board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone without any legality checks.
    /// Use `GameEngine::make_move` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.is_empty(pos), "cell {pos} already occupied");
        self.stones_mut(player).set(pos);
    }

    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Bitboard for a colour
    #[inline]
    pub fn stones(&self, player: Player) -> &Bitboard {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    #[inline]
    fn stones_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }

    /// Stones of one colour on the board
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        self.stones(player).count()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.black.union(&self.white).is_full()
    }

    /// Owned copy of the cells as a 2-D grid
    pub fn to_grid(&self) -> Grid {
        let mut grid = [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
        for player in [Player::Black, Player::White] {
            for pos in self.stones(player).iter_ones() {
                grid[pos.row as usize][pos.col as usize] = player.stone();
            }
        }
        grid
    }
}
