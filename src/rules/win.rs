//! Five-in-a-row detection
//!
//! Any winning line must pass through the stone just placed, so detection only
//! scans the four lines through that stone. Two rule sets are supported:
//!
//! - [`RuleSet::Standard`]: exactly five wins; six or more (an overline) does not.
//! - [`RuleSet::Freestyle`]: five or more wins.

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::board::{Board, Player, Pos, WIN_LENGTH};

/// Which run lengths count as a win
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RuleSet {
    /// Exactly five in a row; overlines do not win
    #[default]
    Standard,
    /// Five or more in a row
    Freestyle,
}

impl RuleSet {
    /// Whether a contiguous run of `length` stones wins under this rule set
    #[inline]
    pub fn is_winning_length(self, length: usize) -> bool {
        match self {
            RuleSet::Standard => length == WIN_LENGTH,
            RuleSet::Freestyle => length >= WIN_LENGTH,
        }
    }
}

/// Line orientation through a stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// (row, col) step for the positive direction
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Contiguous same-colour stones along one direction through a stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRun {
    pub player: Player,
    pub direction: Direction,
    /// Furthest stone of the run in the negative direction
    pub start: Pos,
    /// Number of stones, the origin included
    pub length: usize,
    /// Negative end ran into the edge or an opponent stone
    pub start_blocked: bool,
    /// Positive end ran into the edge or an opponent stone
    pub end_blocked: bool,
}

impl LineRun {
    /// Neither end is blocked
    pub fn is_open(&self) -> bool {
        !self.start_blocked && !self.end_blocked
    }

    /// Stones of the run, from `start` in the positive direction
    pub fn positions(&self) -> Vec<Pos> {
        let (dr, dc) = self.direction.delta();
        (0..self.length as i32)
            .filter_map(|i| self.start.offset(dr, dc, i))
            .collect()
    }
}

/// Walk from `origin` along `(dr, dc)` counting `player` stones.
///
/// Stops after `WIN_LENGTH` steps, which is enough to tell a five from an
/// overline. Returns the count, the last matching position and whether the
/// walk ended on the edge or an opponent stone.
fn extend(board: &Board, origin: Pos, player: Player, dr: i32, dc: i32) -> (usize, Pos, bool) {
    let mut count = 0;
    let mut last = origin;
    for step in 1..=WIN_LENGTH as i32 {
        let Some(next) = origin.offset(dr, dc, step) else {
            return (count, last, true);
        };
        match board.get(next).owner() {
            Some(owner) if owner == player => {
                count += 1;
                last = next;
            }
            Some(_) => return (count, last, true),
            None => return (count, last, false),
        }
    }
    (count, last, false)
}

/// Measure the run through `pos` in one direction.
///
/// Returns `None` when `pos` is empty.
pub fn scan_line(board: &Board, pos: Pos, direction: Direction) -> Option<LineRun> {
    let player = board.get(pos).owner()?;
    let (dr, dc) = direction.delta();

    let (forward, _, end_blocked) = extend(board, pos, player, dr, dc);
    let (backward, start, start_blocked) = extend(board, pos, player, -dr, -dc);

    Some(LineRun {
        player,
        direction,
        start,
        length: 1 + forward + backward,
        start_blocked,
        end_blocked,
    })
}

/// Find the winning run through the stone at `pos`, if any.
///
/// Every direction is checked: under [`RuleSet::Standard`] an overline in one
/// direction does not hide an exact five in another.
#[instrument(skip(board), level = "trace")]
pub fn find_win(board: &Board, pos: Pos, rule: RuleSet) -> Option<LineRun> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| scan_line(board, pos, direction))
        .inspect(|run| trace!(direction = ?run.direction, length = run.length, "scanned line"))
        .find(|run| rule.is_winning_length(run.length))
}

/// Whether the stone at `pos` completes a winning line under `rule`.
/// Same as [`find_win`] without the run.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, rule: RuleSet) -> bool {
    find_win(board, pos, rule).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8)], player: Player) -> Board {
        let mut board = Board::new();
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), player);
        }
        board
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(&[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)], Player::Black);
        let run = find_win(&board, Pos::new(7, 5), RuleSet::Standard).unwrap();
        assert_eq!(run.direction, Direction::Horizontal);
        assert_eq!(run.length, 5);
        assert_eq!(run.start, Pos::new(7, 3));
        assert_eq!(run.player, Player::Black);
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(&[(0, 9), (1, 9), (2, 9), (3, 9), (4, 9)], Player::White);
        assert!(has_five_at_pos(&board, Pos::new(0, 9), RuleSet::Standard));
        assert!(has_five_at_pos(&board, Pos::new(4, 9), RuleSet::Standard));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let board = board_with(&[(2, 2), (3, 3), (4, 4), (5, 5), (6, 6)], Player::White);
        let run = find_win(&board, Pos::new(6, 6), RuleSet::Standard).unwrap();
        assert_eq!(run.direction, Direction::Diagonal);
        let expected: Vec<_> = (2..7).map(|i| Pos::new(i, i)).collect();
        assert_eq!(run.positions(), expected);
    }

    #[test]
    fn test_anti_diagonal_five() {
        // (4, 8) down-left to (8, 4)
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (4 + i, 8 - i)).collect();
        let board = board_with(&stones, Player::Black);
        let run = find_win(&board, Pos::new(6, 6), RuleSet::Standard).unwrap();
        assert_eq!(run.direction, Direction::AntiDiagonal);
        // Negative end of (1, -1) is up and to the right
        assert_eq!(run.start, Pos::new(4, 8));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_with(&[(9, 0), (9, 1), (9, 2), (9, 3)], Player::Black);
        for rule in [RuleSet::Standard, RuleSet::Freestyle] {
            assert!(!has_five_at_pos(&board, Pos::new(9, 3), rule));
        }
    }

    #[test]
    fn test_overline_depends_on_rule() {
        let stones: Vec<(u8, u8)> = (0..6).map(|c| (9, c)).collect();
        let board = board_with(&stones, Player::Black);
        // Placed in the middle and at the end of the run
        for col in [0, 2, 5] {
            let pos = Pos::new(9, col);
            assert!(!has_five_at_pos(&board, pos, RuleSet::Standard));
            assert!(has_five_at_pos(&board, pos, RuleSet::Freestyle));
            assert_eq!(scan_line(&board, pos, Direction::Horizontal).unwrap().length, 6);
        }
    }

    #[test]
    fn test_overline_does_not_hide_other_direction() {
        let mut board = board_with(&[(7, 1), (7, 2), (7, 3), (7, 4), (7, 5), (7, 6)], Player::Black);
        for r in [3, 4, 5, 6] {
            board.place_stone(Pos::new(r, 3), Player::Black);
        }
        let run = find_win(&board, Pos::new(7, 3), RuleSet::Standard).unwrap();
        assert_eq!(run.direction, Direction::Vertical);
        assert_eq!(run.length, 5);
    }

    #[test]
    fn test_blocked_five_still_wins() {
        // W B B B B B W
        let mut board = board_with(&[(5, 1), (5, 2), (5, 3), (5, 4), (5, 5)], Player::Black);
        board.place_stone(Pos::new(5, 0), Player::White);
        board.place_stone(Pos::new(5, 6), Player::White);

        let run = find_win(&board, Pos::new(5, 3), RuleSet::Standard).unwrap();
        assert!(run.start_blocked);
        assert!(run.end_blocked);
        assert!(!run.is_open());
    }

    #[test]
    fn test_edge_blocks_and_open_ends() {
        let board = board_with(&[(14, 0), (14, 1), (14, 2)], Player::White);
        let run = scan_line(&board, Pos::new(14, 1), Direction::Horizontal).unwrap();
        assert_eq!(run.length, 3);
        assert!(run.start_blocked);
        assert!(!run.end_blocked);

        let middle = board_with(&[(7, 6), (7, 7), (7, 8)], Player::Black);
        let run = scan_line(&middle, Pos::new(7, 7), Direction::Horizontal).unwrap();
        assert!(run.is_open());
    }

    #[test]
    fn test_five_at_corner() {
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (10 + i, 10 + i)).collect();
        let board = board_with(&stones, Player::White);
        let run = find_win(&board, Pos::new(14, 14), RuleSet::Standard).unwrap();
        assert!(run.end_blocked);
    }

    #[test]
    fn test_opponent_stones_break_run() {
        let mut board = board_with(&[(3, 0), (3, 1), (3, 3), (3, 4)], Player::Black);
        board.place_stone(Pos::new(3, 2), Player::White);
        assert!(!has_five_at_pos(&board, Pos::new(3, 1), RuleSet::Freestyle));
        let run = scan_line(&board, Pos::new(3, 1), Direction::Horizontal).unwrap();
        assert_eq!(run.length, 2);
        assert!(run.end_blocked);
    }

    #[test]
    fn test_empty_cell_has_no_run() {
        let board = Board::new();
        assert!(scan_line(&board, Pos::new(7, 7), Direction::Vertical).is_none());
        assert!(find_win(&board, Pos::new(7, 7), RuleSet::Freestyle).is_none());
    }
}
