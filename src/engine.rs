//! Game engine: board, turn order, history and terminal state
//!
//! [`GameEngine`] is the single owner of a game in progress. Every mutation goes
//! through [`GameEngine::make_move`], [`GameEngine::undo`] or
//! [`GameEngine::reset`]; everything else is a read-only query.
//!
//! Input handling is strict: coordinates off the board are a [`GameError`],
//! while well-formed moves that the rules forbid (occupied cell, finished game)
//! return `Ok(false)` so a caller can simply re-prompt.
//!
//! The engine has no interior synchronization. A concurrent host must
//! serialize calls, e.g. by owning the engine on one thread or behind a mutex.
//!
//! # Example
//!
//! ```
//! use gomoku::{GameEngine, Player};
//!
//! let mut game = GameEngine::new();
//! assert_eq!(game.make_move(7, 7), Ok(true));
//! assert_eq!(game.current_player(), Player::White);
//!
//! // Occupied: rejected, not an error
//! assert_eq!(game.make_move(7, 7), Ok(false));
//! // Off the board: an error
//! assert!(game.make_move(15, 0).is_err());
//!
//! assert!(game.undo());
//! assert_eq!(game.move_count(), 0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Grid, Player, Pos};
use crate::error::{GameError, Result};
use crate::rules::{find_win, LineRun, RuleSet};

/// One entry of the move history.
///
/// Each move turns exactly one empty cell into a stone, so the position and
/// the mover are enough to take it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub pos: Pos,
    pub player: Player,
    /// 1-based ply number
    pub move_number: u32,
}

/// Whether the game is still running and how it ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Player),
    /// Board full without a winning line
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Full snapshot of the game for presentation code.
///
/// Owns a copy of the grid; later moves never change a snapshot already handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Grid,
    pub current_player: Player,
    pub game_over: bool,
    /// `None` while playing and after a draw
    pub winner: Option<Player>,
    pub move_count: u32,
    pub black_stones: u32,
    pub white_stones: u32,
    pub can_undo: bool,
}

/// Counters shown next to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub move_count: u32,
    pub black_stones: u32,
    pub white_stones: u32,
    pub is_game_over: bool,
    pub winner: Option<Player>,
}

/// Rules engine and state machine for one game
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    rule: RuleSet,
    current_player: Player,
    status: GameStatus,
    history: Vec<MoveRecord>,
    move_count: u32,
    black_stones: u32,
    white_stones: u32,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Empty board, Black to move, [`RuleSet::Standard`]
    pub fn new() -> Self {
        Self::with_rule(RuleSet::default())
    }

    /// Empty board with the given win rule. The rule survives [`reset`](Self::reset).
    pub fn with_rule(rule: RuleSet) -> Self {
        Self {
            board: Board::new(),
            rule,
            current_player: Player::Black,
            status: GameStatus::InProgress,
            history: Vec::with_capacity(crate::board::TOTAL_CELLS),
            move_count: 0,
            black_stones: 0,
            white_stones: 0,
        }
    }

    /// Place the current player's stone at (`row`, `col`).
    ///
    /// Returns `Ok(true)` when the stone was placed, `Ok(false)` when the cell
    /// is occupied or the game is already over. The turn passes to the
    /// opponent only when the game goes on.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidArgument`] if either coordinate is outside `0..=14`.
    /// No state changes in that case.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn make_move(&mut self, row: i32, col: i32) -> Result<bool> {
        let Some(pos) = Pos::try_new(row, col) else {
            warn!(row, col, "rejected malformed coordinates");
            return Err(GameError::InvalidArgument { row, col });
        };
        Ok(self.place(pos))
    }

    /// Same as [`make_move`](Self::make_move) for a caller that already holds a [`Pos`].
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidArgument`] if `pos` lies off the board, which a struct
    /// literal can produce.
    pub fn play(&mut self, pos: Pos) -> Result<bool> {
        self.make_move(i32::from(pos.row), i32::from(pos.col))
    }

    fn place(&mut self, pos: Pos) -> bool {
        if self.status.is_over() {
            debug!(%pos, "move after game over");
            return false;
        }
        if !self.board.is_empty(pos) {
            debug!(%pos, "cell occupied");
            return false;
        }

        let player = self.current_player;
        self.board.place_stone(pos, player);
        self.move_count += 1;
        *self.stone_counter(player) += 1;
        self.history.push(MoveRecord {
            pos,
            player,
            move_number: self.move_count,
        });
        debug!(%pos, %player, move_number = self.move_count, "stone placed");

        if let Some(run) = find_win(&self.board, pos, self.rule) {
            self.status = GameStatus::Won(player);
            info!(%player, direction = ?run.direction, moves = self.move_count, "game won");
        } else if self.is_board_full() {
            self.status = GameStatus::Draw;
            info!(moves = self.move_count, "board full, game drawn");
        } else {
            self.current_player = player.opponent();
        }

        self.debug_check_invariants();
        true
    }

    /// True iff every cell holds a stone
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Take back the most recent move.
    ///
    /// The mover of the undone stone is to play again, and a finished game is
    /// always reopened. Returns `false` with no change when there is no history.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            debug!("nothing to undo");
            return false;
        };

        self.board.remove_stone(record.pos);
        self.current_player = record.player;
        self.move_count -= 1;
        *self.stone_counter(record.player) -= 1;
        self.status = GameStatus::InProgress;
        debug!(pos = %record.pos, player = %record.player, "move undone");

        self.debug_check_invariants();
        true
    }

    /// Back to the freshly constructed state, keeping the rule set
    #[instrument(skip(self), fields(moves = self.move_count))]
    pub fn reset(&mut self) {
        *self = Self::with_rule(self.rule);
        info!("game reset");
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Owned snapshot of everything the presentation layer renders
    pub fn game_state(&self) -> GameState {
        GameState {
            board: self.board.to_grid(),
            current_player: self.current_player,
            game_over: self.status.is_over(),
            winner: self.status.winner(),
            move_count: self.move_count,
            black_stones: self.black_stones,
            white_stones: self.white_stones,
            can_undo: self.can_undo(),
        }
    }

    pub fn game_stats(&self) -> GameStats {
        GameStats {
            move_count: self.move_count,
            black_stones: self.black_stones,
            white_stones: self.white_stones,
            is_game_over: self.status.is_over(),
            winner: self.status.winner(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rule(&self) -> RuleSet {
        self.rule
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Stones placed by one side
    #[inline]
    pub fn stones(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black_stones,
            Player::White => self.white_stones,
        }
    }

    /// The line that ended the game, if it was won
    pub fn winning_line(&self) -> Option<LineRun> {
        if !matches!(self.status, GameStatus::Won(_)) {
            return None;
        }
        let last = self.history.last()?;
        find_win(&self.board, last.pos, self.rule)
    }

    fn stone_counter(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::Black => &mut self.black_stones,
            Player::White => &mut self.white_stones,
        }
    }

    #[inline]
    fn debug_check_invariants(&self) {
        debug_assert_eq!(self.history.len(), self.move_count as usize);
        debug_assert_eq!(self.black_stones + self.white_stones, self.move_count);
        debug_assert!(
            self.black_stones == self.white_stones || self.black_stones == self.white_stones + 1
        );
        debug_assert_eq!(self.board.stone_count(), self.move_count);
    }
}
