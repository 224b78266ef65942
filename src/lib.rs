//! Gomoku (five-in-a-row) rules engine
//!
//! A two-player hotseat game on a fixed 15x15 board:
//! - Black moves first, turns strictly alternate
//! - Exactly five in a row wins by default; overlines do not
//!   ([`RuleSet::Freestyle`] lets five or more win)
//! - A full board without a winner is a draw
//! - Any number of moves can be taken back, one ply at a time
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection through the last placed stone
//! - [`engine`]: [`GameEngine`] state machine (moves, undo, reset, queries)
//! - [`error`]: [`GameError`] for malformed input
//! - [`config`]: Command-line configuration for the GUI
//! - `ui`: egui front end (feature `gui`, on by default)
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameEngine, Player};
//!
//! let mut game = GameEngine::new();
//!
//! // Black builds a row while White plays elsewhere
//! for col in 3..8 {
//!     game.make_move(7, col).unwrap();
//!     if !game.is_game_over() {
//!         game.make_move(0, col * 2).unwrap();
//!     }
//! }
//!
//! assert_eq!(game.winner(), Some(Player::Black));
//!
//! // Taking back the winning stone reopens the game
//! assert!(game.undo());
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
#[cfg(feature = "gui")]
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, BOARD_SIZE, WIN_LENGTH};
pub use engine::{GameEngine, GameState, GameStats, GameStatus, MoveRecord};
pub use error::{GameError, Result};
pub use rules::RuleSet;
