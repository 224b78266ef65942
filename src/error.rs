//! Engine error types.

use derive_more::{Display, Error};

/// Malformed input to the engine.
///
/// Illegal but well-formed moves (occupied cell, game already over) are not
/// errors; they come back as `Ok(false)` from
/// [`GameEngine::make_move`](crate::GameEngine::make_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Row or column outside `0..BOARD_SIZE`.
    #[display("coordinates ({row}, {col}) are off the board; row and col must be between 0 and 14")]
    InvalidArgument {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_coordinates() {
        let err = GameError::InvalidArgument { row: -1, col: 15 };
        let text = err.to_string();
        assert!(text.contains("(-1, 15)"));
        assert!(text.contains("between 0 and 14"));
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&GameError::InvalidArgument { row: 0, col: 99 });
    }
}
