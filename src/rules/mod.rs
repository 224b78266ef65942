//! Game rules for five-in-a-row
//!
//! Only the win condition lives here. Move legality (bounds, occupancy,
//! game over) is enforced by [`crate::engine::GameEngine`].

pub mod win;

// Re-exports for convenient access
pub use win::{find_win, has_five_at_pos, scan_line, Direction, LineRun, RuleSet};
