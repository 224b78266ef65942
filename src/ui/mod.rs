//! GUI module for the Gomoku game
//!
//! A native hotseat front end using egui/eframe. It only talks to the engine
//! through [`GameEngine`](crate::GameEngine)'s public calls.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameSession, MoveTimer, Toast, TOAST_DURATION};
