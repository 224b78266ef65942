//! Session state for the Gomoku GUI
//!
//! Wraps the [`GameEngine`] with what only the window cares about: a per-move
//! timer, short-lived toast messages and the restart confirmation.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::Settings;
use crate::{GameEngine, Pos};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Transient status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub shown_at: Instant,
}

impl Toast {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }
}

/// Move timer for tracking thinking time
#[derive(Debug, Clone)]
pub struct MoveTimer {
    pub start_time: Option<Instant>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Everything the window keeps between frames
pub struct GameSession {
    pub engine: GameEngine,
    pub move_timer: MoveTimer,
    pub toast: Option<Toast>,
    /// Restart dialog is open
    pub restart_pending: bool,
    settings: Settings,
}

impl GameSession {
    pub fn new(settings: Settings) -> Self {
        Self {
            engine: GameEngine::with_rule(settings.rule),
            move_timer: MoveTimer::default(),
            toast: None,
            restart_pending: false,
            settings,
        }
    }

    fn notify(&mut self, text: impl Into<String>) {
        let toast = Toast::new(text);
        debug!(text = %toast.text, "toast");
        self.toast = Some(toast);
    }

    /// Board and action input is frozen while the restart question is open
    pub fn accepts_input(&self) -> bool {
        !self.restart_pending
    }

    /// Handle a click on a board point
    pub fn try_place_stone(&mut self, pos: Pos) {
        if !self.accepts_input() {
            return;
        }
        if self.engine.is_game_over() {
            self.notify("Game over - start a new game");
            return;
        }

        match self.engine.play(pos) {
            Ok(true) => {
                let spent = self.move_timer.stop();
                debug!(%pos, ?spent, "move played");
                if !self.engine.is_game_over() {
                    self.move_timer.start();
                }
                self.toast = None;
            }
            Ok(false) => self.notify("That point is already taken"),
            Err(err) => self.notify(err.to_string()),
        }
    }

    /// Take back one move
    pub fn undo(&mut self) {
        if !self.accepts_input() {
            return;
        }
        if self.engine.undo() {
            self.move_timer.start();
            self.notify("Move undone");
        } else {
            self.notify("Nothing to undo");
        }
    }

    /// Restart, asking first when moves have been made and confirmation is on
    pub fn request_restart(&mut self) {
        if !self.accepts_input() {
            return;
        }
        if self.settings.confirm_restart && self.engine.move_count() > 0 {
            self.restart_pending = true;
        } else {
            self.restart();
        }
    }

    pub fn confirm_restart(&mut self) {
        if self.restart_pending {
            self.restart();
        }
    }

    pub fn cancel_restart(&mut self) {
        self.restart_pending = false;
    }

    fn restart(&mut self) {
        let had_moves = self.engine.move_count() > 0;
        self.engine.reset();
        self.move_timer = MoveTimer::default();
        self.restart_pending = false;
        if had_moves {
            self.notify("Game restarted");
        } else {
            self.toast = None;
        }
    }

    /// Drop the toast once its time is up
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, RuleSet};

    fn toast_text(session: &GameSession) -> Option<&str> {
        session.toast.as_ref().map(|t| t.text.as_str())
    }

    #[test]
    fn test_session_uses_configured_rule() {
        let session = GameSession::new(Settings {
            rule: RuleSet::Freestyle,
            confirm_restart: true,
        });
        assert_eq!(session.engine.rule(), RuleSet::Freestyle);
    }

    #[test]
    fn test_occupied_point_shows_toast() {
        let mut session = GameSession::default();
        session.try_place_stone(Pos::new(7, 7));
        assert_eq!(toast_text(&session), None);
        session.try_place_stone(Pos::new(7, 7));
        assert_eq!(toast_text(&session), Some("That point is already taken"));
        assert_eq!(session.engine.move_count(), 1);
    }

    #[test]
    fn test_click_after_game_over() {
        let mut session = GameSession::default();
        for col in 0..5 {
            session.try_place_stone(Pos::new(7, col));
            session.try_place_stone(Pos::new(0, col * 2 + 1));
        }
        assert_eq!(session.engine.winner(), Some(Player::Black));
        session.try_place_stone(Pos::new(10, 10));
        assert_eq!(toast_text(&session), Some("Game over - start a new game"));
    }

    #[test]
    fn test_timer_stops_when_game_ends() {
        let mut session = GameSession::default();
        session.try_place_stone(Pos::new(7, 0));
        assert!(session.move_timer.start_time.is_some());

        for col in 1..5 {
            session.try_place_stone(Pos::new(0, col * 2));
            session.try_place_stone(Pos::new(7, col));
        }
        assert!(session.engine.is_game_over());
        assert!(session.move_timer.start_time.is_none());
        assert_eq!(session.move_timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_off_board_point_shows_error() {
        let mut session = GameSession::default();
        session.try_place_stone(Pos { row: 15, col: 0 });
        assert!(toast_text(&session).is_some_and(|t| t.contains("off the board")));
        assert_eq!(session.engine.move_count(), 0);
        assert_eq!(session.engine.board().stone_count(), 0);
    }

    #[test]
    fn test_undo_messages() {
        let mut session = GameSession::default();
        session.undo();
        assert_eq!(toast_text(&session), Some("Nothing to undo"));

        session.try_place_stone(Pos::new(1, 1));
        session.undo();
        assert_eq!(toast_text(&session), Some("Move undone"));
        assert_eq!(session.engine.move_count(), 0);
    }

    #[test]
    fn test_restart_needs_confirmation_mid_game() {
        let mut session = GameSession::default();
        session.try_place_stone(Pos::new(3, 3));

        session.request_restart();
        assert!(session.restart_pending);
        assert_eq!(session.engine.move_count(), 1);

        session.cancel_restart();
        assert!(!session.restart_pending);
        assert_eq!(session.engine.move_count(), 1);

        session.request_restart();
        session.confirm_restart();
        assert!(!session.restart_pending);
        assert_eq!(session.engine.move_count(), 0);
        assert_eq!(toast_text(&session), Some("Game restarted"));
    }

    #[test]
    fn test_pending_restart_blocks_actions() {
        let mut session = GameSession::default();
        session.try_place_stone(Pos::new(7, 7));
        session.try_place_stone(Pos::new(8, 8));
        session.request_restart();
        assert!(!session.accepts_input());

        session.undo();
        session.try_place_stone(Pos::new(9, 9));
        session.request_restart();
        assert_eq!(session.engine.move_count(), 2);
        assert!(session.restart_pending);

        session.cancel_restart();
        assert!(session.accepts_input());
        session.undo();
        assert_eq!(session.engine.move_count(), 1);
        assert_eq!(toast_text(&session), Some("Move undone"));
    }

    #[test]
    fn test_restart_without_moves_is_immediate() {
        let mut session = GameSession::default();
        session.request_restart();
        assert!(!session.restart_pending);
        assert_eq!(toast_text(&session), None);
    }

    #[test]
    fn test_restart_without_confirmation_setting() {
        let mut session = GameSession::new(Settings {
            rule: RuleSet::Standard,
            confirm_restart: false,
        });
        session.try_place_stone(Pos::new(3, 3));
        session.request_restart();
        assert!(!session.restart_pending);
        assert_eq!(session.engine.move_count(), 0);
    }

    #[test]
    fn test_confirm_without_request_does_nothing() {
        let mut session = GameSession::default();
        session.try_place_stone(Pos::new(3, 3));
        session.confirm_restart();
        assert_eq!(session.engine.move_count(), 1);
    }

    #[test]
    fn test_toast_expires() {
        let mut session = GameSession::default();
        session.undo();
        let shown_at = session.toast.as_ref().unwrap().shown_at;

        session.expire_toast(shown_at + Duration::from_secs(1));
        assert!(session.toast.is_some());
        session.expire_toast(shown_at + TOAST_DURATION);
        assert!(session.toast.is_none());
    }
}
