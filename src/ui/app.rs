//! Main application for the Gomoku GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardFrame, BoardView};
use super::game_state::GameSession;
use super::theme::*;
use crate::config::Settings;
use crate::{GameStatus, Player, RuleSet};

/// Main Gomoku application
pub struct GomokuApp {
    session: GameSession,
    board_view: BoardView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        Self {
            session: GameSession::new(settings),
            board_view: BoardView::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let idle = self.session.accepts_input();
                    if ui.add_enabled(idle, egui::Button::new("New Game (N)")).clicked() {
                        self.session.request_restart();
                        ui.close_menu();
                    }
                    ui.separator();
                    let can_undo = idle && self.session.engine.can_undo();
                    if ui.add_enabled(can_undo, egui::Button::new("Undo (U)")).clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let rule = match self.session.engine.rule() {
                        RuleSet::Standard => "Standard - exactly five",
                        RuleSet::Freestyle => "Freestyle - five or more",
                    };
                    ui.label(rule);
                });
            });
        });
    }

    /// Render the side panel with turn, statistics and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_stats_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.session.engine.is_game_over() {
                    ui.add_space(10.0);
                    self.render_result_card(ui);
                }

                if let Some(toast) = &self.session.toast {
                    ui.add_space(10.0);
                    Self::render_toast(ui, &toast.text);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Whose turn it is, or that the game has ended
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.session.engine.current_player();
            let (stone_char, accent, glyph) = match player {
                Player::Black => ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
                Player::White => ("○", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    glyph,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    let (status, color) = if self.session.engine.is_game_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", STATUS_PLAYING)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            let elapsed = self.session.move_timer.elapsed();
            if !self.session.engine.is_game_over() {
                ui.add_space(6.0);
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(14.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Move count and stones per side
    fn render_stats_card(&self, ui: &mut egui::Ui) {
        let stats = self.session.engine.game_stats();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            for (label, value) in [
                ("Moves", stats.move_count),
                ("● Black stones", stats.black_stones),
                ("○ White stones", stats.white_stones),
            ] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(12.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(value.to_string()).size(14.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let idle = self.session.accepts_input();
            ui.horizontal(|ui| {
                let can_undo = idle && self.session.engine.can_undo();
                let undo_label = if can_undo { "↩ Undo" } else { "↩ Undo (unavailable)" };
                let undo = egui::Button::new(RichText::new(undo_label).size(12.0).color(TEXT_PRIMARY)).fill(BUTTON_BG);
                if ui.add_enabled(can_undo, undo).clicked() {
                    self.session.undo();
                }

                ui.add_space(4.0);

                let restart = egui::Button::new(RichText::new("⟳ Restart").size(12.0).color(TEXT_PRIMARY)).fill(BUTTON_BG);
                if ui.add_enabled(idle, restart).clicked() {
                    self.session.request_restart();
                }
            });
        });
    }

    /// Winner or draw
    fn render_result_card(&mut self, ui: &mut egui::Ui) {
        let (headline, detail, color) = match self.session.engine.status() {
            GameStatus::Won(player) => (format!("{} WINS!", player.name().to_uppercase()), "five in a row", WIN_HIGHLIGHT),
            GameStatus::Draw => ("DRAW".to_string(), "the board is full", STATUS_DRAW),
            GameStatus::InProgress => return,
        };

        Frame::new()
            .fill(RESULT_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(color));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);
                    let new_game = egui::Button::new(RichText::new("New Game").size(14.0).strong());
                    if ui.add_enabled(self.session.accepts_input(), new_game).clicked() {
                        self.session.request_restart();
                    }
                });
            });
    }

    fn render_toast(ui: &mut egui::Ui, text: &str) {
        Frame::new()
            .fill(TOAST_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(text).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Modal-style confirmation before throwing away a game in progress
    fn render_restart_dialog(&mut self, ctx: &Context) {
        if !self.session.restart_pending {
            return;
        }
        egui::Window::new("Restart game?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("The current game will be lost.");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Restart").clicked() {
                        self.session.confirm_restart();
                    }
                    if ui.button("Cancel").clicked() {
                        self.session.cancel_restart();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let engine = &self.session.engine;
                let winning_line = engine.winning_line().map(|run| run.positions()).unwrap_or_default();
                let frame = BoardFrame {
                    board: engine.board(),
                    current_player: engine.current_player(),
                    last_move: engine.last_move().map(|m| m.pos),
                    winning_line: &winning_line,
                    game_over: engine.is_game_over(),
                };

                let clicked = self.board_view.show(ui, &frame);
                if let Some(pos) = clicked {
                    self.session.try_place_stone(pos);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if !self.session.accepts_input() {
            return;
        }
        let (undo, restart) = ctx.input(|i| (i.key_pressed(egui::Key::U), i.key_pressed(egui::Key::N)));
        if undo {
            self.session.undo();
        }
        if restart {
            self.session.request_restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.session.expire_toast(Instant::now());

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_restart_dialog(ctx);

        // Keep the move timer and toast expiry ticking
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
