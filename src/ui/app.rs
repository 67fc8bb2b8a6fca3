//! Main application for the Connect-Four GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::config::{AgentKind, AppConfig};
use crate::game::StatSummary;
use crate::{Outcome, Player};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Search depths offered by the depth slider
const DEPTH_RANGE: std::ops::RangeInclusive<u32> = 1..=12;

/// Main Connect-Four application
pub struct ConnectFourApp {
    state: GameState,
    board_view: BoardView,
    show_stats: bool,
}

impl Default for ConnectFourApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl ConnectFourApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: AppConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_stats: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Play (P)").clicked() {
                        self.state.play();
                        ui.close_menu();
                    }
                    if ui.button("Reset (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_stats, "Statistics (S)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let describe = |player| match self.state.config.player(player).agent {
                        AgentKind::Human => "Human".to_string(),
                        AgentKind::Minimax => {
                            format!("Minimax d{}", self.state.config.player(player).depth)
                        }
                    };
                    ui.label(format!(
                        "{} vs {}",
                        describe(Player::First),
                        describe(Player::Second)
                    ));
                });
            });
        });
    }

    /// Render the side panel with players, actions and statistics
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_players_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_stats {
                    ui.add_space(10.0);
                    self.render_stats_card(ui);
                }

                if let Some(outcome) = self.state.game.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●").size(20.0).color(RED_COIN));
            ui.label(RichText::new("●").size(20.0).color(YELLOW_COIN));
            ui.add_space(4.0);
            ui.label(RichText::new("CONNECT FOUR").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.state.game.side_to_move();
            let (fill, border) = coin_colors(player);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.painter()
                    .circle_stroke(rect.center(), 19.0, egui::Stroke::new(3.0, border));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player_name(player)).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.state.game.is_over() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.2}s", elapsed.as_secs_f32()), TIMER_WARNING)
                    } else if !self.state.is_playing {
                        ("Paused, press Play".to_string(), TEXT_SECONDARY)
                    } else if self.state.game.is_human_turn() {
                        (
                            format!("Your turn {:.1}s", self.state.move_timer.elapsed().as_secs_f32()),
                            TIMER_NORMAL,
                        )
                    } else {
                        ("Waiting for AI".to_string(), TIMER_WARNING)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.moves().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Agent selector and depth slider for both players
    fn render_players_card(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PLAYERS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            for player in [Player::First, Player::Second] {
                let settings = self.state.config.player_mut(player);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(16.0).color(coin_colors(player).0));
                    egui::ComboBox::from_id_salt(("agent", player.index()))
                        .selected_text(match settings.agent {
                            AgentKind::Human => "Human",
                            AgentKind::Minimax => "Minimax",
                        })
                        .show_ui(ui, |ui| {
                            changed |= ui
                                .selectable_value(&mut settings.agent, AgentKind::Human, "Human")
                                .changed();
                            changed |= ui
                                .selectable_value(&mut settings.agent, AgentKind::Minimax, "Minimax")
                                .changed();
                        });
                });
                if settings.agent == AgentKind::Minimax {
                    ui.horizontal(|ui| {
                        ui.add_space(20.0);
                        changed |= ui
                            .add(egui::Slider::new(&mut settings.depth, DEPTH_RANGE).text("depth"))
                            .changed();
                    });
                }
                ui.add_space(4.0);
            }
        });

        if changed {
            self.state.apply_config();
        }
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let thinking = self.state.is_ai_thinking();
                if ui
                    .add_enabled(!self.state.is_playing || self.state.game.is_over(), egui::Button::new("▶ Play"))
                    .clicked()
                {
                    self.state.play();
                }
                if ui.button("⟲ Reset").clicked() {
                    self.state.reset();
                }
                if ui
                    .add_enabled(!thinking && !self.state.game.moves().is_empty(), egui::Button::new("↩ Undo"))
                    .clicked()
                {
                    self.state.undo();
                }
            });
        });
    }

    /// Evaluations, time and rate of the engine moves
    fn render_stats_card(&self, ui: &mut egui::Ui) {
        let game = &self.state.game;
        let both_engines = [Player::First, Player::Second]
            .iter()
            .all(|&p| self.state.agent_kind(p) == AgentKind::Minimax);

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATISTICS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let players: &[Option<Player>] = if both_engines {
                &[Some(Player::First), Some(Player::Second)]
            } else {
                &[None]
            };

            egui::Grid::new("stats_grid").striped(true).show(ui, |ui| {
                ui.label("");
                for &player in players {
                    let header = player.map_or("Engine", player_name);
                    ui.label(RichText::new(header).size(11.0).strong().color(TEXT_PRIMARY));
                }
                ui.end_row();

                ui.label(RichText::new("Current evals").size(11.0).color(TEXT_SECONDARY));
                for &player in players {
                    let evals = game.current_stats(player).map_or(0, |s| s.evaluations);
                    ui.label(evals.to_string());
                }
                ui.end_row();

                ui.label(RichText::new("Current time").size(11.0).color(TEXT_SECONDARY));
                for &player in players {
                    let time = game.current_stats(player).map_or(0.0, |s| s.elapsed.as_secs_f64() * 1000.0);
                    ui.label(format!("{:.1} ms", time));
                }
                ui.end_row();

                ui.label(RichText::new("Current rate").size(11.0).color(TEXT_SECONDARY));
                for &player in players {
                    let rate = game.current_stats(player).map_or(0.0, |s| {
                        StatSummary {
                            moves: 1,
                            evaluations: s.evaluations,
                            elapsed: s.elapsed,
                        }
                        .rate()
                    });
                    ui.label(format!("{:.0} /ms", rate));
                }
                ui.end_row();

                ui.label(RichText::new("Total evals").size(11.0).color(TEXT_SECONDARY));
                for &player in players {
                    ui.label(game.total_stats(player).evaluations.to_string());
                }
                ui.end_row();

                ui.label(RichText::new("Total time").size(11.0).color(TEXT_SECONDARY));
                for &player in players {
                    let total = game.total_stats(player).elapsed.as_secs_f64() * 1000.0;
                    ui.label(format!("{:.1} ms", total));
                }
                ui.end_row();

                ui.label(RichText::new("Total rate").size(11.0).color(TEXT_SECONDARY));
                for &player in players {
                    ui.label(format!("{:.0} /ms", game.total_stats(player).rate()));
                }
                ui.end_row();
            });

            if let Some(result) = &self.state.last_ai_result {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!(
                        "Last: column {}, score {} ({:?})",
                        result.column + 1,
                        result.score,
                        result.verdict
                    ))
                    .size(10.0)
                    .color(TEXT_MUTED),
                );
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let (title, accent) = match outcome {
            Outcome::Winner(player) => (format!("{} WINS!", player_name(player)), coin_colors(player).0),
            Outcome::Draw => ("IT'S A TIE".to_string(), TEXT_PRIMARY),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(title).size(20.0).strong().color(accent));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("after {} moves", self.state.game.moves().len()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.reset();
                        self.state.play();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PAGE_BG).inner_margin(16.0))
            .show(ctx, |ui| {
                let winning_cells = self.state.game.winning_cells();
                let clicked = ui
                    .vertical_centered(|ui| {
                        self.board_view.show(
                            ui,
                            self.state.game.board(),
                            self.state.game.last_move(),
                            &winning_cells,
                            self.state.accepts_clicks(),
                        )
                    })
                    .inner;

                if let Some(column) = clicked {
                    if let Err(msg) = self.state.try_play_column(column) {
                        self.state.message = Some(msg);
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // S - Toggle statistics
            if i.key_pressed(egui::Key::S) {
                self.show_stats = !self.show_stats;
            }

            // P - Play
            if i.key_pressed(egui::Key::P) && !self.state.is_playing {
                self.state.play();
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }

            // 1-7 - Drop a coin
            let digits = [
                egui::Key::Num1,
                egui::Key::Num2,
                egui::Key::Num3,
                egui::Key::Num4,
                egui::Key::Num5,
                egui::Key::Num6,
                egui::Key::Num7,
            ];
            for (column, key) in digits.into_iter().enumerate() {
                if i.key_pressed(key) && self.state.accepts_clicks() {
                    if let Err(msg) = self.state.try_play_column(column) {
                        self.state.message = Some(msg);
                    }
                }
            }
        });
    }
}

impl eframe::App for ConnectFourApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Check AI result
        self.state.check_ai_result();

        // Start AI thinking if needed
        if self.state.needs_ai_move() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the thinking and move timers moving
        if self.state.is_ai_thinking() || self.state.is_playing {
            ctx.request_repaint();
        }
    }
}
