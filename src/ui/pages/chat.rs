//! Spoken-dialogue practice page.

use std::collections::HashSet;
use std::time::Instant;

use egui::{RichText, Ui};

use crate::config::TimingConfig;
use crate::content;
use crate::practice::chat::{ChatSession, Sender};
use crate::services::{dialog_api, grammar};
use crate::ui::app::Page;
use crate::ui::theme;
use crate::ui::widgets::window_header;

pub struct ChatPageState {
    session: ChatSession,
    input: String,
    search: String,
    active_history: Option<usize>,
    show_scene_selector: bool,
    /// Message ids whose grammar review is currently unfolded.
    expanded_reviews: HashSet<usize>,
}

impl ChatPageState {
    pub fn new(timing: &TimingConfig) -> Self {
        let opening = content::CHAT_OPENING
            .iter()
            .map(|(is_user, text)| {
                if *is_user {
                    (Sender::User, text.to_string(), Some(grammar::review(text)))
                } else {
                    (Sender::Ai, text.to_string(), None)
                }
            })
            .collect();
        Self {
            session: ChatSession::new(
                opening,
                &content::CHAT_SCRIPT,
                content::CHAT_FALLBACK_REPLY,
                content::MAX_CHAT_ROUNDS,
                timing.reply_delay(),
            ),
            input: String::new(),
            search: String::new(),
            active_history: None,
            show_scene_selector: false,
            expanded_reviews: HashSet::new(),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.session.next_due()
    }

    pub fn ui(&mut self, ui: &mut Ui, now: Instant) -> Option<Page> {
        let mut nav = None;

        egui::SidePanel::left("chat_sidebar")
            .resizable(false)
            .exact_width(240.0)
            .show_inside(ui, |ui| self.sidebar(ui));

        egui::CentralPanel::default().show_inside(ui, |ui| {
            window_header(ui, "Simon AI 口语对话");

            if self.session.is_completed() {
                egui::Frame::none()
                    .fill(theme::CONFIRM_BG)
                    .rounding(6.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("恭喜！您已完成本次对话练习")
                                    .strong()
                                    .color(theme::CONFIRM_TEXT),
                            );
                            ui.label(
                                RichText::new("现在您可以生成口语报告，查看您的对话表现和语法分析。")
                                    .small()
                                    .color(theme::BODY_TEXT),
                            );
                            if ui.button("生成口语报告 →").clicked() {
                                nav = Some(Page::OralReport);
                            }
                        });
                    });
            }

            let transcript_height = (ui.available_height() - 80.0).max(120.0);
            egui::ScrollArea::vertical()
                .id_source("chat_scroll")
                .stick_to_bottom(true)
                .max_height(transcript_height)
                .show(ui, |ui| self.transcript(ui));
            ui.separator();
            self.input_row(ui, now);
        });

        self.scene_selector(ui);
        nav
    }

    fn sidebar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Kimi").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let _ = ui.small_button("⚙");
            });
        });
        ui.separator();
        if ui.button("＋ 新建聊天").clicked() {
            self.show_scene_selector = true;
        }
        ui.add(egui::TextEdit::singleline(&mut self.search).hint_text("搜索..."));
        ui.add_space(4.0);
        ui.label(RichText::new("历史对话").small().color(theme::MUTED_TEXT));
        egui::ScrollArea::vertical()
            .id_source("chat_history")
            .show(ui, |ui| {
                let filter = self.search.trim().to_string();
                for (index, (title, date, preview)) in content::CHAT_HISTORY.iter().enumerate() {
                    if !filter.is_empty() && !title.contains(&filter) && !preview.contains(&filter)
                    {
                        continue;
                    }
                    let selected = self.active_history == Some(index);
                    let label = format!("{title}\n{preview}\n{date}");
                    if ui.selectable_label(selected, label).clicked() {
                        self.active_history = Some(index);
                    }
                }
            });
    }

    fn transcript(&mut self, ui: &mut Ui) {
        let mut toggle = None;
        for message in self.session.messages() {
            let name = match message.sender {
                Sender::Ai => content::AI_TUTOR_NAME,
                Sender::User => content::USER_NAME,
            };
            ui.label(RichText::new(name).strong());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(&message.text).color(theme::BODY_TEXT));
                if message.sender == Sender::Ai {
                    let _ = ui.small_button("🔊");
                }
            });
            if message.sender == Sender::User {
                if ui
                    .link(RichText::new("🔍 语法检错").small().color(theme::WARN_TEXT))
                    .clicked()
                {
                    toggle = Some(message.id);
                }
                if self.expanded_reviews.contains(&message.id) {
                    if let Some(review) = &message.review {
                        egui::Frame::none()
                            .fill(theme::WARN_BG)
                            .rounding(6.0)
                            .inner_margin(6.0)
                            .show(ui, |ui| {
                                ui.label(RichText::new(&review.corrected).color(theme::BODY_TEXT));
                                ui.label(
                                    RichText::new(format!("- 提示：{}", review.note))
                                        .small()
                                        .color(theme::MUTED_TEXT),
                                );
                                ui.label(
                                    RichText::new("🔮 AI润色")
                                        .small()
                                        .strong()
                                        .color(theme::INFO_TEXT),
                                );
                                ui.label(RichText::new(&review.polish).color(theme::BODY_TEXT));
                            });
                    }
                }
            }
            ui.add_space(10.0);
        }
        if let Some(id) = toggle {
            if !self.expanded_reviews.remove(&id) {
                self.expanded_reviews.insert(id);
            }
        }
    }

    fn input_row(&mut self, ui: &mut Ui, now: Instant) {
        let enabled = !self.session.is_completed() && !self.session.is_sending();
        let mut send_now = false;
        ui.horizontal(|ui| {
            let response = ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut self.input)
                    .hint_text("准备好提问了吗？我随时可以开始聊天！")
                    .desired_width((ui.available_width() - 110.0).max(120.0)),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                send_now = true;
            }
            if self.session.is_sending() {
                ui.spinner();
                ui.label(RichText::new("发送中...").small().color(theme::MUTED_TEXT));
            } else if ui
                .add_enabled(enabled && !self.input.trim().is_empty(), egui::Button::new("发送"))
                .clicked()
            {
                send_now = true;
            }
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!(
                    "对话进度: {}/{} 轮",
                    self.session.rounds(),
                    self.session.max_rounds()
                ))
                .small()
                .color(theme::MUTED_TEXT),
            );
        });
        if send_now {
            self.send(now);
        }
    }

    fn send(&mut self, now: Instant) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return;
        }
        let review = match dialog_api::send_user_reply(&text) {
            Ok(outcome) => outcome.review,
            Err(err) => {
                log::error!("reply service failed: {err}");
                grammar::review(&text)
            }
        };
        if self.session.send(&text, review, now) {
            self.input.clear();
        }
    }

    fn scene_selector(&mut self, ui: &mut Ui) {
        if !self.show_scene_selector {
            return;
        }
        egui::Window::new("选择场景")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ui.ctx(), |ui| {
                ui.label(RichText::new("请选择您想要进行的对话场景").color(theme::MUTED_TEXT));
                ui.add_space(6.0);
                ui.columns(2, |columns| {
                    for (index, (id, title)) in content::SCENES.iter().enumerate() {
                        if columns[index % 2].button(*title).clicked() {
                            log::info!("scene selected: {id}");
                            self.session.start_scene(content::CHAT_GREETING);
                            self.expanded_reviews.clear();
                            self.input.clear();
                            self.show_scene_selector = false;
                        }
                    }
                });
                ui.add_space(6.0);
                if ui.button("取消").clicked() {
                    self.show_scene_selector = false;
                }
            });
    }
}
