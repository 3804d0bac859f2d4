//! Oral report page: score card, dialog detail cards and word collection.

use egui::{RichText, Ui};

use crate::content;
use crate::practice::collection::WordCollection;
use crate::practice::payload::PayloadKind;
use crate::practice::selection::SelectionState;
use crate::services::dialog_api::{self, DialogPair};
use crate::services::grammar;
use crate::ui::app::Page;
use crate::ui::theme;
use crate::ui::widgets::{card_frame, centered_placeholder, selectable_copy, selection_chip, window_header};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportTab {
    Score,
    Detail,
}

pub struct OralReportState {
    tab: ReportTab,
    dialogs: Result<Vec<DialogPair>, String>,
    collection: WordCollection,
    word_selection: SelectionState,
}

fn load_dialogs() -> Result<Vec<DialogPair>, String> {
    dialog_api::fetch_dialog_pairs().map_err(|err| err.to_string())
}

impl OralReportState {
    pub fn new() -> Self {
        Self {
            tab: ReportTab::Score,
            dialogs: load_dialogs(),
            collection: WordCollection::new(),
            word_selection: SelectionState::new(),
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) -> Option<Page> {
        let mut nav = None;
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("智能对话 · 语言学习").color(theme::ACCENT).small());
            ui.label(RichText::new("口语报告").strong().size(26.0));
            if ui.link("← 返回对话").clicked() {
                nav = Some(Page::Chat);
            }
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.tab == ReportTab::Score, "对话成绩")
                .clicked()
            {
                self.tab = ReportTab::Score;
            }
            if ui
                .selectable_label(self.tab == ReportTab::Detail, "对话详情")
                .clicked()
            {
                self.tab = ReportTab::Detail;
            }
        });
        ui.separator();

        match self.tab {
            ReportTab::Score => self.score_tab(ui),
            ReportTab::Detail => self.detail_tab(ui),
        }
        nav
    }

    fn score_tab(&mut self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .id_source("report_score_scroll")
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("对话结束，以下是你本次的对话报告")
                            .small()
                            .color(theme::MUTED_TEXT),
                    );
                    ui.label(RichText::new("对话报告").strong().size(20.0));
                });
                ui.add_space(6.0);

                ui.columns(3, |columns| {
                    let stats = [
                        (content::REPORT_DURATION.to_string(), "对话时间"),
                        (content::REPORT_TURNS.to_string(), "开口次数"),
                        (content::REPORT_WORDS_USED.to_string(), "使用单词"),
                    ];
                    for (column, (value, label)) in columns.iter_mut().zip(stats) {
                        card_frame().show(column, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(value).strong().size(20.0));
                                ui.label(RichText::new(label).small().color(theme::MUTED_TEXT));
                            });
                        });
                    }
                });
                ui.add_space(8.0);

                card_frame().show(ui, |ui| {
                    ui.label(RichText::new("✓ 用词分布").strong());
                    for ((label, pct), color) in content::WORD_DISTRIBUTION
                        .iter()
                        .zip(theme::DISTRIBUTION_COLORS)
                    {
                        ui.add(
                            egui::ProgressBar::new(*pct as f32 / 100.0)
                                .fill(color)
                                .text(format!("{label} {pct}%")),
                        );
                    }
                });
                ui.add_space(8.0);

                card_frame().show(ui, |ui| {
                    ui.label(RichText::new("📊 对话评价").strong());
                    for ((score, out_of), label) in [
                        (content::FLUENCY_SCORE, "对话流畅度"),
                        (content::PROFICIENCY_SCORE, "对话熟练度"),
                    ] {
                        ui.label(
                            RichText::new(format!("{label} {score}/{out_of}分"))
                                .small()
                                .color(theme::MUTED_TEXT),
                        );
                        ui.add(
                            egui::ProgressBar::new(score as f32 / out_of as f32)
                                .fill(theme::ACCENT),
                        );
                    }
                });
                ui.add_space(8.0);

                card_frame().show(ui, |ui| {
                    ui.label(RichText::new("流畅度评语").strong());
                    ui.label(RichText::new(content::FLUENCY_COMMENT).color(theme::BODY_TEXT));
                    ui.add_space(4.0);
                    ui.label(RichText::new("熟练度评语").strong());
                    ui.label(RichText::new(content::PROFICIENCY_COMMENT).color(theme::BODY_TEXT));
                });
                ui.add_space(8.0);

                ui.vertical_centered(|ui| {
                    if ui.button("查看对话详情 →").clicked() {
                        self.tab = ReportTab::Detail;
                    }
                });
            });
    }

    fn detail_tab(&mut self, ui: &mut Ui) {
        egui::SidePanel::right("word_collection")
            .resizable(false)
            .exact_width(220.0)
            .show_inside(ui, |ui| self.collection_panel(ui));

        egui::CentralPanel::default().show_inside(ui, |ui| {
            window_header(ui, "SmartPaper AI 口语对话");
            egui::Frame::none()
                .fill(theme::CONFIRM_BG)
                .inner_margin(6.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("✓ 对话已完成！你可以查看对话报告了")
                                .color(theme::CONFIRM_TEXT),
                        );
                    });
                });

            let mut retry = false;
            let mut refresh = None;
            egui::ScrollArea::vertical()
                .id_source("report_detail_scroll")
                .show(ui, |ui| match &self.dialogs {
                    Err(message) => {
                        egui::Frame::none()
                            .fill(egui::Color32::from_rgb(254, 242, 242))
                            .rounding(6.0)
                            .inner_margin(8.0)
                            .show(ui, |ui| {
                                ui.vertical_centered(|ui| {
                                    ui.label(RichText::new(message).color(theme::DANGER));
                                    if ui.button("重试").clicked() {
                                        retry = true;
                                    }
                                });
                            });
                    }
                    Ok(pairs) => {
                        for pair in pairs {
                            if let Some(id) = dialog_card(ui, pair, &mut self.word_selection) {
                                refresh = Some(id);
                            }
                            ui.add_space(8.0);
                        }
                    }
                });

            if retry {
                self.dialogs = load_dialogs();
            }
            if let Some(id) = refresh {
                self.refresh_corrections(id);
            }
        });
    }

    fn refresh_corrections(&mut self, dialog_id: u32) {
        let correction = match dialog_api::fetch_grammar_corrections(dialog_id) {
            Ok(correction) => correction,
            Err(err) => {
                log::error!("failed to fetch grammar corrections: {err}");
                return;
            }
        };
        if let Ok(pairs) = &mut self.dialogs {
            if let Some(user) = pairs
                .iter_mut()
                .find(|pair| pair.id == dialog_id)
                .and_then(|pair| pair.user.as_mut())
            {
                if !correction.grammar.is_empty() {
                    user.grammar = correction.grammar;
                }
                user.grammar_note = correction.grammar_note;
                if !correction.ai_polish.is_empty() {
                    user.ai_polish = correction.ai_polish;
                }
            }
        }
    }

    fn collection_panel(&mut self, ui: &mut Ui) {
        window_header(ui, "单词收集");
        ui.add_space(4.0);
        selection_chip(ui, &self.word_selection);

        let (_, dropped) = crate::ui::dnd::drop_target(ui, &[PayloadKind::SelectedText], |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(120.0);
            if self.collection.is_empty() {
                ui.label(
                    RichText::new("从左侧对话中选择单词并拖到此处收集")
                        .small()
                        .italics()
                        .color(theme::MUTED_TEXT),
                );
            } else {
                ui.label(
                    RichText::new("拖拽单词到此处收集")
                        .small()
                        .color(theme::MUTED_TEXT),
                );
                let mut remove = None;
                for word in self.collection.words() {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(word).color(theme::BODY_TEXT));
                        if ui.small_button("✕").clicked() {
                            remove = Some(word.clone());
                        }
                    });
                }
                if let Some(word) = remove {
                    self.collection.remove(&word);
                }
            }
        });
        if let Some(payload) = dropped {
            if grammar::is_collectable_word(&payload.text) && self.collection.add(&payload.text) {
                self.word_selection.clear();
            }
        }
    }
}

/// One AI question / user answer card. Returns the dialog id when the
/// refresh action was clicked.
fn dialog_card(ui: &mut Ui, pair: &DialogPair, word_selection: &mut SelectionState) -> Option<u32> {
    let mut refresh = None;
    card_frame().show(ui, |ui| {
        ui.label(
            RichText::new(format!("对话 #{}", pair.id))
                .small()
                .color(theme::MUTED_TEXT),
        );
        ui.separator();

        ui.label(RichText::new(&pair.ai.name).strong());
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(&pair.ai.text).color(theme::BODY_TEXT));
            let _ = ui.small_button("🔊");
        });
        ui.add_space(4.0);

        match &pair.user {
            Some(user) => {
                ui.label(RichText::new(&user.name).strong());
                let (_, selected) =
                    selectable_copy(ui, &format!("dialog_user_{}", pair.id), &user.text);
                if let Some(selected) = selected {
                    if grammar::is_collectable_word(&selected) {
                        word_selection.capture(&selected);
                    }
                }

                egui::Frame::none()
                    .fill(theme::WARN_BG)
                    .rounding(6.0)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("🔍 语法检错")
                                .small()
                                .strong()
                                .color(theme::WARN_TEXT),
                        );
                        if !user.grammar.is_empty() {
                            ui.label(RichText::new(&user.grammar).color(theme::BODY_TEXT));
                        }
                        ui.label(
                            RichText::new(&user.grammar_note)
                                .small()
                                .color(theme::MUTED_TEXT),
                        );
                    });
                egui::Frame::none()
                    .fill(theme::INFO_BG)
                    .rounding(6.0)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("✨ AI润色")
                                .small()
                                .strong()
                                .color(theme::INFO_TEXT),
                        );
                        ui.label(RichText::new(&user.ai_polish).color(theme::BODY_TEXT));
                    });
                if ui.small_button("刷新语法检错").clicked() {
                    refresh = Some(pair.id);
                }
            }
            None => centered_placeholder(ui, "等待回复..."),
        }
    });
    refresh
}
