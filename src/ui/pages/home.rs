//! Home page: essay optimization, reading comprehension and the
//! accumulation library, switched by in-page tab state.

use std::time::Instant;

use egui::{RichText, Ui};

use crate::config::TimingConfig;
use crate::content;
use crate::practice::essay::EssayReview;
use crate::practice::highlight::{split_marked, Fragment};
use crate::practice::payload::{DragPayload, PayloadKind};
use crate::practice::selection::SelectionState;
use crate::practice::slots::{ConfirmSlots, LookupSlots};
use crate::ui::widgets::{card_frame, centered_placeholder, selectable_copy, selection_chip, window_header};
use crate::ui::{dnd, theme};

const ESSAY_SLOT_COUNT: usize = 3;
const READING_SLOT_COUNT: usize = 2;
const SLOT_COLUMN_WIDTH: f32 = 260.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeView {
    Essay,
    Reading,
    Accumulation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccumulationTab {
    Words,
    Sentences,
}

pub struct HomeState {
    view: HomeView,
    accumulation_tab: AccumulationTab,
    essay: EssayReview,
    essay_slots: ConfirmSlots,
    reading_slots: LookupSlots,
    selection: SelectionState,
    url_input: String,
    show_recommended: bool,
    /// Regions that keep the free-text selection alive when the pointer is
    /// released inside them. Rebuilt every frame.
    retained: Vec<egui::Rect>,
}

impl HomeState {
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            view: HomeView::Essay,
            accumulation_tab: AccumulationTab::Words,
            essay: EssayReview::new(timing.optimize_delay()),
            essay_slots: ConfirmSlots::new(
                ESSAY_SLOT_COUNT,
                vec![PayloadKind::Phrase, PayloadKind::SelectedText],
                timing.confirm_delay(),
            ),
            reading_slots: LookupSlots::new(
                READING_SLOT_COUNT,
                vec![PayloadKind::HighlightedSentence, PayloadKind::SelectedText],
                &content::ANALYZED_SENTENCES,
                timing.lookup_delay(),
            ),
            selection: SelectionState::new(),
            url_input: String::new(),
            show_recommended: false,
            retained: Vec::new(),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.essay.tick(now);
        self.essay_slots.tick(now);
        self.reading_slots.tick(now);
    }

    pub fn next_due(&self) -> Option<Instant> {
        [
            self.essay.next_due(),
            self.essay_slots.next_due(),
            self.reading_slots.next_due(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn ui(&mut self, ui: &mut Ui, now: Instant) {
        self.retained.clear();
        let drag_active = dnd::active_payload(ui.ctx()).is_some();

        egui::ScrollArea::vertical()
            .id_source("home_scroll")
            .show(ui, |ui| {
                match self.view {
                    HomeView::Essay => self.essay_view(ui, now),
                    HomeView::Reading => self.reading_view(ui, now),
                    HomeView::Accumulation => self.accumulation_view(ui),
                }
                ui.add_space(12.0);
                self.view_switcher(ui);
            });

        // Releasing the pointer outside the retained regions clears the
        // selection; a release that ends a drag gesture does not count.
        if !drag_active && ui.input(|i| i.pointer.any_released()) {
            if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
                if !self.retained.iter().any(|rect| rect.contains(pos)) {
                    self.selection.clear();
                }
            }
        }
    }

    fn essay_view(&mut self, ui: &mut Ui, now: Instant) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("智能演示 · 直观体验").color(theme::ACCENT).small());
            ui.label(RichText::new("作文智能优化流程").strong().size(26.0));
            ui.label(RichText::new("三步轻松完成作文的智能分析与优化").color(theme::BODY_TEXT));
        });
        ui.add_space(8.0);

        ui.columns(3, |columns| {
            for (column, (title, description)) in columns.iter_mut().zip(content::FLOW_STEPS) {
                card_frame().show(column, |ui| {
                    ui.label(RichText::new(title).strong());
                    ui.label(RichText::new(description).small().color(theme::MUTED_TEXT));
                });
            }
        });
        ui.add_space(12.0);

        window_header(ui, "作文优化");
        card_frame().show(ui, |ui| {
            ui.label(RichText::new("输入您的作文:").color(theme::MUTED_TEXT));
            ui.add(
                egui::TextEdit::singleline(&mut self.essay.title)
                    .hint_text("作文标题...")
                    .desired_width(f32::INFINITY),
            );
            ui.add(
                egui::TextEdit::multiline(&mut self.essay.draft)
                    .hint_text("在此输入您的作文内容...")
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );
            ui.horizontal(|ui| {
                if ui.small_button("使用示例作文").clicked() {
                    self.essay.title = content::SAMPLE_ESSAY_TITLE.to_string();
                    self.essay.draft = content::SAMPLE_ESSAY.to_string();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.essay.is_processing() {
                        ui.spinner();
                        ui.label(RichText::new("处理中...").color(theme::MUTED_TEXT));
                    } else if ui
                        .add_enabled(self.essay.can_submit(), egui::Button::new("提交优化"))
                        .clicked()
                    {
                        self.essay.submit(now);
                    }
                });
            });
        });
        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            let text_width = (ui.available_width() - SLOT_COLUMN_WIDTH - 16.0).max(240.0);
            ui.vertical(|ui| {
                ui.set_width(text_width);
                self.essay_response(ui);
            });
            ui.vertical(|ui| {
                ui.set_width(SLOT_COLUMN_WIDTH);
                self.slot_column(ui, now);
            });
        });
    }

    fn essay_response(&mut self, ui: &mut Ui) {
        card_frame().show(ui, |ui| {
            if self.essay.is_processing() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("AI优化中...").color(theme::MUTED_TEXT));
                });
            } else if self.essay.is_revealed() {
                phrase_fragments(ui, content::AI_OPTIMIZED_TEXT, &content::DRAGGABLE_PHRASES);
                ui.add_space(6.0);
                ui.collapsing("划词选取", |ui| {
                    let (rect, selected) =
                        selectable_copy(ui, "essay_select", content::AI_OPTIMIZED_TEXT);
                    self.retained.push(rect);
                    if let Some(selected) = selected {
                        self.selection.capture(&selected);
                    }
                });
                if let Some(rect) = selection_chip(ui, &self.selection) {
                    self.retained.push(rect);
                }
            } else {
                centered_placeholder(ui, "提交您的作文后，AI优化结果将显示在此处");
            }
        });
        ui.add_space(8.0);
        card_frame().show(ui, |ui| {
            if self.essay.is_processing() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("评价生成中...").color(theme::MUTED_TEXT));
                });
            } else if self.essay.is_revealed() {
                ui.label(RichText::new(content::EVALUATION_TITLE).strong());
                ui.label(RichText::new(content::EVALUATION_TEXT).color(theme::BODY_TEXT));
            } else {
                centered_placeholder(ui, "提交您的作文后，评价将显示在此处");
            }
        });
    }

    fn reading_view(&mut self, ui: &mut Ui, now: Instant) {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.url_input)
                    .hint_text("输入URL")
                    .desired_width((ui.available_width() - 170.0).max(120.0)),
            );
            if ui.button("根据对话内容推荐").clicked() {
                self.show_recommended = true;
            }
        });
        ui.add_space(8.0);

        window_header(ui, "阅读功能");
        ui.horizontal_top(|ui| {
            let text_width = (ui.available_width() - SLOT_COLUMN_WIDTH - 16.0).max(240.0);
            ui.vertical(|ui| {
                ui.set_width(text_width);
                card_frame().show(ui, |ui| {
                    if self.show_recommended {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(content::READING_TITLE).strong().size(18.0));
                        });
                        ui.add_space(6.0);
                        let active: Vec<String> = self
                            .reading_slots
                            .contents()
                            .iter()
                            .map(|s| s.to_string())
                            .collect();
                        highlight_fragments(
                            ui,
                            content::READING_TEXT,
                            &content::HIGHLIGHTED_SENTENCES,
                            &active,
                        );
                        ui.add_space(6.0);
                        ui.collapsing("划词选取", |ui| {
                            let (rect, selected) =
                                selectable_copy(ui, "reading_select", content::READING_TEXT);
                            self.retained.push(rect);
                            if let Some(selected) = selected {
                                self.selection.capture(&selected);
                            }
                        });
                    } else {
                        centered_placeholder(ui, "点击“根据对话内容推荐”按钮以显示推荐文本");
                    }
                });
                if let Some(rect) = selection_chip(ui, &self.selection) {
                    self.retained.push(rect);
                }
                ui.add_space(8.0);

                for index in 0..self.reading_slots.len() {
                    let accepts = self.reading_slots.accept_kinds().to_vec();
                    let (_, dropped) = dnd::drop_target(ui, &accepts, |ui| {
                        ui.set_width(ui.available_width());
                        ui.set_min_height(34.0);
                        if self.reading_slots.is_loading(index) {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("加载中...").italics().color(theme::MUTED_TEXT));
                            });
                        } else if let Some(analysis) = self.reading_slots.analysis(index) {
                            ui.label(RichText::new(analysis).monospace().color(theme::BODY_TEXT));
                        } else if !self.reading_slots.content(index).is_empty() {
                            ui.label(
                                RichText::new(self.reading_slots.content(index))
                                    .color(theme::BODY_TEXT),
                            );
                        } else {
                            ui.label(
                                RichText::new("拖拽高亮句子到此处")
                                    .italics()
                                    .color(theme::MUTED_TEXT),
                            );
                        }
                    });
                    if let Some(payload) = dropped {
                        if self.reading_slots.drop_payload(index, &payload, now) {
                            self.selection.clear();
                        }
                    }
                    ui.add_space(6.0);
                }
            });
            ui.vertical(|ui| {
                ui.set_width(SLOT_COLUMN_WIDTH);
                self.slot_column(ui, now);
            });
        });
    }

    fn accumulation_view(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("积累模块 · 知识库").color(theme::ACCENT).small());
            ui.label(RichText::new("学习积累库").strong().size(26.0));
            ui.label(
                RichText::new("整理和复习学习过程中积累的单词、短语和佳句")
                    .color(theme::BODY_TEXT),
            );
        });
        ui.add_space(8.0);

        window_header(ui, "积累模块");
        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.accumulation_tab == AccumulationTab::Words, "单词与短语")
                .clicked()
            {
                self.accumulation_tab = AccumulationTab::Words;
            }
            if ui
                .selectable_label(self.accumulation_tab == AccumulationTab::Sentences, "佳句积累")
                .clicked()
            {
                self.accumulation_tab = AccumulationTab::Sentences;
            }
        });
        ui.separator();

        match self.accumulation_tab {
            AccumulationTab::Words => {
                ui.columns(2, |columns| {
                    for (index, word) in content::DRAGGABLE_PHRASES.iter().enumerate() {
                        card_frame().show(&mut columns[index % 2], |ui| {
                            ui.label(RichText::new(*word).color(theme::BODY_TEXT));
                        });
                    }
                });
            }
            AccumulationTab::Sentences => {
                for sentence in content::ACCUMULATED_SENTENCES {
                    card_frame().show(ui, |ui| {
                        ui.label(RichText::new(sentence).color(theme::BODY_TEXT));
                    });
                    ui.add_space(4.0);
                }
            }
        }
    }

    fn slot_column(&mut self, ui: &mut Ui, now: Instant) {
        ui.label(RichText::new("拖拽优化片段至下方:").small().color(theme::MUTED_TEXT));
        for index in 0..self.essay_slots.len() {
            let accepts = self.essay_slots.accept_kinds().to_vec();
            let (_, dropped) = dnd::drop_target(ui, &accepts, |ui| {
                ui.set_width(ui.available_width());
                ui.set_min_height(34.0);
                if self.essay_slots.is_confirming(index) {
                    ui.vertical_centered(|ui| {
                        ui.add_space(6.0);
                        ui.label(RichText::new("已记录").strong().color(theme::CONFIRM_TEXT));
                        ui.add_space(6.0);
                    });
                } else {
                    ui.horizontal(|ui| {
                        let filled = !self.essay_slots.content(index).is_empty();
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .add_enabled(
                                    filled,
                                    egui::Button::new(RichText::new("✓").color(theme::OK)).small(),
                                )
                                .clicked()
                            {
                                self.essay_slots.confirm(index, now);
                            }
                            if ui
                                .add_enabled(
                                    filled,
                                    egui::Button::new(RichText::new("✕").color(theme::DANGER))
                                        .small(),
                                )
                                .clicked()
                            {
                                self.essay_slots.clear(index);
                            }
                            let text = if filled {
                                RichText::new(self.essay_slots.content(index))
                                    .color(theme::BODY_TEXT)
                            } else {
                                RichText::new("拖拽内容到此处")
                                    .italics()
                                    .color(theme::MUTED_TEXT)
                            };
                            ui.add(egui::Label::new(text).truncate(true));
                        });
                    });
                }
            });
            if let Some(payload) = dropped {
                self.essay_slots.drop_payload(index, &payload);
            }
            ui.add_space(6.0);
        }
    }

    fn view_switcher(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let targets = [
                    (HomeView::Essay, "作文优化"),
                    (HomeView::Reading, "阅读功能"),
                    (HomeView::Accumulation, "积累模块"),
                ];
                for (view, label) in targets {
                    if view != self.view && ui.button(label).clicked() {
                        self.view = view;
                    }
                }
            });
        });
    }
}

/// Optimized-essay text with every designated phrase rendered as a
/// draggable chip.
fn phrase_fragments(ui: &mut Ui, text: &str, phrases: &[&str]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for fragment in split_marked(text, phrases, phrases) {
            match fragment {
                Fragment::Plain(run) => {
                    ui.label(RichText::new(run).color(theme::BODY_TEXT));
                }
                Fragment::Marked(run) => {
                    dnd::drag_chip(
                        ui,
                        &DragPayload::phrase(run),
                        theme::PHRASE_BG,
                        theme::PHRASE_TEXT,
                    );
                }
            }
        }
    });
}

/// Reading passage with the currently dropped highlight sentences marked;
/// a marked sentence can be dragged again into another zone.
fn highlight_fragments(ui: &mut Ui, text: &str, highlights: &[&str], active: &[String]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for fragment in split_marked(text, highlights, active) {
            match fragment {
                Fragment::Plain(run) => {
                    ui.label(RichText::new(run).color(theme::BODY_TEXT));
                }
                Fragment::Marked(run) => {
                    dnd::drag_chip(
                        ui,
                        &DragPayload::highlighted(run),
                        theme::HIGHLIGHT_BG,
                        theme::HIGHLIGHT_TEXT,
                    );
                }
            }
        }
    });
}
