//! Static showcase page.

use egui::{RichText, Ui};

use crate::content;
use crate::ui::theme;
use crate::ui::widgets::card_frame;

const SERVICES: [(&str, &str); 3] = [
    ("作文智能优化", "提交作文，三步获得AI优化稿与逐项评价"),
    ("阅读理解精讲", "拖拽文章中的高亮长难句，查看结构分析与翻译"),
    ("口语陪练与报告", "与AI外教进行情景对话，并生成口语表现报告"),
];

pub fn ui(ui: &mut Ui) {
    egui::ScrollArea::vertical()
        .id_source("experience_scroll")
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("智能演示 · 直观体验").color(theme::ACCENT).small());
                ui.label(RichText::new("体验中心").strong().size(26.0));
                ui.label(
                    RichText::new("在首页的作文、阅读与对话工作台中体验全部功能")
                        .color(theme::BODY_TEXT),
                );
            });
            ui.add_space(12.0);

            ui.columns(3, |columns| {
                for (column, (title, description)) in columns.iter_mut().zip(SERVICES) {
                    card_frame().show(column, |ui| {
                        ui.label(RichText::new(title).strong());
                        ui.label(RichText::new(description).small().color(theme::MUTED_TEXT));
                    });
                }
            });
            ui.add_space(12.0);

            card_frame().show(ui, |ui| {
                ui.label(RichText::new("作文优化三步流程").strong());
                for (index, (title, description)) in content::FLOW_STEPS.iter().enumerate() {
                    ui.label(
                        RichText::new(format!("{}. {} — {}", index + 1, title, description))
                            .color(theme::BODY_TEXT),
                    );
                }
            });
        });
}
