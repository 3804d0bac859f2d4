//! Application shell: page routing, frame tick and repaint scheduling.

use std::time::Instant;

use eframe::egui::{self, RichText};

use crate::config::AppConfig;
use crate::ui::pages::chat::ChatPageState;
use crate::ui::pages::experience;
use crate::ui::pages::home::HomeState;
use crate::ui::pages::oral_report::OralReportState;
use crate::ui::theme;

/// Top-level pages, one per route of the original site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Experience,
    Chat,
    OralReport,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Experience, Page::Chat, Page::OralReport];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "首页",
            Page::Experience => "体验中心",
            Page::Chat => "口语对话",
            Page::OralReport => "口语报告",
        }
    }
}

pub struct PracticeApp {
    page: Page,
    home: HomeState,
    chat: ChatPageState,
    report: OralReportState,
}

impl PracticeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, start_page: Page) -> Self {
        Self {
            page: start_page,
            home: HomeState::new(&config.timing),
            chat: ChatPageState::new(&config.timing),
            report: OralReportState::new(),
        }
    }

    /// Apply every elapsed timer before building the frame.
    fn tick(&mut self, now: Instant) {
        self.home.tick(now);
        self.chat.tick(now);
    }

    /// Earliest pending deadline across all pages.
    fn next_due(&self) -> Option<Instant> {
        [self.home.next_due(), self.chat.next_due()]
            .into_iter()
            .flatten()
            .min()
    }

    fn navbar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("文件", |ui| {
                if ui.button("退出").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
            ui.separator();
            for page in Page::ALL {
                if ui.selectable_label(self.page == page, page.title()).clicked() {
                    self.page = page;
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new("SmartPaper AI").strong().color(theme::ACCENT));
            });
        });
    }
}

impl eframe::App for PracticeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.tick(now);

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| self.navbar(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            let nav = match self.page {
                Page::Home => {
                    self.home.ui(ui, now);
                    None
                }
                Page::Experience => {
                    experience::ui(ui);
                    None
                }
                Page::Chat => self.chat.ui(ui, now),
                Page::OralReport => self.report.ui(ui),
            };
            if let Some(page) = nav {
                self.page = page;
            }
        });

        // Wake up again exactly when the next simulated delay elapses.
        if let Some(due) = self.next_due() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }
    }
}
