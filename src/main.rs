#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::{Parser, ValueEnum};
use eframe::egui;

use smartpaper_rust_gui::config;
use smartpaper_rust_gui::ui::app::{Page, PracticeApp};

#[derive(Parser, Debug)]
#[command(name = "smartpaper", about = "SmartPaper AI English practice studio (mock demo)")]
struct Args {
    /// Path to the optional TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: String,
    /// Page to show at startup.
    #[arg(long, value_enum, default_value_t = StartPage::Home)]
    page: StartPage,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StartPage {
    Home,
    Experience,
    Chat,
    OralReport,
}

impl From<StartPage> for Page {
    fn from(page: StartPage) -> Self {
        match page {
            StartPage::Home => Page::Home,
            StartPage::Experience => Page::Experience,
            StartPage::Chat => Page::Chat,
            StartPage::OralReport => Page::OralReport,
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let args = Args::parse();

    let config = match config::load_config_from_file(&args.config) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using default configuration");
            config::AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([1000.0, 700.0]),
        ..Default::default()
    };
    let start_page = Page::from(args.page);
    eframe::run_native(
        "SmartPaper AI - 英语学习工作台",
        options,
        Box::new(move |cc| Box::new(PracticeApp::new(cc, config, start_page))),
    )
}
