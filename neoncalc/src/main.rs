//! NeonCalc - Electric purple neon calculator
//!
//! Standard and scientific panels over a typed expression, with a
//! remembered dark/light theme.

mod app;
mod theme;

use app::NeonCalcApp;
use eframe::NativeOptions;
use neoncore::{AppState, ThemeStore};

pub const TITLE: &str = "Electric Purple Neon Calculator";

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = ThemeStore::default_location();
    log::info!("theme preference at {}", store.path().display());
    let state = AppState::new(store);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 600.0])
            .with_resizable(false)
            .with_title(TITLE),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Box::new(NeonCalcApp::new(cc, state))),
    )
}
