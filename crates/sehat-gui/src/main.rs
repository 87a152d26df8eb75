//! GUI entry point for Sehat Checker

mod app;
mod diagnose_panel;
mod fleet_panel;
mod settings_panel;

use app::SehatApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sehat Checker",
        options,
        Box::new(|cc| Ok(Box::new(SehatApp::new(cc)))),
    )
}
