mod app;
mod data;
mod processing;
mod state;
mod ui;

use app::FlightApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Red Box Flight Analyzer")
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 600.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Red Box Flight Analyzer",
        options,
        Box::new(|cc| Ok(Box::new(FlightApp::new(cc)))),
    )
}
