mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::CarPriceApp;
use eframe::egui;

/// Listings file loaded at startup when no path argument is given.
const DEFAULT_DATA_PATH: &str = "Sport_car_price.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let data_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Car Price Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(CarPriceApp::new(&data_path)))),
    )
}
