use std::path::Path;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{chart, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CarPriceApp {
    pub state: AppState,
}

impl CarPriceApp {
    /// Build the app and run the startup load. If the file cannot be read the
    /// UI comes up unpopulated with the error in the top bar; there is no
    /// retry beyond File → Open.
    pub fn new(data_path: &Path) -> Self {
        let mut state = AppState::default();
        state.load_dataset(data_path);
        Self { state }
    }
}

impl eframe::App for CarPriceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: brand filter + listings ----
        egui::SidePanel::left("brand_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: price chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            chart::price_chart(ui, &self.state);
        });
    }
}
