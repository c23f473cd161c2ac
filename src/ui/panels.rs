use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::BrandFilter;
use crate::data::model::{MAKE_COLUMN, MODEL_COLUMN, PRICE_COLUMN};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – brand filter and listings table
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone what we need so we can mutate state inside the combo closure.
    let makes = dataset.makes.clone();

    ui.strong("Car make");
    let current = state.brand.clone();
    egui::ComboBox::from_id_salt("brand_filter")
        .selected_text(current.label().to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == BrandFilter::All, "All makes")
                .clicked()
            {
                state.set_brand(BrandFilter::All);
            }
            for make in &makes {
                let selected = current == BrandFilter::Make(make.clone());
                let mut text = RichText::new(make);
                if let Some(colors) = &state.make_colors {
                    text = text.color(colors.color_for(make));
                }
                if ui.selectable_label(selected, text).clicked() {
                    state.set_brand(BrandFilter::Make(make.clone()));
                }
            }
        });

    ui.separator();
    listings_table(ui, state);
}

/// Table of the listings passing the current filter.
fn listings_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::remainder())
            .header(18.0, |mut header| {
                header.col(|ui| {
                    ui.strong(MODEL_COLUMN);
                });
                header.col(|ui| {
                    ui.strong(MAKE_COLUMN);
                });
                header.col(|ui| {
                    ui.strong(PRICE_COLUMN);
                });
            })
            .body(|mut body| {
                for &idx in &state.visible_indices {
                    let listing = &dataset.listings[idx];
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(listing.model().unwrap_or_default());
                        });
                        row.col(|ui| {
                            ui.label(listing.make().unwrap_or_default());
                        });
                        row.col(|ui| {
                            ui.label(listing.price_text().unwrap_or_default());
                        });
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} listings loaded, {} shown",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open car listings")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_dataset(&path);
    }
}
