use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::data::filter::price_series;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Price chart (central panel)
// ---------------------------------------------------------------------------

/// Render the price bar chart in the central panel.
///
/// The bar series is rebuilt from the immutable dataset on every frame, so a
/// filter change simply draws the new selection; nothing carries over from
/// the previous render.
pub fn price_chart(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a listings file to view prices  (File → Open…)");
            });
            return;
        }
    };

    let points = price_series(dataset, &state.visible_indices);
    if points.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No listings match the current filter");
        });
        return;
    }

    ui.label(RichText::new(format!("Price (USD) - {}", state.brand.label())).strong());

    // One BarChart per make so the legend lists makes with their colours.
    // Bars keep their global x position so labels line up with the axis.
    let labels: Vec<String> = points.iter().map(|p| p.model.clone()).collect();
    let mut by_make: Vec<(String, Vec<Bar>)> = Vec::new();
    for (i, point) in points.iter().enumerate() {
        let bar = Bar::new(i as f64, point.price)
            .name(&point.model)
            .width(0.7);
        match by_make.iter_mut().find(|(make, _)| *make == point.make) {
            Some((_, bars)) => bars.push(bar),
            None => by_make.push((point.make.clone(), vec![bar])),
        }
    }

    let charts: Vec<BarChart> = by_make
        .into_iter()
        .map(|(make, bars)| {
            let color = state
                .make_colors
                .as_ref()
                .map(|c| c.color_for(&make))
                .unwrap_or(Color32::LIGHT_BLUE);
            BarChart::new(bars)
                .name(&make)
                .color(color)
                .element_formatter(Box::new(|bar, _chart| {
                    format!("{}\n{}", bar.name, format_usd(bar.value))
                }))
        })
        .collect();

    Plot::new("price_chart")
        .legend(Legend::default())
        .x_axis_label("Model")
        .y_axis_label("Price (in USD)")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round() as usize;
            if (mark.value - idx as f64).abs() < 1e-6 && idx < labels.len() {
                labels[idx].clone()
            } else {
                String::new()
            }
        })
        .y_axis_formatter(|mark, _range| format_usd(mark.value))
        .label_formatter(|name, value| {
            if name.is_empty() {
                format_usd(value.y)
            } else {
                format!("{name}\n{}", format_usd(value.y))
            }
        })
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Currency formatting
// ---------------------------------------------------------------------------

/// Format a price as currency with thousands separators, e.g. `$34,500`.
/// Used for both axis ticks and tooltips.
pub fn format_usd(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prices_as_currency() {
        assert_eq!(format_usd(34500.0), "$34,500");
        assert_eq!(format_usd(1234567.0), "$1,234,567");
        assert_eq!(format_usd(900.0), "$900");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn rounds_fractional_ticks() {
        assert_eq!(format_usd(99999.6), "$100,000");
        assert_eq!(format_usd(-1500.0), "-$1,500");
    }
}
