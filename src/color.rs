use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: car make → Color32
// ---------------------------------------------------------------------------

/// Assigns each car make a stable colour, in the dataset's first-seen make
/// order so bars and swatches stay consistent across filter changes.
#[derive(Debug, Clone)]
pub struct MakeColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl MakeColors {
    /// Build the colour assignment for the given makes.
    pub fn new(makes: &[String]) -> Self {
        let palette = generate_palette(makes.len());
        let mapping: BTreeMap<String, Color32> = makes
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        MakeColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a make.
    pub fn color_for(&self, make: &str) -> Color32 {
        self.mapping
            .get(make)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_make_gets_a_distinct_color() {
        let makes: Vec<String> = ["Porsche", "Nissan", "Toyota"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let colors = MakeColors::new(&makes);

        let assigned: Vec<Color32> = makes.iter().map(|m| colors.color_for(m)).collect();
        assert_ne!(assigned[0], assigned[1]);
        assert_ne!(assigned[1], assigned[2]);
        assert_eq!(colors.color_for("Unknown"), Color32::GRAY);
    }
}
