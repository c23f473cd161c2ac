use std::path::Path;

use crate::color::MakeColors;
use crate::data::filter::{BrandFilter, filtered_indices};
use crate::data::loader;
use crate::data::model::CarDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<CarDataset>,

    /// Current brand selection.
    pub brand: BrandFilter,

    /// Indices of listings passing the current filter (cached).
    pub visible_indices: Vec<usize>,

    /// Colour per car make.
    pub make_colors: Option<MakeColors>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            brand: BrandFilter::All,
            visible_indices: Vec::new(),
            make_colors: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, reset the filter and colours.
    pub fn set_dataset(&mut self, dataset: CarDataset) {
        self.brand = BrandFilter::All;
        self.visible_indices = (0..dataset.len()).collect();
        self.make_colors = Some(MakeColors::new(&dataset.makes));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.brand);
        }
    }

    /// Switch the brand filter and re-derive the visible listings.
    pub fn set_brand(&mut self, brand: BrandFilter) {
        self.brand = brand;
        self.refilter();
    }

    /// Load a listings file into the state.
    ///
    /// On failure the state stays unpopulated: the error is logged, shown in
    /// the top bar, and no filter options or chart appear. No retry.
    pub fn load_dataset(&mut self, path: &Path) {
        self.loading = true;
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "loaded {} listings ({} makes) from {}",
                    dataset.len(),
                    dataset.makes.len(),
                    path.display()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
                self.loading = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(
            parse_csv(
                "Car Make,Car Model,Price (in USD)\n\
                 Toyota,Supra,\"43,540\"\n\
                 Porsche,911,\"101,200\"\n",
            )
            .unwrap(),
        );
        state
    }

    #[test]
    fn set_dataset_shows_everything() {
        let state = loaded_state();
        assert_eq!(state.brand, BrandFilter::All);
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert!(state.make_colors.is_some());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn brand_change_refilters() {
        let mut state = loaded_state();
        state.set_brand(BrandFilter::Make("Porsche".to_string()));
        assert_eq!(state.visible_indices, vec![1]);

        state.set_brand(BrandFilter::All);
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn failed_load_leaves_state_unpopulated() {
        let mut state = AppState::default();
        state.load_dataset(Path::new("no_such_file.csv"));
        assert!(state.dataset.is_none());
        assert!(state.status_message.is_some());
        assert!(!state.loading);
        assert!(state.visible_indices.is_empty());
    }
}
