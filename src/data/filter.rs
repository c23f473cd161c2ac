use super::model::{CarDataset, Listing};

// ---------------------------------------------------------------------------
// Brand filter: which make is shown
// ---------------------------------------------------------------------------

/// The current brand selection. `All` shows every listing; `Make` restricts
/// the view to listings whose make matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrandFilter {
    #[default]
    All,
    Make(String),
}

impl BrandFilter {
    /// Text shown in the combo box and the chart title.
    pub fn label(&self) -> &str {
        match self {
            BrandFilter::All => "All makes",
            BrandFilter::Make(make) => make,
        }
    }

    fn matches(&self, listing: &Listing) -> bool {
        match self {
            BrandFilter::All => true,
            BrandFilter::Make(make) => listing.make() == Some(make.as_str()),
        }
    }
}

/// Return indices of listings that pass the brand filter, in dataset order.
pub fn filtered_indices(dataset: &CarDataset, filter: &BrandFilter) -> Vec<usize> {
    dataset
        .listings
        .iter()
        .enumerate()
        .filter(|(_, listing)| filter.matches(listing))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Price series: the chart's view description
// ---------------------------------------------------------------------------

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub model: String,
    pub make: String,
    pub price: f64,
}

/// Build the bar series for the given visible listings.
///
/// Rebuilt from scratch on every render; nothing accumulates across filter
/// changes. A listing whose price text survived the non-empty check but does
/// not parse as a number yields no bar.
pub fn price_series(dataset: &CarDataset, indices: &[usize]) -> Vec<PricePoint> {
    indices
        .iter()
        .filter_map(|&i| {
            let listing = &dataset.listings[i];
            let model = listing.model().unwrap_or_default().to_string();
            match listing.price_usd() {
                Some(price) => Some(PricePoint {
                    model,
                    make: listing.make().unwrap_or_default().to_string(),
                    price,
                }),
                None => {
                    log::debug!("listing '{model}' has a non-numeric price, no bar drawn");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    fn sample() -> CarDataset {
        parse_csv(
            "Car Make,Car Model,Price (in USD)\n\
             Toyota,Supra,\"43,540\"\n\
             Porsche,911,\"101,200\"\n\
             Toyota,GR86,\"27,900\"\n\
             Nissan,GT-R,\"113,540\"\n",
        )
        .unwrap()
    }

    #[test]
    fn all_filter_covers_every_listing() {
        let dataset = sample();
        let indices = filtered_indices(&dataset, &BrandFilter::All);
        assert_eq!(indices, vec![0, 1, 2, 3]);

        let series = price_series(&dataset, &indices);
        assert_eq!(series.len(), dataset.len());
    }

    #[test]
    fn make_filter_selects_exact_matches_in_order() {
        let dataset = sample();
        let filter = BrandFilter::Make("Toyota".to_string());
        let indices = filtered_indices(&dataset, &filter);
        let series = price_series(&dataset, &indices);

        let labels: Vec<&str> = series.iter().map(|p| p.model.as_str()).collect();
        assert_eq!(labels, vec!["Supra", "GR86"]);
        assert!(series.iter().all(|p| p.make == "Toyota"));
    }

    #[test]
    fn unknown_make_yields_empty_series() {
        let dataset = sample();
        let filter = BrandFilter::Make("Ferrari".to_string());
        let indices = filtered_indices(&dataset, &filter);
        assert!(indices.is_empty());
        assert!(price_series(&dataset, &indices).is_empty());
    }

    #[test]
    fn series_parses_prices_numerically() {
        let dataset = sample();
        let indices = filtered_indices(&dataset, &BrandFilter::All);
        let series = price_series(&dataset, &indices);
        assert_eq!(series[0].price, 43540.0);
        assert_eq!(series[3].price, 113540.0);
    }

    #[test]
    fn refiltering_rebuilds_the_series_from_scratch() {
        let dataset = sample();
        let all = price_series(&dataset, &filtered_indices(&dataset, &BrandFilter::All));
        let toyota_filter = BrandFilter::Make("Toyota".to_string());
        let toyota = price_series(&dataset, &filtered_indices(&dataset, &toyota_filter));

        // No carry-over from the wider render: only matching rows remain.
        assert_eq!(all.len(), 4);
        assert_eq!(toyota.len(), 2);
        assert!(toyota.iter().all(|p| p.make == "Toyota"));
    }
}
