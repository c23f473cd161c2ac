use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Column names required by the listing schema
// ---------------------------------------------------------------------------

/// Column holding the model name; listings are deduplicated on it.
pub const MODEL_COLUMN: &str = "Car Model";
/// Column holding the make; drives the brand filter.
pub const MAKE_COLUMN: &str = "Car Make";
/// Column holding the price as digits with optional thousands separators.
pub const PRICE_COLUMN: &str = "Price (in USD)";

// ---------------------------------------------------------------------------
// Listing – one row of the source table
// ---------------------------------------------------------------------------

/// A single car listing: column name → string value.
///
/// Values stay as text; prices keep their thousands separators until chart
/// time (see [`parse_price`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub fields: BTreeMap<String, String>,
}

impl Listing {
    /// Look up a column value.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn model(&self) -> Option<&str> {
        self.get(MODEL_COLUMN)
    }

    pub fn make(&self) -> Option<&str> {
        self.get(MAKE_COLUMN)
    }

    /// Raw price text as it appeared in the input.
    pub fn price_text(&self) -> Option<&str> {
        self.get(PRICE_COLUMN)
    }

    /// Price as a number, if the price text is numeric.
    pub fn price_usd(&self) -> Option<f64> {
        self.price_text().and_then(parse_price)
    }
}

/// Parse a price string like `"34,500"` into `34500.0`.
///
/// Thousands separators are stripped first. If the remainder is not a clean
/// number, the leading numeric prefix is used so annotated values like
/// `"101,500 (est.)"` still yield a price.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned = text.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(value) = cleaned.parse::<f64>() {
        return Some(value);
    }
    let end = cleaned
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+')
        .unwrap_or(cleaned.len());
    cleaned[..end].parse().ok()
}

// ---------------------------------------------------------------------------
// CarDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, deduplicated by model and never mutated after
/// construction; renders only re-filter it.
#[derive(Debug, Clone, Default)]
pub struct CarDataset {
    /// All listings, in input order.
    pub listings: Vec<Listing>,
    /// Ordered column names from the source header.
    pub columns: Vec<String>,
    /// Distinct make values in first-seen order; feeds the brand filter.
    pub makes: Vec<String>,
}

impl CarDataset {
    /// Build the dataset, deriving the make list from the listings.
    pub fn from_listings(listings: Vec<Listing>, columns: Vec<String>) -> Self {
        let mut makes: Vec<String> = Vec::new();
        for listing in &listings {
            if let Some(make) = listing.make() {
                if !makes.iter().any(|m| m == make) {
                    makes.push(make.to_string());
                }
            }
        }
        CarDataset {
            listings,
            columns,
            makes,
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(model: &str, make: &str, price: &str) -> Listing {
        let mut fields = BTreeMap::new();
        fields.insert(MODEL_COLUMN.to_string(), model.to_string());
        fields.insert(MAKE_COLUMN.to_string(), make.to_string());
        fields.insert(PRICE_COLUMN.to_string(), price.to_string());
        Listing { fields }
    }

    #[test]
    fn parses_price_with_thousands_separators() {
        assert_eq!(parse_price("34,500"), Some(34500.0));
        assert_eq!(parse_price("1,234,567"), Some(1234567.0));
        assert_eq!(parse_price(" 51900 "), Some(51900.0));
    }

    #[test]
    fn price_keeps_leading_numeric_prefix() {
        assert_eq!(parse_price("101,500 (est.)"), Some(101500.0));
    }

    #[test]
    fn non_numeric_price_is_none() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("   "), None);
        assert_eq!(parse_price("N/A"), None);
    }

    #[test]
    fn makes_keep_first_seen_order_without_duplicates() {
        let dataset = CarDataset::from_listings(
            vec![
                listing("911", "Porsche", "101,200"),
                listing("Huracan", "Lamborghini", "274,390"),
                listing("Cayman", "Porsche", "60,500"),
                listing("GT-R", "Nissan", "113,540"),
            ],
            vec![],
        );
        assert_eq!(dataset.makes, vec!["Porsche", "Lamborghini", "Nissan"]);
    }
}
