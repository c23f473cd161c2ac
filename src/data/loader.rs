use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{CarDataset, Listing, MODEL_COLUMN, PRICE_COLUMN};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Load failures surfaced to the UI. Row-level problems are never errors:
/// malformed rows are skipped during parsing.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read CSV header: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a top-level JSON array of listing objects")]
    JsonNotAnArray,
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a car listing dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row + comma-separated rows, fields optionally quoted
/// * `.json` – `[{ "Car Model": "...", "Car Make": "...", ... }, ...]`
pub fn load_file(path: &Path) -> Result<CarDataset, LoaderError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => parse_csv(&read_text(path)?),
        "json" => parse_json(&read_text(path)?),
        other => Err(LoaderError::UnsupportedExtension(other.to_string())),
    }
}

fn read_text(path: &Path) -> Result<String, LoaderError> {
    std::fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// Parse CSV text into a deduplicated dataset.
///
/// The header row defines the ordered column names. A data row survives only
/// if its field count matches the header; shorter, longer, or unreadable rows
/// are skipped rather than failing the load.
pub fn parse_csv(text: &str) -> Result<CarDataset, LoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut listings = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                log::debug!("skipping unreadable row {row_no}: {err}");
                continue;
            }
        };
        if record.len() != headers.len() {
            log::debug!(
                "skipping row {row_no}: {} values for {} columns",
                record.len(),
                headers.len()
            );
            continue;
        }
        let fields: BTreeMap<String, String> = headers
            .iter()
            .cloned()
            .zip(record.iter().map(|v| v.to_string()))
            .collect();
        listings.push(Listing { fields });
    }

    Ok(assemble(listings, headers))
}

// ---------------------------------------------------------------------------
// JSON parser
// ---------------------------------------------------------------------------

/// Expected JSON schema: a records-oriented array of flat objects.  Every
/// value is carried as text, matching the CSV path; nulls become empty
/// strings (and so fail the non-empty price check).
pub fn parse_json(text: &str) -> Result<CarDataset, LoaderError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let records = root.as_array().ok_or(LoaderError::JsonNotAnArray)?;

    let mut columns: Vec<String> = Vec::new();
    let mut listings = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let Some(obj) = rec.as_object() else {
            log::debug!("skipping record {i}: not a JSON object");
            continue;
        };
        let mut fields = BTreeMap::new();
        for (key, val) in obj {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
            fields.insert(key.clone(), json_to_text(val));
        }
        listings.push(Listing { fields });
    }

    Ok(assemble(listings, columns))
}

fn json_to_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Validity filter + dedup
// ---------------------------------------------------------------------------

/// Drop listings without a model column or with an empty price, then keep the
/// first listing per model, and derive the make list.
fn assemble(listings: Vec<Listing>, columns: Vec<String>) -> CarDataset {
    let priced: Vec<Listing> = listings
        .into_iter()
        .filter(|l| {
            l.fields.contains_key(MODEL_COLUMN)
                && l.get(PRICE_COLUMN).is_some_and(|p| !p.is_empty())
        })
        .collect();

    CarDataset::from_listings(dedup_by_model(priced), columns)
}

/// First occurrence wins; input order is preserved.
fn dedup_by_model(listings: Vec<Listing>) -> Vec<Listing> {
    let mut seen: HashSet<String> = HashSet::new();
    listings
        .into_iter()
        .filter(|l| seen.insert(l.model().unwrap_or_default().to_string()))
        .collect()
}
