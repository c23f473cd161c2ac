/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse text → valid rows → dedup by model
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ CarDataset  │  Vec<Listing>, columns, makes (immutable)
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  brand predicate → visible indices → price series
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
