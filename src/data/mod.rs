/// Data layer: core types, loading, classification, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → rows, locate title/month columns
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ category  │  title → Category (ordered keyword table)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ NewsDataset  │  Vec<Article>, immutable after load
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐     ┌───────────┐
///   │  filter   │ ──▶ │ aggregate  │  counts per category, % per month
///   └──────────┘     └───────────┘
/// ```

pub mod aggregate;
pub mod category;
pub mod filter;
pub mod loader;
pub mod model;
pub mod month;
