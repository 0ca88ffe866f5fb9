use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::category::{classify, Category};
use super::month::MonthLabel;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the source table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common spreadsheet cell types.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            // Spreadsheets store whole numbers as floats; show them without a fraction.
            CellValue::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{v:.0}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Whether the cell carries no usable value (empty, blank text or NaN).
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::String(s) => s.trim().is_empty(),
            CellValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Article – one row of the source table
// ---------------------------------------------------------------------------

/// A single news article (one row of the source table).
#[derive(Debug, Clone)]
pub struct Article {
    /// Headline text used for classification.
    pub title: String,
    /// Publication month; `None` when the month cell is empty.
    pub month: Option<MonthLabel>,
    /// Derived once at load time from `title`.
    pub category: Category,
    /// All source columns (title and month included): column_name → value.
    pub fields: BTreeMap<String, CellValue>,
}

impl Article {
    /// Build an article from its raw cells and classify it.
    pub fn new(title_cell: &CellValue, month_cell: &CellValue, fields: BTreeMap<String, CellValue>) -> Self {
        let title = title_cell.to_string();
        let month = if month_cell.is_missing() {
            None
        } else {
            Some(MonthLabel::parse(&month_cell.to_string()))
        };
        Article {
            category: classify(&title),
            title,
            month,
            fields,
        }
    }
}

// ---------------------------------------------------------------------------
// NewsDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full classified dataset. Never mutated after loading.
#[derive(Debug, Clone)]
pub struct NewsDataset {
    /// All articles (rows) in source order.
    pub articles: Vec<Article>,
    /// Source column names in source order.
    pub column_names: Vec<String>,
    /// Categories that occur at least once.
    pub categories: BTreeSet<Category>,
}

impl NewsDataset {
    pub fn new(articles: Vec<Article>, column_names: Vec<String>) -> Self {
        let categories = articles.iter().map(|a| a.category).collect();
        NewsDataset {
            articles,
            column_names,
            categories,
        }
    }

    /// Number of articles.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
