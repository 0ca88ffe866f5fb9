use std::collections::BTreeSet;

use super::category::Category;
use super::model::{Article, NewsDataset};

/// Selected categories. An empty set selects nothing.
pub type CategorySelection = BTreeSet<Category>;

/// Default selection: every category observed in the loaded data.
pub fn default_selection(dataset: &NewsDataset) -> CategorySelection {
    dataset.categories.clone()
}

/// Rows whose category is selected, in their original order.
pub fn apply_filter<'a>(rows: &'a [Article], selected: &CategorySelection) -> Vec<&'a Article> {
    rows.iter()
        .filter(|a| selected.contains(&a.category))
        .collect()
}

/// Indices of articles whose category is selected.
pub fn filtered_indices(dataset: &NewsDataset, selected: &CategorySelection) -> Vec<usize> {
    dataset
        .articles
        .iter()
        .enumerate()
        .filter(|(_, a)| selected.contains(&a.category))
        .map(|(i, _)| i)
        .collect()
}
