use std::collections::BTreeMap;

use crate::color::CategoryColors;
use crate::data::aggregate::{distribution, monthly_percentages, MonthlyShares};
use crate::data::category::Category;
use crate::data::filter::{default_selection, filtered_indices, CategorySelection};
use crate::data::model::{Article, NewsDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset.
    pub dataset: NewsDataset,

    /// Categories ticked in the filter panel.
    pub selected: CategorySelection,

    /// Article count per category over the whole dataset.
    pub totals: BTreeMap<Category, usize>,

    /// Indices of articles passing the current filter (cached).
    pub visible_indices: Vec<usize>,

    /// Article count per category over the visible articles (cached).
    pub distribution: BTreeMap<Category, usize>,

    /// Month × category percentages over the visible articles (cached).
    pub monthly: MonthlyShares,

    /// Fixed colour per category.
    pub colors: CategoryColors,

    /// Outcome of the last load, shown in the top bar.
    pub status: Status,
}

/// Message shown in the top bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Loaded(String),
    Error(String),
}

impl Status {
    fn loaded(dataset: &NewsDataset) -> Self {
        Status::Loaded(format!("Data loaded: {} articles", dataset.len()))
    }
}

impl AppState {
    pub fn new(dataset: NewsDataset) -> Self {
        let mut state = Self {
            totals: distribution(&dataset.articles),
            selected: CategorySelection::new(),
            visible_indices: Vec::new(),
            distribution: BTreeMap::new(),
            monthly: MonthlyShares::default(),
            colors: CategoryColors::default(),
            status: Status::loaded(&dataset),
            dataset,
        };
        state.reset_selection();
        state
    }

    /// Replace the dataset (File → Open…) and select everything it contains.
    pub fn set_dataset(&mut self, dataset: NewsDataset) {
        self.totals = distribution(&dataset.articles);
        self.status = Status::loaded(&dataset);
        self.dataset = dataset;
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        self.selected = default_selection(&self.dataset);
        self.refilter();
    }

    /// Recompute visible indices and both aggregations after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.selected);

        let articles = &self.dataset.articles;
        let visible: Vec<&Article> = self.visible_indices.iter().map(|&i| &articles[i]).collect();
        self.distribution = distribution(visible.iter().copied());
        self.monthly = monthly_percentages(visible.iter().copied());

        let without_month = visible.iter().filter(|a| a.month.is_none()).count();
        if without_month > 0 {
            log::debug!("{without_month} visible articles have no month and are left out of the monthly chart");
        }
    }

    /// Tick or untick one category.
    pub fn set_selected(&mut self, category: Category, selected: bool) {
        let changed = if selected {
            self.selected.insert(category)
        } else {
            self.selected.remove(&category)
        };
        if changed {
            self.refilter();
        }
    }

    /// Select every observed category.
    pub fn select_all(&mut self) {
        self.reset_selection();
    }

    /// Deselect every category.
    pub fn select_none(&mut self) {
        self.selected.clear();
        self.refilter();
    }
}
