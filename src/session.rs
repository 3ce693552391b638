//! Presentation-owned filter state and the view derived from it.
//!
//! `FilterState` lives as long as one screen (or one interactive run) and is
//! the only mutable piece of the system. Every call to `view` recomputes the
//! tab strip and the result list from scratch; nothing is memoized.

use crate::catalog::{Catalog, CategorySelection, ConceptRecord};
use crate::filter::{FilterQuery, derive_categories, filter_concepts};
use tracing::trace;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// Current search text and selected category tab.
pub struct FilterState {
    search_text: String,
    selected_category: CategorySelection,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_category(&self) -> &CategorySelection {
        &self.selected_category
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        trace!(search = %self.search_text, "search text changed");
    }

    pub fn select_category(&mut self, category: CategorySelection) {
        trace!(category = %category, "category selected");
        self.selected_category = category;
    }

    /// Back to an empty search over all categories.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot handed to the filter engine by value.
    pub fn query(&self) -> FilterQuery {
        FilterQuery::new(self.search_text.clone(), self.selected_category.clone())
    }

    pub fn view<'a>(&self, catalog: &'a Catalog) -> FilterView<'a> {
        let categories = derive_categories(catalog);
        let selected_tab = categories
            .iter()
            .position(|tab| tab == &self.selected_category);
        let results = filter_concepts(catalog, &self.query());
        FilterView {
            categories,
            selected_tab,
            results,
        }
    }
}

#[derive(Clone, Debug)]
/// Everything a front end needs to draw one frame.
pub struct FilterView<'a> {
    pub categories: Vec<CategorySelection>,
    /// Index into `categories`; `None` when the selection names no tab.
    pub selected_tab: Option<usize>,
    pub results: Vec<&'a ConceptRecord>,
}

impl FilterView<'_> {
    pub fn count(&self) -> usize {
        self.results.len()
    }

    /// True when the empty-state message should be shown instead of cards.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
