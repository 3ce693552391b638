//! Search and category filtering over a catalog.
//!
//! Everything here is a pure function of its inputs: the catalog is borrowed,
//! the query is read, and nothing is cached between calls. Results keep the
//! catalog's authoring order.

use crate::catalog::{Catalog, CategorySelection, ConceptRecord};
use std::collections::BTreeSet;

/// Search text plus selected category, as supplied by the presentation layer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterQuery {
    pub search_text: String,
    pub category: CategorySelection,
}

impl FilterQuery {
    pub fn new(search_text: impl Into<String>, category: CategorySelection) -> Self {
        Self {
            search_text: search_text.into(),
            category,
        }
    }
}

/// `All` followed by each distinct category in first-occurrence order.
pub fn derive_categories(catalog: &Catalog) -> Vec<CategorySelection> {
    let mut seen = BTreeSet::new();
    let mut categories = vec![CategorySelection::All];
    for record in catalog.records() {
        if seen.insert(&record.category) {
            categories.push(CategorySelection::Named(record.category.clone()));
        }
    }
    categories
}

/// Records admitted by both the category and the text condition.
pub fn filter_concepts<'a>(catalog: &'a Catalog, query: &FilterQuery) -> Vec<&'a ConceptRecord> {
    let needle = fold_case(&query.search_text);
    catalog
        .records()
        .iter()
        .filter(|record| query.category.admits(&record.category))
        .filter(|record| text_matches(record, &needle))
        .collect()
}

/// Single-record form of the predicate used by `filter_concepts`.
pub fn matches(record: &ConceptRecord, query: &FilterQuery) -> bool {
    query.category.admits(&record.category) && text_matches(record, &fold_case(&query.search_text))
}

// `needle` must already be case-folded.
fn text_matches(record: &ConceptRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .searchable_fields()
        .iter()
        .any(|field| fold_case(field).contains(needle))
}

/// Per-character lowercase mapping; caseless symbols (², π, ∫) pass through unchanged.
///
/// `str::to_lowercase` picks final sigma by context, so it is avoided here and
/// both sigma forms fold to `σ`.
fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}
