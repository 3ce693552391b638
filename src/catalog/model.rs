//! Deserializable representation of a concept catalog document.
//!
//! The types mirror `schema/concept_catalog.schema.json`. Parsing here does no
//! semantic validation; use `Catalog` for a checked value.

use crate::catalog::identity::{Category, ConceptId};
use serde::{Deserialize, Serialize};

/// Schema version accepted by this build.
pub const CATALOG_SCHEMA_VERSION: &str = "math_handbook_catalog_v1";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One catalog entry describing a single mathematical idea.
pub struct ConceptRecord {
    pub id: ConceptId,
    pub title: String,
    pub description: String,
    /// May contain Unicode math symbols (², π, ∫, θ, ...).
    pub formula: String,
    pub category: Category,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Catalog document as stored on disk or embedded in the binary.
pub struct CatalogDocument {
    pub schema_version: String,
    pub title: String,
    pub concepts: Vec<ConceptRecord>,
}

impl ConceptRecord {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        formula: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ConceptId(id),
            title: title.into(),
            description: description.into(),
            formula: formula.into(),
            category: Category::new(category),
        }
    }

    /// Text fields searched by the filter, in display order.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.title, &self.description, &self.formula]
    }
}
