//! Concept catalog wiring.
//!
//! Records, the validated `Catalog` value, and the JSON document format used
//! for the embedded catalog and for catalogs loaded from disk.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::{ALL_CATEGORIES, Category, CategorySelection, ConceptId};
pub use index::Catalog;
pub use model::{CATALOG_SCHEMA_VERSION, CatalogDocument, ConceptRecord};
