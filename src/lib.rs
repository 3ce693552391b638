//! Shared library for the math handbook.
//!
//! The crate exposes the concept catalog, the pure search/category filter, the
//! session state a front end mutates, and a plain-text renderer. The
//! `handbook` binary is a thin terminal front end over these pieces.

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod catalog;
pub mod filter;
pub mod render;
mod schema_loader;
pub mod session;

pub use catalog::{
    ALL_CATEGORIES, CATALOG_SCHEMA_VERSION, Catalog, CatalogDocument, Category, CategorySelection,
    ConceptId, ConceptRecord,
};
pub use filter::{FilterQuery, derive_categories, filter_concepts, matches};
pub use render::render_view;
pub use session::{FilterState, FilterView};

/// Environment variable naming a catalog file to use instead of the embedded one.
pub const CATALOG_ENV: &str = "MATH_HANDBOOK_CATALOG";

/// Pick the catalog file, if any: an explicit override wins over `MATH_HANDBOOK_CATALOG`.
///
/// `None` means the embedded catalog should be used. An empty env value is
/// treated as unset.
pub fn resolve_catalog_path(override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path.to_path_buf());
    }
    env::var_os(CATALOG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Load the catalog chosen by `resolve_catalog_path`, falling back to the embedded one.
pub fn load_catalog(override_path: Option<&Path>) -> Result<Catalog> {
    match resolve_catalog_path(override_path) {
        Some(path) => {
            info!(path = %path.display(), "loading catalog from file");
            Catalog::load(&path).with_context(|| format!("loading catalog {}", path.display()))
        }
        None => Catalog::builtin().context("loading embedded catalog"),
    }
}
