//! Validated, immutable catalog value.
//!
//! `Catalog` is built once (from the embedded document, a file, or records
//! assembled in code) and only read afterwards. Construction enforces the
//! record invariants: unique ids and non-blank text fields. Record order is
//! the authoring order and is what every filter result preserves.

use crate::catalog::model::{CATALOG_SCHEMA_VERSION, CatalogDocument, ConceptRecord};
use crate::schema_loader::validate_catalog_value;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const EMBEDDED_CATALOG_JSON: &str = include_str!("../../catalog/concepts.json");

#[derive(Clone, Debug)]
/// Ordered concept records with a display title.
pub struct Catalog {
    title: String,
    records: Vec<ConceptRecord>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(EMBEDDED_CATALOG_JSON, "embedded catalog")
    }

    /// Load, schema-check, and validate a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("opening catalog {}", path.display()))?;
        Self::from_json_str(&data, &path.display().to_string())
    }

    /// Parse and validate a catalog document held in memory.
    pub fn from_json_str(data: &str, origin: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(data).with_context(|| format!("parsing catalog {origin}"))?;
        check_schema_version(&value, origin)?;
        validate_catalog_value(&value, origin)?;
        let document: CatalogDocument = serde_json::from_value(value)
            .with_context(|| format!("decoding catalog {origin}"))?;
        Self::from_records(document.title, document.concepts)
            .with_context(|| format!("validating catalog {origin}"))
    }

    /// Build a catalog from records assembled in code.
    ///
    /// An empty record list is accepted.
    pub fn from_records(title: impl Into<String>, records: Vec<ConceptRecord>) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            bail!("catalog title must not be empty");
        }
        validate_records(&records)?;
        debug!(
            title = %title,
            records = records.len(),
            "catalog loaded"
        );
        Ok(Self { title, records })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Records in authoring order.
    pub fn records(&self) -> &[ConceptRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn check_schema_version(value: &Value, origin: &str) -> Result<()> {
    let version = value
        .get("schema_version")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if version != CATALOG_SCHEMA_VERSION {
        bail!(
            "catalog {origin} has schema_version '{version}', expected {CATALOG_SCHEMA_VERSION}"
        );
    }
    Ok(())
}

fn validate_records(records: &[ConceptRecord]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for record in records {
        for (field, value) in [
            ("title", record.title.as_str()),
            ("description", record.description.as_str()),
            ("formula", record.formula.as_str()),
            ("category", record.category.as_str()),
        ] {
            if value.trim().is_empty() {
                bail!("concept {} has an empty {field}", record.id);
            }
        }
        if !seen.insert(record.id) {
            bail!("duplicate concept id {}", record.id);
        }
        if record.category.is_reserved() {
            warn!(
                id = %record.id,
                category = record.category.as_str(),
                "category collides with the All sentinel; textual \"All\" selects every category"
            );
        }
    }
    Ok(())
}
