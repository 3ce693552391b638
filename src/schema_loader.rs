//! Bundled JSON Schema for catalog documents.
//!
//! The schema ships inside the binary so catalogs supplied via `--catalog` or
//! `MATH_HANDBOOK_CATALOG` are checked against the same contract as the
//! embedded default, without needing the repository on disk.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

const CATALOG_SCHEMA_JSON: &str = include_str!("../schema/concept_catalog.schema.json");

/// Parse the bundled schema document.
pub(crate) fn catalog_schema() -> Result<Value> {
    serde_json::from_str(CATALOG_SCHEMA_JSON).context("parsing bundled catalog schema")
}

/// Validate a raw catalog document against the bundled schema.
///
/// `origin` names the document in error messages (a path or "embedded catalog").
pub(crate) fn validate_catalog_value(value: &Value, origin: &str) -> Result<()> {
    let schema = catalog_schema()?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling bundled catalog schema: {err}"))?;

    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| format!("{} at {}", err, err.instance_path))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("catalog {origin} failed schema validation:\n{details}");
    }
    Ok(())
}
