// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Project export and import.
//!
//! This module handles exporting the project document as pretty-printed
//! JSON and importing it back with shape validation. A failed import
//! must leave the caller's current document untouched, so importing
//! returns a fully parsed document or an error, never a partial one.

use crate::models::project::ProjectData;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Export the project document to pretty-printed JSON.
pub fn export_json(data: &ProjectData, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Import a project document from JSON.
///
/// The top-level `roster` and `timestamps` fields must be present as
/// arrays; anything else is rejected before deserialization so a typo'd
/// file cannot silently wipe the current project.
pub fn import_json(path: &Path) -> Result<ProjectData> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_project(&json)
}

/// Validate and deserialize a project document from a JSON string.
pub fn parse_project(json: &str) -> Result<ProjectData> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("Project file is not valid JSON")?;

    for field in ["roster", "timestamps"] {
        match value.get(field) {
            Some(v) if v.is_array() => {}
            Some(_) => bail!("Project file field '{}' is not a list", field),
            None => bail!("Project file is missing the '{}' list", field),
        }
    }

    let data = serde_json::from_value(value).context("Project file has the wrong shape")?;
    Ok(data)
}
