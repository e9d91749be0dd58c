// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Persistent project store.
//!
//! The whole project document lives under one JSON file and is written
//! back in full after every mutation (write-through). Loading is
//! forgiving: a missing or corrupt file yields a fresh empty document
//! rather than an error, and partially populated documents merge over
//! defaults via serde.

use crate::models::project::ProjectData;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Handle on the single persisted document location.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default document location: `$FILMROOM_DATA`, else
    /// `~/.filmroom/project.json`, else `./filmroom-project.json`.
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os("FILMROOM_DATA") {
            return PathBuf::from(path);
        }
        if let Some(home) = std::env::var_os("HOME") {
            return Path::new(&home).join(".filmroom").join("project.json");
        }
        PathBuf::from("filmroom-project.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the last-saved document, falling back to an empty one.
    ///
    /// Corrupt state is discarded with a warning, never surfaced as an
    /// error: the last-known-good policy is "start clean".
    pub fn load(&self) -> ProjectData {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => {
                log::info!("No saved project at {}, starting fresh", self.path.display());
                return ProjectData::new();
            }
        };

        match serde_json::from_str::<ProjectData>(&text) {
            Ok(mut doc) => {
                if doc.project_id == 0 {
                    doc.project_id = ProjectData::new().project_id;
                }
                log::info!(
                    "Loaded project {} ({} athletes, {} timestamps)",
                    doc.project_id,
                    doc.roster.len(),
                    doc.timestamps.len()
                );
                doc
            }
            Err(e) => {
                log::warn!("Discarding corrupt saved project: {}", e);
                ProjectData::new()
            }
        }
    }

    /// Overwrite the stored document with the given one.
    ///
    /// The document is written to a sibling temp file and renamed over
    /// the target, so a crash mid-save can never truncate the last good
    /// document: the forgiving loader only ever sees the old complete
    /// file or the new complete file.
    pub fn save(&self, doc: &ProjectData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(doc)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }

    /// Scratch file used during a save, in the same directory as the
    /// target so the final rename stays on one filesystem.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
