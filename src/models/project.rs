// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! The project document.
//!
//! A project bundles the video reference, the roster, and every
//! timestamped annotation into one JSON-serializable record. The whole
//! document is the unit of persistence: it is saved verbatim after every
//! mutation and replaced wholesale on import.

use super::annotation::Annotation;
use super::athlete::Athlete;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Complete project data for serialization.
///
/// Every field defaults, so a partially populated stored document
/// shallow-merges over an empty one instead of failing to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectData {
    pub project_id: u64,
    pub video_url: String,
    pub video_id: String,
    pub roster: Vec<Athlete>,
    pub timestamps: Vec<Annotation>,
}

impl Default for ProjectData {
    fn default() -> Self {
        Self {
            project_id: 0,
            video_url: String::new(),
            video_id: String::new(),
            roster: Vec::new(),
            timestamps: Vec::new(),
        }
    }
}

impl ProjectData {
    /// Create an empty project with a fresh id.
    pub fn new() -> Self {
        Self {
            project_id: fresh_project_id(),
            ..Default::default()
        }
    }

    /// Next unique athlete id for this document.
    pub fn next_athlete_id(&self) -> u64 {
        self.roster.iter().map(|a| a.id).max().unwrap_or(0) + 1
    }

    /// Next unique annotation id for this document.
    pub fn next_annotation_id(&self) -> u64 {
        self.timestamps.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    pub fn athlete(&self, id: u64) -> Option<&Athlete> {
        self.roster.iter().find(|a| a.id == id)
    }

    pub fn annotation(&self, id: u64) -> Option<&Annotation> {
        self.timestamps.iter().find(|t| t.id == id)
    }

    pub fn annotation_mut(&mut self, id: u64) -> Option<&mut Annotation> {
        self.timestamps.iter_mut().find(|t| t.id == id)
    }

    /// Drop an athlete id from every annotation's tag set.
    ///
    /// Referential integrity between roster and tags is maintained by
    /// hand; callers must invoke this whenever an athlete disappears.
    pub fn untag_everywhere(&mut self, athlete_id: u64) {
        for annotation in &mut self.timestamps {
            annotation.tagged_athlete_ids.remove(athlete_id);
        }
    }
}

/// Generate a project id from the wall clock (milliseconds since epoch).
fn fresh_project_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1)
}
