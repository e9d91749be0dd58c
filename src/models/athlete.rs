// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Roster athlete records.
//!
//! An athlete is a free-text record identified by a numeric id that is
//! unique within the roster. Annotations reference athletes by id only.

use serde::{Deserialize, Serialize};

/// A single roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Athlete {
    pub id: u64,
    pub first: String,
    pub last: String,
    pub position: String,
    pub jersey: String,
    pub team: String,
}

impl Default for Athlete {
    fn default() -> Self {
        Self {
            id: 0,
            first: String::new(),
            last: String::new(),
            position: String::new(),
            jersey: String::new(),
            team: String::new(),
        }
    }
}

impl Athlete {
    /// Create a new athlete with the given id and fields.
    pub fn new(
        id: u64,
        first: impl Into<String>,
        last: impl Into<String>,
        position: impl Into<String>,
        jersey: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first: first.into(),
            last: last.into(),
            position: position.into(),
            jersey: jersey.into(),
            team: team.into(),
        }
    }

    /// Display label used in tag chips and timestamp search.
    pub fn label(&self) -> String {
        let name = format!("{} {}", self.first, self.last);
        let name = name.trim().to_string();
        if self.jersey.is_empty() {
            name
        } else {
            format!("{} #{}", name, self.jersey)
        }
    }

    /// Concatenated lowercase haystack for roster search.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.id, self.first, self.last, self.position, self.jersey, self.team
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_includes_jersey_when_present() {
        let a = Athlete::new(1, "Dana", "Cruz", "FW", "9", "Blue");
        assert_eq!(a.label(), "Dana Cruz #9");

        let b = Athlete::new(2, "Sam", "Ito", "", "", "");
        assert_eq!(b.label(), "Sam Ito");
    }

    #[test]
    fn test_search_text_is_lowercase_and_covers_all_fields() {
        let a = Athlete::new(7, "Dana", "Cruz", "FW", "9", "Blue");
        let text = a.search_text();
        for needle in ["7", "dana", "cruz", "fw", "9", "blue"] {
            assert!(text.contains(needle), "missing {needle} in {text}");
        }
    }
}
