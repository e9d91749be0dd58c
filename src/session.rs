// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Session controller.
//!
//! Owns the in-memory project document, the current annotation
//! selection, and the user-facing status line. Every mutating operation
//! goes through here and persists the whole document before returning
//! (write-through), so a completed action survives a crash or restart.
//! Failures are never fatal: validation problems and bad imports become
//! status messages and the document stays at its last persisted state.

use crate::io::csv::{self, RosterRow};
use crate::io::serialization;
use crate::io::store::Store;
use crate::models::annotation::{Annotation, Stroke};
use crate::models::athlete::Athlete;
use crate::models::project::ProjectData;
use std::path::Path;

pub struct Session {
    doc: ProjectData,
    store: Store,
    selected: Option<u64>,
    status: Option<String>,
}

impl Session {
    /// Open a session backed by the given store, loading the last-saved
    /// document (or a fresh one).
    pub fn open(store: Store) -> Self {
        let doc = store.load();
        Self {
            doc,
            store,
            selected: None,
            status: None,
        }
    }

    pub fn doc(&self) -> &ProjectData {
        &self.doc
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Write the whole document through to the store.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.doc) {
            log::error!("Failed to persist project: {:#}", e);
            self.status = Some("Failed to save project".to_string());
        }
    }

    // =========================================================================
    // Project lifecycle
    // =========================================================================

    /// Start a new project: fresh id, timestamps and selection cleared,
    /// roster and video reference preserved.
    pub fn new_project(&mut self) {
        let mut fresh = ProjectData::new();
        // wall-clock ids can repeat within a millisecond
        if fresh.project_id <= self.doc.project_id {
            fresh.project_id = self.doc.project_id + 1;
        }
        self.doc.project_id = fresh.project_id;
        self.doc.timestamps.clear();
        self.selected = None;
        self.persist();
        self.set_status("Started a new project");
        log::info!("New project {}", self.doc.project_id);
    }

    /// Set the video URL, deriving the platform video id.
    ///
    /// Returns the extracted id if one was found; an unrecognized URL
    /// reports a message and leaves the previous video id in place.
    pub fn set_video_url(&mut self, url: &str) -> Option<String> {
        let id = crate::video::extract_video_id(url);
        if id.is_empty() {
            self.set_status("Could not find a video id in that URL");
            return None;
        }
        self.doc.video_url = url.trim().to_string();
        self.doc.video_id = id.clone();
        self.persist();
        self.set_status(format!("Video set to {}", id));
        Some(id)
    }

    /// Export the project document as pretty JSON.
    pub fn export_project(&mut self, path: &Path) {
        match serialization::export_json(&self.doc, path) {
            Ok(()) => self.set_status(format!("Project exported to {}", path.display())),
            Err(e) => {
                log::error!("Project export failed: {:#}", e);
                self.set_status("Project export failed");
            }
        }
    }

    /// Import a project document, replacing the current one wholesale.
    ///
    /// A file that fails validation leaves the current document (and its
    /// persisted copy) untouched.
    pub fn import_project(&mut self, path: &Path) {
        match serialization::import_json(path) {
            Ok(doc) => {
                self.doc = doc;
                self.selected = None;
                self.persist();
                self.set_status(format!(
                    "Project imported: {} athletes, {} timestamps",
                    self.doc.roster.len(),
                    self.doc.timestamps.len()
                ));
            }
            Err(e) => {
                log::warn!("Project import rejected: {:#}", e);
                self.set_status(format!("Import failed: {}", e));
            }
        }
    }

    // =========================================================================
    // Roster
    // =========================================================================

    /// Add an athlete. First and last name are required; everything else
    /// is free text. Returns false (with a status message) on rejection.
    pub fn add_athlete(
        &mut self,
        first: &str,
        last: &str,
        position: &str,
        jersey: &str,
        team: &str,
    ) -> bool {
        let first = first.trim();
        let last = last.trim();
        if first.is_empty() || last.is_empty() {
            self.set_status("First and last name are required");
            return false;
        }
        let id = self.doc.next_athlete_id();
        self.doc.roster.push(Athlete::new(
            id,
            first,
            last,
            position.trim(),
            jersey.trim(),
            team.trim(),
        ));
        self.persist();
        self.set_status(format!("Added {} {}", first, last));
        log::info!("Added athlete {} ({} {})", id, first, last);
        true
    }

    /// Remove an athlete and cascade the id out of every tag set.
    pub fn remove_athlete(&mut self, id: u64) {
        let before = self.doc.roster.len();
        self.doc.roster.retain(|a| a.id != id);
        if self.doc.roster.len() == before {
            return;
        }
        self.doc.untag_everywhere(id);
        self.persist();
        log::info!("Removed athlete {}", id);
    }

    /// Empty the roster, cascading tag removal across all annotations.
    pub fn clear_roster(&mut self) {
        let ids: Vec<u64> = self.doc.roster.iter().map(|a| a.id).collect();
        self.doc.roster.clear();
        for id in ids {
            self.doc.untag_everywhere(id);
        }
        self.persist();
        self.set_status("Roster cleared");
    }

    /// Roster filtered by a case-insensitive substring over all fields,
    /// ordered by team then last name.
    pub fn roster_view(&self, query: &str) -> Vec<&Athlete> {
        let needle = query.trim().to_lowercase();
        let mut view: Vec<&Athlete> = self
            .doc
            .roster
            .iter()
            .filter(|a| needle.is_empty() || a.search_text().contains(&needle))
            .collect();
        view.sort_by(|a, b| {
            (a.team.to_lowercase(), a.last.to_lowercase())
                .cmp(&(b.team.to_lowercase(), b.last.to_lowercase()))
        });
        view
    }

    /// Merge imported rows into the roster by id: a row whose id matches
    /// an existing athlete overwrites that record in place, anything
    /// else gets a fresh id and is appended.
    pub fn import_roster_rows(&mut self, rows: Vec<RosterRow>) {
        let mut added = 0usize;
        let mut updated = 0usize;
        for row in rows {
            let existing = row
                .id
                .and_then(|id| self.doc.roster.iter().position(|a| a.id == id));
            match existing {
                Some(index) => {
                    let id = self.doc.roster[index].id;
                    self.doc.roster[index] = Athlete::new(
                        id, row.first, row.last, row.position, row.jersey, row.team,
                    );
                    updated += 1;
                }
                None => {
                    let id = self.doc.next_athlete_id();
                    self.doc.roster.push(Athlete::new(
                        id, row.first, row.last, row.position, row.jersey, row.team,
                    ));
                    added += 1;
                }
            }
        }
        self.persist();
        self.set_status(format!(
            "Roster import: {} added, {} overwritten",
            added, updated
        ));
        log::info!("Roster import merged {} rows ({} overwrites)", added + updated, updated);
    }

    /// Import roster rows from a CSV file.
    pub fn import_roster_csv(&mut self, path: &Path) {
        match csv::import_file(path) {
            Ok(rows) => self.import_roster_rows(rows),
            Err(e) => {
                log::warn!("Roster CSV import rejected: {:#}", e);
                self.set_status(format!("CSV import failed: {}", e));
            }
        }
    }

    /// Export the roster to a CSV file.
    pub fn export_roster_csv(&mut self, path: &Path) {
        match csv::export_file(&self.doc.roster, path) {
            Ok(()) => self.set_status(format!("Roster exported to {}", path.display())),
            Err(e) => {
                log::error!("Roster CSV export failed: {:#}", e);
                self.set_status("CSV export failed");
            }
        }
    }

    // =========================================================================
    // Timestamps
    // =========================================================================

    /// Drop a coaching point at the current playback position and select
    /// it. Time is floored to whole seconds.
    pub fn add_timestamp_at(&mut self, current_seconds: f64) -> u64 {
        let time = if current_seconds.is_finite() && current_seconds > 0.0 {
            current_seconds.floor() as u32
        } else {
            0
        };
        let id = self.doc.next_annotation_id();
        self.doc.timestamps.push(Annotation::new(id, time));
        self.selected = Some(id);
        self.persist();
        self.set_status(format!(
            "Added coaching point at {}",
            crate::util::format::format_time(time as f64)
        ));
        log::info!("Added timestamp {} at {}s", id, time);
        id
    }

    /// Select an annotation. The tag panel and the drawing canvas both
    /// re-derive their contents from this pointer, so selection swaps
    /// the visible stroke buffer in the same call.
    pub fn select_timestamp(&mut self, id: u64) {
        if self.doc.annotation(id).is_some() {
            self.selected = Some(id);
        }
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected
    }

    pub fn selected_annotation(&self) -> Option<&Annotation> {
        self.selected.and_then(|id| self.doc.annotation(id))
    }

    /// Strokes of the selected annotation; the canvas replays these.
    pub fn selected_drawings(&self) -> &[Stroke] {
        self.selected_annotation()
            .map(|a| a.drawings.as_slice())
            .unwrap_or(&[])
    }

    /// Overwrite an annotation's title and description verbatim.
    pub fn edit_timestamp(&mut self, id: u64, title: &str, description: &str) {
        let Some(annotation) = self.doc.annotation_mut(id) else {
            return;
        };
        annotation.title = title.to_string();
        annotation.description = description.to_string();
        self.persist();
    }

    /// Delete an annotation, clearing the selection if it pointed here.
    pub fn delete_timestamp(&mut self, id: u64) {
        let before = self.doc.timestamps.len();
        self.doc.timestamps.retain(|t| t.id != id);
        if self.doc.timestamps.len() == before {
            return;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.persist();
        log::info!("Deleted timestamp {}", id);
    }

    /// Timestamps filtered by substring over title, description, and
    /// tagged athlete labels; always ordered by time ascending.
    pub fn timestamps_view(&self, query: &str) -> Vec<&Annotation> {
        let needle = query.trim().to_lowercase();
        let mut view: Vec<&Annotation> = self
            .doc
            .timestamps
            .iter()
            .filter(|t| {
                if needle.is_empty() {
                    return true;
                }
                let mut haystack = format!("{} {}", t.title, t.description);
                for athlete_id in t.tagged_athlete_ids.iter() {
                    if let Some(athlete) = self.doc.athlete(athlete_id) {
                        haystack.push(' ');
                        haystack.push_str(&athlete.label());
                    }
                }
                haystack.to_lowercase().contains(&needle)
            })
            .collect();
        view.sort_by_key(|t| t.time);
        view
    }

    // =========================================================================
    // Tagging (scoped to the selected annotation)
    // =========================================================================

    /// Tag an athlete on the selected annotation. Set semantics: tagging
    /// twice is a no-op.
    pub fn add_tag(&mut self, athlete_id: u64) {
        let Some(selected) = self.selected else {
            self.set_status("Select a timestamp first");
            return;
        };
        if self.doc.athlete(athlete_id).is_none() {
            return;
        }
        let Some(annotation) = self.doc.annotation_mut(selected) else {
            return;
        };
        if annotation.tagged_athlete_ids.insert(athlete_id) {
            self.persist();
        }
    }

    /// Untag an athlete from the selected annotation.
    pub fn remove_tag(&mut self, athlete_id: u64) {
        let Some(selected) = self.selected else {
            self.set_status("Select a timestamp first");
            return;
        };
        let Some(annotation) = self.doc.annotation_mut(selected) else {
            return;
        };
        if annotation.tagged_athlete_ids.remove(athlete_id) {
            self.persist();
        }
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Next stroke id within the selected annotation.
    pub fn next_stroke_id(&self) -> u64 {
        self.selected_annotation()
            .map(|a| a.max_stroke_id() + 1)
            .unwrap_or(1)
    }

    /// Append a committed stroke to the selected annotation's drawing
    /// list. Returns false when nothing is selected.
    pub fn commit_stroke(&mut self, stroke: Stroke) -> bool {
        let Some(selected) = self.selected else {
            return false;
        };
        let Some(annotation) = self.doc.annotation_mut(selected) else {
            return false;
        };
        annotation.drawings.push(stroke);
        self.persist();
        true
    }

    /// Remove every stroke from the selected annotation.
    pub fn clear_drawings(&mut self) {
        let Some(selected) = self.selected else {
            self.set_status("Select a timestamp first");
            return;
        };
        let Some(annotation) = self.doc.annotation_mut(selected) else {
            return;
        };
        if annotation.drawings.is_empty() {
            return;
        }
        annotation.drawings.clear();
        self.persist();
        self.set_status("Drawings cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::{Color, Point, StrokeTool};

    fn test_session(name: &str) -> Session {
        let path = std::env::temp_dir().join(format!(
            "filmroom-session-test-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        Session::open(Store::new(path))
    }

    fn stroke_with_points(id: u64, points: &[(f64, f64)]) -> Stroke {
        let mut stroke = Stroke::new(id, StrokeTool::Draw, Color::default(), 4.0);
        stroke.points = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        stroke
    }

    #[test]
    fn test_add_athlete_grows_roster_with_unique_id() {
        let mut session = test_session("add-athlete");
        assert!(session.add_athlete("Dana", "Cruz", "FW", "9", "Blue"));
        assert!(session.add_athlete("Sam", "Ito", "D", "4", "Red"));
        assert_eq!(session.doc().roster.len(), 2);
        let ids: Vec<u64> = session.doc().roster.iter().map(|a| a.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_add_athlete_requires_first_and_last() {
        let mut session = test_session("add-validation");
        assert!(!session.add_athlete("", "Cruz", "", "", ""));
        assert!(!session.add_athlete("Dana", "  ", "", "", ""));
        assert!(session.doc().roster.is_empty());
        assert_eq!(session.status(), Some("First and last name are required"));
    }

    #[test]
    fn test_remove_athlete_cascades_tags() {
        let mut session = test_session("cascade");
        session.add_athlete("Dana", "Cruz", "", "", "");
        let athlete_id = session.doc().roster[0].id;
        session.add_timestamp_at(10.0);
        session.add_timestamp_at(20.0);
        let first = session.doc().timestamps[0].id;
        session.select_timestamp(first);
        session.add_tag(athlete_id);
        let second = session.doc().timestamps[1].id;
        session.select_timestamp(second);
        session.add_tag(athlete_id);

        session.remove_athlete(athlete_id);
        for annotation in &session.doc().timestamps {
            assert!(!annotation.tagged_athlete_ids.contains(athlete_id));
        }
    }

    #[test]
    fn test_clear_roster_cascades_tags() {
        let mut session = test_session("clear-roster");
        session.add_athlete("Dana", "Cruz", "", "", "");
        session.add_athlete("Sam", "Ito", "", "", "");
        session.add_timestamp_at(5.0);
        let a = session.doc().roster[0].id;
        let b = session.doc().roster[1].id;
        session.add_tag(a);
        session.add_tag(b);

        session.clear_roster();
        assert!(session.doc().roster.is_empty());
        assert!(session.doc().timestamps[0].tagged_athlete_ids.is_empty());
    }

    #[test]
    fn test_roster_view_filters_and_sorts() {
        let mut session = test_session("roster-view");
        session.add_athlete("Zoe", "Adams", "FW", "11", "Blue");
        session.add_athlete("Amy", "Young", "GK", "1", "Amber");
        session.add_athlete("Bea", "Brown", "D", "5", "Blue");

        let all = session.roster_view("");
        let order: Vec<&str> = all.iter().map(|a| a.last.as_str()).collect();
        // team ascending, then last name ascending
        assert_eq!(order, vec!["Young", "Adams", "Brown"]);

        let filtered = session.roster_view("GK");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].last, "Young");

        // case-insensitive, matches ids too
        let by_id = session.roster_view(&session.doc().roster[0].id.to_string());
        assert!(!by_id.is_empty());
    }

    #[test]
    fn test_csv_round_trip_is_noop_on_roster() {
        let mut session = test_session("csv-roundtrip");
        session.add_athlete("Dana", "Cruz", "FW", "9", "Blue");
        session.add_athlete("Sam", "Ito", "D, wide", "4", "Red");
        let before = session.doc().roster.clone();

        let encoded = crate::io::csv::encode(&session.doc().roster);
        let rows = crate::io::csv::decode(&encoded).unwrap();
        session.import_roster_rows(rows);

        assert_eq!(session.doc().roster, before);
    }

    #[test]
    fn test_import_rows_merges_by_id_and_appends_fresh() {
        let mut session = test_session("csv-merge");
        session.add_athlete("Dana", "Cruz", "FW", "9", "Blue");
        let existing_id = session.doc().roster[0].id;

        let rows = vec![
            RosterRow {
                id: Some(existing_id),
                first: "Dana".into(),
                last: "Cruz-Vega".into(),
                position: "MF".into(),
                jersey: "9".into(),
                team: "Blue".into(),
            },
            RosterRow {
                id: None,
                first: "Sam".into(),
                last: "Ito".into(),
                ..Default::default()
            },
        ];
        session.import_roster_rows(rows);

        assert_eq!(session.doc().roster.len(), 2);
        let overwritten = session.doc().athlete(existing_id).unwrap();
        assert_eq!(overwritten.last, "Cruz-Vega");
        assert_eq!(overwritten.position, "MF");
    }

    #[test]
    fn test_json_round_trip_reproduces_document() {
        let mut session = test_session("json-roundtrip");
        session.add_athlete("Dana", "Cruz", "FW", "9", "Blue");
        session.add_timestamp_at(65.0);
        session.add_tag(session.doc().roster[0].id);
        session.commit_stroke(stroke_with_points(1, &[(0.1, 0.1), (0.9, 0.9)]));
        let before = session.doc().clone();

        let path = std::env::temp_dir().join(format!(
            "filmroom-session-export-{}.json",
            std::process::id()
        ));
        session.export_project(&path);
        session.new_project();
        session.import_project(&path);

        assert_eq!(*session.doc(), before);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_failed_import_leaves_document_untouched() {
        let mut session = test_session("bad-import");
        session.add_athlete("Dana", "Cruz", "", "", "");
        let before = session.doc().clone();

        let path = std::env::temp_dir().join(format!(
            "filmroom-session-bad-import-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"roster": {}}"#).unwrap();
        session.import_project(&path);

        assert_eq!(*session.doc(), before);
        assert!(session.status().unwrap().contains("Import failed"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_add_timestamp_floors_time_and_selects() {
        let mut session = test_session("add-timestamp");
        let id = session.add_timestamp_at(65.9);
        assert_eq!(session.selected_id(), Some(id));
        let annotation = session.selected_annotation().unwrap();
        assert_eq!(annotation.time, 65);
        assert_eq!(annotation.title, "New coaching point");

        session.add_timestamp_at(-3.0);
        assert_eq!(session.selected_annotation().unwrap().time, 0);
    }

    #[test]
    fn test_edit_overwrites_verbatim() {
        let mut session = test_session("edit");
        let id = session.add_timestamp_at(10.0);
        session.edit_timestamp(id, "Press trigger", "High line on the far side");
        let annotation = session.doc().annotation(id).unwrap();
        assert_eq!(annotation.title, "Press trigger");
        assert_eq!(annotation.description, "High line on the far side");

        session.edit_timestamp(id, "", "");
        let annotation = session.doc().annotation(id).unwrap();
        assert!(annotation.title.is_empty());
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut session = test_session("delete");
        let a = session.add_timestamp_at(10.0);
        let b = session.add_timestamp_at(20.0);
        session.select_timestamp(a);
        session.delete_timestamp(a);
        assert_eq!(session.selected_id(), None);
        assert_eq!(session.doc().timestamps.len(), 1);
        assert_eq!(session.doc().timestamps[0].id, b);
    }

    #[test]
    fn test_timestamps_view_sorted_by_time_and_matches_tag_labels() {
        let mut session = test_session("ts-view");
        session.add_athlete("Dana", "Cruz", "FW", "9", "Blue");
        let athlete_id = session.doc().roster[0].id;
        let late = session.add_timestamp_at(90.0);
        let early = session.add_timestamp_at(15.0);
        session.select_timestamp(early);
        session.add_tag(athlete_id);
        session.edit_timestamp(late, "Corner setup", "");

        let all = session.timestamps_view("");
        assert_eq!(all[0].id, early);
        assert_eq!(all[1].id, late);

        // matches athlete label, not just title/description
        let by_tag = session.timestamps_view("cruz");
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].id, early);

        let by_title = session.timestamps_view("corner");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, late);
    }

    #[test]
    fn test_tagging_without_selection_reports() {
        let mut session = test_session("tag-guard");
        session.add_athlete("Dana", "Cruz", "", "", "");
        let athlete_id = session.doc().roster[0].id;
        session.add_tag(athlete_id);
        assert_eq!(session.status(), Some("Select a timestamp first"));
    }

    #[test]
    fn test_tagging_is_set_semantics() {
        let mut session = test_session("tag-set");
        session.add_athlete("Dana", "Cruz", "", "", "");
        let athlete_id = session.doc().roster[0].id;
        session.add_timestamp_at(5.0);
        session.add_tag(athlete_id);
        session.add_tag(athlete_id);
        assert_eq!(session.selected_annotation().unwrap().tagged_athlete_ids.len(), 1);
        session.remove_tag(athlete_id);
        assert!(session.selected_annotation().unwrap().tagged_athlete_ids.is_empty());
    }

    #[test]
    fn test_commit_stroke_requires_selection() {
        let mut session = test_session("stroke-guard");
        assert!(!session.commit_stroke(stroke_with_points(1, &[(0.1, 0.1), (0.5, 0.5)])));
        session.add_timestamp_at(5.0);
        assert!(session.commit_stroke(stroke_with_points(1, &[(0.1, 0.1), (0.5, 0.5)])));
        assert_eq!(session.selected_drawings().len(), 1);
    }

    #[test]
    fn test_selection_swaps_drawing_buffer_not_union() {
        let mut session = test_session("buffer-swap");
        let a = session.add_timestamp_at(10.0);
        session.commit_stroke(stroke_with_points(1, &[(0.1, 0.1), (0.2, 0.2)]));
        let b = session.add_timestamp_at(20.0);
        session.commit_stroke(stroke_with_points(1, &[(0.8, 0.8), (0.9, 0.9)]));

        session.select_timestamp(a);
        assert_eq!(session.selected_drawings().len(), 1);
        assert_eq!(session.selected_drawings()[0].points[0].x, 0.1);

        session.select_timestamp(b);
        assert_eq!(session.selected_drawings().len(), 1);
        assert_eq!(session.selected_drawings()[0].points[0].x, 0.8);
    }

    #[test]
    fn test_new_project_preserves_roster_and_video() {
        let mut session = test_session("new-project");
        session.add_athlete("Dana", "Cruz", "", "", "");
        session.set_video_url("https://youtu.be/abc123");
        session.add_timestamp_at(30.0);
        let old_id = session.doc().project_id;

        session.new_project();
        assert_eq!(session.doc().roster.len(), 1);
        assert_eq!(session.doc().video_id, "abc123");
        assert!(session.doc().timestamps.is_empty());
        assert_eq!(session.selected_id(), None);
        assert_ne!(session.doc().project_id, old_id);
    }

    #[test]
    fn test_set_video_url_rejects_unrecognized() {
        let mut session = test_session("bad-url");
        session.set_video_url("https://youtu.be/abc123");
        assert_eq!(session.set_video_url("https://example.com/nope"), None);
        // previous reference stays
        assert_eq!(session.doc().video_id, "abc123");
    }

    #[test]
    fn test_mutations_are_written_through() {
        let mut session = test_session("write-through");
        session.add_athlete("Dana", "Cruz", "", "", "");
        session.add_timestamp_at(12.0);

        // a second session over the same store sees every completed action
        let reopened = Session::open(Store::new(session.store.path().to_path_buf()));
        assert_eq!(reopened.doc().roster.len(), 1);
        assert_eq!(reopened.doc().timestamps.len(), 1);
    }

    #[test]
    fn test_clear_drawings() {
        let mut session = test_session("clear-drawings");
        session.add_timestamp_at(5.0);
        session.commit_stroke(stroke_with_points(1, &[(0.1, 0.1), (0.2, 0.2)]));
        session.clear_drawings();
        assert!(session.selected_drawings().is_empty());
    }

    #[test]
    fn test_next_stroke_id_is_per_annotation() {
        let mut session = test_session("stroke-ids");
        session.add_timestamp_at(5.0);
        assert_eq!(session.next_stroke_id(), 1);
        session.commit_stroke(stroke_with_points(1, &[(0.1, 0.1), (0.2, 0.2)]));
        assert_eq!(session.next_stroke_id(), 2);
    }
}
