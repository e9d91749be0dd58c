// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Timestamp panel.
//!
//! The filtered, time-ordered list of coaching points, the editor for
//! the selected one, and its athlete tag chips.

use crate::session::Session;
use crate::util::format::format_time;

/// Buffers backing the timestamp editor.
#[derive(Default)]
pub struct EditBuffer {
    pub title: String,
    pub description: String,
}

impl EditBuffer {
    /// Reload the buffers from the selected annotation.
    pub fn sync_from(&mut self, session: &Session) {
        match session.selected_annotation() {
            Some(annotation) => {
                self.title = annotation.title.clone();
                self.description = annotation.description.clone();
            }
            None => {
                self.title.clear();
                self.description.clear();
            }
        }
    }
}

/// Result of timestamp panel interaction.
pub enum TimestampAction {
    None,
    Select(u64),
    Delete(u64),
    SaveEdit,
    AddTag(u64),
    RemoveTag(u64),
}

/// Display the timestamp panel.
pub fn show(
    ui: &mut egui::Ui,
    session: &Session,
    query: &mut String,
    edit: &mut EditBuffer,
) -> TimestampAction {
    let mut action = TimestampAction::None;

    ui.heading("Timestamps");

    ui.horizontal(|ui| {
        ui.label("🔍");
        ui.add(egui::TextEdit::singleline(query).hint_text("Search notes and tags"));
    });

    ui.separator();

    let selected = session.selected_id();
    egui::ScrollArea::vertical()
        .id_source("timestamp_list")
        .max_height(ui.available_height() * 0.45)
        .show(ui, |ui| {
            let view = session.timestamps_view(query);
            if view.is_empty() {
                ui.label(egui::RichText::new("No coaching points").weak());
            }
            for annotation in view {
                ui.horizontal(|ui| {
                    let label = format!(
                        "{}  {}",
                        format_time(annotation.time as f64),
                        annotation.title
                    );
                    if ui
                        .selectable_label(selected == Some(annotation.id), label)
                        .clicked()
                    {
                        action = TimestampAction::Select(annotation.id);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").on_hover_text("Delete").clicked() {
                            action = TimestampAction::Delete(annotation.id);
                        }
                    });
                });
            }
        });

    ui.separator();

    let Some(annotation) = session.selected_annotation() else {
        ui.label(egui::RichText::new("Select a timestamp to edit it").weak());
        return action;
    };

    ui.label(
        egui::RichText::new(format!("Editing point at {}", format_time(annotation.time as f64)))
            .strong(),
    );
    ui.label("Title:");
    ui.text_edit_singleline(&mut edit.title);
    ui.label("Description:");
    ui.add(egui::TextEdit::multiline(&mut edit.description).desired_rows(3));
    if ui.button("Save").clicked() {
        action = TimestampAction::SaveEdit;
    }

    ui.separator();

    ui.label(
        egui::RichText::new(format!(
            "Tagged athletes ({})",
            annotation.tagged_athlete_ids.len()
        ))
        .strong(),
    );
    if annotation.tagged_athlete_ids.is_empty() {
        ui.label(egui::RichText::new("None yet").weak());
    }
    for athlete_id in annotation.tagged_athlete_ids.iter() {
        // tags reference roster entries by id only; a label is always
        // resolvable because removal cascades
        let label = session
            .doc()
            .athlete(athlete_id)
            .map(|a| a.label())
            .unwrap_or_else(|| format!("#{}", athlete_id));
        ui.horizontal(|ui| {
            ui.label(label);
            if ui.small_button("✕").on_hover_text("Remove tag").clicked() {
                action = TimestampAction::RemoveTag(athlete_id);
            }
        });
    }

    let untagged: Vec<_> = session
        .doc()
        .roster
        .iter()
        .filter(|a| !annotation.tagged_athlete_ids.contains(a.id))
        .collect();
    if untagged.is_empty() {
        if session.doc().roster.is_empty() {
            ui.label(egui::RichText::new("Add athletes to the roster to tag them").weak());
        }
    } else {
        ui.menu_button("➕ Tag athlete", |ui| {
            for athlete in untagged {
                if ui.button(athlete.label()).clicked() {
                    action = TimestampAction::AddTag(athlete.id);
                    ui.close_menu();
                }
            }
        });
    }

    action
}
