// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Roster panel.
//!
//! Athlete list with search, the add-athlete form, and per-athlete
//! actions (tag on the selected timestamp, remove).

use crate::models::athlete::Athlete;

/// Buffers backing the add-athlete form.
#[derive(Default)]
pub struct RosterForm {
    pub first: String,
    pub last: String,
    pub position: String,
    pub jersey: String,
    pub team: String,
}

impl RosterForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Result of roster panel interaction.
pub enum RosterAction {
    None,
    Add,
    Remove(u64),
    Tag(u64),
    Clear,
}

/// Display the roster panel.
pub fn show(
    ui: &mut egui::Ui,
    roster: &[&Athlete],
    roster_is_empty: bool,
    query: &mut String,
    form: &mut RosterForm,
) -> RosterAction {
    let mut action = RosterAction::None;

    ui.heading("Roster");

    ui.horizontal(|ui| {
        ui.label("🔍");
        ui.add(egui::TextEdit::singleline(query).hint_text("Search athletes"));
    });

    ui.separator();

    egui::ScrollArea::vertical()
        .id_source("roster_list")
        .max_height(ui.available_height() - 190.0)
        .show(ui, |ui| {
            if roster_is_empty {
                ui.label(egui::RichText::new("No athletes yet").weak());
            } else if roster.is_empty() {
                ui.label(egui::RichText::new("No matches").weak());
            }
            for athlete in roster {
                ui.horizontal(|ui| {
                    let line = if athlete.position.is_empty() && athlete.team.is_empty() {
                        athlete.label()
                    } else {
                        format!(
                            "{} - {} {}",
                            athlete.label(),
                            athlete.position,
                            if athlete.team.is_empty() {
                                String::new()
                            } else {
                                format!("({})", athlete.team)
                            }
                        )
                    };
                    ui.label(line.trim());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").on_hover_text("Remove athlete").clicked() {
                            action = RosterAction::Remove(athlete.id);
                        }
                        if ui.small_button("Tag").on_hover_text("Tag on selected timestamp").clicked() {
                            action = RosterAction::Tag(athlete.id);
                        }
                    });
                });
            }
        });

    ui.separator();

    ui.label(egui::RichText::new("Add athlete").strong());
    egui::Grid::new("athlete_form").num_columns(2).show(ui, |ui| {
        ui.label("First:");
        ui.text_edit_singleline(&mut form.first);
        ui.end_row();
        ui.label("Last:");
        ui.text_edit_singleline(&mut form.last);
        ui.end_row();
        ui.label("Position:");
        ui.text_edit_singleline(&mut form.position);
        ui.end_row();
        ui.label("Jersey:");
        ui.text_edit_singleline(&mut form.jersey);
        ui.end_row();
        ui.label("Team:");
        ui.text_edit_singleline(&mut form.team);
        ui.end_row();
    });

    ui.horizontal(|ui| {
        if ui.button("Add").clicked() {
            action = RosterAction::Add;
        }
        if ui.button("Clear roster").clicked() {
            action = RosterAction::Clear;
        }
    });

    action
}
