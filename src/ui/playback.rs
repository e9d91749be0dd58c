// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Playback transport bar.
//!
//! Video URL entry plus play/pause/seek/mute controls and the
//! add-timestamp button. The displayed position comes from polling the
//! video facade once per frame.

use crate::util::format::format_time;

/// Result of transport bar interaction.
pub enum PlaybackAction {
    None,
    LoadUrl,
    Play,
    Pause,
    SeekBy(f64),
    ToggleMute,
    AddTimestamp,
}

/// Display the transport bar.
pub fn show(
    ui: &mut egui::Ui,
    url_buffer: &mut String,
    current_time: f64,
    muted: bool,
    ready: bool,
) -> PlaybackAction {
    let mut action = PlaybackAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;

        ui.label("Video URL:");
        let response = ui.add(
            egui::TextEdit::singleline(url_buffer)
                .hint_text("https://youtu.be/...")
                .desired_width(260.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || submitted {
            action = PlaybackAction::LoadUrl;
        }

        ui.separator();

        ui.add_enabled_ui(ready, |ui| {
            if ui.button("⏪ 5s").clicked() {
                action = PlaybackAction::SeekBy(-5.0);
            }
            if ui.button("▶").clicked() {
                action = PlaybackAction::Play;
            }
            if ui.button("⏸").clicked() {
                action = PlaybackAction::Pause;
            }
            if ui.button("5s ⏩").clicked() {
                action = PlaybackAction::SeekBy(5.0);
            }
            let mute_label = if muted { "🔇" } else { "🔊" };
            if ui.button(mute_label).clicked() {
                action = PlaybackAction::ToggleMute;
            }
        });

        ui.label(egui::RichText::new(format_time(current_time)).monospace());

        ui.separator();

        if ui.button("➕ Timestamp here").clicked() {
            action = PlaybackAction::AddTimestamp;
        }
    });

    action
}
