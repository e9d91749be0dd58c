// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! Coordinates the session controller, the stroke recorder, and the
//! video facade, routing actions reported by the UI panels. All
//! mutation runs synchronously inside one update pass; the session
//! persists the document before each action returns.

use crate::io::store::Store;
use crate::recorder::StrokeRecorder;
use crate::session::Session;
use crate::ui::{canvas, playback, roster, timestamps, toolbar};
use crate::video::{ClockPlayer, VideoController};
use std::time::Duration;

/// Main application state.
pub struct FilmroomApp {
    session: Session,
    recorder: StrokeRecorder,
    video: VideoController<ClockPlayer>,

    /// Video URL entry buffer
    url_buffer: String,
    /// Roster search query
    roster_query: String,
    /// Add-athlete form buffers
    roster_form: roster::RosterForm,
    /// Timestamp search query
    timestamp_query: String,
    /// Timestamp editor buffers
    edit_buffer: timestamps::EditBuffer,
}

impl Default for FilmroomApp {
    fn default() -> Self {
        Self::new()
    }
}

impl FilmroomApp {
    /// Create the application, loading the last-saved project.
    pub fn new() -> Self {
        let session = Session::open(Store::new(Store::default_path()));
        let mut video = VideoController::new(ClockPlayer::new());

        // resume the saved video; queued until the player reports ready
        let url_buffer = session.doc().video_url.clone();
        let video_id = session.doc().video_id.clone();
        if !video_id.is_empty() {
            video.request_load(&video_id);
        }

        Self {
            session,
            recorder: StrokeRecorder::new(),
            video,
            url_buffer,
            roster_query: String::new(),
            roster_form: roster::RosterForm::default(),
            timestamp_query: String::new(),
            edit_buffer: timestamps::EditBuffer::default(),
        }
    }

    /// Selection changed: drop any gesture in progress and reload the
    /// editor buffers.
    fn refresh_selection_views(&mut self) {
        self.recorder.cancel();
        self.edit_buffer.sync_from(&self.session);
    }

    fn handle_playback(&mut self, action: playback::PlaybackAction) {
        match action {
            playback::PlaybackAction::LoadUrl => {
                let url = self.url_buffer.clone();
                if let Some(id) = self.session.set_video_url(&url) {
                    self.video.request_load(&id);
                }
            }
            playback::PlaybackAction::Play => self.video.play(),
            playback::PlaybackAction::Pause => self.video.pause(),
            playback::PlaybackAction::SeekBy(delta) => {
                let target = self.video.current_time() + delta;
                self.video.seek(target);
            }
            playback::PlaybackAction::ToggleMute => self.video.toggle_mute(),
            playback::PlaybackAction::AddTimestamp => {
                self.session.add_timestamp_at(self.video.current_time());
                self.refresh_selection_views();
            }
            playback::PlaybackAction::None => {}
        }
    }

    fn handle_roster(&mut self, action: roster::RosterAction) {
        match action {
            roster::RosterAction::Add => {
                let first = self.roster_form.first.clone();
                let last = self.roster_form.last.clone();
                let position = self.roster_form.position.clone();
                let jersey = self.roster_form.jersey.clone();
                let team = self.roster_form.team.clone();
                if self.session.add_athlete(&first, &last, &position, &jersey, &team) {
                    self.roster_form.clear();
                }
            }
            roster::RosterAction::Remove(id) => self.session.remove_athlete(id),
            roster::RosterAction::Tag(id) => self.session.add_tag(id),
            roster::RosterAction::Clear => self.session.clear_roster(),
            roster::RosterAction::None => {}
        }
    }

    fn handle_timestamps(&mut self, action: timestamps::TimestampAction) {
        match action {
            timestamps::TimestampAction::Select(id) => {
                self.session.select_timestamp(id);
                self.refresh_selection_views();
            }
            timestamps::TimestampAction::Delete(id) => {
                let was_selected = self.session.selected_id() == Some(id);
                self.session.delete_timestamp(id);
                if was_selected {
                    self.refresh_selection_views();
                }
            }
            timestamps::TimestampAction::SaveEdit => {
                if let Some(id) = self.session.selected_id() {
                    let title = self.edit_buffer.title.clone();
                    let description = self.edit_buffer.description.clone();
                    self.session.edit_timestamp(id, &title, &description);
                    self.session.set_status("Timestamp saved");
                }
            }
            timestamps::TimestampAction::AddTag(id) => self.session.add_tag(id),
            timestamps::TimestampAction::RemoveTag(id) => self.session.remove_tag(id),
            timestamps::TimestampAction::None => {}
        }
    }

    fn handle_canvas(&mut self, action: canvas::CanvasAction) {
        match action {
            canvas::CanvasAction::Pressed(point) => {
                let has_selection = self.session.selected_id().is_some();
                self.recorder
                    .begin(self.session.next_stroke_id(), point, has_selection);
            }
            canvas::CanvasAction::Moved(point) => self.recorder.append(point),
            canvas::CanvasAction::Released => {
                if let Some(stroke) = self.recorder.finish() {
                    self.session.commit_stroke(stroke);
                }
            }
            canvas::CanvasAction::None => {}
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New Project").clicked() {
                    self.session.new_project();
                    self.refresh_selection_views();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Import Project...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Project", &["json"])
                        .pick_file()
                    {
                        self.session.import_project(&path);
                        self.refresh_selection_views();
                        self.url_buffer = self.session.doc().video_url.clone();
                        let video_id = self.session.doc().video_id.clone();
                        if !video_id.is_empty() {
                            self.video.request_load(&video_id);
                        }
                    }
                    ui.close_menu();
                }
                if ui.button("Export Project...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Project", &["json"])
                        .set_file_name("filmroom-project.json")
                        .save_file()
                    {
                        self.session.export_project(&path);
                    }
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Import Roster CSV...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV", &["csv"])
                        .pick_file()
                    {
                        self.session.import_roster_csv(&path);
                    }
                    ui.close_menu();
                }
                if ui.button("Export Roster CSV...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV", &["csv"])
                        .set_file_name("roster.csv")
                        .save_file()
                    {
                        self.session.export_roster_csv(&path);
                    }
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }
}

impl eframe::App for FilmroomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // poll the player; failures become status messages, never panics
        if let Some(message) = self.video.poll() {
            self.session.set_status(message);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.show_menu(ui, ctx);
        });

        // Transport bar
        let playback_action = egui::TopBottomPanel::top("transport")
            .show(ctx, |ui| {
                playback::show(
                    ui,
                    &mut self.url_buffer,
                    self.video.current_time(),
                    self.video.muted(),
                    self.video.is_ready(),
                )
            })
            .inner;
        self.handle_playback(playback_action);

        // Drawing toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, &mut self.recorder))
            .inner;
        match toolbar_action {
            toolbar::ToolbarAction::ClearDrawings => self.session.clear_drawings(),
            toolbar::ToolbarAction::CommitStroke(stroke) => {
                self.session.commit_stroke(stroke);
            }
            toolbar::ToolbarAction::None => {}
        }

        // Roster panel (right side)
        let roster_action = egui::SidePanel::right("roster")
            .default_width(280.0)
            .show(ctx, |ui| {
                let view = self.session.roster_view(&self.roster_query);
                roster::show(
                    ui,
                    &view,
                    self.session.doc().roster.is_empty(),
                    &mut self.roster_query,
                    &mut self.roster_form,
                )
            })
            .inner;
        self.handle_roster(roster_action);

        // Timestamp panel (left side)
        let timestamp_action = egui::SidePanel::left("timestamps")
            .default_width(300.0)
            .show(ctx, |ui| {
                timestamps::show(
                    ui,
                    &self.session,
                    &mut self.timestamp_query,
                    &mut self.edit_buffer,
                )
            })
            .inner;
        self.handle_timestamps(timestamp_action);

        // Status strip
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.session.status().unwrap_or("Ready"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} athletes · {} timestamps",
                        self.session.doc().roster.len(),
                        self.session.doc().timestamps.len()
                    ));
                });
            });
        });

        // Telestration canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(
                    ui,
                    self.session.selected_drawings(),
                    self.recorder.in_progress(),
                    self.recorder.enabled(),
                    self.session.selected_id().is_some(),
                    self.recorder.in_progress().is_some(),
                )
            })
            .inner;
        self.handle_canvas(canvas_action);

        // coarse timer for the playback clock readout
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
