// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Telestration canvas.
//!
//! Replays every committed stroke of the selected coaching point, plus
//! the gesture in progress, onto a painter each frame (full
//! clear-and-replay; stroke counts are small). Pointer input is reported
//! back as actions so the app can drive the stroke recorder.

use crate::models::annotation::{Point, Stroke, StrokeTool};
use crate::util::geometry;

const BACKGROUND: egui::Color32 = egui::Color32::from_gray(24);

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    /// Pointer pressed at a normalized position.
    Pressed(Point),
    /// Pointer moved while pressed.
    Moved(Point),
    /// Pointer released or left the canvas mid-gesture.
    Released,
}

/// Display the canvas and report pointer gestures.
pub fn show(
    ui: &mut egui::Ui,
    drawings: &[Stroke],
    in_progress: Option<&Stroke>,
    draw_mode: bool,
    has_selection: bool,
    gesture_active: bool,
) -> CanvasAction {
    let available = ui.available_size();
    let (response, painter) = ui.allocate_painter(available, egui::Sense::click_and_drag());
    let rect = response.rect;

    painter.rect_filled(rect, 4.0, BACKGROUND);

    for stroke in drawings {
        draw_stroke(&painter, stroke, &rect);
    }
    if let Some(stroke) = in_progress {
        draw_stroke(&painter, stroke, &rect);
    }

    if !has_selection {
        hint(&painter, &rect, "Select a timestamp to draw on its frame");
    } else if !draw_mode && drawings.is_empty() {
        hint(&painter, &rect, "Enable draw mode to telestrate");
    }

    if !draw_mode {
        return CanvasAction::None;
    }

    let pointer_down = response.is_pointer_button_down_on();
    if pointer_down {
        if let Some(pos) = response.interact_pointer_pos() {
            let point = geometry::normalize_coordinates(
                (pos.x - rect.min.x) as f64,
                (pos.y - rect.min.y) as f64,
                rect.width() as f64,
                rect.height() as f64,
            );
            return if gesture_active {
                CanvasAction::Moved(point)
            } else {
                CanvasAction::Pressed(point)
            };
        }
    } else if gesture_active {
        // release and pointer-cancel both end the gesture
        return CanvasAction::Released;
    }

    CanvasAction::None
}

/// Replay one stroke into the canvas rect.
fn draw_stroke(painter: &egui::Painter, stroke: &Stroke, rect: &egui::Rect) {
    if !stroke.is_renderable() {
        return;
    }

    let screen_points: Vec<egui::Pos2> = stroke
        .points
        .iter()
        .map(|p| {
            let (x, y) =
                geometry::denormalize_coordinates(p, rect.width() as f64, rect.height() as f64);
            egui::pos2(rect.min.x + x as f32, rect.min.y + y as f32)
        })
        .collect();

    // erase paints in the background color, the immediate-mode stand-in
    // for an inverse-composite blend
    let color = match stroke.tool {
        StrokeTool::Draw => egui::Color32::from_rgb(stroke.color.r, stroke.color.g, stroke.color.b),
        StrokeTool::Erase => BACKGROUND,
    };
    let width = match stroke.tool {
        StrokeTool::Draw => stroke.size,
        StrokeTool::Erase => stroke.size * 3.0,
    };

    painter.add(egui::Shape::line(
        screen_points,
        egui::Stroke::new(width, color),
    ));
}

fn hint(painter: &egui::Painter, rect: &egui::Rect, text: &str) {
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(14.0),
        egui::Color32::from_gray(140),
    );
}
