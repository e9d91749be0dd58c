// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing toolbar.
//!
//! Tool selection (draw/erase), stroke color and size, the draw-mode
//! toggle, and clearing the selected coaching point's strokes.

use crate::models::annotation::{Color, Stroke, StrokeTool};
use crate::recorder::StrokeRecorder;

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    ClearDrawings,
    /// Draw mode was turned off mid-gesture; the ended stroke still
    /// needs committing.
    CommitStroke(Stroke),
}

/// Display the drawing toolbar.
pub fn show(ui: &mut egui::Ui, recorder: &mut StrokeRecorder) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let mut enabled = recorder.enabled();
        if ui.toggle_value(&mut enabled, "✏ Draw mode").changed() {
            if let Some(stroke) = recorder.set_enabled(enabled) {
                action = ToolbarAction::CommitStroke(stroke);
            }
        }

        ui.separator();

        if ui
            .selectable_label(recorder.tool() == StrokeTool::Draw, "Draw")
            .clicked()
        {
            recorder.set_tool(StrokeTool::Draw);
        }
        if ui
            .selectable_label(recorder.tool() == StrokeTool::Erase, "Erase")
            .clicked()
        {
            recorder.set_tool(StrokeTool::Erase);
        }

        ui.separator();

        let color = recorder.color();
        let mut rgb = [color.r, color.g, color.b];
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            recorder.set_color(Color::new(rgb[0], rgb[1], rgb[2]));
        }

        let mut size = recorder.size();
        if ui
            .add(egui::Slider::new(&mut size, 1.0..=24.0).text("size"))
            .changed()
        {
            recorder.set_size(size);
        }

        ui.separator();

        if ui.button("Clear drawings").clicked() {
            action = ToolbarAction::ClearDrawings;
        }

        ui.separator();

        let tool_text = if !recorder.enabled() {
            "Draw mode off: pointer input is ignored"
        } else {
            match recorder.tool() {
                StrokeTool::Draw => "Drag on the canvas to draw over the selected timestamp",
                StrokeTool::Erase => "Drag over strokes to erase them",
            }
        };
        ui.label(egui::RichText::new(tool_text).italics().weak());
    });

    action
}
