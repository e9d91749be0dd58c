// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Freehand stroke recorder.
//!
//! A pointer gesture is a three-state machine: idle, then active from
//! pointer-down until pointer-up or pointer-cancel, both of which commit
//! the accumulated stroke. Turning draw mode off mid-gesture ends the
//! gesture the same way a pointer-cancel does: the stroke is handed back
//! for committing. A started gesture is only ever dropped by an explicit
//! cancel when the selection changes under it. Pointer-down is ignored
//! unless drawing mode is enabled and the caller has a selected
//! annotation to scope the stroke to.

use crate::models::annotation::{Color, Point, Stroke, StrokeTool};

/// Records one pointer gesture at a time into a [`Stroke`].
pub struct StrokeRecorder {
    enabled: bool,
    tool: StrokeTool,
    color: Color,
    size: f32,
    active: Option<Stroke>,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self {
            enabled: false,
            tool: StrokeTool::Draw,
            color: Color::default(),
            size: 4.0,
            active: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle drawing mode. Disabling mid-gesture ends the gesture like
    /// a pointer-cancel: the accumulated stroke is returned so the
    /// caller can commit it.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<Stroke> {
        self.enabled = enabled;
        if enabled {
            None
        } else {
            self.active.take()
        }
    }

    pub fn tool(&self) -> StrokeTool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: StrokeTool) {
        self.tool = tool;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size.max(0.5);
    }

    /// The in-progress stroke, for replay during a gesture.
    pub fn in_progress(&self) -> Option<&Stroke> {
        self.active.as_ref()
    }

    /// Pointer-down. Starts a gesture only when drawing mode is enabled
    /// and the caller has an annotation selected; otherwise a no-op.
    pub fn begin(&mut self, stroke_id: u64, point: Point, has_selection: bool) {
        if !self.enabled || !has_selection || self.active.is_some() {
            return;
        }
        let mut stroke = Stroke::new(stroke_id, self.tool, self.color, self.size);
        stroke.points.push(point.clamped());
        self.active = Some(stroke);
    }

    /// Pointer-move. Appends one point while a gesture is active.
    pub fn append(&mut self, point: Point) {
        if let Some(stroke) = self.active.as_mut() {
            stroke.points.push(point.clamped());
        }
    }

    /// Pointer-up or pointer-cancel. Commits the accumulated stroke.
    pub fn finish(&mut self) -> Option<Stroke> {
        self.active.take()
    }

    /// Drop any gesture in progress without committing it. Used when the
    /// selected annotation changes under the pointer.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture_points() -> [Point; 3] {
        [
            Point::new(0.1, 0.1),
            Point::new(0.5, 0.5),
            Point::new(0.9, 0.9),
        ]
    }

    #[test]
    fn test_gesture_commits_one_stroke_with_all_points() {
        let mut recorder = StrokeRecorder::new();
        recorder.set_enabled(true);
        let [a, b, c] = gesture_points();

        recorder.begin(1, a, true);
        recorder.append(b);
        recorder.append(c);
        let stroke = recorder.finish().expect("gesture should commit");

        assert_eq!(stroke.points, vec![a, b, c]);
        assert_eq!(stroke.id, 1);
        assert!(recorder.in_progress().is_none());
        assert!(recorder.finish().is_none());
    }

    #[test]
    fn test_pointer_down_ignored_when_disabled() {
        let mut recorder = StrokeRecorder::new();
        let [a, b, _] = gesture_points();
        recorder.begin(1, a, true);
        recorder.append(b);
        assert!(recorder.finish().is_none());
    }

    #[test]
    fn test_pointer_down_ignored_without_selection() {
        let mut recorder = StrokeRecorder::new();
        recorder.set_enabled(true);
        let [a, _, _] = gesture_points();
        recorder.begin(1, a, false);
        assert!(recorder.in_progress().is_none());
        assert!(recorder.finish().is_none());
    }

    #[test]
    fn test_moves_without_gesture_are_ignored() {
        let mut recorder = StrokeRecorder::new();
        recorder.set_enabled(true);
        recorder.append(Point::new(0.5, 0.5));
        assert!(recorder.finish().is_none());
    }

    #[test]
    fn test_stroke_takes_tool_color_size_at_pointer_down() {
        let mut recorder = StrokeRecorder::new();
        recorder.set_enabled(true);
        recorder.set_tool(StrokeTool::Erase);
        recorder.set_color(Color::new(255, 0, 0));
        recorder.set_size(9.0);

        recorder.begin(7, Point::new(0.2, 0.2), true);
        let stroke = recorder.finish().unwrap();
        assert_eq!(stroke.tool, StrokeTool::Erase);
        assert_eq!(stroke.color, Color::new(255, 0, 0));
        assert_eq!(stroke.size, 9.0);
    }

    #[test]
    fn test_points_are_clamped_to_unit_square() {
        let mut recorder = StrokeRecorder::new();
        recorder.set_enabled(true);
        recorder.begin(1, Point::new(-0.2, 0.5), true);
        recorder.append(Point::new(1.4, 0.5));
        let stroke = recorder.finish().unwrap();
        assert_eq!(stroke.points[0].x, 0.0);
        assert_eq!(stroke.points[1].x, 1.0);
    }

    #[test]
    fn test_cancel_discards_gesture() {
        let mut recorder = StrokeRecorder::new();
        recorder.set_enabled(true);
        recorder.begin(1, Point::new(0.1, 0.1), true);
        recorder.cancel();
        assert!(recorder.finish().is_none());
    }

    #[test]
    fn test_disabling_mid_gesture_commits_like_pointer_cancel() {
        let mut recorder = StrokeRecorder::new();
        recorder.set_enabled(true);
        recorder.begin(1, Point::new(0.1, 0.1), true);
        recorder.append(Point::new(0.5, 0.5));

        let stroke = recorder
            .set_enabled(false)
            .expect("disable should end the gesture with a commit");
        assert_eq!(stroke.points.len(), 2);
        assert!(!recorder.enabled());
        assert!(recorder.finish().is_none());
    }

    #[test]
    fn test_enabling_returns_no_stroke() {
        let mut recorder = StrokeRecorder::new();
        assert!(recorder.set_enabled(true).is_none());
    }
}
