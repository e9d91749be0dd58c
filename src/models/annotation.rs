// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Timestamped coaching annotations and freehand strokes.
//!
//! This module defines the core data structures for coaching points:
//! the annotation record itself, the tag set referencing roster athletes
//! by id, and the stroke/point model used by the telestration canvas.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A 2D point with coordinates normalized to 0.0..=1.0 relative to the
/// canvas viewport, so strokes survive window resizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates into the normalized range.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 1.0),
            y: self.y.clamp(0.0, 1.0),
        }
    }
}

/// Opaque RGB stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const YELLOW: Color = Color { r: 255, g: 220, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::YELLOW
    }
}

/// Stroke tool.
///
/// Erase strokes render by painting over prior marks in the canvas
/// background color rather than adding pigment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeTool {
    Draw,
    Erase,
}

/// One committed freehand gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stroke {
    pub id: u64,
    pub tool: StrokeTool,
    pub color: Color,
    pub size: f32,
    pub points: Vec<Point>,
    pub created_at: u64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            id: 0,
            tool: StrokeTool::Draw,
            color: Color::default(),
            size: 4.0,
            points: Vec::new(),
            created_at: 0,
        }
    }
}

impl Stroke {
    /// Start a new stroke stamped with the current wall-clock time.
    pub fn new(id: u64, tool: StrokeTool, color: Color, size: f32) -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            id,
            tool,
            color,
            size,
            points: Vec::new(),
            created_at,
        }
    }

    /// Strokes with fewer than two points carry no visible geometry.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// An insertion-ordered set of athlete ids.
///
/// Serializes as a plain array; inserts de-duplicate instead of relying
/// on callers to filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<u64>);

impl TagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert an id, returning false if it was already present.
    pub fn insert(&mut self, id: u64) -> bool {
        if self.contains(id) {
            false
        } else {
            self.0.push(id);
            true
        }
    }

    /// Remove an id, returning true if it was present.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.0.len();
        self.0.retain(|&tagged| tagged != id);
        self.0.len() != before
    }

    pub fn contains(&self, id: u64) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A timestamped coaching point with athlete tags and strokes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Annotation {
    pub id: u64,
    /// Whole seconds into the video.
    pub time: u32,
    pub title: String,
    pub description: String,
    pub tagged_athlete_ids: TagSet,
    pub drawings: Vec<Stroke>,
}

impl Default for Annotation {
    fn default() -> Self {
        Self {
            id: 0,
            time: 0,
            title: String::new(),
            description: String::new(),
            tagged_athlete_ids: TagSet::new(),
            drawings: Vec::new(),
        }
    }
}

impl Annotation {
    /// Default title given to a freshly dropped coaching point.
    pub const DEFAULT_TITLE: &'static str = "New coaching point";

    /// Create a new annotation at the given playback time.
    pub fn new(id: u64, time: u32) -> Self {
        Self {
            id,
            time,
            title: Self::DEFAULT_TITLE.to_string(),
            ..Default::default()
        }
    }

    /// Highest stroke id in use, for fresh-id generation.
    pub fn max_stroke_id(&self) -> u64 {
        self.drawings.iter().map(|s| s.id).max().unwrap_or(0)
    }
}
