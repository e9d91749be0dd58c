// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Transformations between canvas-viewport pixel coordinates and the
//! normalized 0..1 coordinates strokes are stored in.

use crate::models::annotation::Point;

/// Convert pixel coordinates to normalized coordinates (0.0 to 1.0),
/// clamped so drags that leave the viewport stay on the canvas edge.
pub fn normalize_coordinates(pixel_x: f64, pixel_y: f64, width: f64, height: f64) -> Point {
    if width <= 0.0 || height <= 0.0 {
        return Point::new(0.0, 0.0);
    }
    Point::new(pixel_x / width, pixel_y / height).clamped()
}

/// Convert normalized coordinates back to pixel coordinates.
pub fn denormalize_coordinates(point: &Point, width: f64, height: f64) -> (f64, f64) {
    (point.x * width, point.y * height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_denormalize_roundtrip() {
        let width = 1920.0;
        let height = 1080.0;
        let pixel_x = 960.0;
        let pixel_y = 540.0;

        let normalized = normalize_coordinates(pixel_x, pixel_y, width, height);
        let (denorm_x, denorm_y) = denormalize_coordinates(&normalized, width, height);

        assert!((denorm_x - pixel_x).abs() < 0.0001);
        assert!((denorm_y - pixel_y).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_clamps_outside_viewport() {
        let p = normalize_coordinates(-10.0, 2000.0, 1920.0, 1080.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 1.0);
    }

    #[test]
    fn test_normalize_degenerate_viewport() {
        let p = normalize_coordinates(5.0, 5.0, 0.0, 0.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }
}
