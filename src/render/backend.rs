//! Scene trait for pluggable rendering implementations.
//!
//! Header cells only ever append primitives to a scene; they never touch
//! pixels. The retained [`SceneGraph`](super::SceneGraph) and the Canvas 2D
//! [`CanvasScene`](super::CanvasScene) are interchangeable.

use crate::types::{LineSegment, LineStyle, Point, Rect, RectStyle, TextTheme};

/// Trait for render backends
pub trait Scene {
    /// Fill (and optionally stroke) a rectangle
    fn draw_rect(&mut self, rect: Rect, style: &RectStyle);

    /// Stroke a line segment
    fn draw_line(&mut self, line: LineSegment, style: &LineStyle);

    /// Draw a text label anchored at `at` per the style's align/baseline
    fn draw_text(&mut self, text: &str, at: Point, style: &TextTheme);

    /// Draw a square action icon with its top-left corner at `at`
    fn draw_icon(&mut self, name: &str, at: Point, size: f32, fill: &str);

    /// Width of `text` rendered with `style`
    fn measure_text(&self, text: &str, style: &TextTheme) -> f32;
}
