//! Retained scene graph.
//!
//! Records every primitive in draw order. Used by tests, benchmarks and the
//! CLI layout report, where no canvas exists.

use serde::Serialize;

use super::Scene;
use crate::types::{LineSegment, LineStyle, Point, Rect, RectStyle, TextTheme};

/// Average glyph width relative to the font size when no fixed width is set
const DEFAULT_CHAR_WIDTH_RATIO: f32 = 0.6;

/// A recorded primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    Rect {
        rect: Rect,
        style: RectStyle,
    },
    Line {
        line: LineSegment,
        style: LineStyle,
    },
    Text {
        text: String,
        at: Point,
        font: String,
        align: &'static str,
        baseline: &'static str,
    },
    Icon {
        name: String,
        at: Point,
        size: f32,
    },
}

/// Scene that keeps every shape in memory
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    shapes: Vec<Shape>,
    /// Fixed glyph width; `None` estimates from the font size
    char_width: Option<f32>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene whose text measurement is `chars * char_width`, handy for exact layouts.
    pub fn with_char_width(char_width: f32) -> Self {
        Self {
            shapes: Vec::new(),
            char_width: Some(char_width),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Text { text, at, .. } => Some((text.as_str(), *at)),
            _ => None,
        })
    }

    pub fn icons(&self) -> impl Iterator<Item = (&str, Point)> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Icon { name, at, .. } => Some((name.as_str(), *at)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Line { line, .. } => Some(line),
            _ => None,
        })
    }
}

impl Scene for SceneGraph {
    fn draw_rect(&mut self, rect: Rect, style: &RectStyle) {
        self.shapes.push(Shape::Rect {
            rect,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, line: LineSegment, style: &LineStyle) {
        self.shapes.push(Shape::Line {
            line,
            style: style.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextTheme) {
        self.shapes.push(Shape::Text {
            text: text.to_string(),
            at,
            font: style.css_font(),
            align: style.text_align.as_str(),
            baseline: style.text_baseline.as_str(),
        });
    }

    fn draw_icon(&mut self, name: &str, at: Point, size: f32, _fill: &str) {
        self.shapes.push(Shape::Icon {
            name: name.to_string(),
            at,
            size,
        });
    }

    fn measure_text(&self, text: &str, style: &TextTheme) -> f32 {
        let glyph = self
            .char_width
            .unwrap_or(style.font_size * DEFAULT_CHAR_WIDTH_RATIO);
        text.chars().count() as f32 * glyph
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_measure_with_fixed_char_width() {
        let scene = SceneGraph::with_char_width(10.0);
        assert_eq!(scene.measure_text("East", &TextTheme::default()), 40.0);
    }

    #[test]
    fn test_measure_estimates_from_font_size() {
        let scene = SceneGraph::new();
        let style = TextTheme {
            font_size: 10.0,
            ..TextTheme::default()
        };
        assert!((scene.measure_text("abcde", &style) - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_records_in_draw_order() {
        let mut scene = SceneGraph::new();
        scene.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), &RectStyle::transparent());
        scene.draw_text("A", Point::new(5.0, 5.0), &TextTheme::default());
        assert!(matches!(scene.shapes().first(), Some(Shape::Rect { .. })));
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec![("A", Point::new(5.0, 5.0))]);
    }
}
