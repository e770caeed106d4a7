//! Canvas 2D rendering backend.
//!
//! Draws header primitives straight onto a `CanvasRenderingContext2d` via
//! web-sys. The context is expected to already carry the DPR transform, so
//! all coordinates are logical (CSS) pixels.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::colors::with_opacity;
use super::Scene;
use crate::types::{LineSegment, LineStyle, Point, Rect, RectStyle, TextTheme};

/// Scene backed by a Canvas 2D context
pub struct CanvasScene<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasScene<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn set_line_dash(&self, dash: &[f32]) {
        let segments: js_sys::Array = dash
            .iter()
            .map(|d| JsValue::from_f64(f64::from(*d)))
            .collect();
        let _ = self.ctx.set_line_dash(&segments);
    }

    /// Small downward/upward triangle, like the filter dropdown indicators
    fn draw_triangle(&self, at: Point, size: f32, pointing_up: bool) {
        let x = f64::from(at.x);
        let y = f64::from(at.y);
        let s = f64::from(size);
        let inset = s * 0.2;
        self.ctx.begin_path();
        if pointing_up {
            self.ctx.move_to(x + s / 2.0, y + inset);
            self.ctx.line_to(x + s - inset, y + s - inset);
            self.ctx.line_to(x + inset, y + s - inset);
        } else {
            self.ctx.move_to(x + inset, y + inset);
            self.ctx.line_to(x + s - inset, y + inset);
            self.ctx.line_to(x + s / 2.0, y + s - inset);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }
}

impl Scene for CanvasScene<'_> {
    fn draw_rect(&mut self, rect: Rect, style: &RectStyle) {
        let (x, y, w, h) = (
            f64::from(rect.x),
            f64::from(rect.y),
            f64::from(rect.width),
            f64::from(rect.height),
        );
        self.ctx
            .set_fill_style_str(&with_opacity(&style.fill, style.fill_opacity));
        self.ctx.fill_rect(x, y, w, h);
        if let Some(stroke) = &style.stroke {
            self.ctx.set_stroke_style_str(stroke);
            self.ctx.set_line_width(1.0);
            self.ctx.stroke_rect(x, y, w, h);
        }
    }

    fn draw_line(&mut self, line: LineSegment, style: &LineStyle) {
        self.ctx.save();
        self.ctx
            .set_stroke_style_str(&with_opacity(&style.stroke, style.opacity));
        self.ctx.set_line_width(f64::from(style.line_width));
        self.set_line_dash(&style.line_dash);
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(line.x1), f64::from(line.y1));
        self.ctx.line_to(f64::from(line.x2), f64::from(line.y2));
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextTheme) {
        self.ctx.set_font(&style.css_font());
        self.ctx.set_text_align(style.text_align.as_str());
        self.ctx.set_text_baseline(style.text_baseline.as_str());
        self.ctx
            .set_fill_style_str(&with_opacity(&style.fill, style.opacity));
        let _ = self.ctx.fill_text(text, f64::from(at.x), f64::from(at.y));
    }

    fn draw_icon(&mut self, name: &str, at: Point, size: f32, fill: &str) {
        self.ctx.save();
        self.ctx.set_fill_style_str(fill);
        self.ctx.set_stroke_style_str(fill);
        match name {
            "SortUp" => self.draw_triangle(at, size, true),
            "SortDown" | "Filter" => self.draw_triangle(at, size, false),
            _ => {
                self.ctx.set_line_width(1.0);
                self.ctx.stroke_rect(
                    f64::from(at.x) + 0.5,
                    f64::from(at.y) + 0.5,
                    f64::from(size) - 1.0,
                    f64::from(size) - 1.0,
                );
            }
        }
        self.ctx.restore();
    }

    #[allow(clippy::cast_possible_truncation)]
    fn measure_text(&self, text: &str, style: &TextTheme) -> f32 {
        self.ctx.set_font(&style.css_font());
        self.ctx
            .measure_text(text)
            .map(|metrics| metrics.width() as f32)
            .unwrap_or(0.0)
    }
}
