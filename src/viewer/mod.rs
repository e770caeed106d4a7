//! `GridHeaderView` - the WASM entry point for the canvas column header.
//!
//! This module provides the exported struct that handles:
//! - Loading a header description (columns, theme, view config)
//! - Drawing the visible header cells onto a Canvas 2D context
//! - Resize hot zone hit testing and drag gestures

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::GridError;
use crate::header::{ColHeader, HeaderSpec};
use crate::interaction::ResizeDrag;
use crate::render::{CanvasScene, Scene};
use crate::types::Point;

/// The column header view exported to JavaScript
#[wasm_bindgen]
pub struct GridHeaderView {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f32,
    header: ColHeader,
    drag: Option<ResizeDrag>,
}

#[wasm_bindgen]
impl GridHeaderView {
    /// Create a view drawing onto `canvas`.
    ///
    /// # Errors
    /// Returns an error if the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, dpr: f32) -> Result<GridHeaderView, JsValue> {
        console_error_panic_hook::set_once();

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| GridError::Render("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GridError::Render("unexpected 2d context type".into()))?;

        let dpr = if dpr > 0.0 { dpr } else { 1.0 };
        let mut spec = HeaderSpec::default();
        spec.config.width = canvas.width() as f32 / dpr;
        spec.config.height = canvas.height() as f32 / dpr;

        Ok(Self {
            canvas,
            ctx,
            dpr,
            header: ColHeader::new(spec),
            drag: None,
        })
    }

    /// Replace the header with a new description (a `HeaderSpec` object).
    ///
    /// # Errors
    /// Returns an error if the object does not describe a header.
    #[wasm_bindgen]
    pub fn load(&mut self, spec: JsValue) -> Result<(), JsValue> {
        let spec: HeaderSpec = serde_wasm_bindgen::from_value(spec)?;
        self.header = ColHeader::new(spec);
        self.drag = None;
        Ok(())
    }

    /// Same as [`load`](Self::load), from a JSON string.
    ///
    /// # Errors
    /// Returns an error if the JSON does not describe a header.
    #[wasm_bindgen(js_name = "loadJson")]
    pub fn load_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.header = ColHeader::new(HeaderSpec::from_json(json)?);
        self.drag = None;
        Ok(())
    }

    #[wasm_bindgen(js_name = "setScroll")]
    pub fn set_scroll(&mut self, scroll_x: f32, scroll_y: f32) {
        self.header.set_scroll(scroll_x, scroll_y);
    }

    /// Resize the canvas backing store and the logical header area.
    #[wasm_bindgen]
    pub fn resize(&mut self, physical_width: u32, physical_height: u32, dpr: f32) {
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        self.canvas.set_width(physical_width.max(1));
        self.canvas.set_height(physical_height.max(1));
        self.header.set_size(
            physical_width as f32 / self.dpr,
            physical_height as f32 / self.dpr,
        );
    }

    /// Redraw every visible header cell and the active resize guide.
    ///
    /// # Errors
    /// Returns an error if the canvas transform cannot be set.
    #[wasm_bindgen]
    pub fn render(&mut self) -> Result<(), JsValue> {
        let dpr = f64::from(self.dpr);
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        let config = self.header.config();
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(config.width + config.corner_width),
            f64::from(config.height),
        );

        let mut scene = CanvasScene::new(&self.ctx);
        let cells = self.header.render(&mut scene);
        if let Some(drag) = &self.drag {
            let extent = self.header.config().height;
            let (line, style) = drag.guide_line(extent, &self.header.theme().resize_area);
            scene.draw_line(line, &style);
        }
        tracing::trace!(cells = cells.len(), "header frame");
        Ok(())
    }

    /// Cursor to show at a pointer position (`None` outside resize zones).
    #[wasm_bindgen(js_name = "cursorAt")]
    pub fn cursor_at(&self, x: f32, y: f32) -> Option<String> {
        self.header
            .resize_area_at(x, y)
            .map(|zone| zone.cursor.clone())
    }

    /// The resize zone under the pointer, or `undefined`.
    ///
    /// # Errors
    /// Returns an error if the zone cannot be serialized.
    #[wasm_bindgen(js_name = "resizeAreaAt")]
    pub fn resize_area_at(&self, x: f32, y: f32) -> Result<JsValue, JsValue> {
        match self.header.resize_area_at(x, y) {
            Some(zone) => Ok(serde_wasm_bindgen::to_value(&zone)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Start a resize drag; returns false if the pointer is not on a zone.
    #[wasm_bindgen(js_name = "onMouseDown")]
    pub fn on_mouse_down(&mut self, x: f32, y: f32) -> bool {
        self.drag = self.header.begin_resize(x, y);
        self.drag.is_some()
    }

    /// Track the pointer during a drag.
    #[wasm_bindgen(js_name = "onMouseMove")]
    pub fn on_mouse_move(&mut self, x: f32, y: f32) {
        if let Some(drag) = self.drag.as_mut() {
            drag.update(Point::new(x, y));
        }
    }

    /// Finish the drag and return the resulting `ResizeEvent`, or `undefined`.
    ///
    /// # Errors
    /// Returns an error if the event cannot be serialized.
    #[wasm_bindgen(js_name = "onMouseUp")]
    pub fn on_mouse_up(&mut self, x: f32, y: f32) -> Result<JsValue, JsValue> {
        let Some(mut drag) = self.drag.take() else {
            return Ok(JsValue::UNDEFINED);
        };
        drag.update(Point::new(x, y));
        Ok(serde_wasm_bindgen::to_value(&drag.finish())?)
    }

    /// Whether a resize drag is in progress.
    #[wasm_bindgen(js_name = "isResizing")]
    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }
}
