//! sheetgrid - column header for a virtualized canvas spreadsheet grid
//!
//! Lays out the column header of a pivot-style grid and draws it through a
//! pluggable scene (Canvas 2D in the browser, a retained scene graph natively):
//! - Leaf cells aligned like the data cells below them
//! - Group cells whose label stays inside the visible window while scrolling
//! - Trailing action icons after the label
//! - Resize hot zones for column widths and header row heights
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridHeaderView } from 'sheetgrid';
//! await init();
//! const view = new GridHeaderView(canvas, devicePixelRatio);
//! view.load({ columns: [...], config: { width: 800, height: 60 } });
//! view.render();
//! ```

pub mod cell;
pub mod error;
pub mod header;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use cell::{ColCell, TextLayout};
pub use error::{GridError, Result};
pub use header::{ColHeader, HeaderSpec, RenderedCell};
pub use interaction::{ResizeDrag, ResizeEvent, ResizeHotZone, ResizeRegistry};
pub use viewer::GridHeaderView;

pub use types::*;

/// Lay out a header spec (JSON) and return a report of the drawn cells and
/// registered resize zones as JSON.
///
/// Text widths are estimated from the font size.
///
/// # Errors
/// Returns an error if the header description is invalid or the report cannot be serialized.
#[wasm_bindgen]
pub fn layout_header_json(spec_json: &str) -> std::result::Result<String, JsValue> {
    Ok(header::layout_report_json(spec_json)?)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
