//! Structured error types for sheetgrid.

/// All errors that can occur while laying out and drawing the grid header.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A header node has a negative width or height.
    #[error("Invalid geometry for header node {id}: width={width}, height={height}")]
    InvalidGeometry { id: String, width: f32, height: f32 },

    /// A node id that does not belong to the header tree.
    #[error("Unknown header node: {0}")]
    UnknownNode(usize),

    /// JSON (de)serialization error for header specs and layout reports.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendering error.
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
