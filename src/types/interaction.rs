use serde::{Deserialize, Serialize};

/// Direction a hot zone resizes in.
///
/// `Horizontal` drags change a column width, `Vertical` drags change a row height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeDirection {
    Horizontal,
    Vertical,
}

impl ResizeDirection {
    /// CSS cursor shown over the hot zone
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Horizontal => "col-resize",
            Self::Vertical => "row-resize",
        }
    }
}

/// What a finished resize applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeEffect {
    /// Every cell of a field (e.g. the height of a header row)
    Field,
    /// A single column
    Cell,
}

/// Which resize affordances the header draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResizeInteractionOptions {
    /// Column width zones on leaf cells
    pub col_cell_horizontal: bool,
    /// Header row height zones
    pub col_cell_vertical: bool,
}

impl Default for ResizeInteractionOptions {
    fn default() -> Self {
        Self {
            col_cell_horizontal: true,
            col_cell_vertical: true,
        }
    }
}

impl ResizeInteractionOptions {
    pub fn disabled() -> Self {
        Self {
            col_cell_horizontal: false,
            col_cell_vertical: false,
        }
    }
}
