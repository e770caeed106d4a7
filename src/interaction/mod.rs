//! Interaction layer: resize hot zones, their registry and the drag gesture.

mod drag;
pub mod resize;

pub use drag::{ResizeDrag, ResizeEvent, MIN_CELL_SIZE};
pub use resize::{
    ResizeGroup, ResizeHotZone, ResizeInfo, ResizeRegistry, HORIZONTAL_RESIZE_AREA_KEY_PRE,
    KEY_GROUP_COL_RESIZE_AREA, VERTICAL_RESIZE_AREA_KEY_PRE,
};
