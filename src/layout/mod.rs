//! Layout engine for the column header.
//!
//! This module handles:
//! - Building the header node arena and computing logical cell positions
//! - Pure geometry helpers for text, icon and border placement
//! - Mapping scrolled content onto the visible window

mod header_tree;
pub mod position;

pub use header_tree::{
    ColumnSpec, HeaderNode, HeaderTree, NodeId, DEFAULT_COL_WIDTH, DEFAULT_LEVEL_HEIGHT,
    ID_SEPARATOR, ROOT_ID,
};
pub use position::{
    action_icons_width, border_position_and_style, map_to_visible_window,
    should_add_resize_area, text_and_following_icon_position, vertical_position, BorderGeometry,
    CellBorderPosition, TextIconPosition,
};
