use serde::{Deserialize, Serialize};

use super::{AreaRange, Point, Rect};

/// Discriminant used by the owning header to dispatch on cell kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellType {
    ColCell,
}

/// Shared per-render context of the column header.
///
/// Owned by the header component; only changes between render cycles
/// (scroll or resize), never during a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderViewConfig {
    /// Visible header width in pixels (excluding the pinned corner)
    pub width: f32,
    /// Header height in pixels
    pub height: f32,
    pub scroll_x: f32,
    pub scroll_y: f32,
    /// True when the row-header corner scrolls together with the column header
    pub scroll_contains_row_header: bool,
    /// Width of the pinned row-header corner
    pub corner_width: f32,
    /// Screen-space origin of the column header
    pub position: Point,
}

impl Default for HeaderViewConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 60.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
            scroll_contains_row_header: false,
            corner_width: 0.0,
            position: Point::default(),
        }
    }
}

impl HeaderViewConfig {
    /// Corner width that offsets horizontal scroll math (0 unless the corner scrolls along).
    pub fn corner_offset(&self) -> f32 {
        if self.scroll_contains_row_header {
            self.corner_width
        } else {
            0.0
        }
    }

    /// Visible logical span of the header, expressed in header coordinates.
    pub fn viewport(&self) -> AreaRange {
        let corner = self.corner_offset();
        AreaRange::new(self.scroll_x - corner, self.width + corner)
    }

    /// Clip rectangle for resize hot zones, relative to the scrolled content.
    pub fn resize_clip_area(&self) -> Rect {
        let corner = self.corner_offset();
        Rect::new(-corner, 0.0, self.width + corner, self.height)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_viewport_without_corner() {
        let config = HeaderViewConfig {
            scroll_x: 500.0,
            corner_width: 120.0,
            ..HeaderViewConfig::default()
        };
        assert_eq!(config.viewport(), AreaRange::new(500.0, 800.0));
        assert_eq!(config.resize_clip_area(), Rect::new(0.0, 0.0, 800.0, 60.0));
    }

    #[test]
    fn test_viewport_with_scrolling_corner() {
        let config = HeaderViewConfig {
            scroll_x: 500.0,
            corner_width: 120.0,
            scroll_contains_row_header: true,
            ..HeaderViewConfig::default()
        };
        assert_eq!(config.viewport(), AreaRange::new(380.0, 920.0));
        assert_eq!(
            config.resize_clip_area(),
            Rect::new(-120.0, 0.0, 920.0, 60.0)
        );
    }
}
