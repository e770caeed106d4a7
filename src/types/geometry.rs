use serde::{Deserialize, Serialize};

/// A point in header or screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (x + width)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (y + height)
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive containment test, so a pointer on the edge of a thin hot zone still hits.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Shrink by the given padding on each side. Never produces a negative size.
    pub fn inset(&self, padding: &Padding) -> Self {
        Self {
            x: self.x + padding.left,
            y: self.y + padding.top,
            width: (self.width - padding.left - padding.right).max(0.0),
            height: (self.height - padding.top - padding.bottom).max(0.0),
        }
    }

    /// Horizontal extent as an [`AreaRange`].
    pub fn x_range(&self) -> AreaRange {
        AreaRange::new(self.x, self.width)
    }
}

/// A `(start, width)` span in one axis, e.g. the visible part of the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaRange {
    pub start: f32,
    pub width: f32,
}

impl AreaRange {
    pub const fn new(start: f32, width: f32) -> Self {
        Self { start, width }
    }

    pub fn end(&self) -> f32 {
        self.start + self.width
    }

    /// True when the two ranges share at least one point.
    pub fn overlaps(&self, other: &AreaRange) -> bool {
        self.start <= other.end() && other.start <= self.end()
    }
}

/// Padding or margin on four sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Line segment from `(x1, y1)` to `(x2, y2)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Scroll offset of the header content
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub scroll_x: f32,
    pub scroll_y: f32,
}
