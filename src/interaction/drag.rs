//! Pointer-driven resize gesture started on a hot zone.
//!
//! The gesture only computes the new size; persisting it is up to the caller
//! that receives the [`ResizeEvent`].

use serde::{Deserialize, Serialize};

use super::resize::{ResizeHotZone, ResizeInfo};
use crate::types::{
    LineSegment, LineStyle, Point, ResizeAreaTheme, ResizeDirection, ResizeEffect,
};

/// Smallest width or height a drag can produce
pub const MIN_CELL_SIZE: f32 = 16.0;

/// Emitted when a resize drag completes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeEvent {
    pub id: String,
    pub direction: ResizeDirection,
    pub effect: ResizeEffect,
    pub old_size: f32,
    pub new_size: f32,
}

/// An in-progress resize drag
#[derive(Debug, Clone)]
pub struct ResizeDrag {
    info: ResizeInfo,
    start: Point,
    current: Point,
}

impl ResizeDrag {
    /// Start dragging `zone` from the pointer position.
    pub fn begin(zone: &ResizeHotZone, pointer: Point) -> Self {
        Self {
            info: zone.info.clone(),
            start: pointer,
            current: pointer,
        }
    }

    pub fn update(&mut self, pointer: Point) {
        self.current = pointer;
    }

    pub fn info(&self) -> &ResizeInfo {
        &self.info
    }

    fn delta(&self) -> f32 {
        match self.info.direction {
            ResizeDirection::Horizontal => self.current.x - self.start.x,
            ResizeDirection::Vertical => self.current.y - self.start.y,
        }
    }

    /// Size the cell would get if the drag ended now.
    pub fn new_size(&self) -> f32 {
        (self.info.current_size() + self.delta()).max(MIN_CELL_SIZE)
    }

    /// Dashed guide line at the edge being dragged, in screen coordinates.
    ///
    /// Spans `extent` pixels across the grid (its full height for column widths,
    /// full width for row heights).
    pub fn guide_line(&self, extent: f32, theme: &ResizeAreaTheme) -> (LineSegment, LineStyle) {
        let info = &self.info;
        let edge = self.new_size();
        let position = match info.direction {
            ResizeDirection::Horizontal => {
                let x = info.offset_x + edge;
                LineSegment {
                    x1: x,
                    y1: info.offset_y,
                    x2: x,
                    y2: info.offset_y + extent,
                }
            }
            ResizeDirection::Vertical => {
                let y = info.offset_y + edge;
                LineSegment {
                    x1: info.offset_x,
                    y1: y,
                    x2: info.offset_x + extent,
                    y2: y,
                }
            }
        };
        let style = LineStyle {
            stroke: theme.guide_line_color.clone(),
            line_width: 1.0,
            opacity: 1.0,
            line_dash: theme.guide_line_dash.clone(),
        };
        (position, style)
    }

    /// Finish the gesture, producing the event for the caller.
    pub fn finish(self) -> ResizeEvent {
        let new_size = self.new_size();
        tracing::debug!(id = %self.info.id, new_size, "resize finished");
        ResizeEvent {
            old_size: self.info.current_size(),
            new_size,
            id: self.info.id,
            direction: self.info.direction,
            effect: self.info.effect,
        }
    }
}
