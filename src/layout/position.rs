//! Pure geometry helpers for header cells.
//!
//! These keep text/icon placement and border math testable without a canvas.

use serde::{Deserialize, Serialize};

use crate::types::{
    AreaRange, CellStyle, IconTheme, LineSegment, LineStyle, Point, Rect, ScrollOffset,
    TextAlign, TextBaseline, TextTheme,
};

/// Which edge of a cell a border is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellBorderPosition {
    Top,
    Right,
    Bottom,
    Left,
}

/// Line position and stroke of one cell border
#[derive(Debug, Clone, PartialEq)]
pub struct BorderGeometry {
    pub position: LineSegment,
    pub style: LineStyle,
}

/// Anchor of a text label and of the first icon following it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextIconPosition {
    pub text: Point,
    pub icon: Point,
}

/// Start X at which a text+icon block of width `span` is drawn so that it stays
/// inside the visible window without leaving the content box.
///
/// - Content fully inside the viewport: the content's own start.
/// - Content cut by a viewport edge: flush against that edge.
/// - Not enough visible room: the block stays inside the content box, as close
///   to the intruding edge as it can get.
/// - Content fully outside: the content's own start (the cell is not drawn).
pub fn map_to_visible_window(viewport: AreaRange, content: AreaRange, span: f32) -> f32 {
    if !viewport.overlaps(&content) {
        return content.start;
    }

    let min_start = viewport.start.max(content.start);
    let max_start = viewport.end().min(content.end()) - span;
    if min_start <= max_start {
        return min_start;
    }

    if content.start < viewport.start {
        (content.end() - span).max(content.start).min(min_start)
    } else {
        content.start
    }
}

/// Width taken by `count` action icons.
///
/// Zero icons take zero space; the trailing margin is only added when at least
/// one icon is drawn.
pub fn action_icons_width(icon: &IconTheme, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let width = (icon.size + icon.margin.left) * count as f32 + icon.margin.right;
    width.max(0.0)
}

/// Y coordinate for content of height `size` aligned in `content_box` by `baseline`.
pub fn vertical_position(content_box: &Rect, baseline: TextBaseline, size: f32) -> f32 {
    match baseline {
        TextBaseline::Top => content_box.y,
        TextBaseline::Middle => content_box.y + (content_box.height - size) / 2.0,
        TextBaseline::Bottom => content_box.bottom() - size,
    }
}

/// Text anchor and first icon position for a data-cell-aligned label followed by icons.
///
/// The text anchor follows Canvas semantics: for `Right` alignment the anchor is
/// the right edge of the text, for `Center` its midpoint.
pub fn text_and_following_icon_position(
    content_box: &Rect,
    text_style: &TextTheme,
    text_width: f32,
    icon_style: &IconTheme,
    icon_count: usize,
) -> TextIconPosition {
    let Rect { x, width, .. } = *content_box;
    let icons_width = action_icons_width(icon_style, icon_count);

    let text_y = vertical_position(content_box, text_style.text_baseline, 0.0);
    let icon_y = vertical_position(content_box, text_style.text_baseline, icon_style.size);

    let (text_x, icon_x) = match text_style.text_align {
        TextAlign::Left => (x, x + text_width + icon_style.margin.left),
        TextAlign::Center => {
            let start = x + width / 2.0 - (text_width + icons_width) / 2.0;
            (
                start + text_width / 2.0,
                start + text_width + icon_style.margin.left,
            )
        }
        TextAlign::Right => {
            let text_right = x + width - icons_width;
            (text_right, text_right + icon_style.margin.left)
        }
    };

    TextIconPosition {
        text: Point::new(text_x, text_y),
        icon: Point::new(icon_x, icon_y),
    }
}

/// Line segment and stroke for one edge of `bbox`.
pub fn border_position_and_style(
    edge: CellBorderPosition,
    bbox: &Rect,
    style: &CellStyle,
) -> BorderGeometry {
    let position = match edge {
        CellBorderPosition::Top | CellBorderPosition::Bottom => {
            let y = if edge == CellBorderPosition::Top {
                bbox.y
            } else {
                bbox.bottom()
            };
            LineSegment {
                x1: bbox.x,
                y1: y,
                x2: bbox.right(),
                y2: y,
            }
        }
        CellBorderPosition::Left | CellBorderPosition::Right => {
            let x = if edge == CellBorderPosition::Left {
                bbox.x
            } else {
                bbox.right()
            };
            LineSegment {
                x1: x,
                y1: bbox.y,
                x2: x,
                y2: bbox.bottom(),
            }
        }
    };

    let style = match edge {
        CellBorderPosition::Top | CellBorderPosition::Bottom => LineStyle {
            stroke: style.horizontal_border_color.clone(),
            line_width: style.horizontal_border_width,
            opacity: style.horizontal_border_color_opacity,
            line_dash: Vec::new(),
        },
        CellBorderPosition::Left | CellBorderPosition::Right => LineStyle {
            stroke: style.vertical_border_color.clone(),
            line_width: style.vertical_border_width,
            opacity: style.vertical_border_color_opacity,
            line_dash: Vec::new(),
        },
    };

    BorderGeometry { position, style }
}

/// Whether a resize hot zone, shifted by the scroll offset, overlaps the clip area.
pub fn should_add_resize_area(area: &Rect, clip: &Rect, scroll: ScrollOffset) -> bool {
    let overlap_x = !(area.x - scroll.scroll_x > clip.right()
        || area.right() - scroll.scroll_x < clip.x);
    let overlap_y = !(area.y - scroll.scroll_y > clip.bottom()
        || area.bottom() - scroll.scroll_y < clip.y);
    overlap_x && overlap_y
}
