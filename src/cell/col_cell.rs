//! Column header cell: text/icon layout and resize hot zones.
//!
//! Leaf cells align like data cells so header labels line up with the column
//! below. Group cells are centered, but while the header scrolls horizontally
//! their label slides along so it stays inside the visible window.

use serde::Serialize;

use super::format::{truncate_text, FieldFormatter, FormatResult};
use super::icons::ActionIconResolver;
use crate::error::{GridError, Result};
use crate::interaction::{
    ResizeGroup, ResizeHotZone, ResizeInfo, ResizeRegistry, HORIZONTAL_RESIZE_AREA_KEY_PRE,
    KEY_GROUP_COL_RESIZE_AREA, VERTICAL_RESIZE_AREA_KEY_PRE,
};
use crate::layout::{
    action_icons_width, border_position_and_style, map_to_visible_window,
    should_add_resize_area, text_and_following_icon_position, CellBorderPosition, HeaderNode,
    HeaderTree, NodeId,
};
use crate::render::Scene;
use crate::types::{
    CellType, HeaderTheme, HeaderViewConfig, Point, Rect, RectStyle, ResizeDirection,
    ResizeEffect, ResizeInteractionOptions, ScrollOffset, TextAlign, TextBaseline, TextTheme,
};

/// Everything a column cell reads while it is drawn.
///
/// Borrowed from the owning header for the duration of one render pass.
#[derive(Clone, Copy)]
pub struct HeaderContext<'a> {
    pub tree: &'a HeaderTree,
    pub config: &'a HeaderViewConfig,
    pub theme: &'a HeaderTheme,
    pub resize: ResizeInteractionOptions,
    pub icons: &'a dyn ActionIconResolver,
    pub formatter: &'a dyn FieldFormatter,
}

/// Layout branch of a header cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    /// Deepest level: aligned like data cells, independent of scrolling
    Leaf,
    /// Spans several leaves: centered and re-anchored while scrolling
    Group,
}

impl CellKind {
    pub fn of(node: &HeaderNode) -> Self {
        if node.is_leaf {
            Self::Leaf
        } else {
            Self::Group
        }
    }
}

/// Result of the text layout step, consumed by icon layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayout {
    pub kind: CellKind,
    /// Text anchor, interpreted with the cell's text align/baseline
    pub text: Point,
    /// Center of the text+icon block for groups, the text anchor for leaves
    pub anchor: Point,
    /// Top-left corner of the first action icon
    pub first_icon: Point,
    pub text_width: f32,
}

/// A single column header cell
pub struct ColCell<'a> {
    ctx: HeaderContext<'a>,
    id: NodeId,
    node: &'a HeaderNode,
    kind: CellKind,
    icon_names: Vec<String>,
}

impl<'a> ColCell<'a> {
    /// Resolve the node and its icons.
    ///
    /// # Errors
    /// `UnknownNode` for ids outside the tree, `InvalidGeometry` for negative sizes.
    pub fn new(ctx: HeaderContext<'a>, id: NodeId) -> Result<Self> {
        let node = ctx.tree.node(id)?;
        if node.width < 0.0 || node.height < 0.0 {
            return Err(GridError::InvalidGeometry {
                id: node.id.clone(),
                width: node.width,
                height: node.height,
            });
        }
        Ok(Self {
            ctx,
            id,
            node,
            kind: CellKind::of(node),
            icon_names: ctx.icons.icon_names(node),
        })
    }

    pub fn cell_type(&self) -> CellType {
        CellType::ColCell
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn node_id(&self) -> NodeId {
        self.id
    }

    pub fn meta(&self) -> &HeaderNode {
        self.node
    }

    /// Draw the cell: background, interactive background, text, icons,
    /// borders, then resize hot zones.
    pub fn init(&self, scene: &mut dyn Scene, registry: &mut ResizeRegistry) -> TextLayout {
        self.draw_background_shape(scene);
        self.draw_interactive_bg_shape(scene);
        let layout = self.draw_text_shape(scene);
        self.draw_action_icons(scene, &layout);
        self.draw_borders(scene);
        self.draw_resize_area(registry);
        layout
    }

    fn draw_background_shape(&self, scene: &mut dyn Scene) {
        let cell = &self.ctx.theme.col_cell.cell;
        scene.draw_rect(
            self.node.bbox(),
            &RectStyle::filled(&cell.background_color, cell.background_color_opacity),
        );
    }

    // Hover/selection states paint into this shape
    fn draw_interactive_bg_shape(&self, scene: &mut dyn Scene) {
        scene.draw_rect(self.node.bbox(), &RectStyle::transparent());
    }

    /// Text theme of this cell.
    ///
    /// Leaves take the data cell alignment; groups are centered.
    pub fn text_style(&self) -> TextTheme {
        let theme = &self.ctx.theme;
        let base = if self.node.is_leaf && !self.node.is_totals {
            &theme.col_cell.text
        } else {
            &theme.col_cell.bolder_text
        };
        let (text_align, text_baseline) = match self.kind {
            CellKind::Leaf => (
                theme.data_cell_text.text_align,
                theme.data_cell_text.text_baseline,
            ),
            CellKind::Group => (TextAlign::Center, TextBaseline::Middle),
        };
        TextTheme {
            text_align,
            text_baseline,
            ..base.clone()
        }
    }

    pub fn formatted_value(&self) -> FormatResult {
        FormatResult {
            formatted_value: self.ctx.formatter.format(&self.node.key, &self.node.label),
            value: self.node.label.clone(),
        }
    }

    /// Cell box minus the theme padding
    pub fn content_area(&self) -> Rect {
        self.node.bbox().inset(&self.ctx.theme.col_cell.cell.padding)
    }

    pub fn action_icon_names(&self) -> &[String] {
        &self.icon_names
    }

    pub fn action_icons_count(&self) -> usize {
        self.icon_names.len()
    }

    pub fn action_icons_width(&self) -> f32 {
        action_icons_width(&self.ctx.theme.col_cell.icon, self.action_icons_count())
    }

    pub fn max_text_width(&self) -> f32 {
        (self.content_area().width - self.action_icons_width()).max(0.0)
    }

    /// Width the text and icons occupy, not counting the last icon's trailing margin.
    pub fn text_and_icon_span(&self, text_width: f32) -> f32 {
        let icon = &self.ctx.theme.col_cell.icon;
        let trailing = if self.action_icons_count() > 0 {
            icon.margin.right
        } else {
            0.0
        };
        text_width + self.action_icons_width() - trailing
    }

    /// Text anchor and first icon position for a label `text_width` wide.
    pub fn text_layout(&self, text_width: f32) -> TextLayout {
        let content = self.content_area();
        let icon = &self.ctx.theme.col_cell.icon;

        match self.kind {
            CellKind::Leaf => {
                let position = text_and_following_icon_position(
                    &content,
                    &self.text_style(),
                    text_width,
                    icon,
                    self.action_icons_count(),
                );
                TextLayout {
                    kind: self.kind,
                    text: position.text,
                    anchor: position.text,
                    first_icon: position.icon,
                    text_width,
                }
            }
            CellKind::Group => {
                let span = self.text_and_icon_span(text_width);
                let start =
                    map_to_visible_window(self.ctx.config.viewport(), content.x_range(), span);
                let anchor = Point::new(start + span / 2.0, content.y + content.height / 2.0);
                let block_start = anchor.x - span / 2.0;
                TextLayout {
                    kind: self.kind,
                    text: Point::new(block_start + text_width / 2.0, anchor.y),
                    anchor,
                    first_icon: Point::new(
                        block_start + text_width + icon.margin.left,
                        anchor.y - icon.size / 2.0,
                    ),
                    text_width,
                }
            }
        }
    }

    /// Top-left corners of every action icon, left to right.
    pub fn icon_positions(&self, layout: &TextLayout) -> Vec<Point> {
        let icon = &self.ctx.theme.col_cell.icon;
        let pitch = icon.size + icon.margin.left;
        (0..self.action_icons_count())
            .map(|i| Point::new(layout.first_icon.x + pitch * i as f32, layout.first_icon.y))
            .collect()
    }

    fn draw_text_shape(&self, scene: &mut dyn Scene) -> TextLayout {
        let style = self.text_style();
        let value = self.formatted_value();
        let text = truncate_text(scene, &value.formatted_value, self.max_text_width(), &style);
        let text_width = scene.measure_text(&text, &style).min(self.max_text_width());
        let layout = self.text_layout(text_width);
        scene.draw_text(&text, layout.text, &style);
        layout
    }

    fn draw_action_icons(&self, scene: &mut dyn Scene, layout: &TextLayout) {
        let icon = &self.ctx.theme.col_cell.icon;
        for (name, at) in self.icon_names.iter().zip(self.icon_positions(layout)) {
            scene.draw_icon(name, at, icon.size, &icon.fill);
        }
    }

    fn draw_borders(&self, scene: &mut dyn Scene) {
        let bbox = self.node.bbox();
        let cell = &self.ctx.theme.col_cell.cell;
        for edge in [CellBorderPosition::Top, CellBorderPosition::Right] {
            let border = border_position_and_style(edge, &bbox, cell);
            scene.draw_line(border.position, &border.style);
        }
    }

    /// Deterministic name of this field's row height zone
    pub fn horizontal_resize_area_name(&self) -> String {
        format!("{HORIZONTAL_RESIZE_AREA_KEY_PRE}{}", self.node.key)
    }

    /// Deterministic name of this leaf's column width zone
    pub fn vertical_resize_area_name(&self) -> String {
        format!("{VERTICAL_RESIZE_AREA_KEY_PRE}{}", self.node.id)
    }

    /// Row height zone spanning the corner and the whole header width at the
    /// bottom edge of this cell's row.
    pub fn column_height_zone(&self) -> Option<ResizeHotZone> {
        if !self.ctx.resize.col_cell_vertical {
            return None;
        }
        let config = self.ctx.config;
        let theme = &self.ctx.theme.resize_area;

        let x = config.position.x - config.corner_width;
        let y = config.position.y + self.node.y;
        let width = config.corner_width + config.width;
        let bbox = Rect::new(
            x,
            y + self.node.height - theme.size / 2.0,
            width,
            theme.size,
        );

        let info = ResizeInfo {
            direction: ResizeDirection::Vertical,
            effect: ResizeEffect::Field,
            id: self.node.key.clone(),
            offset_x: x,
            offset_y: y,
            width,
            height: self.node.height,
            size: theme.size,
        };
        Some(ResizeHotZone::new(
            self.horizontal_resize_area_name(),
            bbox,
            info,
            theme,
        ))
    }

    /// Whether this leaf's width zone intersects the visible clip area.
    pub fn should_add_vertical_resize_area(&self) -> bool {
        let config = self.ctx.config;
        let size = self.ctx.theme.resize_area.size;
        let area = Rect::new(
            self.node.x + self.node.width - size / 2.0,
            self.node.y,
            size,
            self.node.height,
        );
        should_add_resize_area(
            &area,
            &config.resize_clip_area(),
            ScrollOffset {
                scroll_x: config.scroll_x,
                scroll_y: config.scroll_y,
            },
        )
    }

    /// Screen origin of this cell
    pub fn vertical_resize_area_offset(&self) -> Point {
        let config = self.ctx.config;
        Point::new(
            config.position.x + self.node.x - config.scroll_x,
            config.position.y + self.node.y,
        )
    }

    /// Column width zone on the right edge of a visible leaf.
    pub fn column_width_zone(&self) -> Option<ResizeHotZone> {
        if self.kind != CellKind::Leaf
            || !self.ctx.resize.col_cell_horizontal
            || !self.should_add_vertical_resize_area()
        {
            return None;
        }
        let theme = &self.ctx.theme.resize_area;
        let offset = self.vertical_resize_area_offset();

        // Totals columns are not resizable by label
        let parent_is_totals = self
            .ctx
            .tree
            .parent(self.id)
            .is_some_and(|parent| parent.is_totals);
        let id = if parent_is_totals {
            String::new()
        } else {
            self.node.label.clone()
        };

        let info = ResizeInfo {
            direction: ResizeDirection::Horizontal,
            effect: ResizeEffect::Cell,
            id,
            offset_x: offset.x,
            offset_y: offset.y,
            width: self.node.width,
            height: self.node.height,
            size: theme.size,
        };
        let bbox = Rect::new(
            offset.x + self.node.width - theme.size / 2.0,
            offset.y,
            theme.size,
            self.node.height,
        );
        Some(
            ResizeHotZone::new(self.vertical_resize_area_name(), bbox, info, theme)
                .scrolled_with(self.ctx.config.scroll_x),
        )
    }

    fn draw_horizontal_resize_area(&self, group: &mut ResizeGroup) {
        // Drawn once per header row
        if group.contains(&self.horizontal_resize_area_name()) {
            return;
        }
        if let Some(zone) = self.column_height_zone() {
            group.register(zone);
        }
    }

    fn draw_vertical_resize_area(&self, group: &mut ResizeGroup) {
        if let Some(zone) = self.column_width_zone() {
            group.register(zone);
        }
    }

    fn draw_resize_area(&self, registry: &mut ResizeRegistry) {
        let group = registry.get_or_create_group(KEY_GROUP_COL_RESIZE_AREA);
        self.draw_horizontal_resize_area(group);
        self.draw_vertical_resize_area(group);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp, clippy::unwrap_used, clippy::indexing_slicing)]

    use super::*;
    use crate::cell::format::IdentityFormatter;
    use crate::cell::icons::ActionIconConfig;
    use crate::layout::ColumnSpec;
    use crate::render::SceneGraph;

    fn tree() -> HeaderTree {
        HeaderTree::build(
            &[
                ColumnSpec::group(
                    "region",
                    "East",
                    vec![
                        ColumnSpec::leaf("city", "Boston", 100.0),
                        ColumnSpec::leaf("city", "New York", 120.0),
                    ],
                ),
                ColumnSpec::group(
                    "region",
                    "Total",
                    vec![ColumnSpec::leaf("city", "Sum", 80.0)],
                )
                .totals(),
            ],
            30.0,
        )
    }

    fn with_cell<R>(
        config: &HeaderViewConfig,
        icons: &Vec<ActionIconConfig>,
        id: usize,
        f: impl FnOnce(&ColCell<'_>) -> R,
    ) -> R {
        let tree = tree();
        let theme = HeaderTheme::default();
        let ctx = HeaderContext {
            tree: &tree,
            config,
            theme: &theme,
            resize: ResizeInteractionOptions::default(),
            icons,
            formatter: &IdentityFormatter,
        };
        let cell = ColCell::new(ctx, NodeId(id)).unwrap();
        f(&cell)
    }

    #[test]
    fn test_kind_and_text_style() {
        let config = HeaderViewConfig::default();
        with_cell(&config, &Vec::new(), 0, |cell| {
            assert_eq!(cell.kind(), CellKind::Group);
            assert_eq!(cell.cell_type(), CellType::ColCell);
            let style = cell.text_style();
            assert_eq!(style.text_align, TextAlign::Center);
            assert_eq!(style.font_weight, 700);
        });
        with_cell(&config, &Vec::new(), 1, |cell| {
            assert_eq!(cell.kind(), CellKind::Leaf);
            let style = cell.text_style();
            assert_eq!(style.text_align, TextAlign::Right);
            assert_eq!(style.font_weight, 400);
        });
    }

    #[test]
    fn test_zero_icons_span_is_text_width() {
        let config = HeaderViewConfig::default();
        with_cell(&config, &Vec::new(), 0, |cell| {
            assert_eq!(cell.action_icons_width(), 0.0);
            assert_eq!(cell.text_and_icon_span(40.0), 40.0);
        });
    }

    #[test]
    fn test_icons_follow_text_layout() {
        let config = HeaderViewConfig::default();
        let icons = vec![ActionIconConfig {
            icon_names: vec!["SortUp".into(), "SortDown".into()],
            ..ActionIconConfig::default()
        }];
        with_cell(&config, &icons, 0, |cell| {
            let layout = cell.text_layout(40.0);
            let positions = cell.icon_positions(&layout);
            assert_eq!(positions.len(), 2);
            assert_eq!(positions[1].x - positions[0].x, 14.0);
            assert_eq!(positions[0].x, layout.text.x + 20.0 + 4.0);
        });
    }

    #[test]
    fn test_totals_children_have_empty_resize_id() {
        let config = HeaderViewConfig::default();
        with_cell(&config, &Vec::new(), 4, |cell| {
            let zone = cell.column_width_zone().unwrap();
            assert_eq!(zone.info.id, "");
        });
        with_cell(&config, &Vec::new(), 1, |cell| {
            let zone = cell.column_width_zone().unwrap();
            assert_eq!(zone.info.id, "Boston");
        });
    }

    #[test]
    fn test_group_has_no_width_zone() {
        let config = HeaderViewConfig::default();
        with_cell(&config, &Vec::new(), 0, |cell| {
            assert!(cell.column_width_zone().is_none());
            assert!(cell.column_height_zone().is_some());
        });
    }

    #[test]
    fn test_init_draw_order() {
        let config = HeaderViewConfig::default();
        with_cell(&config, &Vec::new(), 1, |cell| {
            let mut scene = SceneGraph::with_char_width(8.0);
            let mut registry = ResizeRegistry::new();
            cell.init(&mut scene, &mut registry);

            let kinds: Vec<&str> = scene
                .shapes()
                .iter()
                .map(|shape| match shape {
                    crate::render::Shape::Rect { .. } => "rect",
                    crate::render::Shape::Line { .. } => "line",
                    crate::render::Shape::Text { .. } => "text",
                    crate::render::Shape::Icon { .. } => "icon",
                })
                .collect();
            assert_eq!(kinds, vec!["rect", "rect", "text", "line", "line"]);
            assert_eq!(
                registry.group(KEY_GROUP_COL_RESIZE_AREA).unwrap().len(),
                2
            );
        });
    }
}
