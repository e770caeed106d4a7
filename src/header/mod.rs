//! Column header component.
//!
//! Owns the header tree, the shared view config and the resize registry, and
//! draws only the cells intersecting the visible window. Scroll changes
//! rebuild the resize group from scratch; single-cell redraws keep it.

use serde::{Deserialize, Serialize};

use crate::cell::{
    ActionIconConfig, ColCell, FieldFormatter, HeaderContext, IdentityFormatter, TextLayout,
};
use crate::error::Result;
use crate::interaction::{
    ResizeDrag, ResizeHotZone, ResizeRegistry, KEY_GROUP_COL_RESIZE_AREA,
};
use crate::layout::{ColumnSpec, HeaderTree, NodeId, DEFAULT_LEVEL_HEIGHT};
use crate::render::{Scene, SceneGraph, Shape};
use crate::types::{HeaderTheme, HeaderViewConfig, Point, ResizeInteractionOptions};

/// Complete description of a column header, loadable from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderSpec {
    pub config: HeaderViewConfig,
    pub columns: Vec<ColumnSpec>,
    /// Height of one header level; defaults to [`DEFAULT_LEVEL_HEIGHT`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_height: Option<f32>,
    pub theme: HeaderTheme,
    pub resize: ResizeInteractionOptions,
    pub action_icons: Vec<ActionIconConfig>,
}

impl HeaderSpec {
    /// Parse a header description from JSON.
    ///
    /// # Errors
    /// Returns an error if the JSON does not describe a header.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Layout of one drawn cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCell {
    pub node: NodeId,
    pub id: String,
    pub layout: TextLayout,
}

/// Everything one full render produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub cells: Vec<RenderedCell>,
    pub zones: Vec<ResizeHotZone>,
    pub shapes: Vec<Shape>,
}

/// Lay out a JSON header spec into a JSON [`LayoutReport`].
///
/// # Errors
/// Returns an error if the header description is invalid or the report cannot be serialized.
pub fn layout_report_json(spec_json: &str) -> Result<String> {
    let mut header = ColHeader::new(HeaderSpec::from_json(spec_json)?);
    let report = header.layout_report(&mut SceneGraph::new());
    Ok(serde_json::to_string_pretty(&report)?)
}

/// The column header of the grid
pub struct ColHeader {
    tree: HeaderTree,
    config: HeaderViewConfig,
    theme: HeaderTheme,
    resize: ResizeInteractionOptions,
    action_icons: Vec<ActionIconConfig>,
    formatter: Box<dyn FieldFormatter>,
    registry: ResizeRegistry,
}

impl ColHeader {
    pub fn new(spec: HeaderSpec) -> Self {
        let level_height = spec.level_height.unwrap_or(DEFAULT_LEVEL_HEIGHT);
        let tree = HeaderTree::build(&spec.columns, level_height);
        tracing::debug!(
            nodes = tree.len(),
            depth = tree.depth(),
            total_width = tree.total_width(),
            "built column header"
        );
        Self {
            tree,
            config: spec.config,
            theme: spec.theme,
            resize: spec.resize,
            action_icons: spec.action_icons,
            formatter: Box::new(IdentityFormatter),
            registry: ResizeRegistry::new(),
        }
    }

    /// Replace the label formatter.
    pub fn with_formatter(mut self, formatter: impl FieldFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn tree(&self) -> &HeaderTree {
        &self.tree
    }

    pub fn config(&self) -> &HeaderViewConfig {
        &self.config
    }

    pub fn theme(&self) -> &HeaderTheme {
        &self.theme
    }

    pub fn registry(&self) -> &ResizeRegistry {
        &self.registry
    }

    /// Borrow the read-only cell context and the registry at the same time.
    fn split(&mut self) -> (HeaderContext<'_>, &mut ResizeRegistry) {
        let ctx = HeaderContext {
            tree: &self.tree,
            config: &self.config,
            theme: &self.theme,
            resize: self.resize,
            icons: &self.action_icons,
            formatter: self.formatter.as_ref(),
        };
        (ctx, &mut self.registry)
    }

    /// Nodes intersecting the visible window, in tree order.
    pub fn visible_nodes(&self) -> Vec<NodeId> {
        self.tree.nodes_in_range(self.config.viewport())
    }

    /// Full redraw: clears the resize zones and draws every visible cell.
    ///
    /// Cells with invalid geometry are logged and skipped.
    pub fn render(&mut self, scene: &mut dyn Scene) -> Vec<RenderedCell> {
        let visible = self.visible_nodes();
        let (ctx, registry) = self.split();
        registry.clear(KEY_GROUP_COL_RESIZE_AREA);

        let mut rendered = Vec::with_capacity(visible.len());
        for id in visible {
            match ColCell::new(ctx, id) {
                Ok(cell) => {
                    let layout = cell.init(scene, registry);
                    rendered.push(RenderedCell {
                        node: id,
                        id: cell.meta().id.clone(),
                        layout,
                    });
                }
                Err(e) => tracing::warn!(error = %e, "skipping header cell"),
            }
        }
        tracing::debug!(
            cells = rendered.len(),
            scroll_x = ctx.config.scroll_x,
            "rendered column header"
        );
        rendered
    }

    /// Redraw a single cell; previously registered zones are kept.
    ///
    /// # Errors
    /// Returns an error for unknown nodes or nodes with negative sizes.
    pub fn draw_cell(&mut self, id: NodeId, scene: &mut dyn Scene) -> Result<TextLayout> {
        let (ctx, registry) = self.split();
        let cell = ColCell::new(ctx, id)?;
        Ok(cell.init(scene, registry))
    }

    /// Set the scroll offset, clamped to the scrollable range.
    ///
    /// Takes effect on the next [`render`](Self::render).
    pub fn set_scroll(&mut self, scroll_x: f32, scroll_y: f32) {
        let max_x = (self.tree.total_width() - self.config.width).max(0.0);
        self.config.scroll_x = scroll_x.clamp(0.0, max_x);
        self.config.scroll_y = scroll_y.max(0.0);
    }

    /// Resize the visible header area.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.config.width = width.max(0.0);
        self.config.height = height.max(0.0);
        let (x, y) = (self.config.scroll_x, self.config.scroll_y);
        self.set_scroll(x, y);
    }

    /// Registered resize zones, in screen coordinates at the current scroll.
    pub fn resize_zones(&self) -> Vec<ResizeHotZone> {
        let scroll_x = self.config.scroll_x;
        self.registry
            .group(KEY_GROUP_COL_RESIZE_AREA)
            .map(|group| group.zones().map(|zone| zone.at_scroll(scroll_x)).collect())
            .unwrap_or_default()
    }

    /// Topmost resize zone under the pointer, in screen coordinates.
    pub fn resize_area_at(&self, x: f32, y: f32) -> Option<ResizeHotZone> {
        let scroll_x = self.config.scroll_x;
        self.registry
            .hit_test(KEY_GROUP_COL_RESIZE_AREA, x, y, scroll_x)
            .map(|zone| zone.at_scroll(scroll_x))
    }

    /// Render into a scene graph and collect cells, zones and shapes.
    pub fn layout_report(&mut self, scene: &mut SceneGraph) -> LayoutReport {
        scene.clear();
        let cells = self.render(scene);
        LayoutReport {
            cells,
            zones: self.resize_zones(),
            shapes: scene.shapes().to_vec(),
        }
    }

    /// Start a resize drag if the pointer is on a hot zone.
    pub fn begin_resize(&self, x: f32, y: f32) -> Option<ResizeDrag> {
        self.resize_area_at(x, y)
            .map(|zone| ResizeDrag::begin(&zone, Point::new(x, y)))
    }
}
