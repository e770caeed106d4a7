//! Arena of column header nodes.
//!
//! Positions are computed once when the tree is built, the same way sheet
//! layouts accumulate column widths. Parent links are plain indices into the
//! arena, used for read-only lookups.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::types::{AreaRange, Rect};

/// Separator between labels in a node id path
pub const ID_SEPARATOR: &str = "[&]";

/// Root prefix of every node id
pub const ROOT_ID: &str = "root";

/// Default leaf column width in pixels
pub const DEFAULT_COL_WIDTH: f32 = 96.0;

/// Default height of one header level in pixels
pub const DEFAULT_LEVEL_HEIGHT: f32 = 30.0;

/// Id paths of sibling columns under `parent_path`.
///
/// A repeated label gets a `#n` suffix (`n` counting earlier siblings with the
/// same label), so every node id is unique.
fn sibling_paths(parent_path: &str, columns: &[ColumnSpec]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    columns
        .iter()
        .map(|column| {
            let count = seen.entry(column.label.as_str()).or_insert(0);
            let path = if *count == 0 {
                format!("{parent_path}{ID_SEPARATOR}{}", column.label)
            } else {
                format!("{parent_path}{ID_SEPARATOR}{}#{count}", column.label)
            };
            *count += 1;
            path
        })
        .collect()
}

/// Index of a node in a [`HeaderTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Logical description of one column header cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderNode {
    /// Unique path, e.g. `root[&]East[&]Sales`
    pub id: String,
    /// Field key this node belongs to
    pub key: String,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub level: u32,
    pub is_leaf: bool,
    pub is_totals: bool,
    #[serde(skip)]
    pub parent: Option<NodeId>,
    #[serde(skip)]
    pub children: Vec<NodeId>,
}

impl HeaderNode {
    /// Logical bounding box in header coordinates
    pub fn bbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn x_range(&self) -> AreaRange {
        AreaRange::new(self.x, self.width)
    }
}

/// Input description of a column (or column group)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
    /// Leaf width; ignored for groups, which span their children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    pub is_totals: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ColumnSpec>,
}

impl ColumnSpec {
    pub fn leaf(key: &str, label: &str, width: f32) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            width: Some(width),
            ..Self::default()
        }
    }

    pub fn group(key: &str, label: &str, children: Vec<ColumnSpec>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            children,
            ..Self::default()
        }
    }

    /// Mark this column (and, through lookups, its children) as a totals aggregate.
    pub fn totals(mut self) -> Self {
        self.is_totals = true;
        self
    }

    fn depth(&self) -> u32 {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

/// All column header nodes of one header instance
#[derive(Debug, Clone, Default)]
pub struct HeaderTree {
    nodes: Vec<HeaderNode>,
    roots: Vec<NodeId>,
    depth: u32,
    level_height: f32,
    total_width: f32,
}

impl HeaderTree {
    /// Build the tree and compute every node's position.
    ///
    /// Leaves in a shallow branch stretch down to the bottom of the header so
    /// that all leaves share the same bottom edge.
    pub fn build(columns: &[ColumnSpec], level_height: f32) -> Self {
        let depth = columns.iter().map(ColumnSpec::depth).max().unwrap_or(0);
        let mut tree = Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            depth,
            level_height,
            total_width: 0.0,
        };

        let mut x = 0.0;
        for (column, path) in columns.iter().zip(sibling_paths(ROOT_ID, columns)) {
            let id = tree.place(column, None, &path, 0, x);
            x += tree.get(id).map_or(0.0, |node| node.width);
            tree.roots.push(id);
        }
        tree.total_width = x;
        tree
    }

    fn place(
        &mut self,
        spec: &ColumnSpec,
        parent: Option<NodeId>,
        path: &str,
        level: u32,
        x: f32,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let is_leaf = spec.children.is_empty();
        let height = if is_leaf {
            self.depth.saturating_sub(level) as f32 * self.level_height
        } else {
            self.level_height
        };

        self.nodes.push(HeaderNode {
            id: path.to_string(),
            key: spec.key.clone(),
            label: spec.label.clone(),
            x,
            y: level as f32 * self.level_height,
            width: 0.0,
            height,
            level,
            is_leaf,
            is_totals: spec.is_totals,
            parent,
            children: Vec::new(),
        });

        let width = if is_leaf {
            spec.width.unwrap_or(DEFAULT_COL_WIDTH)
        } else {
            let mut child_x = x;
            let mut children = Vec::with_capacity(spec.children.len());
            let child_paths = sibling_paths(path, &spec.children);
            for (child, child_path) in spec.children.iter().zip(child_paths) {
                let child_id = self.place(child, Some(id), &child_path, level + 1, child_x);
                child_x += self.get(child_id).map_or(0.0, |node| node.width);
                children.push(child_id);
            }
            if let Some(node) = self.nodes.get_mut(id.0) {
                node.children = children;
            }
            child_x - x
        };

        if let Some(node) = self.nodes.get_mut(id.0) {
            node.width = width;
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&HeaderNode> {
        self.nodes.get(id.0)
    }

    /// Like [`get`](Self::get) but reports unknown ids as an error.
    pub fn node(&self, id: NodeId) -> Result<&HeaderNode> {
        self.get(id).ok_or(GridError::UnknownNode(id.0))
    }

    /// Non-owning parent lookup
    pub fn parent(&self, id: NodeId) -> Option<&HeaderNode> {
        self.get(id)?.parent.and_then(|parent| self.get(parent))
    }

    pub fn find_by_id(&self, path: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.id == path)
            .map(NodeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &HeaderNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx), node))
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn leaves(&self) -> impl Iterator<Item = (NodeId, &HeaderNode)> {
        self.iter().filter(|(_, node)| node.is_leaf)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of header levels
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn level_height(&self) -> f32 {
        self.level_height
    }

    /// Logical width of all columns
    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    /// Logical height of the header
    pub fn total_height(&self) -> f32 {
        self.depth as f32 * self.level_height
    }

    /// Nodes whose horizontal extent intersects `range`, in arena order.
    pub fn nodes_in_range(&self, range: AreaRange) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.x_range().overlaps(&range))
            .map(|(id, _)| id)
            .collect()
    }
}
