//! Common test builders for header layout tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use sheetgrid::cell::{ActionIconConfig, ColCell, HeaderContext, IdentityFormatter};
use sheetgrid::header::HeaderSpec;
use sheetgrid::layout::{ColumnSpec, HeaderTree, NodeId};
use sheetgrid::types::{HeaderTheme, HeaderViewConfig, Padding, ResizeInteractionOptions};

/// Fixed glyph width used with `SceneGraph::with_char_width`
pub const CHAR_WIDTH: f32 = 10.0;

/// Header level height used by every fixture
pub const LEVEL_HEIGHT: f32 = 30.0;

/// `count` leaves of field `city`, `width` pixels each
pub fn cities(count: usize, width: f32) -> Vec<ColumnSpec> {
    (0..count)
        .map(|i| ColumnSpec::leaf("city", &format!("City {i}"), width))
        .collect()
}

/// East (Boston, NYC) and West (LA), 100px leaves
pub fn regions() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::group(
            "region",
            "East",
            vec![
                ColumnSpec::leaf("city", "Boston", 100.0),
                ColumnSpec::leaf("city", "NYC", 100.0),
            ],
        ),
        ColumnSpec::group("region", "West", vec![ColumnSpec::leaf("city", "LA", 100.0)]),
    ]
}

/// Theme without cell padding, so content boxes equal cell boxes
pub fn unpadded_theme() -> HeaderTheme {
    let mut theme = HeaderTheme::default();
    theme.col_cell.cell.padding = Padding::new(0.0, 0.0, 0.0, 0.0);
    theme
}

pub fn spec(columns: Vec<ColumnSpec>) -> HeaderSpec {
    HeaderSpec {
        columns,
        level_height: Some(LEVEL_HEIGHT),
        ..HeaderSpec::default()
    }
}

/// Owned pieces a `HeaderContext` borrows from
pub struct Fixture {
    pub tree: HeaderTree,
    pub config: HeaderViewConfig,
    pub theme: HeaderTheme,
    pub resize: ResizeInteractionOptions,
    pub icons: Vec<ActionIconConfig>,
}

impl Fixture {
    pub fn new(columns: &[ColumnSpec]) -> Self {
        Self {
            tree: HeaderTree::build(columns, LEVEL_HEIGHT),
            config: HeaderViewConfig::default(),
            theme: unpadded_theme(),
            resize: ResizeInteractionOptions::default(),
            icons: Vec::new(),
        }
    }

    pub fn with_scroll(mut self, scroll_x: f32) -> Self {
        self.config.scroll_x = scroll_x;
        self
    }

    pub fn with_icons(mut self, names: &[&str]) -> Self {
        self.icons = vec![ActionIconConfig {
            icon_names: names.iter().map(|n| (*n).to_string()).collect(),
            ..ActionIconConfig::default()
        }];
        self
    }

    pub fn ctx(&self) -> HeaderContext<'_> {
        HeaderContext {
            tree: &self.tree,
            config: &self.config,
            theme: &self.theme,
            resize: self.resize,
            icons: &self.icons,
            formatter: &IdentityFormatter,
        }
    }

    pub fn node(&self, path: &str) -> NodeId {
        self.tree
            .find_by_id(path)
            .unwrap_or_else(|| panic!("no header node {path}"))
    }

    pub fn cell(&self, path: &str) -> ColCell<'_> {
        ColCell::new(self.ctx(), self.node(path)).expect("valid cell geometry")
    }
}
