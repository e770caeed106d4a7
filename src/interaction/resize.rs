//! Resize hot zones and the registry that de-duplicates them.
//!
//! Hot zones are thin rectangles drawn on the interaction layer. A header may
//! redraw a cell many times (scrolling brings it back into view, incremental
//! updates), so every zone has a deterministic name and a group holds at most
//! one zone per name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{Rect, ResizeAreaTheme, ResizeDirection, ResizeEffect};

/// Owner id of the column header's resize group
pub const KEY_GROUP_COL_RESIZE_AREA: &str = "colResizeArea";

/// Name prefix of header row height zones (one per field)
pub const HORIZONTAL_RESIZE_AREA_KEY_PRE: &str = "colResize_";

/// Name prefix of leaf column width zones (one per leaf node)
pub const VERTICAL_RESIZE_AREA_KEY_PRE: &str = "colCellResize_";

/// What a drag on a hot zone resizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeInfo {
    pub direction: ResizeDirection,
    pub effect: ResizeEffect,
    /// Field key or column label to resize; empty when not resizable by label
    pub id: String,
    /// Screen origin of the resized cell
    pub offset_x: f32,
    pub offset_y: f32,
    /// Current size of the resized cell
    pub width: f32,
    pub height: f32,
    /// Hot zone thickness
    pub size: f32,
}

impl ResizeInfo {
    /// Size along the resize direction
    pub fn current_size(&self) -> f32 {
        match self.direction {
            ResizeDirection::Horizontal => self.width,
            ResizeDirection::Vertical => self.height,
        }
    }
}

/// An interactive resize region in screen coordinates.
///
/// Zones that follow the header content remember the scroll offset they were
/// computed at, so they stay valid across scrolls until the next full render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeHotZone {
    /// Unique key within a group
    pub name: String,
    pub bbox: Rect,
    pub info: ResizeInfo,
    pub fill: String,
    pub fill_opacity: f32,
    pub cursor: String,
    /// Horizontal scroll offset `bbox` was computed at; `None` for zones
    /// pinned to the viewport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_x: Option<f32>,
}

impl ResizeHotZone {
    /// Build a zone styled from the resize theme.
    pub fn new(name: String, bbox: Rect, info: ResizeInfo, theme: &ResizeAreaTheme) -> Self {
        Self {
            name,
            bbox,
            cursor: info.direction.cursor().to_string(),
            info,
            fill: theme.background.clone(),
            fill_opacity: theme.background_opacity,
            scroll_x: None,
        }
    }

    /// Mark the zone as following the header content, computed at `scroll_x`.
    pub fn scrolled_with(mut self, scroll_x: f32) -> Self {
        self.scroll_x = Some(scroll_x);
        self
    }

    pub fn direction(&self) -> ResizeDirection {
        self.info.direction
    }

    /// Horizontal distance the zone moved on screen since it was computed.
    fn shift(&self, scroll_x: f32) -> f32 {
        self.scroll_x.map_or(0.0, |anchor| anchor - scroll_x)
    }

    /// Whether the screen point hits the zone while the header is scrolled to `scroll_x`.
    pub fn contains(&self, x: f32, y: f32, scroll_x: f32) -> bool {
        self.bbox.contains(x - self.shift(scroll_x), y)
    }

    /// The zone in screen coordinates for the header scrolled to `scroll_x`.
    pub fn at_scroll(&self, scroll_x: f32) -> Self {
        let shift = self.shift(scroll_x);
        let mut zone = self.clone();
        zone.bbox.x += shift;
        zone.info.offset_x += shift;
        zone.scroll_x = self.scroll_x.map(|_| scroll_x);
        zone
    }
}

/// Zones of one owner, keyed by name in insertion order
#[derive(Debug, Clone, Default)]
pub struct ResizeGroup {
    zones: IndexMap<String, ResizeHotZone>,
}

impl ResizeGroup {
    /// Insert `zone` unless a zone with the same name exists.
    ///
    /// Returns whether the zone was inserted.
    pub fn register(&mut self, zone: ResizeHotZone) -> bool {
        if self.zones.contains_key(&zone.name) {
            return false;
        }
        tracing::trace!(name = %zone.name, "register resize zone");
        self.zones.insert(zone.name.clone(), zone);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.zones.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ResizeHotZone> {
        self.zones.get(name)
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zones(&self) -> impl Iterator<Item = &ResizeHotZone> {
        self.zones.values()
    }

    /// Topmost zone containing the screen point at the given scroll offset.
    /// Later zones are drawn above earlier ones.
    pub fn hit_test(&self, x: f32, y: f32, scroll_x: f32) -> Option<&ResizeHotZone> {
        self.zones
            .values()
            .rev()
            .find(|zone| zone.contains(x, y, scroll_x))
    }
}

/// Resize groups of one header instance, keyed by owner id
#[derive(Debug, Clone, Default)]
pub struct ResizeRegistry {
    groups: HashMap<String, ResizeGroup>,
}

impl ResizeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The group for `owner`, created on first use.
    pub fn get_or_create_group(&mut self, owner: &str) -> &mut ResizeGroup {
        self.groups.entry(owner.to_string()).or_default()
    }

    pub fn group(&self, owner: &str) -> Option<&ResizeGroup> {
        self.groups.get(owner)
    }

    /// Register `zone` in the group of `owner`; no-op if the name is taken.
    pub fn register(&mut self, owner: &str, zone: ResizeHotZone) -> bool {
        self.get_or_create_group(owner).register(zone)
    }

    /// Remove every zone of `owner` (full header rebuild).
    pub fn clear(&mut self, owner: &str) {
        if let Some(group) = self.groups.get_mut(owner) {
            tracing::debug!(owner, zones = group.len(), "clear resize group");
            group.clear();
        }
    }

    /// Topmost zone of `owner` containing the screen point at `scroll_x`.
    pub fn hit_test(
        &self,
        owner: &str,
        x: f32,
        y: f32,
        scroll_x: f32,
    ) -> Option<&ResizeHotZone> {
        self.groups.get(owner)?.hit_test(x, y, scroll_x)
    }
}
