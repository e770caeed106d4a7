//! Resize hot zone tests: registration, clipping, hit testing and dragging.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]

mod common;

use common::{cities, regions, Fixture};
use sheetgrid::header::ColHeader;
use sheetgrid::interaction::{ResizeRegistry, KEY_GROUP_COL_RESIZE_AREA, MIN_CELL_SIZE};
use sheetgrid::layout::ColumnSpec;
use sheetgrid::render::SceneGraph;
use sheetgrid::types::{Point, ResizeDirection, ResizeEffect, ResizeInteractionOptions};

fn zone_names(header: &ColHeader) -> Vec<String> {
    header
        .resize_zones()
        .iter()
        .map(|zone| zone.name.clone())
        .collect()
}

#[test]
fn test_render_registers_row_and_column_zones() {
    let mut header = ColHeader::new(common::spec(regions()));
    header.render(&mut SceneGraph::new());

    assert_eq!(
        zone_names(&header),
        [
            "colResize_region",
            "colResize_city",
            "colCellResize_root[&]East[&]Boston",
            "colCellResize_root[&]East[&]NYC",
            "colCellResize_root[&]West[&]LA",
        ]
    );
}

#[test]
fn test_row_zone_registered_once_across_draws() {
    let mut header = ColHeader::new(common::spec(regions()));
    let mut scene = SceneGraph::new();
    header.render(&mut scene);
    header.render(&mut scene);

    let boston = header.tree().find_by_id("root[&]East[&]Boston").unwrap();
    let west = header.tree().find_by_id("root[&]West").unwrap();
    header.draw_cell(boston, &mut scene).unwrap();
    header.draw_cell(west, &mut scene).unwrap();

    let names = zone_names(&header);
    assert_eq!(names.len(), 5);
    assert_eq!(
        names.iter().filter(|n| *n == "colResize_region").count(),
        1
    );
}

#[test]
fn test_row_zone_spans_corner_and_header() {
    let mut fixture = Fixture::new(&regions());
    fixture.config.position = Point::new(20.0, 10.0);
    fixture.config.corner_width = 40.0;

    let zone = fixture.cell("root[&]East").column_height_zone().unwrap();
    assert_eq!(zone.name, "colResize_region");
    assert_eq!(zone.bbox.x, -20.0);
    assert_eq!(zone.bbox.y, 38.5);
    assert_eq!(zone.bbox.width, 840.0);
    assert_eq!(zone.bbox.height, 3.0);
    assert_eq!(zone.info.direction, ResizeDirection::Vertical);
    assert_eq!(zone.info.effect, ResizeEffect::Field);
    assert_eq!(zone.info.id, "region");
    assert_eq!(zone.cursor, "row-resize");
}

#[test]
fn test_offscreen_leaf_has_no_width_zone() {
    let fixture = Fixture::new(&cities(20, 100.0));
    assert!(fixture.cell("root[&]City 15").column_width_zone().is_none());

    let visible = fixture.cell("root[&]City 3").column_width_zone().unwrap();
    assert_eq!(visible.bbox.x, 398.5);
    assert_eq!(visible.info.id, "City 3");
    assert_eq!(visible.cursor, "col-resize");

    let scrolled = Fixture::new(&cities(20, 100.0)).with_scroll(1000.0);
    let zone = scrolled.cell("root[&]City 15").column_width_zone().unwrap();
    assert_eq!(zone.bbox.x, 598.5);
    assert_eq!(zone.scroll_x, Some(1000.0));
    assert!(scrolled.cell("root[&]City 3").column_width_zone().is_none());
}

#[test]
fn test_group_cells_have_no_width_zone() {
    let fixture = Fixture::new(&regions());
    assert!(fixture.cell("root[&]East").column_width_zone().is_none());
}

#[test]
fn test_totals_children_are_not_resizable_by_label() {
    let mut columns = regions();
    columns.push(
        ColumnSpec::group("region", "Total", vec![ColumnSpec::leaf("city", "Sum", 100.0)])
            .totals(),
    );
    let fixture = Fixture::new(&columns);

    let zone = fixture
        .cell("root[&]Total[&]Sum")
        .column_width_zone()
        .unwrap();
    assert_eq!(zone.name, "colCellResize_root[&]Total[&]Sum");
    assert_eq!(zone.info.id, "");
}

#[test]
fn test_disabled_resize_registers_nothing() {
    let mut spec = common::spec(regions());
    spec.resize = ResizeInteractionOptions::disabled();
    let mut header = ColHeader::new(spec);
    header.render(&mut SceneGraph::new());
    assert!(header.resize_zones().is_empty());
    assert!(header.resize_area_at(100.0, 45.0).is_none());
}

#[test]
fn test_drag_column_width() {
    let mut header = ColHeader::new(common::spec(regions()));
    header.render(&mut SceneGraph::new());

    let zone = header.resize_area_at(100.0, 45.0).unwrap();
    assert_eq!(zone.name, "colCellResize_root[&]East[&]Boston");

    let mut drag = header.begin_resize(100.0, 45.0).unwrap();
    drag.update(Point::new(140.0, 45.0));
    let event = drag.finish();
    assert_eq!(event.id, "Boston");
    assert_eq!(event.direction, ResizeDirection::Horizontal);
    assert_eq!(event.effect, ResizeEffect::Cell);
    assert_eq!(event.old_size, 100.0);
    assert_eq!(event.new_size, 140.0);
}

#[test]
fn test_drag_row_height_is_clamped() {
    let mut header = ColHeader::new(common::spec(regions()));
    header.render(&mut SceneGraph::new());

    let mut drag = header.begin_resize(400.0, 29.0).unwrap();
    assert_eq!(drag.info().id, "region");
    drag.update(Point::new(400.0, 49.0));
    assert_eq!(drag.new_size(), 50.0);

    drag.update(Point::new(400.0, -100.0));
    assert_eq!(drag.finish().new_size, MIN_CELL_SIZE);
}

#[test]
fn test_registry_groups_are_independent() {
    let fixture = Fixture::new(&regions());
    let mut registry = ResizeRegistry::new();
    let zone = fixture
        .cell("root[&]East[&]Boston")
        .column_width_zone()
        .unwrap();

    assert!(registry.register(KEY_GROUP_COL_RESIZE_AREA, zone.clone()));
    assert!(!registry.register(KEY_GROUP_COL_RESIZE_AREA, zone.clone()));
    assert!(registry.register("rowResizeArea", zone));

    registry.clear(KEY_GROUP_COL_RESIZE_AREA);
    assert!(registry
        .hit_test(KEY_GROUP_COL_RESIZE_AREA, 100.0, 45.0, 0.0)
        .is_none());
    assert!(registry.hit_test("rowResizeArea", 100.0, 45.0, 0.0).is_some());
}

#[test]
fn test_repeated_labels_each_get_a_width_zone() {
    let mut header = ColHeader::new(common::spec(vec![
        ColumnSpec::leaf("city", "Sales", 100.0),
        ColumnSpec::leaf("city", "Sales", 100.0),
    ]));
    header.render(&mut SceneGraph::new());

    assert_eq!(
        zone_names(&header),
        [
            "colResize_city",
            "colCellResize_root[&]Sales",
            "colCellResize_root[&]Sales#1",
        ]
    );
    let zone = header.resize_area_at(200.0, 15.0).unwrap();
    assert_eq!(zone.name, "colCellResize_root[&]Sales#1");
    assert_eq!(zone.info.id, "Sales");
}

#[test]
fn test_incremental_draw_after_scroll_hits_the_column_under_the_pointer() {
    let mut header = ColHeader::new(common::spec(cities(20, 100.0)));
    let mut scene = SceneGraph::new();
    header.render(&mut scene);

    header.set_scroll(200.0, 0.0);
    let scrolled_in = header.tree().find_by_id("root[&]City 9").unwrap();
    header.draw_cell(scrolled_in, &mut scene).unwrap();

    let zone = header.resize_area_at(100.0, 15.0).unwrap();
    assert_eq!(zone.info.id, "City 2");
    assert_eq!(zone.bbox.x, 98.5);

    let mut drag = header.begin_resize(100.0, 15.0).unwrap();
    drag.update(Point::new(130.0, 15.0));
    let event = drag.finish();
    assert_eq!(event.id, "City 2");
    assert_eq!(event.new_size, 130.0);

    // The scrolled-out column no longer sits at its old screen position
    let stale = header
        .resize_zones()
        .into_iter()
        .find(|zone| zone.info.id == "City 0")
        .unwrap();
    assert_eq!(stale.bbox.x, -101.5);
}
