use super::common::Harness;
use rerail_editor::app::{Modifiers, PointerButton};
use rerail_editor::core::{BorderFeature, BorderPointId, BorderStyle, ScreenPos, WorldPos};
use rerail_editor::{AppIntent, InteractionPhase, ToolMode};
use std::sync::Arc;

fn editing_borders() -> Harness {
    let mut h = Harness::new();
    let a = h.a;
    h.prepare(ToolMode::EditBorders, Some(a));
    h
}

/// Grenzpunkt exakt unter `pos` (Zoomstufe 0, Welt = Screen).
fn border_point_at(h: &Harness, x: i32, y: i32) -> BorderPointId {
    match h
        .state
        .map
        .find_nearest_border_feature(&h.state.view.viewport, ScreenPos::new(x, y), 0)
    {
        Some(BorderFeature::Point(id)) => id,
        other => panic!("kein Grenzpunkt bei ({x},{y}): {other:?}"),
    }
}

#[test]
fn test_drag_border_point_moves_it() {
    let mut h = editing_borders();

    h.drag((500, 500), (520, 560));

    assert_eq!(
        h.inspect().border_point_position(h.b2),
        Some(WorldPos::new(520, 560))
    );
    assert!(h.state.phase.is_idle());
}

#[test]
fn test_drag_on_edge_inserts_point_with_edge_style() {
    let mut h = editing_borders();

    h.press(200, 503);
    assert!(matches!(
        h.state.phase,
        InteractionPhase::DraggingBorderFeature {
            feature: BorderFeature::Edge(..),
            ..
        }
    ));
    h.move_to(200, 540);
    h.release(200, 540);

    let inserted = border_point_at(&h, 200, 540);
    let map = h.inspect();
    assert_eq!(map.border_point_count(), 4);
    assert_eq!(map.border_link(h.b0, inserted), Some(BorderStyle::Thin));
    assert_eq!(map.border_link(inserted, h.b1), Some(BorderStyle::Thin));
    assert_eq!(map.border_link(h.b0, h.b1), None);
}

#[test]
fn test_shift_drag_connects_existing_points_with_current_style() {
    let mut h = editing_borders();
    h.send(AppIntent::BorderStyleRequested {
        style: BorderStyle::Bold,
    });

    h.press_with(100, 500, PointerButton::Primary, Modifiers::SHIFT);
    assert!(matches!(
        h.state.phase,
        InteractionPhase::AddingBorderEdge {
            style: BorderStyle::Bold,
            ..
        }
    ));
    h.move_to(400, 500);
    h.release(498, 501);

    assert_eq!(h.inspect().border_link(h.b0, h.b2), Some(BorderStyle::Bold));
}

#[test]
fn test_shift_drag_into_empty_space_creates_connected_point() {
    let mut h = editing_borders();

    h.press_with(500, 500, PointerButton::Primary, Modifiers::SHIFT);
    h.move_to(700, 300);
    h.release(700, 300);

    let created = border_point_at(&h, 700, 300);
    let map = h.inspect();
    assert_eq!(map.border_point_count(), 4);
    assert_eq!(map.border_link(h.b2, created), Some(BorderStyle::Thin));
}

#[test]
fn test_shift_release_on_anchor_changes_nothing() {
    let mut h = editing_borders();
    let map_before = Arc::clone(&h.state.map);

    h.press_with(500, 500, PointerButton::Primary, Modifiers::SHIFT);
    h.move_to(560, 500);
    h.release(501, 500);

    assert!(h.state.phase.is_idle());
    assert!(Arc::ptr_eq(&map_before, &h.state.map));
}

#[test]
fn test_secondary_click_removes_point_and_its_edges() {
    let mut h = editing_borders();

    h.press_with(300, 500, PointerButton::Secondary, Modifiers::NONE);

    let map = h.inspect();
    assert_eq!(map.border_point_count(), 2);
    assert_eq!(map.border_point_position(h.b1), None);
    assert_eq!(map.border_link(h.b0, h.b1), None);
}

#[test]
fn test_secondary_click_on_edge_removes_only_edge() {
    let mut h = editing_borders();

    h.press_with(200, 500, PointerButton::Secondary, Modifiers::NONE);

    let map = h.inspect();
    assert_eq!(map.border_point_count(), 3);
    assert_eq!(map.border_link(h.b0, h.b1), None);
}

#[test]
fn test_shift_press_in_border_mode_does_not_pan() {
    let mut h = editing_borders();
    let viewport_before = h.state.view.viewport;

    h.press_with(650, 50, PointerButton::Primary, Modifiers::SHIFT);
    h.move_to(600, 80);
    h.release(600, 80);

    assert!(h.state.phase.is_idle());
    assert_eq!(h.state.view.viewport, viewport_before);
}

#[test]
fn test_style_cycle_and_render_request_in_border_mode() {
    let mut h = editing_borders();

    h.send(AppIntent::BorderStyleCycleRequested);
    assert_eq!(h.state.editor.border_style, BorderStyle::Bold);
    h.send(AppIntent::BorderStyleCycleRequested);
    assert_eq!(h.state.editor.border_style, BorderStyle::Dotted);

    let request = h.controller.build_render_request(&h.state);
    assert!(request.options.show_border_markers);
    assert_eq!(request.options.selected_railway, None);
    assert_eq!(h.state.editor.selected_railway(), Some(h.a));
}
