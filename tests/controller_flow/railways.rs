use super::common::Harness;
use rerail_editor::app::{Modifiers, PointerButton};
use rerail_editor::core::{PointTarget, RailwayInfo, ScreenPos, WorldPos, WORLD_ORIGIN};
use rerail_editor::{AppCommand, AppIntent, InteractionPhase, RailwayMap, ToolMode, Viewport};
use std::sync::Arc;

fn editing_a() -> Harness {
    let mut h = Harness::new();
    let a = h.a;
    h.prepare(ToolMode::EditRailway, Some(a));
    h
}

#[test]
fn test_drag_existing_point_moves_it() {
    let mut h = editing_a();
    let map_before = Arc::clone(&h.state.map);

    h.press(200, 100);
    h.move_to(200, 150);
    assert!(
        Arc::ptr_eq(&map_before, &h.state.map),
        "Während des Drags bleibt die Karte unverändert"
    );
    assert!(h
        .controller
        .build_render_request(&h.state)
        .options
        .overlay
        .is_some());
    h.release(200, 160);

    assert_eq!(
        h.points(h.a),
        vec![
            WorldPos::new(100, 100),
            WorldPos::new(200, 160),
            WorldPos::new(300, 100),
        ]
    );
    assert!(h.state.phase.is_idle());
    let log = h.state.command_log.entries();
    assert!(log.iter().any(|c| matches!(c, AppCommand::MovePoint { .. })));
    assert!(!log.iter().any(|c| matches!(c, AppCommand::InsertPoint { .. })));
}

#[test]
fn test_drag_on_segment_inserts_point() {
    let mut h = editing_a();

    h.press(150, 102);
    assert!(matches!(
        h.state.phase,
        InteractionPhase::DraggingPoint {
            target: PointTarget::InsertBefore(1),
            ..
        }
    ));
    h.move_to(150, 130);
    h.release(150, 130);

    let points = h.points(h.a);
    assert_eq!(points.len(), 4);
    assert_eq!(points[1], WorldPos::new(150, 130));
    let moved_station = h
        .state
        .map
        .station_info(h.a, 2)
        .expect("Station wandert mit ihrem Punkt");
    assert_eq!(moved_station.name, "Mitte");
}

#[test]
fn test_secondary_click_removes_point() {
    let mut h = editing_a();

    h.press_with(300, 100, PointerButton::Secondary, Modifiers::NONE);

    assert_eq!(
        h.points(h.a),
        vec![WorldPos::new(100, 100), WorldPos::new(200, 100)]
    );
    assert!(h.state.phase.is_idle());
}

#[test]
fn test_press_without_selection_does_nothing() {
    let mut h = Harness::new();
    h.prepare(ToolMode::EditRailway, None);
    let map_before = Arc::clone(&h.state.map);

    h.press(200, 100);
    h.release(250, 100);

    assert!(Arc::ptr_eq(&map_before, &h.state.map));
    assert!(h.state.phase.is_idle());
}

#[test]
fn test_point_count_follows_gesture_sequence() {
    let mut h = editing_a();
    let mut expected = 3;

    let gestures: [(&str, (i32, i32), (i32, i32)); 5] = [
        ("insert", (150, 100), (150, 80)),
        ("move", (300, 100), (320, 120)),
        ("remove", (100, 100), (100, 100)),
        ("insert", (250, 110), (250, 140)),
        ("remove", (320, 120), (320, 120)),
    ];
    for (kind, from, to) in gestures {
        match kind {
            "insert" => {
                h.drag(from, to);
                expected += 1;
            }
            "move" => h.drag(from, to),
            _ => {
                h.press_with(from.0, from.1, PointerButton::Secondary, Modifiers::NONE);
                expected -= 1;
            }
        }
        assert_eq!(
            h.state.map.number_of_points(h.a).expect("Strecke existiert"),
            expected,
            "nach Geste '{kind}'"
        );
    }
}

#[test]
fn test_escape_discards_drag_without_mutation() {
    let mut h = editing_a();
    let map_before = Arc::clone(&h.state.map);

    h.press(200, 100);
    h.move_to(260, 180);
    h.send(AppIntent::EscapePressed);
    h.release(260, 180);

    assert!(Arc::ptr_eq(&map_before, &h.state.map));
    assert!(h.state.phase.is_idle());
    assert!(!h.state.can_undo());
}

#[test]
fn test_mode_switch_rejected_mid_gesture() {
    let mut h = editing_a();

    h.press(200, 100);
    h.send(AppIntent::ToolModeRequested {
        mode: ToolMode::EditStation,
    });
    assert_eq!(h.state.editor.mode(), ToolMode::EditRailway);

    h.release(200, 120);
    assert_eq!(h.points(h.a)[1], WorldPos::new(200, 120));

    h.send(AppIntent::ToolModeRequested {
        mode: ToolMode::EditStation,
    });
    assert_eq!(h.state.editor.mode(), ToolMode::EditStation);
}

#[test]
fn test_pointer_leave_commits_at_last_position() {
    let mut h = editing_a();

    h.press(100, 100);
    h.move_to(90, 60);
    h.send(AppIntent::PointerLeft);

    assert!(h.state.phase.is_idle());
    assert_eq!(h.points(h.a)[0], WorldPos::new(90, 60));
}

#[test]
fn test_invalid_reference_ends_idle_with_map_unchanged() {
    let mut h = editing_a();
    let map_before = Arc::clone(&h.state.map);
    h.state.phase = InteractionPhase::DraggingPoint {
        railway: h.a,
        target: PointTarget::Existing(7),
        pointer: ScreenPos::new(10, 10),
    };

    h.release(20, 20);

    assert!(h.state.phase.is_idle());
    assert!(Arc::ptr_eq(&map_before, &h.state.map));
    assert!(!h.state.can_undo());
}

#[test]
fn test_undo_redo_restores_point_positions() {
    let mut h = editing_a();
    h.drag((200, 100), (200, 40));
    assert_eq!(h.points(h.a)[1], WorldPos::new(200, 40));

    h.send(AppIntent::UndoRequested);
    assert_eq!(h.points(h.a)[1], WorldPos::new(200, 100));
    assert!(h.state.can_redo());

    h.send(AppIntent::RedoRequested);
    assert_eq!(h.points(h.a)[1], WorldPos::new(200, 40));
}

#[test]
fn test_draw_new_railway_point_by_point() {
    let mut h = Harness::new();
    h.prepare(ToolMode::NewRailway, None);

    h.press(500, 100);
    let created = h
        .state
        .editor
        .selected_railway()
        .expect("neue Strecke ist selektiert");
    assert_ne!(created, h.a);
    assert_ne!(created, h.b);
    h.release(500, 100);
    h.press(600, 100);
    h.release(600, 100);
    h.press(700, 150);
    assert_eq!(
        h.state.phase,
        InteractionPhase::DrawingNewRailway {
            railway: created,
            point_count: 3,
        }
    );

    h.press_with(0, 0, PointerButton::Secondary, Modifiers::NONE);

    assert!(h.state.phase.is_idle());
    assert_eq!(
        h.points(created),
        vec![
            WorldPos::new(500, 100),
            WorldPos::new(600, 100),
            WorldPos::new(700, 150),
        ]
    );
    assert_eq!(h.inspect().railway_count(), 3);
}

#[test]
fn test_abandoned_single_point_railway_is_removed() {
    let mut h = Harness::new();
    let a = h.a;
    h.prepare(ToolMode::NewRailway, Some(a));

    h.press(500, 100);
    let created = h.state.editor.selected_railway().expect("neue Strecke");
    h.press_with(500, 100, PointerButton::Secondary, Modifiers::NONE);

    assert!(h.state.phase.is_idle());
    assert_eq!(h.state.editor.selected_railway(), None);
    assert!(h.state.map.railway_info(created).is_err());
    assert_eq!(h.inspect().railway_count(), 2);
}

#[test]
fn test_escape_while_drawing_keeps_railway() {
    let mut h = Harness::new();
    h.prepare(ToolMode::NewRailway, None);

    h.press(500, 100);
    h.press(600, 100);
    let created = h.state.editor.selected_railway().expect("neue Strecke");
    h.send(AppIntent::EscapePressed);

    assert!(h.state.phase.is_idle());
    assert_eq!(
        h.state.map.number_of_points(created).expect("Strecke bleibt"),
        2
    );
}

#[test]
fn test_drag_at_default_zoom_commits_scaled_world_position() {
    let mut h = Harness::new();
    let mut map = RailwayMap::new();
    let far = map.add_railway(
        RailwayInfo::default(),
        [
            WorldPos::new(WORLD_ORIGIN + 5000, WORLD_ORIGIN + 5000),
            WorldPos::new(WORLD_ORIGIN + 10_000, WORLD_ORIGIN + 5000),
        ],
    );
    h.state.map = map.into_snapshot();
    h.state.view.viewport =
        Viewport::with_zoom_level(WorldPos::new(WORLD_ORIGIN, WORLD_ORIGIN), 800, 600, 5)
            .expect("Zoomstufe 5 ist gültig");
    h.prepare(ToolMode::EditRailway, Some(far));
    let map_before = Arc::clone(&h.state.map);

    h.press(211, 100);
    assert!(h.state.phase.is_idle(), "11 px neben dem Punkt ist kein Treffer");
    assert!(Arc::ptr_eq(&map_before, &h.state.map));

    h.drag((210, 100), (240, 130));

    assert_eq!(
        h.points(far),
        vec![
            WorldPos::new(WORLD_ORIGIN + 5000, WORLD_ORIGIN + 5000),
            WorldPos::new(WORLD_ORIGIN + 240 * 50, WORLD_ORIGIN + 130 * 50),
        ]
    );
    assert!(h
        .state
        .command_log
        .entries()
        .iter()
        .any(|c| matches!(c, AppCommand::MovePoint { index: 1, .. })));
}
