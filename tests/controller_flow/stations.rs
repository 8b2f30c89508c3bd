use super::common::{station, Harness};
use rerail_editor::app::{Modifiers, PointerButton};
use rerail_editor::core::StationInfo;
use rerail_editor::{AppIntent, InteractionPhase, ToolMode};
use std::sync::Arc;

fn editing_stations_of_a() -> Harness {
    let mut h = Harness::new();
    let a = h.a;
    h.prepare(ToolMode::EditStation, Some(a));
    h
}

#[test]
fn test_click_opens_dialog_with_existing_station() {
    let mut h = editing_stations_of_a();

    h.press(200, 100);
    assert!(matches!(
        h.state.phase,
        InteractionPhase::LinkingStation { point_index: 1, .. }
    ));
    h.release(201, 101);

    assert!(h.state.phase.is_idle());
    let target = h
        .state
        .dialogs
        .station
        .context()
        .copied()
        .expect("Stations-Dialog ist offen");
    assert_eq!(target.railway, h.a);
    assert_eq!(target.point_index, 1);
    assert!(target.had_station);
    assert_eq!(
        h.state.dialogs.station.draft().map(|info| info.name.as_str()),
        Some("Mitte")
    );
}

#[test]
fn test_cancelled_dialog_leaves_map_untouched() {
    let mut h = editing_stations_of_a();
    let map_before = Arc::clone(&h.state.map);

    h.press(100, 100);
    h.release(100, 100);
    assert!(h.state.dialogs.station.is_open());
    h.send(AppIntent::StationDialogCancelled);

    assert!(!h.state.dialogs.any_open());
    assert!(h.state.phase.is_idle());
    assert!(Arc::ptr_eq(&map_before, &h.state.map));
    assert!(!h.state.can_undo());
}

#[test]
fn test_confirmed_dialog_creates_station_with_trimmed_name() {
    let mut h = editing_stations_of_a();

    h.press(100, 100);
    h.release(100, 100);
    h.send(AppIntent::StationDialogConfirmed {
        info: StationInfo {
            name: "  Nordkreuz ".to_string(),
            level: 9,
        },
    });

    let info = h
        .state
        .map
        .station_info(h.a, 0)
        .expect("Station wurde angelegt");
    assert_eq!(info.name, "Nordkreuz");
    assert_eq!(info.level, 3, "Stufe wird auf das Maximum begrenzt");
    assert!(h.state.can_undo());
}

#[test]
fn test_empty_name_detaches_existing_station() {
    let mut h = editing_stations_of_a();

    h.press(200, 100);
    h.release(200, 100);
    h.send(AppIntent::StationDialogConfirmed {
        info: StationInfo {
            name: "   ".to_string(),
            level: 1,
        },
    });

    assert_eq!(h.state.map.station_info(h.a, 1), None);
    assert_eq!(h.inspect().station_count(), 1);
}

#[test]
fn test_empty_name_on_plain_point_changes_nothing() {
    let mut h = editing_stations_of_a();
    let map_before = Arc::clone(&h.state.map);

    h.press(300, 100);
    h.release(300, 100);
    h.send(AppIntent::StationDialogConfirmed {
        info: StationInfo::default(),
    });

    assert!(Arc::ptr_eq(&map_before, &h.state.map));
}

#[test]
fn test_open_dialog_blocks_canvas_and_tools() {
    let mut h = editing_stations_of_a();
    h.press(200, 100);
    h.release(200, 100);
    assert!(h.state.dialogs.station.is_open());

    h.press(300, 100);
    h.send(AppIntent::ToolModeRequested {
        mode: ToolMode::Pan,
    });
    h.send(AppIntent::UndoRequested);

    assert!(h.state.phase.is_idle());
    assert_eq!(h.state.editor.mode(), ToolMode::EditStation);
    assert!(h.state.dialogs.station.is_open());

    h.send(AppIntent::StationDialogConfirmed {
        info: station("Mitte Ost"),
    });
    assert_eq!(
        h.state.map.station_info(h.a, 1).map(|info| info.name),
        Some("Mitte Ost".to_string())
    );
}

#[test]
fn test_drag_links_point_to_station_of_other_railway() {
    let mut h = editing_stations_of_a();

    h.press(100, 100);
    h.move_to(200, 200);
    h.move_to(302, 298);
    h.release(302, 298);

    assert!(!h.state.dialogs.any_open(), "Drag öffnet keinen Dialog");
    assert_eq!(
        h.state.map.station_info(h.a, 0).map(|info| info.name),
        Some("Süd".to_string())
    );
    assert_eq!(
        h.inspect().station_id_at(h.a, 0),
        h.inspect().station_id_at(h.b, 1),
        "beide Punkte teilen dieselbe Station"
    );
}

#[test]
fn test_link_without_station_nearby_keeps_map() {
    let mut h = editing_stations_of_a();
    let map_before = Arc::clone(&h.state.map);

    h.press(300, 100);
    h.move_to(600, 200);
    h.release(600, 200);

    assert!(h.state.phase.is_idle());
    assert!(Arc::ptr_eq(&map_before, &h.state.map));
}

#[test]
fn test_secondary_click_detaches_station() {
    let mut h = editing_stations_of_a();

    h.press_with(200, 100, PointerButton::Secondary, Modifiers::NONE);

    assert_eq!(h.state.map.station_info(h.a, 1), None);
    assert!(h.state.phase.is_idle());
}
