use super::common::Harness;
use rerail_editor::core::{RailwayInfo, Rgb};
use rerail_editor::{AppIntent, ToolMode};
use std::path::PathBuf;
use std::sync::Arc;

fn temp_map_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rerail_editor_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegbar");
    dir.join(name)
}

#[test]
fn test_delete_railway_only_after_confirmation() {
    let mut h = Harness::new();
    let a = h.a;
    h.prepare(ToolMode::Pan, Some(a));
    let map_before = Arc::clone(&h.state.map);

    h.send(AppIntent::DeleteRailwayRequested { railway: a });
    let question = h
        .state
        .dialogs
        .confirmation
        .draft()
        .cloned()
        .expect("Rückfrage ist offen");
    assert!(question.contains("Nordbahn"));

    h.send(AppIntent::ConfirmationAnswered { accepted: false });
    assert!(!h.state.dialogs.any_open());
    assert!(Arc::ptr_eq(&map_before, &h.state.map));

    h.send(AppIntent::DeleteRailwayRequested { railway: a });
    h.send(AppIntent::ConfirmationAnswered { accepted: true });

    assert!(h.state.map.railway_info(a).is_err());
    assert_eq!(h.state.editor.selected_railway(), None);
    assert_eq!(h.inspect().station_count(), 1, "Station 'Mitte' verwaist");

    h.send(AppIntent::UndoRequested);
    assert!(h.state.map.railway_info(a).is_ok());
    assert_eq!(h.state.editor.selected_railway(), Some(a));
}

#[test]
fn test_railway_settings_dialog_updates_info() {
    let mut h = Harness::new();
    let a = h.a;

    h.send(AppIntent::RailwaySettingsRequested { railway: a });
    let draft = h
        .state
        .dialogs
        .railway
        .draft()
        .cloned()
        .expect("Strecken-Dialog ist offen");
    assert_eq!(draft.name, "Nordbahn");

    h.send(AppIntent::RailwayDialogConfirmed {
        info: RailwayInfo {
            name: "Nordbahn Express".to_string(),
            color: Rgb::new(200, 30, 30),
            level: 7,
        },
    });

    let info = h.state.map.railway_info(a).expect("Strecke existiert");
    assert_eq!(info.name, "Nordbahn Express");
    assert_eq!(info.color, Rgb::new(200, 30, 30));
    assert_eq!(info.level, 3);
    assert!(!h.state.dialogs.any_open());
}

#[test]
fn test_railway_settings_cancel_keeps_snapshot() {
    let mut h = Harness::new();
    let b = h.b;
    let map_before = Arc::clone(&h.state.map);

    h.send(AppIntent::RailwaySettingsRequested { railway: b });
    h.send(AppIntent::RailwayDialogCancelled);

    assert!(Arc::ptr_eq(&map_before, &h.state.map));
    assert!(!h.state.dialogs.any_open());
}

#[test]
fn test_station_list_shows_cumulative_distance() {
    let mut h = Harness::new();
    let a = h.a;

    h.send(AppIntent::StationListRequested { railway: a });
    let view = h
        .state
        .dialogs
        .station_list
        .clone()
        .expect("Stationsliste ist offen");
    assert_eq!(view.railway_name, "Nordbahn");
    assert_eq!(view.entries, vec![("Mitte".to_string(), 100.0)]);
    assert!(!h.state.is_idle());

    h.send(AppIntent::StationListClosed);
    assert!(h.state.dialogs.station_list.is_none());
    assert!(h.state.is_idle());
}

#[test]
fn test_save_and_reload_round_trip() {
    let mut h = Harness::new();
    let path = temp_map_path("round_trip.json");
    let expected_points = h.points(h.a);

    h.send(AppIntent::SaveAsRequested { path: path.clone() });
    assert_eq!(h.state.map_path.as_ref(), Some(&path));

    h.send(AppIntent::NewMapRequested);
    assert_eq!(h.inspect().railway_count(), 0);
    assert_eq!(h.state.map_path, None);

    h.send(AppIntent::OpenMapRequested { path: path.clone() });
    let map = h.inspect();
    assert_eq!(map.railway_count(), 2);
    assert_eq!(map.station_count(), 2);
    assert_eq!(map.border_point_count(), 3);
    assert_eq!(map.railway_points(h.a), Some(expected_points));
    assert_eq!(h.state.map_path.as_ref(), Some(&path));
    assert!(!h.state.can_undo(), "Laden leert die History");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_save_uses_last_path() {
    let mut h = Harness::new();
    let path = temp_map_path("last_path.json");
    h.state.map_path = Some(path.clone());

    h.send(AppIntent::SaveRequested);

    let bytes = std::fs::read(&path).expect("Datei wurde geschrieben");
    assert!(!bytes.is_empty());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_failed_load_keeps_current_map() {
    let mut h = Harness::new();
    let map_before = Arc::clone(&h.state.map);
    let missing = temp_map_path("fehlt.json");
    let broken = temp_map_path("kaputt.json");
    std::fs::write(&broken, b"keine Karte").expect("Datei schreibbar");

    for path in [missing, broken.clone()] {
        let result = h
            .controller
            .handle_intent(&mut h.state, AppIntent::OpenMapRequested { path });
        assert!(result.is_err());
    }

    assert!(Arc::ptr_eq(&map_before, &h.state.map));
    assert_eq!(h.state.map_path, None);
    let _ = std::fs::remove_file(&broken);
}
