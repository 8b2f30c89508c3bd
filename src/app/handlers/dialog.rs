//! Handler für modale Dialoge (Station, Strecke, Stationsliste, Rückfrage).
//!
//! Öffnen ist nur im Leerlauf erlaubt. Abbrechen lässt Karte und Phase
//! unverändert.

use super::editing;
use crate::app::state::{ConfirmAction, StationListView, StationTarget};
use crate::app::AppState;
use crate::core::{RailwayId, RailwayInfo, StationInfo, MAX_LEVEL};

/// Öffnet den Stations-Dialog für einen Punkt (Klick im Stations-Modus).
pub fn open_station_dialog(state: &mut AppState, railway: RailwayId, point_index: usize) {
    if !state.is_idle() {
        log::debug!("Stations-Dialog abgelehnt: Geste oder Dialog aktiv");
        return;
    }
    match state.map.number_of_points(railway) {
        Ok(count) if point_index < count => {}
        Ok(_) => {
            log::warn!("Stations-Dialog verworfen: Punkt {point_index} fehlt auf {railway}");
            return;
        }
        Err(e) => {
            log::warn!("Stations-Dialog verworfen: {e}");
            return;
        }
    }

    let existing = state.map.station_info(railway, point_index);
    let target = StationTarget {
        railway,
        point_index,
        had_station: existing.is_some(),
    };
    state
        .dialogs
        .station
        .open(target, existing.unwrap_or_default());
}

/// Schließt den Stations-Dialog.
///
/// Leerer Name auf einem Stationspunkt löst die Station; sonst wird die
/// Station gesetzt oder angelegt.
pub fn resolve_station_dialog(state: &mut AppState, info: Option<StationInfo>) {
    let Some((target, info)) = state.dialogs.station.resolve(info) else {
        log::debug!("Stations-Dialog abgebrochen");
        return;
    };

    let name = info.name.trim();
    if name.is_empty() {
        if target.had_station {
            editing::detach_station(state, target.railway, target.point_index);
        } else {
            log::debug!("Stations-Dialog ohne Namen bestätigt: nichts zu tun");
        }
        return;
    }

    let info = StationInfo {
        name: name.to_string(),
        level: info.level.min(MAX_LEVEL),
    };
    let result = state
        .map
        .set_station_info(target.railway, target.point_index, &info);
    editing::commit(state, &format!("Station '{}' gesetzt", info.name), result);
}

/// Öffnet die Einstellungen einer Strecke.
pub fn open_railway_dialog(state: &mut AppState, railway: RailwayId) {
    if !state.is_idle() {
        log::debug!("Strecken-Dialog abgelehnt: Geste oder Dialog aktiv");
        return;
    }
    match state.map.railway_info(railway) {
        Ok(info) => state.dialogs.railway.open(railway, info),
        Err(e) => log::warn!("Strecken-Dialog verworfen: {e}"),
    }
}

pub fn resolve_railway_dialog(state: &mut AppState, info: Option<RailwayInfo>) {
    let Some((railway, info)) = state.dialogs.railway.resolve(info) else {
        log::debug!("Strecken-Dialog abgebrochen");
        return;
    };
    let info = RailwayInfo {
        level: info.level.min(MAX_LEVEL),
        ..info
    };
    let result = state.map.set_railway_info(railway, &info);
    editing::commit(state, &format!("{railway} aktualisiert"), result);
}

/// Zeigt die Stationen einer Strecke mit kumulierter Distanz.
pub fn open_station_list(state: &mut AppState, railway: RailwayId) {
    if !state.is_idle() {
        log::debug!("Stationsliste abgelehnt: Geste oder Dialog aktiv");
        return;
    }
    let listing = state
        .map
        .railway_info(railway)
        .and_then(|info| Ok((info, state.map.station_list_on_railway(railway)?)));
    match listing {
        Ok((info, list)) => {
            state.dialogs.station_list = Some(StationListView {
                railway_name: info.name,
                entries: list
                    .names
                    .into_iter()
                    .zip(list.cumulative_distances)
                    .collect(),
            });
        }
        Err(e) => log::warn!("Stationsliste verworfen: {e}"),
    }
}

pub fn close_station_list(state: &mut AppState) {
    state.dialogs.station_list = None;
}

/// Öffnet eine Ja/Nein-Rückfrage.
pub fn open_confirmation(state: &mut AppState, action: ConfirmAction) {
    if !state.is_idle() {
        log::debug!("Rückfrage abgelehnt: Geste oder Dialog aktiv");
        return;
    }
    let question = match action {
        ConfirmAction::RemoveRailway { railway } => match state.map.railway_info(railway) {
            Ok(info) => format!("Strecke '{}' wirklich löschen?", info.name),
            Err(e) => {
                log::warn!("Rückfrage verworfen: {e}");
                return;
            }
        },
    };
    state.dialogs.confirmation.open(action, question);
}

/// Beantwortet die Rückfrage; bei Zustimmung wird die Aktion ausgeführt.
pub fn resolve_confirmation(state: &mut AppState, accepted: bool) {
    match state.dialogs.resolve_confirmation(accepted) {
        Some(ConfirmAction::RemoveRailway { railway }) => {
            editing::remove_railway(state, railway);
        }
        None => log::debug!("Rückfrage verneint"),
    }
}
