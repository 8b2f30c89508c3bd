//! Handler für Karten-Mutationen (Commits der Gesten).
//!
//! Jeder Commit ersetzt den Karten-Snapshot vollständig. Schlägt die Engine
//! fehl, bleibt die Karte unverändert und die Geste endet im Leerlauf.

use crate::app::interaction::InteractionPhase;
use crate::app::AppState;
use crate::core::{
    BorderPointId, BorderStyle, EngineResult, MapSnapshot, RailwayId, ScreenPos, WorldPos,
};

/// Übernimmt das Ergebnis einer Engine-Mutation.
///
/// Liefert `true`, wenn der neue Snapshot übernommen wurde.
pub(crate) fn commit(state: &mut AppState, what: &str, result: EngineResult<MapSnapshot>) -> bool {
    match result {
        Ok(next) => {
            state.record_undo_snapshot();
            state.map = next;
            log::info!("{what}");
            true
        }
        Err(e) => {
            log::warn!("{what} verworfen: {e}");
            state.phase = InteractionPhase::Idle;
            false
        }
    }
}

pub fn move_point(state: &mut AppState, railway: RailwayId, index: usize, pos: WorldPos) {
    let result = state.map.move_point(railway, index, pos);
    commit(state, &format!("Punkt {index} auf {railway} verschoben"), result);
}

pub fn insert_point(state: &mut AppState, railway: RailwayId, before: usize, pos: WorldPos) {
    let result = state.map.insert_point(railway, before, pos);
    commit(state, &format!("Punkt vor {before} auf {railway} eingefügt"), result);
}

pub fn remove_point(state: &mut AppState, railway: RailwayId, index: usize) {
    let result = state.map.remove_point(railway, index);
    commit(state, &format!("Punkt {index} auf {railway} gelöscht"), result);
}

/// Legt eine Strecke an, selektiert sie und startet das Zeichnen.
pub fn create_railway(state: &mut AppState, pos: WorldPos) {
    match state.map.create_railway(pos) {
        Ok((next, railway)) => {
            state.record_undo_snapshot();
            state.map = next;
            state.editor.force_selection(Some(railway));
            state.phase = InteractionPhase::DrawingNewRailway {
                railway,
                point_count: 1,
            };
            log::info!("{railway} angelegt");
        }
        Err(e) => {
            log::warn!("Neue Strecke verworfen: {e}");
            state.phase = InteractionPhase::Idle;
        }
    }
}

/// Entfernt eine Strecke; war sie selektiert, wird die Selektion geleert.
pub fn remove_railway(state: &mut AppState, railway: RailwayId) {
    let result = state.map.remove_railway(railway);
    if commit(state, &format!("{railway} gelöscht"), result)
        && state.editor.selected_railway() == Some(railway)
    {
        state.editor.force_selection(None);
    }
}

/// Verknüpft den Punkt mit der Station unter der Zeigerposition.
pub fn link_station(state: &mut AppState, railway: RailwayId, index: usize, pos: ScreenPos) {
    let result = state.map.link_existing_point_to_station(
        &state.view.viewport,
        railway,
        index,
        pos,
        state.options.hit_threshold_px,
    );
    commit(
        state,
        &format!("Punkt {index} auf {railway} mit Station verknüpft"),
        result,
    );
}

pub fn detach_station(state: &mut AppState, railway: RailwayId, index: usize) {
    let result = state.map.detach_station(railway, index);
    commit(
        state,
        &format!("Station von Punkt {index} auf {railway} gelöst"),
        result,
    );
}

pub fn move_border_point(state: &mut AppState, id: BorderPointId, pos: WorldPos) {
    let result = state.map.move_border_point(id, pos);
    commit(state, &format!("{id} verschoben"), result);
}

pub fn remove_border_point(state: &mut AppState, id: BorderPointId) {
    let result = state.map.remove_border_point(id);
    commit(state, &format!("{id} gelöscht"), result);
}

pub fn remove_border_edge(state: &mut AppState, a: BorderPointId, b: BorderPointId) {
    let result = state.map.remove_border_edge(a, b);
    commit(state, &format!("Grenzkante {a}-{b} gelöscht"), result);
}

pub fn insert_border_point_on_edge(
    state: &mut AppState,
    a: BorderPointId,
    b: BorderPointId,
    pos: WorldPos,
) {
    let result = state.map.insert_border_point_on_edge(a, b, pos);
    commit(state, &format!("Grenzkante {a}-{b} geteilt"), result);
}

pub fn connect_border_points(
    state: &mut AppState,
    a: BorderPointId,
    b: BorderPointId,
    style: BorderStyle,
) {
    let result = state.map.connect_existing_border_points(a, b, style);
    commit(
        state,
        &format!("Grenzkante {a}-{b} ({}) angelegt", style.label()),
        result,
    );
}

pub fn connect_new_border_point(
    state: &mut AppState,
    anchor: BorderPointId,
    pos: WorldPos,
    style: BorderStyle,
) {
    let result = state.map.connect_new_border_point(anchor, pos, style);
    commit(
        state,
        &format!("Neuer Grenzpunkt an {anchor} ({}) angelegt", style.label()),
        result,
    );
}
