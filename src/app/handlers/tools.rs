//! Handler für Werkzeug, Selektion und Grenzstil.

use crate::app::state::ToolMode;
use crate::app::AppState;
use crate::core::{BorderStyle, RailwayId};

/// Wechselt das Werkzeug (nur im Leerlauf).
pub fn set_tool_mode(state: &mut AppState, mode: ToolMode) {
    let idle = state.is_idle();
    state.editor.set_mode(mode, idle);
}

/// Selektiert eine Strecke (nur im Leerlauf, nur vorhandene Strecken).
pub fn select_railway(state: &mut AppState, railway: Option<RailwayId>) {
    if let Some(id) = railway {
        if let Err(e) = state.map.railway_info(id) {
            log::warn!("Selektion verworfen: {e}");
            return;
        }
    }
    let idle = state.is_idle();
    if state.editor.select_railway(railway, idle) {
        match railway {
            Some(id) => log::info!("{id} selektiert"),
            None => log::info!("Selektion aufgehoben"),
        }
    }
}

/// Setzt den Stil für neue Grenzkanten.
pub fn set_border_style(state: &mut AppState, style: BorderStyle) {
    if state.editor.border_style != style {
        log::info!("Grenzstil: {}", style.label());
        state.editor.border_style = style;
    }
}
