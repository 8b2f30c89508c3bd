//! Handler für Gesten-Phase und Ausschnitt.

use crate::app::interaction::InteractionPhase;
use crate::app::AppState;
use crate::core::{ScreenPos, WorldPos, ZoomDirection};

/// Setzt die Gesten-Phase.
pub fn set_phase(state: &mut AppState, phase: InteractionPhase) {
    if state.phase.name() != phase.name() {
        log::debug!("Phase: {} -> {}", state.phase.name(), phase.name());
    }
    state.phase = phase;
}

/// Setzt den Welt-Ursprung des Ausschnitts (Pan).
pub fn set_viewport_origin(state: &mut AppState, top_left: WorldPos) {
    state.view.viewport.top_left = top_left;
}

/// Zoomt eine Stufe um `pos`; Anfragen außerhalb der Tabelle verfallen.
pub fn zoom_at(state: &mut AppState, pos: ScreenPos, direction: ZoomDirection) {
    match state.view.viewport.zoom_at(pos, direction) {
        Ok(viewport) => state.view.viewport = viewport,
        Err(e) => log::debug!("Zoom ignoriert: {e}"),
    }
}

/// Übernimmt die neue Größe der Zeichenfläche.
pub fn resize(state: &mut AppState, width_px: u32, height_px: u32) {
    state.view.viewport = state.view.viewport.resized(width_px, height_px);
}
