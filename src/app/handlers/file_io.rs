//! Handler für Datei-Operationen (Neu, Öffnen, Speichern).

use crate::app::interaction::InteractionPhase;
use crate::app::state::DialogCoordinator;
use crate::app::AppState;
use crate::core::{MapSnapshot, RailwayMap};
use anyhow::Context;
use std::path::PathBuf;

/// Startet mit einer leeren Karte.
pub fn new_map(state: &mut AppState) {
    replace_map(state, RailwayMap::new().into_snapshot());
    state.map_path = None;
    log::info!("Neue leere Karte");
}

/// Lädt eine Karte aus `path`. Bei Fehlern bleibt der Zustand unverändert.
pub fn load(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let bytes = std::fs::read(&path)
        .with_context(|| format!("Karte '{}' nicht lesbar", path.display()))?;
    let map = RailwayMap::load(&bytes)
        .with_context(|| format!("Karte '{}' ungültig", path.display()))?;

    log::info!(
        "Karte geladen: {} ({} Strecken, {} Stationen, {} Grenzpunkte)",
        path.display(),
        map.railway_count(),
        map.station_count(),
        map.border_point_count()
    );
    replace_map(state, map.into_snapshot());
    state.map_path = Some(path);
    Ok(())
}

/// Speichert den aktuellen Snapshot unter `path`.
pub fn save(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let bytes = state.map.save().context("Karte nicht serialisierbar")?;
    std::fs::write(&path, bytes)
        .with_context(|| format!("Karte '{}' nicht schreibbar", path.display()))?;

    log::info!("Karte gespeichert: {}", path.display());
    state.map_path = Some(path);
    Ok(())
}

/// Ersetzt die Karte und verwirft alles, was sich auf die alte bezieht.
fn replace_map(state: &mut AppState, map: MapSnapshot) {
    state.map = map;
    state.phase = InteractionPhase::Idle;
    state.dialogs = DialogCoordinator::new();
    state.editor.force_selection(None);
    state.history.clear();
}
