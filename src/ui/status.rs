//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let viewport = &state.view.viewport;
            ui.label(format!(
                "Zoom: Stufe {} (1 px = {} E) | Ursprung: ({}, {})",
                viewport.zoom_level(),
                viewport.zoom_factor(),
                viewport.top_left.x,
                viewport.top_left.y
            ));

            ui.separator();

            ui.label(format!(
                "Werkzeug: {} | Phase: {}",
                state.editor.mode().label(),
                state.phase.name()
            ));

            ui.separator();

            match state.editor.selected_railway() {
                Some(id) => match state.map.railway_info(id) {
                    Ok(info) => ui.label(format!("Selektiert: {}", info.name)),
                    Err(_) => ui.label(format!("Selektiert: {id}")),
                },
                None => ui.label("Keine Strecke selektiert"),
            };

            ui.separator();

            match &state.map_path {
                Some(path) => ui.label(format!("Datei: {}", path.display())),
                None => ui.label("Ungespeicherte Karte"),
            };
        });
    });
}
