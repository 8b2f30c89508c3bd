//! Seitenleiste mit den Strecken im sichtbaren Ausschnitt.

use crate::app::{AppIntent, AppState};

/// Rendert die Streckenliste und gibt erzeugte Events zurück.
pub fn render_railway_list(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let railways = state.map.railways_in_viewport(&state.view.viewport);
    let selected = state.editor.selected_railway();
    let idle = state.is_idle();

    egui::SidePanel::right("railway_list")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Strecken");
            ui.label(format!("{} im Ausschnitt", railways.len()));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_enabled_ui(idle, |ui| {
                    for (id, name) in railways.iter() {
                        ui.horizontal(|ui| {
                            let is_selected = selected == Some(id);
                            if ui.selectable_label(is_selected, name).clicked() {
                                let railway = if is_selected { None } else { Some(id) };
                                events.push(AppIntent::RailwaySelectionRequested { railway });
                            }
                            if ui.small_button("⚙").on_hover_text("Einstellungen").clicked() {
                                events.push(AppIntent::RailwaySettingsRequested { railway: id });
                            }
                            if ui.small_button("☰").on_hover_text("Stationen").clicked() {
                                events.push(AppIntent::StationListRequested { railway: id });
                            }
                            if ui.small_button("🗑").on_hover_text("Löschen").clicked() {
                                events.push(AppIntent::DeleteRailwayRequested { railway: id });
                            }
                        });
                    }
                });
            });
        });

    events
}
