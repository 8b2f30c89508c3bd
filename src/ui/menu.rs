//! Top-Menü (Datei, Bearbeiten).

use super::dialogs::{pick_map_to_open, pick_map_to_save};
use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Neu").clicked() {
                    events.push(AppIntent::NewMapRequested);
                    ui.close();
                }

                if ui.button("Öffnen...").clicked() {
                    if let Some(path) = pick_map_to_open() {
                        events.push(AppIntent::OpenMapRequested { path });
                    }
                    ui.close();
                }

                ui.separator();

                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui.button("Speichern unter...").clicked() {
                    if let Some(path) = pick_map_to_save(state.map_path.as_deref()) {
                        events.push(AppIntent::SaveAsRequested { path });
                    }
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                let idle = state.is_idle();
                if ui
                    .add_enabled(idle && state.can_undo(), egui::Button::new("Rückgängig"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }
                if ui
                    .add_enabled(idle && state.can_redo(), egui::Button::new("Wiederholen"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
