//! Modale Dialoge: Station, Strecke, Stationsliste, Rückfrage, Datei-Auswahl.

mod confirmation;
mod file_dialogs;
mod railway_dialog;
mod station_dialog;
mod station_list;

pub use confirmation::show_confirmation_dialog;
pub use file_dialogs::{pick_map_to_open, pick_map_to_save};
pub use railway_dialog::show_railway_dialog;
pub use station_dialog::show_station_dialog;
pub use station_list::show_station_list;

use crate::core::MAX_LEVEL;

/// Gemeinsamer Stufen-Regler (0 bis höchste Stufe).
fn level_slider(ui: &mut egui::Ui, level: &mut u8) {
    ui.horizontal(|ui| {
        ui.label("Stufe:");
        ui.add(egui::Slider::new(level, 0..=MAX_LEVEL));
    });
}

/// Modales Fenster in Bildschirmmitte.
fn modal_window(title: &str) -> egui::Window<'_> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}
