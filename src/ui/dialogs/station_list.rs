use super::modal_window;
use crate::app::{AppIntent, StationListView};

/// Zeigt die Stationen einer Strecke mit kumulierter Distanz in km.
pub fn show_station_list(ctx: &egui::Context, view: Option<&StationListView>) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(view) = view else {
        return events;
    };

    modal_window(&format!("Stationen: {}", view.railway_name)).show(ctx, |ui| {
        ui.set_min_width(260.0);
        if view.entries.is_empty() {
            ui.label("Keine Stationen auf dieser Strecke.");
        } else {
            egui::Grid::new("station_list_grid")
                .striped(true)
                .num_columns(2)
                .show(ui, |ui| {
                    for (name, distance) in &view.entries {
                        ui.label(name);
                        ui.label(format!("{:.1} km", distance / 1000.0));
                        ui.end_row();
                    }
                });
        }
        ui.add_space(8.0);
        if ui.button("Schließen").clicked() {
            events.push(AppIntent::StationListClosed);
        }
    });

    events
}
