use super::{level_slider, modal_window};
use crate::app::state::DialogSlot;
use crate::app::{AppIntent, StationTarget};
use crate::core::StationInfo;

/// Zeigt den Stations-Dialog, solange er offen ist.
///
/// Ein leerer Name auf einem Stationspunkt löst die Station.
pub fn show_station_dialog(
    ctx: &egui::Context,
    slot: &mut DialogSlot<StationTarget, StationInfo>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(target) = slot.context().copied() else {
        return events;
    };
    let Some(draft) = slot.draft_mut() else {
        return events;
    };

    let title = if target.had_station {
        "Station ändern"
    } else {
        "Station anlegen"
    };

    let mut confirmed = false;
    let mut cancelled = false;

    modal_window(title).show(ctx, |ui| {
        ui.set_min_width(260.0);
        ui.label(format!(
            "Punkt {} auf {}",
            target.point_index, target.railway
        ));
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Name:");
            let response = ui.text_edit_singleline(&mut draft.name);
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                confirmed = true;
            }
        });
        level_slider(ui, &mut draft.level);

        if target.had_station && draft.name.trim().is_empty() {
            ui.colored_label(egui::Color32::DARK_RED, "Leerer Name löst die Station.");
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                confirmed = true;
            }
            if ui.button("Abbrechen").clicked() {
                cancelled = true;
            }
        });
    });

    if confirmed {
        events.push(AppIntent::StationDialogConfirmed {
            info: draft.clone(),
        });
    } else if cancelled {
        events.push(AppIntent::StationDialogCancelled);
    }

    events
}
