use super::{level_slider, modal_window};
use crate::app::state::DialogSlot;
use crate::app::AppIntent;
use crate::core::{RailwayId, RailwayInfo, Rgb};

/// Zeigt die Strecken-Einstellungen (Name, Farbe, Stufe).
pub fn show_railway_dialog(
    ctx: &egui::Context,
    slot: &mut DialogSlot<RailwayId, RailwayInfo>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(railway) = slot.context().copied() else {
        return events;
    };
    let Some(draft) = slot.draft_mut() else {
        return events;
    };

    let mut confirmed = false;
    let mut cancelled = false;

    modal_window("Strecke bearbeiten").show(ctx, |ui| {
        ui.set_min_width(260.0);
        ui.label(railway.to_string());
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut draft.name);
        });

        ui.horizontal(|ui| {
            ui.label("Farbe:");
            let mut rgb = [draft.color.r, draft.color.g, draft.color.b];
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                draft.color = Rgb::new(rgb[0], rgb[1], rgb[2]);
            }
        });
        level_slider(ui, &mut draft.level);

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
        events.push(AppIntent::RailwayDialogConfirmed {
            info: draft.clone(),
        });
    } else if cancelled {
        events.push(AppIntent::RailwayDialogCancelled);
    }

    events
}
