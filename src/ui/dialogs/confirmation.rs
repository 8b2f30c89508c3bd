use super::modal_window;
use crate::app::state::DialogSlot;
use crate::app::{AppIntent, ConfirmAction};

/// Zeigt eine offene Ja/Nein-Rückfrage.
pub fn show_confirmation_dialog(
    ctx: &egui::Context,
    slot: &DialogSlot<ConfirmAction, String>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(question) = slot.draft() else {
        return events;
    };

    modal_window("Bestätigen").show(ctx, |ui| {
        ui.label(question);
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Ja").clicked() {
                events.push(AppIntent::ConfirmationAnswered { accepted: true });
            }
            if ui.button("Nein").clicked() {
                events.push(AppIntent::ConfirmationAnswered { accepted: false });
            }
        });
    });

    events
}
