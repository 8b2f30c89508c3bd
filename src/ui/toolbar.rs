//! Toolbar für Werkzeugauswahl und Grenzstil.

use crate::app::{AppIntent, AppState, ToolMode};
use crate::core::BorderStyle;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.mode();
    let idle = state.is_idle();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            // Werkzeugwechsel nur im Leerlauf
            ui.add_enabled_ui(idle, |ui| {
                for mode in ToolMode::ALL {
                    let text = format!("{} ({})", mode.label(), mode.shortcut());
                    if ui.selectable_label(active == mode, text).clicked() && active != mode {
                        events.push(AppIntent::ToolModeRequested { mode });
                    }
                }
            });

            if active == ToolMode::EditBorders {
                ui.separator();
                ui.label("Grenzstil:");
                for style in BorderStyle::ALL {
                    if ui
                        .selectable_label(state.editor.border_style == style, style.label())
                        .clicked()
                    {
                        events.push(AppIntent::BorderStyleRequested { style });
                    }
                }
                if ui
                    .button("⟳")
                    .on_hover_text("Nächster Grenzstil")
                    .clicked()
                {
                    events.push(AppIntent::BorderStyleCycleRequested);
                }
            }

            ui.separator();

            if ui
                .add_enabled(idle && state.can_undo(), egui::Button::new("↶ Rückgängig"))
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(idle && state.can_redo(), egui::Button::new("↷ Wiederholen"))
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }
        });
    });

    events
}
