//! Keyboard-Shortcuts für den Editor.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, ToolMode};

/// Taste zum Werkzeug-Kürzel.
fn tool_key(mode: ToolMode) -> egui::Key {
    match mode {
        ToolMode::Pan => egui::Key::M,
        ToolMode::NewRailway => egui::Key::N,
        ToolMode::EditRailway => egui::Key::R,
        ToolMode::EditStation => egui::Key::S,
        ToolMode::EditBorders => egui::Key::B,
    }
}

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld den Fokus hat, werden keine Shortcuts ausgelöst.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_z, key_y, key_s, key_escape) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_escape {
        events.push(AppIntent::EscapePressed);
    }

    if modifiers.command {
        if key_z && !modifiers.shift {
            events.push(AppIntent::UndoRequested);
        }
        if key_y || (modifiers.shift && key_z) {
            events.push(AppIntent::RedoRequested);
        }
        if key_s {
            events.push(AppIntent::SaveRequested);
        }
        return events;
    }

    for mode in ToolMode::ALL {
        if ui.input(|i| i.key_pressed(tool_key(mode))) {
            events.push(AppIntent::ToolModeRequested { mode });
        }
    }

    events
}
