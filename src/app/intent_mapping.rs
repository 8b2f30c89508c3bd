//! Mapping von UI-Intents auf mutierende App-Commands.

use super::interaction;
use super::state::ConfirmAction;
use super::{AppCommand, AppIntent, AppState};
use std::path::PathBuf;

/// Dateiname beim Speichern einer Karte ohne bisherigen Pfad.
const DEFAULT_MAP_FILE: &str = "rerail_map.json";

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            pos,
            button,
            modifiers,
        } => interaction::on_pointer_down(state, pos, button, modifiers),
        AppIntent::PointerMoved { pos } => interaction::on_pointer_move(state, pos),
        AppIntent::PointerReleased { pos } => interaction::on_pointer_up(state, pos),
        AppIntent::PointerLeft => interaction::on_pointer_leave(state),
        AppIntent::WheelScrolled { pos, direction } => interaction::on_wheel(state, pos, direction),
        AppIntent::EscapePressed => interaction::on_escape(state),
        AppIntent::ViewportResized {
            width_px,
            height_px,
        } => vec![AppCommand::ResizeViewport {
            width_px,
            height_px,
        }],

        AppIntent::ToolModeRequested { mode } => vec![AppCommand::SetToolMode { mode }],
        AppIntent::RailwaySelectionRequested { railway } => {
            vec![AppCommand::SelectRailway { railway }]
        }
        AppIntent::BorderStyleRequested { style } => vec![AppCommand::SetBorderStyle { style }],
        AppIntent::BorderStyleCycleRequested => vec![AppCommand::SetBorderStyle {
            style: state.editor.border_style.next(),
        }],

        AppIntent::RailwaySettingsRequested { railway } => {
            vec![AppCommand::OpenRailwayDialog { railway }]
        }
        AppIntent::StationListRequested { railway } => {
            vec![AppCommand::OpenStationList { railway }]
        }
        AppIntent::DeleteRailwayRequested { railway } => vec![AppCommand::OpenConfirmation {
            action: ConfirmAction::RemoveRailway { railway },
        }],

        AppIntent::StationDialogConfirmed { info } => {
            vec![AppCommand::ResolveStationDialog { info: Some(info) }]
        }
        AppIntent::StationDialogCancelled => vec![AppCommand::ResolveStationDialog { info: None }],
        AppIntent::RailwayDialogConfirmed { info } => {
            vec![AppCommand::ResolveRailwayDialog { info: Some(info) }]
        }
        AppIntent::RailwayDialogCancelled => vec![AppCommand::ResolveRailwayDialog { info: None }],
        AppIntent::ConfirmationAnswered { accepted } => {
            vec![AppCommand::ResolveConfirmation { accepted }]
        }
        AppIntent::StationListClosed => vec![AppCommand::CloseStationList],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::NewMapRequested => vec![AppCommand::NewMap],
        AppIntent::OpenMapRequested { path } => vec![AppCommand::LoadMap { path }],
        AppIntent::SaveRequested => {
            let path = state
                .map_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MAP_FILE));
            vec![AppCommand::SaveMap { path }]
        }
        AppIntent::SaveAsRequested { path } => vec![AppCommand::SaveMap { path }],
    }
}
