//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderRequest;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Interaktion & Viewport ===
            AppCommand::SetPhase { phase } => handlers::view::set_phase(state, phase),
            AppCommand::SetViewportOrigin { top_left } => {
                handlers::view::set_viewport_origin(state, top_left)
            }
            AppCommand::ZoomAt { pos, direction } => handlers::view::zoom_at(state, pos, direction),
            AppCommand::ResizeViewport {
                width_px,
                height_px,
            } => handlers::view::resize(state, width_px, height_px),

            // === Strecken ===
            AppCommand::MovePoint {
                railway,
                index,
                pos,
            } => handlers::editing::move_point(state, railway, index, pos),
            AppCommand::InsertPoint {
                railway,
                before,
                pos,
            } => handlers::editing::insert_point(state, railway, before, pos),
            AppCommand::RemovePoint { railway, index } => {
                handlers::editing::remove_point(state, railway, index)
            }
            AppCommand::CreateRailway { pos } => handlers::editing::create_railway(state, pos),
            AppCommand::RemoveRailway { railway } => {
                handlers::editing::remove_railway(state, railway)
            }

            // === Stationen ===
            AppCommand::OpenStationDialog {
                railway,
                point_index,
            } => handlers::dialog::open_station_dialog(state, railway, point_index),
            AppCommand::ResolveStationDialog { info } => {
                handlers::dialog::resolve_station_dialog(state, info)
            }
            AppCommand::LinkStation {
                railway,
                index,
                pos,
            } => handlers::editing::link_station(state, railway, index, pos),
            AppCommand::DetachStation { railway, index } => {
                handlers::editing::detach_station(state, railway, index)
            }

            // === Grenzen ===
            AppCommand::MoveBorderPoint { id, pos } => {
                handlers::editing::move_border_point(state, id, pos)
            }
            AppCommand::RemoveBorderPoint { id } => {
                handlers::editing::remove_border_point(state, id)
            }
            AppCommand::RemoveBorderEdge { a, b } => {
                handlers::editing::remove_border_edge(state, a, b)
            }
            AppCommand::InsertBorderPointOnEdge { a, b, pos } => {
                handlers::editing::insert_border_point_on_edge(state, a, b, pos)
            }
            AppCommand::ConnectBorderPoints { a, b, style } => {
                handlers::editing::connect_border_points(state, a, b, style)
            }
            AppCommand::ConnectNewBorderPoint { anchor, pos, style } => {
                handlers::editing::connect_new_border_point(state, anchor, pos, style)
            }

            // === Werkzeuge ===
            AppCommand::SetToolMode { mode } => handlers::tools::set_tool_mode(state, mode),
            AppCommand::SelectRailway { railway } => {
                handlers::tools::select_railway(state, railway)
            }
            AppCommand::SetBorderStyle { style } => handlers::tools::set_border_style(state, style),

            // === Dialoge ===
            AppCommand::OpenRailwayDialog { railway } => {
                handlers::dialog::open_railway_dialog(state, railway)
            }
            AppCommand::ResolveRailwayDialog { info } => {
                handlers::dialog::resolve_railway_dialog(state, info)
            }
            AppCommand::OpenStationList { railway } => {
                handlers::dialog::open_station_list(state, railway)
            }
            AppCommand::CloseStationList => handlers::dialog::close_station_list(state),
            AppCommand::OpenConfirmation { action } => {
                handlers::dialog::open_confirmation(state, action)
            }
            AppCommand::ResolveConfirmation { accepted } => {
                handlers::dialog::resolve_confirmation(state, accepted)
            }

            // === History & Datei ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
            AppCommand::NewMap => handlers::file_io::new_map(state),
            AppCommand::LoadMap { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveMap { path } => handlers::file_io::save(state, path)?,
        }

        Ok(())
    }

    /// Baut den Render-Auftrag für den aktuellen Frame.
    pub fn build_render_request(&self, state: &AppState) -> RenderRequest {
        render_scene::build(state)
    }
}
