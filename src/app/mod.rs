//! Application-Layer: Controller, State, Events, Gesten und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Interaction State Machine
pub mod interaction;
pub mod render_scene;
/// Application State
///
/// Karte, Ausschnitt, Werkzeug, Gesten-Phase und offene Dialoge.
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, Modifiers, PointerButton};
pub use interaction::InteractionPhase;
pub use render_scene::{build as build_render_request, RenderDriver};
pub use state::{
    AppState, ConfirmAction, DialogCoordinator, EditorToolState, StationListView, StationTarget,
    ToolMode, ViewState,
};
