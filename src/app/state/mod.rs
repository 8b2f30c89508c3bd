//! Application State: Karte, Ausschnitt, Werkzeug, Gesten und Dialoge.

mod app_state;
mod dialogs;
mod editor;
mod view;

pub use app_state::AppState;
pub use dialogs::{ConfirmAction, DialogCoordinator, DialogSlot, StationListView, StationTarget};
pub use editor::{EditorToolState, ToolMode};
pub use view::ViewState;
