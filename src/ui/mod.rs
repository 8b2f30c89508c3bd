//! UI-Layer mit egui.
//!
//! Übersetzt egui-Eingaben in `AppIntent`s und zeichnet Render-Primitive
//! mit dem egui-Painter.

pub mod dialogs;
pub mod input;
mod keyboard;
pub mod menu;
pub mod painter;
pub mod railway_list;
pub mod status;
pub mod toolbar;

pub use dialogs::{
    show_confirmation_dialog, show_railway_dialog, show_station_dialog, show_station_list,
};
pub use input::CanvasInput;
pub use menu::render_menu;
pub use painter::{CanvasSurface, EguiRenderer};
pub use railway_list::render_railway_list;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
