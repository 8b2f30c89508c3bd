//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{DRAG_THRESHOLD_PX, HIT_THRESHOLD_PX};
pub use render_scene::{RenderRequest, Renderer};
