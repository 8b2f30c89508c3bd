//! Interaction State Machine: Gesten-Phasen und ihre Übergänge.
//!
//! Die Übergangsfunktionen lesen nur den [`AppState`](crate::app::AppState)
//! und liefern die auszuführenden Commands. Mutationen passieren
//! ausschließlich im Controller.

mod machine;
mod phase;

pub use machine::{
    on_escape, on_pointer_down, on_pointer_leave, on_pointer_move, on_pointer_up, on_wheel,
};
pub use phase::InteractionPhase;
