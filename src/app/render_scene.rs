//! Render Driver: baut Render-Aufträge aus dem AppState und cached Primitive.

use crate::app::state::ToolMode;
use crate::app::AppState;
use crate::core::{MapSnapshot, RenderOptions, RenderPrimitives};
use crate::shared::{RenderRequest, Renderer};
use std::sync::Arc;

/// Baut einen RenderRequest aus dem aktuellen AppState.
///
/// Höchstens ein Overlay-Hinweis, abgeleitet aus der einen aktiven Phase.
pub fn build(state: &AppState) -> RenderRequest {
    RenderRequest {
        viewport: state.view.viewport,
        options: RenderOptions {
            selected_railway: state.editor.render_selection(),
            overlay: state.phase.overlay_hint(),
            show_border_markers: state.editor.mode() == ToolMode::EditBorders,
        },
    }
}

/// Zeichnet Frames und fragt die Engine nur bei Änderungen neu ab.
///
/// Neu berechnet wird, wenn sich der Render-Auftrag oder der Karten-Snapshot
/// (Identität des Arc) geändert hat.
#[derive(Default)]
pub struct RenderDriver {
    cached: Option<CachedFrame>,
    rebuilds: u64,
}

struct CachedFrame {
    request: RenderRequest,
    map: MapSnapshot,
    primitives: Arc<RenderPrimitives>,
}

impl RenderDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Render-Primitive für den State.
    pub fn primitives(&mut self, state: &AppState) -> Arc<RenderPrimitives> {
        let request = build(state);
        if let Some(frame) = &self.cached {
            if frame.request == request && Arc::ptr_eq(&frame.map, &state.map) {
                return Arc::clone(&frame.primitives);
            }
        }

        let primitives = Arc::new(state.map.render(&request.viewport, &request.options));
        self.rebuilds += 1;
        log::trace!("Render-Primitive neu erzeugt ({} Linienzüge)", primitives.lines.len());
        self.cached = Some(CachedFrame {
            request,
            map: Arc::clone(&state.map),
            primitives: Arc::clone(&primitives),
        });
        primitives
    }

    /// Zeichnet den aktuellen Zustand mit `renderer` auf `surface`.
    pub fn draw<S: ?Sized, R: Renderer<S>>(
        &mut self,
        state: &AppState,
        renderer: &mut R,
        surface: &mut S,
    ) {
        let primitives = self.primitives(state);
        let viewport = &state.view.viewport;
        renderer.draw(surface, viewport.width_px, viewport.height_px, &primitives);
    }

    /// Anzahl der Engine-Abfragen seit Erzeugung.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}
