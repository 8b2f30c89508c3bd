//! Render-Auftrag als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` ihn baut und `ui` ihn konsumiert.

use crate::core::{RenderOptions, RenderPrimitives, Viewport};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    /// Sichtbarer Ausschnitt
    pub viewport: Viewport,
    /// Selektion, Overlay-Hinweis und Grenzpunkt-Marker
    pub options: RenderOptions,
}

/// Zeichnet Render-Primitive auf eine Zielfläche.
///
/// Zustandslos: Seiteneffekte nur auf `surface`.
pub trait Renderer<S: ?Sized> {
    fn draw(
        &mut self,
        surface: &mut S,
        width_px: u32,
        height_px: u32,
        primitives: &RenderPrimitives,
    );
}
