use crate::core::{Viewport, ViewportError, WorldPos, DEFAULT_ZOOM_LEVEL, WORLD_ORIGIN};

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Sichtbarer Ausschnitt (Ursprung, Pixelgröße, Zoomstufe)
    pub viewport: Viewport,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport: Viewport::new(800, 600),
        }
    }

    /// View mit vorgegebener Zoomstufe am Welt-Ursprung.
    ///
    /// Ungültige Stufen fallen auf die Standard-Zoomstufe zurück.
    pub fn with_zoom_level(zoom_level: usize) -> Self {
        let origin = WorldPos::new(WORLD_ORIGIN, WORLD_ORIGIN);
        let viewport = Viewport::with_zoom_level(origin, 800, 600, zoom_level).unwrap_or_else(
            |e: ViewportError| {
                log::warn!("{e}, verwende Zoomstufe {DEFAULT_ZOOM_LEVEL}");
                Viewport::new(800, 600)
            },
        );
        Self { viewport }
    }
}
