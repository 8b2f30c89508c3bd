//! Viewport und Koordinatensystem: Welt ↔ Screen auf diskreten Zoomstufen.
//!
//! Welt-Koordinaten sind ganzzahlig (`i64`) mit großem Ursprungs-Offset,
//! damit Pan in negative Richtung nie unterläuft. Alle Umrechnungen sind
//! exakt, da die Zoomfaktoren ganzzahlig sind.

use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};

/// Absolute Position auf der Kartenebene (Welt-Einheiten).
pub type WorldPos = I64Vec2;
/// Pixel-Position relativ zur linken oberen Ecke der Zeichenfläche.
pub type ScreenPos = IVec2;

/// Welt-Einheiten pro Screen-Pixel, aufsteigend sortiert.
pub const ZOOM_FACTORS: [i64; 13] = [
    1, 2, 5, 10, 20, 50, 100, 200, 500, 1000, 2000, 5000, 10000,
];

/// Ursprungs-Offset der Welt (beide Achsen).
pub const WORLD_ORIGIN: i64 = 1_000_000_000;

/// Standard-Zoomstufe beim Start (Faktor 50).
pub const DEFAULT_ZOOM_LEVEL: usize = 5;

/// Fehler bei Viewport-Operationen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ViewportError {
    /// Angeforderte Zoomstufe liegt außerhalb der Faktor-Tabelle
    #[error("Zoomstufe {requested} außerhalb von 0..{}", ZOOM_FACTORS.len())]
    OutOfRangeZoom { requested: isize },
}

/// Richtung eines Zoom-Schritts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Kleinerer Faktor (mehr Details)
    In,
    /// Größerer Faktor (mehr Übersicht)
    Out,
}

impl ZoomDirection {
    /// Leitet die Richtung aus einem Mausrad-Delta ab (negativ = hineinzoomen).
    pub fn from_wheel_delta(delta_y: f32) -> Self {
        if delta_y < 0.0 {
            Self::In
        } else {
            Self::Out
        }
    }

    fn step(self) -> isize {
        match self {
            Self::In => -1,
            Self::Out => 1,
        }
    }
}

/// Sichtbarer Ausschnitt der Karte.
///
/// Invariante: `zoom_level` ist immer ein gültiger Index in [`ZOOM_FACTORS`],
/// auch nach dem Deserialisieren.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ViewportRepr")]
pub struct Viewport {
    /// Welt-Position der linken oberen Ecke
    pub top_left: WorldPos,
    /// Breite der Zeichenfläche in Pixeln
    pub width_px: u32,
    /// Höhe der Zeichenfläche in Pixeln
    pub height_px: u32,
    zoom_level: usize,
}

/// Rohform beim Deserialisieren, wird über [`Viewport::with_zoom_level`] geprüft.
#[derive(Deserialize)]
struct ViewportRepr {
    top_left: WorldPos,
    width_px: u32,
    height_px: u32,
    zoom_level: usize,
}

impl TryFrom<ViewportRepr> for Viewport {
    type Error = ViewportError;

    fn try_from(repr: ViewportRepr) -> Result<Self, Self::Error> {
        Self::with_zoom_level(repr.top_left, repr.width_px, repr.height_px, repr.zoom_level)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl Viewport {
    /// Erstellt einen Viewport am Welt-Ursprung mit Standard-Zoomstufe.
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            top_left: WorldPos::new(WORLD_ORIGIN, WORLD_ORIGIN),
            width_px,
            height_px,
            zoom_level: DEFAULT_ZOOM_LEVEL,
        }
    }

    /// Erstellt einen Viewport mit expliziter Zoomstufe.
    pub fn with_zoom_level(
        top_left: WorldPos,
        width_px: u32,
        height_px: u32,
        zoom_level: usize,
    ) -> Result<Self, ViewportError> {
        if zoom_level >= ZOOM_FACTORS.len() {
            return Err(ViewportError::OutOfRangeZoom {
                requested: zoom_level as isize,
            });
        }
        Ok(Self {
            top_left,
            width_px,
            height_px,
            zoom_level,
        })
    }

    /// Aktuelle Zoomstufe (Index in [`ZOOM_FACTORS`]).
    pub fn zoom_level(&self) -> usize {
        self.zoom_level
    }

    /// Welt-Einheiten pro Pixel auf der aktuellen Zoomstufe.
    pub fn zoom_factor(&self) -> i64 {
        ZOOM_FACTORS[self.zoom_level]
    }

    /// Gleicher Ausschnitt mit neuer Pixelgröße.
    pub fn resized(&self, width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
            ..*self
        }
    }

    /// Rechnet eine Pixel-Position in Welt-Koordinaten um.
    pub fn screen_to_world(&self, pos: ScreenPos) -> WorldPos {
        self.top_left + screen_as_world_delta(pos) * self.zoom_factor()
    }

    /// Rechnet eine Welt-Position in Pixel um (abgerundet, auf `i32` gesättigt).
    pub fn world_to_screen(&self, pos: WorldPos) -> ScreenPos {
        let rel = pos - self.top_left;
        let factor = self.zoom_factor();
        ScreenPos::new(
            saturate_i32(rel.x.div_euclid(factor)),
            saturate_i32(rel.y.div_euclid(factor)),
        )
    }

    /// Welt-Position der rechten unteren Ecke.
    pub fn bottom_right(&self) -> WorldPos {
        self.top_left
            + WorldPos::new(i64::from(self.width_px), i64::from(self.height_px)) * self.zoom_factor()
    }

    /// Verschiebt den Ausschnitt um ein Pixel-Delta (skaliert mit dem Zoomfaktor).
    pub fn pan_by(&self, delta: ScreenPos) -> Self {
        Self {
            top_left: self.top_left + screen_as_world_delta(delta) * self.zoom_factor(),
            ..*self
        }
    }

    /// Zoomt um eine Stufe, wobei der Welt-Punkt unter `pos` fix bleibt.
    pub fn zoom_at(&self, pos: ScreenPos, direction: ZoomDirection) -> Result<Self, ViewportError> {
        let requested = self.zoom_level as isize + direction.step();
        if requested < 0 || requested as usize >= ZOOM_FACTORS.len() {
            return Err(ViewportError::OutOfRangeZoom { requested });
        }
        let new_level = requested as usize;
        let old_factor = self.zoom_factor();
        let new_factor = ZOOM_FACTORS[new_level];

        Ok(Self {
            top_left: self.top_left + screen_as_world_delta(pos) * (old_factor - new_factor),
            zoom_level: new_level,
            ..*self
        })
    }
}

fn screen_as_world_delta(pos: ScreenPos) -> WorldPos {
    WorldPos::new(i64::from(pos.x), i64::from(pos.y))
}

fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
