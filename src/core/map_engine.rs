//! Vertrag der Map-Engine: Abfragen, Mutationen und Render-Primitive.
//!
//! Die Engine arbeitet im Snapshot-Stil: jede Mutation liefert einen neuen
//! [`MapSnapshot`], der alte bleibt unverändert. Der Aufrufer ersetzt seine
//! Referenz vollständig.

use super::viewport::{ScreenPos, Viewport, WorldPos};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Höchste Stufe für Stationen und Strecken (0 = unwichtig, 3 = Hauptlinie).
pub const MAX_LEVEL: u8 = 3;

/// Unveränderlicher Karten-Zustand hinter einem geteilten Handle.
pub type MapSnapshot = Arc<dyn MapEngine>;

/// Ergebnis-Typ aller Engine-Operationen.
pub type EngineResult<T> = Result<T, EngineError>;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Stabiler Handle einer Strecke.
    RailwayId,
    "Strecke"
);
entity_id!(
    /// Stabiler Handle eines Grenzpunkts.
    BorderPointId,
    "Grenzpunkt"
);
entity_id!(
    /// Stabiler Handle einer Station (kann von mehreren Strecken geteilt werden).
    StationId,
    "Station"
);

/// Treffer von [`MapEngine::find_nearest_segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestSegment {
    /// Index des getroffenen Punkts bzw. Einfüge-Index bei Segment-Treffern
    pub point_index: usize,
    /// `true`: Segment getroffen, neuer Punkt wird vor `point_index` eingefügt
    pub is_insertion_point: bool,
}

impl NearestSegment {
    /// Wandelt den Treffer in ein Drag-Ziel um.
    pub fn target(self) -> PointTarget {
        if self.is_insertion_point {
            PointTarget::InsertBefore(self.point_index)
        } else {
            PointTarget::Existing(self.point_index)
        }
    }
}

/// Ziel eines Punkt-Drags auf der selektierten Strecke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointTarget {
    /// Vorhandener Punkt wird verschoben
    Existing(usize),
    /// Neuer Punkt wird vor diesem Index eingefügt
    InsertBefore(usize),
}

/// Grenzpunkt oder Grenzkante.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderFeature {
    Point(BorderPointId),
    Edge(BorderPointId, BorderPointId),
}

/// Darstellung einer Grenzkante.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorderStyle {
    Dotted,
    #[default]
    Thin,
    Bold,
}

impl BorderStyle {
    /// Alle Stile in Auswahl-Reihenfolge.
    pub const ALL: [BorderStyle; 3] = [Self::Dotted, Self::Thin, Self::Bold];

    /// Nächster Stil im Zyklus Dotted → Thin → Bold → Dotted.
    pub fn next(self) -> Self {
        match self {
            Self::Dotted => Self::Thin,
            Self::Thin => Self::Bold,
            Self::Bold => Self::Dotted,
        }
    }

    /// Anzeigename für die Toolbar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dotted => "gepunktet",
            Self::Thin => "dünn",
            Self::Bold => "fett",
        }
    }
}

/// 8-Bit-RGB-Farbe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const STATION_GRAY: Rgb = Rgb::new(148, 148, 148);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Stammdaten einer Station.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationInfo {
    pub name: String,
    pub level: u8,
}

/// Stammdaten einer Strecke.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailwayInfo {
    pub name: String,
    pub color: Rgb,
    pub level: u8,
}

/// Strecken im sichtbaren Ausschnitt (parallele Listen).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RailwayList {
    pub ids: Vec<RailwayId>,
    pub names: Vec<String>,
}

impl RailwayList {
    pub fn iter(&self) -> impl Iterator<Item = (RailwayId, &str)> {
        self.ids
            .iter()
            .copied()
            .zip(self.names.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Stationen entlang einer Strecke mit kumulierter Distanz (Welt-Einheiten).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationList {
    pub names: Vec<String>,
    pub cumulative_distances: Vec<f64>,
}

/// Vorschau eines laufenden Gesten-Zustands. Höchstens einer pro Frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayHint {
    /// Punkt der Strecke wird verschoben oder eingefügt
    MovedPoint {
        railway: RailwayId,
        target: PointTarget,
        pointer: ScreenPos,
    },
    /// Grenzpunkt oder Grenzkante wird gezogen
    MovedBorderFeature {
        feature: BorderFeature,
        pointer: ScreenPos,
    },
    /// Neue Grenzkante vom Anker zum Zeiger
    NewBorderEdge {
        anchor: BorderPointId,
        style: BorderStyle,
        pointer: ScreenPos,
    },
}

/// Optionen für [`MapEngine::render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub selected_railway: Option<RailwayId>,
    pub overlay: Option<OverlayHint>,
    pub show_border_markers: bool,
}

/// Linienzug-Gruppe mit gemeinsamer Darstellung.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBatch {
    pub color: Rgb,
    pub width: f32,
    pub dashed: bool,
    pub segments: Vec<(ScreenPos, ScreenPos)>,
}

/// Art eines quadratischen Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Stützpunkt der selektierten Strecke
    RailwayPoint,
    /// Knoten des Grenz-Graphen
    BorderPoint,
    /// Live-Zeigerposition während eines Drags
    Pointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub pos: ScreenPos,
    pub kind: MarkerKind,
}

/// Stationsbeschriftung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub pos: ScreenPos,
    pub text: String,
    pub level: u8,
}

/// Abstrakte Zeichenanweisungen in Screen-Koordinaten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderPrimitives {
    pub lines: Vec<LineBatch>,
    pub markers: Vec<Marker>,
    pub labels: Vec<Label>,
}

/// Referenz auf eine Entität, die im Snapshot fehlt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Railway(RailwayId),
    Point { railway: RailwayId, index: usize },
    Station { railway: RailwayId, index: usize },
    BorderPoint(BorderPointId),
    BorderEdge(BorderPointId, BorderPointId),
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Railway(id) => write!(f, "{id}"),
            Self::Point { railway, index } => write!(f, "Punkt {index} auf {railway}"),
            Self::Station { railway, index } => write!(f, "Station an Punkt {index} auf {railway}"),
            Self::BorderPoint(id) => write!(f, "{id}"),
            Self::BorderEdge(a, b) => write!(f, "Grenzkante {a}–{b}"),
        }
    }
}

/// Fehler der Map-Engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Referenzierte Entität existiert im aktuellen Snapshot nicht
    #[error("Ungültige Referenz: {0}")]
    InvalidReference(Reference),
    /// Kein Stationspunkt einer anderen Strecke in Reichweite
    #[error("Keine Station in Reichweite")]
    NoStationNearby,
    /// Laden oder Speichern fehlgeschlagen
    #[error("Persistenz fehlgeschlagen: {0}")]
    Persistence(String),
}

/// Abfragen und Mutationen auf einem Karten-Snapshot.
///
/// Abfragen sind seiteneffektfrei. Mutationen lassen `self` unverändert und
/// liefern einen neuen Snapshot oder [`EngineError::InvalidReference`].
pub trait MapEngine: fmt::Debug + Send + Sync {
    // ── Abfragen ────────────────────────────────────────────────

    /// Erzeugt die Render-Primitive für den Ausschnitt.
    fn render(&self, viewport: &Viewport, options: &RenderOptions) -> RenderPrimitives;

    /// Strecken, die den Ausschnitt schneiden, in Einfüge-Reihenfolge.
    fn railways_in_viewport(&self, viewport: &Viewport) -> RailwayList;

    /// Nächster Punkt (bevorzugt) oder nächstes Segment der Strecke innerhalb der Schwelle.
    fn find_nearest_segment(
        &self,
        viewport: &Viewport,
        railway: RailwayId,
        pos: ScreenPos,
        threshold_px: u32,
    ) -> Option<NearestSegment>;

    /// Nächster Grenzpunkt (bevorzugt) oder nächste Grenzkante innerhalb der Schwelle.
    fn find_nearest_border_feature(
        &self,
        viewport: &Viewport,
        pos: ScreenPos,
        threshold_px: u32,
    ) -> Option<BorderFeature>;

    fn station_info(&self, railway: RailwayId, point_index: usize) -> Option<StationInfo>;

    fn railway_info(&self, railway: RailwayId) -> EngineResult<RailwayInfo>;

    fn number_of_points(&self, railway: RailwayId) -> EngineResult<usize>;

    fn station_list_on_railway(&self, railway: RailwayId) -> EngineResult<StationList>;

    /// Serialisiert den Snapshot.
    fn save(&self) -> EngineResult<Vec<u8>>;

    // ── Mutationen ──────────────────────────────────────────────

    fn insert_point(
        &self,
        railway: RailwayId,
        before: usize,
        pos: WorldPos,
    ) -> EngineResult<MapSnapshot>;

    fn move_point(&self, railway: RailwayId, index: usize, pos: WorldPos)
        -> EngineResult<MapSnapshot>;

    fn remove_point(&self, railway: RailwayId, index: usize) -> EngineResult<MapSnapshot>;

    /// Setzt oder legt die Station am Punkt an.
    fn set_station_info(
        &self,
        railway: RailwayId,
        index: usize,
        info: &StationInfo,
    ) -> EngineResult<MapSnapshot>;

    /// Löst die Station vom Punkt; verwaiste Stationen verschwinden.
    fn detach_station(&self, railway: RailwayId, index: usize) -> EngineResult<MapSnapshot>;

    /// Verknüpft den Punkt mit der Station unter `pos` (Punkt einer anderen Strecke).
    fn link_existing_point_to_station(
        &self,
        viewport: &Viewport,
        railway: RailwayId,
        index: usize,
        pos: ScreenPos,
        threshold_px: u32,
    ) -> EngineResult<MapSnapshot>;

    fn set_railway_info(&self, railway: RailwayId, info: &RailwayInfo)
        -> EngineResult<MapSnapshot>;

    /// Legt eine neue Strecke mit einem Punkt an.
    fn create_railway(&self, pos: WorldPos) -> EngineResult<(MapSnapshot, RailwayId)>;

    fn remove_railway(&self, railway: RailwayId) -> EngineResult<MapSnapshot>;

    fn move_border_point(&self, id: BorderPointId, pos: WorldPos) -> EngineResult<MapSnapshot>;

    /// Entfernt den Grenzpunkt samt anliegender Kanten.
    fn remove_border_point(&self, id: BorderPointId) -> EngineResult<MapSnapshot>;

    fn remove_border_edge(&self, a: BorderPointId, b: BorderPointId) -> EngineResult<MapSnapshot>;

    /// Teilt die Kante `a`–`b` mit einem neuen Punkt bei `pos` (Stil bleibt erhalten).
    fn insert_border_point_on_edge(
        &self,
        a: BorderPointId,
        b: BorderPointId,
        pos: WorldPos,
    ) -> EngineResult<MapSnapshot>;

    fn connect_existing_border_points(
        &self,
        a: BorderPointId,
        b: BorderPointId,
        style: BorderStyle,
    ) -> EngineResult<MapSnapshot>;

    /// Legt einen neuen Grenzpunkt bei `pos` an und verbindet ihn mit `anchor`.
    fn connect_new_border_point(
        &self,
        anchor: BorderPointId,
        pos: WorldPos,
        style: BorderStyle,
    ) -> EngineResult<MapSnapshot>;
}
