//! Core-Domäne: Koordinatensystem, Geometrie und Map-Engine.

pub mod geom;
/// Vertrag zwischen Editor und Karten-Datenhaltung
pub mod map_engine;
pub mod railway_map;
pub mod spatial;
pub mod viewport;

pub use geom::WorldRect;
pub use map_engine::{
    BorderFeature, BorderPointId, BorderStyle, EngineError, EngineResult, Label, LineBatch,
    MapEngine, MapSnapshot, Marker, MarkerKind, NearestSegment, OverlayHint, PointTarget,
    RailwayId, RailwayInfo, RailwayList, Reference, RenderOptions, RenderPrimitives, Rgb,
    StationId, StationInfo, StationList, MAX_LEVEL,
};
pub use railway_map::RailwayMap;
pub use viewport::{
    ScreenPos, Viewport, ViewportError, WorldPos, ZoomDirection, DEFAULT_ZOOM_LEVEL,
    WORLD_ORIGIN, ZOOM_FACTORS,
};
