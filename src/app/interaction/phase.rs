//! Gesten-Phasen der Canvas-Interaktion.

use crate::core::{
    BorderFeature, BorderPointId, BorderStyle, OverlayHint, PointTarget, RailwayId, ScreenPos,
    Viewport,
};

/// Aktuelle Phase der Interaktion; jede Variante trägt nur ihre eigenen Daten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionPhase {
    #[default]
    Idle,
    /// Ausschnitt wird mit gedrückter Taste verschoben
    PanningViewport {
        /// Zeigerposition beim Drücken
        anchor: ScreenPos,
        /// Viewport beim Drücken
        origin: Viewport,
    },
    /// Punkt der selektierten Strecke wird verschoben oder eingefügt
    DraggingPoint {
        railway: RailwayId,
        target: PointTarget,
        pointer: ScreenPos,
    },
    /// Klick oder Drag auf einem Punkt im Stations-Modus
    LinkingStation {
        railway: RailwayId,
        point_index: usize,
        anchor: ScreenPos,
        /// Zeiger hat die Drag-Schwelle überschritten
        moved: bool,
        pointer: ScreenPos,
    },
    DraggingBorderFeature {
        feature: BorderFeature,
        pointer: ScreenPos,
    },
    /// Neue Grenzkante ausgehend von `anchor`
    AddingBorderEdge {
        anchor: BorderPointId,
        style: BorderStyle,
        pointer: ScreenPos,
    },
    /// Neue Strecke wird Punkt für Punkt gezeichnet
    DrawingNewRailway {
        railway: RailwayId,
        point_count: usize,
    },
}

impl InteractionPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Vorschau-Hinweis für den Renderer (höchstens einer).
    pub fn overlay_hint(&self) -> Option<OverlayHint> {
        match *self {
            Self::DraggingPoint {
                railway,
                target,
                pointer,
            } => Some(OverlayHint::MovedPoint {
                railway,
                target,
                pointer,
            }),
            Self::DraggingBorderFeature { feature, pointer } => {
                Some(OverlayHint::MovedBorderFeature { feature, pointer })
            }
            Self::AddingBorderEdge {
                anchor,
                style,
                pointer,
            } => Some(OverlayHint::NewBorderEdge {
                anchor,
                style,
                pointer,
            }),
            Self::Idle
            | Self::PanningViewport { .. }
            | Self::LinkingStation { .. }
            | Self::DrawingNewRailway { .. } => None,
        }
    }

    /// Kurzname für Log und Statusleiste.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Bereit",
            Self::PanningViewport { .. } => "Verschieben",
            Self::DraggingPoint { .. } => "Punkt ziehen",
            Self::LinkingStation { .. } => "Station",
            Self::DraggingBorderFeature { .. } => "Grenze ziehen",
            Self::AddingBorderEdge { .. } => "Grenzkante",
            Self::DrawingNewRailway { .. } => "Strecke zeichnen",
        }
    }
}
