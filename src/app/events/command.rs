use crate::app::interaction::InteractionPhase;
use crate::app::state::{ConfirmAction, ToolMode};
use crate::core::{
    BorderPointId, BorderStyle, RailwayId, RailwayInfo, ScreenPos, StationInfo, WorldPos,
    ZoomDirection,
};
use std::path::PathBuf;

/// Mutierende Commands, die vom Controller ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Interaktion & Viewport ──────────────────────────────────
    /// Neue Gesten-Phase setzen
    SetPhase { phase: InteractionPhase },
    /// Welt-Ursprung des Ausschnitts setzen (Pan)
    SetViewportOrigin { top_left: WorldPos },
    /// Eine Zoomstufe um die Zeigerposition
    ZoomAt {
        pos: ScreenPos,
        direction: ZoomDirection,
    },
    ResizeViewport { width_px: u32, height_px: u32 },

    // ── Strecken ────────────────────────────────────────────────
    MovePoint {
        railway: RailwayId,
        index: usize,
        pos: WorldPos,
    },
    InsertPoint {
        railway: RailwayId,
        before: usize,
        pos: WorldPos,
    },
    RemovePoint { railway: RailwayId, index: usize },
    /// Neue Strecke anlegen und Zeichnen starten
    CreateRailway { pos: WorldPos },
    RemoveRailway { railway: RailwayId },

    // ── Stationen ───────────────────────────────────────────────
    OpenStationDialog {
        railway: RailwayId,
        point_index: usize,
    },
    /// `None` = Dialog abgebrochen
    ResolveStationDialog { info: Option<StationInfo> },
    LinkStation {
        railway: RailwayId,
        index: usize,
        pos: ScreenPos,
    },
    DetachStation { railway: RailwayId, index: usize },

    // ── Grenzen ─────────────────────────────────────────────────
    MoveBorderPoint { id: BorderPointId, pos: WorldPos },
    RemoveBorderPoint { id: BorderPointId },
    RemoveBorderEdge { a: BorderPointId, b: BorderPointId },
    InsertBorderPointOnEdge {
        a: BorderPointId,
        b: BorderPointId,
        pos: WorldPos,
    },
    ConnectBorderPoints {
        a: BorderPointId,
        b: BorderPointId,
        style: BorderStyle,
    },
    ConnectNewBorderPoint {
        anchor: BorderPointId,
        pos: WorldPos,
        style: BorderStyle,
    },

    // ── Werkzeuge ───────────────────────────────────────────────
    SetToolMode { mode: ToolMode },
    SelectRailway { railway: Option<RailwayId> },
    SetBorderStyle { style: BorderStyle },

    // ── Dialoge ─────────────────────────────────────────────────
    OpenRailwayDialog { railway: RailwayId },
    ResolveRailwayDialog { info: Option<RailwayInfo> },
    OpenStationList { railway: RailwayId },
    CloseStationList,
    OpenConfirmation { action: ConfirmAction },
    ResolveConfirmation { accepted: bool },

    // ── History & Datei ─────────────────────────────────────────
    Undo,
    Redo,
    NewMap,
    LoadMap { path: PathBuf },
    SaveMap { path: PathBuf },
}
