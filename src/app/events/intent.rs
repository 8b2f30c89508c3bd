use crate::app::state::ToolMode;
use crate::core::{BorderStyle, RailwayId, RailwayInfo, ScreenPos, StationInfo, ZoomDirection};
use std::path::PathBuf;

/// Maustaste eines Zeiger-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Modifier-Zustand zum Zeitpunkt des Events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
    };

    pub fn any(self) -> bool {
        self.shift || self.ctrl
    }
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    // ── Canvas ──────────────────────────────────────────────────
    /// Maustaste auf der Zeichenfläche gedrückt
    PointerPressed {
        pos: ScreenPos,
        button: PointerButton,
        modifiers: Modifiers,
    },
    /// Zeiger bewegt
    PointerMoved { pos: ScreenPos },
    /// Maustaste losgelassen
    PointerReleased { pos: ScreenPos },
    /// Zeiger hat die Zeichenfläche verlassen
    PointerLeft,
    /// Mausrad über der Zeichenfläche
    WheelScrolled {
        pos: ScreenPos,
        direction: ZoomDirection,
    },
    /// Escape: laufende Geste abbrechen
    EscapePressed,
    /// Zeichenfläche hat eine neue Größe
    ViewportResized { width_px: u32, height_px: u32 },

    // ── Werkzeuge ───────────────────────────────────────────────
    ToolModeRequested { mode: ToolMode },
    RailwaySelectionRequested { railway: Option<RailwayId> },
    BorderStyleRequested { style: BorderStyle },
    /// Grenzstil zyklisch weiterschalten
    BorderStyleCycleRequested,

    // ── Streckenliste ───────────────────────────────────────────
    RailwaySettingsRequested { railway: RailwayId },
    StationListRequested { railway: RailwayId },
    DeleteRailwayRequested { railway: RailwayId },

    // ── Dialoge ─────────────────────────────────────────────────
    StationDialogConfirmed { info: StationInfo },
    StationDialogCancelled,
    RailwayDialogConfirmed { info: RailwayInfo },
    RailwayDialogCancelled,
    ConfirmationAnswered { accepted: bool },
    StationListClosed,

    // ── History & Datei ─────────────────────────────────────────
    UndoRequested,
    RedoRequested,
    NewMapRequested,
    OpenMapRequested { path: PathBuf },
    /// Unter dem zuletzt verwendeten Pfad speichern
    SaveRequested,
    SaveAsRequested { path: PathBuf },
}
