use crate::app::history::{EditHistory, Snapshot};
use crate::app::interaction::InteractionPhase;
use crate::app::CommandLog;
use crate::core::{MapSnapshot, RailwayMap};
use crate::shared::EditorOptions;
use std::path::PathBuf;

use super::{DialogCoordinator, EditorToolState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktueller Karten-Snapshot (wird bei jeder Mutation vollständig ersetzt)
    pub map: MapSnapshot,
    /// View-State
    pub view: ViewState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Laufende Geste auf der Zeichenfläche
    pub phase: InteractionPhase,
    /// Offene modale Dialoge
    pub dialogs: DialogCoordinator,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Pick-Radius, Farben, Größen)
    pub options: EditorOptions,
    /// Pfad der zuletzt geladenen oder gespeicherten Karte
    pub map_path: Option<PathBuf>,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerer Karte
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt den App-State mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            map: RailwayMap::new().into_snapshot(),
            view: ViewState::with_zoom_level(options.initial_zoom_level),
            editor: EditorToolState::new(),
            phase: InteractionPhase::Idle,
            dialogs: DialogCoordinator::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
            map_path: None,
        }
    }

    /// Keine Geste aktiv und kein Dialog offen.
    pub fn is_idle(&self) -> bool {
        self.phase.is_idle() && !self.dialogs.any_open()
    }

    /// Speichert den aktuellen Zustand als Undo-Schritt.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Kann rückgängig gemacht werden?
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Kann wiederhergestellt werden?
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
