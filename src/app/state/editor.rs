use crate::core::{BorderStyle, RailwayId};

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Ausschnitt mit der Maus verschieben
    #[default]
    Pan,
    /// Neue Strecke Punkt für Punkt zeichnen
    NewRailway,
    /// Punkte der selektierten Strecke verschieben, einfügen, löschen
    EditRailway,
    /// Stationen an Punkten der selektierten Strecke bearbeiten
    EditStation,
    /// Grenz-Graph bearbeiten
    EditBorders,
}

impl ToolMode {
    /// Alle Werkzeuge in Toolbar-Reihenfolge.
    pub const ALL: [ToolMode; 5] = [
        Self::Pan,
        Self::NewRailway,
        Self::EditRailway,
        Self::EditStation,
        Self::EditBorders,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pan => "Verschieben",
            Self::NewRailway => "Neue Strecke",
            Self::EditRailway => "Strecke bearbeiten",
            Self::EditStation => "Stationen",
            Self::EditBorders => "Grenzen",
        }
    }

    /// Tastenkürzel (ohne Modifier).
    pub fn shortcut(self) -> char {
        match self {
            Self::Pan => 'm',
            Self::NewRailway => 'n',
            Self::EditRailway => 'r',
            Self::EditStation => 's',
            Self::EditBorders => 'b',
        }
    }
}

/// Zustand des aktuellen Editor-Werkzeugs inklusive Strecken-Selektion.
///
/// Werkzeug und Selektion ändern sich nur, wenn der Aufrufer den Editor als
/// untätig meldet (keine Geste, kein offener Dialog).
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    mode: ToolMode,
    selected_railway: Option<RailwayId>,
    /// Stil für neue Grenzkanten
    pub border_style: BorderStyle,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Pan aktiv, nichts selektiert).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn selected_railway(&self) -> Option<RailwayId> {
        self.selected_railway
    }

    /// Wechselt das Werkzeug. Liefert `false`, wenn der Editor beschäftigt ist.
    pub fn set_mode(&mut self, mode: ToolMode, idle: bool) -> bool {
        if !idle {
            log::debug!(
                "Werkzeugwechsel zu '{}' abgelehnt: Geste oder Dialog aktiv",
                mode.label()
            );
            return false;
        }
        if self.mode != mode {
            log::info!("Werkzeug: {}", mode.label());
            self.mode = mode;
        }
        true
    }

    /// Selektiert eine Strecke. Liefert `false`, wenn der Editor beschäftigt ist.
    pub fn select_railway(&mut self, railway: Option<RailwayId>, idle: bool) -> bool {
        if !idle {
            log::debug!("Selektion abgelehnt: Geste oder Dialog aktiv");
            return false;
        }
        self.selected_railway = railway;
        true
    }

    /// Setzt die Selektion ohne Prüfung (nach Anlegen/Entfernen/Undo).
    pub(crate) fn force_selection(&mut self, railway: Option<RailwayId>) {
        self.selected_railway = railway;
    }

    /// Selektion für den Renderer; im Grenz-Modus unterdrückt.
    pub fn render_selection(&self) -> Option<RailwayId> {
        match self.mode {
            ToolMode::EditBorders => None,
            _ => self.selected_railway,
        }
    }
}
