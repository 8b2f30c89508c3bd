//! Dialog-Koordinator: offene modale Dialoge und ihre Arbeitskopien.
//!
//! Ein Dialog pausiert die auslösende Geste. Die Antwort kommt als eigener
//! Intent zurück und wird über [`DialogSlot::resolve`] mit dem Kontext des
//! Aufrufs zusammengeführt.

use crate::core::{RailwayId, RailwayInfo, StationInfo};

/// Ein Dialog-Platz: Kontext des Aufrufers plus bearbeitbarer Entwurf.
///
/// Höchstens ein Dialog pro Platz; erneutes Öffnen ersetzt den offenen.
#[derive(Debug, Clone)]
pub struct DialogSlot<C, T> {
    pending: Option<(C, T)>,
}

impl<C, T> Default for DialogSlot<C, T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<C, T> DialogSlot<C, T> {
    /// Öffnet den Dialog mit Startwert; ein offener Dialog wird verworfen.
    pub fn open(&mut self, context: C, initial: T) {
        if self.pending.is_some() {
            log::debug!("Offener Dialog ersetzt");
        }
        self.pending = Some((context, initial));
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn context(&self) -> Option<&C> {
        self.pending.as_ref().map(|(c, _)| c)
    }

    pub fn draft(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, t)| t)
    }

    /// Arbeitskopie für Eingabefelder.
    pub fn draft_mut(&mut self) -> Option<&mut T> {
        self.pending.as_mut().map(|(_, t)| t)
    }

    /// Schließt den Dialog. `Some(value)` = bestätigt, `None` = abgebrochen.
    ///
    /// Liefert Kontext und Ergebnis nur bei Bestätigung eines offenen Dialogs.
    pub fn resolve(&mut self, value: Option<T>) -> Option<(C, T)> {
        let (context, _) = self.pending.take()?;
        value.map(|v| (context, v))
    }
}

/// Ziel des Stations-Dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationTarget {
    pub railway: RailwayId,
    pub point_index: usize,
    /// Punkt hatte beim Öffnen bereits eine Station
    pub had_station: bool,
}

/// Aktion hinter einer Ja/Nein-Rückfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    RemoveRailway { railway: RailwayId },
}

/// Inhalt der Stationsliste (nur Anzeige).
#[derive(Debug, Clone, PartialEq)]
pub struct StationListView {
    pub railway_name: String,
    /// Name und kumulierte Distanz in Welt-Einheiten
    pub entries: Vec<(String, f64)>,
}

/// Alle modalen Dialoge des Editors.
#[derive(Debug, Clone, Default)]
pub struct DialogCoordinator {
    pub station: DialogSlot<StationTarget, StationInfo>,
    pub railway: DialogSlot<RailwayId, RailwayInfo>,
    /// Aktion + angezeigte Frage
    pub confirmation: DialogSlot<ConfirmAction, String>,
    pub station_list: Option<StationListView>,
}

impl DialogCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ist irgendein modaler Dialog offen?
    pub fn any_open(&self) -> bool {
        self.station.is_open()
            || self.railway.is_open()
            || self.confirmation.is_open()
            || self.station_list.is_some()
    }

    /// Beantwortet die Rückfrage; liefert die Aktion nur bei Zustimmung.
    pub fn resolve_confirmation(&mut self, accepted: bool) -> Option<ConfirmAction> {
        let question = self.confirmation.draft().cloned();
        self.confirmation
            .resolve(question.filter(|_| accepted))
            .map(|(action, _)| action)
    }
}
