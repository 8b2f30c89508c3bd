use crate::core::{MapSnapshot, RailwayId};

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Die Karte ist ein geteilter, unveränderlicher Snapshot: Aufnehmen und
/// Wiederherstellen kosten nur einen Arc-Klon.
#[derive(Clone)]
pub struct Snapshot {
    pub map: MapSnapshot,
    /// Selektierte Strecke zum Zeitpunkt des Snapshots
    pub selected_railway: Option<RailwayId>,
}

impl Snapshot {
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            map: state.map.clone(),
            selected_railway: state.editor.selected_railway(),
        }
    }

    /// Stellt den Snapshot wieder her. Eine Selektion, die im Snapshot
    /// nicht mehr existiert, wird verworfen.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        let selection = self
            .selected_railway
            .filter(|&id| self.map.railway_info(id).is_ok());
        state.map = self.map;
        state.editor.force_selection(selection);
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }

    /// Verwirft alle Einträge (neue oder geladene Karte).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::core::{MapEngine, RailwayInfo, RailwayMap, WorldPos};

    fn snapshot_with_railways(count: usize) -> Snapshot {
        let mut map = RailwayMap::new();
        for i in 0..count {
            let x = i as i64 * 100;
            map.add_railway(
                RailwayInfo::default(),
                vec![WorldPos::new(x, 0), WorldPos::new(x, 100)],
            );
        }
        Snapshot {
            map: map.into_snapshot(),
            selected_railway: None,
        }
    }

    fn railway_count(snap: &Snapshot) -> usize {
        snap.map.railways_in_viewport(&everything()).len()
    }

    fn everything() -> crate::core::Viewport {
        crate::core::Viewport::with_zoom_level(WorldPos::new(-1000, -1000), 4000, 4000, 0)
            .expect("gültige Zoomstufe")
    }

    #[test]
    fn undo_redo_swaps_snapshots() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_railways(1));

        let restored = history
            .pop_undo_with_current(snapshot_with_railways(2))
            .expect("Undo-Eintrag vorhanden");
        assert_eq!(railway_count(&restored), 1);
        assert!(history.can_redo());

        let again = history
            .pop_redo_with_current(restored)
            .expect("Redo-Eintrag vorhanden");
        assert_eq!(railway_count(&again), 2);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn depth_is_capped() {
        let mut history = EditHistory::new_with_capacity(2);
        for i in 0..5 {
            history.record_snapshot(snapshot_with_railways(i));
        }

        let mut undone = 0;
        let mut current = snapshot_with_railways(9);
        while let Some(prev) = history.pop_undo_with_current(current.clone()) {
            current = prev;
            undone += 1;
        }
        assert_eq!(undone, 2);
        assert_eq!(railway_count(&current), 3);
    }

    #[test]
    fn new_record_clears_redo() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_railways(1));
        history.pop_undo_with_current(snapshot_with_railways(2));
        assert!(history.can_redo());

        history.record_snapshot(snapshot_with_railways(3));
        assert!(!history.can_redo());
    }

    #[test]
    fn apply_drops_selection_missing_in_snapshot() {
        let mut state = AppState::new();
        let mut map = RailwayMap::new();
        let id = map.add_railway(RailwayInfo::default(), vec![WorldPos::new(0, 0)]);
        state.map = map.into_snapshot();
        state.editor.force_selection(Some(id));

        let empty = Snapshot {
            map: RailwayMap::new().into_snapshot(),
            selected_railway: Some(id),
        };
        empty.apply_to(&mut state);

        assert_eq!(state.editor.selected_railway(), None);
    }
}
