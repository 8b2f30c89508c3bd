use rerail_editor::app::{Modifiers, PointerButton};
use rerail_editor::core::{
    BorderPointId, BorderStyle, RailwayId, RailwayInfo, ScreenPos, StationInfo, WorldPos,
};
use rerail_editor::{AppController, AppIntent, AppState, RailwayMap, ToolMode, Viewport};

/// Editor mit Testkarte; Zoomstufe 0 und Ursprung 0, Welt = Screen.
///
/// Strecke `a`: (100,100) (200,100) (300,100), Station "Mitte" an Punkt 1.
/// Strecke `b`: (100,300) (300,300), Station "Süd" an Punkt 1.
/// Grenze: `b0` (100,500) – `b1` (300,500) dünn verbunden, `b2` (500,500) frei.
pub struct Harness {
    pub controller: AppController,
    pub state: AppState,
    pub a: RailwayId,
    pub b: RailwayId,
    pub b0: BorderPointId,
    pub b1: BorderPointId,
    pub b2: BorderPointId,
}

impl Harness {
    pub fn new() -> Self {
        let mut map = RailwayMap::new();
        let a = map.add_railway(
            RailwayInfo {
                name: "Nordbahn".to_string(),
                ..RailwayInfo::default()
            },
            [
                WorldPos::new(100, 100),
                WorldPos::new(200, 100),
                WorldPos::new(300, 100),
            ],
        );
        let b = map.add_railway(
            RailwayInfo {
                name: "Südbahn".to_string(),
                ..RailwayInfo::default()
            },
            [WorldPos::new(100, 300), WorldPos::new(300, 300)],
        );
        map.add_station(a, 1, station("Mitte"))
            .expect("Punkt 1 auf Strecke a existiert");
        map.add_station(b, 1, station("Süd"))
            .expect("Punkt 1 auf Strecke b existiert");
        let b0 = map.add_border_point(WorldPos::new(100, 500));
        let b1 = map.add_border_point(WorldPos::new(300, 500));
        let b2 = map.add_border_point(WorldPos::new(500, 500));
        map.link_border_points(b0, b1, BorderStyle::Thin)
            .expect("Grenzpunkte existieren");

        let mut state = AppState::new();
        state.map = map.into_snapshot();
        state.view.viewport =
            Viewport::with_zoom_level(WorldPos::ZERO, 800, 600, 0).expect("gültige Zoomstufe");

        Self {
            controller: AppController::new(),
            state,
            a,
            b,
            b0,
            b1,
            b2,
        }
    }

    pub fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    /// Werkzeug wechseln und Strecke selektieren.
    pub fn prepare(&mut self, mode: ToolMode, railway: Option<RailwayId>) {
        self.send(AppIntent::RailwaySelectionRequested { railway });
        self.send(AppIntent::ToolModeRequested { mode });
        assert_eq!(self.state.editor.mode(), mode);
    }

    pub fn press(&mut self, x: i32, y: i32) {
        self.press_with(x, y, PointerButton::Primary, Modifiers::NONE);
    }

    pub fn press_with(&mut self, x: i32, y: i32, button: PointerButton, modifiers: Modifiers) {
        self.send(AppIntent::PointerPressed {
            pos: ScreenPos::new(x, y),
            button,
            modifiers,
        });
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.send(AppIntent::PointerMoved {
            pos: ScreenPos::new(x, y),
        });
    }

    pub fn release(&mut self, x: i32, y: i32) {
        self.send(AppIntent::PointerReleased {
            pos: ScreenPos::new(x, y),
        });
    }

    /// Drücken, ziehen, loslassen.
    pub fn drag(&mut self, from: (i32, i32), to: (i32, i32)) {
        self.press(from.0, from.1);
        self.move_to(to.0, to.1);
        self.release(to.0, to.1);
    }

    /// Konkrete Karte hinter dem Snapshot (über Speichern/Laden).
    pub fn inspect(&self) -> RailwayMap {
        let bytes = self.state.map.save().expect("Karte serialisierbar");
        RailwayMap::load(&bytes).expect("gespeicherte Karte ladbar")
    }

    pub fn points(&self, railway: RailwayId) -> Vec<WorldPos> {
        self.inspect()
            .railway_points(railway)
            .expect("Strecke existiert")
    }
}

pub fn station(name: &str) -> StationInfo {
    StationInfo {
        name: name.to_string(),
        level: 1,
    }
}
