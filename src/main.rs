//! Rerail Editor.
//!
//! Interaktiver Editor für Eisenbahnnetz-Karten: Strecken zeichnen,
//! Stationen setzen und Grenzen bearbeiten auf einer ganzzahligen Welt
//! mit diskreten Zoomstufen.

use eframe::egui;
use rerail_editor::{ui, AppController, AppIntent, AppState, EditorOptions, RenderDriver};
use std::path::PathBuf;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Rerail Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let map_path = std::env::args_os().nth(1).map(PathBuf::from);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Rerail Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Rerail Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(map_path)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    driver: RenderDriver,
    renderer: ui::EguiRenderer,
    input: ui::CanvasInput,
}

impl EditorApp {
    fn new(map_path: Option<PathBuf>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Standard-Optionen nicht geschrieben: {:#}", e);
            }
        }

        let renderer = ui::EguiRenderer::new(&editor_options);
        let mut app = Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            driver: RenderDriver::new(),
            renderer,
            input: ui::CanvasInput::new(),
        };

        // Ohne Argument startet der Editor mit einer leeren Karte
        if let Some(path) = map_path {
            app.process_events(vec![AppIntent::OpenMapRequested { path }]);
        }
        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_railway_list(ctx, &self.state));

        events.extend(ui::show_station_dialog(
            ctx,
            &mut self.state.dialogs.station,
        ));
        events.extend(ui::show_railway_dialog(
            ctx,
            &mut self.state.dialogs.railway,
        ));
        events.extend(ui::show_confirmation_dialog(
            ctx,
            &self.state.dialogs.confirmation,
        ));
        events.extend(ui::show_station_list(
            ctx,
            self.state.dialogs.station_list.as_ref(),
        ));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_canvas_events(ui, &response));

                let painter = ui.painter_at(rect);
                let mut surface = ui::CanvasSurface {
                    painter: &painter,
                    origin: rect.min,
                };
                self.driver
                    .draw(&self.state, &mut self.renderer, &mut surface);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }
}
