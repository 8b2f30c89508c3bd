//! Zentrale Konfiguration für den Rerail-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::DEFAULT_ZOOM_LEVEL;
use serde::{Deserialize, Serialize};

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius für Hit-Tests in Screen-Pixeln.
pub const HIT_THRESHOLD_PX: u32 = 10;
/// Ab dieser Zeiger-Verschiebung (Pixel) wird ein Stations-Klick zum Drag.
pub const DRAG_THRESHOLD_PX: u32 = 4;
/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 100;

// ── Darstellung ─────────────────────────────────────────────────────

/// Kantenlänge der quadratischen Marker in Pixeln.
pub const MARKER_SIZE_PX: f32 = 6.0;
/// Basis-Schriftgröße der Stationsbeschriftungen.
pub const LABEL_FONT_SIZE: f32 = 12.0;
/// Hintergrundfarbe der Zeichenfläche (RGB: Papierweiß).
pub const BACKGROUND_COLOR: [u8; 3] = [250, 250, 245];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `rerail_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Pick-Radius für Punkte, Segmente und Grenzen (Pixel)
    pub hit_threshold_px: u32,
    /// Drag-Schwelle beim Verknüpfen von Stationen (Pixel)
    pub drag_threshold_px: u32,
    /// Zoomstufe beim Start
    pub initial_zoom_level: usize,
    /// Tiefe der Undo/Redo-History
    pub history_depth: usize,
    /// Marker-Größe (Pixel)
    pub marker_size_px: f32,
    /// Schriftgröße der Stationsnamen
    pub label_font_size: f32,
    /// Hintergrundfarbe (RGB)
    pub background_color: [u8; 3],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            hit_threshold_px: HIT_THRESHOLD_PX,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            initial_zoom_level: DEFAULT_ZOOM_LEVEL,
            history_depth: HISTORY_DEPTH,
            marker_size_px: MARKER_SIZE_PX,
            label_font_size: LABEL_FONT_SIZE,
            background_color: BACKGROUND_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML; fehlende Felder erhalten Standardwerte.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        log::info!("Optionen geladen (Pick-Radius {} px)", opts.hit_threshold_px);
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("rerail_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("rerail_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let opts = EditorOptions::from_toml("hit_threshold_px = 14\n").expect("gültiges TOML");

        assert_eq!(opts.hit_threshold_px, 14);
        assert_eq!(opts.drag_threshold_px, DRAG_THRESHOLD_PX);
        assert_eq!(opts.initial_zoom_level, DEFAULT_ZOOM_LEVEL);
    }

    #[test]
    fn toml_written_by_save_parses_back() {
        let opts = EditorOptions {
            history_depth: 7,
            ..Default::default()
        };

        let path = std::env::temp_dir().join("rerail_editor_options_roundtrip_test.toml");

        opts.save_to_file(&path).expect("Temp-Datei schreibbar");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("rerail_editor_options_broken_test.toml");
        std::fs::write(&path, "hit_threshold_px = \"zehn\"").expect("Temp-Datei schreibbar");

        let opts = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(opts, EditorOptions::default());
    }
}
