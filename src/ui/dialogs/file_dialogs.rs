use std::path::{Path, PathBuf};

const MAP_FILTER_NAME: &str = "Rerail-Karte";
const MAP_EXTENSIONS: &[&str] = &["json"];

/// Datei-Dialog zum Öffnen einer Karte.
pub fn pick_map_to_open() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter(MAP_FILTER_NAME, MAP_EXTENSIONS)
        .pick_file()
}

/// Datei-Dialog zum Speichern; schlägt den bisherigen Dateinamen vor.
pub fn pick_map_to_save(current: Option<&Path>) -> Option<PathBuf> {
    let default_name = current
        .and_then(Path::file_name)
        .and_then(|n| n.to_str())
        .unwrap_or("rerail_map.json");

    rfd::FileDialog::new()
        .add_filter(MAP_FILTER_NAME, MAP_EXTENSIONS)
        .set_file_name(default_name)
        .save_file()
}
