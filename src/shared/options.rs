//! Zentrale Konfiguration für den Bézier-Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use bezier_curve_engine::core::curve::DEFAULT_RESOLUTION;
use bezier_curve_engine::view::settings::{
    GRID_SUBDIVISIONS, PICK_DISTANCE_PX, SNAP_DISTANCE, ZOOM_MAX, ZOOM_MIN, ZOOM_SPEED,
};
use bezier_curve_engine::ViewSettings;
use serde::{Deserialize, Serialize};

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "bezier_curve_editor.toml";

// ── Kurve ───────────────────────────────────────────────────────────

/// Start- und Endpunkt der Standard-Kurve eines neuen Editors.
pub const DEFAULT_CURVE_START: [f32; 2] = [0.2, 0.2];
pub const DEFAULT_CURVE_END: [f32; 2] = [0.8, 0.8];

/// Laufzeit-Optionen des Editors (persistiert als TOML).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Anker und Handles in Screen-Pixeln
    pub pick_distance_px: f32,
    /// Anker beim Ziehen am Raster einrasten
    pub snap_to_grid: bool,
    /// Maximale Abweichung (Kurvenraum), innerhalb derer eingerastet wird
    pub snap_distance: f32,
    /// Raster-Unterteilungen pro Kurvenraum-Einheit
    pub grid_subdivisions: u32,

    // ── Kamera ──────────────────────────────────────────────────
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Zoom-Änderung pro Scroll-Einheit
    pub zoom_speed: f32,

    // ── Kurve ───────────────────────────────────────────────────
    /// Abtastungen der Polyline für die Darstellung (mindestens 2)
    pub curve_resolution: usize,

    // ── Anzeige ─────────────────────────────────────────────────
    pub show_grid: bool,
    pub show_control_points: bool,
    pub show_tangent_lines: bool,
    pub show_curve: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_distance_px: PICK_DISTANCE_PX,
            snap_to_grid: false,
            snap_distance: SNAP_DISTANCE,
            grid_subdivisions: GRID_SUBDIVISIONS,

            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_speed: ZOOM_SPEED,

            curve_resolution: DEFAULT_RESOLUTION,

            show_grid: true,
            show_control_points: true,
            show_tangent_lines: true,
            show_curve: true,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
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
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Erzeugt die View-Settings der Engine (Zoom 1, Pan 0, Einheits-Bounds).
    pub fn to_view_settings(&self) -> ViewSettings {
        ViewSettings {
            min_zoom: self.zoom_min,
            max_zoom: self.zoom_max,
            zoom_speed: self.zoom_speed,

            show_grid: self.show_grid,
            show_control_points: self.show_control_points,
            show_tangent_lines: self.show_tangent_lines,
            show_curve: self.show_curve,

            pick_distance: self.pick_distance_px,
            snap_to_grid: self.snap_to_grid,
            snap_distance: self.snap_distance,
            grid_subdivisions: self.grid_subdivisions,
            ..ViewSettings::default()
        }
    }
}
