//! Gemeinsames, veränderbares View- und Interaktions-Settings-Objekt.
//!
//! Die `const`-Werte dienen als Defaults; Hosts können `ViewSettings`
//! über serde persistieren oder aus eigenen Optionen befüllen.

use crate::core::CurveRect;
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Zoom ────────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f32 = 10.0;
/// Zoom-Änderung pro Scroll-Einheit.
pub const ZOOM_SPEED: f32 = 0.1;

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln.
pub const PICK_DISTANCE_PX: f32 = 10.0;
/// Snap-Distanz in Kurvenraum-Einheiten.
pub const SNAP_DISTANCE: f32 = 0.1;
/// Raster-Unterteilungen pro Kurvenraum-Einheit (Snap-Raster = 1 / n).
pub const GRID_SUBDIVISIONS: u32 = 10;

/// View-Zustand (Bounds, Zoom, Pan) plus Anzeige- und Interaktions-Parameter.
///
/// Zur Laufzeit ändert nur die Interaktion `zoom`, `pan_offset` und
/// `view_bounds` (bzw. explizite View-Kommandos des Hosts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    // ── View ────────────────────────────────────────────────────
    /// Kurvenraum-Fenster, das vor Zoom/Pan auf den Screen-Bereich abgebildet wird
    pub view_bounds: CurveRect,
    /// Zoom-Faktor um die View-Mitte, begrenzt auf `[min_zoom, max_zoom]`
    pub zoom: f32,
    /// Verschiebung in normierten View-Koordinaten (nach Zentrierung angewendet)
    pub pan_offset: Vec2,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Zoom-Änderung pro Scroll-Einheit
    pub zoom_speed: f32,

    // ── Anzeige ─────────────────────────────────────────────────
    pub show_grid: bool,
    pub show_control_points: bool,
    pub show_tangent_lines: bool,
    pub show_curve: bool,

    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Hit-Tests in Screen-Pixeln
    pub pick_distance: f32,
    /// Anker beim Ziehen am Raster einrasten
    pub snap_to_grid: bool,
    /// Maximale Abweichung (Kurvenraum), innerhalb derer eingerastet wird
    pub snap_distance: f32,
    /// Raster-Unterteilungen pro Einheit
    pub grid_subdivisions: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            view_bounds: CurveRect::UNIT,
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
            min_zoom: ZOOM_MIN,
            max_zoom: ZOOM_MAX,
            zoom_speed: ZOOM_SPEED,

            show_grid: true,
            show_control_points: true,
            show_tangent_lines: true,
            show_curve: true,

            pick_distance: PICK_DISTANCE_PX,
            snap_to_grid: false,
            snap_distance: SNAP_DISTANCE,
            grid_subdivisions: GRID_SUBDIVISIONS,
        }
    }
}

impl ViewSettings {
    /// Setzt den Zoom, begrenzt auf `[min_zoom, max_zoom]`.
    pub fn set_zoom_clamped(&mut self, zoom: f32) {
        self.zoom = zoom.max(self.min_zoom).min(self.max_zoom);
    }

    /// Effektiver Zoom für die Transformation (nie 0, nie außerhalb der Grenzen).
    pub(crate) fn effective_zoom(&self) -> f32 {
        // max/min statt clamp: clamp panict bei min_zoom > max_zoom
        self.zoom
            .max(self.min_zoom)
            .min(self.max_zoom)
            .max(f32::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = ViewSettings::default();
        assert_eq!(s.view_bounds, CurveRect::UNIT);
        assert_eq!(s.zoom, 1.0);
        assert_eq!(s.pick_distance, 10.0);
        assert!(!s.snap_to_grid);
    }

    #[test]
    fn test_set_zoom_clamped() {
        let mut s = ViewSettings::default();
        s.set_zoom_clamped(100.0);
        assert_eq!(s.zoom, ZOOM_MAX);
        s.set_zoom_clamped(0.0);
        assert_eq!(s.zoom, ZOOM_MIN);
    }
}
