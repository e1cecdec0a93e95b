//! Weiches Einrasten am Snap-Raster (`1 / grid_subdivisions`).

use crate::view::ViewSettings;
use glam::Vec2;

/// Rastet jede Achse unabhängig ein, sofern der Rasterwert innerhalb von
/// `snap_distance` liegt (strikt kleiner); sonst bleibt der Rohwert erhalten.
pub fn snap_to_grid(position: Vec2, settings: &ViewSettings) -> Vec2 {
    let (subdivisions, distance) = (settings.grid_subdivisions, settings.snap_distance);
    Vec2::new(
        snap_axis(position.x, subdivisions, distance),
        snap_axis(position.y, subdivisions, distance),
    )
}

fn snap_axis(value: f32, subdivisions: u32, snap_distance: f32) -> f32 {
    if subdivisions == 0 {
        return value;
    }
    let n = subdivisions as f32;
    let snapped = (value * n).round() / n;
    if (snapped - value).abs() < snap_distance {
        snapped
    } else {
        value
    }
}
