//! Abbildung zwischen Kurvenraum und Screen-Bereich (Zoom, Pan, View-Bounds).
//!
//! Vorwärts: normieren über `view_bounds` → Zoom um die Mitte 0.5 →
//! `pan_offset` addieren → linear auf den Screen-Bereich (Y invertiert).
//! Rückwärts: exakt die inversen Schritte in umgekehrter Reihenfolge.

use super::ViewSettings;
use crate::core::CurveRect;
use glam::Vec2;

/// Mindestausdehnung eines Screen-Bereichs pro Achse (Pixel).
pub const MIN_SCREEN_EXTENT: f32 = 1.0;
/// Mindestausdehnung der View-Bounds pro Achse (Kurvenraum).
pub const MIN_VIEW_EXTENT: f32 = 1e-6;

const VIEW_CENTER: Vec2 = Vec2::splat(0.5);

/// Konvertiert einen Kurvenraum-Punkt in Screen-Koordinaten.
pub fn curve_to_screen(curve_point: Vec2, screen_rect: CurveRect, settings: &ViewSettings) -> Vec2 {
    let bounds = settings.view_bounds;
    let view_size = bounds.size_at_least(MIN_VIEW_EXTENT);

    let mut view = (curve_point - bounds.min) / view_size;
    view = (view - VIEW_CENTER) * settings.effective_zoom() + VIEW_CENTER;
    view += settings.pan_offset;

    let screen_size = screen_rect.size_at_least(MIN_SCREEN_EXTENT);
    let screen_max_y = screen_rect.min.y + screen_size.y;
    Vec2::new(
        screen_rect.min.x + view.x * screen_size.x,
        // Screen-Y wächst nach unten, Kurvenraum-Y nach oben
        screen_max_y - view.y * screen_size.y,
    )
}

/// Konvertiert Screen-Koordinaten in einen Kurvenraum-Punkt (exakte Inverse).
pub fn screen_to_curve(
    screen_point: Vec2,
    screen_rect: CurveRect,
    settings: &ViewSettings,
) -> Vec2 {
    let screen_size = screen_rect.size_at_least(MIN_SCREEN_EXTENT);
    let screen_max_y = screen_rect.min.y + screen_size.y;

    let mut view = Vec2::new(
        (screen_point.x - screen_rect.min.x) / screen_size.x,
        (screen_max_y - screen_point.y) / screen_size.y,
    );
    view -= settings.pan_offset;
    view = (view - VIEW_CENTER) / settings.effective_zoom() + VIEW_CENTER;

    let bounds = settings.view_bounds;
    view * bounds.size_at_least(MIN_VIEW_EXTENT) + bounds.min
}

/// Rechnet ein Screen-Delta in ein Kurvenraum-Delta um.
///
/// Die Abbildung ist affin, daher: `screen_to_curve(delta) - screen_to_curve(0)`.
pub fn screen_delta_to_curve(delta: Vec2, screen_rect: CurveRect, settings: &ViewSettings) -> Vec2 {
    screen_to_curve(delta, screen_rect, settings)
        - screen_to_curve(Vec2::ZERO, screen_rect, settings)
}

/// Sichtbarer Kurvenraum-Bereich: AABB der vier Screen-Ecken.
pub fn visible_bounds(screen_rect: CurveRect, settings: &ViewSettings) -> CurveRect {
    let min = screen_rect.min;
    let max = screen_rect.min + screen_rect.size_at_least(MIN_SCREEN_EXTENT);
    let a = screen_to_curve(min, screen_rect, settings);
    let b = screen_to_curve(max, screen_rect, settings);
    CurveRect::from_corners(a, b)
}

/// Zoomt per Scroll auf die Cursor-Position hin.
///
/// Neuer Zoom = `zoom * (1 - scroll_delta * zoom_speed)`, begrenzt. Der
/// `pan_offset` wird so korrigiert, dass der Kurvenpunkt unter dem Cursor an
/// derselben Screen-Position bleibt. Gibt `true` zurück, wenn sich der Zoom geändert hat.
pub fn zoom_towards(
    settings: &mut ViewSettings,
    screen_pos: Vec2,
    screen_rect: CurveRect,
    scroll_delta: f32,
) -> bool {
    let old_zoom = settings.effective_zoom();
    let factor = 1.0 - scroll_delta * settings.zoom_speed;
    let new_zoom = (old_zoom * factor)
        .max(settings.min_zoom)
        .min(settings.max_zoom)
        .max(f32::EPSILON);

    if (new_zoom - old_zoom).abs() <= f32::EPSILON * old_zoom.max(1.0) {
        return false;
    }

    let focus = screen_to_curve(screen_pos, screen_rect, settings);
    settings.zoom = new_zoom;

    let bounds = settings.view_bounds;
    let normalized = (focus - bounds.min) / bounds.size_at_least(MIN_VIEW_EXTENT);
    settings.pan_offset += (normalized - VIEW_CENTER) * (old_zoom - new_zoom);

    log::debug!(
        "Zoom {:.3} → {:.3}, Pan ({:.3}, {:.3})",
        old_zoom,
        new_zoom,
        settings.pan_offset.x,
        settings.pan_offset.y
    );
    true
}

/// Setzt das View-Fenster auf `bounds`, Pan auf 0 und Zoom auf 1.
///
/// Keine Operation bei ungültigen (leeren) Bounds.
pub fn fit_to_bounds(settings: &mut ViewSettings, bounds: CurveRect) -> bool {
    if !bounds.is_valid() {
        return false;
    }
    settings.view_bounds = bounds;
    settings.pan_offset = Vec2::ZERO;
    settings.set_zoom_clamped(1.0);
    log::debug!(
        "View-Bounds: ({:.3}, {:.3}) Größe ({:.3}, {:.3})",
        bounds.min.x,
        bounds.min.y,
        bounds.width(),
        bounds.height()
    );
    true
}

/// Setzt die View auf das Einheitsrechteck zurück.
pub fn reset_view(settings: &mut ViewSettings) {
    fit_to_bounds(settings, CurveRect::UNIT);
}
