//! Adaptives Hintergrund-Raster (nur Darstellung, nicht interaktiv).
//!
//! Die Schrittweite folgt einer log-skalierten Interpolation zwischen
//! `MIN_GRID_STEP` und `MAX_GRID_STEP`, begrenzt durch die gewünschte
//! Linienanzahl, und wird auf Vielfache von `BASE_GRID_STEP` (bzw. feinere
//! Teilschritte) abgerundet, damit Linien beim Pannen an festen Positionen bleiben.

use super::ViewSettings;
use super::transform::{MIN_SCREEN_EXTENT, curve_to_screen, visible_bounds};
use crate::core::CurveRect;
use glam::Vec2;

/// Basis-Schrittweite (Kurvenraum), auf deren Vielfache ausgerichtet wird.
pub const BASE_GRID_STEP: f32 = 0.05;
/// Kleinste Schrittweite (starkes Hineinzoomen).
pub const MIN_GRID_STEP: f32 = 0.005;
/// Größte Schrittweite (starkes Herauszoomen).
pub const MAX_GRID_STEP: f32 = 0.5;
/// Minimale Linienanzahl pro Achse.
pub const MIN_GRID_LINES: usize = 5;
/// Maximale Linienanzahl pro Achse.
pub const MAX_GRID_LINES: usize = 50;
/// Toleranz (Pixel) für Linien knapp außerhalb des Screen-Bereichs.
pub const GRID_CLIP_TOLERANCE_PX: f32 = 1.0;

/// Größter Rasterindex (Betrag), für den noch Linien erzeugt werden (2^53).
const MAX_GRID_INDEX: f64 = 9_007_199_254_740_992.0;

/// Teilschritte unterhalb der Basis-Schrittweite (absteigend).
const FINE_GRID_STEPS: [f32; 3] = [0.025, 0.01, 0.005];

/// Eine Rasterlinie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    /// Kurvenraum-Koordinate (X bei vertikalen, Y bei horizontalen Linien)
    pub value: f32,
    /// Screen-Koordinate derselben Achse
    pub screen: f32,
    /// Koordinatenachse (X = 0 bzw. Y = 0)
    pub is_axis: bool,
}

/// Alle Rasterlinien für einen Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLines {
    /// Schrittweite pro Achse (Kurvenraum)
    pub step: Vec2,
    /// Sichtbarer Kurvenraum-Bereich
    pub visible: CurveRect,
    /// Vertikale Linien (konstantes X)
    pub vertical: Vec<GridLine>,
    /// Horizontale Linien (konstantes Y)
    pub horizontal: Vec<GridLine>,
}

/// Schrittweite für eine sichtbare Ausdehnung (Kurvenraum) auf einer Achse.
///
/// Monoton steigend in `visible_extent`, immer in `[MIN_GRID_STEP, MAX_GRID_STEP]`.
pub fn grid_step_for_extent(visible_extent: f32) -> f32 {
    if !visible_extent.is_finite() {
        return MAX_GRID_STEP;
    }
    let visible = visible_extent.max(0.0);

    // log10(0.001) .. log10(10) → [0, 1]
    let log_scale = visible.max(0.001).log10();
    let normalized = ((log_scale + 3.0) / 4.0).clamp(0.0, 1.0);
    let adaptive = MIN_GRID_STEP + (MAX_GRID_STEP - MIN_GRID_STEP) * normalized;

    let step_for_max_lines = visible / MAX_GRID_LINES as f32;
    let step_for_min_lines = visible / MIN_GRID_LINES as f32;
    let constrained = adaptive.max(step_for_max_lines).min(step_for_min_lines);

    align_step(constrained).clamp(MIN_GRID_STEP, MAX_GRID_STEP)
}

/// Rundet auf ein Vielfaches von `BASE_GRID_STEP` bzw. den nächstkleineren Teilschritt ab.
fn align_step(step: f32) -> f32 {
    if step >= BASE_GRID_STEP {
        (step / BASE_GRID_STEP).floor() * BASE_GRID_STEP
    } else {
        FINE_GRID_STEPS
            .iter()
            .copied()
            .find(|&fine| fine <= step)
            .unwrap_or(MIN_GRID_STEP)
    }
}

/// Schrittweiten pro Achse für die aktuellen View-Settings.
pub fn grid_steps(settings: &ViewSettings) -> Vec2 {
    let zoom = settings.effective_zoom();
    let extent = settings.view_bounds.size / zoom;
    Vec2::new(
        grid_step_for_extent(extent.x),
        grid_step_for_extent(extent.y),
    )
}

/// Berechnet alle sichtbaren Rasterlinien für den Screen-Bereich.
///
/// Pro Achse werden höchstens `MAX_GRID_LINES` Linien geliefert; bei zu
/// vielen Linien wird jede k-te behalten (global indiziert, daher stabil beim Pannen).
pub fn grid_lines(screen_rect: CurveRect, settings: &ViewSettings) -> GridLines {
    let visible = visible_bounds(screen_rect, settings);
    let step = Vec2::new(
        grid_step_for_extent(visible.width()),
        grid_step_for_extent(visible.height()),
    );
    let screen_size = screen_rect.size_at_least(MIN_SCREEN_EXTENT);
    let tolerance = visible.size / screen_size * GRID_CLIP_TOLERANCE_PX;

    let to_screen = |p: Vec2| curve_to_screen(p, screen_rect, settings);

    let vertical = axis_values(visible.min.x, visible.max().x, step.x, tolerance.x)
        .into_iter()
        .map(|(value, is_axis)| GridLine {
            value,
            screen: to_screen(Vec2::new(value, visible.min.y)).x,
            is_axis,
        })
        .collect();

    let horizontal = axis_values(visible.min.y, visible.max().y, step.y, tolerance.y)
        .into_iter()
        .map(|(value, is_axis)| GridLine {
            value,
            screen: to_screen(Vec2::new(visible.min.x, value)).y,
            is_axis,
        })
        .collect();

    GridLines {
        step,
        visible,
        vertical,
        horizontal,
    }
}

/// Vielfache von `step` in `[lo - tolerance, hi + tolerance]`, ausgedünnt auf `MAX_GRID_LINES`.
///
/// Es werden nur Vielfache der Ausdünnungs-Schrittweite besucht, der Aufwand
/// bleibt daher unabhängig von der sichtbaren Ausdehnung.
fn axis_values(lo: f32, hi: f32, step: f32, tolerance: f32) -> Vec<(f32, bool)> {
    let step = f64::from(step);
    let first = ((f64::from(lo) - f64::from(tolerance)) / step).ceil();
    let last = ((f64::from(hi) + f64::from(tolerance)) / step).floor();
    // Indexbereich muss exakt in f64 und i64 darstellbar sein
    if !(first.is_finite() && last.is_finite())
        || last < first
        || first < -MAX_GRID_INDEX
        || last > MAX_GRID_INDEX
    {
        return Vec::new();
    }
    let (first, last) = (first as i64, last as i64);

    let count = (last - first) as u64 + 1;
    let max_lines = MAX_GRID_LINES as u64;
    let stride = if count > max_lines {
        (count - 1).div_ceil(max_lines - 1) as i64
    } else {
        1
    };

    let mut start = first.div_euclid(stride) * stride;
    if start < first {
        start += stride;
    }

    (start..=last)
        .step_by(stride as usize)
        .map(|index| ((index as f64 * step) as f32, index == 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> CurveRect {
        CurveRect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn zoom_sweep(settings: &ViewSettings) -> Vec<f32> {
        let steps = 200;
        let (lo, hi) = (settings.min_zoom.ln(), settings.max_zoom.ln());
        (0..=steps)
            .map(|i| (lo + (hi - lo) * i as f32 / steps as f32).exp())
            .map(|z| z.clamp(settings.min_zoom, settings.max_zoom))
            .collect()
    }

    #[test]
    fn test_step_monoton_mit_zoom() {
        let mut settings = ViewSettings::default();
        let mut previous = f32::MAX;
        for zoom in zoom_sweep(&settings) {
            settings.zoom = zoom;
            let step = grid_steps(&settings);
            assert!(step.x <= previous, "zoom={zoom}: {} > {previous}", step.x);
            previous = step.x;
        }
    }

    #[test]
    fn test_step_immer_begrenzt() {
        for extent in [0.0, 1e-6, 0.003, 0.1, 1.0, 7.0, 25.0, 1e3, 1e6, f32::INFINITY] {
            let step = grid_step_for_extent(extent);
            assert!(
                (MIN_GRID_STEP..=MAX_GRID_STEP).contains(&step),
                "extent={extent}: step={step}"
            );
        }
    }

    #[test]
    fn test_linienanzahl_im_zielbereich() {
        let mut settings = ViewSettings::default();
        for pan in [Vec2::ZERO, Vec2::new(0.37, -0.81)] {
            settings.pan_offset = pan;
            for zoom in zoom_sweep(&settings) {
                settings.zoom = zoom;
                let lines = grid_lines(screen(), &settings);
                let counts = [("x", lines.vertical.len()), ("y", lines.horizontal.len())];
                for (axis, count) in counts {
                    assert!(
                        (MIN_GRID_LINES..=MAX_GRID_LINES).contains(&count),
                        "zoom={zoom} pan={pan:?} achse={axis}: {count} Linien"
                    );
                }
            }
        }
    }

    #[test]
    fn test_ausduennung_bei_grosser_ausdehnung() {
        let settings = ViewSettings {
            view_bounds: CurveRect::new(-500.0, -500.0, 1000.0, 1000.0),
            ..ViewSettings::default()
        };
        let lines = grid_lines(screen(), &settings);
        assert_eq!(lines.step.x, MAX_GRID_STEP);
        assert!(lines.vertical.len() <= MAX_GRID_LINES);
        assert!(lines.vertical.len() >= MIN_GRID_LINES);
    }

    #[test]
    fn test_riesige_ausdehnung_bleibt_begrenzt() {
        for extent in [1e7_f32, 1e20] {
            let settings = ViewSettings {
                view_bounds: CurveRect::new(-extent / 2.0, -extent / 2.0, extent, extent),
                ..ViewSettings::default()
            };
            let lines = grid_lines(screen(), &settings);
            assert!(lines.vertical.len() <= MAX_GRID_LINES, "extent={extent}");
            assert!(lines.horizontal.len() <= MAX_GRID_LINES, "extent={extent}");
            assert!(lines.vertical.iter().all(|l| l.value.is_finite()));
        }

        // 1e7 ist noch exakt indizierbar: Linien bleiben sichtbar
        let settings = ViewSettings {
            view_bounds: CurveRect::new(-5e6, -5e6, 1e7, 1e7),
            ..ViewSettings::default()
        };
        let lines = grid_lines(screen(), &settings);
        assert!(lines.vertical.len() >= MIN_GRID_LINES);
        assert!(lines.vertical.iter().any(|l| l.is_axis));
    }

    #[test]
    fn test_ausduennung_nur_auf_vielfachen_des_strides() {
        let values = axis_values(-1000.0, 1000.0, 0.5, 0.0);
        assert!(values.len() <= MAX_GRID_LINES);
        assert!(values.len() >= MAX_GRID_LINES - 1);
        let stride = values[1].0 - values[0].0;
        assert!(values.iter().all(|&(v, _)| (v / stride).fract() == 0.0));
        assert!(values.iter().any(|&(v, is_axis)| v == 0.0 && is_axis));
    }

    #[test]
    fn test_achsenlinie_markiert() {
        let settings = ViewSettings {
            view_bounds: CurveRect::new(-1.0, -1.0, 2.0, 2.0),
            ..ViewSettings::default()
        };
        let lines = grid_lines(screen(), &settings);
        let axis = lines
            .vertical
            .iter()
            .find(|l| l.is_axis)
            .expect("X=0 sichtbar");
        assert_eq!(axis.value, 0.0);
        assert!((axis.screen - 400.0).abs() < 1e-3);
        assert!(lines.horizontal.iter().any(|l| l.is_axis));
    }

    #[test]
    fn test_linien_liegen_auf_vielfachen() {
        let mut settings = ViewSettings::default();
        settings.pan_offset = Vec2::new(0.123, 0.456);
        let lines = grid_lines(screen(), &settings);
        for line in &lines.vertical {
            let k = line.value / lines.step.x;
            assert!((k - k.round()).abs() < 1e-3);
        }
    }
}
