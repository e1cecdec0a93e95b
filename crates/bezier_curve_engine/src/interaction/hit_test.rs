//! Hit-Test gegen Anker und Tangenten-Handles in Screen-Pixeln.

use crate::core::{Curve, CurveRect, HandleKind};
use crate::view::{ViewSettings, curve_to_screen};
use glam::Vec2;

/// Treffer eines Hit-Tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleHit {
    /// Punkt-Index in der Kurve
    pub index: usize,
    /// Getroffener Teil des Punkts
    pub handle: HandleKind,
}

/// Reihenfolge pro Punkt: Tangenten vor dem Anker.
const HIT_ORDER: [HandleKind; 3] = [
    HandleKind::TangentIn,
    HandleKind::TangentOut,
    HandleKind::Anchor,
];

/// Sucht den ersten Punkt/Handle innerhalb von `pick_distance` (strikt kleiner).
///
/// Punkte werden in Index-Reihenfolge geprüft, der erste Treffer gewinnt (kein
/// Nächster-Kandidat-Vergleich). Handles mit Offset `(0, 0)` gelten als nicht vorhanden.
pub fn hit_test(
    curve: &Curve,
    screen_pos: Vec2,
    screen_rect: CurveRect,
    settings: &ViewSettings,
) -> Option<HandleHit> {
    let pick_distance = settings.pick_distance;

    curve.points().iter().enumerate().find_map(|(index, point)| {
        HIT_ORDER.into_iter().find_map(|handle| {
            if handle != HandleKind::Anchor && point.handle_offset(handle) == Vec2::ZERO {
                return None;
            }
            let handle_world = point.handle_world(handle);
            let handle_screen = curve_to_screen(handle_world, screen_rect, settings);
            let within = handle_screen.distance(screen_pos) < pick_distance;
            within.then_some(HandleHit { index, handle })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurvePoint;

    fn screen() -> CurveRect {
        CurveRect::new(0.0, 0.0, 100.0, 100.0)
    }

    fn curve_with(points: Vec<CurvePoint>) -> Curve {
        let mut curve = Curve::new();
        for p in points {
            let index = curve.add_point(p.position());
            if let Some(target) = curve.point_mut(index) {
                *target = p;
            }
        }
        curve
    }

    #[test]
    fn test_handle_vor_anker() {
        // Anker (0.5,0.5) → Screen (50,50); Out-Handle (0.55,0.5) → (55,50)
        let out = Vec2::new(0.05, 0.0);
        let point = CurvePoint::with_controls(Vec2::new(0.5, 0.5), Vec2::ZERO, out);
        let curve = curve_with(vec![point]);
        let settings = ViewSettings::default();
        let hit = hit_test(&curve, Vec2::new(52.0, 50.0), screen(), &settings);
        assert_eq!(
            hit,
            Some(HandleHit {
                index: 0,
                handle: HandleKind::TangentOut
            })
        );
    }

    #[test]
    fn test_null_handle_wird_ignoriert() {
        let curve = curve_with(vec![CurvePoint::new(Vec2::new(0.5, 0.5))]);
        let settings = ViewSettings::default();
        let hit = hit_test(&curve, Vec2::new(50.0, 50.0), screen(), &settings);
        assert_eq!(hit.map(|h| h.handle), Some(HandleKind::Anchor));
    }

    #[test]
    fn test_erster_punkt_gewinnt() {
        // Punkt 1 liegt näher am Pointer, Punkt 0 ist aber ebenfalls im Radius
        let curve = curve_with(vec![
            CurvePoint::new(Vec2::new(0.50, 0.5)),
            CurvePoint::new(Vec2::new(0.56, 0.5)),
        ]);
        let settings = ViewSettings::default();
        let hit = hit_test(&curve, Vec2::new(55.0, 50.0), screen(), &settings);
        assert_eq!(hit.map(|h| h.index), Some(0));
    }

    #[test]
    fn test_pick_distance_strikt() {
        let curve = curve_with(vec![CurvePoint::new(Vec2::new(0.5, 0.5))]);
        let settings = ViewSettings::default();
        let at_radius = hit_test(&curve, Vec2::new(60.0, 50.0), screen(), &settings);
        let inside = hit_test(&curve, Vec2::new(59.5, 50.0), screen(), &settings);
        assert!(at_radius.is_none());
        assert!(inside.is_some());
    }
}
