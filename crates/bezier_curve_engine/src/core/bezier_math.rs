//! Zustandslose Bézier-Mathematik (Auswertung, Ableitung, Länge, Abstand, Glättung).

use glam::Vec2;

/// Standard-Anzahl Samples für Längen- und Abstands-Approximation.
pub const DEFAULT_SAMPLES: usize = 100;
/// Standard-Gewicht für `smooth_tangent` (Anteil der Nachbar-Distanz).
pub const DEFAULT_SMOOTH_WEIGHT: f32 = 0.33;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// `t` wird vor der Auswertung auf [0, 1] begrenzt.
pub fn evaluate_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
pub fn tangent_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    3.0 * inv * inv * (p1 - p0) + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Auswertung über wiederholte lineare Interpolation (De Casteljau).
///
/// Liefert dasselbe Ergebnis wie [`evaluate_cubic`] im Rahmen der
/// Float-Genauigkeit. Außerhalb von (0, 1) werden die Endpunkte direkt zurückgegeben.
pub fn de_casteljau(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    if t <= 0.0 {
        return p0;
    }
    if t >= 1.0 {
        return p3;
    }

    let q0 = p0.lerp(p1, t);
    let q1 = p1.lerp(p2, t);
    let q2 = p2.lerp(p3, t);

    let r0 = q0.lerp(q1, t);
    let r1 = q1.lerp(q2, t);

    r0.lerp(r1, t)
}

/// Minimaler Abstand von `point` zu `samples + 1` gleichverteilten Kurvenpunkten.
///
/// Näherung, keine exakte Projektion. `samples == 0` wird wie 1 behandelt.
pub fn distance_to_curve(
    point: Vec2,
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    samples: usize,
) -> f32 {
    let samples = samples.max(1);
    (0..=samples)
        .map(|i| {
            let t = i as f32 / samples as f32;
            point.distance(evaluate_cubic(p0, p1, p2, p3, t))
        })
        .fold(f32::MAX, f32::min)
}

/// Approximierte Segmentlänge über Polylinien-Segmente.
pub fn curve_length(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, samples: usize) -> f32 {
    let samples = samples.max(1);
    let mut length = 0.0;
    let mut prev = p0;
    for i in 1..=samples {
        let t = i as f32 / samples as f32;
        let p = evaluate_cubic(p0, p1, p2, p3, t);
        length += prev.distance(p);
        prev = p;
    }
    length
}

/// Glatte Tangente aus Vorgänger, aktuellem Punkt und Nachfolger.
///
/// Ein Nachbar gleich `Vec2::ZERO` gilt als "nicht vorhanden". Für echte
/// Nachbarn im Ursprung siehe [`smooth_tangent_between`].
pub fn smooth_tangent(prev: Vec2, curr: Vec2, next: Vec2, weight: f32) -> Vec2 {
    let present = |p: Vec2| (p != Vec2::ZERO).then_some(p);
    smooth_tangent_between(present(prev), curr, present(next), weight)
}

/// Glatte Tangente mit explizit optionalen Nachbarn.
///
/// Mittelt die Einheitsrichtungen `curr - prev` und `next - curr`, normiert
/// das Ergebnis und skaliert es mit `weight * |prev' - next'|`, wobei ein
/// fehlender Nachbar durch `curr` ersetzt wird. Ohne Nachbarn: `Vec2::ZERO`.
pub fn smooth_tangent_between(
    prev: Option<Vec2>,
    curr: Vec2,
    next: Option<Vec2>,
    weight: f32,
) -> Vec2 {
    if prev.is_none() && next.is_none() {
        return Vec2::ZERO;
    }

    let mut dir = Vec2::ZERO;
    if let Some(prev) = prev {
        dir += (curr - prev).normalize_or_zero();
    }
    if let Some(next) = next {
        dir += (next - curr).normalize_or_zero();
    }

    let dir = dir.normalize_or_zero();
    let dist = prev.unwrap_or(curr).distance(next.unwrap_or(curr)) * weight;
    dir * dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn s_curve() -> [Vec2; 4] {
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ]
    }

    #[test]
    fn test_evaluate_cubic_endpoints_exact() {
        let [p0, p1, p2, p3] = s_curve();
        assert_eq!(evaluate_cubic(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(evaluate_cubic(p0, p1, p2, p3, 1.0), p3);
    }

    #[test]
    fn test_evaluate_cubic_clamps_t() {
        let [p0, p1, p2, p3] = s_curve();
        assert_eq!(evaluate_cubic(p0, p1, p2, p3, -3.0), p0);
        assert_eq!(evaluate_cubic(p0, p1, p2, p3, 7.5), p3);
    }

    #[test]
    fn test_evaluate_cubic_symmetrie() {
        // B(0.5) = 0.125*P0 + 0.375*P1 + 0.375*P2 + 0.125*P3 = (5, 5)
        let [p0, p1, p2, p3] = s_curve();
        let mid = evaluate_cubic(p0, p1, p2, p3, 0.5);
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(mid.y, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_de_casteljau_stimmt_mit_bernstein_ueberein() {
        let sets = [
            s_curve(),
            [
                Vec2::new(-1.5, 2.0),
                Vec2::new(3.25, -4.0),
                Vec2::new(0.5, 0.75),
                Vec2::new(2.0, 2.0),
            ],
            [Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, Vec2::ZERO],
        ];
        for [p0, p1, p2, p3] in sets {
            for i in 0..=64 {
                let t = i as f32 / 64.0;
                let a = evaluate_cubic(p0, p1, p2, p3, t);
                let b = de_casteljau(p0, p1, p2, p3, t);
                assert!(a.distance(b) < 1e-5, "t={t}: {a:?} != {b:?}");
            }
        }
    }

    #[test]
    fn test_de_casteljau_short_circuit() {
        let [p0, p1, p2, p3] = s_curve();
        assert_eq!(de_casteljau(p0, p1, p2, p3, -0.1), p0);
        assert_eq!(de_casteljau(p0, p1, p2, p3, 1.2), p3);
    }

    #[test]
    fn test_tangent_cubic_gerade_linie() {
        // Gleichmäßig verteilte Kontrollpunkte → konstante Ableitung 3 * (P1 - P0)
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(1.0, 0.0);
        let p2 = Vec2::new(2.0, 0.0);
        let p3 = Vec2::new(3.0, 0.0);
        for t in [0.0, 0.25, 0.5, 1.0] {
            let d = tangent_cubic(p0, p1, p2, p3, t);
            assert_relative_eq!(d.x, 3.0, epsilon = 1e-5);
            assert_relative_eq!(d.y, 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_curve_length_gerade_linie() {
        let p0 = Vec2::new(0.0, 0.0);
        let p3 = Vec2::new(3.0, 4.0);
        let len = curve_length(p0, p0.lerp(p3, 1.0 / 3.0), p0.lerp(p3, 2.0 / 3.0), p3, 100);
        assert_relative_eq!(len, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_distance_to_curve() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(1.0, 0.0);
        let p2 = Vec2::new(2.0, 0.0);
        let p3 = Vec2::new(3.0, 0.0);
        let d = distance_to_curve(Vec2::new(1.5, 2.0), p0, p1, p2, p3, DEFAULT_SAMPLES);
        assert_relative_eq!(d, 2.0, epsilon = 1e-4);
        // Punkt auf der Kurve
        let on = distance_to_curve(Vec2::new(3.0, 0.0), p0, p1, p2, p3, DEFAULT_SAMPLES);
        assert_relative_eq!(on, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_smooth_tangent_ohne_nachbarn_ist_null() {
        let t = smooth_tangent(Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::ZERO, 0.33);
        assert_eq!(t, Vec2::ZERO);
    }

    #[test]
    fn test_smooth_tangent_kollinear() {
        let prev = Vec2::new(1.0, 1.0);
        let curr = Vec2::new(2.0, 1.0);
        let next = Vec2::new(4.0, 1.0);
        let t = smooth_tangent(prev, curr, next, DEFAULT_SMOOTH_WEIGHT);
        // Richtung +X, Länge 0.33 * |next - prev| = 0.99
        assert_relative_eq!(t.x, 0.99, epsilon = 1e-5);
        assert_relative_eq!(t.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_smooth_tangent_ein_nachbar_fehlt() {
        let curr = Vec2::new(1.0, 1.0);
        let next = Vec2::new(1.0, 3.0);
        let t = smooth_tangent(Vec2::ZERO, curr, next, 0.5);
        // Nur Richtung zum Nachfolger, Distanz |curr - next| * 0.5 = 1
        assert_relative_eq!(t.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(t.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_smooth_tangent_between_nachbar_im_ursprung() {
        let t = smooth_tangent_between(
            Some(Vec2::ZERO),
            Vec2::new(1.0, 0.0),
            Some(Vec2::new(2.0, 0.0)),
            0.5,
        );
        assert_relative_eq!(t.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(t.y, 0.0, epsilon = 1e-6);
    }
}
