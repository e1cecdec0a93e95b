//! Stückweise kubische Bézier-Kurve aus geordneten Kurvenpunkten.

use super::bezier_math::{self, DEFAULT_SMOOTH_WEIGHT};
use super::{CurvePoint, CurveRect};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Abtastdichte für Polylinien-Approximationen.
pub const DEFAULT_RESOLUTION: usize = 100;
/// Minimale Abtastdichte.
pub const MIN_RESOLUTION: usize = 2;
/// Mindestausdehnung der Bounds pro Achse (Kurvenraum-Einheiten).
pub const MIN_BOUNDS_EXTENT: f32 = 0.1;
/// Rand der Bounds als Anteil der Ausdehnung (pro Seite).
pub const BOUNDS_MARGIN: f32 = 0.1;
/// Handle-Länge der `smooth`-Fabrik als Anteil des Punktabstands.
pub const SMOOTH_HANDLE_FACTOR: f32 = 0.33;

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

/// Geordnete Folge von Kurvenpunkten, offen oder geschlossen.
///
/// Segment `i` verbindet Punkt `i` mit Punkt `(i + 1) % point_count`.
/// Die Kurve besitzt ihre Punkte exklusiv; Änderungen laufen nur über die
/// Mutatoren dieses Typs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    points: Vec<CurvePoint>,
    #[serde(rename = "loop", default)]
    looped: bool,
    #[serde(default = "default_resolution")]
    resolution: usize,
}

impl Curve {
    /// Erstellt eine leere, offene Kurve.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            looped: false,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Gerade Kurve aus zwei Punkten ohne Tangenten.
    pub fn linear(start: Vec2, end: Vec2) -> Self {
        let mut curve = Self::new();
        curve.add_point(start);
        curve.add_point(end);
        curve
    }

    /// Glatte Kurve aus zwei Punkten.
    ///
    /// Die Handles zeigen entlang der Verbindungsrichtung, Länge
    /// `0.33 * Abstand`: `p0.control_out = dir * d`, `p1.control_in = -dir * d`.
    pub fn smooth(start: Vec2, end: Vec2) -> Self {
        let dir = (end - start).normalize_or_zero();
        let dist = start.distance(end) * SMOOTH_HANDLE_FACTOR;

        let mut p0 = CurvePoint::new(start);
        let mut p1 = CurvePoint::new(end);
        p0.set_control_out(dir * dist);
        p1.set_control_in(-dir * dist);

        Self {
            points: vec![p0, p1],
            ..Self::new()
        }
    }

    // ── Zugriff ─────────────────────────────────────────────────────

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkt an `index`, `None` außerhalb des Bereichs.
    pub fn point(&self, index: usize) -> Option<&CurvePoint> {
        self.points.get(index)
    }

    /// Veränderbarer Punkt an `index` (Handle-Edits), `None` außerhalb des Bereichs.
    pub fn point_mut(&mut self, index: usize) -> Option<&mut CurvePoint> {
        self.points.get_mut(index)
    }

    /// Geschlossene Kurve (letzter Punkt verbindet zurück zum ersten)?
    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn set_looped(&mut self, looped: bool) {
        self.looped = looped;
    }

    /// Abtastdichte für Polylinien (immer ≥ 2).
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Setzt die Abtastdichte; Werte unter 2 werden auf 2 angehoben.
    pub fn set_resolution(&mut self, resolution: usize) {
        self.resolution = resolution.max(MIN_RESOLUTION);
    }

    /// Anzahl Segmente: `n` bei geschlossener, `n - 1` bei offener Kurve, 0 unter 2 Punkten.
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            0
        } else if self.looped {
            n
        } else {
            n - 1
        }
    }

    // ── Mutatoren ───────────────────────────────────────────────────

    /// Hängt einen Punkt ohne Tangenten an und gibt dessen Index zurück.
    pub fn add_point(&mut self, position: Vec2) -> usize {
        self.points.push(CurvePoint::new(position));
        self.points.len() - 1
    }

    /// Fügt einen Punkt an `index` ein. Keine Operation außerhalb von `[0, count]`.
    pub fn insert_point(&mut self, index: usize, position: Vec2) -> bool {
        if index > self.points.len() {
            return false;
        }
        self.points.insert(index, CurvePoint::new(position));
        true
    }

    /// Entfernt den Punkt an `index`. Keine Operation außerhalb des Bereichs.
    pub fn remove_point(&mut self, index: usize) -> bool {
        if index >= self.points.len() {
            return false;
        }
        self.points.remove(index);
        true
    }

    /// Entfernt alle Punkte.
    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    /// Verschiebt den Anker an `index`. Keine Operation außerhalb des Bereichs.
    pub fn move_point(&mut self, index: usize, position: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.set_position(position);
                true
            }
            None => false,
        }
    }

    /// Berechnet die Handles der Punkte `index - 1 ..= index + 1` neu,
    /// sofern diese `auto_tangents` gesetzt haben.
    ///
    /// Gibt `true` zurück, wenn mindestens ein Punkt geändert wurde.
    pub fn refresh_auto_tangents_around(&mut self, index: usize) -> bool {
        let n = self.points.len();
        if n < 2 || index >= n {
            return false;
        }

        let mut changed = false;
        for candidate in [index as isize - 1, index as isize, index as isize + 1] {
            let Some(i) = self.wrap_index(candidate) else {
                continue;
            };
            if !self.points[i].auto_tangents() {
                continue;
            }
            let prev = self
                .wrap_index(i as isize - 1)
                .map(|p| self.points[p].position());
            let next = self
                .wrap_index(i as isize + 1)
                .map(|p| self.points[p].position());
            let curr = self.points[i].position();
            let tangent =
                bezier_math::smooth_tangent_between(prev, curr, next, DEFAULT_SMOOTH_WEIGHT);

            let point = &mut self.points[i];
            point.set_control_out(tangent);
            point.set_control_in(-tangent);
            changed = true;
        }
        changed
    }

    /// Index-Auflösung für Nachbarn: wrappt bei geschlossener Kurve, sonst `None` außerhalb.
    fn wrap_index(&self, index: isize) -> Option<usize> {
        let n = self.points.len() as isize;
        if n == 0 {
            return None;
        }
        if self.looped {
            Some(index.rem_euclid(n) as usize)
        } else if (0..n).contains(&index) {
            Some(index as usize)
        } else {
            None
        }
    }

    // ── Auswertung ──────────────────────────────────────────────────

    /// Die vier Bézier-Kontrollpunkte von Segment `index` (Weltkoordinaten).
    pub fn segment(&self, index: usize) -> Option<[Vec2; 4]> {
        if index >= self.segment_count() {
            return None;
        }
        let a = &self.points[index];
        let b = &self.points[(index + 1) % self.points.len()];
        Some([
            a.position(),
            a.control_out_world(),
            b.control_in_world(),
            b.position(),
        ])
    }

    /// Globales `t` → (Segment-Index, lokales t).
    fn locate(&self, t: f32) -> Option<(usize, f32)> {
        let segment_count = self.segment_count();
        if segment_count == 0 {
            return None;
        }

        let segment_t = t.clamp(0.0, 1.0) * segment_count as f32;
        let floor = segment_t.floor();
        let mut local_t = segment_t - floor;
        let mut segment_index = floor as usize;

        if self.looped {
            segment_index %= self.points.len();
        } else {
            segment_index = segment_index.min(segment_count - 1);
            if segment_index == segment_count - 1 {
                // t = 1 landet exakt auf dem letzten Anker
                local_t = (segment_t - segment_index as f32).clamp(0.0, 1.0);
            }
        }
        Some((segment_index, local_t))
    }

    /// Punkt auf der Kurve bei globalem Parameter `t ∈ [0, 1]` (wird begrenzt).
    ///
    /// Leere Kurve → `Vec2::ZERO`, ein Punkt → dessen Position.
    pub fn evaluate(&self, t: f32) -> Vec2 {
        match self.points.len() {
            0 => Vec2::ZERO,
            1 => self.points[0].position(),
            _ => match self.segment_at(t) {
                Some(([p0, p1, p2, p3], local)) => {
                    bezier_math::evaluate_cubic(p0, p1, p2, p3, local)
                }
                None => self.points[0].position(),
            },
        }
    }

    /// Ableitung des betroffenen Segments bei globalem Parameter `t`.
    pub fn tangent(&self, t: f32) -> Vec2 {
        match self.segment_at(t) {
            Some(([p0, p1, p2, p3], local)) => bezier_math::tangent_cubic(p0, p1, p2, p3, local),
            None => Vec2::ZERO,
        }
    }

    /// Kontrollpunkte des Segments unter `t` und der lokale Segment-Parameter.
    fn segment_at(&self, t: f32) -> Option<([Vec2; 4], f32)> {
        let (index, local) = self.locate(t)?;
        Some((self.segment(index)?, local))
    }

    /// Approximierte Gesamtlänge (Summe der Segmentlängen).
    pub fn length(&self, samples_per_segment: usize) -> f32 {
        (0..self.segment_count())
            .filter_map(|i| self.segment(i))
            .map(|[p0, p1, p2, p3]| {
                bezier_math::curve_length(p0, p1, p2, p3, samples_per_segment)
            })
            .sum()
    }

    /// `samples + 1` gleichverteilte Punkte entlang der gesamten Kurve.
    pub fn sample_polyline(&self, samples: usize) -> Vec<Vec2> {
        let samples = samples.max(1);
        (0..=samples)
            .map(|i| self.evaluate(i as f32 / samples as f32))
            .collect()
    }

    /// Polylinie mit der eigenen Abtastdichte der Kurve.
    pub fn sample_at_resolution(&self) -> Vec<Vec2> {
        self.sample_polyline(self.resolution)
    }

    /// Bounding Box über alle Anker und Handle-Weltpositionen.
    ///
    /// Ausdehnung pro Achse mindestens `MIN_BOUNDS_EXTENT`, danach 10 % Rand
    /// pro Seite. Leere Kurve → Einheitsrechteck.
    pub fn bounds(&self) -> CurveRect {
        let Some(first) = self.points.first() else {
            return CurveRect::UNIT;
        };

        let mut min = first.position();
        let mut max = first.position();
        for point in &self.points {
            for p in [
                point.position(),
                point.control_in_world(),
                point.control_out_world(),
            ] {
                min = min.min(p);
                max = max.max(p);
            }
        }

        let size = (max - min).max(Vec2::splat(MIN_BOUNDS_EXTENT));
        let center = (min + max) * 0.5;
        let margin = size * BOUNDS_MARGIN;
        CurveRect::from_center_size(center, size + margin * 2.0)
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::new()
    }
}
