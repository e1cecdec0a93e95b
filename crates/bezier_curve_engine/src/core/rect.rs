//! Achsenparalleles Rechteck für View-Bounds, Screen-Bereiche und Kurven-Bounds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Achsenparalleles Rechteck (min-Ecke + Größe).
///
/// Im Kurvenraum zeigt Y nach oben, im Screen-Raum nach unten; das Rechteck
/// selbst kennt keine Orientierung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveRect {
    /// Minimale Ecke (kleinstes X und Y)
    pub min: Vec2,
    /// Ausdehnung (Breite, Höhe)
    pub size: Vec2,
}

impl CurveRect {
    /// Einheitsrechteck (0, 0, 1, 1), Standard-View-Bounds.
    pub const UNIT: Self = Self {
        min: Vec2::ZERO,
        size: Vec2::ONE,
    };

    /// Erstellt ein Rechteck aus Position und Größe.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Erstellt ein Rechteck aus zwei beliebigen Ecken.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            min,
            size: max - min,
        }
    }

    /// Erstellt ein Rechteck aus Mittelpunkt und Größe.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    /// Maximale Ecke.
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Mittelpunkt.
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Prüft, ob `p` innerhalb liegt (Ränder eingeschlossen).
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }

    /// True wenn Breite und Höhe positiv und endlich sind.
    pub fn is_valid(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0 && self.size.is_finite() && self.min.is_finite()
    }

    /// Größe mit Mindestausdehnung pro Achse (gegen Division durch 0).
    pub(crate) fn size_at_least(&self, min_extent: f32) -> Vec2 {
        self.size.max(Vec2::splat(min_extent))
    }
}

impl Default for CurveRect {
    fn default() -> Self {
        Self::UNIT
    }
}
