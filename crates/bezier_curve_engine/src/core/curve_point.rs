//! Einzelner Kurvenpunkt: Anker mit zwei relativen Tangenten-Handles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Welcher Teil eines Kurvenpunkts ist gemeint (Hit-Test, Drag, Hover)?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Der Anker selbst (liegt auf der Kurve)
    Anchor,
    /// Eingehendes Tangenten-Handle
    TangentIn,
    /// Ausgehendes Tangenten-Handle
    TangentOut,
}

/// Anker mit eingehendem und ausgehendem Tangenten-Handle.
///
/// Die Handles werden immer als Offset relativ zu `position` gespeichert.
/// Welt-Positionen der Handles werden bei jeder Abfrage neu abgeleitet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    position: Vec2,
    control_in: Vec2,
    control_out: Vec2,
    #[serde(default)]
    auto_tangents: bool,
    #[serde(default)]
    mirror_tangents: bool,
}

impl CurvePoint {
    /// Erstellt einen Punkt ohne Tangenten (beide Handles = 0).
    pub fn new(position: Vec2) -> Self {
        Self::with_controls(position, Vec2::ZERO, Vec2::ZERO)
    }

    /// Erstellt einen Punkt mit gegebenen Handle-Offsets.
    pub fn with_controls(position: Vec2, control_in: Vec2, control_out: Vec2) -> Self {
        Self {
            position,
            control_in,
            control_out,
            auto_tangents: false,
            mirror_tangents: false,
        }
    }

    /// Anker-Position im Kurvenraum.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Verschiebt den Anker; die Handles wandern als Offsets mit.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Offset des eingehenden Handles.
    pub fn control_in(&self) -> Vec2 {
        self.control_in
    }

    /// Offset des ausgehenden Handles.
    pub fn control_out(&self) -> Vec2 {
        self.control_out
    }

    /// Setzt das eingehende Handle. Bei Spiegelung wird `control_out = -value`.
    pub fn set_control_in(&mut self, value: Vec2) {
        self.control_in = value;
        if self.mirror_tangents {
            self.control_out = -value;
        }
    }

    /// Setzt das ausgehende Handle. Bei Spiegelung wird `control_in = -value`.
    pub fn set_control_out(&mut self, value: Vec2) {
        self.control_out = value;
        if self.mirror_tangents {
            self.control_in = -value;
        }
    }

    pub fn auto_tangents(&self) -> bool {
        self.auto_tangents
    }

    /// Markiert den Punkt für automatische Tangenten (siehe `Curve::refresh_auto_tangents_around`).
    pub fn set_auto_tangents(&mut self, enabled: bool) {
        self.auto_tangents = enabled;
    }

    pub fn mirror_tangents(&self) -> bool {
        self.mirror_tangents
    }

    /// Aktiviert/deaktiviert die Spiegelung.
    ///
    /// Beim Einschalten wird sofort `control_in = -control_out` erzwungen.
    pub fn set_mirror_tangents(&mut self, enabled: bool) {
        self.mirror_tangents = enabled;
        if enabled {
            self.control_in = -self.control_out;
        }
    }

    /// Welt-Position des eingehenden Handles.
    pub fn control_in_world(&self) -> Vec2 {
        self.position + self.control_in
    }

    /// Welt-Position des ausgehenden Handles.
    pub fn control_out_world(&self) -> Vec2 {
        self.position + self.control_out
    }

    /// Setzt das eingehende Handle über eine Welt-Position.
    pub fn set_control_in_world(&mut self, world_pos: Vec2) {
        self.set_control_in(world_pos - self.position);
    }

    /// Setzt das ausgehende Handle über eine Welt-Position.
    pub fn set_control_out_world(&mut self, world_pos: Vec2) {
        self.set_control_out(world_pos - self.position);
    }

    /// Welt-Position von Anker oder Handle.
    pub fn handle_world(&self, handle: HandleKind) -> Vec2 {
        match handle {
            HandleKind::Anchor => self.position,
            HandleKind::TangentIn => self.control_in_world(),
            HandleKind::TangentOut => self.control_out_world(),
        }
    }

    /// Offset eines Handles; für `Anchor` immer `Vec2::ZERO`.
    pub fn handle_offset(&self, handle: HandleKind) -> Vec2 {
        match handle {
            HandleKind::Anchor => Vec2::ZERO,
            HandleKind::TangentIn => self.control_in,
            HandleKind::TangentOut => self.control_out,
        }
    }
}

impl Default for CurvePoint {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neuer_punkt_hat_keine_tangenten() {
        let p = CurvePoint::new(Vec2::new(1.0, 2.0));
        assert_eq!(p.control_in(), Vec2::ZERO);
        assert_eq!(p.control_out(), Vec2::ZERO);
        assert!(!p.mirror_tangents());
        assert!(!p.auto_tangents());
    }

    #[test]
    fn test_welt_handles_sind_abgeleitet() {
        let mut p = CurvePoint::with_controls(
            Vec2::new(1.0, 1.0),
            Vec2::new(-0.5, 0.0),
            Vec2::new(0.5, 0.25),
        );
        assert_eq!(p.control_in_world(), Vec2::new(0.5, 1.0));
        assert_eq!(p.control_out_world(), Vec2::new(1.5, 1.25));

        // Anker verschieben → Handles wandern mit
        p.set_position(Vec2::new(2.0, 0.0));
        assert_eq!(p.control_out_world(), Vec2::new(2.5, 0.25));
        assert_eq!(p.control_out(), Vec2::new(0.5, 0.25));
    }

    #[test]
    fn test_mirror_greift_sofort_beim_setzen() {
        let mut p = CurvePoint::new(Vec2::ZERO);
        p.set_mirror_tangents(true);

        p.set_control_out(Vec2::new(2.0, -1.0));
        assert_eq!(p.control_in(), Vec2::new(-2.0, 1.0));

        p.set_control_in(Vec2::new(0.5, 0.5));
        assert_eq!(p.control_out(), Vec2::new(-0.5, -0.5));
    }

    #[test]
    fn test_mirror_einschalten_erzwingt_symmetrie() {
        let mut p = CurvePoint::with_controls(Vec2::ZERO, Vec2::new(3.0, 3.0), Vec2::new(1.0, 0.0));
        p.set_mirror_tangents(true);
        assert_eq!(p.control_in(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_ohne_mirror_bleibt_gegenseite_unveraendert() {
        let (control_in, control_out) = (Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
        let mut p = CurvePoint::with_controls(Vec2::ZERO, control_in, control_out);
        p.set_control_out(Vec2::new(0.0, 4.0));
        assert_eq!(p.control_in(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_set_control_world_rechnet_in_offset_um() {
        let mut p = CurvePoint::new(Vec2::new(10.0, 5.0));
        p.set_mirror_tangents(true);
        p.set_control_out_world(Vec2::new(12.0, 5.0));
        assert_eq!(p.control_out(), Vec2::new(2.0, 0.0));
        assert_eq!(p.control_in_world(), Vec2::new(8.0, 5.0));
    }
}
