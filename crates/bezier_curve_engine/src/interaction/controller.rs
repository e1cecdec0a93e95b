//! Zustandsmaschine für Hover, Drag und Pan.
//!
//! Jede Methode liefert ein `bool` „persistenter Zustand geändert“ für genau
//! diesen Aufruf. Hover und Selektion sind UI-Feedback und zählen nicht.

use super::hit_test::{HandleHit, hit_test};
use super::snap::snap_to_grid;
use super::state::{InteractionState, PointerButton, PointerEvent, PointerEventKind};
use crate::core::{Curve, CurveRect, HandleKind};
use crate::view::{ViewSettings, screen_delta_to_curve, screen_to_curve, zoom_towards};
use glam::Vec2;

/// Mindestanzahl Punkte, die nach einem Löschen erhalten bleiben muss.
pub const MIN_POINTS_AFTER_DELETE: usize = 2;

/// Laufende Geste inklusive der beim Start erfassten Referenzwerte.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Hover(HandleHit),
    Drag {
        hit: HandleHit,
        start_anchor: Vec2,
        start_pointer: Vec2,
    },
    Pan {
        start_pointer: Vec2,
        start_offset: Vec2,
    },
}

/// Pointer-Interaktion auf einer Kurve.
#[derive(Debug, Clone)]
pub struct InteractionController {
    gesture: Gesture,
    selected: Option<usize>,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    /// Erstellt einen Controller im Zustand `Idle` ohne Selektion.
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
            selected: None,
        }
    }

    // ── Abfragen ────────────────────────────────────────────────────

    pub fn state(&self) -> InteractionState {
        match self.gesture {
            Gesture::Idle => InteractionState::Idle,
            Gesture::Hover(hit) => InteractionState::hover(hit.handle),
            Gesture::Drag { hit, .. } => InteractionState::dragging(hit.handle),
            Gesture::Pan { .. } => InteractionState::Panning,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Index des Punkts unter dem Pointer (nur in `Hover*`-Zuständen).
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered_hit().map(|hit| hit.index)
    }

    pub fn hovered_handle(&self) -> Option<HandleKind> {
        self.hovered_hit().map(|hit| hit.handle)
    }

    fn hovered_hit(&self) -> Option<HandleHit> {
        match self.gesture {
            Gesture::Hover(hit) => Some(hit),
            _ => None,
        }
    }

    // ── Selektion ───────────────────────────────────────────────────

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Löscht den selektierten Punkt, sofern danach noch mindestens zwei übrig bleiben.
    pub fn delete_selected(&mut self, curve: &mut Curve) -> bool {
        let Some(index) = self.selected else {
            return false;
        };
        if index >= curve.point_count() || curve.point_count() <= MIN_POINTS_AFTER_DELETE {
            log::debug!(
                "Löschen von Punkt {} abgelehnt ({} Punkte)",
                index,
                curve.point_count()
            );
            return false;
        }
        if !curve.remove_point(index) {
            return false;
        }

        self.selected = None;
        // Indizes hinter dem gelöschten Punkt sind verschoben
        self.gesture = Gesture::Idle;
        let neighbour = index.min(curve.point_count() - 1);
        curve.refresh_auto_tangents_around(neighbour);
        log::info!(
            "Punkt {} gelöscht, {} Punkte verbleiben",
            index,
            curve.point_count()
        );
        true
    }

    // ── Pointer ─────────────────────────────────────────────────────

    /// Verarbeitet ein Pointer-Ereignis. Gibt `true` zurück, wenn Kurve oder View geändert wurden.
    pub fn handle_pointer(
        &mut self,
        curve: &mut Curve,
        settings: &mut ViewSettings,
        screen_rect: CurveRect,
        event: PointerEvent,
    ) -> bool {
        match event.kind {
            PointerEventKind::Down => self.pointer_down(curve, settings, screen_rect, event),
            PointerEventKind::Move => {
                self.pointer_move(curve, settings, screen_rect, event.screen_pos)
            }
            PointerEventKind::Up => self.pointer_up(),
        }
    }

    /// Scroll-Zoom um die Cursor-Position. Gibt `true` zurück, wenn sich der Zoom geändert hat.
    pub fn handle_scroll(
        &mut self,
        settings: &mut ViewSettings,
        screen_rect: CurveRect,
        screen_pos: Vec2,
        scroll_delta: f32,
    ) -> bool {
        if !scroll_delta.is_finite() || scroll_delta == 0.0 {
            return false;
        }
        zoom_towards(settings, screen_pos, screen_rect, scroll_delta)
    }

    fn pointer_down(
        &mut self,
        curve: &Curve,
        settings: &ViewSettings,
        screen_rect: CurveRect,
        event: PointerEvent,
    ) -> bool {
        match event.button {
            PointerButton::Middle => self.begin_pan(settings, event.screen_pos),
            PointerButton::Primary => {
                if let Some(hit) = hit_test(curve, event.screen_pos, screen_rect, settings) {
                    self.begin_drag(curve, hit, event.screen_pos);
                } else if event.modifiers.alt {
                    self.begin_pan(settings, event.screen_pos);
                }
            }
            PointerButton::Secondary => {}
        }
        false
    }

    fn begin_drag(&mut self, curve: &Curve, hit: HandleHit, screen_pos: Vec2) {
        let Some(point) = curve.point(hit.index) else {
            return;
        };
        self.selected = Some(hit.index);
        self.gesture = Gesture::Drag {
            hit,
            start_anchor: point.position(),
            start_pointer: screen_pos,
        };
        log::debug!("Drag gestartet: Punkt {} ({:?})", hit.index, hit.handle);
    }

    fn begin_pan(&mut self, settings: &ViewSettings, screen_pos: Vec2) {
        self.gesture = Gesture::Pan {
            start_pointer: screen_pos,
            start_offset: settings.pan_offset,
        };
        log::debug!(
            "Pan gestartet bei ({:.1}, {:.1})",
            screen_pos.x,
            screen_pos.y
        );
    }

    fn pointer_move(
        &mut self,
        curve: &mut Curve,
        settings: &mut ViewSettings,
        screen_rect: CurveRect,
        screen_pos: Vec2,
    ) -> bool {
        match self.gesture {
            Gesture::Drag {
                hit,
                start_anchor,
                start_pointer,
            } => self.drag_to(
                curve,
                settings,
                screen_rect,
                hit,
                start_anchor,
                start_pointer,
                screen_pos,
            ),
            Gesture::Pan {
                start_pointer,
                start_offset,
            } => {
                let delta =
                    screen_delta_to_curve(screen_pos - start_pointer, screen_rect, settings);
                // Nach rechts ziehen schiebt das sichtbare Fenster nach links
                settings.pan_offset = start_offset - delta;
                true
            }
            Gesture::Idle | Gesture::Hover(_) => {
                self.refresh_hover(curve, settings, screen_rect, screen_pos);
                false
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn drag_to(
        &mut self,
        curve: &mut Curve,
        settings: &ViewSettings,
        screen_rect: CurveRect,
        hit: HandleHit,
        start_anchor: Vec2,
        start_pointer: Vec2,
        screen_pos: Vec2,
    ) -> bool {
        if hit.index >= curve.point_count() {
            log::debug!("Drag verworfen: Punkt {} existiert nicht mehr", hit.index);
            self.gesture = Gesture::Idle;
            self.selected = None;
            return false;
        }

        let pointer_curve = screen_to_curve(screen_pos, screen_rect, settings);
        match hit.handle {
            HandleKind::Anchor => {
                let start_curve = screen_to_curve(start_pointer, screen_rect, settings);
                let mut target = start_anchor + (pointer_curve - start_curve);
                if settings.snap_to_grid {
                    target = snap_to_grid(target, settings);
                }
                let moved = curve.move_point(hit.index, target);
                curve.refresh_auto_tangents_around(hit.index);
                moved
            }
            HandleKind::TangentIn => curve
                .point_mut(hit.index)
                .map(|point| point.set_control_in_world(pointer_curve))
                .is_some(),
            HandleKind::TangentOut => curve
                .point_mut(hit.index)
                .map(|point| point.set_control_out_world(pointer_curve))
                .is_some(),
        }
    }

    fn refresh_hover(
        &mut self,
        curve: &Curve,
        settings: &ViewSettings,
        screen_rect: CurveRect,
        screen_pos: Vec2,
    ) {
        let next = match hit_test(curve, screen_pos, screen_rect, settings) {
            Some(hit) => Gesture::Hover(hit),
            None => Gesture::Idle,
        };
        if next != self.gesture {
            self.gesture = next;
            log::trace!("Hover: {:?}", self.state());
        }
    }

    /// Jeder Pointer-Up führt nach `Idle`, auch aus einem `Hover*`-Zustand.
    fn pointer_up(&mut self) -> bool {
        if self.state().is_active_gesture() {
            log::debug!("{:?} beendet", self.state());
        }
        self.gesture = Gesture::Idle;
        false
    }
}
