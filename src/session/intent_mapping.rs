//! Mapping von Host-Intents auf mutierende Session-Commands.

use super::{SessionCommand, SessionIntent};
use bezier_curve_engine::{CurveRect, PointerEventKind};

/// Übersetzt einen `SessionIntent` in eine Sequenz ausführbarer `SessionCommand`s.
///
/// Pointer-Down und Scroll werden nur innerhalb eines gültigen Zeichenbereichs
/// angenommen; Move/Up laufen immer durch, damit laufende Gesten sauber enden.
pub fn map_intent_to_commands(
    screen_rect: CurveRect,
    intent: SessionIntent,
) -> Vec<SessionCommand> {
    match intent {
        SessionIntent::ScreenRectChanged { rect } => vec![SessionCommand::SetScreenRect { rect }],
        SessionIntent::Pointer(event) => {
            let accepted = event.kind != PointerEventKind::Down
                || accepts_pointer(screen_rect, event.screen_pos);
            if accepted {
                vec![SessionCommand::ForwardPointer { event }]
            } else {
                Vec::new()
            }
        }
        SessionIntent::Scroll { screen_pos, delta } => {
            if accepts_pointer(screen_rect, screen_pos) {
                vec![SessionCommand::ZoomAt { screen_pos, delta }]
            } else {
                Vec::new()
            }
        }
        SessionIntent::DeleteSelectedRequested => vec![SessionCommand::DeleteSelected],
        SessionIntent::FitViewRequested => vec![SessionCommand::FitView],
        SessionIntent::ResetViewRequested => vec![SessionCommand::ResetView],
        SessionIntent::ToggleGridRequested => vec![SessionCommand::ToggleGrid],
    }
}

/// Gültiger Zeichenbereich und Position innerhalb.
pub(crate) fn accepts_pointer(screen_rect: CurveRect, screen_pos: glam::Vec2) -> bool {
    screen_rect.is_valid() && screen_rect.contains(screen_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezier_curve_engine::PointerEvent;
    use glam::Vec2;

    fn rect() -> CurveRect {
        CurveRect::new(0.0, 0.0, 200.0, 100.0)
    }

    #[test]
    fn test_down_ausserhalb_wird_verworfen() {
        let intent = SessionIntent::Pointer(PointerEvent::down(Vec2::new(250.0, 50.0)));
        assert!(map_intent_to_commands(rect(), intent).is_empty());
    }

    #[test]
    fn test_move_und_up_ausserhalb_werden_weitergereicht() {
        for event in [
            PointerEvent::moved(Vec2::new(-5.0, 50.0)),
            PointerEvent::up(Vec2::new(-5.0, 50.0)),
        ] {
            let commands = map_intent_to_commands(rect(), SessionIntent::Pointer(event));
            assert_eq!(commands, vec![SessionCommand::ForwardPointer { event }]);
        }
    }

    #[test]
    fn test_degenerierter_bereich_nimmt_nichts_an() {
        let empty = CurveRect::new(0.0, 0.0, 0.0, 100.0);
        let down = SessionIntent::Pointer(PointerEvent::down(Vec2::ZERO));
        let scroll = SessionIntent::Scroll {
            screen_pos: Vec2::ZERO,
            delta: 1.0,
        };
        assert!(map_intent_to_commands(empty, down).is_empty());
        assert!(map_intent_to_commands(empty, scroll).is_empty());
    }
}
