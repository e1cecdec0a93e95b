//! Pointer-Ereignisse und der öffentliche Interaktions-Zustand.

use crate::core::HandleKind;
use glam::Vec2;

/// Beobachtbarer Zustand der Interaktions-Zustandsmaschine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Keine Interaktion (Start- und Endzustand jeder Geste)
    #[default]
    Idle,
    HoverAnchor,
    HoverTangentIn,
    HoverTangentOut,
    DraggingAnchor,
    DraggingTangentIn,
    DraggingTangentOut,
    /// Verschieben der Ansicht
    Panning,
}

impl InteractionState {
    /// Hover-Zustand für den getroffenen Handle-Typ.
    pub fn hover(handle: HandleKind) -> Self {
        match handle {
            HandleKind::Anchor => Self::HoverAnchor,
            HandleKind::TangentIn => Self::HoverTangentIn,
            HandleKind::TangentOut => Self::HoverTangentOut,
        }
    }

    /// Drag-Zustand für den getroffenen Handle-Typ.
    pub fn dragging(handle: HandleKind) -> Self {
        match handle {
            HandleKind::Anchor => Self::DraggingAnchor,
            HandleKind::TangentIn => Self::DraggingTangentIn,
            HandleKind::TangentOut => Self::DraggingTangentOut,
        }
    }

    /// `true` für alle `Dragging*`-Zustände und `Panning`.
    pub fn is_active_gesture(self) -> bool {
        matches!(
            self,
            Self::DraggingAnchor
                | Self::DraggingTangentIn
                | Self::DraggingTangentOut
                | Self::Panning
        )
    }
}

/// Art des Pointer-Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Maustaste bzw. Pointer-Button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// Gedrückte Modifier-Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub alt: bool,
    pub shift: bool,
    /// Ctrl (bzw. Cmd auf macOS)
    pub command: bool,
}

/// Ein Pointer-Ereignis in Screen-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub screen_pos: Vec2,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Primärtaste gedrückt, ohne Modifier.
    pub fn down(screen_pos: Vec2) -> Self {
        Self::with(PointerEventKind::Down, screen_pos, PointerButton::Primary)
    }

    /// Pointer bewegt.
    pub fn moved(screen_pos: Vec2) -> Self {
        Self::with(PointerEventKind::Move, screen_pos, PointerButton::Primary)
    }

    /// Primärtaste losgelassen.
    pub fn up(screen_pos: Vec2) -> Self {
        Self::with(PointerEventKind::Up, screen_pos, PointerButton::Primary)
    }

    /// Ereignis mit explizitem Button, ohne Modifier.
    pub fn with(kind: PointerEventKind, screen_pos: Vec2, button: PointerButton) -> Self {
        Self {
            kind,
            screen_pos,
            button,
            modifiers: Modifiers::default(),
        }
    }

    /// Gleiches Ereignis mit gesetzten Modifiern.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
