//! Host-unabhängige Engine für das Editieren kubischer Bézier-Kurven.
//!
//! Enthält Kurven-Datenmodell, Bézier-Mathematik, die Abbildung Kurvenraum ⇄
//! Bildschirm sowie die Pointer-Zustandsmaschine. Keine Abhängigkeit zu
//! Rendering-, Input- oder Fenster-APIs.

pub mod core;
pub mod interaction;
pub mod view;

pub use core::{Curve, CurvePoint, CurveRect, HandleKind};
pub use interaction::{
    InteractionController, InteractionState, Modifiers, PointerButton, PointerEvent,
    PointerEventKind,
};
pub use view::{GridLine, GridLines, ViewSettings};
