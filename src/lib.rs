//! Bézier-Kurven-Editor Library.
//! Session-Orchestrierung und Konfiguration über der Engine, exportiert für Hosts und Tests.

pub mod session;
pub mod shared;

pub use bezier_curve_engine as engine;
pub use bezier_curve_engine::{
    Curve, CurvePoint, CurveRect, HandleKind, InteractionState, Modifiers, PointerButton,
    PointerEvent, PointerEventKind, ViewSettings,
};
pub use session::{
    intent_for_key, CurveScene, EditorKey, EditorSession, SessionCommand, SessionIntent,
    SessionStatus,
};
pub use shared::EditorOptions;
