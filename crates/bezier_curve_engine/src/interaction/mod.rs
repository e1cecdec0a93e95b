//! Pointer-Interaktion: Hit-Test, Snap-Raster und die Hover/Drag/Pan-Zustandsmaschine.

pub mod controller;
pub mod hit_test;
pub mod snap;
pub mod state;

pub use controller::{InteractionController, MIN_POINTS_AFTER_DELETE};
pub use hit_test::{HandleHit, hit_test};
pub use snap::snap_to_grid;
pub use state::{InteractionState, Modifiers, PointerButton, PointerEvent, PointerEventKind};
