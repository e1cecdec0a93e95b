//! Core-Domänentypen: Bézier-Mathematik, Kurvenpunkte, Kurven, Rechtecke.

pub mod bezier_math;
pub mod curve;
pub mod curve_point;
pub mod rect;

pub use curve::Curve;
pub use curve_point::{CurvePoint, HandleKind};
pub use rect::CurveRect;
