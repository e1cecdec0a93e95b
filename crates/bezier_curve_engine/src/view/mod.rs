//! View-Schicht: Settings, Kurvenraum ⇄ Screen-Transformation und Hintergrund-Raster.

pub mod grid;
pub mod settings;
pub mod transform;

pub use grid::{GridLine, GridLines, grid_lines, grid_step_for_extent, grid_steps};
pub use settings::ViewSettings;
pub use transform::{
    curve_to_screen, fit_to_bounds, reset_view, screen_delta_to_curve, screen_to_curve,
    visible_bounds, zoom_towards,
};
