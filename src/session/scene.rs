//! Screen-Space-Szene als Übergabevertrag zwischen Session und Host-Renderer.
//!
//! Enthält nur fertige Screen-Koordinaten; der Host zeichnet ohne eigene Transformation.

use bezier_curve_engine::view::{curve_to_screen, grid_lines};
use bezier_curve_engine::{
    Curve, CurveRect, GridLines, HandleKind, InteractionController, ViewSettings,
};
use glam::Vec2;

/// Anker-Markierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorMarker {
    pub index: usize,
    pub screen_pos: Vec2,
    /// Pointer schwebt über dem Anker
    pub hovered: bool,
    pub selected: bool,
}

/// Linie vom Anker zu einem Tangenten-Handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleLine {
    pub index: usize,
    /// `TangentIn` oder `TangentOut`
    pub kind: HandleKind,
    pub anchor_screen: Vec2,
    pub handle_screen: Vec2,
    /// Pointer schwebt über dem Handle
    pub hovered: bool,
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveScene {
    /// Zeichenbereich, für den die Szene gebaut wurde
    pub screen_rect: CurveRect,
    /// Kurven-Polyline (leer bei `show_curve = false`)
    pub polyline: Vec<Vec2>,
    /// Anker (leer bei `show_control_points = false`)
    pub anchors: Vec<AnchorMarker>,
    /// Handle-Linien, nur für Handles ungleich (0, 0)
    pub handles: Vec<HandleLine>,
    /// Hintergrund-Raster (nur bei `show_grid`)
    pub grid: Option<GridLines>,
}

impl CurveScene {
    /// Baut die Szene aus dem aktuellen Session-Zustand.
    pub(crate) fn build(
        curve: &Curve,
        settings: &ViewSettings,
        interaction: &InteractionController,
        screen_rect: CurveRect,
    ) -> Self {
        let to_screen = |p: Vec2| curve_to_screen(p, screen_rect, settings);
        let hovered = interaction
            .hovered_index()
            .zip(interaction.hovered_handle());

        let polyline = if settings.show_curve && !curve.is_empty() {
            curve
                .sample_at_resolution()
                .into_iter()
                .map(to_screen)
                .collect()
        } else {
            Vec::new()
        };

        let anchors = if settings.show_control_points {
            curve
                .points()
                .iter()
                .enumerate()
                .map(|(index, point)| AnchorMarker {
                    index,
                    screen_pos: to_screen(point.position()),
                    hovered: hovered == Some((index, HandleKind::Anchor)),
                    selected: interaction.selected_index() == Some(index),
                })
                .collect()
        } else {
            Vec::new()
        };

        let mut handles = Vec::new();
        if settings.show_tangent_lines {
            for (index, point) in curve.points().iter().enumerate() {
                for kind in [HandleKind::TangentIn, HandleKind::TangentOut] {
                    if point.handle_offset(kind) == Vec2::ZERO {
                        continue;
                    }
                    handles.push(HandleLine {
                        index,
                        kind,
                        anchor_screen: to_screen(point.position()),
                        handle_screen: to_screen(point.handle_world(kind)),
                        hovered: hovered == Some((index, kind)),
                    });
                }
            }
        }

        let grid = settings
            .show_grid
            .then(|| grid_lines(screen_rect, settings));

        Self {
            screen_rect,
            polyline,
            anchors,
            handles,
            grid,
        }
    }
}
