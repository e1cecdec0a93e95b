//! Editier-Session: besitzt Kurve, View-Settings und Interaktions-Zustand.
//!
//! Hosts liefern pro Tick `SessionIntent`s und fragen danach `build_scene()`
//! bzw. `status()` ab. Kein globaler Zustand: jede Session ist unabhängig.

mod events;
mod intent_mapping;
mod scene;

pub use events::{intent_for_key, EditorKey, SessionCommand, SessionIntent};
pub use intent_mapping::map_intent_to_commands;
pub use scene::{AnchorMarker, CurveScene, HandleLine};

use crate::shared::options::{DEFAULT_CURVE_END, DEFAULT_CURVE_START};
use crate::shared::EditorOptions;
use bezier_curve_engine::view::{fit_to_bounds, reset_view, screen_to_curve};
use bezier_curve_engine::{Curve, CurveRect, InteractionController, InteractionState, ViewSettings};
use glam::Vec2;
use std::fmt;

/// Zeichenbereich vor dem ersten `ScreenRectChanged`.
const INITIAL_SCREEN_RECT: CurveRect = CurveRect {
    min: Vec2::ZERO,
    size: Vec2::new(800.0, 600.0),
};

/// Statuszeilen-Daten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStatus {
    /// Cursor im Kurvenraum (nur innerhalb des Zeichenbereichs)
    pub cursor: Option<Vec2>,
    pub zoom: f32,
    pub pan_offset: Vec2,
    pub point_count: usize,
    pub selected_index: Option<usize>,
    pub state: InteractionState,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cursor {
            Some(c) => write!(f, "Cursor: ({:.3}, {:.3})", c.x, c.y)?,
            None => write!(f, "Cursor: -")?,
        }
        write!(
            f,
            " | Zoom: {:.2} | Pan: ({:.2}, {:.2}) | Punkte: {}",
            self.zoom, self.pan_offset.x, self.pan_offset.y, self.point_count
        )
    }
}

/// Eine Editier-Session über genau einer Kurve.
#[derive(Debug, Clone)]
pub struct EditorSession {
    curve: Curve,
    settings: ViewSettings,
    interaction: InteractionController,
    screen_rect: CurveRect,
    /// Letzte bekannte Pointer-Position (Screen)
    pointer: Option<Vec2>,
}

impl EditorSession {
    /// Neue Session mit der Standard-Kurve `(0.2, 0.2) → (0.8, 0.8)`.
    pub fn new(options: &EditorOptions) -> Self {
        let mut curve = Curve::smooth(
            Vec2::from_array(DEFAULT_CURVE_START),
            Vec2::from_array(DEFAULT_CURVE_END),
        );
        curve.set_resolution(options.curve_resolution);
        Self::with_curve(curve, options)
    }

    /// Session über einer vorhandenen Kurve; die View zeigt deren Bounds.
    pub fn with_curve(curve: Curve, options: &EditorOptions) -> Self {
        let mut settings = options.to_view_settings();
        if !curve.is_empty() {
            settings.view_bounds = curve.bounds();
        }
        log::info!(
            "Editier-Session mit {} Punkten gestartet",
            curve.point_count()
        );
        Self {
            curve,
            settings,
            interaction: InteractionController::new(),
            screen_rect: INITIAL_SCREEN_RECT,
            pointer: None,
        }
    }

    // ── Zugriff ─────────────────────────────────────────────────────

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Direkter Zugriff für Host-Editoren (Inspector o. ä.).
    ///
    /// Veraltete Indizes im Interaktions-Zustand werden beim nächsten Ereignis verworfen.
    pub fn curve_mut(&mut self) -> &mut Curve {
        &mut self.curve
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn screen_rect(&self) -> CurveRect {
        self.screen_rect
    }

    // ── Intents ─────────────────────────────────────────────────────

    /// Verarbeitet einen Intent. Gibt `true` zurück, wenn Kurve oder View geändert wurden.
    pub fn handle_intent(&mut self, intent: SessionIntent) -> bool {
        let commands = map_intent_to_commands(self.screen_rect, intent);
        let mut changed = false;
        for command in commands {
            changed |= self.handle_command(command);
        }
        changed
    }

    /// Führt einen mutierenden Command aus.
    pub fn handle_command(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::SetScreenRect { rect } => {
                if rect != self.screen_rect {
                    log::debug!(
                        "Zeichenbereich: ({:.0}, {:.0}) {:.0}×{:.0}",
                        rect.min.x,
                        rect.min.y,
                        rect.width(),
                        rect.height()
                    );
                }
                self.screen_rect = rect;
                false
            }
            SessionCommand::ForwardPointer { event } => {
                self.pointer = Some(event.screen_pos);
                self.interaction
                    .handle_pointer(&mut self.curve, &mut self.settings, self.screen_rect, event)
            }
            SessionCommand::ZoomAt { screen_pos, delta } => {
                self.pointer = Some(screen_pos);
                self.interaction
                    .handle_scroll(&mut self.settings, self.screen_rect, screen_pos, delta)
            }
            SessionCommand::DeleteSelected => self.delete_selected(),
            SessionCommand::FitView => self.fit_view(),
            SessionCommand::ResetView => {
                reset_view(&mut self.settings);
                log::info!("Ansicht zurückgesetzt");
                true
            }
            SessionCommand::ToggleGrid => {
                self.settings.show_grid = !self.settings.show_grid;
                let visibility = if self.settings.show_grid {
                    "eingeblendet"
                } else {
                    "ausgeblendet"
                };
                log::info!("Raster {}", visibility);
                true
            }
        }
    }

    /// Mindestanzahl und Index prüft der Interaktions-Controller.
    fn delete_selected(&mut self) -> bool {
        if !self.interaction.delete_selected(&mut self.curve) {
            return false;
        }
        // View-Fenster folgt der Kurve, Zoom und Pan bleiben
        let bounds = self.curve.bounds();
        if bounds.is_valid() {
            self.settings.view_bounds = bounds;
        }
        true
    }

    fn fit_view(&mut self) -> bool {
        if self.curve.is_empty() {
            return false;
        }
        let fitted = fit_to_bounds(&mut self.settings, self.curve.bounds());
        if fitted {
            log::info!("Ansicht auf Kurve eingepasst");
        }
        fitted
    }

    // ── Abfragen ────────────────────────────────────────────────────

    /// Screen-Space-Szene für den aktuellen Zustand.
    pub fn build_scene(&self) -> CurveScene {
        CurveScene::build(
            &self.curve,
            &self.settings,
            &self.interaction,
            self.screen_rect,
        )
    }

    pub fn status(&self) -> SessionStatus {
        let cursor = self
            .pointer
            .filter(|&p| intent_mapping::accepts_pointer(self.screen_rect, p))
            .map(|p| screen_to_curve(p, self.screen_rect, &self.settings));
        SessionStatus {
            cursor,
            zoom: self.settings.zoom,
            pan_offset: self.settings.pan_offset,
            point_count: self.curve.point_count(),
            selected_index: self.interaction.selected_index(),
            state: self.interaction.state(),
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(&EditorOptions::default())
    }
}
