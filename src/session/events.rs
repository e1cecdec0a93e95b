//! Host-Eingaben (`SessionIntent`) und die daraus abgeleiteten mutierenden Commands.

use bezier_curve_engine::{CurveRect, PointerEvent};
use glam::Vec2;

/// Eingabe-Ereignisse des Hosts (Fenster, Maus, Tastatur, Menü).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionIntent {
    /// Der Zeichenbereich wurde verschoben oder in der Größe geändert
    ScreenRectChanged { rect: CurveRect },
    /// Pointer-Ereignis in Screen-Koordinaten
    Pointer(PointerEvent),
    /// Mausrad (positiv = herauszoomen)
    Scroll {
        screen_pos: Vec2,
        delta: f32,
    },
    /// Selektierten Punkt löschen
    DeleteSelectedRequested,
    /// Ansicht auf die Kurve einpassen
    FitViewRequested,
    /// Ansicht auf das Einheitsrechteck zurücksetzen
    ResetViewRequested,
    /// Hintergrund-Raster ein-/ausblenden
    ToggleGridRequested,
}

/// Mutierende Commands, ausgeführt von `EditorSession`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionCommand {
    SetScreenRect { rect: CurveRect },
    ForwardPointer {
        event: PointerEvent,
    },
    ZoomAt {
        screen_pos: Vec2,
        delta: f32,
    },
    DeleteSelected,
    FitView,
    ResetView,
    ToggleGrid,
}

/// Tasten mit Editor-Belegung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Delete,
    Backspace,
    F,
}

/// Tastenbelegung: Entf/Backspace löscht, `F` passt die Ansicht ein.
pub fn intent_for_key(key: EditorKey) -> Option<SessionIntent> {
    match key {
        EditorKey::Delete | EditorKey::Backspace => Some(SessionIntent::DeleteSelectedRequested),
        EditorKey::F => Some(SessionIntent::FitViewRequested),
    }
}
