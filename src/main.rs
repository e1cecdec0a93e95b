//! Bézier-Kurven-Editor (Headless-Demo).
//!
//! Spielt eine kurze Eingabe-Sequenz gegen eine `EditorSession` ab, protokolliert
//! die Statuszeile und gibt die bearbeitete Kurve als JSON aus.

use bezier_curve_editor::{
    intent_for_key, CurveRect, EditorKey, EditorOptions, EditorSession, Modifiers, PointerEvent,
    SessionIntent,
};
use glam::Vec2;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Bezier Curve Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let mut session = EditorSession::new(&options);

    let rect = CurveRect::new(0.0, 0.0, 800.0, 600.0);
    let resize = SessionIntent::ScreenRectChanged { rect };
    session.handle_intent(resize);

    for intent in demo_intents(&session) {
        if session.handle_intent(intent) {
            log::info!("{}", session.status());
        }
    }

    let scene = session.build_scene();
    log::info!(
        "Szene: {} Polyline-Punkte, {} Anker, {} Handles, {} Rasterlinien",
        scene.polyline.len(),
        scene.anchors.len(),
        scene.handles.len(),
        scene
            .grid
            .as_ref()
            .map_or(0, |g| g.vertical.len() + g.horizontal.len())
    );

    println!("{}", serde_json::to_string_pretty(session.curve())?);
    Ok(())
}

/// Anker 0 ziehen, mit Alt pannen, hineinzoomen, einpassen.
fn demo_intents(session: &EditorSession) -> Vec<SessionIntent> {
    let anchor = session
        .build_scene()
        .anchors
        .first()
        .map_or(Vec2::new(400.0, 300.0), |a| a.screen_pos);
    let alt = Modifiers {
        alt: true,
        ..Modifiers::default()
    };
    let empty = Vec2::new(60.0, 60.0);

    let mut intents = vec![
        SessionIntent::Pointer(PointerEvent::moved(anchor)),
        SessionIntent::Pointer(PointerEvent::down(anchor)),
        SessionIntent::Pointer(PointerEvent::moved(anchor + Vec2::new(40.0, -25.0))),
        SessionIntent::Pointer(PointerEvent::up(anchor + Vec2::new(40.0, -25.0))),
        SessionIntent::Pointer(PointerEvent::down(empty).with_modifiers(alt)),
        SessionIntent::Pointer(PointerEvent::moved(empty + Vec2::new(-30.0, 10.0))),
        SessionIntent::Pointer(PointerEvent::up(empty + Vec2::new(-30.0, 10.0))),
        SessionIntent::Scroll {
            screen_pos: Vec2::new(400.0, 300.0),
            delta: -2.0,
        },
    ];
    intents.extend(intent_for_key(EditorKey::F));
    intents
}
