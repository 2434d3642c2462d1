//! End-to-end tests driving [`RoundButton`] the way a host would: assign
//! geometry, deliver pointer events, and paint onto a recording surface.

use rondel::RoundButton;
use rondel::render::{
    Color, DrawCommand, FontSystem, Path, PathCommand, Point, RecordingRenderer, Rect, TextLayout,
};
use rondel::widget::state::InteractionState;
use rondel::widget::{
    EnterEvent, LeaveEvent, MouseButton, MousePressEvent, MouseReleaseEvent, PaintContext, Widget,
    WidgetEvent,
};

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use rondel_core::logging::targets;
use tracing_subscriber::EnvFilter;

fn setup() {
    let filter = EnvFilter::new(format!("{}=trace,{}=trace", targets::WIDGET, targets::SIGNAL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 40.0);

fn hosted_button() -> RoundButton {
    let mut button = RoundButton::new("OK");
    button.set_geometry(BOUNDS);
    button
}

fn paint(button: &mut RoundButton) -> RecordingRenderer {
    let mut renderer = RecordingRenderer::new();
    let mut ctx = PaintContext::new(&mut renderer, BOUNDS);
    button.paint(&mut ctx);
    renderer
}

fn send(button: &mut RoundButton, mut event: WidgetEvent) -> bool {
    button.event(&mut event)
}

fn enter() -> WidgetEvent {
    WidgetEvent::Enter(EnterEvent::new(Point::new(50.0, 20.0)))
}

fn leave() -> WidgetEvent {
    WidgetEvent::Leave(LeaveEvent::new())
}

fn press() -> WidgetEvent {
    WidgetEvent::MousePress(MousePressEvent::new(
        MouseButton::Left,
        Point::new(50.0, 20.0),
        Default::default(),
    ))
}

fn release() -> WidgetEvent {
    WidgetEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        Point::new(50.0, 20.0),
        Default::default(),
    ))
}

#[test]
fn full_interaction_cycle_selects_expected_fills() {
    setup();
    let mut button = hosted_button();

    assert_eq!(button.interaction_state(), InteractionState::Idle);
    assert_eq!(button.active_fill(), button.idle_color());

    send(&mut button, enter());
    assert_eq!(button.interaction_state(), InteractionState::Hovered);
    assert_eq!(button.active_fill(), button.hover_color());

    send(&mut button, press());
    assert_eq!(button.interaction_state(), InteractionState::Pressed);
    assert_eq!(button.active_fill(), button.pressed_color());

    send(&mut button, release());
    assert_eq!(button.interaction_state(), InteractionState::Hovered);
    assert_eq!(button.active_fill(), button.hover_color());

    send(&mut button, leave());
    assert_eq!(button.interaction_state(), InteractionState::Idle);
    assert_eq!(button.active_fill(), button.idle_color());
}

#[test]
fn leave_while_held_resets_to_idle_and_cancels_click() {
    setup();
    let mut button = hosted_button();

    let clicks = Arc::new(AtomicU32::new(0));
    let clicks_clone = clicks.clone();
    button.clicked.connect(move |_| {
        clicks_clone.fetch_add(1, Ordering::SeqCst);
    });

    // Press without a prior enter is a defined transition.
    send(&mut button, press());
    assert_eq!(button.interaction_state(), InteractionState::Pressed);

    send(&mut button, leave());
    assert_eq!(button.interaction_state(), InteractionState::Idle);
    assert_eq!(button.active_fill(), button.idle_color());

    send(&mut button, release());
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
}

#[test]
fn painting_emits_clip_fill_stroke_text_in_order() {
    setup();
    let mut button = hosted_button();
    let renderer = paint(&mut button);

    assert!(renderer.is_balanced());
    let commands = renderer.commands();
    assert_eq!(commands.first(), Some(&DrawCommand::Save));
    assert_eq!(commands.last(), Some(&DrawCommand::Restore));

    let position = |pred: fn(&DrawCommand) -> bool| commands.iter().position(pred);
    let clip = position(|c| matches!(c, DrawCommand::ClipPath(_))).expect("clip");
    let fill = position(|c| matches!(c, DrawCommand::FillPath { .. })).expect("fill");
    let stroke = position(|c| matches!(c, DrawCommand::StrokePath { .. })).expect("stroke");
    let text = position(|c| matches!(c, DrawCommand::DrawText { .. })).expect("text");

    assert!(clip < fill);
    assert!(fill < stroke);
    assert!(stroke < text);
}

#[test]
fn painted_path_is_four_quarter_arcs_at_radius_20() {
    setup();
    let mut button = hosted_button();
    let renderer = paint(&mut button);

    let (path, fill_paint) = renderer.first_fill().expect("fill command");
    assert_eq!(fill_paint.as_solid(), Some(button.idle_color()));

    // The exact shape-builder output for the current geometry.
    assert_eq!(*path, Path::rounded_rect(BOUNDS, 20.0));

    let arcs: Vec<_> = path
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            PathCommand::ArcTo {
                radius,
                sweep_angle,
                ..
            } => Some((*radius, *sweep_angle)),
            _ => None,
        })
        .collect();

    assert_eq!(arcs.len(), 4);
    for (radius, sweep) in arcs {
        assert_eq!(radius, 20.0);
        assert_eq!(sweep, 90.0);
    }

    assert!(matches!(path.commands().first(), Some(PathCommand::MoveTo(_))));
    assert!(matches!(path.commands().last(), Some(PathCommand::Close)));
}

#[test]
fn hit_region_tracks_silhouette_after_paint() {
    setup();
    let mut button = hosted_button();

    // Before the first paint the rectangular bounds answer hit tests.
    assert!(button.contains_point(Point::new(1.0, 1.0)));

    paint(&mut button);

    // Inside the silhouette.
    assert!(button.contains_point(Point::new(50.0, 20.0)));
    assert!(button.contains_point(Point::new(20.0, 20.0)));

    // Inside the old rectangular bounds but outside the rounded corners.
    for corner in [
        Point::new(1.0, 1.0),
        Point::new(99.0, 1.0),
        Point::new(99.0, 39.0),
        Point::new(1.0, 39.0),
    ] {
        assert!(!button.contains_point(corner), "{corner:?} should be out");
    }
}

#[test]
fn hit_region_follows_resize() {
    setup();
    let mut button = hosted_button();
    paint(&mut button);
    assert!(!button.contains_point(Point::new(150.0, 20.0)));

    let wider = Rect::new(0.0, 0.0, 200.0, 40.0);
    button.set_geometry(wider);
    assert!(button.needs_repaint());

    let mut renderer = RecordingRenderer::new();
    let mut ctx = PaintContext::new(&mut renderer, wider);
    button.paint(&mut ctx);

    assert!(button.contains_point(Point::new(150.0, 20.0)));
}

#[test]
fn label_is_centered_in_full_bounds_regardless_of_border() {
    setup();

    let mut thin = hosted_button();
    thin.set_border_thickness(0);
    let thin_renderer = paint(&mut thin);
    let (_, thin_origin) = thin_renderer.first_text().expect("text");

    // No stroke at thickness 0.
    assert!(
        !thin_renderer
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::StrokePath { .. }))
    );

    let mut thick = hosted_button();
    thick.set_border_thickness(8);
    let thick_renderer = paint(&mut thick);
    let (_, thick_origin) = thick_renderer.first_text().expect("text");

    assert_eq!(thin_origin, thick_origin);

    // The origin centers the measured label within the full rectangle.
    let mut font_system = FontSystem::new();
    let layout = TextLayout::new(&mut font_system, thin.label(), thin.font());
    let expected = layout.centered_origin(BOUNDS);
    assert!((thin_origin.x - expected.x).abs() < 1e-4);
    assert!((thin_origin.y - expected.y).abs() < 1e-4);
}

#[test]
fn empty_label_draws_no_text() {
    setup();
    let mut button = RoundButton::new("");
    button.set_geometry(BOUNDS);
    let renderer = paint(&mut button);

    assert!(
        !renderer
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::DrawText { .. }))
    );
}

#[test]
fn oversized_radius_degenerates_to_stadium() {
    setup();
    let mut button = hosted_button();
    button.set_corner_radius(500);
    let renderer = paint(&mut button);

    let (path, _) = renderer.first_fill().expect("fill");
    for cmd in path.commands() {
        if let PathCommand::ArcTo { radius, .. } = cmd {
            // Clamped to half the shorter dimension.
            assert_eq!(*radius, 20.0);
        }
    }
}

#[test]
fn paint_clears_dirty_flag_and_setters_re_dirty() {
    setup();
    let mut button = hosted_button();
    assert!(button.needs_repaint());

    paint(&mut button);
    assert!(!button.needs_repaint());

    button.set_hover_color(Color::from_rgb8(10, 20, 30));
    assert!(button.needs_repaint());

    // Repeated paints keep the command stream balanced (no leaked state).
    let renderer = paint(&mut button);
    assert!(renderer.is_balanced());
    assert!(!button.needs_repaint());
}

#[test]
fn signals_fire_in_press_release_click_order() {
    setup();
    let mut button = hosted_button();

    let order: Arc<std::sync::Mutex<Vec<&'static str>>> = Arc::default();

    {
        let order = order.clone();
        button.pressed.connect(move |_| order.lock().unwrap().push("pressed"));
    }
    {
        let order = order.clone();
        button.released.connect(move |_| order.lock().unwrap().push("released"));
    }
    {
        let order = order.clone();
        button.clicked.connect(move |_| order.lock().unwrap().push("clicked"));
    }

    send(&mut button, enter());
    send(&mut button, press());
    send(&mut button, release());

    assert_eq!(*order.lock().unwrap(), vec!["pressed", "released", "clicked"]);
}
