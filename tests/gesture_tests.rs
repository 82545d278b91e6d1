use glam::Vec2;
use pie_chart::data_types::{Argb, ChartState, GeometryFrame, GesturePhase, SegmentModel};
use pie_chart::surface::{TouchEvent, TouchPhase};
use pie_chart::view_controller::{EventOutcome, GestureController, ZOOM_STEP};

fn model() -> SegmentModel {
    SegmentModel::new(
        vec![40.0, 20.0, 20.0, 20.0],
        vec![Argb(0xffed_f8fb), Argb(0xffb2_e2e2), Argb(0xff66_c2a4), Argb(0xff66_c2a4)],
    )
    .unwrap()
}

/// State as if an 800x800 surface with a radius-300 pie had been drawn once,
/// with an identity view so screen and content coordinates coincide.
fn drawn_state() -> ChartState {
    let mut state = ChartState::default();
    state.view.zoom = 1.0;
    state.view.translate = Vec2::ZERO;
    state.frame = GeometryFrame::from_surface(800.0, 800.0, 300.0);
    state
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn test_tap_selects_touched_segment() {
    let mut state = drawn_state();
    let model = model();

    // Angular midpoint of segment 2 (pick angle -162), 100 units out:
    // center + 100 * (cos -162, -sin -162).
    let p = Vec2::new(400.0, 400.0)
        + 100.0 * Vec2::new((-162.0_f32).to_radians().cos(), -(-162.0_f32).to_radians().sin());
    let outcome = GestureController::handle_event(&mut state, &model, &TouchEvent::down(p));

    assert_eq!(outcome, EventOutcome::REDRAW);
    assert_eq!(state.selected, Some(2));
    assert_eq!(state.phase, GesturePhase::Panning);
    assert_eq!(state.tracking.previous, p);
}

#[test]
fn test_tap_outside_clears_selection() {
    let mut state = drawn_state();
    state.selected = Some(1);
    let model = model();

    let outcome =
        GestureController::handle_event(&mut state, &model, &TouchEvent::down(Vec2::new(5.0, 5.0)));
    assert_eq!(outcome, EventOutcome::REDRAW);
    assert_eq!(state.selected, None);
}

#[test]
fn test_tap_accounts_for_view_transform() {
    let mut state = drawn_state();
    state.view.zoom = 2.0;
    state.view.translate = Vec2::new(-100.0, -100.0);
    let model = model();

    // Content point in segment 0 (pick angle 18, 150 units out), mapped to
    // screen space: screen = zoom * (content + translate).
    let content = Vec2::new(400.0, 400.0)
        + 150.0 * Vec2::new(18.0_f32.to_radians().cos(), -18.0_f32.to_radians().sin());
    let screen = 2.0 * (content + state.view.translate);

    GestureController::handle_event(&mut state, &model, &TouchEvent::down(screen));
    assert_eq!(state.selected, Some(0));
}

#[test]
fn test_pan_divides_delta_by_zoom() {
    let mut state = drawn_state();
    state.view.zoom = 2.0;
    let model = model();

    GestureController::handle_event(&mut state, &model, &TouchEvent::down(Vec2::new(110.0, 100.0)));
    let outcome = GestureController::handle_event(
        &mut state,
        &model,
        &TouchEvent::moved(Vec2::new(120.0, 130.0)),
    );

    // delta = ((120 - 110) / 2, (130 - 100) / 2) = (5, 15)
    assert_eq!(outcome, EventOutcome::REDRAW);
    assert!(approx(state.view.translate.x, 5.0));
    assert!(approx(state.view.translate.y, 15.0));
    assert_eq!(state.tracking.previous, Vec2::new(120.0, 130.0));
}

#[test]
fn test_pan_accumulates_across_moves() {
    let mut state = drawn_state();
    let model = model();

    GestureController::handle_event(&mut state, &model, &TouchEvent::down(Vec2::ZERO));
    GestureController::handle_event(&mut state, &model, &TouchEvent::moved(Vec2::new(10.0, 0.0)));
    GestureController::handle_event(&mut state, &model, &TouchEvent::moved(Vec2::new(30.0, 40.0)));

    assert!(approx(state.view.translate.x, 30.0));
    assert!(approx(state.view.translate.y, 40.0));
}

#[test]
fn test_pinch_steps_are_fixed_size() {
    let mut state = drawn_state();
    let model = model();

    // First two-finger move: baseline was 0, so any distance counts as
    // spreading and zooms in one step.
    let outcome = GestureController::handle_event(
        &mut state,
        &model,
        &TouchEvent::pinch_move(Vec2::ZERO, Vec2::new(100.0, 0.0)),
    );
    assert_eq!(outcome, EventOutcome::REDRAW);
    assert!(approx(state.view.zoom, 1.0 + ZOOM_STEP));
    assert_eq!(state.phase, GesturePhase::Pinching);

    // 100 -> 150: exactly one more step, regardless of the 50-unit jump.
    let before = state.view.zoom;
    GestureController::handle_event(
        &mut state,
        &model,
        &TouchEvent::pinch_move(Vec2::ZERO, Vec2::new(150.0, 0.0)),
    );
    assert!(approx(state.view.zoom, before + ZOOM_STEP));

    // Unchanged distance: no zoom change, no redraw.
    let before = state.view.zoom;
    let outcome = GestureController::handle_event(
        &mut state,
        &model,
        &TouchEvent::pinch_move(Vec2::ZERO, Vec2::new(150.0, 0.0)),
    );
    assert_eq!(outcome, EventOutcome::HANDLED);
    assert!(approx(state.view.zoom, before));

    // Shrinking distance zooms out one step.
    GestureController::handle_event(
        &mut state,
        &model,
        &TouchEvent::pinch_move(Vec2::ZERO, Vec2::new(80.0, 0.0)),
    );
    assert!(approx(state.view.zoom, before - ZOOM_STEP));
}

#[test]
fn test_residual_move_after_pinch_is_swallowed() {
    let mut state = drawn_state();
    let model = model();

    GestureController::handle_event(
        &mut state,
        &model,
        &TouchEvent::pinch_move(Vec2::ZERO, Vec2::new(100.0, 0.0)),
    );
    let translate_before = state.view.translate;

    // One finger lifted, the other keeps moving: must not pan.
    let outcome = GestureController::handle_event(
        &mut state,
        &model,
        &TouchEvent::moved(Vec2::new(500.0, 500.0)),
    );
    assert_eq!(outcome, EventOutcome::HANDLED);
    assert_eq!(state.view.translate, translate_before);
    assert_eq!(state.phase, GesturePhase::Pinching);

    // After all fingers are up, panning works again. Zoom is back to 1 here
    // so the screen delta maps to content space unchanged.
    GestureController::handle_event(&mut state, &model, &TouchEvent::up(Vec2::new(500.0, 500.0)));
    state.view.zoom = 1.0;
    GestureController::handle_event(&mut state, &model, &TouchEvent::down(Vec2::ZERO));
    GestureController::handle_event(&mut state, &model, &TouchEvent::moved(Vec2::new(7.0, 0.0)));
    assert!(approx(state.view.translate.x, translate_before.x + 7.0));
}

#[test]
fn test_up_resets_tracking_idempotently() {
    let mut state = drawn_state();
    let model = model();

    GestureController::handle_event(&mut state, &model, &TouchEvent::down(Vec2::new(50.0, 60.0)));
    GestureController::handle_event(
        &mut state,
        &model,
        &TouchEvent::pinch_move(Vec2::ZERO, Vec2::new(120.0, 0.0)),
    );

    let outcome =
        GestureController::handle_event(&mut state, &model, &TouchEvent::up(Vec2::new(50.0, 60.0)));
    assert_eq!(outcome, EventOutcome::HANDLED);
    assert_eq!(state.phase, GesturePhase::Idle);
    assert_eq!(state.tracking.previous, Vec2::ZERO);
    assert_eq!(state.tracking.pinch_distance, 0.0);

    // A second up changes nothing.
    let snapshot = state;
    GestureController::handle_event(&mut state, &model, &TouchEvent::up(Vec2::new(50.0, 60.0)));
    assert_eq!(state, snapshot);
}

#[test]
fn test_selection_untouched_by_move_pinch_and_up() {
    let mut state = drawn_state();
    state.selected = Some(3);
    let model = model();

    GestureController::handle_event(&mut state, &model, &TouchEvent::moved(Vec2::new(9.0, 9.0)));
    GestureController::handle_event(
        &mut state,
        &model,
        &TouchEvent::pinch_move(Vec2::ZERO, Vec2::new(50.0, 0.0)),
    );
    GestureController::handle_event(&mut state, &model, &TouchEvent::up(Vec2::ZERO));

    assert_eq!(state.selected, Some(3));
}

#[test]
fn test_unrecognized_shapes_are_ignored() {
    let mut state = drawn_state();
    let snapshot = state;
    let model = model();

    // Three-pointer move and two-pointer down match no transition.
    let three_move = TouchEvent {
        phase: TouchPhase::Move,
        pointers: vec![Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)],
    };
    let two_down = TouchEvent {
        phase: TouchPhase::Down,
        pointers: vec![Vec2::ZERO, Vec2::new(1.0, 0.0)],
    };

    assert_eq!(
        GestureController::handle_event(&mut state, &model, &three_move),
        EventOutcome::IGNORED
    );
    assert_eq!(
        GestureController::handle_event(&mut state, &model, &two_down),
        EventOutcome::IGNORED
    );
    assert_eq!(state, snapshot);
}

#[test]
fn test_selected_index_stays_in_domain() {
    let mut state = drawn_state();
    let model = model();

    // Sweep a grid of taps; every resulting selection must index a segment.
    for x in (0..800).step_by(40) {
        for y in (0..800).step_by(40) {
            let p = Vec2::new(x as f32, y as f32);
            GestureController::handle_event(&mut state, &model, &TouchEvent::down(p));
            if let Some(i) = state.selected {
                assert!(i < model.len(), "selected {i} out of range at {p:?}");
            }
            GestureController::handle_event(&mut state, &model, &TouchEvent::up(p));
        }
    }
}
