//! Touch-gesture state machine driving pan, pinch zoom and selection.

use glam::Vec2;
use tracing::trace;

use crate::data_types::{ChartState, GesturePhase, SegmentModel};
use crate::hit_test;
use crate::layout;
use crate::surface::{TouchEvent, TouchPhase};
use crate::transform::ViewTransform;

/// Zoom increment applied per pinch move event. One event is one step, no
/// matter how large the distance change was.
pub const ZOOM_STEP: f32 = 0.03;

/// Outcome of feeding one touch event to the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The event matched a transition and was consumed.
    pub handled: bool,
    /// The host should schedule a redraw. Fire-and-forget: the host may
    /// coalesce several requests into one frame, and the next draw always
    /// renders current state.
    pub redraw: bool,
}

impl EventOutcome {
    pub const IGNORED: Self = Self {
        handled: false,
        redraw: false,
    };
    pub const HANDLED: Self = Self {
        handled: true,
        redraw: false,
    };
    pub const REDRAW: Self = Self {
        handled: true,
        redraw: true,
    };
}

/// GestureController handles the business logic of interactions (selection,
/// pan, pinch zoom) on a plain [`ChartState`], independently of any UI
/// infrastructure, to facilitate testing.
///
/// States: `Idle` → `Panning` on a one-finger down, any state → `Pinching`
/// on a two-finger move, any state → `Idle` on up. Single-finger moves that
/// arrive while still in `Pinching` are the remnant of a lifted pinch and
/// are swallowed until every finger is up, so the view does not jump.
pub struct GestureController;

impl GestureController {
    /// Processes one touch event. Runs to completion before the next event
    /// is delivered; every event shape maps to exactly one transition, with
    /// [`EventOutcome::IGNORED`] for anything unrecognized.
    pub fn handle_event(
        state: &mut ChartState,
        model: &SegmentModel,
        event: &TouchEvent,
    ) -> EventOutcome {
        match (event.phase, event.pointer_count()) {
            (TouchPhase::Down, 1) => Self::on_down(state, model, event.pointers[0]),
            (TouchPhase::Move, 1) => Self::on_pan_move(state, event.pointers[0]),
            (TouchPhase::Move, 2) => {
                Self::on_pinch_move(state, event.pointers[0], event.pointers[1])
            }
            (TouchPhase::Up, _) => Self::on_up(state),
            _ => EventOutcome::IGNORED,
        }
    }

    /// First finger down: resolve the touched segment and arm panning.
    fn on_down(state: &mut ChartState, model: &SegmentModel, touch: Vec2) -> EventOutcome {
        let transform = ViewTransform::from(&state.view);
        let content = transform.to_content(touch);
        let sectors = layout::compute_sectors(model.percentages());
        state.selected = hit_test::pick(content, &state.frame, &sectors);
        state.tracking.previous = touch;
        state.phase = GesturePhase::Panning;
        trace!(selected = ?state.selected, "touch down");
        EventOutcome::REDRAW
    }

    fn on_pan_move(state: &mut ChartState, touch: Vec2) -> EventOutcome {
        if state.phase == GesturePhase::Pinching {
            // Residual move of a pinch whose second finger already lifted;
            // panning from here would jump the view.
            return EventOutcome::HANDLED;
        }
        // The delta is divided by the zoom factor to express it in content
        // space, where the translation lives.
        let delta = (touch - state.tracking.previous) / state.view.zoom;
        state.tracking.previous = touch;
        state.view.translate += delta;
        state.phase = GesturePhase::Panning;
        EventOutcome::REDRAW
    }

    fn on_pinch_move(state: &mut ChartState, first: Vec2, second: Vec2) -> EventOutcome {
        state.phase = GesturePhase::Pinching;
        let distance = first.distance(second);
        let baseline = state.tracking.pinch_distance;
        state.tracking.pinch_distance = distance;
        if distance > baseline {
            state.view.zoom += ZOOM_STEP;
            trace!(zoom = state.view.zoom, "pinch out");
            EventOutcome::REDRAW
        } else if distance < baseline {
            state.view.zoom -= ZOOM_STEP;
            trace!(zoom = state.view.zoom, "pinch in");
            EventOutcome::REDRAW
        } else {
            EventOutcome::HANDLED
        }
    }

    /// Last finger up: back to idle with neutral tracking. Idempotent.
    fn on_up(state: &mut ChartState) -> EventOutcome {
        state.tracking.reset();
        state.phase = GesturePhase::Idle;
        EventOutcome::HANDLED
    }
}
