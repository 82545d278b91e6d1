use glam::Vec2;

use crate::data_types::geometry::Rect;

/// View transform parameters: a uniform zoom factor plus a translation
/// expressed in content space (pre-scale).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Strictly positive scale factor. Never clamped; the host decides
    /// whether unbounded shrink/grow is acceptable.
    pub zoom: f32,
    /// Top-left of the viewport relative to the content coordinate system.
    pub translate: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            // Fixed non-zero offset so the chart is not perfectly centered
            // at startup.
            translate: Vec2::new(-200.0, -300.0),
        }
    }
}

/// Chart geometry derived from the surface dimensions and the style radius.
/// Recomputed on every draw, never persisted; hit tests resolve against the
/// frame of the most recent draw.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeometryFrame {
    pub center: Vec2,
    /// Square the circle is inscribed in, in content space.
    pub bounding_square: Rect,
}

impl GeometryFrame {
    pub fn from_surface(width: f32, height: f32, radius: f32) -> Self {
        let center = Vec2::new(width / 2.0, height / 2.0);
        Self {
            center,
            bounding_square: Rect::from_center(center, radius),
        }
    }
}

/// Which gesture the controller is currently tracking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Panning,
    Pinching,
}

/// Positions remembered between consecutive touch events within one gesture.
/// Reset to neutral on touch up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchTracking {
    /// Previous single-pointer position, in screen space.
    pub previous: Vec2,
    /// Inter-pointer distance recorded by the last pinch move.
    pub pinch_distance: f32,
}

impl TouchTracking {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// All mutable interaction state of one chart. Owned by the widget and passed
/// by reference into the gesture controller, so the state machine can be unit
/// tested without a drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartState {
    pub view: ViewState,
    /// Currently highlighted segment, `None` when nothing is selected.
    /// Written only by single-finger touch-down events.
    pub selected: Option<usize>,
    pub phase: GesturePhase,
    pub tracking: TouchTracking,
    /// Geometry used by the last draw. Before the first draw this is the
    /// empty default, so every pick misses.
    pub frame: GeometryFrame,
}
