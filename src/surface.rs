//! Host-facing capability interfaces: the drawing surface the renderer paints
//! on and the touch events the gesture controller consumes.
//!
//! The core never references a concrete UI toolkit; any host that can
//! implement [`DrawSurface`] and produce [`TouchEvent`]s can embed the chart.

use eyre::Result;
use glam::Vec2;

use crate::data_types::{Argb, Rect};

/// Primitive operations the renderer needs from the host canvas.
pub trait DrawSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Argb) -> Result<()>;

    /// Draws a filled pie wedge inscribed in `rect`, starting at
    /// `start_angle` degrees and sweeping `sweep_angle` degrees clockwise.
    fn fill_arc(&mut self, rect: Rect, start_angle: f32, sweep_angle: f32, color: Argb)
        -> Result<()>;

    /// Same wedge as [`fill_arc`](Self::fill_arc), outline only.
    fn stroke_arc(
        &mut self,
        rect: Rect,
        start_angle: f32,
        sweep_angle: f32,
        color: Argb,
        stroke_width: f32,
    ) -> Result<()>;

    /// Scales, then translates, the coordinate system for subsequent calls.
    /// Must nest with [`pop_transform`](Self::pop_transform).
    fn push_transform(&mut self, scale: f32, translate: Vec2);

    /// Restores the coordinate system saved by the matching `push_transform`.
    fn pop_transform(&mut self);
}

/// What kind of touch action an event reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
}

/// One touch event as delivered by the host, with the current position of
/// every active pointer in screen space.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub pointers: Vec<Vec2>,
}

impl TouchEvent {
    pub fn down(position: Vec2) -> Self {
        Self {
            phase: TouchPhase::Down,
            pointers: vec![position],
        }
    }

    pub fn moved(position: Vec2) -> Self {
        Self {
            phase: TouchPhase::Move,
            pointers: vec![position],
        }
    }

    /// Two-pointer move, the shape a pinch is made of.
    pub fn pinch_move(first: Vec2, second: Vec2) -> Self {
        Self {
            phase: TouchPhase::Move,
            pointers: vec![first, second],
        }
    }

    pub fn up(position: Vec2) -> Self {
        Self {
            phase: TouchPhase::Up,
            pointers: vec![position],
        }
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}

/// One recorded drawing primitive, see [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Argb,
    },
    FillArc {
        rect: Rect,
        start_angle: f32,
        sweep_angle: f32,
        color: Argb,
    },
    StrokeArc {
        rect: Rect,
        start_angle: f32,
        sweep_angle: f32,
        color: Argb,
        stroke_width: f32,
    },
    PushTransform {
        scale: f32,
        translate: Vec2,
    },
    PopTransform,
}

/// A surface that records primitive calls instead of drawing. Used by the
/// test suite to check draw order and transform scoping, and usable by
/// headless hosts.
#[derive(Debug)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    ops: Vec<DrawOp>,
    depth: usize,
    fail_after: Option<usize>,
    fallible_calls: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            depth: 0,
            fail_after: None,
            fallible_calls: 0,
        }
    }

    /// Makes every fallible primitive call after the first `n` fail, to
    /// exercise error paths.
    pub fn fail_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Current push/pop nesting depth; zero once every transform has been
    /// restored.
    pub fn transform_depth(&self) -> usize {
        self.depth
    }

    fn bump(&mut self) -> Result<()> {
        self.fallible_calls += 1;
        if let Some(limit) = self.fail_after {
            if self.fallible_calls > limit {
                eyre::bail!("injected surface failure after {limit} calls");
            }
        }
        Ok(())
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Argb) -> Result<()> {
        self.bump()?;
        self.ops.push(DrawOp::FillRect { rect, color });
        Ok(())
    }

    fn fill_arc(
        &mut self,
        rect: Rect,
        start_angle: f32,
        sweep_angle: f32,
        color: Argb,
    ) -> Result<()> {
        self.bump()?;
        self.ops.push(DrawOp::FillArc {
            rect,
            start_angle,
            sweep_angle,
            color,
        });
        Ok(())
    }

    fn stroke_arc(
        &mut self,
        rect: Rect,
        start_angle: f32,
        sweep_angle: f32,
        color: Argb,
        stroke_width: f32,
    ) -> Result<()> {
        self.bump()?;
        self.ops.push(DrawOp::StrokeArc {
            rect,
            start_angle,
            sweep_angle,
            color,
            stroke_width,
        });
        Ok(())
    }

    fn push_transform(&mut self, scale: f32, translate: Vec2) {
        self.depth += 1;
        self.ops.push(DrawOp::PushTransform { scale, translate });
    }

    fn pop_transform(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(DrawOp::PopTransform);
    }
}
