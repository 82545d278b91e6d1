//! Angular layout of the pie segments.
//!
//! Computed once per render or hit-test cycle and passed to both the renderer
//! and the hit tester, so the wedge boundaries used for drawing and picking
//! are always the same values.

/// Degrees of arc per unit percent.
pub const DEGREES_PER_PERCENT: f32 = 360.0 / 100.0;

/// Angle at which the first segment starts: 12 o'clock in the screen
/// convention where angles grow clockwise.
pub const FIRST_START_ANGLE: f32 = -90.0;

/// One wedge of the chart, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub start_angle: f32,
    /// Angular width; positive sweeps clockwise on screen.
    pub sweep_angle: f32,
}

impl Sector {
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }
}

/// Turns a percentage list into consecutive sectors. Each percentage maps to
/// a sweep of `percent * 3.6` degrees; sectors chain end to start, beginning
/// at the top of the circle.
pub fn compute_sectors(percentages: &[f32]) -> Vec<Sector> {
    let mut sectors = Vec::with_capacity(percentages.len());
    let mut alpha = FIRST_START_ANGLE;
    for &percent in percentages {
        let sweep = percent * DEGREES_PER_PERCENT;
        sectors.push(Sector {
            start_angle: alpha,
            sweep_angle: sweep,
        });
        alpha += sweep;
    }
    sectors
}
