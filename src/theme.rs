use serde::{Deserialize, Serialize};

use crate::data_types::Argb;

/// Visual settings for the chart, supplied by the host at setup time and
/// read-only to the core.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub background: Argb,
    /// Outline color of unselected wedges.
    pub stroke_color: Argb,
    pub stroke_width: f32,
    /// Outline color of the selected wedge.
    pub selected_color: Argb,
    pub selected_width: f32,
    /// Radius of the pie, in content-space units.
    pub radius: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: Argb::WHITE,
            stroke_color: Argb::BLACK,
            stroke_width: 4.0,
            selected_color: Argb(0xff23_8b45),
            selected_width: 8.0,
            radius: 300.0,
        }
    }
}
