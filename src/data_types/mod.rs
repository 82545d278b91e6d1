//! Data structures for the pie chart core.

pub mod color;
pub mod geometry;
pub mod segments;
pub mod state;

pub use color::Argb;
pub use geometry::Rect;
pub use segments::{ChartError, SegmentModel};
pub use state::{ChartState, GeometryFrame, GesturePhase, TouchTracking, ViewState};
