//! pie_chart crate: an interactive segmented circular chart core.
//!
//! The host supplies a [`DrawSurface`] implementation and a stream of
//! [`TouchEvent`]s; the core renders the pie, pans and pinch-zooms the view,
//! and resolves taps to segment selections.

pub mod chart_view;
pub mod data_types;
pub mod layout;
pub mod rendering;
pub mod surface;
pub mod theme;
pub mod transform;
pub mod view_controller;

pub use chart_view::{PieChart, SharedPieChart};
pub use data_types::{
    Argb, ChartError, ChartState, GeometryFrame, GesturePhase, Rect, SegmentModel, TouchTracking,
    ViewState,
};
pub use layout::{compute_sectors, Sector};
pub use surface::{DrawOp, DrawSurface, RecordingSurface, TouchEvent, TouchPhase};
pub use theme::ChartStyle;
pub use transform::ViewTransform;
pub use view_controller::{EventOutcome, GestureController, ZOOM_STEP};
