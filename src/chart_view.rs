//! The pie chart widget: segment model, style and interaction state wired
//! together behind the host-facing API.

use std::sync::Arc;

use eyre::Result;
use glam::Vec2;
use parking_lot::RwLock;
use tracing::info;

use crate::data_types::{Argb, ChartState, SegmentModel};
use crate::layout;
use crate::rendering;
use crate::surface::{DrawSurface, TouchEvent};
use crate::theme::ChartStyle;
use crate::view_controller::{EventOutcome, GestureController};

/// Interactive pie chart. The host feeds touch events into
/// [`handle_touch`](Self::handle_touch) and, whenever the returned outcome
/// asks for it, schedules a call to [`draw`](Self::draw).
///
/// Single-threaded by design: events and draws must not run concurrently.
/// Hosts that dispatch them on different threads can use
/// [`into_shared`](Self::into_shared).
pub struct PieChart {
    model: SegmentModel,
    style: ChartStyle,
    state: ChartState,
}

impl PieChart {
    pub fn new(model: SegmentModel, style: ChartStyle) -> Self {
        info!(segments = model.len(), "pie chart created");
        Self {
            model,
            style,
            state: ChartState::default(),
        }
    }

    /// Processes one touch event and reports whether a redraw should be
    /// scheduled.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> EventOutcome {
        GestureController::handle_event(&mut self.state, &self.model, event)
    }

    /// Draws the chart with the current state, recomputing the angular
    /// layout and the geometry frame from the surface dimensions. The frame
    /// is retained so subsequent hit tests agree with what is on screen.
    pub fn draw(&mut self, surface: &mut dyn DrawSurface) -> Result<()> {
        let sectors = layout::compute_sectors(self.model.percentages());
        self.state.frame = rendering::paint_chart(
            surface,
            &self.model,
            &sectors,
            &self.state.view,
            self.state.selected,
            &self.style,
        )?;
        Ok(())
    }

    pub fn model(&self) -> &SegmentModel {
        &self.model
    }

    pub fn set_percentages(&mut self, percentages: Vec<f32>) {
        self.model.set_percentages(percentages);
    }

    /// Fails when the list length differs from the percentage list; the
    /// previous colors stay in place on failure.
    pub fn set_colors(&mut self, colors: Vec<Argb>) -> Result<()> {
        self.model.set_colors(colors)
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ChartStyle) {
        self.style = style;
    }

    pub fn zoom(&self) -> f32 {
        self.state.view.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.state.view.zoom = zoom;
    }

    pub fn translate(&self) -> Vec2 {
        self.state.view.translate
    }

    pub fn set_translate(&mut self, translate: Vec2) {
        self.state.view.translate = translate;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected
    }

    /// Pre-selects a segment, e.g. before the first touch arrives.
    pub fn set_selected_index(&mut self, selected: Option<usize>) {
        self.state.selected = selected;
    }

    /// Read access to the full interaction state, mainly for hosts that
    /// want to inspect the gesture phase or the last-drawn geometry.
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    /// Wraps the chart for hosts whose event dispatch and render loop live
    /// on different threads; the lock serializes state access as required
    /// by the single-writer model.
    pub fn into_shared(self) -> SharedPieChart {
        Arc::new(RwLock::new(self))
    }
}

/// Thread-safe handle around a [`PieChart`].
pub type SharedPieChart = Arc<RwLock<PieChart>>;
