//! Rendering functions for the chart.

use eyre::Result;
use glam::Vec2;

use crate::data_types::{GeometryFrame, Rect, SegmentModel, ViewState};
use crate::layout::Sector;
use crate::surface::DrawSurface;
use crate::theme::ChartStyle;

/// Paints the chart on the host surface: background, wedge fills, wedge
/// outlines, then the selected wedge's outline on top, in that order.
///
/// The view transform is pushed onto the surface for the wedge passes and
/// popped again on every exit path, including when a primitive call fails
/// midway. Returns the [`GeometryFrame`] the wedges were drawn with so the
/// caller can keep it for hit-testing.
pub fn paint_chart(
    surface: &mut dyn DrawSurface,
    model: &SegmentModel,
    sectors: &[Sector],
    view: &ViewState,
    selected: Option<usize>,
    style: &ChartStyle,
) -> Result<GeometryFrame> {
    let width = surface.width();
    let height = surface.height();
    let frame = GeometryFrame::from_surface(width, height, style.radius);

    surface.fill_rect(
        Rect::new(Vec2::ZERO, Vec2::new(width, height)),
        style.background,
    )?;

    surface.push_transform(view.zoom, view.translate);
    let wedges = paint_wedges(surface, model, sectors, selected, style, &frame);
    surface.pop_transform();
    wedges?;

    Ok(frame)
}

fn paint_wedges(
    surface: &mut dyn DrawSurface,
    model: &SegmentModel,
    sectors: &[Sector],
    selected: Option<usize>,
    style: &ChartStyle,
    frame: &GeometryFrame,
) -> Result<()> {
    let enclosing = frame.bounding_square;

    // Fill pass first, so no outline ends up underneath a neighbor's fill.
    for (sector, &color) in sectors.iter().zip(model.colors()) {
        surface.fill_arc(enclosing, sector.start_angle, sector.sweep_angle, color)?;
    }

    for sector in sectors {
        surface.stroke_arc(
            enclosing,
            sector.start_angle,
            sector.sweep_angle,
            style.stroke_color,
            style.stroke_width,
        )?;
    }

    // The selected outline is drawn last so it renders on top of the shared
    // boundaries with its neighbors. An out-of-range index draws nothing.
    if let Some(sector) = selected.and_then(|i| sectors.get(i)) {
        surface.stroke_arc(
            enclosing,
            sector.start_angle,
            sector.sweep_angle,
            style.selected_color,
            style.selected_width,
        )?;
    }

    Ok(())
}
