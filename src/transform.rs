//! Transform helper between content space and screen space.

use glam::Vec2;

use crate::data_types::ViewState;

/// Uniform zoom plus translation. Scale is applied after the offset, matching
/// a surface transform stack that scales first and then translates:
/// `screen = zoom * (content + translate)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub zoom: f32,
    pub translate: Vec2,
}

impl ViewTransform {
    pub fn new(zoom: f32, translate: Vec2) -> Self {
        Self { zoom, translate }
    }

    pub fn to_screen(&self, content: Vec2) -> Vec2 {
        self.zoom * (content + self.translate)
    }

    /// Exact inverse of [`to_screen`](Self::to_screen) for any strictly
    /// positive zoom.
    pub fn to_content(&self, screen: Vec2) -> Vec2 {
        screen / self.zoom - self.translate
    }
}

impl From<&ViewState> for ViewTransform {
    fn from(view: &ViewState) -> Self {
        Self::new(view.zoom, view.translate)
    }
}
