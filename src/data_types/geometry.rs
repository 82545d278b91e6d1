use glam::Vec2;

/// Axis-aligned rectangle in content space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square of side `2 * half_extent` centered on `center`.
    pub fn from_center(center: Vec2, half_extent: f32) -> Self {
        let half = Vec2::splat(half_extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Half-open containment; an empty rect contains nothing.
    pub fn contains(&self, p: Vec2) -> bool {
        self.min.x < self.max.x
            && self.min.y < self.max.y
            && p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
    }
}
