use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box anchored at `pos`: it extends `size.x` to the right and
    /// `size.y` downward. Paddles and balls share this anchoring so that
    /// the overlap tests reduce to comparing anchor points.
    pub fn anchored(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: Vec2::new(pos.x, pos.y - size.y),
            max: Vec2::new(pos.x + size.x, pos.y),
        }
    }

    /// Inclusive overlap of the X extents
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
    }

    /// Inclusive overlap of the Y extents
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.min.y <= other.max.y && self.max.y >= other.min.y
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }
}
