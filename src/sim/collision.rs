//! Collision and containment for circles and axis-aligned rooms
//!
//! The only physics in the game: circle overlap, point-in-rectangle and
//! hard clamping of a circle into a rectangle.

use glam::Vec2;

/// Axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive on all four edges
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Clamp a circle's center so the whole circle stays inside
    ///
    /// If the circle is wider than the rectangle the left/top inset wins.
    pub fn clamp_circle(&self, center: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            (self.x + radius).max(center.x.min(self.right() - radius)),
            (self.y + radius).max(center.y.min(self.bottom() - radius)),
        )
    }
}

/// Two circles collide when their centers are strictly closer than the sum
/// of their radii. Tangent circles do not collide.
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}
