//! Axis-aligned rectangle geometry
//!
//! Obstacles and the actor are plain axis-aligned boxes in screen space
//! (y grows downward). Intersection and edge queries are everything the
//! collision engine needs.

use glam::Vec2;

/// An axis-aligned rectangle, stored as center + size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Build from the midpoint of the top edge
    pub fn from_top_center(top_center: Vec2, size: Vec2) -> Self {
        Self {
            center: top_center + Vec2::new(0.0, size.y / 2.0),
            size,
        }
    }

    /// Build from the midpoint of the bottom edge
    pub fn from_bottom_center(bottom_center: Vec2, size: Vec2) -> Self {
        Self {
            center: bottom_center - Vec2::new(0.0, size.y / 2.0),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// True when the projections overlap on both axes.
    /// Edge-touching rectangles do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
