use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned rectangular collider, expressed relative to the owning
/// entity's [`MapPosition`](super::mapposition::MapPosition) pivot.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size and zero offset.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    /// Builder-style offset from the entity pivot.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    /// AABB as (x, y, width, height) in world space.
    pub fn rect(&self, position: Vec2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// AABB vs AABB overlap test against another collider at a different
    /// entity position. Symmetric; false whenever the pair is separated on
    /// either axis.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vec2, point: Vec2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
