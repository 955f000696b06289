use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space position (pivot) for an entity. For fighters the pivot is
/// the feet: centered horizontally, bottom aligned.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}
