//! Screen-space position component.
//!
//! Stores an entity's position in screen (pixel) coordinates. Used for UI
//! elements such as the health bars, which are drawn after the world pass
//! and do not belong to the stage. For world-space entities, see
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Screen-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScreenPosition {
    pub pos: Vec2,
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}
