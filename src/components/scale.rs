use bevy_ecs::prelude::Component;
use glam::Vec2;

/// 2D render scale factor. Attack hitboxes spawned by a fighter are sized
/// by the same factor so combat geometry matches what is drawn.
#[derive(Component, Clone, Copy, Debug)]
pub struct Scale {
    pub scale: Vec2,
}

impl Scale {
    pub fn new(sx: f32, sy: f32) -> Self {
        Self {
            scale: Vec2::new(sx, sy),
        }
    }

    pub fn uniform(s: f32) -> Self {
        Self::new(s, s)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
