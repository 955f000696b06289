use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Kinematic body storing velocity in world units per second.
///
/// Control systems write the horizontal component, the movement system
/// integrates gravity into the vertical component and applies the result
/// to [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    pub velocity: Vec2,
}

impl RigidBody {
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
        }
    }

    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }
}
