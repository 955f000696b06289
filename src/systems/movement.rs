//! Fighter physics: gravity, integration, stage bounds.
use bevy_ecs::prelude::*;

use crate::components::fighter::Fighter;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Apply gravity, integrate velocity into position, and resolve the floor
/// and stage bounds.
///
/// Contract
/// - Dead fighters do not move.
/// - Vertical velocity gains `gravity * dt` every frame a fighter is off
///   the floor; landing zeroes it and sets `grounded`.
/// - Horizontal position is clamped to the window width.
pub fn movement_system(
    mut query: Query<(&mut MapPosition, &mut RigidBody, &mut Fighter)>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (mut position, mut rigidbody, mut fighter) in query.iter_mut() {
        if !fighter.alive {
            rigidbody.stop();
            continue;
        }

        rigidbody.velocity.y += config.gravity * dt;
        let delta = rigidbody.velocity * dt;
        position.pos += delta;

        position.pos.x = position.pos.x.clamp(0.0, config.window_width as f32);

        if position.pos.y >= config.floor_y {
            position.pos.y = config.floor_y;
            rigidbody.velocity.y = 0.0;
            fighter.grounded = true;
        } else {
            fighter.grounded = false;
        }
    }
}
