//! Transient damage-region entities.
//!
//! Attacks spawn a hitbox entity carrying this component together with a
//! [`BoxCollider`](super::boxcollider::BoxCollider) and a
//! [`MapPosition`](super::mapposition::MapPosition). The hit resolution
//! system tests it against the opposing fighter's collider once; the fade
//! system shrinks `alpha` each frame and despawns the entity at zero.

use bevy_ecs::prelude::{Component, Entity};

/// An active damage region belonging to one attacker.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hitbox {
    /// The fighter entity that spawned this hitbox. Hits never resolve
    /// against the owner, and knockback is computed from its x position.
    pub owner: Entity,
    pub damage: f32,
    /// Remaining visualization opacity in [0, 1]; the entity despawns
    /// when this reaches zero.
    pub alpha: f32,
    /// Set once the hitbox has damaged a target, so a single swing never
    /// lands twice even while its visualization is still fading.
    pub consumed: bool,
}

impl Hitbox {
    pub fn new(owner: Entity, damage: f32, alpha: f32) -> Self {
        Self {
            owner,
            damage,
            alpha,
            consumed: false,
        }
    }
}
