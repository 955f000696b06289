//! Color tint component for rendering sprites.
//!
//! The tint color replaces white in sprite draw calls. Combat sets it to
//! the damage-flash color while a fighter's flash countdown is running and
//! restores it to white afterwards.

use bevy_ecs::prelude::Component;

/// RGBA color modulation applied when drawing the entity's sprite.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const WHITE: Tint = Tint::new(255, 255, 255, 255);
    /// Damage flash color, taken from the player's visual config.
    pub const HIT_FLASH: Tint = Tint::new(255, 98, 98, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::WHITE
    }
}
