//! Health bar UI component.
//!
//! Each fighter gets a screen-space bar entity that mirrors its health
//! fraction. The sync system copies the fighter's ratio in here every
//! frame; the render system draws background, filled portion and label.

use bevy_ecs::prelude::{Component, Entity};

/// A labelled horizontal bar tracking one fighter's health fraction.
#[derive(Component, Debug, Clone)]
pub struct HealthBar {
    /// The fighter entity this bar mirrors.
    pub target: Entity,
    pub width: f32,
    pub height: f32,
    pub label: String,
    /// Displayed fill fraction in [0, 1].
    pub ratio: f32,
    /// Below this fraction the fill switches to the critical color.
    pub low_threshold: f32,
}

impl HealthBar {
    pub fn new(target: Entity, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            target,
            width,
            height,
            label: label.into(),
            ratio: 1.0,
            low_threshold: 0.3,
        }
    }

    /// Update the displayed fraction, clamped to [0, 1].
    pub fn set_ratio(&mut self, ratio: f32) {
        self.ratio = ratio.clamp(0.0, 1.0);
    }

    pub fn is_low(&self) -> bool {
        self.ratio < self.low_threshold
    }
}
