//! Z-index component for render ordering.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing. Higher values are drawn later
/// (on top); the render system sorts by `ZIndex` for a painter's pass.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
