//! Marker for entities that survive state cleanups.

use bevy_ecs::prelude::Component;

/// Entities tagged with this component are skipped when a state change
/// despawns the current scene (observers, long-lived helpers).
#[derive(Component, Debug, Clone, Copy)]
pub struct Persistent;
