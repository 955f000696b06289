//! Simulation time and per-frame delta.

use bevy_ecs::prelude::Resource;

/// Frame timing shared by every system: `delta` is the scaled step for the
/// current frame, `elapsed` accumulates it across the run.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Fold one raw frame delta (seconds) into the scaled clock. The main
    /// loop calls this once before running the frame schedule.
    pub fn advance(&mut self, raw_dt: f32) {
        self.delta = raw_dt * self.time_scale;
        self.elapsed += self.delta;
    }
}
