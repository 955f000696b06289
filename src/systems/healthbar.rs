//! Health bar sync system.
use bevy_ecs::prelude::*;

use crate::components::fighter::Fighter;
use crate::components::healthbar::HealthBar;

/// Copy each fighter's health fraction into its bar. A bar whose target
/// no longer exists drains to empty.
pub fn sync_health_bars(mut bars: Query<&mut HealthBar>, fighters: Query<&Fighter>) {
    for mut bar in bars.iter_mut() {
        let ratio = fighters
            .get(bar.target)
            .map(|fighter| fighter.ratio())
            .unwrap_or(0.0);
        bar.set_ratio(ratio);
    }
}
