//! Match state transition event and observer.
//!
//! Systems request a stage change through
//! [`MatchFlow::request`](crate::resources::matchflow::MatchFlow::request)
//! and emit a [`MatchStateChangedEvent`]. The observer here applies the
//! transition and runs the entered stage's hook, so asset loading, scene
//! spawning and teardown each happen exactly once per transition and never
//! from inside the frame schedule.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamehooks::GameHooks;
use crate::resources::matchflow::{MatchFlow, MatchState};

/// Fired when a requested match state transition should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct MatchStateChangedEvent;

/// Apply the pending match state transition and run the entered stage's
/// hook. A trigger without a pending request is a no-op.
pub fn observe_match_state_change(
    _trigger: On<MatchStateChangedEvent>,
    mut commands: Commands,
    mut flow: ResMut<MatchFlow>,
    hooks: Res<GameHooks>,
) {
    let Some(next) = flow.take_pending() else {
        return;
    };
    info!("Match state {:?} -> {:?}", flow.state(), next);
    flow.enter(next);

    match next {
        MatchState::Boot => {}
        MatchState::Setup => commands.run_system(hooks.setup),
        MatchState::Playing => commands.run_system(hooks.enter_play),
        MatchState::Quitting => commands.run_system(hooks.cleanup),
    }
}
