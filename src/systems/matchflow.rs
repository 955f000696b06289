//! Match flow systems: pending-transition check, run condition, restart
//! and quit keys.
use bevy_ecs::prelude::*;
use log::info;

use crate::events::matchstate::MatchStateChangedEvent;
use crate::resources::gamehooks::GameHooks;
use crate::resources::input::InputState;
use crate::resources::matchflow::{MatchFlow, MatchState};

/// Emit a [`MatchStateChangedEvent`] whenever a transition is pending.
pub fn check_pending_state(mut commands: Commands, flow: Res<MatchFlow>) {
    if flow.has_pending() {
        commands.trigger(MatchStateChangedEvent);
    }
}

/// Run condition: true while the fight is running.
pub fn match_is_playing(flow: Res<MatchFlow>) -> bool {
    flow.is_playing()
}

/// Restart the round when the restart key is pressed.
pub fn check_restart(mut commands: Commands, input: Res<InputState>, hooks: Res<GameHooks>) {
    if input.restart.just_pressed {
        info!("Restarting round");
        commands.run_system(hooks.reset_round);
    }
}

/// Request shutdown when the quit key is pressed. The transition despawns
/// the scene and the main loop exits once `Quitting` is current.
pub fn check_quit(input: Res<InputState>, mut flow: ResMut<MatchFlow>) {
    if input.quit.just_pressed {
        flow.request(MatchState::Quitting);
    }
}
