//! Registered one-shot systems for the match lifecycle.
//!
//! The scene-layer systems in [`crate::game`] cannot run inside the frame
//! schedule (they spawn and despawn whole scenes), so they are registered
//! once at startup and run on demand through their [`SystemId`]s.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;

/// System ids run when the match flow enters a stage or restarts a round.
#[derive(Resource, Debug, Clone, Copy)]
pub struct GameHooks {
    /// Asset loading, run on entering [`MatchState::Setup`].
    ///
    /// [`MatchState::Setup`]: super::matchflow::MatchState::Setup
    pub setup: SystemId,
    /// Scene spawning, run on entering [`MatchState::Playing`].
    ///
    /// [`MatchState::Playing`]: super::matchflow::MatchState::Playing
    pub enter_play: SystemId,
    /// In-place round restart, run from the restart key.
    pub reset_round: SystemId,
    /// Despawns everything not [`Persistent`], run on entering
    /// [`MatchState::Quitting`].
    ///
    /// [`Persistent`]: crate::components::persistent::Persistent
    /// [`MatchState::Quitting`]: super::matchflow::MatchState::Quitting
    pub cleanup: SystemId,
}
