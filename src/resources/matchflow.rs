//! Match lifecycle resource.
//!
//! Tracks where the session is in its lifecycle: booting, loading assets,
//! fighting, or shutting down. Systems request a transition with
//! [`MatchFlow::request`]; the observer in
//! [`crate::events::matchstate`] applies it and runs the stage's hook from
//! [`GameHooks`](super::gamehooks::GameHooks).

use bevy_ecs::prelude::Resource;

/// Lifecycle stages of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    /// Before any asset has been loaded.
    #[default]
    Boot,
    /// Loading the animation manifest and sprite sheets.
    Setup,
    /// The fight is running.
    Playing,
    /// Tearing down; the main loop exits once this is current.
    Quitting,
}

/// Current stage plus an optional requested transition.
///
/// `request` only records intent. The transition is applied by the
/// match-state observer so stage hooks always run exactly once, in order.
#[derive(Resource, Debug, Default)]
pub struct MatchFlow {
    current: MatchState,
    pending: Option<MatchState>,
}

impl MatchFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MatchState {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.current == MatchState::Playing
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record the intent to move to `next`.
    pub fn request(&mut self, next: MatchState) {
        self.pending = Some(next);
    }

    /// Consume the pending request, if any.
    pub fn take_pending(&mut self) -> Option<MatchState> {
        self.pending.take()
    }

    /// Make `state` current.
    pub fn enter(&mut self, state: MatchState) {
        self.current = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_boot_with_nothing_pending() {
        let flow = MatchFlow::new();
        assert_eq!(flow.state(), MatchState::Boot);
        assert!(!flow.has_pending());
        assert!(!flow.is_playing());
    }

    #[test]
    fn test_request_is_consumed_once() {
        let mut flow = MatchFlow::new();
        flow.request(MatchState::Setup);
        assert!(flow.has_pending());
        assert_eq!(flow.take_pending(), Some(MatchState::Setup));
        assert_eq!(flow.take_pending(), None);
        // requesting does not change the current stage
        assert_eq!(flow.state(), MatchState::Boot);
    }

    #[test]
    fn test_enter_updates_current() {
        let mut flow = MatchFlow::new();
        flow.enter(MatchState::Playing);
        assert!(flow.is_playing());
        flow.enter(MatchState::Quitting);
        assert_eq!(flow.state(), MatchState::Quitting);
    }
}
