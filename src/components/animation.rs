//! Sprite animation playback state.

use bevy_ecs::prelude::Component;
use log::warn;

use crate::resources::animationstore::AnimationStore;

/// Playback state for one entity's sprite animation.
///
/// `animation_key` names a sequence in the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
/// Non-looping sequences hold their last frame and set `finished`; the
/// animation system then switches back to `fallback_key`.
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
    /// Sequence to return to when a non-looping sequence completes.
    pub fallback_key: String,
    /// Set by the playback system when a non-looping sequence reaches its
    /// last frame; cleared on every `play`.
    pub finished: bool,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        let animation_key = animation_key.into();
        Self {
            fallback_key: animation_key.clone(),
            animation_key,
            frame_index: 0,
            elapsed_time: 0.0,
            finished: false,
        }
    }

    pub fn with_fallback(mut self, fallback_key: impl Into<String>) -> Self {
        self.fallback_key = fallback_key.into();
        self
    }

    /// Switch playback to `key`, restarting at frame zero.
    ///
    /// If the same sequence is already playing this is a no-op unless
    /// `force` is set (a forced hurt interrupts a hurt already playing).
    /// An unknown key logs a warning and leaves playback untouched.
    pub fn play(&mut self, store: &AnimationStore, key: &str, force: bool) {
        if !force && self.animation_key == key {
            return;
        }
        if !store.contains(key) {
            warn!("unknown animation '{}' requested, keeping '{}'", key, self.animation_key);
            return;
        }
        self.animation_key = key.to_string();
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.finished = false;
    }
}
