//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. The press edge and hold
//! duration are derived here from the raw down state, so gameplay systems
//! never talk to the windowing layer directly.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Seconds the key has been held down, 0 when up.
    pub held: f32,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            held: 0.0,
            key_binding,
        }
    }

    /// Fold this frame's raw down state into the press edge and hold time.
    pub fn apply(&mut self, down: bool, dt: f32) {
        self.just_pressed = down && !self.active;
        self.active = down;
        if down {
            if self.just_pressed {
                self.held = 0.0;
            }
            self.held += dt;
        } else {
            self.held = 0.0;
        }
    }

    /// Whether the key has been held for at least `threshold` seconds.
    pub fn is_held(&self, threshold: f32) -> bool {
        self.active && self.held >= threshold
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
///
/// Fields are grouped by purpose: movement (arrow keys), attacks (Q/X/Z),
/// and match control (R restarts, Esc quits, F11 shows the debug overlay).
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub jump: BoolState,
    pub crouch: BoolState,
    // Attacks
    pub jab: BoolState,
    pub punch: BoolState,
    pub kick: BoolState,
    // Match control
    pub restart: BoolState,
    pub quit: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            move_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            jump: BoolState::bound_to(KeyboardKey::KEY_UP),
            crouch: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            jab: BoolState::bound_to(KeyboardKey::KEY_Q),
            punch: BoolState::bound_to(KeyboardKey::KEY_X),
            kick: BoolState::bound_to(KeyboardKey::KEY_Z),
            restart: BoolState::bound_to(KeyboardKey::KEY_R),
            quit: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert_eq!(bs.held, 0.0);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_apply_press_edge() {
        let mut bs = BoolState::default();
        bs.apply(true, 0.016);
        assert!(bs.active);
        assert!(bs.just_pressed);

        bs.apply(true, 0.016);
        assert!(bs.active);
        assert!(!bs.just_pressed);

        bs.apply(false, 0.016);
        assert!(!bs.active);

        bs.apply(true, 0.016);
        assert!(bs.just_pressed);
    }

    #[test]
    fn test_hold_accumulates_and_resets() {
        let mut bs = BoolState::default();
        for _ in 0..10 {
            bs.apply(true, 0.025);
        }
        assert!(bs.is_held(0.2));
        bs.apply(false, 0.025);
        assert_eq!(bs.held, 0.0);
        bs.apply(true, 0.025);
        assert!(!bs.is_held(0.2));
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.move_left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.move_right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.jump.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.crouch.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.jab.key_binding, KeyboardKey::KEY_Q);
        assert_eq!(input.punch.key_binding, KeyboardKey::KEY_X);
        assert_eq!(input.kick.key_binding, KeyboardKey::KEY_Z);
        assert_eq!(input.restart.key_binding, KeyboardKey::KEY_R);
        assert_eq!(input.quit.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }
}
