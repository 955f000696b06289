//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! folds it into [`crate::resources::input::InputState`]. Edge flags and
//! hold durations are derived in [`BoolState::apply`], so every gameplay
//! system downstream sees a consistent snapshot for the frame.
//!
//! [`BoolState::apply`]: crate::resources::input::BoolState::apply
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);

    let down = is_key_down(input.move_left.key_binding);
    input.move_left.apply(down, dt);
    let down = is_key_down(input.move_right.key_binding);
    input.move_right.apply(down, dt);
    let down = is_key_down(input.jump.key_binding);
    input.jump.apply(down, dt);
    let down = is_key_down(input.crouch.key_binding);
    input.crouch.apply(down, dt);

    let down = is_key_down(input.jab.key_binding);
    input.jab.apply(down, dt);
    let down = is_key_down(input.punch.key_binding);
    input.punch.apply(down, dt);
    let down = is_key_down(input.kick.key_binding);
    input.kick.apply(down, dt);

    let down = is_key_down(input.restart.key_binding);
    input.restart.apply(down, dt);
    let down = is_key_down(input.quit.key_binding);
    input.quit.apply(down, dt);
    let down = is_key_down(input.mode_debug.key_binding);
    input.mode_debug.apply(down, dt);
}
