//! Player control systems.
//!
//! [`player_control`] translates the frame's input snapshot into velocity
//! and facing; [`player_attack`] picks an attack variant from the attack
//! keys, arms the state machine and spawns the swing's hitbox.
use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::attack::{AttackKind, AttackState};
use crate::components::fighter::{Enemy, Fighter, Player};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::systems::combat::spawn_hitbox;

/// Walk, face and jump from the current input snapshot.
///
/// Contract
/// - A dead player keeps zero velocity and ignores input.
/// - Horizontal velocity is set, not accumulated; releasing both
///   direction keys stops the fighter the same frame.
/// - While idle, facing locks toward a living enemy.
/// - Jumping requires ground contact; gravity is applied elsewhere.
pub fn player_control(
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut query: Query<(&mut Fighter, &mut RigidBody, &MapPosition), (With<Player>, Without<Enemy>)>,
    enemies: Query<(&Fighter, &MapPosition), With<Enemy>>,
) {
    for (mut fighter, mut body, position) in query.iter_mut() {
        if !fighter.alive {
            body.stop();
            continue;
        }

        let mut direction = 0.0;
        if input.move_left.active {
            direction -= 1.0;
        }
        if input.move_right.active {
            direction += 1.0;
        }
        body.velocity.x = direction * config.player_speed;
        if direction != 0.0 {
            fighter.facing = direction;
        } else if let Some((_, enemy_position)) = enemies
            .iter()
            .find(|(enemy_fighter, _)| enemy_fighter.alive)
        {
            let dx = enemy_position.pos.x - position.pos.x;
            if dx != 0.0 {
                fighter.facing = dx.signum();
            }
        }

        if input.jump.just_pressed && fighter.grounded {
            body.velocity.y = -config.player_jump_strength;
            fighter.grounded = false;
        }
    }
}

/// Start an attack from the attack keys and spawn its hitbox.
///
/// Variant selection on a kick press: airborne with crouch held long
/// enough gives the dive kick, airborne alone the jump kick, grounded
/// the standing kick. Jab and punch are direct bindings. Only one
/// attack can be in flight, and the cooldown must have elapsed.
pub fn player_attack(
    mut commands: Commands,
    input: Res<InputState>,
    config: Res<GameConfig>,
    store: Res<AnimationStore>,
    mut query: Query<
        (
            Entity,
            &Fighter,
            &mut AttackState,
            &MapPosition,
            &Scale,
            &mut Animation,
        ),
        With<Player>,
    >,
) {
    for (entity, fighter, mut attack, position, scale, mut animation) in query.iter_mut() {
        if !fighter.alive || attack.is_attacking() || !attack.can_attack() {
            continue;
        }

        let kind = if input.kick.just_pressed {
            if !fighter.grounded && input.crouch.is_held(config.dive_hold_seconds) {
                Some(AttackKind::DiveKick)
            } else if !fighter.grounded {
                Some(AttackKind::JumpKick)
            } else {
                Some(AttackKind::Kick)
            }
        } else if input.punch.just_pressed {
            Some(AttackKind::Punch)
        } else if input.jab.just_pressed {
            Some(AttackKind::Jab)
        } else {
            None
        };
        let Some(kind) = kind else {
            continue;
        };

        let spec = kind.spec();
        attack.start(kind, spec.duration, spec.duration);
        animation.play(&store, &fighter.kind.anim_key(kind.anim_name()), true);
        spawn_hitbox(
            &mut commands,
            entity,
            position.pos,
            fighter.facing,
            scale.scale,
            &spec.hitbox,
            spec.damage,
            config.hitbox_alpha,
        );
    }
}
