//! Enemy behavior.
//!
//! A single heuristic drives the enemy: walk toward the player while
//! outside attack range, halt inside it, and swing whenever the attack
//! timer allows. The swing goes through the same hitbox pipeline as the
//! player's attacks, so damage, flash and knockback are resolved by the
//! shared observer.
use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::attack::{AttackKind, AttackState, HitboxSpec};
use crate::components::fighter::{Enemy, Fighter, Player};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::systems::combat::spawn_hitbox;

/// Reach of the enemy's punch, sized to land inside `attack_range`.
const ENEMY_HITBOX: HitboxSpec = HitboxSpec {
    width: 35.0,
    height: 20.0,
    offset_x: 18.0,
};

/// Chase, halt and attack against the player.
///
/// Contract
/// - A dead enemy stays put; a dead player halts the chase.
/// - Facing always follows the sign of the horizontal distance to the
///   player.
/// - An attack starts only inside `attack_range`, respecting
///   `attack_rate` between swings.
pub fn enemy_ai(
    mut commands: Commands,
    config: Res<GameConfig>,
    store: Res<AnimationStore>,
    mut enemies: Query<
        (
            Entity,
            &mut Fighter,
            &mut RigidBody,
            &MapPosition,
            &mut AttackState,
            &Scale,
            &mut Animation,
        ),
        (With<Enemy>, Without<Player>),
    >,
    players: Query<(&Fighter, &MapPosition), With<Player>>,
) {
    let target = players.iter().next();

    for (entity, mut fighter, mut body, position, mut attack, scale, mut animation) in
        enemies.iter_mut()
    {
        if !fighter.alive {
            body.stop();
            continue;
        }
        let Some((player_fighter, player_position)) = target else {
            body.velocity.x = 0.0;
            continue;
        };
        if !player_fighter.alive {
            body.velocity.x = 0.0;
            continue;
        }

        let dx = player_position.pos.x - position.pos.x;
        if dx != 0.0 {
            fighter.facing = dx.signum();
        }

        // mid-swing the enemy stands its ground
        if attack.is_attacking() {
            body.velocity.x = 0.0;
            continue;
        }

        if dx.abs() > config.enemy_attack_range {
            body.velocity.x = dx.signum() * config.enemy_speed;
        } else {
            body.velocity.x = 0.0;
            if attack.can_attack() {
                attack.start(
                    AttackKind::Punch,
                    config.enemy_attack_duration,
                    config.enemy_attack_rate,
                );
                animation.play(&store, &fighter.kind.anim_key("punch"), true);
                spawn_hitbox(
                    &mut commands,
                    entity,
                    position.pos,
                    fighter.facing,
                    scale.scale,
                    &ENEMY_HITBOX,
                    config.enemy_attack_damage,
                    config.hitbox_alpha,
                );
            }
        }
    }
}
