//! Combat resolution: hitbox spawning, overlap checks and countdowns.
//!
//! Attacks do not damage directly. They spawn a hitbox entity whose
//! collider is tested here against the opposing fighter's collider;
//! a landed overlap fires a [`HitEvent`](crate::events::hit::HitEvent)
//! and the shared observer applies the damage transition. A hitbox lands
//! at most once, while its visualization keeps fading on screen.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::attack::{AttackState, HitboxSpec};
use crate::components::boxcollider::BoxCollider;
use crate::components::fighter::Fighter;
use crate::components::hitbox::Hitbox;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::events::hit::HitEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Spawn a swing's damage region in front of the attacker.
///
/// The horizontal offset mirrors around the attacker's pivot when facing
/// left, so the region always extends in the facing direction. Geometry is
/// expressed in unscaled pixels and multiplied by the attacker's render
/// scale.
pub fn spawn_hitbox(
    commands: &mut Commands,
    owner: Entity,
    origin: Vec2,
    facing: f32,
    scale: Vec2,
    hitbox: &HitboxSpec,
    damage: f32,
    alpha: f32,
) {
    let offset_x = if facing > 0.0 {
        hitbox.offset_x
    } else {
        -hitbox.offset_x - hitbox.width
    };
    let x = origin.x + offset_x * scale.x;
    let y = origin.y - hitbox.height * scale.y * 1.4;
    commands.spawn((
        Hitbox::new(owner, damage, alpha),
        MapPosition::new(x, y),
        BoxCollider::new(hitbox.width * scale.x, hitbox.height * scale.y),
        ZIndex(10),
    ));
}

/// Test every live hitbox against the opposing fighters and fire
/// [`HitEvent`]s for overlaps.
///
/// Contract
/// - A hitbox never resolves against its owner.
/// - Dead fighters are not valid targets.
/// - Each hitbox lands at most once; after that it only fades.
pub fn resolve_hits(
    mut commands: Commands,
    mut hitboxes: Query<(&mut Hitbox, &BoxCollider, &MapPosition)>,
    fighters: Query<(Entity, &Fighter, &BoxCollider, &MapPosition), Without<Hitbox>>,
) {
    for (mut hitbox, hitbox_collider, hitbox_position) in hitboxes.iter_mut() {
        if hitbox.consumed {
            continue;
        }
        let from_x = fighters
            .get(hitbox.owner)
            .map(|(_, _, _, p)| p.pos.x)
            .unwrap_or(hitbox_position.pos.x);

        for (entity, fighter, collider, position) in fighters.iter() {
            if entity == hitbox.owner || !fighter.alive {
                continue;
            }
            if hitbox_collider.overlaps(hitbox_position.pos, collider, position.pos) {
                hitbox.consumed = true;
                commands.trigger(HitEvent {
                    attacker: hitbox.owner,
                    target: entity,
                    damage: hitbox.damage,
                    from_x,
                });
                break;
            }
        }
    }
}

/// Fade hitbox visualizations and despawn them once invisible.
pub fn fade_hitboxes(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Hitbox)>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    for (entity, mut hitbox) in query.iter_mut() {
        hitbox.alpha -= config.hitbox_fade_speed * time.delta;
        if hitbox.alpha <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}

/// Advance the per-fighter countdowns by the frame delta.
///
/// - Attack duration and cooldown tick down in [`AttackState`].
/// - The damage flash expires and restores the white tint.
/// - The death countdown hides the corpse sprite when it elapses.
pub fn tick_fighters(
    mut query: Query<(&mut Fighter, &mut AttackState, &mut Tint, &mut Sprite)>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (mut fighter, mut attack, mut tint, mut sprite) in query.iter_mut() {
        attack.tick(dt);

        if fighter.flash > 0.0 {
            fighter.flash -= dt;
            if fighter.flash <= 0.0 {
                fighter.flash = 0.0;
                *tint = Tint::WHITE;
            }
        }

        if let Some(remaining) = fighter.death_timer {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                fighter.death_timer = None;
                sprite.visible = false;
            } else {
                fighter.death_timer = Some(remaining);
            }
        }
    }
}
