//! Hit notification and the damage observer.
//!
//! The hit resolution system emits [`HitEvent`] when a hitbox overlaps the
//! opposing fighter's collider. The observer in this module owns the whole
//! damage transition: health clamp, tint flash, forced hurt animation,
//! knockback and, when health reaches zero, arming the death countdown.
//! Keeping it in one observer means both fighters share identical damage
//! mechanics no matter which system landed the blow.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::animation::Animation;
use crate::components::fighter::{Fighter, FighterKind};
use crate::components::mapposition::MapPosition;
use crate::components::tint::Tint;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;

/// Event fired when an attack connects with a fighter.
#[derive(Event, Debug, Clone, Copy)]
pub struct HitEvent {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: f32,
    /// World x of the attacker, used to push the target away.
    pub from_x: f32,
}

/// Global observer applying damage to the target of a [`HitEvent`].
///
/// Behavior
/// - A dead target ignores the hit entirely.
/// - Health is reduced and clamped at zero, the damage tint flash and the
///   forced hurt animation start, and the target is shoved horizontally
///   away from the attacker by its knockback distance.
/// - On a lethal hit the fighter's `alive` flag drops and the death
///   countdown is armed with the hurt sequence's duration, after which the
///   sprite is hidden by the fighter tick system.
pub fn observe_hit(
    trigger: On<HitEvent>,
    config: Res<GameConfig>,
    store: Res<AnimationStore>,
    mut targets: Query<(&mut Fighter, &mut MapPosition, &mut Animation, &mut Tint)>,
) {
    let event = trigger.event();
    let Ok((mut fighter, mut map_position, mut animation, mut tint)) =
        targets.get_mut(event.target)
    else {
        debug!("HitEvent target {:?} has no fighter components", event.target);
        return;
    };
    if !fighter.alive {
        return;
    }

    let lethal = fighter.take_hit(event.damage);
    fighter.flash = config.hit_flash_duration;
    *tint = Tint::HIT_FLASH;

    let hurt_key = fighter.kind.anim_key("hurt");
    animation.play(&store, &hurt_key, true);

    // Shove away from the attacker, clamped to the stage.
    let knockback = match fighter.kind {
        FighterKind::Player => config.player_knockback,
        FighterKind::Enemy => config.enemy_knockback,
    };
    let direction = if map_position.pos.x >= event.from_x {
        1.0
    } else {
        -1.0
    };
    map_position.pos.x =
        (map_position.pos.x + direction * knockback).clamp(0.0, config.window_width as f32);

    if lethal {
        fighter.alive = false;
        // keep the corpse on the hurt sequence's last frame
        animation.fallback_key = hurt_key.clone();
        let hide_after = store
            .get(&hurt_key)
            .map(|anim| anim.duration())
            .unwrap_or(0.2);
        fighter.death_timer = Some(hide_after);
        info!("{:?} defeated", fighter.kind);
    }
}
