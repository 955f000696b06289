//! Animation systems.
//!
//! - [`select_fighter_animation`] chooses which sequence a fighter should
//!   play from its movement and combat state, and mirrors the sprite to
//!   the facing direction.
//! - [`animate`] advances playback and updates the visible sprite frame.
//!
//! # Animation Flow
//!
//! 1. Sequences are defined in [`AnimationStore`](crate::resources::animationstore::AnimationStore)
//! 2. Entities have an [`Animation`](crate::components::animation::Animation) component pointing to a key
//! 3. `select_fighter_animation` switches keys; forced sequences (attacks,
//!    hurt) are started directly by the combat systems and win until done
//! 4. `animate` advances frames by `frame_time` and updates the
//!    [`Sprite`](crate::components::sprite::Sprite) offset

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::attack::AttackState;
use crate::components::fighter::{Fighter, FighterKind};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Pick the idle/walk/jump sequence matching a fighter's current state.
///
/// Forced sequences take priority: nothing is switched while an attack is
/// in flight or an unfinished hurt plays, and a dead fighter keeps its
/// final hurt frame. Sprite mirroring follows facing; the enemy's art
/// faces left at rest, so its flip sense is inverted.
pub fn select_fighter_animation(
    store: Res<AnimationStore>,
    mut query: Query<(
        &Fighter,
        &RigidBody,
        &AttackState,
        &mut Animation,
        &mut Sprite,
    )>,
) {
    for (fighter, body, attack, mut animation, mut sprite) in query.iter_mut() {
        sprite.flip_h = match fighter.kind {
            FighterKind::Player => fighter.facing < 0.0,
            FighterKind::Enemy => fighter.facing > 0.0,
        };

        if !fighter.alive || attack.is_attacking() {
            continue;
        }
        let hurt_key = fighter.kind.anim_key("hurt");
        if animation.animation_key == hurt_key && !animation.finished {
            continue;
        }

        let name = if !fighter.grounded {
            "jump"
        } else if body.velocity.x != 0.0 {
            "walk"
        } else {
            "idle"
        };
        let mut key = fighter.kind.anim_key(name);
        if !store.contains(&key) {
            // the enemy sheet has no jump sequence
            key = fighter.kind.anim_key("idle");
        }
        animation.play(&store, &key, false);
    }
}

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Looks up sequence data from [`AnimationStore`].
/// - Looping sequences wrap; non-looping ones stay on the last frame and
///   set `finished`, then hand playback to the fallback sequence.
/// - Keeps the sprite's texture key and frame offset in sync.
pub fn animate(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        if anim_comp.finished && anim_comp.fallback_key != anim_comp.animation_key {
            let fallback = anim_comp.fallback_key.clone();
            anim_comp.play(&animation_store, &fallback, false);
        }

        let Some(animation) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };

        if sprite.tex_key.as_str() != animation.tex_key.as_ref() {
            sprite.tex_key = animation.tex_key.to_string();
        }

        if !anim_comp.finished {
            anim_comp.elapsed_time += time.delta;
            while anim_comp.elapsed_time >= animation.frame_time {
                anim_comp.elapsed_time -= animation.frame_time;
                anim_comp.frame_index += 1;
                if anim_comp.frame_index >= animation.frame_count {
                    if animation.looped {
                        anim_comp.frame_index = 0;
                    } else {
                        anim_comp.frame_index = animation.frame_count - 1; // stay on last frame
                        anim_comp.finished = true;
                        break;
                    }
                }
            }
        }

        // Update sprite offset based on current frame
        let frame = animation.position + animation.displacement * anim_comp.frame_index as f32;
        sprite.offset = frame;
    }
}
