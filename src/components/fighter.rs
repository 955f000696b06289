//! Fighter component: the shared combatant shape.
//!
//! Both the player and the enemy carry a [`Fighter`] holding health,
//! liveness, facing and grounded state plus the two combat countdowns
//! (damage flash, death hide). Per-type behavior lives in the control
//! systems ([`crate::systems::player`], [`crate::systems::enemy`]); the
//! damage/hurt/death mechanics are common and driven by the
//! [`HitEvent`](crate::events::hit::HitEvent) observer.

use bevy_ecs::prelude::Component;

/// Which side of the match a fighter is on. Also namespaces the fighter's
/// animation keys in the [`AnimationStore`](crate::resources::animationstore::AnimationStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FighterKind {
    Player,
    Enemy,
}

impl FighterKind {
    /// Store key for one of this fighter's named sequences,
    /// e.g. `Player` + `"hurt"` -> `"player_hurt"`.
    pub fn anim_key(&self, name: &str) -> String {
        match self {
            FighterKind::Player => format!("player_{name}"),
            FighterKind::Enemy => format!("enemy_{name}"),
        }
    }
}

/// Marker for the player-controlled fighter.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

/// Marker for the heuristic-driven fighter.
#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy;

/// Health, facing and liveness of a combatant.
///
/// Invariants
/// - `hp` stays within `[0.0, max_hp]` no matter how much damage is taken.
/// - `alive` flips to `false` exactly once, when `hp` reaches zero.
/// - A dead fighter is inert: control, movement and damage systems all
///   guard on `alive`.
#[derive(Component, Debug, Clone)]
pub struct Fighter {
    pub kind: FighterKind,
    pub hp: f32,
    pub max_hp: f32,
    pub alive: bool,
    /// +1.0 facing right, -1.0 facing left.
    pub facing: f32,
    pub grounded: bool,
    /// Remaining damage-flash time in seconds; tint is restored at zero.
    pub flash: f32,
    /// Countdown until the corpse is hidden, armed by the death transition.
    pub death_timer: Option<f32>,
}

impl Fighter {
    pub fn new(kind: FighterKind, max_hp: f32) -> Self {
        Self {
            kind,
            hp: max_hp,
            max_hp,
            alive: true,
            facing: match kind {
                FighterKind::Player => 1.0,
                FighterKind::Enemy => -1.0,
            },
            grounded: false,
            flash: 0.0,
            death_timer: None,
        }
    }

    /// Health fraction in [0, 1].
    pub fn ratio(&self) -> f32 {
        if self.max_hp <= 0.0 {
            return 0.0;
        }
        (self.hp / self.max_hp).clamp(0.0, 1.0)
    }

    /// Clamp health downward by `amount`. Returns true when this call
    /// brought the fighter to zero health (the caller then performs the
    /// death transition). No-op on a dead fighter.
    pub fn take_hit(&mut self, amount: f32) -> bool {
        if !self.alive {
            return false;
        }
        self.hp = (self.hp - amount).max(0.0);
        self.hp <= 0.0
    }

    /// Restore the fighter to its initial combat state for a round restart.
    pub fn reset(&mut self) {
        self.hp = self.max_hp;
        self.alive = true;
        self.facing = match self.kind {
            FighterKind::Player => 1.0,
            FighterKind::Enemy => -1.0,
        };
        self.grounded = false;
        self.flash = 0.0;
        self.death_timer = None;
    }
}
