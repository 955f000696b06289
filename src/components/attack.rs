//! Attack variants and the per-fighter attack state machine.
//!
//! The five player attack variants carry their own duration, damage and
//! hitbox geometry. The enemy's single melee attack is configured in
//! [`GameConfig`](crate::resources::gameconfig::GameConfig) instead, so the
//! balance values that drifted across revisions stay tunable.

use bevy_ecs::prelude::Component;

/// Geometry of an attack's damage region, relative to the attacker's feet
/// pivot and facing, in unscaled pixels. The spawned hitbox is multiplied
/// by the attacker's render [`Scale`](super::scale::Scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitboxSpec {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
}

/// Static tuning of one attack variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackSpec {
    /// Seconds the attack locks the fighter; also the cooldown before the
    /// next attack may start.
    pub duration: f32,
    pub damage: f32,
    pub hitbox: HitboxSpec,
}

/// The player's attack variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    Jab,
    Punch,
    Kick,
    JumpKick,
    DiveKick,
}

impl AttackKind {
    /// Short animation name within the fighter's namespace.
    pub fn anim_name(&self) -> &'static str {
        match self {
            AttackKind::Jab => "jab",
            AttackKind::Punch => "punch",
            AttackKind::Kick => "kick",
            AttackKind::JumpKick => "jump_kick",
            AttackKind::DiveKick => "dive_kick",
        }
    }

    pub fn spec(&self) -> &'static AttackSpec {
        match self {
            AttackKind::Jab => &AttackSpec {
                duration: 0.3,
                damage: 5.0,
                hitbox: HitboxSpec {
                    width: 25.0,
                    height: 15.0,
                    offset_x: 20.0,
                },
            },
            AttackKind::Punch => &AttackSpec {
                duration: 0.4,
                damage: 8.0,
                hitbox: HitboxSpec {
                    width: 30.0,
                    height: 20.0,
                    offset_x: 24.0,
                },
            },
            AttackKind::Kick => &AttackSpec {
                duration: 0.5,
                damage: 10.0,
                hitbox: HitboxSpec {
                    width: 35.0,
                    height: 20.0,
                    offset_x: 28.0,
                },
            },
            AttackKind::JumpKick => &AttackSpec {
                duration: 0.6,
                damage: 15.0,
                hitbox: HitboxSpec {
                    width: 40.0,
                    height: 25.0,
                    offset_x: 30.0,
                },
            },
            AttackKind::DiveKick => &AttackSpec {
                duration: 0.7,
                damage: 12.0,
                hitbox: HitboxSpec {
                    width: 35.0,
                    height: 30.0,
                    offset_x: 25.0,
                },
            },
        }
    }
}

/// Attack/cooldown state machine shared by both fighters.
///
/// `remaining` counts down the in-progress attack and clears `current`
/// when it elapses; `cooldown` gates when the next attack may start.
/// Both are advanced by the frame `dt`, never by wall-clock timers.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AttackState {
    pub current: Option<AttackKind>,
    pub cooldown: f32,
    pub remaining: f32,
}

impl AttackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attacking(&self) -> bool {
        self.current.is_some()
    }

    pub fn can_attack(&self) -> bool {
        self.cooldown <= 0.0
    }

    /// Arm an attack: lock for `duration` and start the cooldown.
    pub fn start(&mut self, kind: AttackKind, duration: f32, cooldown: f32) {
        self.current = Some(kind);
        self.remaining = duration;
        self.cooldown = cooldown;
    }

    /// Advance countdowns by `dt`; the in-progress flag auto-clears when
    /// its duration elapses.
    pub fn tick(&mut self, dt: f32) {
        self.cooldown -= dt;
        if self.current.is_some() {
            self.remaining -= dt;
            if self.remaining <= 0.0 {
                self.current = None;
                self.remaining = 0.0;
            }
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.cooldown = 0.0;
        self.remaining = 0.0;
    }
}
