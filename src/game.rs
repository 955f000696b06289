//! High-level game setup and scene management.
//!
//! `setup` loads every asset named by the animation manifest, `enter_play`
//! spawns the match scene, `reset_round` restores it in place and
//! `clean_all_entities` tears it down. All four are registered systems run
//! through [`GameHooks`](crate::resources::gamehooks::GameHooks).

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::Animation;
use crate::components::attack::AttackState;
use crate::components::boxcollider::BoxCollider;
use crate::components::fighter::{Enemy, Fighter, FighterKind, Player};
use crate::components::healthbar::HealthBar;
use crate::components::hitbox::Hitbox;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::matchflow::{MatchFlow, MatchState};
use crate::resources::texturestore::TextureStore;

const ANIMATION_MANIFEST: &str = "./assets/animations.json";

/// Frame size shared by every sheet in the manifest.
const FRAME_WIDTH: f32 = 96.0;
const FRAME_HEIGHT: f32 = 63.0;

/// Fighter render scale and unscaled collider box (world pixels, relative
/// to the feet pivot).
const FIGHTER_SCALE: f32 = 2.0;
const FIGHTER_COLLIDER: Vec2 = Vec2::new(40.0, 64.0);

const BAR_WIDTH: f32 = 240.0;
const BAR_HEIGHT: f32 = 18.0;
const BAR_MARGIN: f32 = 20.0;

/// Load all assets referenced by the animation manifest and move on to the
/// playing state.
///
/// Asset failures here are fatal: a match without its sheets cannot run.
pub fn setup(
    mut commands: Commands,
    mut flow: ResMut<MatchFlow>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
) {
    let (anim_store, manifest) = AnimationStore::load_manifest(ANIMATION_MANIFEST)
        .expect("Failed to load animation manifest");

    let mut tex_store = TextureStore::new();
    for seq in &manifest.sequences {
        let texture = rl
            .load_texture(&th, &seq.path)
            .unwrap_or_else(|e| panic!("load {}: {}", seq.path, e));
        tex_store.insert(seq.texture.clone(), texture);
    }

    commands.insert_resource(tex_store);
    commands.insert_resource(anim_store);

    flow.request(MatchState::Playing);
    log::info!("Setup done, requesting Playing");
}

/// Components shared by both combatants.
fn fighter_bundle(kind: FighterKind, max_hp: f32, x: f32, y: f32) -> impl Bundle {
    let idle_key = kind.anim_key("idle");
    (
        Fighter::new(kind, max_hp),
        MapPosition::new(x, y),
        RigidBody::new(),
        Scale::uniform(FIGHTER_SCALE),
        Sprite::new(idle_key.clone(), FRAME_WIDTH, FRAME_HEIGHT),
        Animation::new(idle_key),
        AttackState::new(),
        Tint::default(),
        BoxCollider::new(FIGHTER_COLLIDER.x, FIGHTER_COLLIDER.y)
            .with_offset(Vec2::new(-FIGHTER_COLLIDER.x * 0.5, -FIGHTER_COLLIDER.y)),
        ZIndex(1),
    )
}

/// The player-controlled fighter at its configured start position.
pub fn player_bundle(config: &GameConfig) -> impl Bundle {
    (
        Player,
        fighter_bundle(
            FighterKind::Player,
            config.player_max_hp,
            config.player_start_x,
            config.player_start_y,
        ),
    )
}

/// The heuristic-driven fighter, starting on the floor line.
pub fn enemy_bundle(config: &GameConfig) -> impl Bundle {
    (
        Enemy,
        fighter_bundle(
            FighterKind::Enemy,
            config.enemy_max_hp,
            config.enemy_start_x,
            config.floor_y,
        ),
    )
}

/// Spawn the match scene: both fighters and their health bars.
pub fn enter_play(mut commands: Commands, config: Res<GameConfig>) {
    let player = commands.spawn(player_bundle(&config)).id();
    let enemy = commands.spawn(enemy_bundle(&config)).id();

    let mut player_bar = HealthBar::new(player, BAR_WIDTH, BAR_HEIGHT, "PLAYER");
    player_bar.low_threshold = config.low_health_threshold;
    commands.spawn((player_bar, ScreenPosition::new(BAR_MARGIN, BAR_MARGIN)));

    let mut enemy_bar = HealthBar::new(enemy, BAR_WIDTH, BAR_HEIGHT, "ENEMY");
    enemy_bar.low_threshold = config.low_health_threshold;
    commands.spawn((
        enemy_bar,
        ScreenPosition::new(
            config.window_width as f32 - BAR_WIDTH - BAR_MARGIN,
            BAR_MARGIN,
        ),
    ));

    log::info!("Match scene spawned");
}

/// Restore both fighters to their initial combat state in place and clear
/// any in-flight hitboxes.
pub fn reset_round(
    mut commands: Commands,
    config: Res<GameConfig>,
    store: Res<AnimationStore>,
    mut fighters: Query<(
        &mut Fighter,
        &mut MapPosition,
        &mut RigidBody,
        &mut AttackState,
        &mut Animation,
        &mut Sprite,
        &mut Tint,
    )>,
    hitboxes: Query<Entity, With<Hitbox>>,
) {
    for (mut fighter, mut position, mut body, mut attack, mut animation, mut sprite, mut tint) in
        fighters.iter_mut()
    {
        fighter.reset();
        position.pos = match fighter.kind {
            FighterKind::Player => Vec2::new(config.player_start_x, config.player_start_y),
            FighterKind::Enemy => Vec2::new(config.enemy_start_x, config.floor_y),
        };
        body.stop();
        attack.clear();
        sprite.visible = true;
        *tint = Tint::WHITE;
        let idle_key = fighter.kind.anim_key("idle");
        animation.fallback_key = idle_key.clone();
        animation.play(&store, &idle_key, true);
    }

    for entity in hitboxes.iter() {
        commands.entity(entity).try_despawn();
    }
}

/// Despawn every entity that is not marked [`Persistent`].
pub fn clean_all_entities(mut commands: Commands, query: Query<Entity, Without<Persistent>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
