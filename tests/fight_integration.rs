//! Match tick integration tests for physics, combat resolution, animation
//! playback and round flow.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;

use sidebrawl::components::animation::Animation;
use sidebrawl::components::attack::{AttackKind, AttackState};
use sidebrawl::components::fighter::Fighter;
use sidebrawl::components::healthbar::HealthBar;
use sidebrawl::components::hitbox::Hitbox;
use sidebrawl::components::mapposition::MapPosition;
use sidebrawl::components::persistent::Persistent;
use sidebrawl::components::rigidbody::RigidBody;
use sidebrawl::components::sprite::Sprite;
use sidebrawl::components::tint::Tint;
use sidebrawl::events::hit::{HitEvent, observe_hit};
use sidebrawl::events::matchstate::{MatchStateChangedEvent, observe_match_state_change};
use sidebrawl::game;
use sidebrawl::resources::animationstore::{AnimationResource, AnimationStore};
use sidebrawl::resources::gameconfig::GameConfig;
use sidebrawl::resources::gamehooks::GameHooks;
use sidebrawl::resources::input::InputState;
use sidebrawl::resources::matchflow::{MatchFlow, MatchState};
use sidebrawl::resources::worldtime::WorldTime;
use sidebrawl::systems::animation::animate;
use sidebrawl::systems::combat::{resolve_hits, tick_fighters};
use sidebrawl::systems::enemy::enemy_ai;
use sidebrawl::systems::healthbar::sync_health_bars;
use sidebrawl::systems::matchflow::{check_pending_state, check_quit};
use sidebrawl::systems::movement::movement_system;
use sidebrawl::systems::player::{player_attack, player_control};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_store() -> AnimationStore {
    let mut store = AnimationStore::new();
    let entries: [(&str, usize, f32, bool); 9] = [
        ("player_idle", 4, 0.1, true),
        ("player_walk", 10, 0.15, true),
        ("player_jump", 4, 0.1, false),
        ("player_kick", 5, 0.1, false),
        ("player_hurt", 2, 0.1, false),
        ("enemy_idle", 4, 0.15, true),
        ("enemy_walk", 4, 0.15, true),
        ("enemy_punch", 3, 0.2, false),
        ("enemy_hurt", 2, 0.15, false),
    ];
    for (key, frame_count, frame_time, looped) in entries {
        store.insert(
            key,
            AnimationResource::new(
                key,
                Vec2::ZERO,
                Vec2::new(96.0, 0.0),
                frame_count,
                frame_time,
                looped,
            ),
        );
    }
    store
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(GameConfig::new());
    world.insert_resource(InputState::default());
    world.insert_resource(make_store());
    world.spawn(Observer::new(observe_hit));
    world.flush();
    world
}

fn spawn_fighters(world: &mut World) -> (Entity, Entity) {
    let config = world.resource::<GameConfig>().clone();
    let player = world.spawn(game::player_bundle(&config)).id();
    let enemy = world.spawn(game::enemy_bundle(&config)).id();
    (player, enemy)
}

fn advance_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement_system);
    schedule.run(world);
}

fn tick_player_control(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_control);
    schedule.run(world);
}

fn tick_player_attack(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_attack);
    schedule.run(world);
}

fn tick_enemy_ai(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(enemy_ai);
    schedule.run(world);
}

fn tick_resolve_hits(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(resolve_hits);
    schedule.run(world);
}

fn tick_fighter_countdowns(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(tick_fighters);
    schedule.run(world);
}

fn tick_animate(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(animate);
    schedule.run(world);
}

fn tick_sync_health_bars(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(sync_health_bars);
    schedule.run(world);
}

fn hitboxes(world: &mut World) -> Vec<Hitbox> {
    let mut q = world.query::<&Hitbox>();
    q.iter(world).copied().collect()
}

// --- Physics ---

#[test]
fn gravity_pulls_fighter_to_floor() {
    let mut world = make_world();
    let (player, _) = spawn_fighters(&mut world);

    // spawn height is 360, the floor is at 420
    for _ in 0..3 {
        advance_time(&mut world, 0.1);
        tick_movement(&mut world);
    }

    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(approx_eq(pos.pos.y, 420.0));
    let fighter = world.get::<Fighter>(player).unwrap();
    assert!(fighter.grounded);
    let body = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(body.velocity.y, 0.0));
}

#[test]
fn horizontal_position_clamps_to_stage() {
    let mut world = make_world();
    let (player, _) = spawn_fighters(&mut world);
    world.get_mut::<RigidBody>(player).unwrap().velocity.x = -10_000.0;

    advance_time(&mut world, 0.1);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(approx_eq(pos.pos.x, 0.0));
}

#[test]
fn dead_fighter_does_not_move() {
    let mut world = make_world();
    let (player, _) = spawn_fighters(&mut world);
    world.get_mut::<Fighter>(player).unwrap().alive = false;
    world.get_mut::<RigidBody>(player).unwrap().velocity = Vec2::new(100.0, 100.0);
    let before = world.get::<MapPosition>(player).unwrap().pos;

    advance_time(&mut world, 0.1);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(player).unwrap();
    assert_eq!(pos.pos, before);
    let body = world.get::<RigidBody>(player).unwrap();
    assert_eq!(body.velocity, Vec2::ZERO);
}

// --- Damage transition ---

#[test]
fn hit_applies_damage_flash_knockback_and_hurt() {
    let mut world = make_world();
    let (player, enemy) = spawn_fighters(&mut world);
    let player_x = world.get::<MapPosition>(player).unwrap().pos.x;
    let enemy_x = world.get::<MapPosition>(enemy).unwrap().pos.x;

    world.trigger(HitEvent {
        attacker: player,
        target: enemy,
        damage: 10.0,
        from_x: player_x,
    });

    let fighter = world.get::<Fighter>(enemy).unwrap();
    assert!(approx_eq(fighter.hp, 50.0));
    assert!(fighter.alive);
    assert!(approx_eq(fighter.flash, 0.09));
    assert_eq!(*world.get::<Tint>(enemy).unwrap(), Tint::HIT_FLASH);
    assert_eq!(
        world.get::<Animation>(enemy).unwrap().animation_key,
        "enemy_hurt"
    );
    // the enemy starts to the right of the player and gets shoved further right
    let pos = world.get::<MapPosition>(enemy).unwrap();
    assert!(approx_eq(pos.pos.x, enemy_x + 16.0));
}

#[test]
fn knockback_pushes_left_when_attacker_is_on_the_right() {
    let mut world = make_world();
    let (player, enemy) = spawn_fighters(&mut world);
    let enemy_x = world.get::<MapPosition>(enemy).unwrap().pos.x;

    world.trigger(HitEvent {
        attacker: player,
        target: enemy,
        damage: 1.0,
        from_x: enemy_x + 100.0,
    });

    let pos = world.get::<MapPosition>(enemy).unwrap();
    assert!(approx_eq(pos.pos.x, enemy_x - 16.0));
}

#[test]
fn lethal_hit_clamps_health_and_hides_corpse_after_hurt() {
    let mut world = make_world();
    let (player, enemy) = spawn_fighters(&mut world);

    world.trigger(HitEvent {
        attacker: player,
        target: enemy,
        damage: 1000.0,
        from_x: 0.0,
    });

    {
        let fighter = world.get::<Fighter>(enemy).unwrap();
        assert!(approx_eq(fighter.hp, 0.0));
        assert!(!fighter.alive);
        // enemy hurt runs 2 frames at 0.15s
        assert!(approx_eq(fighter.death_timer.unwrap(), 0.3));
    }

    for _ in 0..2 {
        advance_time(&mut world, 0.2);
        tick_fighter_countdowns(&mut world);
    }
    assert!(!world.get::<Sprite>(enemy).unwrap().visible);
    assert!(world.get::<Fighter>(enemy).unwrap().death_timer.is_none());
}

#[test]
fn dead_target_ignores_further_hits() {
    let mut world = make_world();
    let (player, enemy) = spawn_fighters(&mut world);

    world.trigger(HitEvent {
        attacker: player,
        target: enemy,
        damage: 60.0,
        from_x: 0.0,
    });
    let pos_after_death = world.get::<MapPosition>(enemy).unwrap().pos;

    world.trigger(HitEvent {
        attacker: player,
        target: enemy,
        damage: 10.0,
        from_x: 0.0,
    });

    let fighter = world.get::<Fighter>(enemy).unwrap();
    assert!(approx_eq(fighter.hp, 0.0));
    assert_eq!(world.get::<MapPosition>(enemy).unwrap().pos, pos_after_death);
}

// --- Attacks end to end ---

#[test]
fn kick_lands_for_ten_damage() {
    let mut world = make_world();
    let (player, enemy) = spawn_fighters(&mut world);
    world.get_mut::<MapPosition>(player).unwrap().pos = Vec2::new(300.0, 420.0);
    world.get_mut::<MapPosition>(enemy).unwrap().pos = Vec2::new(380.0, 420.0);
    world.get_mut::<Fighter>(player).unwrap().grounded = true;
    world.resource_mut::<InputState>().kick.just_pressed = true;

    tick_player_attack(&mut world);

    let attack = world.get::<AttackState>(player).unwrap();
    assert_eq!(attack.current, Some(AttackKind::Kick));
    assert_eq!(
        world.get::<Animation>(player).unwrap().animation_key,
        "player_kick"
    );
    let boxes = hitboxes(&mut world);
    assert_eq!(boxes.len(), 1);
    assert!(approx_eq(boxes[0].damage, 10.0));

    tick_resolve_hits(&mut world);

    let fighter = world.get::<Fighter>(enemy).unwrap();
    assert!(approx_eq(fighter.hp, 50.0));
    // shoved away from the attacker
    assert!(approx_eq(
        world.get::<MapPosition>(enemy).unwrap().pos.x,
        396.0
    ));
}

#[test]
fn hitbox_lands_at_most_once() {
    let mut world = make_world();
    let (player, enemy) = spawn_fighters(&mut world);
    world.get_mut::<MapPosition>(player).unwrap().pos = Vec2::new(300.0, 420.0);
    world.get_mut::<MapPosition>(enemy).unwrap().pos = Vec2::new(380.0, 420.0);
    world.get_mut::<Fighter>(player).unwrap().grounded = true;
    world.resource_mut::<InputState>().kick.just_pressed = true;

    tick_player_attack(&mut world);
    tick_resolve_hits(&mut world);
    // move the enemy back into the hitbox and try again
    world.get_mut::<MapPosition>(enemy).unwrap().pos = Vec2::new(380.0, 420.0);
    tick_resolve_hits(&mut world);

    let fighter = world.get::<Fighter>(enemy).unwrap();
    assert!(approx_eq(fighter.hp, 50.0));
}

#[test]
fn cooldown_blocks_second_swing() {
    let mut world = make_world();
    let (player, _) = spawn_fighters(&mut world);
    world.get_mut::<Fighter>(player).unwrap().grounded = true;
    world.resource_mut::<InputState>().kick.just_pressed = true;

    tick_player_attack(&mut world);
    tick_player_attack(&mut world);

    assert_eq!(hitboxes(&mut world).len(), 1);
}

#[test]
fn kick_variant_follows_air_and_crouch_state() {
    // grounded kick
    let mut world = make_world();
    let (player, _) = spawn_fighters(&mut world);
    world.get_mut::<Fighter>(player).unwrap().grounded = true;
    world.resource_mut::<InputState>().kick.just_pressed = true;
    tick_player_attack(&mut world);
    assert_eq!(
        world.get::<AttackState>(player).unwrap().current,
        Some(AttackKind::Kick)
    );

    // airborne kick
    let mut world = make_world();
    let (player, _) = spawn_fighters(&mut world);
    world.get_mut::<Fighter>(player).unwrap().grounded = false;
    world.resource_mut::<InputState>().kick.just_pressed = true;
    tick_player_attack(&mut world);
    assert_eq!(
        world.get::<AttackState>(player).unwrap().current,
        Some(AttackKind::JumpKick)
    );

    // airborne kick with crouch held long enough
    let mut world = make_world();
    let (player, _) = spawn_fighters(&mut world);
    world.get_mut::<Fighter>(player).unwrap().grounded = false;
    {
        let mut input = world.resource_mut::<InputState>();
        input.kick.just_pressed = true;
        input.crouch.active = true;
        input.crouch.held = 0.3;
    }
    tick_player_attack(&mut world);
    assert_eq!(
        world.get::<AttackState>(player).unwrap().current,
        Some(AttackKind::DiveKick)
    );
}

// --- Enemy behavior ---

#[test]
fn enemy_chases_player_outside_range() {
    let mut world = make_world();
    let (_, enemy) = spawn_fighters(&mut world);

    tick_enemy_ai(&mut world);

    // player starts far to the left
    let body = world.get::<RigidBody>(enemy).unwrap();
    assert!(approx_eq(body.velocity.x, -80.0));
    let fighter = world.get::<Fighter>(enemy).unwrap();
    assert!(approx_eq(fighter.facing, -1.0));
}

#[test]
fn enemy_halts_and_attacks_inside_range() {
    let mut world = make_world();
    let (player, enemy) = spawn_fighters(&mut world);
    world.get_mut::<MapPosition>(player).unwrap().pos = Vec2::new(700.0, 420.0);
    world.get_mut::<MapPosition>(enemy).unwrap().pos = Vec2::new(720.0, 420.0);

    tick_enemy_ai(&mut world);

    let body = world.get::<RigidBody>(enemy).unwrap();
    assert!(approx_eq(body.velocity.x, 0.0));
    let attack = world.get::<AttackState>(enemy).unwrap();
    assert!(attack.is_attacking());
    assert!(approx_eq(attack.cooldown, 1.25));
    assert_eq!(
        world.get::<Animation>(enemy).unwrap().animation_key,
        "enemy_punch"
    );

    let boxes = hitboxes(&mut world);
    assert_eq!(boxes.len(), 1);
    assert!(approx_eq(boxes[0].damage, 8.0));
    assert_eq!(boxes[0].owner, enemy);
}

#[test]
fn enemy_halts_when_player_is_dead() {
    let mut world = make_world();
    let (player, enemy) = spawn_fighters(&mut world);
    world.get_mut::<Fighter>(player).unwrap().alive = false;
    world.get_mut::<RigidBody>(enemy).unwrap().velocity.x = -80.0;

    tick_enemy_ai(&mut world);

    let body = world.get::<RigidBody>(enemy).unwrap();
    assert!(approx_eq(body.velocity.x, 0.0));
    assert_eq!(hitboxes(&mut world).len(), 0);
}

// --- Animation playback ---

#[test]
fn looping_sequence_wraps_and_stays_in_bounds() {
    let mut world = make_world();
    let entity = world
        .spawn((
            Animation::new("player_idle"),
            Sprite::new("player_idle", 96.0, 63.0),
        ))
        .id();

    for _ in 0..9 {
        advance_time(&mut world, 0.1);
        tick_animate(&mut world);
        let anim = world.get::<Animation>(entity).unwrap();
        assert!(anim.frame_index < 4);
    }
    // 9 advances over a 4-frame loop
    let anim = world.get::<Animation>(entity).unwrap();
    assert_eq!(anim.frame_index, 1);
    assert!(!anim.finished);
}

#[test]
fn non_looping_sequence_finishes_then_falls_back() {
    let mut world = make_world();
    let entity = world
        .spawn((
            Animation::new("player_kick").with_fallback("player_idle"),
            Sprite::new("player_kick", 96.0, 63.0),
        ))
        .id();

    // 5 frames at 0.1s: finished once the last frame is reached
    for _ in 0..6 {
        advance_time(&mut world, 0.1);
        tick_animate(&mut world);
    }
    {
        let anim = world.get::<Animation>(entity).unwrap();
        assert!(anim.finished);
        assert_eq!(anim.frame_index, 4);
        assert_eq!(anim.animation_key, "player_kick");
    }

    // the next tick hands playback to the fallback sequence
    advance_time(&mut world, 0.1);
    tick_animate(&mut world);
    let anim = world.get::<Animation>(entity).unwrap();
    assert_eq!(anim.animation_key, "player_idle");
    assert!(!anim.finished);
}

// --- UI and round flow ---

#[test]
fn health_bar_tracks_fighter_ratio() {
    let mut world = make_world();
    let (player, enemy) = spawn_fighters(&mut world);
    let bar = world.spawn(HealthBar::new(enemy, 240.0, 18.0, "ENEMY")).id();

    world.trigger(HitEvent {
        attacker: player,
        target: enemy,
        damage: 45.0,
        from_x: 0.0,
    });
    tick_sync_health_bars(&mut world);

    let bar_ref = world.get::<HealthBar>(bar).unwrap();
    assert!(approx_eq(bar_ref.ratio, 15.0 / 60.0));
    assert!(bar_ref.is_low());
}

#[test]
fn reset_round_restores_both_fighters() {
    let mut world = make_world();
    let (player, enemy) = spawn_fighters(&mut world);
    world.trigger(HitEvent {
        attacker: enemy,
        target: player,
        damage: 1000.0,
        from_x: 900.0,
    });
    world.trigger(HitEvent {
        attacker: player,
        target: enemy,
        damage: 20.0,
        from_x: 0.0,
    });

    let reset = world.register_system(game::reset_round);
    world.run_system(reset).unwrap();

    let player_fighter = world.get::<Fighter>(player).unwrap().clone();
    assert!(player_fighter.alive);
    assert!(approx_eq(player_fighter.hp, 100.0));
    assert!(player_fighter.death_timer.is_none());
    assert!(world.get::<Sprite>(player).unwrap().visible);
    assert_eq!(*world.get::<Tint>(player).unwrap(), Tint::WHITE);
    assert_eq!(
        world.get::<MapPosition>(player).unwrap().pos,
        Vec2::new(160.0, 360.0)
    );

    let enemy_fighter = world.get::<Fighter>(enemy).unwrap().clone();
    assert!(approx_eq(enemy_fighter.hp, 60.0));
    assert_eq!(
        world.get::<MapPosition>(enemy).unwrap().pos,
        Vec2::new(720.0, 420.0)
    );

    assert_eq!(hitboxes(&mut world).len(), 0);
}

#[test]
fn dead_player_ignores_input_and_spawns_no_hitbox() {
    let mut world = make_world();
    let (player, _) = spawn_fighters(&mut world);
    world.get_mut::<Fighter>(player).unwrap().alive = false;
    {
        let mut input = world.resource_mut::<InputState>();
        input.move_right.active = true;
        input.jump.just_pressed = true;
        input.kick.just_pressed = true;
    }

    tick_player_control(&mut world);
    tick_player_attack(&mut world);

    assert_eq!(world.get::<RigidBody>(player).unwrap().velocity, Vec2::ZERO);
    assert!(!world.get::<AttackState>(player).unwrap().is_attacking());
    assert_eq!(hitboxes(&mut world).len(), 0);
}

#[test]
fn quit_key_despawns_scene_and_enters_quitting() {
    let mut world = make_world();
    let (player, enemy) = spawn_fighters(&mut world);
    world.insert_resource(MatchFlow::new());
    let hooks = GameHooks {
        setup: world.register_system(game::setup),
        enter_play: world.register_system(game::enter_play),
        reset_round: world.register_system(game::reset_round),
        cleanup: world.register_system(game::clean_all_entities),
    };
    for id in [hooks.setup, hooks.enter_play, hooks.reset_round, hooks.cleanup] {
        world.entity_mut(id.entity()).insert(Persistent);
    }
    world.insert_resource(hooks);
    world.spawn((Observer::new(observe_match_state_change), Persistent));
    world.flush();

    world.resource_mut::<InputState>().quit.just_pressed = true;
    let mut schedule = Schedule::default();
    schedule.add_systems((check_quit, check_pending_state.after(check_quit)));
    schedule.run(&mut world);
    world.flush();

    assert_eq!(world.resource::<MatchFlow>().state(), MatchState::Quitting);
    assert!(world.get::<Fighter>(player).is_none());
    assert!(world.get::<Fighter>(enemy).is_none());
}
