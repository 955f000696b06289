//! Side Brawl main entry point.
//!
//! A 2D side-view fighting demo written in Rust using:
//! - **raylib** for windowing, graphics and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! One player-controlled fighter faces one heuristic-driven enemy on a
//! flat stage. Attacks spawn short-lived hitboxes; overlaps resolve into
//! damage, knockback and a hit flash, and each fighter's health is
//! mirrored by a screen-space bar.
//!
//! # Controls
//!
//! - Arrow keys: walk, jump (up), crouch (down)
//! - Q / X / Z: jab / punch / kick (kick becomes a jump kick airborne,
//!   or a dive kick with crouch held)
//! - R: restart the round
//! - Esc: quit
//! - F11 (hold): collider overlay
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world and resources
//! 2. Register the observers and the match lifecycle hooks
//! 3. Run the update schedule every frame: input, control, AI, physics,
//!    combat resolution, animation, UI sync, render
//! 4. Exit when the window closes or the quit key enters `Quitting`

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use sidebrawl::components::persistent::Persistent;
use sidebrawl::events::hit::observe_hit;
use sidebrawl::events::matchstate::{MatchStateChangedEvent, observe_match_state_change};
use sidebrawl::game;
use sidebrawl::resources::gameconfig::GameConfig;
use sidebrawl::resources::gamehooks::GameHooks;
use sidebrawl::resources::input::InputState;
use sidebrawl::resources::matchflow::{MatchFlow, MatchState};
use sidebrawl::resources::worldtime::WorldTime;
use sidebrawl::systems::animation::{animate, select_fighter_animation};
use sidebrawl::systems::combat::{fade_hitboxes, resolve_hits, tick_fighters};
use sidebrawl::systems::enemy::enemy_ai;
use sidebrawl::systems::healthbar::sync_health_bars;
use sidebrawl::systems::input::update_input_state;
use sidebrawl::systems::matchflow::{
    check_pending_state, check_quit, check_restart, match_is_playing,
};
use sidebrawl::systems::movement::movement_system;
use sidebrawl::systems::player::{player_attack, player_control};
use sidebrawl::systems::render::render_system;

/// Side Brawl
#[derive(Parser)]
#[command(version, about = "A 2D side-view fighting demo")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("Using default config: {}", e);
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Side Brawl")
        .build();
    rl.set_target_fps(config.target_fps);
    // Esc is handled by the quit key, not raylib's default exit key.
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(MatchFlow::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn((Observer::new(observe_match_state_change), Persistent));
    world.spawn((Observer::new(observe_hit), Persistent));

    // NOTE: In bevy_ecs 0.18, registered systems are stored as entities.
    // They must be marked Persistent so they survive the Quitting cleanup.
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

    // Ensure observers are registered before any systems trigger events.
    world.flush();

    // Enter Setup immediately; it requests Playing once assets are in.
    world.resource_mut::<MatchFlow>().request(MatchState::Setup);
    world.trigger(MatchStateChangedEvent);
    world.flush();

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_quit.after(update_input_state));
    update.add_systems(check_pending_state.after(check_quit));
    update.add_systems(
        check_restart
            .run_if(match_is_playing)
            .after(update_input_state),
    );
    update.add_systems(
        player_control
            .run_if(match_is_playing)
            .after(update_input_state),
    );
    update.add_systems(
        player_attack
            .run_if(match_is_playing)
            .after(player_control),
    );
    update.add_systems(enemy_ai.run_if(match_is_playing).after(player_attack));
    update.add_systems(movement_system.after(enemy_ai));
    update.add_systems(resolve_hits.after(movement_system));
    update.add_systems(tick_fighters.after(resolve_hits));
    update.add_systems(fade_hitboxes.after(resolve_hits));
    update.add_systems(select_fighter_animation.after(tick_fighters));
    update.add_systems(animate.after(select_fighter_animation));
    update.add_systems(sync_health_bars.after(tick_fighters));
    update.add_systems(
        render_system
            .after(animate)
            .after(sync_health_bars)
            .after(fade_hitboxes),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !matches!(world.resource::<MatchFlow>().state(), MatchState::Quitting)
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        world.resource_mut::<WorldTime>().advance(dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
}
