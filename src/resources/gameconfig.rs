//! Game configuration resource.
//!
//! Manages match tuning loaded from an INI configuration file. Provides
//! defaults for safe startup so a missing or partial file never prevents
//! the game from running.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 960
//! height = 540
//! target_fps = 60
//!
//! [stage]
//! floor_y = 420
//! gravity = 1200
//!
//! [player]
//! max_hp = 100
//! speed = 220
//! jump_strength = 460
//!
//! [enemy]
//! max_hp = 60
//! speed = 80
//! attack_range = 50
//! attack_rate = 1.25
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 960;
const DEFAULT_WINDOW_HEIGHT: u32 = 540;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_FLOOR_Y: f32 = 420.0;
const DEFAULT_GRAVITY: f32 = 1200.0;
const DEFAULT_PLAYER_MAX_HP: f32 = 100.0;
const DEFAULT_PLAYER_SPEED: f32 = 220.0;
const DEFAULT_PLAYER_JUMP_STRENGTH: f32 = 460.0;
const DEFAULT_PLAYER_KNOCKBACK: f32 = 16.0;
const DEFAULT_PLAYER_START_X: f32 = 160.0;
const DEFAULT_PLAYER_START_Y: f32 = 360.0;
const DEFAULT_ENEMY_MAX_HP: f32 = 60.0;
const DEFAULT_ENEMY_SPEED: f32 = 80.0;
const DEFAULT_ENEMY_ATTACK_RANGE: f32 = 50.0;
const DEFAULT_ENEMY_ATTACK_RATE: f32 = 1.25;
const DEFAULT_ENEMY_ATTACK_DAMAGE: f32 = 8.0;
const DEFAULT_ENEMY_ATTACK_DURATION: f32 = 0.6;
const DEFAULT_ENEMY_KNOCKBACK: f32 = 16.0;
const DEFAULT_ENEMY_START_X: f32 = 720.0;
const DEFAULT_HITBOX_FADE_SPEED: f32 = 3.0;
const DEFAULT_HITBOX_ALPHA: f32 = 0.8;
const DEFAULT_HIT_FLASH_DURATION: f32 = 0.09;
const DEFAULT_DIVE_HOLD_SECONDS: f32 = 0.2;
const DEFAULT_LOW_HEALTH_THRESHOLD: f32 = 0.3;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window, stage and combat tuning. Loaded once at startup from the
/// INI file pointed to by `config_path`; missing values keep their defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,

    /// Y coordinate of the ground line the fighters stand on.
    pub floor_y: f32,
    /// Downward acceleration in pixels per second squared.
    pub gravity: f32,

    pub player_max_hp: f32,
    /// Horizontal walk speed in pixels per second.
    pub player_speed: f32,
    /// Upward velocity applied on jump, in pixels per second.
    pub player_jump_strength: f32,
    pub player_knockback: f32,
    pub player_start_x: f32,
    pub player_start_y: f32,

    pub enemy_max_hp: f32,
    pub enemy_speed: f32,
    /// Horizontal distance below which the enemy stops chasing and swings.
    pub enemy_attack_range: f32,
    /// Seconds between enemy attacks.
    pub enemy_attack_rate: f32,
    pub enemy_attack_damage: f32,
    pub enemy_attack_duration: f32,
    pub enemy_knockback: f32,
    pub enemy_start_x: f32,

    /// Opacity units removed from hitbox visualizations per second.
    pub hitbox_fade_speed: f32,
    /// Initial opacity of a freshly spawned hitbox.
    pub hitbox_alpha: f32,
    /// Seconds a damaged fighter stays tinted.
    pub hit_flash_duration: f32,
    /// Crouch hold time that turns an airborne kick into a dive kick.
    pub dive_hold_seconds: f32,
    /// Health fraction below which bars switch to the critical color.
    pub low_health_threshold: f32,

    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            floor_y: DEFAULT_FLOOR_Y,
            gravity: DEFAULT_GRAVITY,
            player_max_hp: DEFAULT_PLAYER_MAX_HP,
            player_speed: DEFAULT_PLAYER_SPEED,
            player_jump_strength: DEFAULT_PLAYER_JUMP_STRENGTH,
            player_knockback: DEFAULT_PLAYER_KNOCKBACK,
            player_start_x: DEFAULT_PLAYER_START_X,
            player_start_y: DEFAULT_PLAYER_START_Y,
            enemy_max_hp: DEFAULT_ENEMY_MAX_HP,
            enemy_speed: DEFAULT_ENEMY_SPEED,
            enemy_attack_range: DEFAULT_ENEMY_ATTACK_RANGE,
            enemy_attack_rate: DEFAULT_ENEMY_ATTACK_RATE,
            enemy_attack_damage: DEFAULT_ENEMY_ATTACK_DAMAGE,
            enemy_attack_duration: DEFAULT_ENEMY_ATTACK_DURATION,
            enemy_knockback: DEFAULT_ENEMY_KNOCKBACK,
            enemy_start_x: DEFAULT_ENEMY_START_X,
            hitbox_fade_speed: DEFAULT_HITBOX_FADE_SPEED,
            hitbox_alpha: DEFAULT_HITBOX_ALPHA,
            hit_flash_duration: DEFAULT_HIT_FLASH_DURATION,
            dive_hold_seconds: DEFAULT_DIVE_HOLD_SECONDS,
            low_health_threshold: DEFAULT_LOW_HEALTH_THRESHOLD,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [stage] section
        if let Some(floor_y) = config.getfloat("stage", "floor_y").ok().flatten() {
            self.floor_y = floor_y as f32;
        }
        if let Some(gravity) = config.getfloat("stage", "gravity").ok().flatten() {
            self.gravity = gravity as f32;
        }

        // [player] section
        if let Some(v) = config.getfloat("player", "max_hp").ok().flatten() {
            self.player_max_hp = v as f32;
        }
        if let Some(v) = config.getfloat("player", "speed").ok().flatten() {
            self.player_speed = v as f32;
        }
        if let Some(v) = config.getfloat("player", "jump_strength").ok().flatten() {
            self.player_jump_strength = v as f32;
        }
        if let Some(v) = config.getfloat("player", "knockback").ok().flatten() {
            self.player_knockback = v as f32;
        }
        if let Some(v) = config.getfloat("player", "start_x").ok().flatten() {
            self.player_start_x = v as f32;
        }
        if let Some(v) = config.getfloat("player", "start_y").ok().flatten() {
            self.player_start_y = v as f32;
        }

        // [enemy] section
        if let Some(v) = config.getfloat("enemy", "max_hp").ok().flatten() {
            self.enemy_max_hp = v as f32;
        }
        if let Some(v) = config.getfloat("enemy", "speed").ok().flatten() {
            self.enemy_speed = v as f32;
        }
        if let Some(v) = config.getfloat("enemy", "attack_range").ok().flatten() {
            self.enemy_attack_range = v as f32;
        }
        if let Some(v) = config.getfloat("enemy", "attack_rate").ok().flatten() {
            self.enemy_attack_rate = v as f32;
        }
        if let Some(v) = config.getfloat("enemy", "attack_damage").ok().flatten() {
            self.enemy_attack_damage = v as f32;
        }
        if let Some(v) = config.getfloat("enemy", "attack_duration").ok().flatten() {
            self.enemy_attack_duration = v as f32;
        }
        if let Some(v) = config.getfloat("enemy", "knockback").ok().flatten() {
            self.enemy_knockback = v as f32;
        }
        if let Some(v) = config.getfloat("enemy", "start_x").ok().flatten() {
            self.enemy_start_x = v as f32;
        }

        // [combat] section
        if let Some(v) = config.getfloat("combat", "hitbox_fade_speed").ok().flatten() {
            self.hitbox_fade_speed = v as f32;
        }
        if let Some(v) = config.getfloat("combat", "hitbox_alpha").ok().flatten() {
            self.hitbox_alpha = v as f32;
        }
        if let Some(v) = config.getfloat("combat", "hit_flash_duration").ok().flatten() {
            self.hit_flash_duration = v as f32;
        }
        if let Some(v) = config.getfloat("combat", "dive_hold_seconds").ok().flatten() {
            self.dive_hold_seconds = v as f32;
        }
        if let Some(v) = config
            .getfloat("combat", "low_health_threshold")
            .ok()
            .flatten()
        {
            self.low_health_threshold = v as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, floor_y={}, player hp={}, enemy hp={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.floor_y,
            self.player_max_hp,
            self.enemy_max_hp
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = GameConfig::new();
        assert_eq!(cfg.window_size(), (960, 540));
        assert_eq!(cfg.target_fps, 60);
        assert_eq!(cfg.floor_y, 420.0);
        assert_eq!(cfg.player_max_hp, 100.0);
        assert_eq!(cfg.enemy_max_hp, 60.0);
        assert_eq!(cfg.enemy_attack_range, 50.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut cfg = GameConfig::with_path("./definitely_not_here.ini");
        assert!(cfg.load_from_file().is_err());
        // defaults survive a failed load
        assert_eq!(cfg.player_speed, 220.0);
    }
}
