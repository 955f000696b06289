//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components define data such as position, rendering,
//! collision, animation, combat state, and UI.
//!
//! Submodules overview:
//! - [`animation`] – playback state for sprite animations with fallback sequences
//! - [`attack`] – attack variant table and the attack/cooldown state machine
//! - [`boxcollider`] – axis-aligned rectangular collider for collision detection
//! - [`fighter`] – shared combatant state: health, facing, liveness
//! - [`healthbar`] – screen-space health bar mirroring a fighter's health
//! - [`hitbox`] – transient damage regions spawned by attacks
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`persistent`] – marker for entities that persist across scene changes
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`scale`] – 2D scale factor for sprites
//! - [`screenposition`] – screen-space position for UI elements
//! - [`sprite`] – 2D sprite rendering component
//! - [`tint`] – RGBA color modulation for sprite drawing
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod attack;
pub mod boxcollider;
pub mod fighter;
pub mod healthbar;
pub mod hitbox;
pub mod mapposition;
pub mod persistent;
pub mod rigidbody;
pub mod scale;
pub mod screenposition;
pub mod sprite;
pub mod tint;
pub mod zindex;
