//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, asset stores,
//! and configuration. Each submodule documents the semantics and intended
//! usage of its resource(s).
//!
//! Overview
//! - `animationstore` – definitions for sprite animations reused across entities
//! - `gameconfig` – window, stage and combat tuning loaded from an INI file
//! - `gamehooks` – registered one-shot systems for the match lifecycle
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `matchflow` – current lifecycle stage and pending transition
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod gameconfig;
pub mod gamehooks;
pub mod input;
pub mod matchflow;
pub mod texturestore;
pub mod worldtime;
