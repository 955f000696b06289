//! ECS systems executed by the schedule.
//!
//! Each submodule groups the systems for one concern. Scheduling order is
//! declared in `main`: input is read first, control and AI decide intent,
//! physics integrates, combat resolves, animation and UI follow, and the
//! render pass closes the frame.
//!
//! Overview
//! - `animation` – sequence selection and frame playback
//! - `combat` – hitbox spawning, overlap resolution, combat countdowns
//! - `enemy` – chase/halt/attack heuristic
//! - `healthbar` – mirrors fighter health into the UI bars
//! - `input` – polls the keyboard into the input resource
//! - `matchflow` – pending-transition check, run condition, restart/quit keys
//! - `movement` – gravity, integration, floor and stage bounds
//! - `player` – input-driven control and attack selection
//! - `render` – exclusive draw pass over the world
pub mod animation;
pub mod combat;
pub mod enemy;
pub mod healthbar;
pub mod input;
pub mod matchflow;
pub mod movement;
pub mod player;
pub mod render;
