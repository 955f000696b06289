//! Event types and observers used by the game.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without tight coupling or direct
//! dependencies.
//!
//! Submodules:
//! - [`hit`] – landed-attack notifications and the shared damage observer
//! - [`matchstate`] – lifecycle transition notifications and stage hooks
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod hit;
pub mod matchstate;
