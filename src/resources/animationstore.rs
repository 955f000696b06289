//! Animation resource registry.
//!
//! This module provides a store for animation definitions that can be reused
//! by multiple entities. Systems look up a sequence by string key and drive
//! playback based on the immutable parameters stored here. Definitions are
//! loaded from a JSON manifest alongside the sprite sheets.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, anim: AnimationResource) {
        self.animations.insert(key.into(), anim);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.animations.contains_key(key)
    }

    /// Build a store from a JSON manifest on disk.
    pub fn load_manifest(path: &str) -> Result<(Self, AnimationManifest), String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read animation manifest {path}: {e}"))?;
        let manifest: AnimationManifest = serde_json::from_str(&text)
            .map_err(|e| format!("Failed to parse animation manifest {path}: {e}"))?;

        let mut store = Self::new();
        for seq in &manifest.sequences {
            // a zero frame count or non-positive frame time would stall playback
            if seq.frame_count == 0 || seq.frame_time <= 0.0 {
                return Err(format!(
                    "Invalid sequence '{}' in {path}: frame_count={}, frame_time={}",
                    seq.key, seq.frame_count, seq.frame_time
                ));
            }
            store.insert(
                seq.key.clone(),
                AnimationResource::new(
                    seq.texture.clone(),
                    Vec2::ZERO,
                    Vec2::new(manifest.frame_width, 0.0),
                    seq.frame_count,
                    seq.frame_time,
                    seq.looped,
                ),
            );
        }
        Ok((store, manifest))
    }
}

/// Immutable data describing a sprite-sheet animation.
///
/// Frames are laid out horizontally: frame `i` is sampled at
/// `position + displacement * i` within the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: Arc<str>,
    /// Top-left corner of the first frame within the sheet.
    pub position: Vec2,
    /// Per-frame displacement within the sheet.
    pub displacement: Vec2,
    /// Number of frames in the animation.
    pub frame_count: usize,
    /// Seconds each frame stays on screen.
    pub frame_time: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    pub fn new(
        tex_key: impl Into<Arc<str>>,
        position: Vec2,
        displacement: Vec2,
        frame_count: usize,
        frame_time: f32,
        looped: bool,
    ) -> Self {
        Self {
            tex_key: tex_key.into(),
            position,
            displacement,
            frame_count,
            frame_time,
            looped,
        }
    }

    /// Total wall time of one full pass over the sequence.
    pub fn duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_time
    }
}

/// On-disk description of the animation set, deserialized from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationManifest {
    pub frame_width: f32,
    pub frame_height: f32,
    pub sequences: Vec<SequenceEntry>,
}

/// One named sequence in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceEntry {
    pub key: String,
    pub texture: String,
    pub path: String,
    pub frame_count: usize,
    pub frame_time: f32,
    pub looped: bool,
}
