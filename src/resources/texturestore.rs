//! Loaded textures keyed by string IDs.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Sprite sheets loaded at setup, shared by the render pass.
#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
