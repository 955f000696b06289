use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Sprite is identified by a texture key, its frame size in pixels and an
/// offset selecting the current frame inside the sprite sheet. The origin
/// is the pivot point (in pixels) relative to the frame's top-left used
/// for placement when rendering; fighters use bottom-center (the feet).
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vec2,
    pub origin: Vec2,
    pub flip_h: bool,
    pub visible: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vec2::ZERO,
            // bottom-center pivot
            origin: Vec2::new(width * 0.5, height),
            flip_h: false,
            visible: true,
        }
    }
}
