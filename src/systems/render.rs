//! Render pass.
//!
//! Exclusive system that takes the raylib handle out of the world for the
//! duration of the frame's drawing: stage backdrop, sprites sorted by
//! z-index, fading hitbox visualizations, optional collider overlay and
//! the health bar UI.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::healthbar::HealthBar;
use crate::components::hitbox::Hitbox;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::texturestore::TextureStore;

const BACKDROP: Color = Color::new(24, 24, 32, 255);
const GROUND: Color = Color::new(46, 42, 58, 255);
const GROUND_LINE: Color = Color::new(92, 84, 112, 255);
const HITBOX_FILL: Color = Color::new(255, 80, 80, 255);
const BAR_BACKGROUND: Color = Color::new(51, 51, 51, 255);
const BAR_HEALTHY: Color = Color::new(0, 210, 106, 255);
const BAR_CRITICAL: Color = Color::new(255, 77, 79, 255);

/// Draw the whole frame. Runs exclusively: the raylib handle and thread
/// are removed from the world while the draw scope is open and reinserted
/// afterwards.
pub fn render_system(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle missing from world");
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing from world");

    {
        let mut d = rl.begin_drawing(&thread);
        let config = world.resource::<GameConfig>().clone();

        d.clear_background(BACKDROP);
        let floor = config.floor_y as i32;
        let width = config.window_width as i32;
        let height = config.window_height as i32;
        d.draw_rectangle(0, floor, width, height - floor, GROUND);
        d.draw_line(0, floor, width, floor, GROUND_LINE);

        // Painter's pass: collect visible sprites, sort by z, draw.
        let mut to_draw: Vec<(Sprite, MapPosition, Scale, Tint, ZIndex)> = {
            let mut q = world.query::<(&Sprite, &MapPosition, &Scale, &Tint, &ZIndex)>();
            q.iter(world)
                .filter(|(sprite, _, _, _, _)| sprite.visible)
                .map(|(s, p, sc, t, z)| (s.clone(), *p, *sc, *t, *z))
                .collect()
        };
        to_draw.sort_by_key(|(_, _, _, _, z)| *z);

        let textures = world.resource::<TextureStore>();
        for (sprite, position, scale, tint, _z) in to_draw.iter() {
            let Some(tex) = textures.get(&sprite.tex_key) else {
                continue;
            };
            // Source rect selects a frame from the spritesheet; a negative
            // width flips it horizontally.
            let mut src = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: sprite.width,
                height: sprite.height,
            };
            if sprite.flip_h {
                src.width = -src.width;
            }
            // Destination places the sprite so MapPosition is the pivot.
            let dest = Rectangle {
                x: position.pos.x,
                y: position.pos.y,
                width: sprite.width * scale.scale.x,
                height: sprite.height * scale.scale.y,
            };
            let origin = Vector2 {
                x: sprite.origin.x * scale.scale.x,
                y: sprite.origin.y * scale.scale.y,
            };
            let color = Color::new(tint.r, tint.g, tint.b, tint.a);
            d.draw_texture_pro(tex, src, dest, origin, 0.0, color);
        }

        // Fading hitbox visualizations.
        {
            let mut q = world.query::<(&Hitbox, &BoxCollider, &MapPosition)>();
            let boxes: Vec<(f32, (f32, f32, f32, f32))> = q
                .iter(world)
                .map(|(hitbox, collider, position)| {
                    (hitbox.alpha, collider.rect(position.pos))
                })
                .collect();
            for (alpha, (x, y, w, h)) in boxes {
                let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
                d.draw_rectangle(
                    x as i32,
                    y as i32,
                    w as i32,
                    h as i32,
                    Color::new(HITBOX_FILL.r, HITBOX_FILL.g, HITBOX_FILL.b, a),
                );
            }
        }

        // Collider outlines while the debug key is held.
        if world.resource::<InputState>().mode_debug.active {
            let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
            let rects: Vec<(f32, f32, f32, f32)> = colliders
                .iter(world)
                .map(|(collider, position)| collider.rect(position.pos))
                .collect();
            for (x, y, w, h) in rects {
                d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
            }
        }

        // Health bar UI.
        {
            let mut q = world.query::<(&HealthBar, &ScreenPosition)>();
            let bars: Vec<(HealthBar, ScreenPosition)> =
                q.iter(world).map(|(b, p)| (b.clone(), *p)).collect();
            for (bar, position) in bars {
                let x = position.pos.x as i32;
                let y = position.pos.y as i32;
                d.draw_rectangle(x, y, bar.width as i32, bar.height as i32, BAR_BACKGROUND);
                let fill = if bar.is_low() { BAR_CRITICAL } else { BAR_HEALTHY };
                d.draw_rectangle(x, y, (bar.width * bar.ratio) as i32, bar.height as i32, fill);
                d.draw_text(&bar.label, x, y - 14, 10, Color::RAYWHITE);
            }
        }
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}
