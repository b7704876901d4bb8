//! Raylib frontend: keyboard sampling and drawing.
//!
//! Only built with the `window` feature. Colliders are drawn as flat
//! rectangles in a camera that follows the player; world space is y-up, the
//! screen is y-down, so every rectangle is flipped around the camera. Entities
//! with a [`Sprite`] get a small marker on the side they face.

use bevy_ecs::prelude::*;
use glam::Vec2;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::panel::Panel;
use crate::components::sprite::Sprite;
use crate::components::tag::{Layer, Tag};
use crate::resources::input::InputFrame;

const BACKGROUND: Color = Color::new(24, 20, 37, 255);

/// Sample the keys the game uses.
///
/// A/D or arrows move, Space/W/Up jumps, R restarts, Escape or M goes back,
/// Enter confirms.
pub fn sample_input(rl: &RaylibHandle) -> InputFrame {
    let down = |key: KeyboardKey| rl.is_key_down(key);
    InputFrame {
        left: down(KeyboardKey::KEY_A) || down(KeyboardKey::KEY_LEFT),
        right: down(KeyboardKey::KEY_D) || down(KeyboardKey::KEY_RIGHT),
        jump: down(KeyboardKey::KEY_SPACE)
            || down(KeyboardKey::KEY_W)
            || down(KeyboardKey::KEY_UP),
        restart: down(KeyboardKey::KEY_R),
        back: down(KeyboardKey::KEY_ESCAPE) || down(KeyboardKey::KEY_M),
        confirm: down(KeyboardKey::KEY_ENTER),
    }
}

fn color_for(tag: Option<&Tag>, layer: Option<&Layer>) -> Color {
    match (tag, layer) {
        (Some(Tag::Player), _) => Color::SKYBLUE,
        (Some(Tag::Coin), _) => Color::GOLD,
        (Some(Tag::Trap), _) => Color::RED,
        (Some(Tag::Enemy), _) => Color::LIME,
        (Some(Tag::Key), _) => Color::YELLOW,
        (None, Some(Layer::Wall)) => Color::GRAY,
        (None, Some(Layer::Ground)) => Color::BROWN,
        _ => Color::WHITE,
    }
}

/// Draw the world, then the screen-space texts and visible panels.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle, pixels_per_unit: f32) {
    d.clear_background(BACKGROUND);
    let screen = Vec2::new(d.get_screen_width() as f32, d.get_screen_height() as f32);

    let camera = {
        let mut players = world.query::<(&MapPosition, &Tag)>();
        players
            .iter(world)
            .find(|(_, tag)| **tag == Tag::Player)
            .map(|(position, _)| position.pos)
            .unwrap_or(Vec2::ZERO)
    };
    let to_screen = |p: Vec2| -> Vec2 {
        Vec2::new(
            (p.x - camera.x) * pixels_per_unit + screen.x * 0.5,
            screen.y * 0.5 - (p.y - camera.y) * pixels_per_unit,
        )
    };

    let mut colliders = world.query::<(
        &MapPosition,
        &BoxCollider,
        Option<&Tag>,
        Option<&Layer>,
        Option<&Sprite>,
    )>();
    for (position, collider, tag, layer, sprite) in colliders.iter(world) {
        let (min, max) = collider.aabb(position.pos);
        // top-left corner on screen is the world (min.x, max.y) corner
        let top_left = to_screen(Vec2::new(min.x, max.y));
        let size = (max - min) * pixels_per_unit;
        d.draw_rectangle(
            top_left.x as i32,
            top_left.y as i32,
            size.x.ceil() as i32,
            size.y.ceil() as i32,
            color_for(tag, layer),
        );

        if let Some(sprite) = sprite {
            let eye = to_screen(sprite.facing_marker(min, max));
            d.draw_circle(eye.x as i32, eye.y as i32, pixels_per_unit * 0.08, BACKGROUND);
        }
    }

    let mut texts = world.query::<&DynamicText>();
    for text in texts.iter(world) {
        d.draw_text(
            &text.content,
            text.x,
            text.y,
            text.font_size as i32,
            Color::RAYWHITE,
        );
    }

    let mut panels = world.query::<&Panel>();
    for panel in panels.iter(world).filter(|panel| panel.visible) {
        d.draw_rectangle(
            0,
            (screen.y * 0.35) as i32,
            screen.x as i32,
            (screen.y * 0.3) as i32,
            Color::new(0, 0, 0, 180),
        );
        // rough centering, the default font is about half as wide as tall
        let width = panel.title.len() as i32 * 16;
        d.draw_text(
            &panel.title,
            (screen.x as i32 - width) / 2,
            (screen.y * 0.5) as i32 - 16,
            32,
            Color::RAYWHITE,
        );
    }
}
