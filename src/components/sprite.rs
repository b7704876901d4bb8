use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Sprite is identified by a texture key and its size in world units.
/// `flip_h` mirrors the visual horizontally; agents use it as their facing.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            flip_h: false,
        }
    }

    /// True when the visual is mirrored, i.e. facing left.
    pub fn faces_left(&self) -> bool {
        self.flip_h
    }

    /// Point in the upper quarter of the box `[min, max]`, towards the
    /// facing side.
    pub fn facing_marker(&self, min: Vec2, max: Vec2) -> Vec2 {
        let center = (min + max) * 0.5;
        let half = (max - min) * 0.5;
        let side = if self.flip_h { -1.0 } else { 1.0 };
        Vec2::new(center.x + side * half.x * 0.5, center.y + half.y * 0.5)
    }
}
