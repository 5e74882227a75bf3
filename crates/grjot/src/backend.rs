//! Macroquad implementation of the [`Frontend`] collaborator.
//!
//! Textures are loaded up front by name; the immediate-mode draw calls map
//! one to one onto macroquad's. Only the binary uses this module, behind the
//! `backend` feature — the library and its tests stay windowless.

use std::collections::HashMap;

use macroquad::prelude as mq;

use crate::frontend::{Color, Frontend, Key};
use crate::math::{Rect, Vec2};

fn keycode(key: Key) -> mq::KeyCode {
    match key {
        Key::W => mq::KeyCode::W,
        Key::A => mq::KeyCode::A,
        Key::D => mq::KeyCode::D,
        Key::Enter => mq::KeyCode::Enter,
    }
}

fn color(c: Color) -> mq::Color {
    mq::Color::from_rgba(c.r, c.g, c.b, c.a)
}

/// The windowed frontend: macroquad input/timing plus a named texture cache.
#[derive(Default)]
pub struct MacroquadFrontend {
    textures: HashMap<String, mq::Texture2D>,
}

impl MacroquadFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a texture from disk and cache it under `name`. A failed load is
    /// logged; draws against the name are then skipped (resource-miss).
    pub async fn load_texture(&mut self, name: &str, path: &str) {
        match mq::load_texture(path).await {
            Ok(texture) => {
                texture.set_filter(mq::FilterMode::Nearest);
                self.textures.insert(name.to_string(), texture);
                log::debug!("loaded texture {name:?} from {path:?}");
            }
            Err(err) => log::error!("failed to load texture {path:?}: {err}"),
        }
    }
}

impl Frontend for MacroquadFrontend {
    fn delta(&self) -> f32 {
        mq::get_frame_time()
    }

    fn pressed(&self, key: Key) -> bool {
        mq::is_key_down(keycode(key))
    }

    fn just_pressed(&self, key: Key) -> bool {
        mq::is_key_pressed(keycode(key))
    }

    fn screen_size(&self) -> Vec2 {
        Vec2::new(mq::screen_width(), mq::screen_height())
    }

    fn draw_sprite(&mut self, texture: &str, source: Rect, dest: Rect, rotation: f32) {
        let Some(texture) = self.textures.get(texture) else {
            log::warn!("texture {texture:?} is not loaded, skipping draw");
            return;
        };
        mq::draw_texture_ex(
            texture,
            dest.x,
            dest.y,
            mq::WHITE,
            mq::DrawTextureParams {
                dest_size: Some(mq::vec2(dest.w, dest.h)),
                source: Some(mq::Rect::new(source.x, source.y, source.w, source.h)),
                rotation: rotation.to_radians(),
                ..Default::default()
            },
        );
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, c: Color) {
        // macroquad anchors text at the baseline; shift down to top-left.
        let dims = mq::measure_text(text, None, size as u16, 1.0);
        mq::draw_text(text, pos.x, pos.y + dims.offset_y, size, color(c));
    }

    fn measure_text(&self, text: &str, size: f32) -> Vec2 {
        let dims = mq::measure_text(text, None, size as u16, 1.0);
        Vec2::new(dims.width, dims.height)
    }
}
