//! Sprite drawing, one draw call per frame during the entity's update.
//!
//! There is no separate render pass: a [`SpriteRenderer`] draws as the
//! traversal reaches it, so draw order is traversal order.

use crate::math::Rect;

use super::GameCx;

/// Draws one frame of a named sheet at the entity's world transform.
pub struct SpriteRenderer {
    pub texture: String,
    pub frame: usize,
}

impl SpriteRenderer {
    pub fn new(texture: impl Into<String>) -> Self {
        Self {
            texture: texture.into(),
            frame: 0,
        }
    }

    pub(crate) fn update(&mut self, cx: &mut GameCx<'_>) {
        // A missing sheet is logged by the store; skip the draw, keep going.
        let Some(sheet) = cx.assets.get(&self.texture).copied() else {
            return;
        };
        let Some(world) = cx.world_transform() else {
            return;
        };

        let size = sheet.frame_size() * world.scale;
        let dest = Rect::new(
            world.position.x - size.x / 2.0,
            world.position.y - size.y / 2.0,
            size.x,
            size.y,
        );
        // The art faces up; rotation 0 in game space points along +X.
        cx.frontend.draw_sprite(
            &self.texture,
            sheet.frame_rect(self.frame),
            dest,
            world.rotation + 90.0,
        );
    }
}
