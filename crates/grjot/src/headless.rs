//! A scriptable [`Frontend`] with no window behind it.
//!
//! [`HeadlessFrontend`] runs the whole game without a display: a fixed frame
//! delta, key state the caller sets by hand, a fake screen size, and draw
//! calls recorded instead of rendered. Every lifecycle and gameplay test in
//! this crate drives it, and it works just as well for batch simulation.
//!
//! Call [`end_frame`](HeadlessFrontend::end_frame) after each scheduler
//! frame so `just_pressed` edges clear, mirroring what a real event loop
//! does.

use std::collections::HashSet;

use crate::frontend::{Color, Frontend, Key};
use crate::math::{Rect, Vec2};

/// One recorded [`draw_sprite`](Frontend::draw_sprite) call.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCall {
    pub texture: String,
    pub source: Rect,
    pub dest: Rect,
    pub rotation: f32,
}

/// One recorded [`draw_text`](Frontend::draw_text) call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCall {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

pub struct HeadlessFrontend {
    pub delta: f32,
    pub screen: Vec2,
    held: HashSet<Key>,
    /// Keys whose `just_pressed` edge is live this frame.
    edges: HashSet<Key>,
    /// Keys to release at `end_frame`.
    taps: HashSet<Key>,
    pub sprites: Vec<SpriteCall>,
    pub texts: Vec<TextCall>,
}

impl HeadlessFrontend {
    /// 60 fps timing on a 1200×1000 screen, no keys down.
    pub fn new() -> Self {
        Self {
            delta: 1.0 / 60.0,
            screen: Vec2::new(1200.0, 1000.0),
            held: HashSet::new(),
            edges: HashSet::new(),
            taps: HashSet::new(),
            sprites: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Press and hold `key`, with its `just_pressed` edge this frame.
    pub fn press(&mut self, key: Key) {
        if self.held.insert(key) {
            self.edges.insert(key);
        }
    }

    /// Press `key` for this frame only; released at [`end_frame`](Self::end_frame).
    pub fn tap(&mut self, key: Key) {
        self.press(key);
        self.taps.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
        self.edges.remove(&key);
        self.taps.remove(&key);
    }

    /// Clear per-frame state: `just_pressed` edges, taps, and the recorded
    /// draw calls. Call once per simulated frame.
    pub fn end_frame(&mut self) {
        self.edges.clear();
        for key in self.taps.drain() {
            self.held.remove(&key);
        }
        self.sprites.clear();
        self.texts.clear();
    }
}

impl Default for HeadlessFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for HeadlessFrontend {
    fn delta(&self) -> f32 {
        self.delta
    }

    fn pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn just_pressed(&self, key: Key) -> bool {
        self.edges.contains(&key)
    }

    fn screen_size(&self) -> Vec2 {
        self.screen
    }

    fn draw_sprite(&mut self, texture: &str, source: Rect, dest: Rect, rotation: f32) {
        self.sprites.push(SpriteCall {
            texture: texture.to_string(),
            source,
            dest,
            rotation,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.texts.push(TextCall {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }

    fn measure_text(&self, text: &str, size: f32) -> Vec2 {
        // Good enough for layout assertions: fixed-advance glyphs.
        Vec2::new(text.len() as f32 * size * 0.5, size)
    }
}
