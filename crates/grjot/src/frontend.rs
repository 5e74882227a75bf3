//! The render/input/timing collaborator interface.
//!
//! Everything the runtime needs from the host platform fits behind
//! [`Frontend`]: frame delta, keyboard queries, screen dimensions, one
//! sprite-region draw primitive, and text measurement/drawing. The macroquad
//! backend implements it for a real window;
//! [`HeadlessFrontend`](crate::headless::HeadlessFrontend) implements it for
//! tests and windowless simulation.

use crate::math::{Rect, Vec2};

/// The keys the game reads. Deliberately tiny — rotate, thrust, start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    D,
    Enter,
}

/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(230, 41, 55);
    pub const GRAY: Self = Self::rgb(130, 130, 130);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Host platform services, consumed as `&mut dyn Frontend`.
pub trait Frontend {
    /// Seconds elapsed since the previous frame.
    fn delta(&self) -> f32;

    /// Whether `key` is currently held down.
    fn pressed(&self, key: Key) -> bool;

    /// Whether `key` went down this frame.
    fn just_pressed(&self, key: Key) -> bool;

    /// Window dimensions in pixels.
    fn screen_size(&self) -> Vec2;

    /// Draw `source` (a region of the named texture) into `dest`, rotated
    /// `rotation` degrees about the destination center.
    fn draw_sprite(&mut self, texture: &str, source: Rect, dest: Rect, rotation: f32);

    /// Draw `text` with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);

    /// Pixel extents `text` would occupy at `size`.
    fn measure_text(&self, text: &str, size: f32) -> Vec2;
}
