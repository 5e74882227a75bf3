//! Named sprite-sheet registry.
//!
//! The runtime never touches texture pixels; it only knows each texture's
//! *metadata* — sheet size in pixels and frame grid — keyed by the same
//! string name the [`Frontend`](crate::frontend::Frontend) uses to resolve
//! the actual GPU resource at draw time. The store is populated once at
//! startup alongside the backend's texture loads.

use std::collections::HashMap;

use crate::math::{Rect, Vec2};

/// Metadata for one loaded texture: total pixel size and its frame grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSheet {
    /// Sheet size in pixels.
    pub size: Vec2,
    /// Grid dimensions: columns × rows.
    pub frames: (u32, u32),
}

impl SpriteSheet {
    pub fn new(size: Vec2, frames: (u32, u32)) -> Self {
        Self { size, frames }
    }

    /// A sheet that is one single frame.
    pub fn single(size: Vec2) -> Self {
        Self::new(size, (1, 1))
    }

    /// Pixel size of one frame.
    pub fn frame_size(&self) -> Vec2 {
        Vec2::new(
            self.size.x / self.frames.0 as f32,
            self.size.y / self.frames.1 as f32,
        )
    }

    /// Source rectangle of frame `index`, row-major, wrapping past the end.
    pub fn frame_rect(&self, index: usize) -> Rect {
        let (cols, rows) = self.frames;
        let index = index % (cols * rows).max(1) as usize;
        let col = index % cols.max(1) as usize;
        let row = index / cols.max(1) as usize;
        let frame = self.frame_size();
        Rect::new(col as f32 * frame.x, row as f32 * frame.y, frame.x, frame.y)
    }
}

/// String-keyed [`SpriteSheet`] table.
#[derive(Default)]
pub struct TextureStore {
    sheets: HashMap<String, SpriteSheet>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sheet under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, sheet: SpriteSheet) {
        self.sheets.insert(name.into(), sheet);
    }

    /// Look up a sheet. A miss is logged; the caller skips whatever it was
    /// going to draw and the loop continues.
    pub fn get(&self, name: &str) -> Option<&SpriteSheet> {
        let sheet = self.sheets.get(name);
        if sheet.is_none() {
            log::warn!("cannot find texture {name:?}");
        }
        sheet
    }
}
