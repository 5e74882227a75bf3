//! One-stop import for runtime users: `use grjot::prelude::*`.

pub use crate::app::App;
pub use crate::asset::{SpriteSheet, TextureStore};
pub use crate::component::{Component, Variant};
pub use crate::context::Cx;
pub use crate::counter::Counter;
pub use crate::entity::EntityId;
pub use crate::events::{Publisher, Subscription};
pub use crate::frontend::{Color, Frontend, Key};
pub use crate::headless::HeadlessFrontend;
pub use crate::hierarchy::{Node, WorldTransform};
pub use crate::impl_variants;
pub use crate::math::{Rect, Vec2};
pub use crate::registry::{Registry, RegistryError};
pub use crate::scheduler::{FrameStats, Scheduler};
