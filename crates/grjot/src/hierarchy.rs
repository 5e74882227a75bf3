//! # Hierarchy — The Built-In Transform Node
//!
//! Every entity owns exactly one [`Node`]: its name, local transform, and
//! parent/child links. The [`Registry`](crate::registry::Registry) creates it
//! as the first component at entity creation and keeps the links consistent;
//! gameplay code mutates the transform fields freely but re-parents only
//! through [`Registry::set_parent`](crate::registry::Registry::set_parent).
//!
//! ## Invariants
//!
//! - A child's `parent` link and the parent's `children` list agree, except
//!   during the window between a deferred destroy request and its application
//!   at the end of the frame.
//! - Entities without a parent are roots; the roots form a forest.
//! - No cycles. This is enforced by construction (a fresh entity has no
//!   children, and `set_parent` is the only link mutation), not by a runtime
//!   walk.
//!
//! Destroying a parent does *not* cascade: the children keep a stale `parent`
//! link, drop out of traversal, and stay in the table until re-parented or
//! destroyed themselves.

use crate::entity::EntityId;
use crate::math::Vec2;

/// The transform-and-links component every entity carries in slot 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    /// Position relative to the parent (or the world, for roots).
    pub position: Vec2,
    pub scale: Vec2,
    /// Rotation in degrees, clockwise in screen space.
    pub rotation: f32,
    pub(crate) parent: Option<EntityId>,
    pub(crate) children: Vec<EntityId>,
}

impl Node {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    /// Child ids in attachment order.
    pub fn children(&self) -> &[EntityId] {
        &self.children
    }
}

impl Default for Node {
    fn default() -> Self {
        Self {
            name: String::from("Empty"),
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// A transform composed through the parent chain down to one entity.
///
/// Child position is rotated by the parent's world rotation and scaled by the
/// parent's world scale; rotations add, scales multiply componentwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    pub position: Vec2,
    pub scale: Vec2,
    /// Degrees.
    pub rotation: f32,
}

impl WorldTransform {
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        scale: Vec2::ONE,
        rotation: 0.0,
    };

    /// Apply a child's local transform under `self`.
    pub fn then(&self, local: &Node) -> Self {
        let rotated = Vec2::from_angle(self.rotation.to_radians()).rotate(local.position * self.scale);
        Self {
            position: self.position + rotated,
            scale: self.scale * local.scale,
            rotation: self.rotation + local.rotation,
        }
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
