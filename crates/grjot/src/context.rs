//! Cx — the per-hook context handed to every component callback.
//!
//! [`Cx`] bundles the component's own entity id, the [`Registry`], the
//! [`TextureStore`], the [`Frontend`] collaborator, and the shared session
//! state into one struct, plus convenience passthroughs for the things hooks
//! do constantly (delta time, input, spawning, self-destruction).
//!
//! The session field is how "exactly one game session per process" works
//! without a global: the [`App`](crate::app::App) owns one session value and
//! lends it to every hook through here.

use crate::asset::TextureStore;
use crate::component::{Component, Variant};
use crate::entity::EntityId;
use crate::frontend::{Frontend, Key};
use crate::hierarchy::{Node, WorldTransform};
use crate::math::Vec2;
use crate::registry::Registry;

/// Everything a lifecycle hook can reach.
pub struct Cx<'a, C: Component> {
    /// The entity the running component is attached to.
    pub id: EntityId,
    pub registry: &'a mut Registry<C>,
    pub assets: &'a TextureStore,
    pub frontend: &'a mut dyn Frontend,
    /// The one shared session object, owned by the app.
    pub session: &'a mut C::Session,
    /// Frames completed since the app started.
    pub frame: u64,
}

impl<'a, C: Component> Cx<'a, C> {
    // ── Timing and input ─────────────────────────────────────────────

    /// Seconds elapsed since the previous frame.
    pub fn dt(&self) -> f32 {
        self.frontend.delta()
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.frontend.pressed(key)
    }

    pub fn just_pressed(&self, key: Key) -> bool {
        self.frontend.just_pressed(key)
    }

    pub fn screen_size(&self) -> Vec2 {
        self.frontend.screen_size()
    }

    pub fn screen_center(&self) -> Vec2 {
        self.frontend.screen_size() / 2.0
    }

    // ── Registry sugar ───────────────────────────────────────────────

    pub fn create(&mut self) -> EntityId {
        self.registry.create()
    }

    pub fn create_named(&mut self, name: impl Into<String>) -> EntityId {
        self.registry.create_named(name)
    }

    pub fn attach(&mut self, id: EntityId, component: C) {
        self.registry.attach(id, component);
    }

    /// Queue `id` for deferred removal; a stale id is logged and dropped.
    pub fn destroy(&mut self, id: EntityId) {
        if let Err(err) = self.registry.destroy(id) {
            log::warn!("destroy ignored: {err}");
        }
    }
}

impl<'a, C: Component> Cx<'a, C>
where
    Node: Variant<C>,
{
    /// The running component's own hierarchy node.
    pub fn node(&self) -> Option<&Node> {
        self.registry.node(self.id)
    }

    pub fn node_mut(&mut self) -> Option<&mut Node> {
        self.registry.node_mut(self.id)
    }

    /// The running component's entity, in world space.
    pub fn world_transform(&self) -> Option<WorldTransform> {
        self.registry.world_transform(self.id)
    }

    pub fn world_position(&self) -> Option<Vec2> {
        self.registry.world_position(self.id)
    }
}
