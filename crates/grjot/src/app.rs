//! App — registry, scheduler, assets, and session in one place.
//!
//! [`App`] is what a frame loop drives: construct it, register sheets in the
//! texture store, spawn your bootstrap entities, then call
//! [`frame`](App::frame) once per tick and [`shutdown`](App::shutdown) when
//! the host signals close. The session lives here — one per app, no global —
//! and reaches every hook through [`Cx`](crate::context::Cx).

use crate::asset::TextureStore;
use crate::component::{Component, Variant};
use crate::frontend::Frontend;
use crate::hierarchy::Node;
use crate::registry::Registry;
use crate::scheduler::{FrameStats, Scheduler};

/// One running game: all state except the window itself.
pub struct App<C: Component> {
    registry: Registry<C>,
    scheduler: Scheduler,
    assets: TextureStore,
    session: C::Session,
}

impl<C: Component> App<C> {
    pub fn new(session: C::Session) -> Self {
        Self {
            registry: Registry::new(),
            scheduler: Scheduler::new(),
            assets: TextureStore::new(),
            session,
        }
    }

    pub fn registry(&self) -> &Registry<C> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry<C> {
        &mut self.registry
    }

    pub fn assets(&self) -> &TextureStore {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut TextureStore {
        &mut self.assets
    }

    pub fn session(&self) -> &C::Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut C::Session {
        &mut self.session
    }

    /// Counts from the most recent frame.
    pub fn stats(&self) -> &FrameStats {
        self.scheduler.stats()
    }

    /// Run one frame: start, update, destroy.
    pub fn frame(&mut self, frontend: &mut dyn Frontend) -> &FrameStats
    where
        Node: Variant<C>,
    {
        self.scheduler
            .frame(&mut self.registry, &self.assets, frontend, &mut self.session)
    }

    /// Final teardown: `end` every remaining component, clear the table.
    pub fn shutdown(&mut self, frontend: &mut dyn Frontend) {
        self.scheduler
            .shutdown(&mut self.registry, &self.assets, frontend, &mut self.session);
    }
}

impl<C: Component> Default for App<C>
where
    C::Session: Default,
{
    fn default() -> Self {
        Self::new(C::Session::default())
    }
}
