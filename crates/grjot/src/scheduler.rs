//! # Scheduler — The Three-Phase Frame Loop
//!
//! One call to [`Scheduler::frame`] is one tick:
//!
//! ```text
//! ┌── Start ───────────────────────────────────────────────┐
//! │ drain pending-start (snapshot)                         │
//! │ run start() on each unstarted component, attach order  │
//! ├── Update ──────────────────────────────────────────────┤
//! │ depth-first walk from the roots (snapshot), stack DFS  │
//! │ run update() on each started component, attach order   │
//! ├── Destroy ─────────────────────────────────────────────┤
//! │ drain dead queue (snapshot, FIFO, deduped)             │
//! │ run end() on every component, unlink, erase            │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering guarantees
//!
//! - `start` precedes `update` for an entity in its first eligible frame;
//!   both run that same frame, start phase first.
//! - A component created mid-frame (either a fresh entity or a late attach)
//!   is never started before the *next* frame's start phase, and never
//!   updated before its start: update only touches each entity's started
//!   prefix.
//! - All updates for all entities complete before any deferred destroy's
//!   `end` runs in the same frame.
//! - Every phase drains a snapshot taken at phase entry; requests issued by
//!   hooks during the drain land in the fresh buffer for the next frame
//!   (destroys issued during update still apply this frame — the destroy
//!   snapshot is taken after update ends).
//!
//! Traversal order among roots and among siblings follows the stack: the
//! last-inserted root or child is visited first. Hooks must not structurally
//! mutate the tree they are being traversed over beyond issuing deferred
//! create/destroy requests.

use crate::asset::TextureStore;
use crate::component::{Component, Variant};
use crate::context::Cx;
use crate::entity::EntityId;
use crate::frontend::Frontend;
use crate::hierarchy::Node;
use crate::registry::Registry;

/// Per-frame hook counts, kept for diagnostics the same way the registry
/// logs creations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Index of the frame these counts describe.
    pub frame: u64,
    pub started: u32,
    pub updated: u32,
    pub ended: u32,
    pub destroyed: u32,
}

/// Drives the start/update/destroy phases over a [`Registry`].
pub struct Scheduler {
    frame: u64,
    stats: FrameStats,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            frame: 0,
            stats: FrameStats::default(),
        }
    }

    /// Frames completed so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Counts from the most recent frame.
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Run one full frame over `registry`.
    pub fn frame<C: Component>(
        &mut self,
        registry: &mut Registry<C>,
        assets: &TextureStore,
        frontend: &mut dyn Frontend,
        session: &mut C::Session,
    ) -> &FrameStats
    where
        Node: Variant<C>,
    {
        log::trace!("=== frame {} ===", self.frame);
        let mut stats = FrameStats {
            frame: self.frame,
            ..FrameStats::default()
        };

        // ── Start phase ──────────────────────────────────────────────
        // Entities created or re-enqueued during the drain go to the fresh
        // buffer; their start waits for the next frame.
        let starting = registry.take_pending_start();
        for id in starting {
            if !registry.is_alive(id) {
                continue;
            }
            let upto = registry.slot_count(id);
            let mut index = registry.started(id);
            while index < upto {
                if let Some(mut component) = registry.take_slot(id, index) {
                    let mut cx = Cx {
                        id,
                        registry: &mut *registry,
                        assets,
                        frontend: &mut *frontend,
                        session: &mut *session,
                        frame: self.frame,
                    };
                    component.start(&mut cx);
                    registry.restore_slot(id, index, component);
                    stats.started += 1;
                }
                index += 1;
                registry.set_started(id, index);
            }
        }

        // ── Update phase ─────────────────────────────────────────────
        // Fixed-point snapshot of the roots; children are pushed at visit
        // time, so the last-inserted root or sibling is visited first.
        let mut stack: Vec<EntityId> = registry.roots().to_vec();
        while let Some(id) = stack.pop() {
            if !registry.is_alive(id) {
                continue;
            }
            let started = registry.started(id);
            for index in 0..started {
                if let Some(mut component) = registry.take_slot(id, index) {
                    let mut cx = Cx {
                        id,
                        registry: &mut *registry,
                        assets,
                        frontend: &mut *frontend,
                        session: &mut *session,
                        frame: self.frame,
                    };
                    component.update(&mut cx);
                    registry.restore_slot(id, index, component);
                    stats.updated += 1;
                }
            }
            if let Some(node) = registry.node(id) {
                stack.extend_from_slice(node.children());
            }
        }

        // ── Destroy phase ────────────────────────────────────────────
        // End runs on every component, started or not; destroys issued by
        // an end hook drain next frame.
        let dying = registry.take_dead();
        for id in dying {
            if !registry.is_alive(id) {
                continue;
            }
            let count = registry.slot_count(id);
            for index in 0..count {
                if let Some(mut component) = registry.take_slot(id, index) {
                    let mut cx = Cx {
                        id,
                        registry: &mut *registry,
                        assets,
                        frontend: &mut *frontend,
                        session: &mut *session,
                        frame: self.frame,
                    };
                    component.end(&mut cx);
                    registry.restore_slot(id, index, component);
                    stats.ended += 1;
                }
            }
            registry.remove(id);
            stats.destroyed += 1;
        }

        log::trace!(
            "frame {}: started {}, updated {}, ended {}, destroyed {}",
            self.frame,
            stats.started,
            stats.updated,
            stats.ended,
            stats.destroyed
        );
        self.frame += 1;
        self.stats = stats;
        &self.stats
    }

    /// Final teardown: run `end` once on every remaining live entity's
    /// components, in arbitrary table order, then clear the registry.
    pub fn shutdown<C: Component>(
        &mut self,
        registry: &mut Registry<C>,
        assets: &TextureStore,
        frontend: &mut dyn Frontend,
        session: &mut C::Session,
    ) {
        let remaining = registry.ids();
        log::debug!("teardown: ending {} remaining entities", remaining.len());
        for id in remaining {
            let count = registry.slot_count(id);
            for index in 0..count {
                if let Some(mut component) = registry.take_slot(id, index) {
                    let mut cx = Cx {
                        id,
                        registry: &mut *registry,
                        assets,
                        frontend: &mut *frontend,
                        session: &mut *session,
                        frame: self.frame,
                    };
                    component.end(&mut cx);
                    registry.restore_slot(id, index, component);
                }
            }
        }
        registry.clear();
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
