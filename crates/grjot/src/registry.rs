//! # Registry — The Entity Table
//!
//! The [`Registry`] is the sole authority over entity and component
//! existence: it allocates identity, owns every component, and answers typed
//! lookups. Everything else in the runtime borrows from it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Registry<C>                                          │
//! │                                                      │
//! │  next_id: i64            monotonic, never reused     │
//! │                                                      │
//! │  entities: HashMap<EntityId, Slots<C>>               │
//! │    Slots = Vec<Option<C>> in attachment order        │
//! │            + started prefix count                    │
//! │                                                      │
//! │  roots: Vec<EntityId>    parentless entities         │
//! │                                                      │
//! │  pending_start: Vec<EntityId>   ┐ command buffers,   │
//! │  dead: Vec<EntityId>            ┘ drained per frame  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Deferred mutation
//!
//! Creation and destruction never take structural effect mid-frame. `create*`
//! inserts the entity immediately but queues it for its `start` pass at the
//! next frame boundary; [`destroy`](Registry::destroy) only queues the id,
//! and the scheduler applies removals after the whole update pass. Component
//! hooks can therefore create and destroy freely while the update traversal
//! holds iterators over the very structures those operations would mutate.
//!
//! The `Option` in each slot is the in-flight marker: while a component's own
//! hook runs, the scheduler takes the component out of its slot and restores
//! it afterwards. The entity stays visible to queries the whole time; the
//! in-flight component itself does not.
//!
//! ## Error taxonomy
//!
//! - Lookup miss (unknown entity, absent component): logged at debug,
//!   `None`. The dominant failure mode; callers own the `None`.
//! - Attach to an unknown id: logged at warn and ignored — the target may
//!   legitimately have been destroyed earlier in the frame.
//! - `create_child*` with an unknown parent: panic. Identities are
//!   caller-controlled, so a bad parent id is a programming error.
//! - `set_parent` / `destroy` with a stale or foreign id:
//!   [`RegistryError`], an explicit reject instead of silent corruption.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::component::{Component, Variant};
use crate::entity::EntityId;
use crate::hierarchy::{Node, WorldTransform};
use crate::math::Vec2;

/// Structural misuse of the entity table, reported instead of applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The given id is not in the entity table (never created, or already
    /// removed).
    #[error("entity {0} does not exist")]
    UnknownEntity(EntityId),
}

/// One entity's component storage.
struct Slots<C> {
    /// Components in attachment order. `None` marks a slot whose component
    /// is currently running one of its own hooks.
    components: Vec<Option<C>>,
    /// How many leading slots have had `start` run. Only this prefix is
    /// updated each frame.
    started: usize,
}

/// Owner of all entities and components. See the module docs.
pub struct Registry<C: Component> {
    next_id: i64,
    entities: HashMap<EntityId, Slots<C>>,
    roots: Vec<EntityId>,
    pending_start: Vec<EntityId>,
    dead: Vec<EntityId>,
}

impl<C: Component> Registry<C> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entities: HashMap::new(),
            roots: Vec::new(),
            pending_start: Vec::new(),
            dead: Vec::new(),
        }
    }

    // ── Creation ─────────────────────────────────────────────────────

    /// Create a top-level entity named `"Empty"`.
    pub fn create(&mut self) -> EntityId {
        self.create_inner(None, None)
    }

    /// Create a named top-level entity.
    pub fn create_named(&mut self, name: impl Into<String>) -> EntityId {
        self.create_inner(None, Some(name.into()))
    }

    /// Create an entity under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a live entity.
    pub fn create_child(&mut self, parent: EntityId) -> EntityId {
        self.create_inner(Some(parent), None)
    }

    /// Create a named entity under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a live entity.
    pub fn create_child_named(&mut self, parent: EntityId, name: impl Into<String>) -> EntityId {
        self.create_inner(Some(parent), Some(name.into()))
    }

    fn create_inner(&mut self, parent: Option<EntityId>, name: Option<String>) -> EntityId {
        if let Some(parent) = parent {
            assert!(
                self.entities.contains_key(&parent),
                "create_child: parent entity {parent} does not exist"
            );
        }

        let id = EntityId::new(self.next_id);
        self.next_id += 1;

        let mut node = match name {
            Some(name) => Node::named(name),
            None => Node::default(),
        };
        node.parent = parent;

        self.entities.insert(
            id,
            Slots {
                components: vec![Some(C::from_node(node))],
                started: 0,
            },
        );

        match parent {
            Some(parent) => {
                if let Some(parent_node) = self.node_mut_inner(parent) {
                    parent_node.children.push(id);
                }
            }
            None => self.roots.push(id),
        }

        self.pending_start.push(id);
        log::debug!("created entity {id}");
        id
    }

    /// Append a component to `id`'s slot list.
    ///
    /// An unknown id is logged and ignored (the entity may have been removed
    /// already this frame). A second hierarchy node is rejected the same way:
    /// every entity carries exactly one, created with it.
    ///
    /// The component's `start` runs at the next frame boundary, even if the
    /// rest of the entity started long ago.
    pub fn attach(&mut self, id: EntityId, component: C) {
        let Some(slots) = self.entities.get_mut(&id) else {
            log::warn!("attach to unknown entity {id}, dropping component");
            return;
        };
        if component.as_node().is_some() {
            log::warn!("entity {id} already has a hierarchy node, dropping component");
            return;
        }
        slots.components.push(Some(component));
        if !self.pending_start.contains(&id) {
            self.pending_start.push(id);
        }
    }

    // ── Typed lookup ─────────────────────────────────────────────────

    /// The first component of type `T` on `id`, in attachment order.
    pub fn find<T: Variant<C>>(&self, id: EntityId) -> Option<&T> {
        let Some(slots) = self.entities.get(&id) else {
            log::debug!("lookup on unknown entity {id}");
            return None;
        };
        slots.components.iter().flatten().find_map(T::get)
    }

    /// Mutable form of [`find`](Self::find).
    pub fn find_mut<T: Variant<C>>(&mut self, id: EntityId) -> Option<&mut T> {
        let Some(slots) = self.entities.get_mut(&id) else {
            log::debug!("lookup on unknown entity {id}");
            return None;
        };
        slots.components.iter_mut().flatten().find_map(T::get_mut)
    }

    /// Every live entity holding at least one `T`, in creation order.
    pub fn entities_with<T: Variant<C>>(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|(_, slots)| slots.components.iter().flatten().any(|c| T::get(c).is_some()))
            .map(|(&id, _)| id)
            .collect();
        ids.sort();
        ids
    }

    /// [`entities_with`](Self::entities_with) minus one entity. Pairwise
    /// scans (collision) use this to skip self-matching.
    pub fn entities_with_excluding<T: Variant<C>>(&self, excluded: EntityId) -> Vec<EntityId> {
        let mut ids = self.entities_with::<T>();
        ids.retain(|&id| id != excluded);
        ids
    }

    /// The first entity whose node carries `name`.
    ///
    /// If several entities share the name, which one wins is unspecified
    /// (table iteration order). Names are not deduplicated.
    pub fn named(&self, name: &str) -> Option<EntityId>
    where
        Node: Variant<C>,
    {
        self.entities.iter().find_map(|(&id, slots)| {
            let node = slots.components.iter().flatten().find_map(Node::get)?;
            (node.name == name).then_some(id)
        })
    }

    // ── Hierarchy ────────────────────────────────────────────────────

    /// The built-in node of `id`.
    pub fn node(&self, id: EntityId) -> Option<&Node>
    where
        Node: Variant<C>,
    {
        self.find::<Node>(id)
    }

    /// Mutable access to the built-in node of `id`.
    pub fn node_mut(&mut self, id: EntityId) -> Option<&mut Node>
    where
        Node: Variant<C>,
    {
        self.find_mut::<Node>(id)
    }

    /// Move `child` under `new_parent`, unlinking it from wherever it was.
    ///
    /// Both ids must be live; a stale or foreign id is rejected. Not safe to
    /// call while the update traversal is walking the tree — issue it from a
    /// hook only on entities outside the current walk, or defer it.
    pub fn set_parent(&mut self, child: EntityId, new_parent: EntityId) -> Result<(), RegistryError>
    where
        Node: Variant<C>,
    {
        if !self.entities.contains_key(&child) {
            return Err(RegistryError::UnknownEntity(child));
        }
        if !self.entities.contains_key(&new_parent) {
            return Err(RegistryError::UnknownEntity(new_parent));
        }

        let old_parent = self.node(child).and_then(Node::parent);
        match old_parent {
            Some(old) => {
                if let Some(old_node) = self.node_mut_inner(old) {
                    old_node.children.retain(|&c| c != child);
                }
            }
            None => self.roots.retain(|&r| r != child),
        }

        if let Some(child_node) = self.node_mut_inner(child) {
            child_node.parent = Some(new_parent);
        }
        if let Some(parent_node) = self.node_mut_inner(new_parent) {
            parent_node.children.push(child);
        }
        Ok(())
    }

    /// World-space transform of `id`, composed root-down through the parent
    /// chain. An orphan's stale parent link terminates the chain where it
    /// breaks.
    pub fn world_transform(&self, id: EntityId) -> Option<WorldTransform>
    where
        Node: Variant<C>,
    {
        let node = self.node(id)?;
        let mut chain = vec![node];
        let mut current = node.parent();
        while let Some(parent) = current {
            match self.node(parent) {
                Some(parent_node) => {
                    chain.push(parent_node);
                    current = parent_node.parent();
                }
                // Orphaned: the parent was destroyed out from under us.
                None => break,
            }
        }

        let mut world = WorldTransform::IDENTITY;
        for node in chain.iter().rev() {
            world = world.then(node);
        }
        Some(world)
    }

    /// World-space position of `id`.
    pub fn world_position(&self, id: EntityId) -> Option<Vec2>
    where
        Node: Variant<C>,
    {
        self.world_transform(id).map(|t| t.position)
    }

    // ── Destruction ──────────────────────────────────────────────────

    /// Queue `id` for removal at the end of the frame.
    ///
    /// Removal is deferred: the entity stays live and queryable until the
    /// scheduler's destroy phase runs `end` on each of its components,
    /// unlinks it, and erases it. Children are *not* cascaded; they become
    /// orphans. An id that is not live is rejected.
    pub fn destroy(&mut self, id: EntityId) -> Result<(), RegistryError> {
        if !self.entities.contains_key(&id) {
            return Err(RegistryError::UnknownEntity(id));
        }
        self.dead.push(id);
        log::debug!("entity {id} queued for destroy");
        Ok(())
    }

    // ── Inspection ───────────────────────────────────────────────────

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Parentless entities in creation order; the traversal seeds.
    pub fn roots(&self) -> &[EntityId] {
        &self.roots
    }

    // ── Scheduler plumbing ───────────────────────────────────────────

    /// Drain the creations-to-start buffer. Entities created while the
    /// caller processes the batch land in the fresh buffer, for next frame.
    pub(crate) fn take_pending_start(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.pending_start)
    }

    /// Drain the ids-to-destroy buffer, deduplicated, FIFO by first request.
    pub(crate) fn take_dead(&mut self) -> Vec<EntityId> {
        let mut seen = HashSet::new();
        std::mem::take(&mut self.dead)
            .into_iter()
            .filter(|&id| seen.insert(id))
            .collect()
    }

    pub(crate) fn slot_count(&self, id: EntityId) -> usize {
        self.entities.get(&id).map_or(0, |s| s.components.len())
    }

    pub(crate) fn started(&self, id: EntityId) -> usize {
        self.entities.get(&id).map_or(0, |s| s.started)
    }

    pub(crate) fn set_started(&mut self, id: EntityId, started: usize) {
        if let Some(slots) = self.entities.get_mut(&id) {
            slots.started = started;
        }
    }

    /// Take a component out of its slot for the duration of its own hook.
    pub(crate) fn take_slot(&mut self, id: EntityId, index: usize) -> Option<C> {
        self.entities.get_mut(&id)?.components.get_mut(index)?.take()
    }

    /// Put a component back after its hook returned.
    pub(crate) fn restore_slot(&mut self, id: EntityId, index: usize, component: C) {
        match self.entities.get_mut(&id).and_then(|s| s.components.get_mut(index)) {
            Some(slot) => *slot = Some(component),
            None => log::warn!("slot {index} of entity {id} vanished while its hook ran"),
        }
    }

    /// Erase `id`: unlink from its parent's children (orphans keep their
    /// stale link and unlink nothing), drop it from the roots, purge it from
    /// the pending-start buffer, and remove it from the table.
    pub(crate) fn remove(&mut self, id: EntityId)
    where
        Node: Variant<C>,
    {
        let parent = self.node(id).and_then(Node::parent);
        match parent {
            Some(parent) => {
                if let Some(parent_node) = self.node_mut_inner(parent) {
                    parent_node.children.retain(|&c| c != id);
                }
            }
            None => self.roots.retain(|&r| r != id),
        }
        self.pending_start.retain(|&p| p != id);
        self.entities.remove(&id);
        log::debug!("entity {id} removed");
    }

    /// Every live id, unordered. Used by final teardown.
    pub(crate) fn ids(&self) -> Vec<EntityId> {
        self.entities.keys().copied().collect()
    }

    pub(crate) fn clear(&mut self) {
        self.entities.clear();
        self.roots.clear();
        self.pending_start.clear();
        self.dead.clear();
    }

    /// Node access that bypasses the `Variant` bound; creation runs under a
    /// plain `C: Component` and only ever needs slot 0.
    fn node_mut_inner(&mut self, id: EntityId) -> Option<&mut Node> {
        self.entities
            .get_mut(&id)?
            .components
            .iter_mut()
            .flatten()
            .find_map(C::as_node_mut)
    }
}

impl<C: Component> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_variants;

    struct Tag(&'static str);

    enum Probe {
        Node(Node),
        Tag(Tag),
    }

    impl Component for Probe {
        type Session = ();

        fn from_node(node: Node) -> Self {
            Probe::Node(node)
        }

        fn as_node(&self) -> Option<&Node> {
            match self {
                Probe::Node(node) => Some(node),
                _ => None,
            }
        }

        fn as_node_mut(&mut self) -> Option<&mut Node> {
            match self {
                Probe::Node(node) => Some(node),
                _ => None,
            }
        }
    }

    impl_variants!(Probe {
        Node => Node,
        Tag => Tag,
    });

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut registry: Registry<Probe> = Registry::new();
        let a = registry.create();
        let b = registry.create();
        assert!(a < b);

        registry.destroy(a).unwrap();
        registry.remove(a);
        let c = registry.create();
        assert!(c > b, "a destroyed id must never come back");
    }

    #[test]
    fn a_parentless_entity_is_a_root_with_a_node() {
        let mut registry: Registry<Probe> = Registry::new();
        let id = registry.create_named("Ship");

        assert_eq!(registry.roots(), &[id]);
        let node = registry.node(id).unwrap();
        assert_eq!(node.name, "Ship");
        assert_eq!(node.scale, Vec2::ONE);
        assert!(node.parent().is_none());
    }

    #[test]
    fn create_child_links_both_directions() {
        let mut registry: Registry<Probe> = Registry::new();
        let parent = registry.create();
        let child = registry.create_child_named(parent, "Turret");

        assert_eq!(registry.node(parent).unwrap().children(), &[child]);
        assert_eq!(registry.node(child).unwrap().parent(), Some(parent));
        // Children are not roots.
        assert_eq!(registry.roots(), &[parent]);
    }

    #[test]
    #[should_panic(expected = "parent entity")]
    fn create_child_under_unknown_parent_panics() {
        let mut registry: Registry<Probe> = Registry::new();
        registry.create_child(EntityId::new(999));
    }

    #[test]
    fn find_returns_first_match_in_attachment_order() {
        let mut registry: Registry<Probe> = Registry::new();
        let id = registry.create();
        registry.attach(id, Probe::Tag(Tag("first")));
        registry.attach(id, Probe::Tag(Tag("second")));

        assert_eq!(registry.find::<Tag>(id).unwrap().0, "first");
    }

    #[test]
    fn attach_to_unknown_entity_is_ignored() {
        let mut registry: Registry<Probe> = Registry::new();
        registry.attach(EntityId::new(5), Probe::Tag(Tag("lost")));
        assert_eq!(registry.entity_count(), 0);
    }

    #[test]
    fn a_second_node_is_rejected() {
        let mut registry: Registry<Probe> = Registry::new();
        let id = registry.create();
        registry.attach(id, Probe::Node(Node::default()));
        assert_eq!(registry.slot_count(id), 1);
    }

    #[test]
    fn entities_with_scans_the_whole_table() {
        let mut registry: Registry<Probe> = Registry::new();
        let a = registry.create();
        let _plain = registry.create();
        let b = registry.create();
        registry.attach(a, Probe::Tag(Tag("a")));
        registry.attach(b, Probe::Tag(Tag("b")));

        assert_eq!(registry.entities_with::<Tag>(), vec![a, b]);
        assert_eq!(registry.entities_with_excluding::<Tag>(a), vec![b]);
    }

    #[test]
    fn named_finds_an_entity_by_its_node_name() {
        let mut registry: Registry<Probe> = Registry::new();
        let _decoy = registry.create_named("Asteroid");
        let player = registry.create_named("Player");

        assert_eq!(registry.named("Player"), Some(player));
        assert_eq!(registry.named("Missing"), None);
    }

    #[test]
    fn set_parent_moves_the_child_exactly_once() {
        let mut registry: Registry<Probe> = Registry::new();
        let old = registry.create();
        let new = registry.create();
        let child = registry.create_child(old);

        registry.set_parent(child, new).unwrap();

        assert!(registry.node(old).unwrap().children().is_empty());
        assert_eq!(registry.node(new).unwrap().children(), &[child]);
        assert_eq!(registry.node(child).unwrap().parent(), Some(new));
    }

    #[test]
    fn set_parent_promoting_a_root_removes_it_from_the_roots() {
        let mut registry: Registry<Probe> = Registry::new();
        let parent = registry.create();
        let loose = registry.create();

        registry.set_parent(loose, parent).unwrap();

        assert_eq!(registry.roots(), &[parent]);
    }

    #[test]
    fn set_parent_rejects_stale_ids() {
        let mut registry: Registry<Probe> = Registry::new();
        let live = registry.create();
        let stale = EntityId::new(404);

        assert_eq!(
            registry.set_parent(stale, live),
            Err(RegistryError::UnknownEntity(stale))
        );
        assert_eq!(
            registry.set_parent(live, stale),
            Err(RegistryError::UnknownEntity(stale))
        );
    }

    #[test]
    fn destroy_is_deferred_and_rejects_unknown_ids() {
        let mut registry: Registry<Probe> = Registry::new();
        let id = registry.create();

        registry.destroy(id).unwrap();
        assert!(registry.is_alive(id), "destroy must not apply immediately");

        assert_eq!(
            registry.destroy(EntityId::new(77)),
            Err(RegistryError::UnknownEntity(EntityId::new(77)))
        );
    }

    #[test]
    fn take_dead_dedupes_preserving_first_request_order() {
        let mut registry: Registry<Probe> = Registry::new();
        let a = registry.create();
        let b = registry.create();
        registry.destroy(b).unwrap();
        registry.destroy(a).unwrap();
        registry.destroy(b).unwrap();

        assert_eq!(registry.take_dead(), vec![b, a]);
        assert!(registry.take_dead().is_empty());
    }

    #[test]
    fn remove_unlinks_from_parent_and_orphans_children() {
        let mut registry: Registry<Probe> = Registry::new();
        let parent = registry.create();
        let child = registry.create_child(parent);
        let grandchild = registry.create_child(child);

        registry.remove(child);

        assert!(registry.node(parent).unwrap().children().is_empty());
        // The grandchild keeps its stale link and stays out of the roots.
        assert!(registry.is_alive(grandchild));
        assert_eq!(registry.node(grandchild).unwrap().parent(), Some(child));
        assert_eq!(registry.roots(), &[parent]);
    }

    #[test]
    fn world_transform_composes_through_the_chain_and_stops_at_orphans() {
        let mut registry: Registry<Probe> = Registry::new();
        let root = registry.create();
        let child = registry.create_child(root);
        registry.node_mut(root).unwrap().position = Vec2::new(100.0, 0.0);
        registry.node_mut(child).unwrap().position = Vec2::new(10.0, 5.0);

        assert_eq!(registry.world_position(child), Some(Vec2::new(110.0, 5.0)));

        // Orphan the child: composition now starts at the break.
        registry.remove(root);
        assert_eq!(registry.world_position(child), Some(Vec2::new(10.0, 5.0)));
    }
}
