//! Circle collision detection.
//!
//! Each [`CircleCollider`] runs an O(n²) pairwise proximity test every frame
//! against every other collider. There is no spatial partitioning; with a
//! handful of asteroids on screen the scan is nowhere near mattering.
//!
//! ## Who publishes
//!
//! When collider C on entity E scans and finds collider O on entity F within
//! range, it is *O* that publishes, carrying F's id on its own channel. An
//! overlapping pair with subscribers on both sides therefore reports twice
//! per frame, once from each side. This asymmetry is kept as the runtime's
//! observed contract; the player only needs "my collider's channel fired".

use crate::entity::EntityId;
use crate::events::{Publisher, Subscription};

use super::GameCx;

/// A collision event: the id of the entity whose collider published it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub entity: EntityId,
}

/// Per-frame circle proximity tester with a contact channel.
pub struct CircleCollider {
    pub radius: f32,
    contacts: Publisher<Contact>,
}

impl CircleCollider {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            contacts: Publisher::new(),
        }
    }

    /// Listen for contacts reported against this collider's entity.
    pub fn subscribe(&mut self) -> Subscription<Contact> {
        self.contacts.subscribe()
    }

    pub(crate) fn update(&mut self, cx: &mut GameCx<'_>) {
        let Some(my_pos) = cx.world_position() else {
            return;
        };
        let reach = self.radius;

        for other in cx.registry.entities_with_excluding::<CircleCollider>(cx.id) {
            let Some(other_pos) = cx.registry.world_position(other) else {
                continue;
            };
            let Some(other_collider) = cx.registry.find_mut::<CircleCollider>(other) else {
                continue;
            };
            if my_pos.distance(other_pos) < reach + other_collider.radius {
                log::trace!("contact between {} and {other}", cx.id);
                other_collider.contacts.publish(Contact { entity: other });
            }
        }
    }
}
