//! # Entity Identity — Monotonic IDs
//!
//! An [`EntityId`] is an opaque 64-bit identity issued by the
//! [`Registry`](crate::registry::Registry). IDs count upward and are **never
//! reused**, even after the entity is destroyed.
//!
//! ## Design
//!
//! The usual alternative is a generational index (a slot index plus a
//! generation counter, as in `hecs` or `bevy_ecs`), which lets storage recycle
//! slots while stale handles fail their generation check. Here the entity
//! table is a hash map keyed by id, so there are no slots to recycle: a stale
//! handle simply misses the map. Monotonic allocation buys the same safety
//! with less machinery — a destroyed entity's id can never be re-issued, so a
//! held-over id can never silently point at a different entity.
//!
//! 2^63 allocations at one per frame at 60 fps is roughly 4.8 billion years,
//! so overflow is not handled.

use std::fmt;

/// Opaque handle to an entity in a [`Registry`](crate::registry::Registry).
///
/// Ordering follows creation order: an entity created later compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(i64);

impl EntityId {
    pub(crate) fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw numeric value, for logging and diagnostics.
    pub fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_creation_order() {
        let a = EntityId::new(3);
        let b = EntityId::new(7);
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_the_raw_value() {
        assert_eq!(EntityId::new(42).to_string(), "42");
        assert_eq!(EntityId::new(42).raw(), 42);
    }
}
