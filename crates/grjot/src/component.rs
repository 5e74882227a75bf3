//! # Component — The Behavior Contract
//!
//! A component is one unit of behavior attached to one entity. The runtime is
//! generic over a single caller-supplied enum that lists every component type
//! in the game; the [`Component`] trait is implemented on that enum, and the
//! [`Variant`] trait (usually via [`impl_variants!`]) gives each inner type a
//! typed lookup into it.
//!
//! ## Design
//!
//! The classic shape for this is a heterogeneous `Vec<Box<dyn Any>>` with
//! downcasts at every lookup. A closed enum does the same job without type
//! erasure: `FindComponent<T>` becomes a `match` per slot, exhaustiveness is
//! checked at compile time, and storage is a plain `Vec` with no boxing.
//! The cost is that adding a component type means touching the enum — fine
//! for a game, wrong for a plugin system.
//!
//! ## Lifecycle
//!
//! - `start` runs once, at the first frame boundary after attachment — never
//!   mid-frame.
//! - `update` runs every frame after that, in attachment order, during the
//!   depth-first walk of the entity forest.
//! - `end` runs exactly once: when the entity's deferred destroy is applied,
//!   or at final teardown.
//!
//! All three receive a [`Cx`] with the registry, assets, frontend, and
//! session; defaults are no-ops, so passive components implement nothing.

use crate::context::Cx;
use crate::hierarchy::Node;

/// The component enum contract: construction from the built-in [`Node`],
/// access to it, and the three lifecycle hooks.
pub trait Component: Sized {
    /// Shared per-app state threaded into every hook (the game session).
    type Session;

    /// Wrap the built-in hierarchy node. The registry calls this once per
    /// entity at creation, so slot 0 of every entity is a node.
    fn from_node(node: Node) -> Self;

    /// The hierarchy node, if this component is one.
    fn as_node(&self) -> Option<&Node>;

    fn as_node_mut(&mut self) -> Option<&mut Node>;

    /// Invoked once at the frame boundary after attachment.
    fn start(&mut self, cx: &mut Cx<'_, Self>) {
        let _ = cx;
    }

    /// Invoked every frame while the entity is live and started.
    fn update(&mut self, cx: &mut Cx<'_, Self>) {
        let _ = cx;
    }

    /// Invoked exactly once when the entity is removed or torn down.
    fn end(&mut self, cx: &mut Cx<'_, Self>) {
        let _ = cx;
    }
}

/// Typed projection out of a component enum.
///
/// `T: Variant<C>` means a `C` may hold a `T`; lookups like
/// [`Registry::find`](crate::registry::Registry::find) use it to scan an
/// entity's slots for the first match in attachment order.
pub trait Variant<C>: Sized {
    fn get(component: &C) -> Option<&Self>;
    fn get_mut(component: &mut C) -> Option<&mut Self>;
}

/// Implement [`Variant`] for every inner type of a component enum.
///
/// ```ignore
/// impl_variants!(GameComponent {
///     Node => Node,
///     Player => PlayerController,
/// });
/// ```
#[macro_export]
macro_rules! impl_variants {
    ($enum:ident { $($variant:ident => $inner:ty),+ $(,)? }) => {
        $(
            impl $crate::component::Variant<$enum> for $inner {
                fn get(component: &$enum) -> Option<&Self> {
                    match component {
                        $enum::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn get_mut(component: &mut $enum) -> Option<&mut Self> {
                    match component {
                        $enum::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}
