//! # Grjot — Minimal Entity/Component Game Runtime
//!
//! A small single-threaded runtime: entities with ordered component lists, a
//! parent/child hierarchy, a three-phase frame scheduler with deferred
//! creation and destruction, typed pub/sub channels, and an Asteroids game
//! built on top of it.
//!
//! Start with `use grjot::prelude::*`, define a component enum implementing
//! [`Component`](component::Component), and drive an [`App`](app::App) from
//! your frame loop.

pub mod app;
pub mod asset;
pub mod component;
pub mod context;
pub mod counter;
pub mod entity;
pub mod events;
pub mod frontend;
pub mod game;
pub mod headless;
pub mod hierarchy;
pub mod math;
pub mod prelude;
pub mod registry;
pub mod scheduler;

#[cfg(feature = "backend")]
pub mod backend;
