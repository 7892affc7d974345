//! Raw `rapier3d` constraint backend.
//!
//! This module implements [`ConstraintBackend`](crate::backend::ConstraintBackend)
//! using the `rapier3d` crate directly (not `bevy_rapier3d`). We own the
//! [`PhysicsPipeline`](rapier3d::pipeline::PhysicsPipeline), call `step()`
//! ourselves, and have full control over scheduling and data flow.

mod constraints;
pub mod systems;
pub mod world;

pub use systems::step_physics;
pub use world::{AnchorSlot, RapierWorld};
