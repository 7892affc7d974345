// tethers-physics: Engine-agnostic constraint backend for tethers.
//
// Provides a `ConstraintBackend` trait so the concrete engine (rapier3d,
// XPBD, etc.) can be swapped without changing the constraint manager, plus
// the rapier3d implementation. The plugin inserts the rapier world and
// registers the step system.

pub mod backend;
pub mod params;
pub mod plugin;
pub mod rapier;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        backend::ConstraintBackend,
        params::{Buddy, ConstraintFlags, PointConstraintParams},
        plugin::TethersPhysicsPlugin,
        rapier::RapierWorld,
    };
}

// Re-export the plugin at crate root for convenience.
pub use plugin::TethersPhysicsPlugin;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
