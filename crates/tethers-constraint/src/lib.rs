// tethers-constraint: Point-constraint lifecycle management for tethers.
//
// The `PointConstraint` component pins a point on its owning body to
// another body or to a fixed point in space. It owns the bookkeeping for
// the backend constraint handles it creates and reacts to host lifecycle
// events (simulation start/stop, activation toggles, destruction) without
// leaking handles.

pub mod angles;
pub mod constraint;
pub mod events;
pub mod plugin;
pub mod systems;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        angles::{ClampedAngle, RotationLimits},
        constraint::{ConstraintState, PointConstraint},
        events::{LifecycleEvent, SimulationTransition},
        plugin::PointConstraintPlugin,
    };
}

// Re-export the plugin at crate root for convenience.
pub use plugin::PointConstraintPlugin;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify the prelude re-exports compile.
    #[test]
    fn prelude_exports() {
        use prelude::*;

        let constraint = PointConstraint::new();
        assert_eq!(constraint.state(), ConstraintState::Inactive);
        let _limits = RotationLimits::default();
        let _event = LifecycleEvent::SimulationStart;
    }
}
