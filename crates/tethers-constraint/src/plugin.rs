//! Bevy plugin wiring constraint lifecycle dispatch to a backend resource.

use std::marker::PhantomData;

use bevy::prelude::*;

use tethers_core::{TethersCorePlugin, TethersSet};
use tethers_physics::backend::ConstraintBackend;

use crate::events::SimulationTransition;
use crate::systems::{apply_activation_changes, apply_simulation_transitions};

/// Registers the lifecycle dispatch systems against a concrete backend
/// resource `B`.
///
/// # Usage
///
/// ```ignore
/// app.add_plugins(TethersPhysicsPlugin);
/// app.add_plugins(PointConstraintPlugin::<RapierWorld>::default());
/// ```
///
/// The systems run in [`TethersSet::Lifecycle`], before the physics step,
/// so constraints established this frame are seen by the solver in the
/// same frame.
pub struct PointConstraintPlugin<B> {
    _backend: PhantomData<fn() -> B>,
}

impl<B> Default for PointConstraintPlugin<B> {
    fn default() -> Self {
        Self {
            _backend: PhantomData,
        }
    }
}

impl<B: ConstraintBackend + Resource> Plugin for PointConstraintPlugin<B> {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<TethersCorePlugin>() {
            app.add_plugins(TethersCorePlugin);
        }
        app.add_event::<SimulationTransition>();
        app.add_systems(
            Update,
            (
                apply_simulation_transitions::<B>,
                apply_activation_changes::<B>,
            )
                .chain()
                .in_set(TethersSet::Lifecycle),
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::PointConstraint;
    use tethers_core::types::{BodyHandle, ConstraintId};
    use tethers_physics::params::PointConstraintParams;

    #[derive(Resource, Default)]
    struct NullBackend;

    impl ConstraintBackend for NullBackend {
        fn body(&self, _entity: Entity) -> Option<BodyHandle> {
            None
        }
        fn anchor_transform(&mut self, _entity: Entity) -> Option<(Vec3, Quat)> {
            None
        }
        fn add_constraint(
            &mut self,
            _body: BodyHandle,
            _params: &PointConstraintParams,
        ) -> Option<ConstraintId> {
            None
        }
        fn update_constraint(&mut self, _body: BodyHandle, _id: ConstraintId, _remove: bool) {}
        fn name(&self) -> &str {
            "null"
        }
    }

    #[test]
    fn plugin_builds_and_updates() {
        let mut app = App::new();
        app.insert_resource(NullBackend);
        app.add_plugins(PointConstraintPlugin::<NullBackend>::default());
        app.world_mut().spawn(PointConstraint::new());
        app.update();
        app.update();
    }

    #[test]
    fn started_event_reaches_managers_without_panicking() {
        let mut app = App::new();
        app.insert_resource(NullBackend);
        app.add_plugins(PointConstraintPlugin::<NullBackend>::default());
        app.world_mut().spawn(PointConstraint::new().with_active(true));
        app.world_mut().send_event(SimulationTransition::Started);
        app.update();
    }
}
