//! Bevy systems translating host notifications into constraint dispatch.

use std::collections::HashMap;

use bevy::prelude::*;

use tethers_physics::backend::ConstraintBackend;

use crate::constraint::PointConstraint;
use crate::events::{LifecycleEvent, SimulationTransition};

/// Fan simulation start/stop transitions out to every constraint manager.
pub fn apply_simulation_transitions<B: ConstraintBackend + Resource>(
    mut transitions: EventReader<SimulationTransition>,
    mut backend: ResMut<B>,
    mut constraints: Query<(Entity, &mut PointConstraint)>,
) {
    for &transition in transitions.read() {
        let event = match transition {
            SimulationTransition::Started => LifecycleEvent::SimulationStart,
            SimulationTransition::Stopped => LifecycleEvent::SimulationStop,
        };
        for (owner, mut constraint) in &mut constraints {
            constraint.handle_event(owner, event, backend.as_mut());
        }
    }
}

/// Dispatch [`LifecycleEvent::ActivationChanged`] on activation edges.
///
/// The first observation of a manager only records its flag; whether it
/// constrains initially is decided by the host's simulation-start event.
pub fn apply_activation_changes<B: ConstraintBackend + Resource>(
    mut backend: ResMut<B>,
    mut constraints: Query<(Entity, &mut PointConstraint)>,
    mut observed: Local<HashMap<Entity, bool>>,
) {
    for (owner, mut constraint) in &mut constraints {
        let active = constraint.is_active();
        if let Some(previous) = observed.insert(owner, active) {
            if previous != active {
                constraint.handle_event(owner, LifecycleEvent::ActivationChanged, backend.as_mut());
            }
        }
    }
}
