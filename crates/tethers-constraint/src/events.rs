//! Host lifecycle events driving the constraint state machine.

use bevy::prelude::*;

use tethers_physics::backend::ConstraintBackend;

use crate::constraint::PointConstraint;

// ---------------------------------------------------------------------------
// LifecycleEvent
// ---------------------------------------------------------------------------

/// A host framework notification, dispatched into
/// [`PointConstraint::handle_event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The simulation entered the running state.
    SimulationStart,
    /// The simulation left the running state.
    SimulationStop,
    /// The activation flag was toggled and subscriptions re-evaluated.
    ActivationChanged,
    /// The owning body is about to be destroyed.
    Destroyed,
}

// ---------------------------------------------------------------------------
// SimulationTransition
// ---------------------------------------------------------------------------

/// Bevy event emitted by the host when the simulation starts or stops.
///
/// Fanned out to every [`PointConstraint`] by
/// [`apply_simulation_transitions`](crate::systems::apply_simulation_transitions).
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationTransition {
    Started,
    Stopped,
}

// ---------------------------------------------------------------------------
// Event dispatch
// ---------------------------------------------------------------------------

impl PointConstraint {
    /// Drive the lifecycle state machine.
    ///
    /// - `SimulationStart`: establish against the configured target while
    ///   active.
    /// - `ActivationChanged`: establish while active, tear down otherwise.
    /// - `SimulationStop`: tear down; the activation intent is retained so
    ///   a later start re-establishes.
    /// - `Destroyed`: tear down and deactivate.
    pub fn handle_event(
        &mut self,
        owner: Entity,
        event: LifecycleEvent,
        backend: &mut dyn ConstraintBackend,
    ) {
        match event {
            LifecycleEvent::SimulationStart => {
                if self.is_active() {
                    self.constrain_to_target(owner, backend);
                }
            }
            LifecycleEvent::ActivationChanged => {
                if self.is_active() {
                    self.constrain_to_target(owner, backend);
                } else {
                    self.remove(owner, backend);
                }
            }
            LifecycleEvent::SimulationStop => {
                self.remove(owner, backend);
            }
            LifecycleEvent::Destroyed => {
                self.remove(owner, backend);
                self.set_active(false);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
