//! System set ordering for the tethers pipeline.

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// TethersSet
// ---------------------------------------------------------------------------

/// System sets ordering the tethers pipeline within `Update`.
///
/// Lifecycle dispatch runs before the physics step so constraints created
/// or removed this frame are seen by the solver in the same frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TethersSet {
    /// Constraint lifecycle dispatch (establish / tear down).
    Lifecycle,
    /// Physics pipeline stepping.
    Simulate,
}

// ---------------------------------------------------------------------------
// TethersCorePlugin
// ---------------------------------------------------------------------------

/// Core plugin: configures [`TethersSet`] ordering on the `Update` schedule.
pub struct TethersCorePlugin;

impl Plugin for TethersCorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (TethersSet::Lifecycle, TethersSet::Simulate).chain(),
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
