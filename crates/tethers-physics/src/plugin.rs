//! Bevy plugin installing the rapier constraint backend.

use bevy::prelude::*;

use tethers_core::config::PhysicsConfig;
use tethers_core::{TethersCorePlugin, TethersSet};

use crate::rapier::{step_physics, RapierWorld};

/// Bevy plugin that wires the rapier backend into the app.
///
/// Inserts a [`RapierWorld`] resource and registers the physics step
/// system in [`TethersSet::Simulate`]. Reads gravity, timestep, and
/// substeps from [`PhysicsConfig`], falling back to defaults when the
/// resource is absent.
pub struct TethersPhysicsPlugin;

impl Plugin for TethersPhysicsPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<TethersCorePlugin>() {
            app.add_plugins(TethersCorePlugin);
        }

        let config = app
            .world()
            .get_resource::<PhysicsConfig>()
            .cloned()
            .unwrap_or_default();
        app.insert_resource(RapierWorld::from_config(&config));
        app.add_systems(Update, step_physics.in_set(TethersSet::Simulate));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
