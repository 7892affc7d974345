//! Rapier physics step system.

use bevy::prelude::ResMut;

use super::world::RapierWorld;

/// Advance the rapier pipeline by the configured number of substeps.
pub fn step_physics(mut world: ResMut<RapierWorld>) {
    world.step();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
