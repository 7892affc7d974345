//! Bevy test app builders with various plugin combinations.

use bevy::prelude::*;

use tethers_constraint::PointConstraintPlugin;
use tethers_core::TethersCorePlugin;

use crate::mocks::RecordingBackend;

/// Create a minimal test app with only the core plugin.
///
/// Provides `TethersSet` ordering but no backend or constraint systems.
pub fn minimal_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(TethersCorePlugin);
    app.finish();
    app.cleanup();
    app
}

/// Create a test app wired with a [`RecordingBackend`] and the constraint
/// lifecycle systems.
///
/// Script bodies on the backend resource, spawn `PointConstraint`
/// components, and drive the app with `SimulationTransition` events.
pub fn constraint_test_app() -> App {
    let mut app = App::new();
    app.insert_resource(RecordingBackend::new());
    app.add_plugins(PointConstraintPlugin::<RecordingBackend>::default());
    app.finish();
    app.cleanup();
    app
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
