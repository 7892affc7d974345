//! Shared test fixtures and utilities for tethers crates.
//!
//! Provides a recording mock of the constraint backend and reusable Bevy
//! test app builders.

pub mod app;
pub mod mocks;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use app::{constraint_test_app, minimal_test_app};
pub use mocks::{BackendCall, RecordingBackend};
