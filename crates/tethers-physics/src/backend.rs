//! Engine-agnostic constraint backend trait.
//!
//! Any physics engine (Rapier, XPBD, custom) implements
//! [`ConstraintBackend`] to service constraint creation and removal. The
//! constraint manager only ever talks to this trait.

use bevy::prelude::{Entity, Quat, Vec3};

use tethers_core::types::{BodyHandle, ConstraintId};

use crate::params::PointConstraintParams;

/// Trait that concrete physics engines must implement.
///
/// The backend is responsible for:
/// - Resolving entities to their physical-body handles
/// - Maintaining per-entity anchor slots and their world transforms
/// - Creating and removing constraint objects
///
/// All operations are synchronous and tolerate stale handles.
pub trait ConstraintBackend: Send + Sync + 'static {
    /// Physical-body handle for `entity`, if it is currently physicalized.
    fn body(&self, entity: Entity) -> Option<BodyHandle>;

    /// World transform (translation, rotation) of `entity`'s anchor slot.
    ///
    /// A placeholder slot is created on first use so later transform
    /// queries have something to bind to, even when the entity is not yet
    /// physicalized. Returns `None` while the entity has no physical
    /// representation.
    fn anchor_transform(&mut self, entity: Entity) -> Option<(Vec3, Quat)>;

    /// Create a constraint on `body`.
    ///
    /// Returns `None` when the request cannot be serviced (for example an
    /// unresolvable buddy); no state changes in that case.
    fn add_constraint(
        &mut self,
        body: BodyHandle,
        params: &PointConstraintParams,
    ) -> Option<ConstraintId>;

    /// Update an existing constraint on `body`; with `remove` set, the
    /// constraint is torn down. Unknown ids are ignored.
    fn update_constraint(&mut self, body: BodyHandle, id: ConstraintId, remove: bool);

    /// Human-readable engine name (e.g., "rapier3d").
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
