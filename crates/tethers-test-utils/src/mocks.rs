//! Mock implementations of the constraint backend for testing.
//!
//! [`RecordingBackend`] stands in for a physics engine: bodies and poses
//! are scripted up front, every call is recorded in order, and constraint
//! ids are minted from a counter.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use tethers_core::types::{BodyHandle, ConstraintId};
use tethers_physics::backend::ConstraintBackend;
use tethers_physics::params::PointConstraintParams;

// ---------------------------------------------------------------------------
// BackendCall
// ---------------------------------------------------------------------------

/// A single call recorded by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    /// `add_constraint`, with the request and the id handed out (`None`
    /// when the backend rejected the request).
    Create {
        body: BodyHandle,
        params: PointConstraintParams,
        id: Option<ConstraintId>,
    },
    /// `update_constraint`.
    Update {
        body: BodyHandle,
        id: ConstraintId,
        remove: bool,
    },
}

impl BackendCall {
    /// Returns `true` for create calls.
    #[must_use]
    pub const fn is_create(&self) -> bool {
        matches!(self, Self::Create { .. })
    }

    /// Returns `true` for removal updates.
    #[must_use]
    pub const fn is_removal(&self) -> bool {
        matches!(self, Self::Update { remove: true, .. })
    }
}

// ---------------------------------------------------------------------------
// RecordingBackend
// ---------------------------------------------------------------------------

/// An in-memory [`ConstraintBackend`] that records every call.
#[derive(Resource, Default)]
pub struct RecordingBackend {
    bodies: HashMap<Entity, (Vec3, Quat)>,
    anchors: HashSet<Entity>,
    /// Every call issued against this backend, in order.
    pub calls: Vec<BackendCall>,
    /// When set, `add_constraint` returns `None`.
    pub reject_creates: bool,
    next_id: u64,
}

impl RecordingBackend {
    /// Create an empty backend with no bodies scripted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `entity` as physicalized with the given world pose.
    pub fn physicalize(&mut self, entity: Entity, translation: Vec3, rotation: Quat) {
        self.bodies.insert(entity, (translation, rotation));
    }

    /// Builder form of [`physicalize`](Self::physicalize) with identity
    /// rotation.
    #[must_use]
    pub fn with_body(mut self, entity: Entity, translation: Vec3) -> Self {
        self.physicalize(entity, translation, Quat::IDENTITY);
        self
    }

    /// Forget `entity`'s physical representation.
    pub fn unphysicalize(&mut self, entity: Entity) {
        self.bodies.remove(&entity);
    }

    /// Whether an anchor slot was created for `entity`.
    #[must_use]
    pub fn has_anchor(&self, entity: Entity) -> bool {
        self.anchors.contains(&entity)
    }

    /// Number of recorded create calls.
    #[must_use]
    pub fn creates(&self) -> usize {
        self.calls.iter().filter(|call| call.is_create()).count()
    }

    /// Number of recorded removal updates.
    #[must_use]
    pub fn removals(&self) -> usize {
        self.calls.iter().filter(|call| call.is_removal()).count()
    }
}

impl ConstraintBackend for RecordingBackend {
    fn body(&self, entity: Entity) -> Option<BodyHandle> {
        self.bodies
            .contains_key(&entity)
            .then(|| BodyHandle(entity))
    }

    fn anchor_transform(&mut self, entity: Entity) -> Option<(Vec3, Quat)> {
        self.anchors.insert(entity);
        self.bodies.get(&entity).copied()
    }

    fn add_constraint(
        &mut self,
        body: BodyHandle,
        params: &PointConstraintParams,
    ) -> Option<ConstraintId> {
        let id = if self.reject_creates {
            None
        } else {
            self.next_id += 1;
            Some(ConstraintId(self.next_id))
        };
        self.calls.push(BackendCall::Create {
            body,
            params: params.clone(),
            id,
        });
        id
    }

    fn update_constraint(&mut self, body: BodyHandle, id: ConstraintId, remove: bool) {
        self.calls.push(BackendCall::Update { body, id, remove });
    }

    fn name(&self) -> &str {
        "recording"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
