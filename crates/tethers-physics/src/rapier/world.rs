//! Bevy resource wrapping all rapier3d pipeline state behind the
//! constraint API.

use std::collections::HashMap;

use bevy::prelude::{Entity, Quat, Resource, Vec3};
use rapier3d::na;
use rapier3d::prelude::*;

use tethers_core::config::PhysicsConfig;
use tethers_core::types::{BodyHandle, ConstraintId};

// ---------------------------------------------------------------------------
// AnchorSlot
// ---------------------------------------------------------------------------

/// A named attachment point on a body, independent of any visual
/// representation. The world transform of the slot is the body pose
/// composed with this local offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorSlot {
    /// Offset from the body origin, in body-local space.
    pub local_translation: Vec3,
    /// Rotation relative to the body frame.
    pub local_rotation: Quat,
}

// ---------------------------------------------------------------------------
// RapierWorld
// ---------------------------------------------------------------------------

/// All rapier state in a single Bevy resource.
///
/// `PhysicsPipeline::step()` requires mutable access to every set
/// simultaneously, so they must all live together.
#[derive(Resource)]
pub struct RapierWorld {
    // -- Rapier sets --
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub impulse_joint_set: ImpulseJointSet,
    pub multibody_joint_set: MultibodyJointSet,

    // -- Pipeline objects --
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,

    // -- Parameters --
    integration_parameters: IntegrationParameters,
    gravity: Vector<Real>,
    substeps: u32,

    // -- Entity <-> handle mappings --
    /// Physicalized entity -> rapier rigid body.
    pub(crate) body_handles: HashMap<Entity, RigidBodyHandle>,
    /// Anchor slots, created on first transform query.
    pub(crate) anchor_slots: HashMap<Entity, AnchorSlot>,
    /// Opaque constraint id -> rapier impulse joint.
    pub(crate) constraints: HashMap<ConstraintId, ImpulseJointHandle>,
    pub(crate) next_constraint_id: u64,

    /// Lazily created fixed body anchoring world constraints.
    world_anchor: Option<RigidBodyHandle>,
}

impl RapierWorld {
    /// Create a new world with given gravity, timestep, and substep count.
    pub fn new(gravity: Vec3, dt: f32, substeps: u32) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = dt;

        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            integration_parameters,
            gravity: vector![gravity.x, gravity.y, gravity.z],
            substeps,
            body_handles: HashMap::new(),
            anchor_slots: HashMap::new(),
            constraints: HashMap::new(),
            next_constraint_id: 1,
            world_anchor: None,
        }
    }

    /// Create a world from a [`PhysicsConfig`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self::new(
            Vec3::new(config.gravity[0], config.gravity[1], config.gravity[2]),
            config.physics_dt as f32,
            config.substeps,
        )
    }

    /// Physicalize `entity` as a dynamic body at `position`.
    ///
    /// The body carries unit mass properties so it responds to gravity and
    /// joints even before any collider is attached.
    pub fn insert_dynamic_body(&mut self, entity: Entity, position: Vec3) -> BodyHandle {
        self.insert_body(
            entity,
            RigidBodyBuilder::dynamic()
                .translation(vector![position.x, position.y, position.z])
                .additional_mass_properties(MassProperties::new(
                    point![0.0, 0.0, 0.0],
                    1.0,
                    vector![0.01, 0.01, 0.01],
                ))
                .can_sleep(false)
                .build(),
        )
    }

    /// Physicalize `entity` as a fixed (immovable) body at `position`.
    pub fn insert_fixed_body(&mut self, entity: Entity, position: Vec3) -> BodyHandle {
        self.insert_body(
            entity,
            RigidBodyBuilder::fixed()
                .translation(vector![position.x, position.y, position.z])
                .build(),
        )
    }

    fn insert_body(&mut self, entity: Entity, body: RigidBody) -> BodyHandle {
        // Re-physicalizing replaces the previous representation.
        self.remove_body(entity);
        let handle = self.rigid_body_set.insert(body);
        self.body_handles.insert(entity, handle);
        BodyHandle(entity)
    }

    /// Remove `entity`'s physical representation.
    ///
    /// Rapier tears down joints attached to the removed body; their ids
    /// are dropped from the constraint map here.
    pub fn remove_body(&mut self, entity: Entity) {
        let Some(handle) = self.body_handles.remove(&entity) else {
            return;
        };
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        );
        let joints = &self.impulse_joint_set;
        self.constraints
            .retain(|_, joint| joints.get(*joint).is_some());
    }

    /// Configure the anchor slot offset for `entity`.
    pub fn set_anchor_slot(&mut self, entity: Entity, translation: Vec3, rotation: Quat) {
        self.anchor_slots.insert(
            entity,
            AnchorSlot {
                local_translation: translation,
                local_rotation: rotation,
            },
        );
    }

    /// Whether an anchor slot exists for `entity`.
    #[must_use]
    pub fn has_anchor(&self, entity: Entity) -> bool {
        self.anchor_slots.contains_key(&entity)
    }

    /// Number of physicalized entities.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.body_handles.len()
    }

    /// Number of live constraints.
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Whether `id` refers to a live constraint.
    #[must_use]
    pub fn contains_constraint(&self, id: ConstraintId) -> bool {
        self.constraints.contains_key(&id)
    }

    /// Joint data backing a constraint, if it is live.
    #[must_use]
    pub fn joint_data(&self, id: ConstraintId) -> Option<&GenericJoint> {
        let handle = self.constraints.get(&id)?;
        self.impulse_joint_set.get(*handle).map(|joint| &joint.data)
    }

    /// The fixed body anchoring world constraints, created on first use.
    pub(crate) fn ensure_world_anchor(&mut self) -> RigidBodyHandle {
        if let Some(handle) = self.world_anchor {
            return handle;
        }
        let handle = self.rigid_body_set.insert(RigidBodyBuilder::fixed().build());
        self.world_anchor = Some(handle);
        handle
    }

    /// Run the physics pipeline for the configured number of substeps.
    pub fn step(&mut self) {
        for _ in 0..self.substeps {
            self.physics_pipeline.step(
                &self.gravity,
                &self.integration_parameters,
                &mut self.island_manager,
                &mut self.broad_phase,
                &mut self.narrow_phase,
                &mut self.rigid_body_set,
                &mut self.collider_set,
                &mut self.impulse_joint_set,
                &mut self.multibody_joint_set,
                &mut self.ccd_solver,
                Some(&mut self.query_pipeline),
                &(),
                &(),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// glam <-> nalgebra conversions
// ---------------------------------------------------------------------------

pub(crate) fn to_isometry(translation: Vec3, rotation: Quat) -> Isometry<Real> {
    Isometry::from_parts(
        vector![translation.x, translation.y, translation.z].into(),
        to_rotation(rotation),
    )
}

pub(crate) fn to_rotation(rotation: Quat) -> Rotation<Real> {
    Rotation::from_quaternion(na::Quaternion::new(
        rotation.w, rotation.x, rotation.y, rotation.z,
    ))
}

pub(crate) fn from_isometry(pose: &Isometry<Real>) -> (Vec3, Quat) {
    let translation = pose.translation.vector;
    let rotation = pose.rotation.quaternion();
    (
        Vec3::new(translation.x, translation.y, translation.z),
        Quat::from_xyzw(rotation.i, rotation.j, rotation.k, rotation.w),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
