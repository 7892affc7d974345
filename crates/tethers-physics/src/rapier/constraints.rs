//! [`ConstraintBackend`] implementation for [`RapierWorld`].

use bevy::prelude::{debug, Entity, Quat, Vec3};
use rapier3d::prelude::*;

use tethers_core::types::{BodyHandle, ConstraintId};

use crate::backend::ConstraintBackend;
use crate::params::{Buddy, PointConstraintParams};

use super::world::{from_isometry, to_isometry, RapierWorld};

impl ConstraintBackend for RapierWorld {
    fn body(&self, entity: Entity) -> Option<BodyHandle> {
        self.body_handles.contains_key(&entity).then(|| BodyHandle(entity))
    }

    fn anchor_transform(&mut self, entity: Entity) -> Option<(Vec3, Quat)> {
        // The slot is created even when the entity is not physicalized yet.
        let slot = *self.anchor_slots.entry(entity).or_default();
        let handle = *self.body_handles.get(&entity)?;
        let pose = self.rigid_body_set.get(handle)?.position();
        let world = pose * to_isometry(slot.local_translation, slot.local_rotation);
        Some(from_isometry(&world))
    }

    fn add_constraint(
        &mut self,
        body: BodyHandle,
        params: &PointConstraintParams,
    ) -> Option<ConstraintId> {
        let owner = *self.body_handles.get(&body.0)?;
        let buddy = match params.buddy {
            Buddy::World => self.ensure_world_anchor(),
            Buddy::Body(b) => *self.body_handles.get(&b.0)?,
        };

        let joint = build_point_joint(self, owner, buddy, params)?;
        let handle = self.impulse_joint_set.insert(owner, buddy, joint, true);

        let id = ConstraintId(self.next_constraint_id);
        self.next_constraint_id += 1;
        self.constraints.insert(id, handle);
        debug!(
            "tethers-physics: created constraint {:?} on {:?} (buddy: {:?})",
            id, body.0, params.buddy
        );
        Some(id)
    }

    fn update_constraint(&mut self, body: BodyHandle, id: ConstraintId, remove: bool) {
        if !remove {
            return;
        }
        if let Some(handle) = self.constraints.remove(&id) {
            self.impulse_joint_set.remove(handle, true);
            debug!("tethers-physics: removed constraint {:?} on {:?}", id, body.0);
        }
    }

    fn name(&self) -> &str {
        "rapier3d"
    }
}

// ---------------------------------------------------------------------------
// Joint construction
// ---------------------------------------------------------------------------

/// Build the rapier joint realizing a point-constraint request.
///
/// An inactive request locks no axes; the joint exists only to register the
/// contact filter between the pair before the real constraint goes live.
/// Impulse joints cannot separate under load, which already satisfies the
/// no-tear flag.
fn build_point_joint(
    world: &RapierWorld,
    owner: RigidBodyHandle,
    buddy: RigidBodyHandle,
    params: &PointConstraintParams,
) -> Option<GenericJoint> {
    let axes = if params.flags.inactive {
        JointAxesMask::empty()
    } else {
        JointAxesMask::LOCKED_SPHERICAL_AXES
    };

    let [frame1, frame2] = if params.flags.world_frames {
        let owner_pose = world.rigid_body_set.get(owner)?.position();
        let buddy_pose = world.rigid_body_set.get(buddy)?.position();
        [
            owner_pose.inv_mul(&to_isometry(params.points[0], params.frames[0])),
            buddy_pose.inv_mul(&to_isometry(params.points[1], params.frames[1])),
        ]
    } else {
        [
            to_isometry(params.points[0], params.frames[0]),
            to_isometry(params.points[1], params.frames[1]),
        ]
    };

    let mut joint = GenericJointBuilder::new(axes)
        .local_frame1(frame1)
        .local_frame2(frame2)
        .build();
    joint.contacts_enabled = !params.flags.ignore_buddy;

    if !params.flags.inactive {
        joint.set_limits(JointAxis::AngX, params.x_limits);
        joint.set_limits(JointAxis::AngY, params.yz_limits);
        joint.set_limits(JointAxis::AngZ, params.yz_limits);

        if params.damping != 0.0 {
            for axis in [JointAxis::AngX, JointAxis::AngY, JointAxis::AngZ] {
                joint.set_motor(axis, 0.0, 0.0, 0.0, params.damping);
            }
        }
    }

    Some(joint)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
