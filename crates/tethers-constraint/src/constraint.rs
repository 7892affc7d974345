//! The point-constraint manager component.

use bevy::prelude::*;

use tethers_core::types::{AttachTarget, ConstraintId};
use tethers_physics::backend::ConstraintBackend;
use tethers_physics::params::{Buddy, ConstraintFlags, PointConstraintParams};

use crate::angles::RotationLimits;

/// Largest damping magnitude accepted by [`PointConstraint::set_damping`].
pub const MAX_DAMPING: f32 = 10_000.0;

// ---------------------------------------------------------------------------
// ConstraintState
// ---------------------------------------------------------------------------

/// Lifecycle state of a [`PointConstraint`], derived from its activation
/// flag and handle bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConstraintState {
    /// Deactivated; no constraints may exist.
    #[default]
    Inactive,
    /// Active but unattached (never constrained, or target resolution
    /// failed).
    Unconstrained,
    /// Active with at least one live constraint.
    Constrained,
}

impl ConstraintState {
    /// Returns `true` while at least one constraint is live.
    pub const fn is_constrained(self) -> bool {
        matches!(self, Self::Constrained)
    }

    /// Returns `true` while deactivated.
    pub const fn is_inactive(self) -> bool {
        matches!(self, Self::Inactive)
    }
}

// ---------------------------------------------------------------------------
// PointConstraint
// ---------------------------------------------------------------------------

/// Pins a point on the owning body to another body, or to a fixed point in
/// space, while allowing relative rotation within configured swing limits.
///
/// Parameter edits never touch live constraints; they apply on the next
/// constrain call. Every operation degrades to a silent no-op when the
/// owner has no physical representation yet — constraint setup is often
/// attempted opportunistically during scene loading.
#[derive(Component, Debug, Clone)]
pub struct PointConstraint {
    active: bool,
    axis: Vec3,
    x_limits: RotationLimits,
    yz_limits: RotationLimits,
    damping: f32,
    target: AttachTarget,
    constraint_ids: Vec<ConstraintId>,
}

impl Default for PointConstraint {
    fn default() -> Self {
        Self {
            active: false,
            axis: Vec3::Z,
            x_limits: RotationLimits::default(),
            yz_limits: RotationLimits::default(),
            damping: 0.0,
            target: AttachTarget::World,
            constraint_ids: Vec::new(),
        }
    }
}

impl PointConstraint {
    /// Create a deactivated manager with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the activation flag.
    #[must_use]
    pub const fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builder: set the constraint axis (normalized).
    #[must_use]
    pub fn with_axis(mut self, axis: Vec3) -> Self {
        self.set_axis(axis);
        self
    }

    /// Builder: set the primary-axis swing limits.
    #[must_use]
    pub const fn with_x_limits(mut self, limits: RotationLimits) -> Self {
        self.x_limits = limits;
        self
    }

    /// Builder: set the secondary-axes swing limits.
    #[must_use]
    pub const fn with_yz_limits(mut self, limits: RotationLimits) -> Self {
        self.yz_limits = limits;
        self
    }

    /// Builder: set damping (clamped).
    #[must_use]
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.set_damping(damping);
        self
    }

    /// Builder: set the configured re-attachment target.
    #[must_use]
    pub const fn with_target(mut self, target: AttachTarget) -> Self {
        self.target = target;
        self
    }

    // -- Accessors --

    /// Whether constraints should be (re)established by lifecycle events.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Record the activation intent.
    ///
    /// The manager does not act on the flag itself; the host's lifecycle
    /// dispatch (see [`LifecycleEvent`](crate::events::LifecycleEvent))
    /// establishes or removes constraints on the next re-evaluation.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// The local constraint axis (unit length).
    #[must_use]
    pub const fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Set the constraint axis; the input is normalized. A zero-length
    /// input is ignored.
    pub fn set_axis(&mut self, axis: Vec3) {
        if let Some(unit) = axis.try_normalize() {
            self.axis = unit;
        }
    }

    /// Swing limits around the primary axis.
    #[must_use]
    pub const fn x_limits(&self) -> RotationLimits {
        self.x_limits
    }

    /// Set the primary-axis swing limits.
    pub fn set_x_limits(&mut self, limits: RotationLimits) {
        self.x_limits = limits;
    }

    /// Swing limits around the two secondary axes.
    #[must_use]
    pub const fn yz_limits(&self) -> RotationLimits {
        self.yz_limits
    }

    /// Set the secondary-axes swing limits.
    pub fn set_yz_limits(&mut self, limits: RotationLimits) {
        self.yz_limits = limits;
    }

    /// Rotational damping; 0 means undamped.
    #[must_use]
    pub const fn damping(&self) -> f32 {
        self.damping
    }

    /// Set damping, clamped to ±10000.
    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping.clamp(-MAX_DAMPING, MAX_DAMPING);
    }

    /// The configured re-attachment target.
    #[must_use]
    pub const fn target(&self) -> AttachTarget {
        self.target
    }

    /// Set the re-attachment target used by lifecycle dispatch.
    pub fn set_target(&mut self, target: AttachTarget) {
        self.target = target;
    }

    /// Identifiers of the live constraints, in creation order.
    #[must_use]
    pub fn constraint_ids(&self) -> &[ConstraintId] {
        &self.constraint_ids
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ConstraintState {
        if !self.active {
            ConstraintState::Inactive
        } else if self.constraint_ids.is_empty() {
            ConstraintState::Unconstrained
        } else {
            ConstraintState::Constrained
        }
    }

    // -- Operations --

    /// Constrain the owner to another entity's body.
    ///
    /// A target without a physical representation resolves to "no body"
    /// and the call does nothing.
    pub fn constrain_to_entity(
        &mut self,
        owner: Entity,
        target: Entity,
        disable_collisions: bool,
        backend: &mut dyn ConstraintBackend,
    ) {
        let Some(buddy) = backend.body(target) else {
            debug!(
                "tethers-constraint: target {:?} has no physical body; nothing to constrain",
                target
            );
            return;
        };
        self.constrain(owner, Buddy::Body(buddy), disable_collisions, backend);
    }

    /// Constrain the owner to a fixed point in space.
    pub fn constrain_to_world(&mut self, owner: Entity, backend: &mut dyn ConstraintBackend) {
        self.constrain(owner, Buddy::World, false, backend);
    }

    /// Re-establish against the configured [`AttachTarget`].
    pub fn constrain_to_target(&mut self, owner: Entity, backend: &mut dyn ConstraintBackend) {
        match self.target {
            AttachTarget::World => self.constrain_to_world(owner, backend),
            AttachTarget::Entity {
                target,
                disable_collisions,
            } => self.constrain_to_entity(owner, target, disable_collisions, backend),
        }
    }

    fn constrain(
        &mut self,
        owner: Entity,
        buddy: Buddy,
        disable_collisions: bool,
        backend: &mut dyn ConstraintBackend,
    ) {
        self.remove(owner, backend);

        // The anchor slot is created even when the owner is not yet
        // physicalized, so later transform queries have something to bind
        // to.
        let anchor = backend.anchor_transform(owner);

        let Some(owner_body) = backend.body(owner) else {
            debug!(
                "tethers-constraint: owner {:?} has no physical body; staying unconstrained",
                owner
            );
            return;
        };
        let Some((translation, rotation)) = anchor else {
            debug!(
                "tethers-constraint: owner {:?} has no anchor transform; staying unconstrained",
                owner
            );
            return;
        };

        let frame = rotation * Quat::from_rotation_arc(Vec3::X, self.axis);
        let mut params = PointConstraintParams {
            points: [translation, translation],
            frames: [frame, frame],
            x_limits: self.x_limits.to_radians(),
            yz_limits: self.yz_limits.to_radians(),
            damping: self.damping,
            buddy,
            flags: ConstraintFlags {
                world_frames: true,
                no_tear: true,
                ..ConstraintFlags::default()
            },
        };

        if disable_collisions {
            if let Buddy::Body(buddy_body) = buddy {
                if buddy_body != owner_body {
                    // The pairing must be registered before the joint can
                    // carry load, or a one-frame collision response slips
                    // through.
                    params.flags.ignore_buddy = true;
                    params.flags.inactive = true;
                    let pairing = PointConstraintParams {
                        buddy: Buddy::Body(owner_body),
                        ..params.clone()
                    };
                    backend.add_constraint(buddy_body, &pairing);
                    params.flags.inactive = false;
                }
            }
        }

        if let Some(id) = backend.add_constraint(owner_body, &params) {
            debug!("tethers-constraint: constrained {:?} ({:?})", owner, id);
            self.constraint_ids.push(id);
        }
    }

    /// Tear down every constraint this manager created.
    ///
    /// Handles are discarded even when the owner is no longer
    /// physicalized; the backend invalidates them together with the body.
    /// Calling with an empty handle list is a no-op.
    pub fn remove(&mut self, owner: Entity, backend: &mut dyn ConstraintBackend) {
        for &id in &self.constraint_ids {
            if let Some(body) = backend.body(owner) {
                backend.update_constraint(body, id, true);
            }
        }
        self.constraint_ids.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
